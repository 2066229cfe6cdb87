//! Punycode (RFC 3492) encoding of internationalized domain labels.
//!
//! Cookie domains are compared in their ASCII form, so every non-ASCII label
//! of a host has to be turned into its ASCII-Compatible Encoding (`xn--...`)
//! before any matching happens. Only encoding is needed; the jar never has to
//! decode labels.

use crate::base::cookieerror::CookieError;

const BASE: i32 = 36;
const DAMP: i32 = 700;
const SKEW: i32 = 38;
const TMAX: i32 = 26;
const TMIN: i32 = 1;

const INITIAL_BIAS: i32 = 72;
const INITIAL_N: i32 = 128;

/// ASCII-Compatible Encoding prefix.
const ACE_PREFIX: &str = "xn--";

/// Convert a domain (or a single label) to its ASCII form.
///
/// Labels that are already ASCII pass through unchanged, so a fully ASCII
/// domain is returned as-is.
pub fn to_ascii(domain: &str) -> Result<String, CookieError> {
    if domain.is_ascii() {
        return Ok(domain.to_string());
    }

    let labels = domain
        .split('.')
        .map(|label| {
            if label.is_ascii() {
                Ok(label.to_string())
            } else {
                encode(label)
            }
        }).collect::<Result<Vec<_>, _>>()?;

    Ok(labels.join("."))
}

/// Encode one domain label with punycode, prefixed with `xn--`.
///
/// The label is encoded even if it is pure ASCII; callers that want ASCII
/// labels untouched should go through [`to_ascii`].
///
/// # Example
/// ```
/// use chromejar::base::punycode::encode;
///
/// assert_eq!(encode("bücher").unwrap(), "xn--bcher-kva");
/// ```
pub fn encode(label: &str) -> Result<String, CookieError> {
    let input: Vec<i32> = label.chars().map(|c| c as i32).collect();

    let mut output = String::with_capacity(ACE_PREFIX.len() + label.len() * 2);
    output.push_str(ACE_PREFIX);

    // Basic code points are copied in order.
    output.extend(label.chars().filter(char::is_ascii));
    let basic = input.iter().filter(|&&c| c < 0x80).count() as i32;
    if basic > 0 {
        output.push('-');
    }

    let mut n = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut delta: i32 = 0;
    let mut handled = basic;
    let total = input.len() as i32;

    while handled < total {
        // Every remaining code point is >= n, so a minimum always exists.
        let m = input
            .iter()
            .copied()
            .filter(|&c| c >= n)
            .min()
            .ok_or(CookieError::EncodingOverflow)?;

        delta = (m - n)
            .checked_mul(handled + 1)
            .and_then(|d| delta.checked_add(d))
            .ok_or(CookieError::EncodingOverflow)?;
        n = m;

        for &c in &input {
            if c < n {
                delta = delta.checked_add(1).ok_or(CookieError::EncodingOverflow)?;
                continue;
            }
            if c > n {
                continue;
            }

            let mut q = delta;
            let mut k = BASE;
            loop {
                let t = (k - bias).clamp(TMIN, TMAX);
                if q < t {
                    break;
                }
                output.push(encode_digit(t + (q - t) % (BASE - t)));
                q = (q - t) / (BASE - t);
                k += BASE;
            }
            output.push(encode_digit(q));

            bias = adapt(delta, handled + 1, handled == basic);
            delta = 0;
            handled += 1;
        }

        delta = delta.checked_add(1).ok_or(CookieError::EncodingOverflow)?;
        n += 1;
    }

    Ok(output)
}

/// Map a digit value (0..36) to `a`-`z` then `0`-`9`.
fn encode_digit(digit: i32) -> char {
    debug_assert!((0..BASE).contains(&digit));
    if digit < 26 {
        (b'a' + digit as u8) as char
    } else {
        (b'0' + (digit - 26) as u8) as char
    }
}

/// Bias adaptation function, RFC 3492 section 6.1.
fn adapt(mut delta: i32, points: i32, first: bool) -> i32 {
    delta /= if first { DAMP } else { 2 };
    delta += delta / points;

    let mut k = 0;
    while delta > ((BASE - TMIN) * TMAX) / 2 {
        delta /= BASE - TMIN;
        k += BASE;
    }

    k + (BASE - TMIN + 1) * delta / (delta + SKEW)
}
