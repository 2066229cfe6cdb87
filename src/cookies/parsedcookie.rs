//! `Set-Cookie` line parsing and serialization.
//!
//! Modeled after Chromium's `net::ParsedCookie`: a structured view of one
//! header line, before any scoping decision has been made.

use crate::base::cookieerror::CookieError;
use crate::cookies::chars::{is_valid_attr, is_valid_name, is_valid_value};
use std::net::Ipv4Addr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// `Wed, 23 Nov 2011 01:05:03` (RFC 1123, zone handled separately).
const RFC1123: &[BorrowedFormatItem<'_>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second]"
);

/// `Wed, 23-Nov-2011 01:05:03` (Netscape cookie date, zone handled separately).
const NETSCAPE: &[BorrowedFormatItem<'_>] = format_description!(
    "[weekday repr:short], [day]-[month repr:short]-[year] [hour]:[minute]:[second]"
);

/// A cookie as described by a single `Set-Cookie` header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCookie {
    pub name: String,
    pub value: String,
    /// Raw `Domain` attribute, possibly with a leading dot. Empty if absent.
    pub domain: String,
    /// Raw `Path` attribute. Empty if absent.
    pub path: String,
    pub expires: Option<OffsetDateTime>,
    /// Relative expiration in seconds. `0` means no `Max-Age` attribute was
    /// given; negative values stand for `Max-Age=0` (delete now).
    pub max_age: i64,
    pub secure: bool,
    pub http_only: bool,
    /// Attributes the parser does not understand, verbatim and in order.
    pub unparsed: Vec<String>,
}

impl ParsedCookie {
    /// Create a bare `name=value` cookie with no attributes.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Parse a `Set-Cookie` header value.
    ///
    /// For a `Cookie` request header, each semicolon-delimited pair has to be
    /// parsed separately.
    ///
    /// # Example
    /// ```
    /// use chromejar::cookies::parsedcookie::ParsedCookie;
    ///
    /// let cookie = ParsedCookie::parse("sid=abc; Path=/; Max-Age=0; Secure").unwrap();
    /// assert_eq!(cookie.name, "sid");
    /// assert_eq!(cookie.path, "/");
    /// assert_eq!(cookie.max_age, -1);
    /// assert!(cookie.secure);
    /// ```
    pub fn parse(line: &str) -> Result<Self, CookieError> {
        let mut parts = line.split(';');
        let pair = trim(parts.next().unwrap_or_default());

        let (name, value) = pair.split_once('=').ok_or(CookieError::MissingCookieValue)?;

        if !is_valid_name(name) {
            return Err(CookieError::invalid_name(name));
        }
        let value = parse_value(value).ok_or_else(|| CookieError::invalid_value(value))?;

        let mut cookie = ParsedCookie::new(name, value);
        for part in parts {
            cookie.parse_attr(trim(part))?;
        }

        Ok(cookie)
    }

    fn parse_attr(&mut self, raw: &str) -> Result<(), CookieError> {
        // Trailing or doubled separators.
        if raw.is_empty() {
            return Ok(());
        }

        if !is_valid_attr(raw) {
            return Err(CookieError::invalid_attribute(raw));
        }

        let (key, val) = raw.split_once('=').unwrap_or((raw, ""));
        let val = unquote(val);

        match key.to_ascii_lowercase().as_str() {
            "domain" => {
                if !is_valid_domain(val) {
                    return Err(CookieError::InvalidDomainAttribute {
                        value: val.to_string(),
                    });
                }
                self.domain = val.to_string();
            }
            "path" => self.path = val.to_string(),
            "expires" => {
                self.expires = Some(parse_cookie_date(val).ok_or_else(|| {
                    CookieError::InvalidExpires {
                        value: val.to_string(),
                    }
                })?);
            }
            "max-age" => {
                let secs = val
                    .parse::<i64>()
                    .ok()
                    .filter(|n| *n >= 0)
                    .ok_or_else(|| CookieError::InvalidMaxAge {
                        value: val.to_string(),
                    })?;
                self.max_age = if secs == 0 { -1 } else { secs };
            }
            "httponly" => self.http_only = true,
            "secure" => self.secure = true,
            _ => self.unparsed.push(raw.to_string()),
        }

        Ok(())
    }

    /// Serialize the cookie.
    ///
    /// Without attributes this is the `name=value` pair of a `Cookie` request
    /// header; with attributes it is a full `Set-Cookie` value.
    pub fn to_header_string(&self, with_attributes: bool) -> Result<String, CookieError> {
        if !is_valid_name(&self.name) {
            return Err(CookieError::invalid_name(&self.name));
        }
        if !is_valid_value(&self.value) {
            return Err(CookieError::invalid_value(&self.value));
        }

        let mut out = String::with_capacity(self.name.len() + self.value.len() + 1);
        out.push_str(&self.name);
        out.push('=');
        if should_quote_value(&self.value) {
            out.push('"');
            out.push_str(&self.value);
            out.push('"');
        } else {
            out.push_str(&self.value);
        }

        if !with_attributes {
            return Ok(out);
        }

        if !self.domain.is_empty() {
            if !is_valid_domain(&self.domain) {
                return Err(CookieError::InvalidDomainAttribute {
                    value: self.domain.clone(),
                });
            }
            out.push_str("; Domain=");
            out.push_str(&self.domain);
        }

        if !self.path.is_empty() {
            if !is_valid_attr(&self.path) {
                return Err(CookieError::InvalidPathAttribute {
                    value: self.path.clone(),
                });
            }
            out.push_str("; Path=");
            out.push_str(&self.path);
        }

        if let Some(expires) = self.expires.filter(|e| e.unix_timestamp() > 0) {
            out.push_str("; Expires=");
            out.push_str(&format_cookie_date(expires)?);
        }

        if self.max_age > 0 {
            out.push_str("; Max-Age=");
            out.push_str(&self.max_age.to_string());
        } else if self.max_age < 0 {
            out.push_str("; Max-Age=0");
        }

        if self.http_only {
            out.push_str("; HttpOnly");
        }

        if self.secure {
            out.push_str("; Secure");
        }

        for attr in &self.unparsed {
            if !is_valid_attr(attr) {
                return Err(CookieError::invalid_attribute(attr));
            }
            out.push_str("; ");
            out.push_str(attr);
        }

        Ok(out)
    }
}

/// Strip spaces and tabs from both ends.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\t')
}

/// Strip one pair of surrounding double quotes, if present.
fn unquote(raw: &str) -> &str {
    if raw.len() < 2 {
        return raw;
    }
    raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(raw)
}

/// Unwrap an optionally quoted value and check its characters.
fn parse_value(raw: &str) -> Option<&str> {
    let unquoted = unquote(raw);
    is_valid_value(unquoted).then_some(unquoted)
}

/// Values with leading or trailing spaces or commas are sent quoted.
fn should_quote_value(value: &str) -> bool {
    value.starts_with([' ', ',']) || value.ends_with([' ', ','])
}

/// Returns true if `s` is acceptable as a `Domain` attribute: a domain name
/// (optionally with a leading dot) or an IPv4 literal.
fn is_valid_domain(s: &str) -> bool {
    let name = s.strip_prefix('.').unwrap_or(s);
    is_domain_name(name) || name.parse::<Ipv4Addr>().is_ok()
}

/// Returns true if `s` is a valid domain name: letters, digits, `-` and `.`,
/// with non-empty labels of at most 63 bytes, no label starting or ending
/// with `-`, and at least one letter somewhere. Underscores are rejected.
fn is_domain_name(s: &str) -> bool {
    if s.is_empty() || s.len() > 255 {
        return false;
    }

    let mut prev = b'.';
    let mut has_letter = false;
    let mut label_len = 0;

    for c in s.bytes() {
        match c {
            b'a'..=b'z' | b'A'..=b'Z' => {
                has_letter = true;
                label_len += 1;
            }
            b'0'..=b'9' => label_len += 1,
            b'-' => {
                if prev == b'.' {
                    return false;
                }
                label_len += 1;
            }
            b'.' => {
                if prev == b'.' || prev == b'-' || label_len > 63 {
                    return false;
                }
                label_len = 0;
            }
            _ => return false,
        }
        prev = c;
    }

    prev != b'-' && label_len <= 63 && has_letter
}

/// Parse an `Expires` date in RFC 1123 or Netscape format.
///
/// The trailing zone abbreviation must be alphabetic and is treated as UTC,
/// which is what servers mean in practice (`GMT`, `UTC`).
fn parse_cookie_date(s: &str) -> Option<OffsetDateTime> {
    let (stamp, zone) = s.rsplit_once(' ')?;
    if zone.is_empty() || !zone.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    PrimitiveDateTime::parse(stamp, RFC1123)
        .or_else(|_| PrimitiveDateTime::parse(stamp, NETSCAPE))
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Format a date for the `Expires` attribute (RFC 1123, always GMT).
fn format_cookie_date(date: OffsetDateTime) -> Result<String, CookieError> {
    date.to_offset(UtcOffset::UTC)
        .format(RFC1123)
        .map(|s| s + " GMT")
        .map_err(|e| CookieError::InvalidExpires {
            value: e.to_string(),
        })
}
