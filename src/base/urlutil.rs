//! Host canonicalization helpers.
//!
//! Mirrors the host handling in Chromium's `net/base/url_util.cc`: hosts are
//! lowercased, stripped of any port, and converted to their ASCII form so
//! that cookie domains can be compared byte for byte.

use crate::base::cookieerror::CookieError;
use crate::base::punycode;
use std::net::IpAddr;

/// Canonicalize a request host.
///
/// # Example
/// ```
/// use chromejar::base::urlutil::canonicalize_host;
///
/// assert_eq!(canonicalize_host("WWW.Example.COM:8080").unwrap(), "www.example.com");
/// assert_eq!(canonicalize_host("bücher.de").unwrap(), "xn--bcher-kva.de");
/// ```
pub fn canonicalize_host(host: &str) -> Result<String, CookieError> {
    let host = host.to_lowercase();

    let host = if has_port(&host) {
        let (name, _port) = split_host_port(&host)?;
        name
    } else {
        &host
    };

    punycode::to_ascii(host)
}

/// Returns true if `addr` carries a port.
///
/// A single colon always means a port. With more than one colon the address
/// is an IPv6 literal, which only has a port when bracketed and followed by
/// `:port`.
pub fn has_port(addr: &str) -> bool {
    match addr.bytes().filter(|&b| b == b':').count() {
        0 => false,
        1 => true,
        _ => {
            addr.starts_with('[')
                && addr.rfind(':').is_some_and(|i| i > 0 && addr.as_bytes()[i - 1] == b']')
        }
    }
}

/// Split `host:port` or `[host]:port` into host and port.
///
/// The brackets of an IPv6 literal are removed from the returned host.
pub fn split_host_port(addr: &str) -> Result<(&str, &str), CookieError> {
    let fail = |reason: &str| CookieError::canonicalization_failed(addr, reason);

    let last_colon = addr.rfind(':').ok_or_else(|| fail("missing port"))?;

    let host = if addr.starts_with('[') {
        let end = addr.find(']').ok_or_else(|| fail("missing ']'"))?;
        if end + 1 != last_colon {
            return Err(if addr.as_bytes().get(end + 1) == Some(&b':') {
                fail("too many colons")
            } else {
                fail("missing port")
            });
        }
        let host = &addr[1..end];
        if host.contains('[') || addr[end + 1..].contains(']') {
            return Err(fail("unexpected bracket"));
        }
        host
    } else {
        let host = &addr[..last_colon];
        if host.contains(':') {
            return Err(fail("too many colons"));
        }
        if addr.contains('[') || addr.contains(']') {
            return Err(fail("unexpected bracket"));
        }
        host
    };

    Ok((host, &addr[last_colon + 1..]))
}

/// Returns true if `host` is an IPv4 or IPv6 literal.
pub fn is_ip(host: &str) -> bool {
    host.parse::<IpAddr>().is_ok()
}

/// Returns true if `s` ends in `"." + suffix`.
///
/// `s == suffix` is not a dot suffix.
pub fn has_dot_suffix(s: &str, suffix: &str) -> bool {
    s.len() > suffix.len()
        && s.ends_with(suffix)
        && s.as_bytes()[s.len() - suffix.len() - 1] == b'.'
}
