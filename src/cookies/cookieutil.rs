//! Domain scoping rules shared by the jar.
//!
//! Mirrors `net/cookies/cookie_util.cc`: validating a `Domain` attribute
//! against the host that set it, and computing the registrable domain a host
//! is bucketed under.

use crate::base::cookieerror::CookieError;
use crate::base::punycode;
use crate::base::urlutil::{has_dot_suffix, is_ip};
use crate::cookies::psl::PublicSuffixList;

/// Validate a cookie's `Domain` attribute for a canonical `host`.
///
/// Returns the domain the cookie is scoped to and whether it is host-only.
/// Without a `Domain` attribute the cookie is host-only for `host`. A
/// `Domain` attribute naming a public suffix is only accepted when it equals
/// the host, and then yields a host-only cookie.
pub fn cookie_domain(
    host: &str,
    domain: &str,
    psl: Option<&dyn PublicSuffixList>,
) -> Result<(String, bool), CookieError> {
    if domain.is_empty() {
        return Ok((host.to_string(), true));
    }

    if is_ip(host) {
        return Err(CookieError::NoHostname);
    }

    // A single leading dot is allowed and ignored.
    let domain = domain.strip_prefix('.').unwrap_or(domain);
    if domain.is_empty() || domain.starts_with('.') || domain.ends_with('.') {
        return Err(CookieError::MalformedDomain);
    }

    let domain = punycode::to_ascii(&domain.to_lowercase())?;

    if let Some(psl) = psl {
        let suffix = psl.public_suffix(&domain);
        if !suffix.is_empty() && !has_dot_suffix(&domain, &suffix) {
            if host == domain {
                return Ok((domain, true));
            }
            return Err(CookieError::IllegalDomain);
        }
    }

    // The cookie may only be set for the host itself or one of its parents.
    if host != domain && !has_dot_suffix(host, &domain) {
        return Err(CookieError::IllegalDomain);
    }

    Ok((domain, false))
}

/// Compute the bucket key for `host`: its registrable domain.
///
/// For example `"example.com"` for `"foo.bar.example.com"`. IP literals are
/// their own root. Returns an empty string when no suffix list is configured
/// or the list reports a suffix that does not sit on a label boundary.
pub fn domain_root(host: &str, psl: Option<&dyn PublicSuffixList>) -> String {
    if is_ip(host) {
        return host.to_string();
    }

    let Some(psl) = psl else {
        return String::new();
    };

    let suffix = psl.public_suffix(host);
    if suffix == host {
        return host.to_string();
    }

    // Guard against bad list implementations.
    if !host.ends_with(suffix.as_str()) {
        return String::new();
    }
    let i = host.len() - suffix.len();
    if i > 0 && host.as_bytes()[i - 1] == b'.' {
        let start = host[..i - 1].rfind('.').map_or(0, |dot| dot + 1);
        return host[start..].to_string();
    }

    String::new()
}
