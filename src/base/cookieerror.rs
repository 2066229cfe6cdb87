use thiserror::Error;

/// Errors raised while scoping, storing, or parsing cookies.
///
/// Every error is fatal to the single operation that raised it. A failed
/// `set_cookie` never leaves a partially applied change behind.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CookieError {
    // Jar errors
    #[error("Invalid scheme (expected http or https)")]
    InvalidScheme,
    #[error("Domain attribute not allowed for an IP address host")]
    NoHostname,
    #[error("Malformed cookie domain")]
    MalformedDomain,
    #[error("Illegal cookie domain for this host")]
    IllegalDomain,
    #[error("Failed to canonicalize host {host:?}: {reason}")]
    CanonicalizationFailed { host: String, reason: String },
    #[error("Punycode encoding overflow")]
    EncodingOverflow,
    #[error("Invalid URL")]
    InvalidUrl,

    // Codec errors
    #[error("Missing cookie value")]
    MissingCookieValue,
    #[error("Invalid cookie name: {name:?}")]
    InvalidCookieName { name: String },
    #[error("Invalid cookie value: {value:?}")]
    InvalidCookieValue { value: String },
    #[error("Invalid Domain value: {value:?}")]
    InvalidDomainAttribute { value: String },
    #[error("Invalid Path value: {value:?}")]
    InvalidPathAttribute { value: String },
    #[error("Invalid Expires value: {value:?}")]
    InvalidExpires { value: String },
    #[error("Invalid Max-Age value: {value:?}")]
    InvalidMaxAge { value: String },
    #[error("Invalid attribute: {value:?}")]
    InvalidAttribute { value: String },
}

impl CookieError {
    /// Create a canonicalization error for `host`.
    pub fn canonicalization_failed(host: impl Into<String>, reason: impl Into<String>) -> Self {
        CookieError::CanonicalizationFailed {
            host: host.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid cookie name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        CookieError::InvalidCookieName { name: name.into() }
    }

    /// Create an invalid cookie value error.
    pub fn invalid_value(value: impl Into<String>) -> Self {
        CookieError::InvalidCookieValue {
            value: value.into(),
        }
    }

    /// Create an invalid attribute error.
    pub fn invalid_attribute(value: impl Into<String>) -> Self {
        CookieError::InvalidAttribute {
            value: value.into(),
        }
    }

    /// Returns true if the error was raised by the `Set-Cookie` codec rather
    /// than by the jar.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            CookieError::MissingCookieValue
                | CookieError::InvalidCookieName { .. }
                | CookieError::InvalidCookieValue { .. }
                | CookieError::InvalidDomainAttribute { .. }
                | CookieError::InvalidPathAttribute { .. }
                | CookieError::InvalidExpires { .. }
                | CookieError::InvalidMaxAge { .. }
                | CookieError::InvalidAttribute { .. }
        )
    }
}
