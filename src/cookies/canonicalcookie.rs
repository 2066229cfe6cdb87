use time::OffsetDateTime;

/// A cookie as stored in the jar.
/// Modeled after Chromium's `net::CanonicalCookie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie {
    /// Bucket key: registrable domain, IP literal, or empty string.
    pub root: String,
    /// `domain;path;name`, unique within a bucket.
    pub key: String,
    pub name: String,
    pub value: String,
    /// Lowercase ASCII domain the cookie is scoped to.
    pub domain: String,
    pub path: String,
    pub creation_time: OffsetDateTime,
    /// `None` for session cookies.
    pub expiration_time: Option<OffsetDateTime>,
    pub secure: bool,
    pub http_only: bool,
    pub host_only: bool,
}

/// The name and value of a cookie selected for a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CookiePair {
    pub name: String,
    pub value: String,
}

impl CookiePair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<&CanonicalCookie> for CookiePair {
    fn from(cookie: &CanonicalCookie) -> Self {
        Self::new(&cookie.name, &cookie.value)
    }
}

impl CanonicalCookie {
    /// Build the uniqueness key of a cookie within its bucket.
    pub fn make_key(domain: &str, path: &str, name: &str) -> String {
        format!("{};{};{}", domain, path, name)
    }

    /// A cookie is expired once its expiration time is at or before `now`.
    /// Session cookies never expire by time.
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expiration_time.is_some_and(|expiry| expiry <= now)
    }

    /// Returns true if the cookie is relevant for a request to the scheme,
    /// canonical host and path combination.
    pub fn should_send(&self, scheme: &str, host: &str, path: &str) -> bool {
        if self.secure && scheme != "https" {
            return false;
        }

        self.domain_matches(host) && self.path_matches(path)
    }

    /// RFC 6265 domain matching.
    pub fn domain_matches(&self, host: &str) -> bool {
        if self.domain == host {
            return true;
        }

        !self.host_only && crate::base::urlutil::has_dot_suffix(host, &self.domain)
    }

    /// RFC 6265 path matching.
    pub fn path_matches(&self, request_path: &str) -> bool {
        if request_path == self.path {
            return true;
        }

        let Some(rest) = request_path.strip_prefix(self.path.as_str()) else {
            return false;
        };

        self.path.ends_with('/') || rest.starts_with('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn make_test_cookie(domain: &str, path: &str, host_only: bool) -> CanonicalCookie {
        CanonicalCookie {
            root: "example.com".to_string(),
            key: CanonicalCookie::make_key(domain, path, "name"),
            name: "name".to_string(),
            value: "value".to_string(),
            domain: domain.to_string(),
            path: path.to_string(),
            creation_time: datetime!(2024-01-01 00:00 UTC),
            expiration_time: None,
            secure: false,
            http_only: false,
            host_only,
        }
    }

    #[test]
    fn test_make_key() {
        assert_eq!(
            CanonicalCookie::make_key("example.com", "/foo", "sid"),
            "example.com;/foo;sid"
        );
    }

    #[test]
    fn test_is_expired() {
        let now = datetime!(2024-06-01 12:00 UTC);
        let mut cookie = make_test_cookie("example.com", "/", true);
        assert!(!cookie.is_expired(now));

        cookie.expiration_time = Some(now);
        assert!(cookie.is_expired(now));

        cookie.expiration_time = Some(now + time::Duration::seconds(1));
        assert!(!cookie.is_expired(now));
    }

    #[test]
    fn test_host_only_domain_match() {
        let cookie = make_test_cookie("example.com", "/", true);
        assert!(cookie.should_send("https", "example.com", "/"));
        assert!(!cookie.should_send("https", "www.example.com", "/"));
    }

    #[test]
    fn test_domain_cookie_match() {
        let cookie = make_test_cookie("example.com", "/", false);
        assert!(cookie.should_send("https", "example.com", "/"));
        assert!(cookie.should_send("https", "www.example.com", "/"));
        assert!(cookie.should_send("https", "a.b.example.com", "/"));
        assert!(!cookie.should_send("https", "notexample.com", "/"));
        assert!(!cookie.should_send("https", "com", "/"));
    }

    #[test]
    fn test_path_match() {
        let cookie = make_test_cookie("example.com", "/foo", true);
        assert!(cookie.path_matches("/foo"));
        assert!(cookie.path_matches("/foo/"));
        assert!(cookie.path_matches("/foo/bar"));
        assert!(!cookie.path_matches("/foobar"));
        assert!(!cookie.path_matches("/"));
        assert!(!cookie.path_matches("/fo"));

        let cookie = make_test_cookie("example.com", "/foo/", true);
        assert!(cookie.path_matches("/foo/bar"));
        assert!(!cookie.path_matches("/foo"));
    }

    #[test]
    fn test_secure_requires_https() {
        let mut cookie = make_test_cookie("example.com", "/", true);
        cookie.secure = true;
        assert!(cookie.should_send("https", "example.com", "/"));
        assert!(!cookie.should_send("http", "example.com", "/"));
    }

    #[test]
    fn test_cookie_pair_from_cookie() {
        let cookie = make_test_cookie("example.com", "/", true);
        assert_eq!(CookiePair::from(&cookie), CookiePair::new("name", "value"));
    }
}
