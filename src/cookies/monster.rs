use crate::base::cookieerror::CookieError;
use crate::base::urlutil::canonicalize_host;
use crate::cookies::canonicalcookie::{CanonicalCookie, CookiePair};
use crate::cookies::cookieutil::{cookie_domain, domain_root};
use crate::cookies::parsedcookie::ParsedCookie;
use crate::cookies::psl::{MozillaList, PublicSuffixList};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use url::{Host, Url};

/// Cookies of one root, keyed by `domain;path;name`.
type Bucket = HashMap<String, CanonicalCookie>;

/// Shared handle to a public suffix lookup.
pub type SharedSuffixList = Arc<dyn PublicSuffixList + Send + Sync>;

/// Configuration for a [`CookieMonster`].
#[derive(Clone)]
pub struct CookieMonsterConfig {
    /// Public suffix lookup used for domain validation and bucketing.
    /// Without one, every host lands in the same unnamed bucket.
    pub public_suffix_list: Option<SharedSuffixList>,
    /// Return cookies in RFC 6265 order (longest path first, then oldest
    /// first). When disabled, cookies come back in bucket order.
    pub sort_cookies: bool,
}

impl Default for CookieMonsterConfig {
    fn default() -> Self {
        Self {
            public_suffix_list: Some(Arc::new(MozillaList)),
            sort_cookies: true,
        }
    }
}

impl fmt::Debug for CookieMonsterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieMonsterConfig")
            .field("public_suffix_list", &self.public_suffix_list.is_some())
            .field("sort_cookies", &self.sort_cookies)
            .finish()
    }
}

impl CookieMonsterConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom public suffix lookup.
    pub fn public_suffix_list(
        mut self,
        list: impl PublicSuffixList + Send + Sync + 'static,
    ) -> Self {
        self.public_suffix_list = Some(Arc::new(list));
        self
    }

    /// Share an existing public suffix lookup.
    pub fn shared_public_suffix_list(mut self, list: SharedSuffixList) -> Self {
        self.public_suffix_list = Some(list);
        self
    }

    /// Disable public suffix checks and bucketing.
    pub fn without_public_suffix_list(mut self) -> Self {
        self.public_suffix_list = None;
        self
    }

    /// Enable or disable RFC 6265 ordering of returned cookies.
    pub fn sort_cookies(mut self, sort: bool) -> Self {
        self.sort_cookies = sort;
        self
    }
}

/// What `set_cookie` does with a cookie once it has been scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Keep,
    Delete,
}

/// The main entry point for cookie management.
/// Modeled after Chromium's `net::CookieMonster`.
///
/// Cookies are bucketed by root (registrable domain) and keyed within a
/// bucket by `domain;path;name`. Reads and writes evict the expired cookies
/// of the bucket they touch, so both [`set_cookie`](Self::set_cookie) and
/// [`cookies`](Self::cookies) take the single store lock for their whole
/// duration. Clones share the same store.
///
/// # Example
/// ```
/// use chromejar::cookies::monster::CookieMonster;
/// use chromejar::cookies::parsedcookie::ParsedCookie;
/// use time::OffsetDateTime;
///
/// let jar = CookieMonster::new();
/// let now = OffsetDateTime::now_utc();
///
/// let mut cookie = ParsedCookie::new("sid", "abc");
/// cookie.domain = ".example.com".to_string();
/// jar.set_cookie("https", "www.example.com", "/", &cookie, now)?;
///
/// let cookies = jar.cookies("https", "api.example.com", "/", now)?;
/// assert_eq!(cookies[0].name, "sid");
/// # Ok::<(), chromejar::base::cookieerror::CookieError>(())
/// ```
#[derive(Clone)]
pub struct CookieMonster {
    // Store: Map<Root, Map<Key, Cookie>>
    store: Arc<Mutex<HashMap<String, Bucket>>>,
    psl: Option<SharedSuffixList>,
    sort_cookies: bool,
}

impl Default for CookieMonster {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CookieMonster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CookieMonster")
            .field("buckets", &self.bucket_count())
            .field("cookies", &self.total_cookie_count())
            .finish()
    }
}

impl CookieMonster {
    pub fn new() -> Self {
        Self::with_config(CookieMonsterConfig::default())
    }

    pub fn with_config(config: CookieMonsterConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(HashMap::new())),
            psl: config.public_suffix_list,
            sort_cookies: config.sort_cookies,
        }
    }

    fn psl(&self) -> Option<&dyn PublicSuffixList> {
        self.psl.as_deref().map(|list| list as &dyn PublicSuffixList)
    }

    /// Store, overwrite or delete a cookie received from `scheme://host`.
    ///
    /// `Max-Age=0` and an `Expires` date at or before `now` delete any
    /// existing cookie with the same domain, path and name instead of storing
    /// one. Expired cookies of the target bucket are removed first. The cookie path defaults to `/`, whatever the request path, so
    /// `_path` only documents the request the cookie came from.
    pub fn set_cookie(
        &self,
        scheme: &str,
        host: &str,
        _path: &str,
        cookie: &ParsedCookie,
        now: OffsetDateTime,
    ) -> Result<(), CookieError> {
        check_scheme(scheme)?;

        let host = canonicalize_host(host)?;
        let (entry, disposition) = self.make_entry(&host, cookie, now).inspect_err(|e| {
            tracing::debug!(host = %host, name = %cookie.name, error = %e, "rejected cookie")
        })?;

        let mut store = self.store.lock();
        let bucket = store.entry(entry.root.clone()).or_default();
        evict_expired(bucket, &entry.root, now);

        match disposition {
            Disposition::Keep => {
                tracing::debug!(
                    host = %host,
                    name = %entry.name,
                    root = %entry.root,
                    "storing cookie"
                );
                bucket.insert(entry.key.clone(), entry);
            }
            Disposition::Delete => {
                if bucket.remove(&entry.key).is_some() {
                    tracing::debug!(
                        host = %host,
                        name = %entry.name,
                        root = %entry.root,
                        "deleted cookie"
                    );
                }
                if bucket.is_empty() {
                    tracing::trace!(root = %entry.root, "dropping empty bucket");
                    store.remove(&entry.root);
                }
            }
        }

        Ok(())
    }

    /// Scope a parsed cookie for `host` and decide whether it is kept.
    fn make_entry(
        &self,
        host: &str,
        cookie: &ParsedCookie,
        now: OffsetDateTime,
    ) -> Result<(CanonicalCookie, Disposition), CookieError> {
        let (domain, host_only) = cookie_domain(host, &cookie.domain, self.psl())?;

        // Ignore invalid paths.
        let path = if cookie.path.starts_with('/') {
            cookie.path.clone()
        } else {
            "/".to_string()
        };

        // Max-Age takes precedence over Expires.
        let (expiration_time, disposition) = if cookie.max_age < 0 {
            (None, Disposition::Delete)
        } else if cookie.max_age > 0 {
            let expiry = now
                .checked_add(Duration::seconds(cookie.max_age))
                .unwrap_or_else(|| PrimitiveDateTime::MAX.assume_utc());
            (Some(expiry), Disposition::Keep)
        } else {
            match cookie.expires {
                Some(expires) if expires > now => (Some(expires), Disposition::Keep),
                Some(_) => (None, Disposition::Delete),
                None => (None, Disposition::Keep),
            }
        };

        let entry = CanonicalCookie {
            root: domain_root(host, self.psl()),
            key: CanonicalCookie::make_key(&domain, &path, &cookie.name),
            name: cookie.name.clone(),
            value: cookie.value.clone(),
            domain,
            path,
            creation_time: now,
            expiration_time,
            secure: cookie.secure,
            http_only: cookie.http_only,
            host_only,
        };

        Ok((entry, disposition))
    }

    /// Get the cookies relevant for a request to `scheme://host/path`.
    ///
    /// Expired cookies found in the host's bucket are removed on the way.
    pub fn cookies(
        &self,
        scheme: &str,
        host: &str,
        path: &str,
        now: OffsetDateTime,
    ) -> Result<Vec<CookiePair>, CookieError> {
        check_scheme(scheme)?;

        let host = canonicalize_host(host)?;
        let root = domain_root(&host, self.psl());

        let mut store = self.store.lock();
        let Some(bucket) = store.get_mut(&root) else {
            return Ok(Vec::new());
        };

        evict_expired(bucket, &root, now);

        // Remove the bucket if it's now empty.
        if bucket.is_empty() {
            tracing::trace!(root = %root, "dropping empty bucket");
            store.remove(&root);
            return Ok(Vec::new());
        }

        let mut selected: Vec<&CanonicalCookie> = bucket
            .values()
            .filter(|cookie| cookie.should_send(scheme, &host, path))
            .collect();

        if self.sort_cookies {
            // Sort by path length (longest first) then creation time
            selected.sort_by(|a, b| {
                b.path
                    .len()
                    .cmp(&a.path.len())
                    .then_with(|| a.creation_time.cmp(&b.creation_time))
                    .then_with(|| a.key.cmp(&b.key))
            });
        }

        Ok(selected.into_iter().map(CookiePair::from).collect())
    }

    /// Parse a `Set-Cookie` line received in response to `url` and store it.
    pub fn set_cookie_line_for_url(
        &self,
        url: &Url,
        cookie_line: &str,
        now: OffsetDateTime,
    ) -> Result<(), CookieError> {
        check_scheme(url.scheme())?;
        let host = url_host(url)?;
        let cookie = ParsedCookie::parse(cookie_line)?;

        self.set_cookie(url.scheme(), &host, url.path(), &cookie, now)
    }

    /// Get the cookies relevant for a request to `url`.
    pub fn cookies_for_url(
        &self,
        url: &Url,
        now: OffsetDateTime,
    ) -> Result<Vec<CookiePair>, CookieError> {
        check_scheme(url.scheme())?;
        let host = url_host(url)?;

        self.cookies(url.scheme(), &host, url.path(), now)
    }

    /// Get total cookie count, expired cookies not yet evicted included.
    pub fn total_cookie_count(&self) -> usize {
        self.store.lock().values().map(Bucket::len).sum()
    }

    /// Number of non-empty buckets.
    pub fn bucket_count(&self) -> usize {
        self.store.lock().len()
    }

    /// Clear all cookies.
    pub fn clear(&self) {
        self.store.lock().clear();
    }

    /// Snapshot of every stored cookie, in no particular order.
    pub fn all_cookies(&self) -> Vec<CanonicalCookie> {
        self.store
            .lock()
            .values()
            .flat_map(|bucket| bucket.values().cloned())
            .collect()
    }
}

/// Remove every cookie of `bucket` that has expired at `now`.
fn evict_expired(bucket: &mut Bucket, root: &str, now: OffsetDateTime) {
    bucket.retain(|_, cookie| {
        let expired = cookie.is_expired(now);
        if expired {
            tracing::trace!(root = %root, key = %cookie.key, "evicting expired cookie");
        }
        !expired
    });
}

fn check_scheme(scheme: &str) -> Result<(), CookieError> {
    match scheme {
        "http" | "https" => Ok(()),
        _ => Err(CookieError::InvalidScheme),
    }
}

/// Host of `url` as the jar expects it: IPv6 literals without brackets.
fn url_host(url: &Url) -> Result<String, CookieError> {
    match url.host() {
        Some(Host::Domain(domain)) => Ok(domain.to_string()),
        Some(Host::Ipv4(addr)) => Ok(addr.to_string()),
        Some(Host::Ipv6(addr)) => Ok(addr.to_string()),
        None => Err(CookieError::InvalidUrl),
    }
}
