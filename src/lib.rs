//! # chromejar
//!
//! A Chromium-inspired RFC 6265 cookie jar for Rust.
//!
//! `chromejar` decides under which scope (domain + path) a cookie received
//! from a server is stored, which stored cookies belong on a later request,
//! and when expired cookies are dropped.
//!
//! ## Features
//!
//! - **Domain Scoping**: `Domain` attribute validation with Public Suffix List checks
//! - **Bucketing**: Cookies grouped by registrable domain (eTLD+1)
//! - **IDN Hosts**: Punycode (RFC 3492) host canonicalization
//! - **Lazy Eviction**: Expired cookies removed on the next read of their bucket
//! - **Set-Cookie Codec**: Parsing and serialization of header lines
//!
//! ## Quick Start
//!
//! ```rust
//! use chromejar::cookies::monster::CookieMonster;
//! use chromejar::cookies::parsedcookie::ParsedCookie;
//! use time::OffsetDateTime;
//!
//! let jar = CookieMonster::new();
//! let now = OffsetDateTime::now_utc();
//!
//! let cookie = ParsedCookie::parse("theme=dark; Path=/; Max-Age=3600")?;
//! jar.set_cookie("https", "example.com", "/", &cookie, now)?;
//!
//! let cookies = jar.cookies("https", "example.com", "/settings", now)?;
//! assert_eq!(cookies[0].name, "theme");
//! # Ok::<(), chromejar::base::cookieerror::CookieError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions, punycode and host canonicalization
//! - [`cookies`] - Cookie storage, scoping, and parsing
//!
//! ## Security
//!
//! Domain matching is the security-critical part of a cookie jar:
//! - Public Suffix List validation prevents supercookies on `.com` or `.co.uk`
//! - A `Domain` attribute must name the setting host or one of its parents
//! - Host-only cookies never leak to subdomains
//! - `Secure` cookies are only sent over `https`

pub mod base;
pub mod cookies;
