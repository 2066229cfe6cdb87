//! Cookie scoping, storage and parsing.
//!
//! This module provides an RFC 6265 cookie jar:
//!
//! - **Storage**: In-memory jar bucketed by registrable domain ([`CookieMonster`](monster::CookieMonster))
//! - **Scoping**: `Domain` attribute validation and public suffix checks ([`cookieutil`])
//! - **Parsing**: `Set-Cookie` line codec ([`ParsedCookie`](parsedcookie::ParsedCookie))
//! - **Public Suffixes**: Pluggable lookup with a Mozilla list implementation ([`psl`])
//!
//! # Architecture
//!
//! This implementation mirrors Chromium's cookie architecture:
//!
//! | Chromium (C++) | chromejar (Rust) | Responsibility |
//! |----------------|------------------|----------------|
//! | `net::CookieMonster` | [`CookieMonster`](monster::CookieMonster) | Cookie jar with lazy eviction |
//! | `net::CanonicalCookie` | [`CanonicalCookie`](canonicalcookie::CanonicalCookie) | Single stored cookie |
//! | `net::ParsedCookie` | [`ParsedCookie`](parsedcookie::ParsedCookie) | One parsed `Set-Cookie` line |
//! | `net::cookie_util` | [`cookieutil`] | Domain validation and roots |
//!
//! # Storing and reading cookies
//!
//! ```rust
//! use chromejar::cookies::monster::CookieMonster;
//! use time::OffsetDateTime;
//! use url::Url;
//!
//! let jar = CookieMonster::new();
//! let now = OffsetDateTime::now_utc();
//! let url = Url::parse("https://www.example.com/account").unwrap();
//!
//! jar.set_cookie_line_for_url(&url, "sid=abc123; Domain=example.com; Path=/; Secure", now)?;
//!
//! let other = Url::parse("https://shop.example.com/").unwrap();
//! let cookies = jar.cookies_for_url(&other, now)?;
//! assert_eq!(cookies.len(), 1);
//! assert_eq!(cookies[0].value, "abc123");
//! # Ok::<(), chromejar::base::cookieerror::CookieError>(())
//! ```
//!
//! # Chromium References
//!
//! - Cookie monster: `net/cookies/cookie_monster.cc`
//! - Domain rules: `net/cookies/cookie_util.cc`
//! - Line parsing: `net/cookies/parsed_cookie.cc`

pub mod canonicalcookie;
pub mod chars;
pub mod cookieutil;
pub mod monster;
pub mod parsedcookie;
pub mod psl;
