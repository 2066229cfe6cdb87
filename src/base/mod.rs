//! Base types and error handling.
//!
//! Provides foundational types mirroring Chromium's `net/base/`:
//! - [`CookieError`](cookieerror::CookieError): error kinds for the jar and the codec
//! - [`punycode`]: RFC 3492 encoding of internationalized labels
//! - [`urlutil`]: host canonicalization helpers

pub mod cookieerror;
pub mod punycode;
pub mod urlutil;
