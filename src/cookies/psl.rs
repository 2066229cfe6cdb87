//! Public Suffix List (PSL) lookup for cookie domain security.
//!
//! The jar never hard-codes suffix data. It asks a [`PublicSuffixList`] for
//! the public suffix of a domain, which keeps the lookup pluggable: tests
//! inject a closure, applications use [`MozillaList`].

use psl::{List, Psl};

/// Returns the public suffix of a domain.
///
/// Implementations return the longest known public suffix of `domain` (for
/// example `"co.uk"` for `"www.example.co.uk"`), or an empty string when
/// nothing is known. The jar tolerates implementations that return a suffix
/// not aligned on a label boundary.
pub trait PublicSuffixList {
    fn public_suffix(&self, domain: &str) -> String;
}

impl<F> PublicSuffixList for F
where
    F: Fn(&str) -> String,
{
    fn public_suffix(&self, domain: &str) -> String {
        self(domain)
    }
}

/// Mozilla's Public Suffix List, compiled in by the `psl` crate.
///
/// Unknown top-level domains fall under the list's implicit `*` rule, so the
/// last label of any name is reported as its suffix.
#[derive(Debug, Clone, Copy, Default)]
pub struct MozillaList;

impl PublicSuffixList for MozillaList {
    fn public_suffix(&self, domain: &str) -> String {
        List.suffix(domain.as_bytes())
            .and_then(|suffix| std::str::from_utf8(suffix.as_bytes()).ok())
            .map(str::to_string)
            .unwrap_or_default()
    }
}
