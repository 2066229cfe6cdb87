//! Character classes for cookie names, values and attributes.
//!
//! The classes live in a fixed 256-entry table computed at compile time.

const NAME_CHAR: u8 = 1 << 0;
const VALUE_CHAR: u8 = 1 << 1;
const ATTR_CHAR: u8 = 1 << 2;

static CHARS: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut c = 0x20;

    while c < 0x7f {
        let b = c as u8;

        // RFC 2616 token characters.
        if !matches!(
            b,
            b'(' | b')'
                | b'<'
                | b'>'
                | b'@'
                | b','
                | b';'
                | b':'
                | b'\\'
                | b'"'
                | b'/'
                | b'['
                | b']'
                | b'?'
                | b'='
                | b'{'
                | b'}'
                | b' '
                | b'\t'
        ) {
            table[c] |= NAME_CHAR;
        }

        // Spaces and commas are accepted in values, as browsers do.
        if !matches!(b, b'"' | b';' | b'\\') {
            table[c] |= VALUE_CHAR;
        }

        if b != b';' {
            table[c] |= ATTR_CHAR;
        }

        c += 1;
    }

    table
}

fn all_in_class(s: &str, class: u8) -> bool {
    !s.is_empty() && s.bytes().all(|b| CHARS[b as usize] & class != 0)
}

/// Returns true if `s` is a non-empty, valid cookie name.
pub fn is_valid_name(s: &str) -> bool {
    all_in_class(s, NAME_CHAR)
}

/// Returns true if `s` is a non-empty, valid cookie value.
pub fn is_valid_value(s: &str) -> bool {
    all_in_class(s, VALUE_CHAR)
}

/// Returns true if `s` is a non-empty, valid cookie attribute.
pub fn is_valid_attr(s: &str) -> bool {
    all_in_class(s, ATTR_CHAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert!(is_valid_name("foo"));
        assert!(is_valid_name(".ASPXAUTH"));
        assert!(is_valid_name("ASP.NET_SessionId"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("a b"));
        assert!(!is_valid_name("a=b"));
        assert!(!is_valid_name("a\tb"));
        assert!(!is_valid_name("caf\u{e9}"));
    }

    #[test]
    fn test_values() {
        assert!(is_valid_value("a z"));
        assert!(is_valid_value("a,z"));
        assert!(is_valid_value("=bar=baz="));
        assert!(!is_valid_value(""));
        assert!(!is_valid_value("a\"b"));
        assert!(!is_valid_value("a;b"));
        assert!(!is_valid_value("a\\b"));
        assert!(!is_valid_value("a\x7fb"));
    }

    #[test]
    fn test_attributes() {
        assert!(is_valid_attr("Path=/foo bar"));
        assert!(is_valid_attr("x=\"quoted\""));
        assert!(!is_valid_attr(""));
        assert!(!is_valid_attr("a;b"));
        assert!(!is_valid_attr("a\nb"));
    }
}
