//! Legacy `escape()` encoding.
//!
//! The Sonos controller routes on paths produced by the historical
//! ECMAScript `escape()` function rather than URI-component encoding:
//!
//! | Input | Output |
//! |-------|--------|
//! | `A-Z a-z 0-9 @ * _ + - . /` | unchanged |
//! | other UTF-16 code unit `< 0x100` | `%XX` |
//! | any other UTF-16 code unit | `%uXXXX` |
//!
//! Hex digits are uppercase. Characters outside the BMP are emitted as two
//! `%uXXXX` surrogate escapes.

use std::fmt::Write;

fn is_unescaped(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'@' | b'*' | b'_' | b'+' | b'-' | b'.' | b'/')
}

/// Escape `input` the way `escape()` does.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for unit in input.encode_utf16() {
        match u8::try_from(unit) {
            Ok(byte) if is_unescaped(byte) => out.push(char::from(byte)),
            Ok(byte) => {
                let _ = write!(out, "%{byte:02X}");
            }
            Err(_) => {
                let _ = write!(out, "%u{unit:04X}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_leave_alphanumerics_untouched() {
        assert_eq!(escape("Kitchen2"), "Kitchen2");
    }

    #[test]
    fn should_leave_legacy_safe_symbols_untouched() {
        assert_eq!(escape("a@b*c_d+e-f.g/h"), "a@b*c_d+e-f.g/h");
    }

    #[test]
    fn should_escape_space_as_percent_20() {
        assert_eq!(escape("Living Room"), "Living%20Room");
    }

    #[test]
    fn should_escape_reserved_ascii_with_uppercase_hex() {
        assert_eq!(escape("a&b=c?d#e:f"), "a%26b%3Dc%3Fd%23e%3Af");
        assert_eq!(escape("'\""), "%27%22");
    }

    #[test]
    fn should_escape_latin1_as_single_byte() {
        assert_eq!(escape("Café"), "Caf%E9");
        assert_eq!(escape("Küche"), "K%FCche");
    }

    #[test]
    fn should_escape_bmp_as_unicode_escape() {
        assert_eq!(escape("€"), "%u20AC");
        assert_eq!(escape("寝室"), "%u5BDD%u5BA4");
    }

    #[test]
    fn should_escape_astral_as_surrogate_pair() {
        assert_eq!(escape("🎵"), "%uD83C%uDFB5");
    }

    #[test]
    fn should_return_empty_for_empty_input() {
        assert_eq!(escape(""), "");
    }
}
