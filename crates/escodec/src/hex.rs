//! Shared hexadecimal lookup table and numeric-escape helpers.

use std::{borrow::Cow, sync::OnceLock};

/// One entry per byte value: empty for ASCII alphanumerics, lowercase hex
/// for everything else. Built exactly once, on first use.
static HEX_TABLE: OnceLock<[String; 256]> = OnceLock::new();

fn hex_table() -> &'static [String; 256] {
    HEX_TABLE.get_or_init(|| {
        std::array::from_fn(|b| {
            if u8::try_from(b).is_ok_and(|b| b.is_ascii_alphanumeric()) {
                String::new()
            } else {
                format!("{b:x}")
            }
        })
    })
}

/// Returns the empty string for ASCII alphanumerics and the lowercase,
/// unpadded hex form of the code point for everything else.
///
/// Code points below 256 are served from the shared table; anything above
/// falls back to direct computation.
#[must_use]
pub fn hex_for_non_alphanumeric(c: char) -> Cow<'static, str> {
    let cp = u32::from(c);
    if cp < 256 {
        Cow::Borrowed(hex_table()[cp as usize].as_str())
    } else {
        Cow::Owned(to_hex(c))
    }
}

/// Lowercase, unpadded base-16 form of the character's code point.
#[must_use]
pub fn to_hex(c: char) -> String {
    format!("{:x}", u32::from(c))
}

/// Unpadded base-8 form of the character's code point.
#[must_use]
pub fn to_octal(c: char) -> String {
    format!("{:o}", u32::from(c))
}

#[cfg(test)]
mod tests {
    use super::{hex_for_non_alphanumeric, to_hex, to_octal};

    #[test]
    fn alphanumerics_map_to_the_empty_string() {
        for c in ('0'..='9').chain('A'..='Z').chain('a'..='z') {
            assert_eq!(hex_for_non_alphanumeric(c), "", "for {c:?}");
        }
    }

    #[test]
    fn every_other_byte_maps_to_lowercase_hex() {
        for b in 0u32..256 {
            let c = char::from_u32(b).unwrap();
            if c.is_ascii_alphanumeric() {
                continue;
            }
            let hex = hex_for_non_alphanumeric(c);
            assert!(!hex.is_empty(), "for byte {b:#x}");
            assert_eq!(hex, format!("{b:x}"));
        }
    }

    #[test]
    fn code_points_past_the_table_fall_back_to_computation() {
        assert_eq!(hex_for_non_alphanumeric('\u{100}'), "100");
        assert_eq!(hex_for_non_alphanumeric('漢'), "6f22");
    }

    #[test]
    fn to_hex_and_to_octal_are_unpadded() {
        assert_eq!(to_hex('\n'), "a");
        assert_eq!(to_hex('<'), "3c");
        assert_eq!(to_octal('<'), "74");
        assert_eq!(to_octal('\n'), "12");
    }

    #[test]
    fn racing_first_access_observes_a_complete_table() {
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    assert_eq!(hex_for_non_alphanumeric('<'), "3c");
                    assert_eq!(hex_for_non_alphanumeric('a'), "");
                    assert_eq!(hex_for_non_alphanumeric('\u{ff}'), "ff");
                });
            }
        });
    }
}
