//! Foreground selection for colored tag chips.

use crate::error::ColorError;

/// Text color for light backgrounds.
pub const TEXT_BLACK: &str = "#000000";
/// Text color for dark backgrounds.
pub const TEXT_WHITE: &str = "#ffffff";

/// Pick black or white text for a hex background, whichever reads better.
///
/// Accepts `#rrggbb` with or without the leading `#`, in either case.
pub fn readable_text_color(background: &str) -> Result<&'static str, ColorError> {
    let (r, g, b) = parse_hex(background)?;

    // Byte-weighted luminance, deliberately without gamma correction.
    let luminance =
        (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0;
    let contrast_with_black = (luminance + 0.05) / 0.45;
    let contrast_with_white = 1.05 / (luminance + 0.05);

    if contrast_with_black > contrast_with_white {
        Ok(TEXT_BLACK)
    } else {
        Ok(TEXT_WHITE)
    }
}

/// Split a 6-digit hex color into its RGB bytes.
fn parse_hex(color: &str) -> Result<(u8, u8, u8), ColorError> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::MalformedColor(color.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ColorError::MalformedColor(color.to_string()))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_background_gets_white_text() {
        assert_eq!(readable_text_color("#000000").unwrap(), TEXT_WHITE);
    }

    #[test]
    fn test_white_background_gets_black_text() {
        assert_eq!(readable_text_color("#ffffff").unwrap(), TEXT_BLACK);
    }

    #[test]
    fn test_default_tag_color_gets_white_text() {
        assert_eq!(readable_text_color("#3c7ee8").unwrap(), TEXT_WHITE);
    }

    #[test]
    fn test_hash_is_optional() {
        assert_eq!(
            readable_text_color("3c7ee8").unwrap(),
            readable_text_color("#3c7ee8").unwrap()
        );
    }

    #[test]
    fn test_uppercase_hex_accepted() {
        assert_eq!(readable_text_color("#3C7EE8").unwrap(), TEXT_WHITE);
    }

    #[test]
    fn test_crossover_between_grays() {
        // The black/white decision flips between these two grays.
        assert_eq!(readable_text_color("#a2a2a2").unwrap(), TEXT_WHITE);
        assert_eq!(readable_text_color("#a3a3a3").unwrap(), TEXT_BLACK);
    }

    #[test]
    fn test_malformed_colors_rejected() {
        for bad in ["", "#fff", "#3c7ee", "#3c7ee8a", "not-a-color", "#gg0000"] {
            let result = readable_text_color(bad);
            assert!(
                matches!(result, Err(ColorError::MalformedColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
