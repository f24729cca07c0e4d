//! Deterministic tag coloring.
//!
//! Derives a stable background color from a tag's text, so the same tag
//! renders the same everywhere without storing a palette anywhere.

/// Color used for tags with no letters to derive from.
pub const DEFAULT_TAG_COLOR: &str = "#3c7ee8";

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Letters with strokes above the x-height; each one lightens the color.
const ASCENDERS: &[char] = &['t', 'd', 'b', 'l', 'f', 'h', 'k'];

/// Letters with strokes below the baseline; each one darkens twice as hard.
const DESCENDERS: &[char] = &['q', 'y', 'p', 'g', 'j'];

/// Derive a stable `#rrggbb` color from a tag's text.
///
/// Pure and deterministic: the same input always yields the same color.
/// Tags with no ASCII letters fall back to [`DEFAULT_TAG_COLOR`].
pub fn tag_color(tag: &str) -> String {
    let letters: Vec<char> = tag.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if letters.is_empty() {
        return DEFAULT_TAG_COLOR.to_string();
    }
    let total = letters.len() as f64;

    // Step 1: base hue from where the first letter sits in the alphabet.
    let position = letters[0].to_ascii_lowercase() as u32 - 'a' as u32 + 1;
    let mut hue = position * 360 / 26;

    // Step 2: shift the hue by each letter's raw character code, wrapping
    // as it goes. 'A' shifts by 1 but 'a' by 33, so casing changes the
    // color on purpose.
    for &c in &letters {
        hue = (hue + (c as u32 - 64)) % 360;
    }
    let hue = f64::from(hue);

    // Step 3: saturation rises with the share of consonants.
    let vowels = letters
        .iter()
        .filter(|c| VOWELS.contains(&c.to_ascii_lowercase()))
        .count();
    let consonants = letters.len() - vowels;
    let saturation = (consonants as f64 / total / 0.95 * 100.0).min(100.0);

    // Step 4: luminosity starts mid-scale and drifts with letter shape.
    // Only lowercase letters move it; uppercase ones are neutral.
    let increment = 40.0 / total;
    let mut luminosity = 50.0;
    for &c in &letters {
        if ASCENDERS.contains(&c) {
            luminosity += increment;
        } else if DESCENDERS.contains(&c) {
            luminosity -= 2.0 * increment;
        }
    }
    // Descender-heavy strings can drive this below zero; clamp both ends.
    let luminosity = luminosity.clamp(0.0, 100.0);

    hsl_to_hex(hue, saturation / 100.0, luminosity / 100.0)
}

/// Convert HSL (hue in degrees, saturation and luminosity as 0-1 fractions)
/// to a lowercase `#rrggbb` string.
fn hsl_to_hex(hue: f64, saturation: f64, luminosity: f64) -> String {
    let (r, g, b) = if saturation == 0.0 {
        (luminosity, luminosity, luminosity)
    } else {
        let q = if luminosity < 0.5 {
            luminosity * (1.0 + saturation)
        } else {
            luminosity + saturation - luminosity * saturation
        };
        let p = 2.0 * luminosity - q;
        let h = hue / 360.0;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8
    )
}

/// Standard piecewise hue-to-channel helper for HSL conversion.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
