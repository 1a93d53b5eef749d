//! Hex parsing, HSL derivation, and the category→color hash (§4.1, §9).
//!
//! The hash recurrence and HSL constants are pinned exactly by the layout
//! spec so that two implementations agree bit-for-bit; this is the one
//! corner of the crate that intentionally hand-rolls math instead of
//! reaching for a color crate (see DESIGN.md).

/// An 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Decimal `"R,G,B"` form used by the LaTeX color macros.
    pub fn to_decimal_string(self) -> String {
        format!("{},{},{}", self.r, self.g, self.b)
    }

    /// `#RRGGBB` hex form.
    pub fn to_hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Fallback color for a `color` field that fails to parse as six hex digits.
pub const DEFAULT_GRAY: Rgb = Rgb {
    r: 128,
    g: 128,
    b: 128,
};

/// Parse a hex color of the form `RRGGBB` or `#RRGGBB`. Returns `None` for
/// anything else (wrong length, non-hex digits).
pub fn parse_hex_color(input: &str) -> Option<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Deterministic category→color hash: `h = 31*h + r + 7*i` over the
/// normalized (uppercased, trimmed) category string, folded into a hue via
/// the golden-angle stride, fixed saturation/lightness.
pub fn category_color(category: &str) -> Rgb {
    let normalized = category.trim().to_uppercase();
    let mut h: i64 = 0;
    for (i, ch) in normalized.chars().enumerate() {
        h = h
            .wrapping_mul(31)
            .wrapping_add(ch as i64)
            .wrapping_add(7 * i as i64);
    }
    let h = h.unsigned_abs();
    let hue = ((h % 360) as f64 * 137.5).rem_euclid(360.0);
    hsl_to_rgb(hue, 0.75, 0.65)
}

/// Resolve a task's display color: explicit hex if present and valid,
/// default gray if present but invalid, otherwise derived from category.
/// The second element is `Some(raw)` only when an explicit color failed to
/// parse, so the caller can surface an `InvalidColor` warning.
pub fn resolve_color(explicit: Option<&str>, category: &str) -> (Rgb, Option<String>) {
    match explicit {
        Some(raw) => match parse_hex_color(raw) {
            Some(rgb) => (rgb, None),
            None => (DEFAULT_GRAY, Some(raw.to_string())),
        },
        None => (category_color(category), None),
    }
}

/// Standard HSL→RGB conversion (hue in degrees, saturation/lightness in `[0,1]`).
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h_prime = hue / 60.0;
    let x = c * (1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs());
    let (r1, g1, b1) = match h_prime as i64 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb {
        r: to_byte(r1),
        g: to_byte(g1),
        b: to_byte(b1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_with_and_without_hash() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(parse_hex_color("00ff00"), Some(Rgb { r: 0, g: 255, b: 0 }));
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("not-a-color"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
    }

    #[test]
    fn resolve_color_falls_back_to_gray_on_parse_failure() {
        let (rgb, warning) = resolve_color(Some("nonsense"), "PROPOSAL");
        assert_eq!(rgb, DEFAULT_GRAY);
        assert_eq!(warning, Some("nonsense".to_string()));
    }

    #[test]
    fn resolve_color_uses_explicit_when_valid() {
        let (rgb, warning) = resolve_color(Some("#112233"), "PROPOSAL");
        assert_eq!(rgb, Rgb { r: 0x11, g: 0x22, b: 0x33 });
        assert_eq!(warning, None);
    }

    #[test]
    fn category_color_is_deterministic() {
        let a = category_color("alpha_core");
        let b = category_color("ALPHA_CORE");
        let c = category_color("  alpha_core  ");
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn category_color_differs_across_categories_in_practice() {
        let a = category_color("PROPOSAL");
        let b = category_color("LAB");
        assert_ne!(a, b);
    }

    #[test]
    fn to_decimal_string_format() {
        let rgb = Rgb { r: 1, g: 2, b: 3 };
        assert_eq!(rgb.to_decimal_string(), "1,2,3");
    }

    #[test]
    fn to_hex_string_format() {
        let rgb = Rgb { r: 255, g: 0, b: 16 };
        assert_eq!(rgb.to_hex_string(), "#FF0010");
    }
}
