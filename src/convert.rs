//! Color conversions between RGBA, HSVA, HSLA, and hex strings.
//!
//! All functions are total. Math runs in `f64`; results are rounded only
//! where an integer representation is emitted (8-bit channels and display
//! strings). Hex parsing never fails: digits that cannot be read fall
//! back to opaque black for that part of the color.

use crate::color::{HslaColor, HsvaColor, RgbaColor};
use crate::constants;
use crate::math::{round, to_channel};

/// RGBA → HSVA.
///
/// Hue is taken from the dominant channel with a 60° sector offset.
/// Achromatic colors (`max == min`) get `h = 0, s = 0`.
pub fn rgba_to_hsva(color: RgbaColor) -> HsvaColor {
    let r = f64::from(color.r);
    let g = f64::from(color.g);
    let b = f64::from(color.b);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    HsvaColor::new(
        sector * 60.0,
        if max == 0.0 { 0.0 } else { delta / max * 100.0 },
        max / 255.0 * 100.0,
        color.a,
    )
}

/// HSVA → RGBA.
///
/// Hue 360 wraps onto sector 0, so `h = 0` and `h = 360` give the same color.
pub fn hsva_to_rgba(color: HsvaColor) -> RgbaColor {
    let color = color.clamped();
    let h = color.h / 60.0;
    let s = color.s / 100.0;
    let v = color.v / 100.0;

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as u32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    RgbaColor::new(
        to_channel(r * 255.0),
        to_channel(g * 255.0),
        to_channel(b * 255.0),
        color.a,
    )
}

/// HSLA → HSVA.
pub fn hsla_to_hsva(color: HslaColor) -> HsvaColor {
    let l = color.l;
    let s = color.s * l.min(100.0 - l) / 100.0;
    let v = l + s;
    let s_hsv = if s > 0.0 { 2.0 * s / (l + s) * 100.0 } else { 0.0 };
    HsvaColor::new(color.h, s_hsv, v, color.a)
}

/// HSVA → HSLA.
pub fn hsva_to_hsla(color: HsvaColor) -> HslaColor {
    let color = color.clamped();
    // Twice the lightness, in percent.
    let l2 = (200.0 - color.s) * color.v / 100.0;
    let s = if l2 > 0.0 && l2 < 200.0 {
        color.s * color.v / 100.0 / (if l2 <= 100.0 { l2 } else { 200.0 - l2 }) * 100.0
    } else {
        0.0
    };
    HslaColor::new(color.h, s, l2 / 2.0, color.a)
}

/// Parse a hex color leniently.
///
/// Accepts 3/4/6/8 digits with or without `#`, in any case. Short forms are
/// expanded by duplicating each digit. Unreadable channels become 0 and an
/// unreadable alpha becomes 1.
pub fn hex_to_rgba(hex: &str) -> RgbaColor {
    let trimmed = hex.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() < 6 {
        let nibble = |i: usize| hex_value(digits.get(i..=i)).map(|d| d * 17);
        let alpha = if digits.len() == 4 { nibble(3) } else { None };
        return assemble(nibble(0), nibble(1), nibble(2), alpha);
    }

    let byte = |i: usize| hex_value(digits.get(i..i + 2));
    let alpha = if digits.len() == 8 { byte(6) } else { None };
    assemble(byte(0), byte(2), byte(4), alpha)
}

fn assemble(r: Option<u8>, g: Option<u8>, b: Option<u8>, a: Option<u8>) -> RgbaColor {
    RgbaColor::new(
        r.unwrap_or(constants::FALLBACK_CHANNEL),
        g.unwrap_or(constants::FALLBACK_CHANNEL),
        b.unwrap_or(constants::FALLBACK_CHANNEL),
        a.map_or(1.0, |a| f64::from(a) / 255.0),
    )
}

fn hex_value(digits: Option<&str>) -> Option<u8> {
    let digits = digits?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

/// Format as lowercase long-form hex.
///
/// Emits `rrggbb` for opaque colors and `rrggbbaa` otherwise; `prefixed`
/// controls the leading `#`.
pub fn rgba_to_hex(color: RgbaColor, prefixed: bool) -> String {
    let alpha = to_channel(color.a * 255.0);
    let mut out = String::with_capacity(9);
    if prefixed {
        out.push('#');
    }
    out.push_str(&format!("{:02x}{:02x}{:02x}", color.r, color.g, color.b));
    if alpha < 255 {
        out.push_str(&format!("{:02x}", alpha));
    }
    out
}

/// Hex → HSVA, through [`hex_to_rgba`].
pub fn hex_to_hsva(hex: &str) -> HsvaColor {
    rgba_to_hsva(hex_to_rgba(hex))
}

/// HSVA → hex, through [`hsva_to_rgba`].
pub fn hsva_to_hex(color: HsvaColor, prefixed: bool) -> String {
    rgba_to_hex(hsva_to_rgba(color), prefixed)
}

/// `rgba(r, g, b, a)` with alpha at two decimals.
pub fn hsva_to_rgba_string(color: HsvaColor) -> String {
    let c = hsva_to_rgba(color);
    format!(
        "rgba({}, {}, {}, {})",
        c.r,
        c.g,
        c.b,
        round(c.a, constants::ALPHA_DISPLAY_PRECISION)
    )
}

/// `hsla(h, s%, l%, a)` with whole-number hue/saturation/lightness.
pub fn hsva_to_hsla_string(color: HsvaColor) -> String {
    let c = hsva_to_hsla(color);
    format!(
        "hsla({}, {}%, {}%, {})",
        round(c.h, 0),
        round(c.s, 0),
        round(c.l, 0),
        round(c.a, constants::ALPHA_DISPLAY_PRECISION)
    )
}

/// `hsl(h, s%, l%)`, dropping alpha.
pub fn hsva_to_hsl_string(color: HsvaColor) -> String {
    let c = hsva_to_hsla(color);
    format!(
        "hsl({}, {}%, {}%)",
        round(c.h, 0),
        round(c.s, 0),
        round(c.l, 0)
    )
}

/// `hsva(h, s%, v%, a)` with whole-number hue/saturation/value.
pub fn hsva_to_hsva_string(color: HsvaColor) -> String {
    let c = color.clamped();
    format!(
        "hsva({}, {}%, {}%, {})",
        round(c.h, 0),
        round(c.s, 0),
        round(c.v, 0),
        round(c.a, constants::ALPHA_DISPLAY_PRECISION)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHAS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

    #[test]
    fn rgba_round_trips_through_hsva() {
        for r in (0..=255u16).step_by(5) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(17) {
                    for a in ALPHAS {
                        let c = RgbaColor::new(r as u8, g as u8, b as u8, a);
                        assert_eq!(hsva_to_rgba(rgba_to_hsva(c)), c, "{c:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn every_single_channel_value_round_trips() {
        for v in 0..=255u8 {
            for c in [
                RgbaColor::opaque(v, 0, 0),
                RgbaColor::opaque(0, v, 0),
                RgbaColor::opaque(0, 0, v),
                RgbaColor::opaque(v, v, v),
                RgbaColor::opaque(255 - v, v, 128),
            ] {
                assert_eq!(hsva_to_rgba(rgba_to_hsva(c)), c);
            }
        }
    }

    #[test]
    fn primaries_land_on_their_sectors() {
        assert_eq!(rgba_to_hsva(RgbaColor::opaque(255, 0, 0)).h, 0.0);
        assert_eq!(rgba_to_hsva(RgbaColor::opaque(0, 255, 0)).h, 120.0);
        assert_eq!(rgba_to_hsva(RgbaColor::opaque(0, 0, 255)).h, 240.0);
        assert_eq!(rgba_to_hsva(RgbaColor::opaque(255, 0, 255)).h, 300.0);
        assert_eq!(
            hsva_to_rgba(HsvaColor::new(180.0, 100.0, 100.0, 1.0)),
            RgbaColor::opaque(0, 255, 255)
        );
    }

    #[test]
    fn hue_wraps_around() {
        for (s, v) in [(100.0, 100.0), (40.0, 70.0), (3.0, 12.0)] {
            assert_eq!(
                hsva_to_rgba(HsvaColor::new(0.0, s, v, 1.0)),
                hsva_to_rgba(HsvaColor::new(360.0, s, v, 1.0))
            );
        }
    }

    #[test]
    fn achromatic_colors_ignore_hue() {
        for v in [0.0, 12.5, 50.0, 99.0, 100.0] {
            let grey = (v / 100.0 * 255.0_f64).round() as u8;
            for h in [0.0, 45.0, 200.0, 359.9, 360.0] {
                let c = hsva_to_rgba(HsvaColor::new(h, 0.0, v, 1.0));
                assert_eq!((c.r, c.g, c.b), (grey, grey, grey));
            }
        }
        let hsva = rgba_to_hsva(RgbaColor::opaque(90, 90, 90));
        assert_eq!((hsva.h, hsva.s), (0.0, 0.0));
        let black = rgba_to_hsva(RgbaColor::opaque(0, 0, 0));
        assert_eq!((black.h, black.s, black.v), (0.0, 0.0, 0.0));
    }

    #[test]
    fn hsl_round_trips_within_one_channel_unit() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(51) {
                    let c = RgbaColor::opaque(r as u8, g as u8, b as u8);
                    let hsla = hsva_to_hsla(rgba_to_hsva(c));
                    let back = hsva_to_rgba(hsla_to_hsva(hsla));
                    for (x, y) in [(c.r, back.r), (c.g, back.g), (c.b, back.b)] {
                        assert!(x.abs_diff(y) <= 1, "{c:?} -> {hsla:?} -> {back:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn hsla_of_known_colors() {
        let red = hsva_to_hsla(HsvaColor::new(0.0, 100.0, 100.0, 1.0));
        assert_eq!(red, HslaColor::new(0.0, 100.0, 50.0, 1.0));
        let white = hsva_to_hsla(HsvaColor::new(0.0, 0.0, 100.0, 0.5));
        assert_eq!(white, HslaColor::new(0.0, 0.0, 100.0, 0.5));
        let hsva = hsla_to_hsva(HslaColor::new(120.0, 100.0, 25.0, 1.0));
        assert_eq!(hsva, HsvaColor::new(120.0, 100.0, 50.0, 1.0));
        assert_eq!(hsla_to_hsva(HslaColor::new(0.0, 50.0, 0.0, 1.0)).s, 0.0);
    }

    #[test]
    fn hex_accepts_every_length() {
        assert_eq!(hex_to_rgba("#fff"), RgbaColor::opaque(255, 255, 255));
        assert_eq!(hex_to_rgba("fff"), hex_to_rgba("#fff"));
        assert_eq!(hex_to_rgba("#F0A8"), RgbaColor::new(255, 0, 170, 136.0 / 255.0));
        assert_eq!(hex_to_rgba("1E90FF"), RgbaColor::opaque(30, 144, 255));

        let half = hex_to_rgba("#00000080");
        assert_eq!((half.r, half.g, half.b), (0, 0, 0));
        assert!((half.a - 128.0 / 255.0).abs() < 1e-12);
        assert!((half.a - 0.5019).abs() < 1e-4);
    }

    #[test]
    fn malformed_hex_falls_back_per_part() {
        assert_eq!(hex_to_rgba(""), RgbaColor::opaque(0, 0, 0));
        assert_eq!(hex_to_rgba("#zzzzzz"), RgbaColor::opaque(0, 0, 0));
        assert_eq!(hex_to_rgba("#ffzz00"), RgbaColor::opaque(255, 0, 0));
        assert_eq!(hex_to_rgba("#ff0000zz"), RgbaColor::opaque(255, 0, 0));
        assert_eq!(hex_to_rgba("#f"), RgbaColor::opaque(255, 0, 0));
        assert_eq!(hex_to_rgba("+f+f+f"), RgbaColor::opaque(0, 0, 0));
        assert_eq!(hex_to_rgba("éé"), RgbaColor::opaque(0, 0, 0));
    }

    #[test]
    fn hex_output_is_long_lowercase() {
        let c = RgbaColor::opaque(171, 205, 239);
        assert_eq!(rgba_to_hex(c, false), "abcdef");
        assert_eq!(rgba_to_hex(c, true), "#abcdef");
        assert_eq!(rgba_to_hex(hex_to_rgba("#ABC"), true), "#aabbcc");
        assert_eq!(rgba_to_hex(RgbaColor::new(0, 0, 0, 0.5), true), "#00000080");
        assert_eq!(rgba_to_hex(hex_to_rgba("#12345678"), false), "12345678");
    }

    #[test]
    fn display_strings_round_to_whole_numbers() {
        let c = HsvaColor::new(210.4, 50.6, 80.2, 0.3333);
        assert_eq!(hsva_to_hsva_string(c), "hsva(210, 51%, 80%, 0.33)");
        assert_eq!(
            hsva_to_rgba_string(HsvaColor::new(0.0, 100.0, 100.0, 0.5)),
            "rgba(255, 0, 0, 0.5)"
        );
        assert_eq!(
            hsva_to_hsla_string(HsvaColor::new(120.0, 100.0, 50.0, 1.0)),
            "hsla(120, 100%, 25%, 1)"
        );
        assert_eq!(
            hsva_to_hsl_string(HsvaColor::new(240.0, 100.0, 100.0, 0.2)),
            "hsl(240, 100%, 50%)"
        );
    }
}
