//! Color value types: device RGBA, HSLA, and the HSVA working model.
//!
//! Every constructor clamps into the documented ranges instead of rejecting
//! input. Conversions between the types live in [`crate::convert`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::error::Error;
use crate::math::clamp;
use crate::validate;

/// An 8-bit RGB color with a real-valued alpha (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl RgbaColor {
    /// Create a color, clamping alpha into 0.0–1.0.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp(a, 0.0, 1.0),
        }
    }

    /// Create a fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::opaque(0, 0, 0)
    }
}

impl FromStr for RgbaColor {
    type Err = Error;

    /// Strict hex parsing: 3, 4, 6, or 8 digits with an optional `#`.
    ///
    /// Use [`convert::hex_to_rgba`] for the lenient, never-failing variant.
    fn from_str(s: &str) -> Result<Self, Error> {
        if validate::valid_hex(s, true) {
            Ok(convert::hex_to_rgba(s))
        } else {
            Err(Error::invalid_hex(s))
        }
    }
}

impl fmt::Display for RgbaColor {
    /// Formats as a `#`-prefixed lowercase hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&convert::rgba_to_hex(*self, true))
    }
}

/// Hue (0–360), saturation and value (0–100), alpha (0–1).
///
/// This is the picker's internal working representation: hue maps onto the
/// hue strip, saturation/value onto the 2D plane, and alpha onto the alpha
/// strip, independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvaColor {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

impl HsvaColor {
    /// Create a color, clamping every field into range.
    ///
    /// Hue is clamped into `[0, 360]`; 360 describes the same color as 0.
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self {
            h: clamp(h, 0.0, 360.0),
            s: clamp(s, 0.0, 100.0),
            v: clamp(v, 0.0, 100.0),
            a: clamp(a, 0.0, 1.0),
        }
    }

    /// Re-apply the range invariants to a value built field by field.
    pub fn clamped(self) -> Self {
        Self::new(self.h, self.s, self.v, self.a)
    }
}

impl Default for HsvaColor {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Hue (0–360), saturation and lightness (0–100), alpha (0–1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslaColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl HslaColor {
    /// Create a color, clamping every field into range.
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: clamp(h, 0.0, 360.0),
            s: clamp(s, 0.0, 100.0),
            l: clamp(l, 0.0, 100.0),
            a: clamp(a, 0.0, 1.0),
        }
    }
}

impl Default for HslaColor {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// A partial HSVA value: only the fields that are `Some` get written.
///
/// Each slider produces one of these; the manipulation hook merges it into the
/// current working color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HsvaUpdate {
    pub h: Option<f64>,
    pub s: Option<f64>,
    pub v: Option<f64>,
    pub a: Option<f64>,
}

impl HsvaUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hue(mut self, h: f64) -> Self {
        self.h = Some(h);
        self
    }

    pub fn saturation(mut self, s: f64) -> Self {
        self.s = Some(s);
        self
    }

    pub fn value(mut self, v: f64) -> Self {
        self.v = Some(v);
        self
    }

    pub fn alpha(mut self, a: f64) -> Self {
        self.a = Some(a);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.h.is_none() && self.s.is_none() && self.v.is_none() && self.a.is_none()
    }

    /// Merge into `base`, producing a new clamped color.
    pub fn apply(&self, base: HsvaColor) -> HsvaColor {
        HsvaColor::new(
            self.h.unwrap_or(base.h),
            self.s.unwrap_or(base.s),
            self.v.unwrap_or(base.v),
            self.a.unwrap_or(base.a),
        )
    }
}

impl From<HsvaColor> for HsvaUpdate {
    fn from(color: HsvaColor) -> Self {
        Self {
            h: Some(color.h),
            s: Some(color.s),
            v: Some(color.v),
            a: Some(color.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_clamp_instead_of_rejecting() {
        let c = HsvaColor::new(-10.0, 140.0, 50.0, 2.0);
        assert_eq!(c, HsvaColor { h: 0.0, s: 100.0, v: 50.0, a: 1.0 });

        let hsla = HslaColor::new(400.0, -1.0, 101.0, -0.5);
        assert_eq!(hsla, HslaColor { h: 360.0, s: 0.0, l: 100.0, a: 0.0 });

        assert_eq!(RgbaColor::new(1, 2, 3, 7.0).a, 1.0);
    }

    #[test]
    fn update_merges_only_present_fields() {
        let base = HsvaColor::new(200.0, 40.0, 60.0, 0.5);
        let merged = HsvaUpdate::new().saturation(80.0).value(120.0).apply(base);
        assert_eq!(merged, HsvaColor::new(200.0, 80.0, 100.0, 0.5));
        assert!(HsvaUpdate::new().is_empty());
        assert_eq!(HsvaUpdate::new().apply(base), base);
    }

    #[test]
    fn full_update_replaces_everything() {
        let base = HsvaColor::new(10.0, 10.0, 10.0, 0.1);
        let next = HsvaColor::new(300.0, 90.0, 20.0, 1.0);
        assert_eq!(HsvaUpdate::from(next).apply(base), next);
    }

    #[test]
    fn rgba_parses_strictly_and_prints_hex() {
        let c: RgbaColor = "#ff8000".parse().unwrap();
        assert_eq!(c, RgbaColor::opaque(255, 128, 0));
        assert_eq!(c.to_string(), "#ff8000");

        let err = "#ff800".parse::<RgbaColor>().unwrap_err();
        assert_eq!(err, Error::invalid_hex("#ff800"));
        assert_eq!(err.to_string(), "invalid hex color: \"#ff800\"");
        assert!("#zzz".parse::<RgbaColor>().is_err());
    }

    #[test]
    fn colors_serialize_with_short_field_names() {
        let json = serde_json::to_string(&RgbaColor::new(1, 2, 3, 0.5)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":0.5}"#);
        let back: HsvaColor = serde_json::from_str(r#"{"h":1.0,"s":2.0,"v":3.0,"a":1.0}"#).unwrap();
        assert_eq!(back, HsvaColor::new(1.0, 2.0, 3.0, 1.0));
    }
}
