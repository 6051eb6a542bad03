//! Representation-typed color equality.
//!
//! Each predicate compares two colors of one representation after rounding
//! every field to that representation's native precision, so float noise
//! below display precision never counts as a change:
//!
//! | representation | h / s / v / l | r / g / b | alpha |
//! |----------------|---------------|-----------|-------|
//! | RGBA           | –             | exact u8  | 3 decimals |
//! | HSVA, HSLA     | whole numbers | –         | 3 decimals |
//! | hex            | –             | parsed u8 | parsed byte |

use crate::color::{HslaColor, HsvaColor, RgbaColor};
use crate::constants::ALPHA_PRECISION;
use crate::convert::hex_to_rgba;
use crate::math::{round, to_channel};

fn same_alpha(a: f64, b: f64) -> bool {
    round(a, ALPHA_PRECISION) == round(b, ALPHA_PRECISION)
}

fn same_whole(a: f64, b: f64) -> bool {
    round(a, 0) == round(b, 0)
}

/// RGBA equality: channels exact, alpha at [`ALPHA_PRECISION`] decimals.
pub fn equal_rgba(first: &RgbaColor, second: &RgbaColor) -> bool {
    first.r == second.r && first.g == second.g && first.b == second.b && same_alpha(first.a, second.a)
}

/// HSVA equality at whole-number hue/saturation/value.
pub fn equal_hsva(first: &HsvaColor, second: &HsvaColor) -> bool {
    same_whole(first.h, second.h)
        && same_whole(first.s, second.s)
        && same_whole(first.v, second.v)
        && same_alpha(first.a, second.a)
}

/// HSLA equality at whole-number hue/saturation/lightness.
pub fn equal_hsla(first: &HslaColor, second: &HslaColor) -> bool {
    same_whole(first.h, second.h)
        && same_whole(first.s, second.s)
        && same_whole(first.l, second.l)
        && same_alpha(first.a, second.a)
}

/// Hex equality, ignoring case, the `#` prefix, and short-form spelling.
pub fn equal_hex(first: &str, second: &str) -> bool {
    if first.eq_ignore_ascii_case(second) {
        return true;
    }
    let a = hex_to_rgba(first);
    let b = hex_to_rgba(second);
    a.r == b.r && a.g == b.g && a.b == b.b && to_channel(a.a * 255.0) == to_channel(b.a * 255.0)
}
