//! Behavioural, sizing, and styling constants for the picker.

/// Normalized distance an arrow key moves a slider handle.
pub const KEY_STEP: f64 = 0.05;

/// Upper bound on preset swatches; extra presets are dropped.
pub const MAX_SWATCHES: usize = 28;

/// Decimal places alpha is compared at by the built-in color models.
pub const ALPHA_PRECISION: i32 = 3;

/// Decimal places alpha is printed with in `rgba()`/`hsla()` strings.
pub const ALPHA_DISPLAY_PRECISION: i32 = 2;

/// Fallback for unparseable hex digits: fully opaque black.
pub const FALLBACK_CHANNEL: u8 = 0;

/// 1D slider track height
#[cfg(feature = "widgets")]
pub const SLIDER_HEIGHT: f32 = 24.0;

/// Cursor circle radius on the saturation plane
#[cfg(feature = "widgets")]
pub const CURSOR_RADIUS: f64 = 8.0;

/// Thumb radius on 1D sliders
#[cfg(feature = "widgets")]
pub const THUMB_RADIUS: f64 = 10.0;

/// Border radius for slider tracks and swatches
#[cfg(feature = "widgets")]
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
#[cfg(feature = "widgets")]
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
#[cfg(feature = "widgets")]
pub const PADDING: f32 = 8.0;

/// Hex input field width
#[cfg(feature = "widgets")]
pub const HEX_INPUT_WIDTH: f32 = 72.0;

/// Input font size
#[cfg(feature = "widgets")]
pub const INPUT_FONT: f32 = 11.0;

/// Edge length of a swatch button
#[cfg(feature = "widgets")]
pub const SWATCH_SIZE: f32 = 18.0;

/// Side of the square raster the saturation plane is drawn from.
#[cfg(feature = "widgets")]
pub const PLANE_RASTER_SIZE: u32 = 128;

/// Width of the raster the hue strip is drawn from.
#[cfg(feature = "widgets")]
pub const HUE_RASTER_WIDTH: u32 = 360;

/// Checkerboard cell size (for alpha backgrounds)
#[cfg(feature = "widgets")]
pub const CHECKER_CELL: f64 = 5.0;
