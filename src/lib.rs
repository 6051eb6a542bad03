//! # floem-colorful
//!
//! A compact HSV color picker for [Floem](https://github.com/lapce/floem):
//! a saturation/value plane, hue strip, optional alpha strip, preset
//! swatches, a hex field, and save/cancel buttons.
//!
//! The picker works on an [`HsvaColor`] internally and talks to the host
//! through a [`ColorModel`], so the bound signal can hold RGBA, HSLA, HSVA,
//! hex strings, or a type of your own. Everything except the views compiles
//! without Floem (`default-features = false`) for use with other toolkits.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_colorful::{PickerOptions, RgbaColor, RgbaModel, color_picker};
//!
//! let color = RwSignal::new(RgbaColor::opaque(59, 130, 246));
//! let options = PickerOptions::new()
//!     .swatches(["#000000", "#FFFFFF", "#FF0000"])
//!     .on_save(|hex| println!("saved {hex}"));
//! // Use `color_picker(RgbaModel, color, options)` in your Floem view tree.
//! ```

pub mod color;
pub mod compare;
pub mod constants;
pub mod convert;
pub mod error;
pub mod interaction;
pub mod manipulation;
pub mod math;
pub mod model;
pub mod picker;
pub mod slider;
pub mod validate;

#[cfg(all(feature = "widgets", feature = "alpha"))]
mod alpha_slider;
#[cfg(feature = "widgets")]
mod checkerboard;
#[cfg(feature = "widgets")]
mod color_picker;
#[cfg(feature = "widgets")]
mod hue_slider;
#[cfg(feature = "widgets")]
mod inputs;
#[cfg(feature = "widgets")]
mod saturation;
#[cfg(feature = "widgets")]
mod surface;
#[cfg(feature = "widgets")]
mod swatches;

pub use color::{HslaColor, HsvaColor, HsvaUpdate, RgbaColor};
pub use error::{Error, Result};
pub use interaction::{Interaction, Interactive};
pub use manipulation::ColorManipulation;
pub use model::{ColorModel, FnColorModel, HexModel, HslaModel, HsvaModel, RgbaModel};
pub use picker::{PickerController, PickerOptions, Swatch, ToggleOption};
pub use slider::SliderKind;

#[cfg(feature = "widgets")]
use std::sync::Once;

#[cfg(feature = "widgets")]
use floem::prelude::*;
#[cfg(feature = "widgets")]
use floem::text::FONT_SYSTEM;

#[cfg(feature = "widgets")]
static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level color picker view.
///
/// The picker reads from and writes to `color` through `model`. External
/// writes to the signal are reflected in the UI unless they describe the
/// color already shown, and user edits are written back only when they
/// change the color as `model` sees it.
#[cfg(feature = "widgets")]
pub fn color_picker<M>(model: M, color: RwSignal<M::Color>, options: PickerOptions) -> impl IntoView
where
    M: ColorModel + 'static,
    M::Color: 'static,
{
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    color_picker::color_picker(model, color, options)
}
