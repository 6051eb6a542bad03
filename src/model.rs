//! Color models: how an external color type maps onto the HSVA working value.
//!
//! A [`ColorModel`] is what keeps the picker representation-agnostic. Sliders
//! only ever see [`HsvaColor`]; the model converts to and from whatever the
//! host application stores, and decides when two of its colors are "the
//! same" (see [`crate::compare`] for the built-in precisions).

use std::fmt;

use crate::color::{HslaColor, HsvaColor, RgbaColor};
use crate::compare;
use crate::convert;
use crate::error::{Error, Result};

/// Binds an external color type to HSVA conversion and equality.
pub trait ColorModel {
    /// The color type the host application works with.
    type Color: Clone + fmt::Debug;

    /// The color used when the caller supplies none.
    fn default_color(&self) -> Self::Color;

    fn to_hsva(&self, color: &Self::Color) -> HsvaColor;

    fn from_hsva(&self, hsva: &HsvaColor) -> Self::Color;

    /// Whether two colors are visually identical at this model's precision.
    fn equal(&self, first: &Self::Color, second: &Self::Color) -> bool;
}

/// [`RgbaColor`] at the boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbaModel;

impl ColorModel for RgbaModel {
    type Color = RgbaColor;

    fn default_color(&self) -> RgbaColor {
        RgbaColor::opaque(0, 0, 0)
    }

    fn to_hsva(&self, color: &RgbaColor) -> HsvaColor {
        convert::rgba_to_hsva(*color)
    }

    fn from_hsva(&self, hsva: &HsvaColor) -> RgbaColor {
        convert::hsva_to_rgba(*hsva)
    }

    fn equal(&self, first: &RgbaColor, second: &RgbaColor) -> bool {
        compare::equal_rgba(first, second)
    }
}

/// [`HslaColor`] at the boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct HslaModel;

impl ColorModel for HslaModel {
    type Color = HslaColor;

    fn default_color(&self) -> HslaColor {
        HslaColor::new(0.0, 0.0, 0.0, 1.0)
    }

    fn to_hsva(&self, color: &HslaColor) -> HsvaColor {
        convert::hsla_to_hsva(*color)
    }

    fn from_hsva(&self, hsva: &HsvaColor) -> HslaColor {
        convert::hsva_to_hsla(*hsva)
    }

    fn equal(&self, first: &HslaColor, second: &HslaColor) -> bool {
        compare::equal_hsla(first, second)
    }
}

/// [`HsvaColor`] at the boundary; conversions only clamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct HsvaModel;

impl ColorModel for HsvaModel {
    type Color = HsvaColor;

    fn default_color(&self) -> HsvaColor {
        HsvaColor::new(0.0, 0.0, 0.0, 1.0)
    }

    fn to_hsva(&self, color: &HsvaColor) -> HsvaColor {
        color.clamped()
    }

    fn from_hsva(&self, hsva: &HsvaColor) -> HsvaColor {
        hsva.clamped()
    }

    fn equal(&self, first: &HsvaColor, second: &HsvaColor) -> bool {
        compare::equal_hsva(first, second)
    }
}

/// Hex strings at the boundary.
#[derive(Debug, Clone, Copy)]
pub struct HexModel {
    prefixed: bool,
}

impl HexModel {
    /// `prefixed` controls whether emitted strings start with `#`.
    pub fn new(prefixed: bool) -> Self {
        Self { prefixed }
    }
}

impl Default for HexModel {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ColorModel for HexModel {
    type Color = String;

    fn default_color(&self) -> String {
        if self.prefixed { "#000000" } else { "000000" }.to_string()
    }

    fn to_hsva(&self, color: &String) -> HsvaColor {
        convert::hex_to_hsva(color)
    }

    fn from_hsva(&self, hsva: &HsvaColor) -> String {
        convert::hsva_to_hex(*hsva, self.prefixed)
    }

    fn equal(&self, first: &String, second: &String) -> bool {
        compare::equal_hex(first, second)
    }
}

type ToHsva<T> = Box<dyn Fn(&T) -> HsvaColor>;
type FromHsva<T> = Box<dyn Fn(&HsvaColor) -> T>;
type Equal<T> = Box<dyn Fn(&T, &T) -> bool>;

/// A color model assembled from closures, for ad-hoc color types.
///
/// Built with [`FnColorModel::builder`]; every operation is required.
pub struct FnColorModel<T> {
    default_color: T,
    to_hsva: ToHsva<T>,
    from_hsva: FromHsva<T>,
    equal: Equal<T>,
}

impl<T> FnColorModel<T> {
    pub fn builder() -> FnColorModelBuilder<T> {
        FnColorModelBuilder::default()
    }
}

impl<T: fmt::Debug> fmt::Debug for FnColorModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnColorModel")
            .field("default_color", &self.default_color)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + fmt::Debug> ColorModel for FnColorModel<T> {
    type Color = T;

    fn default_color(&self) -> T {
        self.default_color.clone()
    }

    fn to_hsva(&self, color: &T) -> HsvaColor {
        (self.to_hsva)(color)
    }

    fn from_hsva(&self, hsva: &HsvaColor) -> T {
        (self.from_hsva)(hsva)
    }

    fn equal(&self, first: &T, second: &T) -> bool {
        (self.equal)(first, second)
    }
}

/// Collects the parts of a [`FnColorModel`]; `build` fails fast on a gap.
pub struct FnColorModelBuilder<T> {
    default_color: Option<T>,
    to_hsva: Option<ToHsva<T>>,
    from_hsva: Option<FromHsva<T>>,
    equal: Option<Equal<T>>,
}

impl<T> Default for FnColorModelBuilder<T> {
    fn default() -> Self {
        Self {
            default_color: None,
            to_hsva: None,
            from_hsva: None,
            equal: None,
        }
    }
}

impl<T> FnColorModelBuilder<T> {
    pub fn default_color(mut self, color: T) -> Self {
        self.default_color = Some(color);
        self
    }

    pub fn to_hsva(mut self, f: impl Fn(&T) -> HsvaColor + 'static) -> Self {
        self.to_hsva = Some(Box::new(f));
        self
    }

    pub fn from_hsva(mut self, f: impl Fn(&HsvaColor) -> T + 'static) -> Self {
        self.from_hsva = Some(Box::new(f));
        self
    }

    pub fn equal(mut self, f: impl Fn(&T, &T) -> bool + 'static) -> Self {
        self.equal = Some(Box::new(f));
        self
    }

    /// Assemble the model, naming the first missing operation on failure.
    pub fn build(self) -> Result<FnColorModel<T>> {
        let missing = |name| Error::IncompleteColorModel { missing: name };
        Ok(FnColorModel {
            default_color: self.default_color.ok_or_else(|| missing("default_color"))?,
            to_hsva: self.to_hsva.ok_or_else(|| missing("to_hsva"))?,
            from_hsva: self.from_hsva.ok_or_else(|| missing("from_hsva"))?,
            equal: self.equal.ok_or_else(|| missing("equal"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_model_round_trips() {
        let model = RgbaModel;
        let c = RgbaColor::new(209, 97, 28, 1.0);
        assert!(model.equal(&model.from_hsva(&model.to_hsva(&c)), &c));
        assert_eq!(model.default_color(), RgbaColor::opaque(0, 0, 0));
    }

    #[test]
    fn hsla_model_round_trips_at_whole_numbers() {
        let model = HslaModel;
        let c = HslaColor::new(200.0, 60.0, 40.0, 0.5);
        assert!(model.equal(&model.from_hsva(&model.to_hsva(&c)), &c));
    }

    #[test]
    fn hex_model_honours_prefix() {
        let hsva = HsvaColor::new(0.0, 100.0, 100.0, 1.0);
        assert_eq!(HexModel::new(true).from_hsva(&hsva), "#ff0000");
        assert_eq!(HexModel::new(false).from_hsva(&hsva), "ff0000");
        assert_eq!(HexModel::default().default_color(), "#000000");
        assert!(HexModel::default().equal(&"#F00".to_string(), &"ff0000".to_string()));
    }

    #[test]
    fn builder_fails_fast_on_missing_operation() {
        let err = FnColorModel::<u8>::builder()
            .default_color(0)
            .to_hsva(|v| HsvaColor::new(0.0, 0.0, f64::from(*v), 1.0))
            .equal(|a, b| a == b)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::IncompleteColorModel { missing: "from_hsva" });
        assert_eq!(err.to_string(), "color model is missing the `from_hsva` operation");
    }

    #[test]
    fn builder_assembles_working_model() {
        // Grey levels 0..=100 mapped onto value.
        let model = FnColorModel::<u8>::builder()
            .default_color(50)
            .to_hsva(|v| HsvaColor::new(0.0, 0.0, f64::from(*v), 1.0))
            .from_hsva(|hsva| hsva.v.round() as u8)
            .equal(|a, b| a == b)
            .build()
            .unwrap();
        assert_eq!(model.default_color(), 50);
        assert_eq!(model.from_hsva(&model.to_hsva(&73)), 73);
        assert!(format!("{model:?}").starts_with("FnColorModel"));
    }
}
