//! The color-manipulation hook: one picker's HSVA working value, kept in
//! step with the caller's external color.
//!
//! The hook owns an [`HsvaColor`] and remembers the external color it last
//! agreed with. Two things can change it:
//!
//! - [`ColorManipulation::update`]: a slider writes a partial HSVA. The merged
//!   value replaces the working color, and the caller hears about it only if
//!   the external color it maps to actually differs.
//! - [`ColorManipulation::set_color`]: the caller pushes a color. If it equals
//!   what the working color already maps to, nothing happens, which keeps
//!   information the external type cannot hold (the hue of a grey, say) and
//!   stops rounding from bouncing updates back and forth. Otherwise the
//!   working color is re-derived from scratch.

use log::{debug, trace};

use crate::color::{HsvaColor, HsvaUpdate};
use crate::model::ColorModel;

type ChangeCallback<C> = Box<dyn FnMut(&C)>;

pub struct ColorManipulation<M: ColorModel> {
    model: M,
    hsva: HsvaColor,
    color: M::Color,
    on_change: Option<ChangeCallback<M::Color>>,
}

impl<M: ColorModel> ColorManipulation<M> {
    /// Start from `color`, deriving the working HSVA through the model.
    pub fn new(model: M, color: M::Color) -> Self {
        let hsva = model.to_hsva(&color);
        Self {
            model,
            hsva,
            color,
            on_change: None,
        }
    }

    /// Start from the model's default color.
    pub fn with_default(model: M) -> Self {
        let color = model.default_color();
        Self::new(model, color)
    }

    /// Register the change notification.
    pub fn on_change(mut self, callback: impl FnMut(&M::Color) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// The working HSVA value.
    pub fn hsva(&self) -> HsvaColor {
        self.hsva
    }

    /// The last external color the working value agreed with.
    pub fn color(&self) -> &M::Color {
        &self.color
    }

    /// Reconcile with a caller-supplied color. Returns whether the working
    /// HSVA was replaced.
    pub fn set_color(&mut self, color: M::Color) -> bool {
        let derived = self.model.from_hsva(&self.hsva);
        if self.model.equal(&color, &derived) {
            self.color = color;
            return false;
        }
        let hsva = self.model.to_hsva(&color);
        debug!("external color {color:?} changed out of band, working value now {hsva:?}");
        self.hsva = hsva;
        self.color = color;
        true
    }

    /// Merge `update` into the working value.
    ///
    /// Returns (and reports through the change callback) the new external
    /// color, or `None` when it is equal to the previous one.
    pub fn update(&mut self, update: HsvaUpdate) -> Option<M::Color> {
        self.hsva = update.apply(self.hsva);
        let color = self.model.from_hsva(&self.hsva);
        if self.model.equal(&color, &self.color) {
            return None;
        }
        trace!("notify {color:?}");
        self.color = color.clone();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&color);
        }
        Some(color)
    }

    /// Replace the whole working value.
    pub fn replace(&mut self, hsva: HsvaColor) -> Option<M::Color> {
        self.update(HsvaUpdate::from(hsva))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::color::RgbaColor;
    use crate::convert::rgba_to_hsva;
    use crate::model::{HexModel, RgbaModel};

    fn recorded() -> (Rc<RefCell<Vec<RgbaColor>>>, impl FnMut(&RgbaColor) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |c: &RgbaColor| sink.borrow_mut().push(*c))
    }

    #[test]
    fn initial_hsva_comes_from_the_model() {
        let c = RgbaColor::new(34, 91, 161, 1.0);
        let hook = ColorManipulation::new(RgbaModel, c);
        assert_eq!(hook.hsva(), rgba_to_hsva(c));
        assert_eq!(ColorManipulation::with_default(RgbaModel).color(), &RgbaColor::opaque(0, 0, 0));
    }

    #[test]
    fn update_notifies_with_the_external_color() {
        let (seen, sink) = recorded();
        let mut hook = ColorManipulation::new(RgbaModel, RgbaColor::opaque(255, 0, 0)).on_change(sink);
        let emitted = hook.update(HsvaUpdate::new().hue(120.0));
        assert_eq!(emitted, Some(RgbaColor::opaque(0, 255, 0)));
        assert_eq!(*seen.borrow(), vec![RgbaColor::opaque(0, 255, 0)]);
    }

    #[test]
    fn invisible_updates_do_not_notify_but_are_kept() {
        let (seen, sink) = recorded();
        let grey = RgbaColor::opaque(128, 128, 128);
        let mut hook = ColorManipulation::new(RgbaModel, grey).on_change(sink);

        // Hue on a grey does not change the RGB color.
        assert_eq!(hook.update(HsvaUpdate::new().hue(200.0)), None);
        assert!(seen.borrow().is_empty());
        assert_eq!(hook.hsva().h, 200.0);

        // Feeding the same grey back keeps the hue.
        assert!(!hook.set_color(grey));
        assert_eq!(hook.hsva().h, 200.0);

        // Raising saturation now reveals that hue.
        let emitted = hook.update(HsvaUpdate::new().saturation(100.0)).unwrap();
        assert_eq!(emitted, RgbaColor::opaque(0, 85, 128));
    }

    #[test]
    fn out_of_band_color_replaces_working_value() {
        let a = RgbaColor::opaque(209, 97, 28);
        let b = RgbaColor::new(21, 139, 59, 0.5);
        let mut hook = ColorManipulation::new(RgbaModel, a);
        hook.update(HsvaUpdate::new().alpha(0.2));

        assert!(hook.set_color(b));
        assert_eq!(hook.hsva(), rgba_to_hsva(b));
        assert_eq!(hook.color(), &b);
    }

    #[test]
    fn set_color_ignores_float_noise() {
        let mut hook = ColorManipulation::new(RgbaModel, RgbaColor::new(1, 2, 3, 0.3));
        let before = hook.hsva();
        assert!(!hook.set_color(RgbaColor::new(1, 2, 3, 0.30000000000000004)));
        assert_eq!(hook.hsva(), before);
    }

    #[test]
    fn feedback_of_emitted_color_is_a_no_op() {
        let mut hook = ColorManipulation::new(HexModel::default(), "#3b82f6".to_string());
        let emitted = hook.update(HsvaUpdate::new().value(50.0)).unwrap();
        let working = hook.hsva();
        assert!(!hook.set_color(emitted.to_uppercase()));
        assert_eq!(hook.hsva(), working);
    }

    #[test]
    fn replace_swaps_everything() {
        let mut hook = ColorManipulation::with_default(RgbaModel);
        let next = HsvaColor::new(240.0, 100.0, 100.0, 1.0);
        assert_eq!(hook.replace(next), Some(RgbaColor::opaque(0, 0, 255)));
        assert_eq!(hook.hsva(), next);
        assert_eq!(hook.replace(next), None);
    }
}
