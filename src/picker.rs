//! The full picker without a UI: sliders, swatches, hex field, toggles, and
//! save/cancel wired around one [`ColorManipulation`].
//!
//! The Floem views are thin shells over [`PickerController`]; anything a host
//! with a different UI toolkit needs is reachable from here.

use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use crate::color::HsvaColor;
use crate::constants;
use crate::convert;
use crate::error::{Error, Result};
use crate::interaction::Interaction;
use crate::manipulation::ColorManipulation;
use crate::model::ColorModel;
use crate::slider::SliderKind;
use crate::validate;

/// A preset color button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub color: String,
    pub title: Option<String>,
}

impl Swatch {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// White swatches need a visible border.
    pub fn is_white(&self) -> bool {
        self.color.eq_ignore_ascii_case("#ffffff") || self.color.eq_ignore_ascii_case("#fff")
    }

    pub fn hsva(&self) -> HsvaColor {
        convert::hex_to_hsva(&self.color)
    }
}

impl From<&str> for Swatch {
    fn from(color: &str) -> Self {
        Self::new(color)
    }
}

impl From<String> for Swatch {
    fn from(color: String) -> Self {
        Self::new(color)
    }
}

/// A labelled checkbox shown under the swatches.
#[derive(Clone)]
pub struct ToggleOption {
    pub label: String,
    is_toggled: Rc<dyn Fn() -> bool>,
    on_toggle: Rc<dyn Fn()>,
}

impl ToggleOption {
    pub fn new(
        label: impl Into<String>,
        is_toggled: impl Fn() -> bool + 'static,
        on_toggle: impl Fn() + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            is_toggled: Rc::new(is_toggled),
            on_toggle: Rc::new(on_toggle),
        }
    }

    pub fn is_toggled(&self) -> bool {
        (self.is_toggled)()
    }

    pub fn toggle(&self) {
        debug!("toggle {:?}", self.label);
        (self.on_toggle)()
    }
}

impl fmt::Debug for ToggleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleOption")
            .field("label", &self.label)
            .field("toggled", &self.is_toggled())
            .finish()
    }
}

/// Everything about a picker besides its color.
#[derive(Clone)]
pub struct PickerOptions {
    swatches: Vec<Swatch>,
    toggles: Vec<ToggleOption>,
    on_save: Option<Rc<dyn Fn(&str)>>,
    on_cancel: Option<Rc<dyn Fn()>>,
    alpha: bool,
    prefixed: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            swatches: Vec::new(),
            toggles: Vec::new(),
            on_save: None,
            on_cancel: None,
            alpha: cfg!(feature = "alpha"),
            prefixed: true,
        }
    }
}

impl fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerOptions")
            .field("swatches", &self.swatches)
            .field("toggles", &self.toggles)
            .field("alpha", &self.alpha)
            .field("prefixed", &self.prefixed)
            .finish_non_exhaustive()
    }
}

impl PickerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset colors; anything past [`constants::MAX_SWATCHES`] is dropped.
    pub fn swatches<S: Into<Swatch>>(mut self, swatches: impl IntoIterator<Item = S>) -> Self {
        self.swatches = swatches.into_iter().map(Into::into).collect();
        if self.swatches.len() > constants::MAX_SWATCHES {
            warn!(
                "{} swatches supplied, keeping the first {}",
                self.swatches.len(),
                constants::MAX_SWATCHES
            );
            self.swatches.truncate(constants::MAX_SWATCHES);
        }
        self
    }

    pub fn toggle(mut self, option: ToggleOption) -> Self {
        self.toggles.push(option);
        self
    }

    /// Called with the `#`-prefixed hex of the current color.
    pub fn on_save(mut self, f: impl Fn(&str) + 'static) -> Self {
        self.on_save = Some(Rc::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl Fn() + 'static) -> Self {
        self.on_cancel = Some(Rc::new(f));
        self
    }

    /// Whether the hex field accepts 4/8-digit forms.
    pub fn alpha(mut self, alpha: bool) -> Self {
        self.alpha = alpha;
        self
    }

    /// Whether the hex field shows a leading `#`. Saving always prefixes.
    pub fn prefixed(mut self, prefixed: bool) -> Self {
        self.prefixed = prefixed;
        self
    }

    pub fn is_prefixed(&self) -> bool {
        self.prefixed
    }

    pub(crate) fn emit_save(&self, hex: &str) {
        debug!("save {hex}");
        if let Some(on_save) = &self.on_save {
            on_save(hex);
        }
    }

    pub(crate) fn emit_cancel(&self) {
        debug!("cancel");
        if let Some(on_cancel) = &self.on_cancel {
            on_cancel();
        }
    }
}

/// One picker instance: the manipulation hook plus its surrounding controls.
pub struct PickerController<M: ColorModel> {
    manipulation: ColorManipulation<M>,
    options: PickerOptions,
}

impl<M: ColorModel> PickerController<M> {
    pub fn new(model: M, color: M::Color, options: PickerOptions) -> Self {
        Self {
            manipulation: ColorManipulation::new(model, color),
            options,
        }
    }

    pub fn manipulation(&self) -> &ColorManipulation<M> {
        &self.manipulation
    }

    pub fn manipulation_mut(&mut self) -> &mut ColorManipulation<M> {
        &mut self.manipulation
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn hsva(&self) -> HsvaColor {
        self.manipulation.hsva()
    }

    /// The current color as `#`-prefixed hex.
    pub fn hex(&self) -> String {
        convert::hsva_to_hex(self.hsva(), true)
    }

    /// The hex field's text for the current color.
    ///
    /// The alpha byte is left out when the field does not accept alpha.
    pub fn hex_field(&self) -> String {
        let mut rgba = convert::hsva_to_rgba(self.hsva());
        if !self.options.alpha {
            rgba.a = 1.0;
        }
        convert::rgba_to_hex(rgba, self.options.prefixed)
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.options.swatches
    }

    pub fn toggles(&self) -> &[ToggleOption] {
        &self.options.toggles
    }

    pub fn accepts_alpha(&self) -> bool {
        self.options.alpha
    }

    /// See [`ColorManipulation::set_color`].
    pub fn set_color(&mut self, color: M::Color) -> bool {
        self.manipulation.set_color(color)
    }

    /// Apply a position reported by one of the sliders.
    pub fn slide(&mut self, kind: SliderKind, interaction: Interaction) -> Option<M::Color> {
        self.manipulation.update(kind.update(interaction))
    }

    /// Jump to the swatch at `index`.
    pub fn apply_swatch(&mut self, index: usize) -> Result<Option<M::Color>> {
        let len = self.options.swatches.len();
        let swatch = self
            .options
            .swatches
            .get(index)
            .ok_or(Error::SwatchOutOfRange { index, len })?;
        debug!("applying swatch {index} ({})", swatch.color);
        let hsva = swatch.hsva();
        Ok(self.manipulation.replace(hsva))
    }

    /// Commit text from the hex field. Invalid text is ignored.
    ///
    /// Without alpha input the current alpha is kept.
    pub fn apply_hex(&mut self, value: &str) -> Option<M::Color> {
        if !validate::valid_hex(value, self.options.alpha) {
            debug!("ignoring invalid hex input {value:?}");
            return None;
        }
        let mut hsva = convert::hex_to_hsva(value);
        if !self.options.alpha {
            hsva.a = self.hsva().a;
        }
        self.manipulation.replace(hsva)
    }

    pub fn save(&self) {
        self.options.emit_save(&self.hex());
    }

    pub fn cancel(&self) {
        self.options.emit_cancel();
    }
}
