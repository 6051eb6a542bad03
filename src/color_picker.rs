//! The composed picker: plane, strips, swatches, hex field, toggles, and the
//! save/cancel buttons, all writing through one [`PickerController`].

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use log::warn;
use lucide_icons::Icon;

#[cfg(feature = "alpha")]
use crate::alpha_slider::alpha_slider;
use crate::checkerboard::checkered_chip;
use crate::color::HsvaColor;
use crate::constants;
use crate::convert::hsva_to_rgba;
use crate::hue_slider::hue_slider;
use crate::inputs::{hex_input, icon_button, toggle_row};
use crate::interaction::Interaction;
use crate::model::ColorModel;
use crate::picker::{PickerController, PickerOptions};
use crate::saturation::saturation_plane;
use crate::slider::SliderKind;
use crate::surface::peniko_color;
use crate::swatches::swatch_row;

/// Ties the controller to the signals the views read.
///
/// The controller is never borrowed while a signal is written, since writing
/// `color` runs the reconcile effect straight away.
struct Binding<M: ColorModel> {
    controller: Rc<RefCell<PickerController<M>>>,
    color: RwSignal<M::Color>,
    hsva: RwSignal<HsvaColor>,
    hex: RwSignal<String>,
}

impl<M: ColorModel> Clone for Binding<M> {
    fn clone(&self) -> Self {
        Self {
            controller: Rc::clone(&self.controller),
            color: self.color,
            hsva: self.hsva,
            hex: self.hex,
        }
    }
}

impl<M> Binding<M>
where
    M: ColorModel + 'static,
    M::Color: 'static,
{
    fn new(model: M, color: RwSignal<M::Color>, options: PickerOptions) -> Self {
        let controller = PickerController::new(model, color.get_untracked(), options);
        let hsva = RwSignal::new(controller.hsva());
        let hex = RwSignal::new(controller.hex_field());
        Self {
            controller: Rc::new(RefCell::new(controller)),
            color,
            hsva,
            hex,
        }
    }

    /// Run `f` against the controller, then publish what changed.
    fn apply(&self, f: impl FnOnce(&mut PickerController<M>) -> Option<M::Color>) {
        let emitted = {
            let mut controller = self.controller.borrow_mut();
            f(&mut controller)
        };
        self.publish();
        if let Some(color) = emitted {
            self.color.set(color);
        }
    }

    /// An external write to `color`.
    fn reconcile(&self, color: M::Color) {
        let replaced = self.controller.borrow_mut().set_color(color);
        if replaced {
            self.publish();
        }
    }

    fn publish(&self) {
        let (hsva, hex) = {
            let controller = self.controller.borrow();
            (controller.hsva(), controller.hex_field())
        };
        if self.hsva.get_untracked() != hsva {
            self.hsva.set(hsva);
        }
        if self.hex.get_untracked() != hex {
            self.hex.set(hex);
        }
    }

    fn slide(&self, kind: SliderKind) -> impl Fn(Interaction) + 'static {
        let binding = self.clone();
        move |interaction| binding.apply(|c| c.slide(kind, interaction))
    }
}

pub(crate) fn color_picker<M>(
    model: M,
    color: RwSignal<M::Color>,
    options: PickerOptions,
) -> impl IntoView
where
    M: ColorModel + 'static,
    M::Color: 'static,
{
    let binding = Binding::new(model, color, options.clone());
    let hsva = binding.hsva;

    {
        let binding = binding.clone();
        create_effect(move |_| {
            let value = color.get();
            binding.reconcile(value);
        });
    }

    let (swatches, toggles, alpha, prefixed) = {
        let controller = binding.controller.borrow();
        (
            controller.swatches().to_vec(),
            controller.toggles().to_vec(),
            controller.accepts_alpha(),
            options.is_prefixed(),
        )
    };

    let on_pick = {
        let binding = binding.clone();
        move |index| {
            binding.apply(|c| {
                c.apply_swatch(index).unwrap_or_else(|err| {
                    warn!("{err}");
                    None
                })
            })
        }
    };

    let on_hex = {
        let binding = binding.clone();
        move |value: &str| {
            let value = value.to_string();
            binding.apply(|c| c.apply_hex(&value))
        }
    };

    let on_save = {
        let binding = binding.clone();
        let options = options.clone();
        move || {
            let hex = binding.controller.borrow().hex();
            options.emit_save(&hex);
        }
    };
    let on_cancel = move || options.emit_cancel();

    v_stack((
        saturation_plane(hsva, binding.slide(SliderKind::Saturation)),
        h_stack((
            v_stack((
                hue_slider(hsva, binding.slide(SliderKind::Hue)),
                #[cfg(feature = "alpha")]
                alpha_slider(hsva, binding.slide(SliderKind::Alpha)),
            ))
            .style(|s| s.flex_grow(1.0).gap(constants::GAP)),
            checkered_chip(
                move || peniko_color(hsva_to_rgba(hsva.get())),
                constants::RADIUS as f64,
            )
            .style(|s| {
                s.size(32.0, 32.0)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .border_radius(constants::RADIUS)
            }),
        ))
        .style(|s| s.items_center().gap(constants::GAP)),
        swatch_row(swatches, on_pick),
        h_stack((
            hex_input(binding.hex, alpha, prefixed, on_hex),
            empty().style(|s| s.flex_grow(1.0)),
            icon_button(Icon::X, Color::rgb8(160, 60, 60), on_cancel),
            icon_button(Icon::Check, Color::rgb8(60, 130, 60), on_save),
        ))
        .style(|s| s.items_center().gap(constants::GAP / 2.0)),
        v_stack_from_iter(toggles.into_iter().map(toggle_row))
            .style(|s| s.gap(constants::GAP / 2.0)),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(242, 242, 242))
    })
}
