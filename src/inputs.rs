//! Text and button controls around the sliders.

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use lucide_icons::Icon;

use crate::compare::equal_hex;
use crate::constants;
use crate::picker::ToggleOption;
use crate::validate::{escape_hex, prefix_hex, valid_hex};

/// A hex field that follows `hex` and reports valid edits as they are typed.
///
/// Input is escaped before validation, so pasted text such as `"#FF 00 00"`
/// still goes through. The field snaps back to `hex` on Enter or focus loss.
pub(crate) fn hex_input(
    hex: RwSignal<String>,
    alpha: bool,
    prefixed: bool,
    on_input: impl Fn(&str) + 'static,
) -> impl IntoView {
    let text = RwSignal::new(hex.get_untracked());

    // Color → text, unless the text already spells the same color.
    create_effect(move |_| {
        let value = hex.get();
        if !equal_hex(&text.get_untracked(), &value) {
            text.set(value);
        }
    });

    // Text → color on every valid keystroke.
    create_effect(move |_| {
        let raw = text.get();
        let escaped = escape_hex(&raw, alpha);
        if valid_hex(&escaped, alpha) && !equal_hex(&escaped, &hex.get_untracked()) {
            on_input(&prefix_hex(&escaped, prefixed));
        }
    });

    let reset = move || {
        let value = hex.get_untracked();
        if text.get_untracked() != value {
            text.set(value);
        }
    };

    text_input(text)
        .style(|s| {
            s.width(constants::HEX_INPUT_WIDTH)
                .padding(2.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .background(Color::WHITE)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(3.0)
        })
        .on_event_stop(EventListener::FocusLost, move |_| reset())
        .on_event(EventListener::KeyDown, move |e| {
            if let Event::KeyDown(ke) = e
                && ke.key.logical_key == Key::Named(NamedKey::Enter)
            {
                reset();
                return EventPropagation::Stop;
            }
            EventPropagation::Continue
        })
}

/// A square button showing a lucide glyph.
pub(crate) fn icon_button(
    icon: Icon,
    tint: Color,
    on_press: impl Fn() + 'static,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(move || icon.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                tint
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(24.0, 24.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .keyboard_navigable()
    .on_event_stop(EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(EventListener::PointerUp, move |_| {
        pressed.set(false);
        on_press();
    })
}

/// A checkbox row for one [`ToggleOption`].
///
/// The option's state lives with the caller; the row re-reads it after every
/// click.
pub(crate) fn toggle_row(option: ToggleOption) -> impl IntoView {
    let checked = RwSignal::new(option.is_toggled());
    let text = option.label.clone();
    h_stack((
        label(move || {
            let icon = if checked.get() {
                Icon::SquareCheck
            } else {
                Icon::Square
            };
            icon.unicode().to_string()
        })
        .style(|s| {
            s.font_size(14.0)
                .font_family("lucide".to_string())
                .color(Color::rgb8(90, 90, 90))
        }),
        label(move || text.clone()).style(|s| {
            s.font_size(constants::INPUT_FONT)
                .color(Color::rgb8(60, 60, 60))
        }),
    ))
    .style(|s| {
        s.items_center()
            .gap(constants::GAP / 2.0)
            .cursor(floem::style::CursorStyle::Pointer)
    })
    .on_click_stop(move |_| {
        option.toggle();
        checked.set(option.is_toggled());
    })
}
