//! Row of preset color buttons.

use floem::prelude::*;
use floem::views::tooltip;

use crate::checkerboard::checkered_chip;
use crate::constants;
use crate::convert::hex_to_rgba;
use crate::picker::Swatch;
use crate::surface::peniko_color;

/// One button per swatch; `on_pick` gets the swatch's index.
pub(crate) fn swatch_row(
    swatches: Vec<Swatch>,
    on_pick: impl Fn(usize) + Clone + 'static,
) -> impl IntoView {
    h_stack_from_iter(swatches.into_iter().enumerate().map(move |(index, swatch)| {
        let color = peniko_color(hex_to_rgba(&swatch.color));
        // White would vanish against the panel.
        let border = if swatch.is_white() {
            Color::rgb8(180, 180, 180)
        } else {
            Color::TRANSPARENT
        };
        let on_pick = on_pick.clone();
        let button = container(
            checkered_chip(move || color, constants::RADIUS as f64).style(|s| s.size_full()),
        )
        .style(move |s| {
            s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                .border(1.0)
                .border_color(border)
                .border_radius(constants::RADIUS)
                .cursor(floem::style::CursorStyle::Pointer)
        })
        .on_click_stop(move |_| on_pick(index));

        match swatch.title {
            Some(title) => tooltip(button, move || {
                let title = title.clone();
                label(move || title.clone()).style(|s| {
                    s.font_size(constants::INPUT_FONT)
                        .padding(4.0)
                        .background(Color::WHITE)
                        .border(1.0)
                        .border_color(Color::rgb8(200, 200, 200))
                        .border_radius(3.0)
                })
            })
            .into_any(),
            None => button.into_any(),
        }
    }))
    .style(|s| {
        s.flex_wrap(floem::taffy::FlexWrap::Wrap)
            .gap(constants::GAP / 2.0)
    })
}
