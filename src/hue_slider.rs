//! Hue strip (0–360, left to right).
//!
//! The hue gradient never changes, so it is rasterized once. Rendering it as
//! an image avoids vger's broken linear gradient coordinate handling.

use floem::context::PaintCx;
use floem::kurbo::Rect;
use floem::reactive::RwSignal;
use floem::views::Decorators;
use floem_renderer::Renderer;

use crate::color::HsvaColor;
use crate::constants;
use crate::convert::hsva_to_rgba;
use crate::interaction::{Bounds, Interaction};
use crate::slider::SliderKind;
use crate::surface::{self, Raster, SliderSurface, Track};

fn rasterize_hue(width: u32) -> Vec<u8> {
    let last = (width - 1).max(1) as f64;
    let mut buf = Vec::with_capacity((width * 4) as usize);
    for px in 0..width {
        let c = hsva_to_rgba(HsvaColor::new(px as f64 / last * 360.0, 100.0, 100.0, 1.0));
        buf.extend_from_slice(&[c.r, c.g, c.b, 255]);
    }
    buf
}

#[derive(Default)]
pub(crate) struct HueTrack {
    raster: Option<Raster>,
}

impl Track for HueTrack {
    fn bounds(&self, width: f64, height: f64) -> Bounds {
        surface::strip_bounds(width, height)
    }

    fn paint(&mut self, cx: &mut PaintCx, rect: Rect, hsva: &HsvaColor, position: Interaction) {
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);
        let raster = self.raster.get_or_insert_with(|| {
            let width = constants::HUE_RASTER_WIDTH;
            Raster::new(rasterize_hue(width), width, 1)
        });
        cx.save();
        cx.clip(&rrect);
        raster.draw(cx, rect);
        cx.restore();
        surface::paint_outline(cx, &rrect);

        let pure = hsva_to_rgba(HsvaColor::new(hsva.h, 100.0, 100.0, 1.0));
        surface::paint_thumb(
            cx,
            surface::thumb_center(rect, position.left.unwrap_or(0.0)),
            constants::THUMB_RADIUS,
            surface::peniko_color(pure),
        );
    }
}

/// Creates the horizontal hue strip.
pub(crate) fn hue_slider(
    hsva: RwSignal<HsvaColor>,
    on_change: impl Fn(Interaction) + 'static,
) -> SliderSurface<HueTrack> {
    surface::slider_surface(SliderKind::Hue, HueTrack::default(), hsva, on_change).style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
    })
}
