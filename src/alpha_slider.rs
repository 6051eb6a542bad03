//! Alpha strip: checkerboard under a transparent-to-opaque gradient of the
//! current color.

use floem::context::PaintCx;
use floem::kurbo::{Rect, Shape};
use floem::peniko::Gradient;
use floem::reactive::RwSignal;
use floem::views::Decorators;
use floem_renderer::Renderer;

use crate::checkerboard;
use crate::color::{HsvaColor, RgbaColor};
use crate::constants;
use crate::convert::hsva_to_rgba;
use crate::interaction::{Bounds, Interaction};
use crate::slider::SliderKind;
use crate::surface::{self, SliderSurface, Track};

#[derive(Default)]
pub(crate) struct AlphaTrack;

impl Track for AlphaTrack {
    fn bounds(&self, width: f64, height: f64) -> Bounds {
        surface::strip_bounds(width, height)
    }

    fn paint(&mut self, cx: &mut PaintCx, rect: Rect, hsva: &HsvaColor, position: Interaction) {
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);
        let rgba = hsva_to_rgba(*hsva);

        cx.save();
        cx.clip(&rrect);
        checkerboard::paint_checkerboard(cx, rect);

        // Transparent (left) → opaque (right)
        let solid = surface::peniko_color(RgbaColor { a: 1.0, ..rgba });
        let transparent = surface::peniko_color(RgbaColor { a: 0.0, ..rgba });
        let mid = rect.center().y;
        let gradient = Gradient::new_linear((rect.x0, mid), (rect.x1, mid))
            .with_stops([transparent, solid]);
        // The vello Rect fast-path only supports solid colors.
        let path = rect.to_path(0.1);
        cx.fill(&path, &gradient, 0.0);
        cx.restore();
        surface::paint_outline(cx, &rrect);

        surface::paint_thumb(
            cx,
            surface::thumb_center(rect, position.left.unwrap_or(1.0)),
            constants::THUMB_RADIUS,
            surface::peniko_color(rgba),
        );
    }
}

/// Creates the horizontal alpha strip.
pub(crate) fn alpha_slider(
    hsva: RwSignal<HsvaColor>,
    on_change: impl Fn(Interaction) + 'static,
) -> SliderSurface<AlphaTrack> {
    surface::slider_surface(SliderKind::Alpha, AlphaTrack, hsva, on_change).style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
    })
}
