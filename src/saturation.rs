//! Saturation/value plane.
//!
//! Horizontal position is saturation, vertical is value (top = bright). The
//! plane for the current hue is rasterized at a fixed resolution and scaled
//! to the widget; it is only redrawn when the hue moves.

use floem::context::PaintCx;
use floem::kurbo::{Point, Rect};
use floem::reactive::RwSignal;
use floem::views::Decorators;
use floem_renderer::Renderer;

use crate::color::HsvaColor;
use crate::constants;
use crate::convert::hsva_to_rgba;
use crate::interaction::{Bounds, Interaction};
use crate::slider::SliderKind;
use crate::surface::{self, Raster, SliderSurface, Track};

fn rasterize_plane(size: u32, hue: f64) -> Vec<u8> {
    let last = (size - 1).max(1) as f64;
    let mut buf = vec![0u8; (size * size * 4) as usize];
    for py in 0..size {
        let v = 100.0 - py as f64 / last * 100.0;
        for px in 0..size {
            let s = px as f64 / last * 100.0;
            let c = hsva_to_rgba(HsvaColor::new(hue, s, v, 1.0));
            let offset = ((py * size + px) * 4) as usize;
            buf[offset..offset + 4].copy_from_slice(&[c.r, c.g, c.b, 255]);
        }
    }
    buf
}

#[derive(Default)]
pub(crate) struct SaturationTrack {
    raster: Option<Raster>,
    // Hue in tenths of a degree.
    cached_hue: Option<u32>,
}

impl SaturationTrack {
    fn ensure_raster(&mut self, hue: f64) {
        let key = (hue * 10.0).round() as u32;
        if self.raster.is_some() && self.cached_hue == Some(key) {
            return;
        }
        let size = constants::PLANE_RASTER_SIZE;
        self.raster = Some(Raster::new(rasterize_plane(size, hue), size, size));
        self.cached_hue = Some(key);
    }
}

impl Track for SaturationTrack {
    fn bounds(&self, width: f64, height: f64) -> Bounds {
        Bounds::new(0.0, 0.0, width, height)
    }

    fn paint(&mut self, cx: &mut PaintCx, rect: Rect, hsva: &HsvaColor, position: Interaction) {
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);
        cx.save();
        cx.clip(&rrect);
        self.ensure_raster(hsva.h);
        if let Some(raster) = &self.raster {
            raster.draw(cx, rect);
        }
        cx.restore();
        surface::paint_outline(cx, &rrect);

        let center = Point::new(
            rect.x0 + position.left.unwrap_or(0.0) * rect.width(),
            rect.y0 + position.top.unwrap_or(0.0) * rect.height(),
        );
        let opaque = HsvaColor { a: 1.0, ..*hsva };
        surface::paint_thumb(
            cx,
            center,
            constants::CURSOR_RADIUS,
            surface::peniko_color(hsva_to_rgba(opaque)),
        );
    }
}

/// Creates the saturation/value plane.
pub(crate) fn saturation_plane(
    hsva: RwSignal<HsvaColor>,
    on_change: impl Fn(Interaction) + 'static,
) -> SliderSurface<SaturationTrack> {
    surface::slider_surface(
        SliderKind::Saturation,
        SaturationTrack::default(),
        hsva,
        on_change,
    )
    .style(|s| {
        s.width_full()
            .aspect_ratio(4.0 / 3.0)
            .min_height(100.0)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Default)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_corners() {
        let size = 4;
        let buf = rasterize_plane(size, 0.0);
        let px = |x: u32, y: u32| {
            let o = ((y * size + x) * 4) as usize;
            (buf[o], buf[o + 1], buf[o + 2], buf[o + 3])
        };
        assert_eq!(px(0, 0), (255, 255, 255, 255));
        assert_eq!(px(3, 0), (255, 0, 0, 255));
        assert_eq!(px(0, 3), (0, 0, 0, 255));
        assert_eq!(px(3, 3), (0, 0, 0, 255));
    }
}
