//! Checkerboard backdrop for translucent colors.

use floem::kurbo::Rect;
use floem::peniko::Color;
use floem::reactive::create_effect;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
};
use floem_renderer::Renderer;

use crate::constants;

const LIGHT: Color = Color::rgb8(255, 255, 255);
const DARK: Color = Color::rgb8(204, 204, 204);

/// Number of cells needed to cover `extent`.
fn cells(extent: f64, cell: f64) -> usize {
    if extent <= 0.0 {
        0
    } else {
        (extent / cell).ceil() as usize
    }
}

/// Paint a checkerboard pattern into `rect`.
pub(crate) fn paint_checkerboard(cx: &mut PaintCx, rect: Rect) {
    let cell = constants::CHECKER_CELL;
    cx.fill(&rect, LIGHT, 0.0);
    for row in 0..cells(rect.height(), cell) {
        for col in (0..cells(rect.width(), cell)).filter(|col| (row + col) % 2 == 1) {
            let x = rect.x0 + col as f64 * cell;
            let y = rect.y0 + row as f64 * cell;
            let cell_rect = Rect::new(x, y, (x + cell).min(rect.x1), (y + cell).min(rect.y1));
            cx.fill(&cell_rect, DARK, 0.0);
        }
    }
}

/// A plain view showing `color` over the checkerboard, used for swatches and
/// the preview chip.
pub(crate) struct CheckeredChip {
    id: ViewId,
    color: Color,
    radius: f64,
    size: floem::taffy::prelude::Size<f32>,
}

pub(crate) fn checkered_chip(color: impl Fn() -> Color + 'static, radius: f64) -> CheckeredChip {
    let id = ViewId::new();
    create_effect(move |_| {
        id.update_state(color());
    });
    CheckeredChip {
        id,
        color: Color::TRANSPARENT,
        radius,
        size: Default::default(),
    }
}

impl View for CheckeredChip {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(color) = state.downcast::<Color>() {
            self.color = *color;
            self.id.request_layout();
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        self.size = self.id.get_layout().unwrap_or_default().size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let rect = Rect::new(0.0, 0.0, self.size.width as f64, self.size.height as f64);
        let rrect = rect.to_rounded_rect(self.radius);
        cx.save();
        cx.clip(&rrect);
        paint_checkerboard(cx, rect);
        cx.fill(&rect, self.color, 0.0);
        cx.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_cells_are_covered() {
        assert_eq!(cells(24.0, 5.0), 5);
        assert_eq!(cells(25.0, 5.0), 5);
        assert_eq!(cells(0.0, 5.0), 0);
    }
}
