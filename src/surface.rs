//! The Floem view every slider is built from.
//!
//! [`SliderSurface`] feeds Floem events into an [`Interactive`] engine and
//! hands emitted positions to its owner. What it looks like is up to the
//! [`Track`] it wraps.

use std::rc::Rc;
use std::sync::Arc;

use floem::keyboard::{Key, NamedKey};
use floem::kurbo::{self, Circle, Rect};
use floem::peniko::{self, Blob, Color};
use floem::pointer::PointerButton;
use floem::reactive::{RwSignal, SignalGet, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;
use log::trace;

use crate::color::{HsvaColor, RgbaColor};
use crate::constants;
use crate::interaction::{
    ArrowKey, Bounds, Device, DocumentListeners, InputEvent, Interaction, Interactive, MouseButton,
    Point,
};
use crate::math::to_channel;
use crate::slider::SliderKind;

/// The paintable part of a slider.
pub(crate) trait Track {
    /// Where a position of 0..1 maps to inside a `width` x `height` view.
    fn bounds(&self, width: f64, height: f64) -> Bounds;

    fn paint(&mut self, cx: &mut PaintCx, rect: Rect, hsva: &HsvaColor, position: Interaction);
}

/// Pointer capture: an active view keeps receiving moves after the pointer
/// leaves it.
struct ActiveView(ViewId);

impl DocumentListeners for ActiveView {
    fn attach(&self, _device: Device) {
        self.0.request_active();
    }

    fn detach(&self, _device: Device) {
        self.0.clear_active();
    }
}

pub(crate) struct SliderSurface<T: Track> {
    id: ViewId,
    kind: SliderKind,
    engine: Interactive,
    track: T,
    hsva: HsvaColor,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(Interaction)>,
}

pub(crate) fn slider_surface<T: Track + 'static>(
    kind: SliderKind,
    track: T,
    hsva: RwSignal<HsvaColor>,
    on_change: impl Fn(Interaction) + 'static,
) -> SliderSurface<T> {
    let id = ViewId::new();

    create_effect(move |_| {
        let value = hsva.get();
        id.update_state(value);
    });

    let initial = hsva.get_untracked();
    let mut engine = Interactive::new(kind.axis(), Rc::new(ActiveView(id)));
    engine.set_position(kind.position(&initial));

    SliderSurface {
        id,
        kind,
        engine,
        track,
        hsva: initial,
        size: Default::default(),
        on_change: Box::new(on_change),
    }
    .keyboard_navigable()
    .style(|s| s.cursor(floem::style::CursorStyle::Pointer))
}

impl<T: Track> SliderSurface<T> {
    fn bounds(&self) -> Option<Bounds> {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return None;
        }
        Some(self.track.bounds(w, h))
    }
}

impl<T: Track + 'static> View for SliderSurface<T> {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hsva) = state.downcast::<HsvaColor>() {
            self.hsva = *hsva;
            self.engine.set_position(self.kind.position(&self.hsva));
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, _cx: &mut EventCx, event: &Event) -> EventPropagation {
        let Some(input) = translate(event) else {
            return EventPropagation::Continue;
        };
        let pressed = matches!(input, InputEvent::MouseDown { .. });
        if pressed {
            self.id.request_focus();
        }

        let surface = self.bounds();
        let was_dragging = self.engine.dragging().is_some();
        match self.engine.handle(&surface, &input) {
            Some(interaction) => {
                trace!(
                    "{} -> {}",
                    self.kind.label(),
                    self.kind.value_text(&self.kind.update(interaction).apply(self.hsva))
                );
                (self.on_change)(interaction);
                self.id.request_layout();
                EventPropagation::Stop
            }
            None if pressed || was_dragging => EventPropagation::Stop,
            None => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let position = self.kind.position(&self.hsva);
        self.track
            .paint(cx, Rect::new(0.0, 0.0, w, h), &self.hsva, position);
    }
}

fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::PointerDown(e) => Some(InputEvent::MouseDown {
            button: mouse_button(e.button),
            position: Point::new(e.pos.x, e.pos.y),
        }),
        Event::PointerMove(e) => Some(InputEvent::MouseMove {
            position: Point::new(e.pos.x, e.pos.y),
        }),
        Event::PointerUp(_) => Some(InputEvent::MouseUp),
        Event::KeyDown(ke) => arrow_key(&ke.key.logical_key).map(InputEvent::KeyDown),
        Event::FocusGained => Some(InputEvent::Focus),
        Event::FocusLost => Some(InputEvent::Blur),
        _ => None,
    }
}

fn mouse_button(button: PointerButton) -> MouseButton {
    if button.is_primary() {
        MouseButton::Primary
    } else if button.is_secondary() {
        MouseButton::Secondary
    } else if button.is_auxiliary() {
        MouseButton::Auxiliary
    } else {
        MouseButton::Other
    }
}

fn arrow_key(key: &Key) -> Option<ArrowKey> {
    match key {
        Key::Named(NamedKey::ArrowLeft) => Some(ArrowKey::Left),
        Key::Named(NamedKey::ArrowRight) => Some(ArrowKey::Right),
        Key::Named(NamedKey::ArrowUp) => Some(ArrowKey::Up),
        Key::Named(NamedKey::ArrowDown) => Some(ArrowKey::Down),
        _ => None,
    }
}

/// Bounds of a horizontal strip whose thumb must stay fully visible.
pub(crate) fn strip_bounds(width: f64, height: f64) -> Bounds {
    let r = constants::THUMB_RADIUS;
    Bounds::new(r, 0.0, (width - 2.0 * r).max(0.0), height)
}

/// Center of a strip's thumb for a horizontal position.
pub(crate) fn thumb_center(rect: Rect, left: f64) -> kurbo::Point {
    let r = constants::THUMB_RADIUS;
    kurbo::Point::new(
        rect.x0 + r + left * (rect.width() - 2.0 * r),
        rect.center().y,
    )
}

pub(crate) fn peniko_color(color: RgbaColor) -> Color {
    Color::rgba8(color.r, color.g, color.b, to_channel(color.a * 255.0))
}

/// A filled handle with a white ring and a faint outline on both sides.
pub(crate) fn paint_thumb(cx: &mut PaintCx, center: kurbo::Point, radius: f64, fill: Color) {
    cx.fill(&Circle::new(center, radius - 1.5), fill, 0.0);
    cx.stroke(
        &Circle::new(center, radius),
        Color::rgba8(0, 0, 0, 80),
        &kurbo::Stroke::new(1.0),
    );
    cx.stroke(
        &Circle::new(center, radius - 1.5),
        Color::WHITE,
        &kurbo::Stroke::new(2.0),
    );
    cx.stroke(
        &Circle::new(center, radius - 3.0),
        Color::rgba8(0, 0, 0, 80),
        &kurbo::Stroke::new(1.0),
    );
}

/// Outline shared by every track.
pub(crate) fn paint_outline(cx: &mut PaintCx, shape: &impl kurbo::Shape) {
    cx.stroke(shape, Color::rgba8(0, 0, 0, 40), &kurbo::Stroke::new(1.0));
}

/// An RGBA8 pixel buffer uploaded once and scaled to whatever rect it is
/// drawn into.
pub(crate) struct Raster {
    img: peniko::Image,
    hash: Vec<u8>,
}

impl Raster {
    pub(crate) fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        let blob = Blob::new(Arc::new(pixels));
        let hash = blob.id().to_le_bytes().to_vec();
        let img = peniko::Image::new(blob, peniko::Format::Rgba8, width, height);
        Self { img, hash }
    }

    pub(crate) fn draw(&self, cx: &mut PaintCx, rect: Rect) {
        cx.draw_img(
            floem_renderer::Img {
                img: self.img.clone(),
                hash: &self.hash,
            },
            rect,
        );
    }
}
