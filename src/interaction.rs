//! Pointer, touch, and keyboard tracking over a bounded surface.
//!
//! An [`Interactive`] engine consumes raw [`InputEvent`]s and emits
//! [`Interaction`]s: positions normalized into `[0, 1]` along the surface's
//! axes. It is a two-state machine:
//!
//! - `Idle`: a primary mouse press or a touch start begins a drag session and
//!   emits the position under the pointer straight away.
//! - `Dragging(pointer)`: moves from the tracked pointer emit new positions,
//!   clamped to the surface even when the pointer has left it. Release,
//!   cancel, blur, or losing the surface ends the session.
//!
//! While dragging, the engine holds a [`Subscription`] to the host's
//! document-level listeners, so moves outside the surface still arrive. The
//! subscription is released when the session ends and, through `Drop`, when
//! the engine itself goes away.
//!
//! Arrow keys nudge the position by a fixed step whenever the surface has
//! focus, dragging or not.

use std::fmt;
use std::rc::Rc;

use log::{debug, trace};

use crate::constants;
use crate::math::clamp;

/// A position in the host's coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The geometry of a surface, in the same coordinate space as [`Point`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// `point` as fractions of this box, each clamped into `[0, 1]`.
    ///
    /// A degenerate (zero or negative) extent yields 0 on that axis.
    pub fn fraction(&self, point: Point) -> (f64, f64) {
        (
            fraction(point.x, self.left, self.width),
            fraction(point.y, self.top, self.height),
        )
    }
}

fn fraction(coordinate: f64, origin: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        clamp((coordinate - origin) / extent, 0.0, 1.0)
    } else {
        0.0
    }
}

/// Something with a current bounding box.
///
/// `None` means the underlying element is gone; an active drag ends.
pub trait Surface {
    fn bounds(&self) -> Option<Bounds>;
}

impl Surface for Bounds {
    fn bounds(&self) -> Option<Bounds> {
        Some(*self)
    }
}

impl Surface for Option<Bounds> {
    fn bounds(&self) -> Option<Bounds> {
        *self
    }
}

/// Which axes of a surface carry a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A 2D plane: both `left` and `top` are emitted.
    Both,
    /// A horizontal strip: only `left` is emitted.
    Horizontal,
    /// A vertical strip: only `top` is emitted.
    Vertical,
}

impl Axis {
    fn has_left(self) -> bool {
        self != Axis::Vertical
    }

    fn has_top(self) -> bool {
        self != Axis::Horizontal
    }
}

/// A normalized position; axes the surface does not carry are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Interaction {
    pub left: Option<f64>,
    pub top: Option<f64>,
}

impl Interaction {
    pub fn new(left: Option<f64>, top: Option<f64>) -> Self {
        Self { left, top }
    }

    /// A position on a horizontal strip.
    pub fn horizontal(left: f64) -> Self {
        Self::new(Some(left), None)
    }

    /// A position on a vertical strip.
    pub fn vertical(top: f64) -> Self {
        Self::new(None, Some(top))
    }

    /// A position on a plane.
    pub fn plane(left: f64, top: f64) -> Self {
        Self::new(Some(left), Some(top))
    }
}

/// The pointer driving a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Auxiliary,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

/// One touch point in a touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    pub id: u64,
    pub position: Point,
}

impl Touch {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id,
            position: Point::new(x, y),
        }
    }
}

/// Raw input, as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    MouseDown { button: MouseButton, position: Point },
    MouseMove { position: Point },
    MouseUp,
    /// Touches that started with this event.
    TouchStart { changed: Vec<Touch> },
    /// Every touch currently on the screen.
    TouchMove { touches: Vec<Touch> },
    /// Touches that lifted with this event.
    TouchEnd { changed: Vec<Touch> },
    /// Touches the platform took away.
    TouchCancel { changed: Vec<Touch> },
    KeyDown(ArrowKey),
    Focus,
    Blur,
    /// The surface element was removed.
    Detached,
}

/// The input family a document-level subscription listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Mouse,
    Touch,
}

/// The host's document-wide move/up/cancel listeners.
///
/// `attach` and `detach` are always called in pairs, at most one pair open
/// per engine.
pub trait DocumentListeners {
    fn attach(&self, device: Device);
    fn detach(&self, device: Device);
}

/// For hosts that already route every pointer event to the surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoListeners;

impl DocumentListeners for NoListeners {
    fn attach(&self, _device: Device) {}
    fn detach(&self, _device: Device) {}
}

/// An attached set of document listeners; detaches on drop.
#[must_use]
pub struct Subscription {
    listeners: Rc<dyn DocumentListeners>,
    device: Device,
}

impl Subscription {
    fn acquire(listeners: &Rc<dyn DocumentListeners>, device: Device) -> Self {
        listeners.attach(device);
        Self {
            listeners: Rc::clone(listeners),
            device,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.listeners.detach(self.device);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("device", &self.device)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
enum DragState {
    Idle,
    Dragging {
        pointer: PointerId,
        // Geometry is re-read on the first move of every session.
        stale_bounds: bool,
        _subscription: Subscription,
    },
}

/// The drag-tracking engine for one surface.
pub struct Interactive {
    axis: Axis,
    key_step: f64,
    listeners: Rc<dyn DocumentListeners>,
    state: DragState,
    bounds: Option<Bounds>,
    left: f64,
    top: f64,
    focused: bool,
    has_touched: bool,
}

impl fmt::Debug for Interactive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interactive")
            .field("axis", &self.axis)
            .field("state", &self.state)
            .field("left", &self.left)
            .field("top", &self.top)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl Interactive {
    pub fn new(axis: Axis, listeners: Rc<dyn DocumentListeners>) -> Self {
        Self {
            axis,
            key_step: constants::KEY_STEP,
            listeners,
            state: DragState::Idle,
            bounds: None,
            left: 0.0,
            top: 0.0,
            focused: false,
            has_touched: false,
        }
    }

    /// Override the arrow-key step (normalized units).
    pub fn with_key_step(mut self, step: f64) -> Self {
        self.key_step = clamp(step, 0.0, 1.0);
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The pointer driving the current drag, if any.
    pub fn dragging(&self) -> Option<PointerId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { pointer, .. } => Some(pointer),
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// The current position, masked to the surface's axes.
    pub fn position(&self) -> Interaction {
        self.masked(self.left, self.top)
    }

    /// Sync the position from outside (e.g. the color changed elsewhere).
    ///
    /// Emits nothing; keyboard nudges continue from here.
    pub fn set_position(&mut self, position: Interaction) {
        if let Some(left) = position.left {
            self.left = clamp(left, 0.0, 1.0);
        }
        if let Some(top) = position.top {
            self.top = clamp(top, 0.0, 1.0);
        }
    }

    /// Feed one event; returns the new position when it changed.
    pub fn handle(&mut self, surface: &dyn Surface, event: &InputEvent) -> Option<Interaction> {
        match event {
            InputEvent::MouseDown { button, position } => {
                // Platforms emulate mouse events after touches; ignore those.
                if self.has_touched {
                    trace!("ignoring emulated mouse press");
                    return None;
                }
                if *button != MouseButton::Primary || self.dragging().is_some() {
                    return None;
                }
                self.start(surface, PointerId::Mouse, *position)
            }
            InputEvent::TouchStart { changed } => {
                self.has_touched = true;
                if self.dragging().is_some() {
                    return None;
                }
                let touch = changed.first()?;
                self.start(surface, PointerId::Touch(touch.id), touch.position)
            }
            InputEvent::MouseMove { position } => {
                if self.has_touched || self.dragging() != Some(PointerId::Mouse) {
                    return None;
                }
                self.drag_to(surface, *position)
            }
            InputEvent::TouchMove { touches } => {
                let Some(PointerId::Touch(id)) = self.dragging() else {
                    return None;
                };
                let touch = touches.iter().find(|t| t.id == id)?;
                self.drag_to(surface, touch.position)
            }
            InputEvent::MouseUp => {
                if self.dragging() == Some(PointerId::Mouse) {
                    self.release("mouse released");
                }
                None
            }
            InputEvent::TouchEnd { changed } | InputEvent::TouchCancel { changed } => {
                if let Some(PointerId::Touch(id)) = self.dragging() {
                    if changed.iter().any(|t| t.id == id) {
                        self.release("touch lifted");
                    }
                }
                None
            }
            InputEvent::KeyDown(key) => {
                if !self.focused {
                    return None;
                }
                self.nudge(*key)
            }
            InputEvent::Focus => {
                self.focused = true;
                None
            }
            InputEvent::Blur => {
                self.focused = false;
                self.release("focus lost");
                None
            }
            InputEvent::Detached => {
                self.release("surface detached");
                None
            }
        }
    }

    /// End the current drag session, detaching the document listeners.
    pub fn release(&mut self, reason: &str) {
        if let DragState::Dragging { pointer, .. } = std::mem::replace(&mut self.state, DragState::Idle) {
            debug!("drag session for {pointer:?} ended: {reason}");
        }
    }

    fn start(&mut self, surface: &dyn Surface, pointer: PointerId, at: Point) -> Option<Interaction> {
        let bounds = surface.bounds()?;
        let device = match pointer {
            PointerId::Mouse => Device::Mouse,
            PointerId::Touch(_) => Device::Touch,
        };
        debug!("drag session started by {pointer:?}");
        self.state = DragState::Dragging {
            pointer,
            stale_bounds: true,
            _subscription: Subscription::acquire(&self.listeners, device),
        };
        self.bounds = Some(bounds);
        self.focused = true;

        let (left, top) = bounds.fraction(at);
        self.move_to(left, top);
        let position = self.position();
        trace!("drag start at {position:?}");
        Some(position)
    }

    fn drag_to(&mut self, surface: &dyn Surface, at: Point) -> Option<Interaction> {
        if let DragState::Dragging { stale_bounds, .. } = &mut self.state {
            if *stale_bounds {
                *stale_bounds = false;
                self.bounds = surface.bounds();
            }
        }
        let Some(bounds) = self.bounds else {
            self.release("surface lost during drag");
            return None;
        };
        let (left, top) = bounds.fraction(at);
        self.update(left, top)
    }

    fn nudge(&mut self, key: ArrowKey) -> Option<Interaction> {
        let step = self.key_step;
        let (dl, dt) = match key {
            ArrowKey::Left => (-step, 0.0),
            ArrowKey::Right => (step, 0.0),
            ArrowKey::Up => (0.0, -step),
            ArrowKey::Down => (0.0, step),
        };
        if (dl != 0.0 && !self.axis.has_left()) || (dt != 0.0 && !self.axis.has_top()) {
            return None;
        }
        self.update(
            clamp(self.left + dl, 0.0, 1.0),
            clamp(self.top + dt, 0.0, 1.0),
        )
    }

    /// Store a new position; `None` when nothing on our axes moved.
    fn update(&mut self, left: f64, top: f64) -> Option<Interaction> {
        let before = self.position();
        self.move_to(left, top);
        let after = self.position();
        if after == before {
            return None;
        }
        trace!("emit {after:?}");
        Some(after)
    }

    fn move_to(&mut self, left: f64, top: f64) {
        if self.axis.has_left() {
            self.left = left;
        }
        if self.axis.has_top() {
            self.top = top;
        }
    }

    fn masked(&self, left: f64, top: f64) -> Interaction {
        Interaction::new(
            self.axis.has_left().then_some(left),
            self.axis.has_top().then_some(top),
        )
    }
}
