//! End-to-end: raw input through the engine, slider mapping, and
//! manipulation hook, out to the caller's color.

use std::cell::RefCell;
use std::rc::Rc;

use floem_colorful::interaction::{ArrowKey, Bounds, InputEvent, MouseButton, NoListeners, Point};
use floem_colorful::{
    HexModel, HsvaColor, HsvaModel, Interaction, Interactive, PickerController, PickerOptions, RgbaColor,
    RgbaModel, SliderKind,
};

fn engine_for(kind: SliderKind, hsva: &HsvaColor) -> Interactive {
    let mut engine = Interactive::new(kind.axis(), Rc::new(NoListeners));
    engine.set_position(kind.position(hsva));
    engine
}

fn press(x: f64, y: f64) -> InputEvent {
    InputEvent::MouseDown {
        button: MouseButton::Primary,
        position: Point::new(x, y),
    }
}

#[test]
fn dragging_the_plane_emits_rgba() {
    let mut picker = PickerController::new(
        RgbaModel,
        RgbaColor::opaque(255, 0, 0),
        PickerOptions::new(),
    );
    let plane = Bounds::new(0.0, 0.0, 200.0, 100.0);
    let mut engine = engine_for(SliderKind::Saturation, &picker.hsva());

    let at = engine.handle(&plane, &press(100.0, 50.0)).unwrap();
    let emitted = picker.slide(SliderKind::Saturation, at);
    assert_eq!(emitted, Some(RgbaColor::opaque(128, 64, 64)));

    // Dragged past the top-left corner: white.
    let at = engine
        .handle(&plane, &InputEvent::MouseMove { position: Point::new(-40.0, -40.0) })
        .unwrap();
    assert_eq!(picker.slide(SliderKind::Saturation, at), Some(RgbaColor::opaque(255, 255, 255)));

    engine.handle(&plane, &InputEvent::MouseUp);
    assert!(engine.dragging().is_none());
    assert_eq!(
        engine.handle(&plane, &InputEvent::MouseMove { position: Point::new(200.0, 0.0) }),
        None
    );
}

#[test]
fn keyboard_nudges_the_hue() {
    let mut picker = PickerController::new(
        HsvaModel,
        HsvaColor::new(0.0, 100.0, 100.0, 1.0),
        PickerOptions::new(),
    );
    let strip = Bounds::new(10.0, 0.0, 180.0, 24.0);
    let mut engine = engine_for(SliderKind::Hue, &picker.hsva());

    assert_eq!(engine.handle(&strip, &InputEvent::KeyDown(ArrowKey::Right)), None);
    engine.handle(&strip, &InputEvent::Focus);
    let at = engine
        .handle(&strip, &InputEvent::KeyDown(ArrowKey::Right))
        .unwrap();
    let emitted = picker.slide(SliderKind::Hue, at).unwrap();
    assert!((emitted.h - 18.0).abs() < 1e-9);

    // Up/down mean nothing on a horizontal strip.
    assert_eq!(engine.handle(&strip, &InputEvent::KeyDown(ArrowKey::Up)), None);
}

#[test]
fn hex_model_picker_emits_strings() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut picker = PickerController::new(
        HexModel::default(),
        "#FF0000".to_string(),
        PickerOptions::new().on_save(move |hex| sink.borrow_mut().push(hex.to_string())),
    );

    let emitted = picker.slide(SliderKind::Hue, Interaction::horizontal(1.0 / 3.0));
    assert_eq!(emitted.as_deref(), Some("#00ff00"));
    picker.save();

    // Same color spelled differently: the working value is left alone.
    assert!(!picker.set_color("#0F0".to_string()));
    assert!(picker.set_color("#0000ff".to_string()));
    picker.save();

    assert_eq!(*seen.borrow(), vec!["#00ff00", "#0000ff"]);
}

#[test]
fn swatch_then_alpha_then_hex() {
    let mut picker = PickerController::new(
        RgbaModel,
        RgbaColor::default(),
        PickerOptions::new().alpha(true).swatches(["#FFFFFF", "#1e90ff"]),
    );
    assert_eq!(picker.apply_swatch(1).unwrap(), Some(RgbaColor::opaque(30, 144, 255)));

    let emitted = picker
        .slide(SliderKind::Alpha, Interaction::horizontal(0.25))
        .unwrap();
    assert_eq!((emitted.r, emitted.g, emitted.b, emitted.a), (30, 144, 255, 0.25));
    assert_eq!(picker.hex(), "#1e90ff40");

    assert_eq!(picker.apply_hex("not a color"), None);
    assert_eq!(picker.apply_hex("#fff"), Some(RgbaColor::opaque(255, 255, 255)));
    assert!(picker.swatches()[0].is_white());
}
