//! Standalone demo: opens a window with the color picker over some text whose
//! style the toggle options control.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_colorful::{PickerOptions, RgbaColor, RgbaModel, Swatch, ToggleOption, color_picker};

fn main() {
    let color = RwSignal::new(RgbaColor::opaque(34, 91, 161));
    let bold = RwSignal::new(false);
    let inverted = RwSignal::new(false);

    let options = PickerOptions::new()
        .swatches([
            Swatch::new("#000000").with_title("Black"),
            Swatch::new("#FFFFFF").with_title("White"),
            Swatch::new("#FF0000"),
            Swatch::new("#00FF00"),
            Swatch::new("#0000FF"),
        ])
        .toggle(ToggleOption::new(
            "Bold Text",
            move || bold.get_untracked(),
            move || bold.update(|b| *b = !*b),
        ))
        .toggle(ToggleOption::new(
            "Invert Text Color",
            move || inverted.get_untracked(),
            move || inverted.update(|b| *b = !*b),
        ))
        .on_save(|hex| println!("saved {hex}"))
        .on_cancel(|| println!("cancelled"));

    let sample = move || {
        label(move || color.get().to_string()).style(move |s| {
            let c = color.get();
            let text = if inverted.get() {
                Color::WHITE
            } else {
                Color::BLACK
            };
            let s = s
                .padding(8.0)
                .color(text)
                .background(Color::rgba8(c.r, c.g, c.b, (c.a * 255.0).round() as u8));
            if bold.get() { s.font_bold() } else { s }
        })
    };

    floem::Application::new()
        .window(
            move |_| {
                v_stack((sample(), color_picker(RgbaModel, color, options.clone())))
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
            },
            Some(
                WindowConfig::default()
                    .size((260.0, 480.0))
                    .title("floem-colorful"),
            ),
        )
        .run();
}
