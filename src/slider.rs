//! The three picker sliders, as pure mappings between surface positions and
//! HSVA fields.
//!
//! - saturation plane: `left` → saturation, `top` → inverted value
//! - hue strip: `left` → hue (0–360)
//! - alpha strip: `left` → alpha (0–1)

use crate::color::{HsvaColor, HsvaUpdate};
use crate::interaction::{Axis, Interaction};
use crate::math::{clamp, round};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKind {
    Saturation,
    Hue,
    Alpha,
}

impl SliderKind {
    pub fn axis(self) -> Axis {
        match self {
            SliderKind::Saturation => Axis::Both,
            SliderKind::Hue | SliderKind::Alpha => Axis::Horizontal,
        }
    }

    /// Accessible name of the surface.
    pub fn label(self) -> &'static str {
        match self {
            SliderKind::Saturation => "Color",
            SliderKind::Hue => "Hue",
            SliderKind::Alpha => "Alpha",
        }
    }

    /// The partial HSVA a position on this slider writes.
    pub fn update(self, interaction: Interaction) -> HsvaUpdate {
        let mut update = HsvaUpdate::new();
        match self {
            SliderKind::Saturation => {
                update.s = interaction.left.map(|left| clamp(left * 100.0, 0.0, 100.0));
                update.v = interaction.top.map(|top| clamp(100.0 - top * 100.0, 0.0, 100.0));
            }
            SliderKind::Hue => {
                update.h = interaction.left.map(|left| clamp(left * 360.0, 0.0, 360.0));
            }
            SliderKind::Alpha => {
                update.a = interaction.left.map(|left| clamp(left, 0.0, 1.0));
            }
        }
        update
    }

    /// Where this slider's handle sits for `hsva`.
    pub fn position(self, hsva: &HsvaColor) -> Interaction {
        match self {
            SliderKind::Saturation => Interaction::plane(hsva.s / 100.0, 1.0 - hsva.v / 100.0),
            SliderKind::Hue => Interaction::horizontal(hsva.h / 360.0),
            SliderKind::Alpha => Interaction::horizontal(hsva.a),
        }
    }

    /// Human-readable value for assistive technology.
    pub fn value_text(self, hsva: &HsvaColor) -> String {
        match self {
            SliderKind::Saturation => format!(
                "Saturation {}%, Brightness {}%",
                round(hsva.s, 0),
                round(hsva.v, 0)
            ),
            SliderKind::Hue => format!("{}", round(hsva.h, 0)),
            SliderKind::Alpha => format!("{}%", round(hsva.a * 100.0, 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_maps_top_to_inverted_value() {
        let update = SliderKind::Saturation.update(Interaction::plane(0.25, 0.0));
        assert_eq!(update.s, Some(25.0));
        assert_eq!(update.v, Some(100.0));
        assert_eq!(update.h, None);

        let hsva = HsvaColor::new(10.0, 25.0, 100.0, 1.0);
        assert_eq!(SliderKind::Saturation.position(&hsva), Interaction::plane(0.25, 0.0));
    }

    #[test]
    fn strips_write_one_field() {
        assert_eq!(
            SliderKind::Hue.update(Interaction::horizontal(0.5)),
            HsvaUpdate::new().hue(180.0)
        );
        assert_eq!(
            SliderKind::Alpha.update(Interaction::horizontal(0.3)),
            HsvaUpdate::new().alpha(0.3)
        );
        assert!(SliderKind::Hue.update(Interaction::vertical(0.5)).is_empty());
    }

    #[test]
    fn position_and_update_are_inverse() {
        let hsva = HsvaColor::new(90.0, 40.0, 70.0, 0.6);
        for kind in [SliderKind::Saturation, SliderKind::Hue, SliderKind::Alpha] {
            let back = kind.update(kind.position(&hsva)).apply(HsvaColor::default());
            let round_trip = kind.update(kind.position(&back)).apply(hsva);
            assert!((round_trip.h - hsva.h).abs() < 1e-9);
            assert!((round_trip.s - hsva.s).abs() < 1e-9);
            assert!((round_trip.v - hsva.v).abs() < 1e-9);
            assert!((round_trip.a - hsva.a).abs() < 1e-9);
        }
    }

    #[test]
    fn value_text_is_rounded() {
        let hsva = HsvaColor::new(210.6, 33.3, 66.6, 0.456);
        assert_eq!(SliderKind::Saturation.value_text(&hsva), "Saturation 33%, Brightness 67%");
        assert_eq!(SliderKind::Hue.value_text(&hsva), "211");
        assert_eq!(SliderKind::Alpha.value_text(&hsva), "46%");
        assert_eq!(SliderKind::Alpha.label(), "Alpha");
    }
}
