//! Public conversions and models, as a host application would use them.

use floem_colorful::convert::{
    hex_to_hsva, hsva_to_hex, hsva_to_hsl_string, hsva_to_hsla_string, hsva_to_rgba_string,
};
use floem_colorful::validate::{escape_hex, valid_hex};
use floem_colorful::{
    ColorManipulation, ColorModel, Error, FnColorModel, HsvaColor, HsvaUpdate, RgbaColor,
    RgbaModel,
};

#[test]
fn display_strings() {
    let hsva = hex_to_hsva("#3366cc");
    assert_eq!(hsva_to_rgba_string(hsva), "rgba(51, 102, 204, 1)");
    assert_eq!(hsva_to_hsla_string(hsva), "hsla(220, 60%, 50%, 1)");
    assert_eq!(hsva_to_hsl_string(hsva), "hsl(220, 60%, 50%)");
    assert_eq!(hsva_to_hex(hsva, false), "3366cc");
}

#[test]
fn pasted_hex_is_escaped_before_validation() {
    let escaped = escape_hex("# ff-88 00", false);
    assert_eq!(escaped, "ff8800");
    assert!(valid_hex(&escaped, false));
    assert!(!valid_hex("ff88", false));
    assert!(valid_hex("ff88", true));
}

#[test]
fn rgba_parses_and_serializes() {
    let color: RgbaColor = "#22aa3380".parse().unwrap();
    assert_eq!((color.r, color.g, color.b), (0x22, 0xaa, 0x33));
    let json = serde_json::to_value(color).unwrap();
    assert_eq!(json["g"], 170);
    assert!(matches!("#12345".parse::<RgbaColor>(), Err(Error::InvalidHex(_))));
}

/// A host type: packed 0xRRGGBB.
#[test]
fn closure_model_drives_the_hook() {
    let model = FnColorModel::<u32>::builder()
        .default_color(0)
        .to_hsva(|packed| {
            RgbaModel.to_hsva(&RgbaColor::opaque(
                (packed >> 16) as u8,
                (packed >> 8) as u8,
                *packed as u8,
            ))
        })
        .from_hsva(|hsva| {
            let c = RgbaModel.from_hsva(hsva);
            (u32::from(c.r) << 16) | (u32::from(c.g) << 8) | u32::from(c.b)
        })
        .equal(|a, b| a == b)
        .build()
        .unwrap();

    let mut hook = ColorManipulation::with_default(model);
    assert_eq!(*hook.color(), 0);
    assert_eq!(hook.update(HsvaUpdate::new().value(100.0).saturation(100.0)), Some(0xff0000));
    assert_eq!(hook.update(HsvaUpdate::new().hue(240.0)), Some(0x0000ff));
    assert_eq!(hook.update(HsvaUpdate::new().alpha(0.5)), None);
    assert_eq!(hook.hsva(), HsvaColor::new(240.0, 100.0, 100.0, 0.5));
}

#[test]
fn incomplete_closure_model_is_rejected() {
    let err = FnColorModel::<u32>::builder().default_color(0).build().unwrap_err();
    assert!(matches!(err, Error::IncompleteColorModel { missing: "to_hsva" }));
}
