use super::*;

#[test]
fn parses_big_endian_byte_groups() {
    let c = Color::parse_hex("FF8000").unwrap();
    assert_eq!(c, Color::rgb(255.0, 128.0, 0.0));
    assert_eq!(c.to_rgb8(), Rgb8::new(255, 128, 0));

    let c = Color::parse_hex("123456").unwrap();
    assert_eq!(c, Color::rgb(18.0, 52.0, 86.0));
}

#[test]
fn accepts_lowercase_and_hash_prefix() {
    assert_eq!(
        Color::parse_hex("#ff8000").unwrap(),
        Color::rgb(255.0, 128.0, 0.0)
    );
    assert_eq!(Color::parse_hex(" ffffff ").unwrap(), Color::WHITE);
}

#[test]
fn rejects_bad_digits_and_lengths() {
    assert!(Color::parse_hex("00G000").is_err());
    assert!(Color::parse_hex("FFF").is_err());
    assert!(Color::parse_hex("FF80001").is_err());
    assert!(Color::parse_hex("").is_err());
    assert!(Color::parse_hex("+FFFFF").is_err());
    assert!(matches!(
        Color::parse_hex("zzzzzz"),
        Err(MountainsError::Color(_))
    ));
}

#[test]
fn malformed_input_falls_back_to_black() {
    assert_eq!(Color::from_hex_or_black("00G000"), Color::BLACK);
    assert_eq!(Color::from_hex_or_black("not a color"), Color::BLACK);
    assert_eq!(Color::from_hex_or_black("FF8000").to_rgb8(), Rgb8::new(255, 128, 0));
}

#[test]
fn shift_applies_one_scalar_to_all_channels() {
    let c = Color::rgb(10.0, 20.0, 30.0).shifted(-5.5);
    assert_eq!(c, Color::rgb(15.5, 25.5, 35.5));
}

#[test]
fn discretization_clamps_drifted_channels() {
    let c = Color::rgb(-12.0, 300.0, 254.9);
    assert_eq!(c.to_rgb8(), Rgb8::new(0, 255, 254));
}
