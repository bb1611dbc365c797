use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MountainsError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(MountainsError::color("x").to_string().contains("color error:"));
    assert!(
        MountainsError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        MountainsError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MountainsError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
