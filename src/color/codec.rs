use crate::foundation::core::{Rgb8, discretize_channel};
use crate::foundation::error::{MountainsError, MountainsResult};

/// A three channel color held in floating point.
///
/// Channels are nominally in `[0, 255]` but interpolation and per-layer drift may push them
/// outside that range; they are only clamped when discretized with [`Color::to_rgb8`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Black, also the fallback for unparseable hex strings.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);

    /// Build a color from raw channel values.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` (an optional leading `#` is accepted, case-insensitive).
    ///
    /// Channels are the big-endian byte groups of the 24-bit value.
    pub fn parse_hex(s: &str) -> MountainsResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 {
            return Err(MountainsError::color(format!(
                "\"{s}\" must be exactly six hex digits (RRGGBB)"
            )));
        }
        // from_str_radix alone would let a leading '+' through.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MountainsError::color(format!(
                "\"{s}\" contains a non-hex digit"
            )));
        }
        let v = u32::from_str_radix(digits, 16)
            .map_err(|e| MountainsError::color(format!("\"{s}\": {e}")))?;

        Ok(Self::rgb(
            f64::from((v >> 16) & 0xFF),
            f64::from((v >> 8) & 0xFF),
            f64::from(v & 0xFF),
        ))
    }

    /// Parse like [`Color::parse_hex`], falling back to black on malformed input.
    ///
    /// The fallback never fails a render; it is only reported through a `warn` event.
    pub fn from_hex_or_black(s: &str) -> Self {
        match Self::parse_hex(s) {
            Ok(c) => c,
            Err(err) => {
                tracing::warn!(%err, "falling back to black");
                Self::BLACK
            }
        }
    }

    /// Subtract the same scalar from every channel.
    pub fn shifted(self, delta: f64) -> Self {
        Self::rgb(self.r - delta, self.g - delta, self.b - delta)
    }

    /// Clamp each channel to `[0, 255]` and truncate to bytes.
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8::new(
            discretize_channel(self.r),
            discretize_channel(self.g),
            discretize_channel(self.b),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/codec.rs"]
mod tests;
