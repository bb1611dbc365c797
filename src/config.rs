use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::color::codec::Color;
use crate::color::gradient::{GradientAxis, LinearGradient};
use crate::foundation::error::{MountainsError, MountainsResult};
use crate::render::canvas::Canvas;
use crate::terrain::walker::WalkParams;

/// Largest canvas a run will allocate, in pixels (16384 x 16384).
pub const MAX_PIXELS: u64 = 1 << 28;

/// Everything one generation run needs, built once and passed by reference.
///
/// Serialized with camelCase keys; missing keys take their defaults, so a JSON file only needs
/// the values it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct MountainConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels; also the ceiling of every height walk.
    pub height: u32,
    /// Seed for the run's random source.
    pub seed: u64,
    /// Maximum slope magnitude.
    pub step_max: f64,
    /// Maximum per-column slope change.
    pub step_change: f64,
    /// Number of terrain layers, front to back.
    pub layers: u32,
    /// Foreground gradient start, `RRGGBB`.
    pub starting_color: String,
    /// Foreground gradient end, `RRGGBB`.
    pub ending_color: String,
    /// Background gradient start, `RRGGBB`.
    pub background_color: String,
    /// Background gradient end, `RRGGBB`.
    pub gradient_color: String,
    /// Run the background gradient down the canvas instead of across it.
    pub top_to_bottom: bool,
    /// How far a rear layer is pushed down when it reaches the silhouette in front of it.
    pub occlusion_offset: f64,
    /// Per-layer color drift is drawn from `[-drift_span, 0)`.
    pub drift_span: f64,
    /// Width of the stroke used to draw each column.
    pub stroke_width: f64,
}

impl Default for MountainConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            seed: 0,
            step_max: 3.0,
            step_change: 1.0,
            layers: 1,
            starting_color: "000000".to_owned(),
            ending_color: "000000".to_owned(),
            background_color: "FFFFFF".to_owned(),
            gradient_color: "FFFFFF".to_owned(),
            top_to_bottom: false,
            occlusion_offset: 25.0,
            drift_span: 25.0,
            stroke_width: 5.0,
        }
    }
}

impl MountainConfig {
    /// Read a (possibly partial) JSON configuration file.
    pub fn from_json_path(path: &Path) -> MountainsResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            MountainsError::serde(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json_str(text: &str) -> MountainsResult<Self> {
        let value = serde_json::from_str(text).map_err(|e| MountainsError::serde(e.to_string()))?;
        Self::from_json_value(value)
    }

    /// Build from an already parsed (possibly partial) JSON object.
    pub fn from_json_value(value: serde_json::Value) -> MountainsResult<Self> {
        serde_json::from_value(value).map_err(|e| MountainsError::serde(e.to_string()))
    }

    /// Pretty JSON including every field, suitable for replaying a run.
    pub fn to_json_pretty(&self) -> MountainsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MountainsError::serde(e.to_string()))
    }

    /// Reject configurations the generator cannot render.
    pub fn validate(&self) -> MountainsResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MountainsError::validation(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        let pixels = u64::from(self.width) * u64::from(self.height);
        let bytes = usize::try_from(pixels)
            .ok()
            .and_then(|p| p.checked_mul(Canvas::CHANNELS));
        if pixels > MAX_PIXELS || bytes.is_none() {
            return Err(MountainsError::validation(format!(
                "canvas {}x{} exceeds the {MAX_PIXELS} pixel limit",
                self.width, self.height
            )));
        }
        for (name, v) in [
            ("stepMax", self.step_max),
            ("stepChange", self.step_change),
            ("occlusionOffset", self.occlusion_offset),
            ("driftSpan", self.drift_span),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(MountainsError::validation(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(MountainsError::validation(format!(
                "strokeWidth must be finite and > 0, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }

    /// Ceiling of the height walk, equal to the canvas height.
    pub fn height_max(&self) -> f64 {
        f64::from(self.height)
    }

    /// Walk bounds derived from this configuration.
    pub fn walk_params(&self) -> WalkParams {
        WalkParams {
            height_max: self.height_max(),
            step_max: self.step_max,
            step_change: self.step_change,
        }
    }

    /// Axis of the background gradient.
    pub fn background_axis(&self) -> GradientAxis {
        if self.top_to_bottom {
            GradientAxis::TopToBottom
        } else {
            GradientAxis::LeftToRight
        }
    }

    /// Resolve the four base colors, falling back to black for malformed strings.
    pub fn palette(&self) -> Palette {
        Palette {
            foreground_start: Color::from_hex_or_black(&self.starting_color),
            foreground_end: Color::from_hex_or_black(&self.ending_color),
            background_start: Color::from_hex_or_black(&self.background_color),
            background_end: Color::from_hex_or_black(&self.gradient_color),
        }
    }

    /// Background gradient over the whole canvas.
    pub fn background_gradient(&self, palette: &Palette) -> LinearGradient {
        LinearGradient::new(
            palette.background_start,
            palette.background_end,
            self.background_axis(),
            self.width,
            self.height,
        )
    }
}

/// The run's four resolved base colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Left end of the first layer's gradient.
    pub foreground_start: Color,
    /// Right end of the first layer's gradient.
    pub foreground_end: Color,
    /// First background stop.
    pub background_start: Color,
    /// Second background stop.
    pub background_end: Color,
}

/// A seed derived from the wall clock, for runs that do not pin one.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
