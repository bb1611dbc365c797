use std::path::{Path, PathBuf};

use crate::foundation::error::{MountainsError, MountainsResult};
use crate::render::canvas::Canvas;

/// Final destination of a finished canvas.
///
/// A sink takes ownership of the canvas. Any error is fatal for the run.
pub trait RasterSink {
    /// Encode and persist `canvas`.
    fn write(&mut self, canvas: Canvas) -> MountainsResult<()>;
}

/// Writes the canvas as an 8-bit RGB PNG file.
#[derive(Debug, Clone)]
pub struct PngFileSink {
    path: PathBuf,
}

impl PngFileSink {
    /// A sink writing to `path`. Parent directories are created on write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RasterSink for PngFileSink {
    fn write(&mut self, canvas: Canvas) -> MountainsResult<()> {
        ensure_parent_dir(&self.path)?;
        let (width, height) = (canvas.width(), canvas.height());
        image::save_buffer_with_format(
            &self.path,
            canvas.data(),
            width,
            height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .map_err(|e| {
            MountainsError::encode(format!("write png '{}': {e}", self.path.display()))
        })?;
        tracing::info!(path = %self.path.display(), width, height, "wrote png");
        Ok(())
    }
}

/// Keeps the last canvas in memory; for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySink {
    canvas: Option<Canvas>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured canvas, if any.
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Take the captured canvas, if any.
    pub fn into_canvas(self) -> Option<Canvas> {
        self.canvas
    }
}

impl RasterSink for InMemorySink {
    fn write(&mut self, canvas: Canvas) -> MountainsResult<()> {
        self.canvas = Some(canvas);
        Ok(())
    }
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> MountainsResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
