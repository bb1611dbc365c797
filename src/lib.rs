//! Procedurally generated, layered mountain ranges.
//!
//! A run turns a [`MountainConfig`] (a seed plus a handful of shape and color parameters) into
//! a [`Canvas`] of RGB8 pixels, then hands it to a [`RasterSink`].
//!
//! # Pipeline overview
//!
//! 1. **Resolve colors**: four `RRGGBB` strings become [`Color`]s; malformed strings fall back to
//!    black without failing the run.
//! 2. **Background**: every pixel is blended between the two background colors along the
//!    configured [`GradientAxis`].
//! 3. **Layers**: for each layer a [`HeightWalker`] produces one height per column. The
//!    [`LayerCompositor`] keeps a [`HeightCache`] so rear layers are pushed down behind the
//!    silhouette in front of them, drifts the layer colors, and asks the [`CanvasRenderer`] to
//!    draw every column.
//! 4. **Encode**: the finished canvas is moved into a sink, e.g. [`PngFileSink`].
//!
//! Everything is single-threaded and driven by one seeded [`Rng64`]; the same seed and
//! configuration always yield byte-identical canvases.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod config;
mod encode;
mod foundation;
mod pipeline;
mod render;
mod terrain;

pub use color::codec::Color;
pub use color::gradient::{GradientAxis, LinearGradient, interpolate, lerp};
pub use config::{MAX_PIXELS, MountainConfig, Palette, seed_from_clock};
pub use encode::sink::{InMemorySink, PngFileSink, RasterSink, ensure_parent_dir};
pub use foundation::core::{Rgb8, discretize_channel};
pub use foundation::error::{MountainsError, MountainsResult};
pub use foundation::rng::Rng64;
pub use pipeline::{generate, generate_with_trace, render_to_sink};
pub use render::canvas::Canvas;
pub use render::renderer::CanvasRenderer;
pub use terrain::compositor::{
    ColumnPainter, ColumnSample, CompositorParams, HeightCache, LayerCompositor, LayerTrace,
    TerrainTrace,
};
pub use terrain::walker::{HeightWalker, WalkParams};
