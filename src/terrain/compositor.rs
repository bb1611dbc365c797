use crate::color::codec::Color;
use crate::color::gradient::LinearGradient;
use crate::config::{MountainConfig, Palette};
use crate::foundation::rng::Rng64;
use crate::terrain::walker::{HeightWalker, WalkParams};

/// Receives every column a layer produces, in left to right order.
pub trait ColumnPainter {
    /// Draw column `x` from the canvas floor up to `height` in `color`.
    fn draw_column(&mut self, x: u32, height: f64, color: Color);
}

/// Largest height painted so far at every column.
///
/// Index addressed and zero initialized; values only ever increase.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightCache {
    heights: Vec<f64>,
}

impl HeightCache {
    /// An empty cache for `width` columns.
    pub fn new(width: u32) -> Self {
        Self {
            heights: vec![0.0; width as usize],
        }
    }

    /// Cached height at column `x`.
    pub fn get(&self, x: u32) -> f64 {
        self.heights[x as usize]
    }

    /// Record `height` at column `x` if it is at least the cached value.
    pub fn raise(&mut self, x: u32, height: f64) {
        let slot = &mut self.heights[x as usize];
        if *slot <= height {
            *slot = height;
        }
    }

    /// All cached heights, column 0 first.
    pub fn as_slice(&self) -> &[f64] {
        &self.heights
    }
}

/// Tuning that governs how layers interact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositorParams {
    /// Number of columns.
    pub width: u32,
    /// Walk bounds shared by every layer.
    pub walk: WalkParams,
    /// Push-down applied when a rear layer reaches the cached silhouette.
    pub occlusion_offset: f64,
    /// Color drift per layer is drawn from `[-drift_span, 0)`.
    pub drift_span: f64,
}

impl CompositorParams {
    /// Params for a run of `cfg`.
    pub fn from_config(cfg: &MountainConfig) -> Self {
        Self {
            width: cfg.width,
            walk: cfg.walk_params(),
            occlusion_offset: cfg.occlusion_offset,
            drift_span: cfg.drift_span,
        }
    }
}

/// What happened at one column of one layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnSample {
    /// Column index.
    pub x: u32,
    /// Height after the walk step and ceiling bounce, before occlusion and the floor.
    pub walked_height: f64,
    /// Final height drawn at this column.
    pub height: f64,
    /// Slope carried into the next column.
    pub slope: f64,
    /// Whether the occlusion push-down fired.
    pub pushed_down: bool,
    /// Cache value before this column was processed.
    pub cached_before: f64,
    /// Cache value after this column was processed.
    pub cached_after: f64,
    /// Color the column was drawn with.
    pub color: Color,
}

/// Record of one layer, used to inspect a run after the fact.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerTrace {
    /// 1-based layer ordinal.
    pub ordinal: u32,
    /// Drift drawn for this layer; zero for the first.
    pub drift: f64,
    /// Foreground gradient start after drift.
    pub start: Color,
    /// Foreground gradient end after drift.
    pub end: Color,
    /// Height the walk started at.
    pub initial_height: f64,
    /// Slope the walk started with.
    pub initial_slope: f64,
    /// One entry per column, left to right.
    pub columns: Vec<ColumnSample>,
}

/// Every layer of a run, front layer first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainTrace {
    /// Layers in the order they were composited.
    pub layers: Vec<LayerTrace>,
}

/// Runs one height walk per layer and keeps rear layers behind the ones in front.
#[derive(Debug)]
pub struct LayerCompositor {
    params: CompositorParams,
    cache: HeightCache,
    start: Color,
    end: Color,
    next_ordinal: u32,
    trace: Option<TerrainTrace>,
}

impl LayerCompositor {
    /// A compositor whose first layer uses the palette's foreground pair.
    pub fn new(params: CompositorParams, palette: &Palette) -> Self {
        Self {
            params,
            cache: HeightCache::new(params.width),
            start: palette.foreground_start,
            end: palette.foreground_end,
            next_ordinal: 1,
            trace: None,
        }
    }

    /// Record a [`TerrainTrace`] while compositing.
    pub fn with_trace(mut self) -> Self {
        self.trace = Some(TerrainTrace::default());
        self
    }

    /// The height cache as it stands.
    pub fn cache(&self) -> &HeightCache {
        &self.cache
    }

    /// Composite `layers` layers in order.
    pub fn run(&mut self, layers: u32, rng: &mut Rng64, painter: &mut impl ColumnPainter) {
        for _ in 0..layers {
            self.composite_layer(rng, painter);
        }
    }

    /// Composite the next layer.
    ///
    /// Random draws, in order: initial height, initial slope, the color drift (from the second
    /// layer on), then one slope delta per column.
    pub fn composite_layer(&mut self, rng: &mut Rng64, painter: &mut impl ColumnPainter) {
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;

        let p = self.params;
        let mut walker = HeightWalker::start(p.walk, rng);
        let (initial_height, initial_slope) = (walker.height(), walker.slope());

        let mut drift = 0.0;
        if ordinal > 1 {
            drift = rng.uniform_negative(p.drift_span);
            self.start = self.start.shifted(drift);
            self.end = self.end.shifted(drift);
        }
        tracing::debug!(
            ordinal,
            initial_height,
            initial_slope,
            drift,
            "compositing layer"
        );

        let gradient = LinearGradient::horizontal(self.start, self.end, p.width);
        let mut columns = self
            .trace
            .as_ref()
            .map(|_| Vec::with_capacity(p.width as usize));

        for x in 0..p.width {
            walker.advance(rng);
            let walked_height = walker.height();
            let cached_before = self.cache.get(x);

            let pushed_down = ordinal > 1 && walked_height >= cached_before;
            if pushed_down {
                walker.push_down(p.occlusion_offset);
            }
            walker.bounce_floor();

            let height = walker.height();
            self.cache.raise(x, height);

            let color = gradient.color_at(f64::from(x), height);
            painter.draw_column(x, height, color);

            if let Some(columns) = columns.as_mut() {
                columns.push(ColumnSample {
                    x,
                    walked_height,
                    height,
                    slope: walker.slope(),
                    pushed_down,
                    cached_before,
                    cached_after: self.cache.get(x),
                    color,
                });
            }
        }

        if let (Some(trace), Some(columns)) = (self.trace.as_mut(), columns) {
            trace.layers.push(LayerTrace {
                ordinal,
                drift,
                start: self.start,
                end: self.end,
                initial_height,
                initial_slope,
                columns,
            });
        }
    }

    /// Finish and hand back the recorded trace, if tracing was enabled.
    pub fn into_trace(self) -> Option<TerrainTrace> {
        self.trace
    }
}

#[cfg(test)]
#[path = "../../tests/unit/terrain/compositor.rs"]
mod tests;
