use crate::config::MountainConfig;
use crate::encode::sink::RasterSink;
use crate::foundation::error::MountainsResult;
use crate::foundation::rng::Rng64;
use crate::render::canvas::Canvas;
use crate::render::renderer::CanvasRenderer;
use crate::terrain::compositor::{CompositorParams, LayerCompositor, TerrainTrace};

/// Render the mountain range described by `cfg`.
pub fn generate(cfg: &MountainConfig) -> MountainsResult<Canvas> {
    let (canvas, _) = run(cfg, false)?;
    Ok(canvas)
}

/// Render like [`generate`] and also return a per-column record of every layer.
pub fn generate_with_trace(cfg: &MountainConfig) -> MountainsResult<(Canvas, TerrainTrace)> {
    let (canvas, trace) = run(cfg, true)?;
    Ok((canvas, trace.unwrap_or_default()))
}

/// Render and hand the canvas to `sink`. Sink failures abort the run.
pub fn render_to_sink(cfg: &MountainConfig, sink: &mut dyn RasterSink) -> MountainsResult<()> {
    let canvas = generate(cfg)?;
    sink.write(canvas)
}

#[tracing::instrument(skip(cfg), fields(width = cfg.width, height = cfg.height, seed = cfg.seed, layers = cfg.layers))]
fn run(cfg: &MountainConfig, trace: bool) -> MountainsResult<(Canvas, Option<TerrainTrace>)> {
    cfg.validate()?;

    let mut rng = Rng64::new(cfg.seed);
    let palette = cfg.palette();

    let mut renderer = CanvasRenderer::from_config(cfg);
    renderer.paint_background(&cfg.background_gradient(&palette));

    let mut compositor = LayerCompositor::new(CompositorParams::from_config(cfg), &palette);
    if trace {
        compositor = compositor.with_trace();
    }
    compositor.run(cfg.layers, &mut rng, &mut renderer);

    Ok((renderer.into_canvas(), compositor.into_trace()))
}
