use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use mountains::{MountainConfig, PngFileSink};

/// Commandline tool to procedurally generate a mountain range as png.
#[derive(Parser, Debug)]
#[command(name = "mountains", version, override_usage = "mountains [options]")]
struct Cli {
    /// The WIDTH of the image [default: 1280].
    #[arg(short = 'w', long, value_name = "WIDTH")]
    width: Option<u32>,

    /// The HEIGHT of the image [default: 720].
    #[arg(long, visible_alias = "ht", value_name = "HEIGHT")]
    height: Option<u32>,

    /// The given SEED for the mountains [default: derived from the clock]. Negative seeds are
    /// accepted and reinterpreted as their unsigned 64-bit two's complement.
    #[arg(short = 's', long, value_name = "SEED", allow_negative_numbers = true, value_parser = parse_seed)]
    seed: Option<u64>,

    /// The destination PATH of the generated image.
    #[arg(short = 'd', long, value_name = "PATH", default_value = "mountains.png")]
    destination: PathBuf,

    /// The starting color for the gradient [default: 000000].
    #[arg(long, visible_alias = "sc", value_name = "RRGGBB")]
    starting_color: Option<String>,

    /// The ending color for the gradient [default: 000000].
    #[arg(long, visible_alias = "ec", value_name = "RRGGBB")]
    ending_color: Option<String>,

    /// The background color of the image [default: FFFFFF].
    #[arg(long, visible_alias = "bg", value_name = "RRGGBB")]
    background_color: Option<String>,

    /// The gradient target for the background [default: FFFFFF].
    #[arg(long, visible_alias = "gc", value_name = "RRGGBB")]
    gradient_color: Option<String>,

    /// The AMOUNT of change each step [default: 1.0].
    #[arg(short = 'c', long, value_name = "AMOUNT")]
    change: Option<f64>,

    /// The HEIGHT of the next step [default: 3.0].
    #[arg(long, visible_alias = "st", value_name = "HEIGHT")]
    step: Option<f64>,

    /// Run the background gradient top-to-bottom instead of left-to-right.
    #[arg(long, visible_alias = "ttb")]
    top_to_bottom: bool,

    /// Set the number of layers [default: 1].
    #[arg(short = 'l', long, value_name = "COUNT")]
    layers: Option<u32>,

    /// JSON configuration file; command-line flags override its values.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the resolved configuration as JSON and exit without rendering.
    #[arg(long)]
    dump_config: bool,

    /// Log per-layer details.
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let cfg = resolve_config(&cli)?;
    cfg.validate().context("invalid configuration")?;

    if cli.dump_config {
        println!("{}", cfg.to_json_pretty()?);
        return Ok(());
    }

    let mut sink = PngFileSink::new(&cli.destination);
    mountains::render_to_sink(&cfg, &mut sink)
        .with_context(|| format!("generate '{}'", cli.destination.display()))?;

    eprintln!("wrote {} (seed {})", cli.destination.display(), cfg.seed);
    Ok(())
}

/// Accept any signed or unsigned 64-bit integer.
fn parse_seed(s: &str) -> Result<u64, String> {
    s.parse::<u64>()
        .or_else(|_| s.parse::<i64>().map(|v| v as u64))
        .map_err(|e| format!("invalid seed '{s}': {e}"))
}

fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the config file, then explicit flags.
fn resolve_config(cli: &Cli) -> anyhow::Result<MountainConfig> {
    let (mut cfg, file_has_seed) = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => (MountainConfig::default(), false),
    };
    if !file_has_seed {
        cfg.seed = mountains::seed_from_clock();
    }

    if let Some(v) = cli.width {
        cfg.width = v;
    }
    if let Some(v) = cli.height {
        cfg.height = v;
    }
    if let Some(v) = cli.seed {
        cfg.seed = v;
    }
    if let Some(v) = &cli.starting_color {
        cfg.starting_color.clone_from(v);
    }
    if let Some(v) = &cli.ending_color {
        cfg.ending_color.clone_from(v);
    }
    if let Some(v) = &cli.background_color {
        cfg.background_color.clone_from(v);
    }
    if let Some(v) = &cli.gradient_color {
        cfg.gradient_color.clone_from(v);
    }
    if let Some(v) = cli.change {
        cfg.step_change = v;
    }
    if let Some(v) = cli.step {
        cfg.step_max = v;
    }
    if cli.top_to_bottom {
        cfg.top_to_bottom = true;
    }
    if let Some(v) = cli.layers {
        cfg.layers = v;
    }
    Ok(cfg)
}

fn read_config_file(path: &Path) -> anyhow::Result<(MountainConfig, bool)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open config '{}'", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("parse config '{}'", path.display()))?;
    let has_seed = value.get("seed").is_some();
    let cfg = MountainConfig::from_json_value(value)
        .with_context(|| format!("parse config '{}'", path.display()))?;
    Ok((cfg, has_seed))
}
