// File: crates/demo/src/main.rs
// Summary: Demo seeds a series (random or CSV), simulates tap gestures, and renders a PNG per frame.

mod data;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{LayoutConfig, SeriesStore, Size};
use chart_render_skia::{theme, ChartView, RenderOptions, SkiaRenderer};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TapMode {
    /// Each tap appends one random measurement and scrolls to it.
    Append,
    /// Each tap regenerates the whole series.
    Replace,
}

#[derive(Parser, Debug)]
#[command(name = "linechart-demo", version, about = "Render a scrollable line chart and simulate taps")]
struct Cli {
    /// Number of random measurements to seed with (ignored with --csv)
    #[arg(long, default_value_t = 200)]
    count: usize,
    /// Number of simulated taps after the first frame
    #[arg(long, default_value_t = 3)]
    taps: usize,
    #[arg(long, value_enum, default_value_t = TapMode::Append)]
    mode: TapMode,
    /// Seed series from a CSV with a `value` column
    #[arg(long)]
    csv: Option<PathBuf>,
    /// TOML file overriding layout parameters
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 390)]
    width: i32,
    #[arg(long, default_value_t = 140)]
    height: i32,
    /// light, dark or prototype
    #[arg(long, default_value = "light")]
    theme: String,
    /// Initial value reference line
    #[arg(long)]
    initial: Option<f64>,
    /// Target value reference line
    #[arg(long)]
    target: Option<f64>,
    /// RNG seed for reproducible frames
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "target/out")]
    out: PathBuf,
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let base = chrono::Local::now().naive_local();

    let seed_series = match &cli.csv {
        Some(path) => data::load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => data::random_series(&mut rng, base, cli.count),
    };
    let mut store = SeriesStore::with_series(data::with_references(seed_series, cli.initial, cli.target));
    info!(entries = store.len(), "series seeded");

    let mut view = ChartView::attach(&mut store, config);
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions {
        width: cli.width,
        height: cli.height,
        theme: theme::find(&cli.theme),
        draw_labels: !cli.no_labels,
        ..RenderOptions::default()
    };
    let screen = Size::new(cli.width as f64, cli.height as f64);

    std::fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;
    let frame = |view: &mut ChartView, store: &SeriesStore, n: usize| -> Result<()> {
        view.relayout(store, screen);
        let layout = view.layout().context("no layout after relayout")?;
        let bounds = layout.bounds;
        let path = cli.out.join(format!("frame_{n:03}.png"));
        renderer.render_to_png(layout, view.viewport(), &opts, &path)?;
        info!(
            frame = n,
            points = layout.points.len(),
            min = bounds.min,
            max = bounds.max,
            offset = view.viewport().offset(),
            "wrote {}",
            path.display()
        );
        Ok(())
    };

    frame(&mut view, &store, 0)?;
    for tap in 1..=cli.taps {
        match cli.mode {
            TapMode::Append => {
                let m = data::random_measurement(&mut rng, base, store.series().measure_count());
                let id = store.append(m);
                info!(tap, sequence_id = id, "tap appended measurement");
            }
            TapMode::Replace => {
                let fresh = data::random_series(&mut rng, base, cli.count);
                store.replace(data::with_references(fresh, cli.initial, cli.target));
                info!(tap, "tap regenerated series");
            }
        }
        frame(&mut view, &store, tap)?;
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<LayoutConfig> {
    let Some(path) = path else { return Ok(LayoutConfig::default()) };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = LayoutConfig::from_toml_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    info!(path = %path.display(), "layout config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::{ChartLayout, GapPolicy, StepWidth};

    fn asset(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(name)
    }

    #[test]
    fn bundled_config_parses() {
        let cfg = load_config(Some(asset("layout.toml").as_path())).expect("config");
        assert_eq!(cfg.step, StepWidth::VisibleColumns(9));
        assert_eq!(cfg.gap_policy, GapPolicy::Break);
    }

    #[test]
    fn missing_config_path_uses_defaults() {
        assert_eq!(load_config(None).expect("defaults"), LayoutConfig::default());
    }

    #[test]
    fn bundled_csv_lays_out_with_reference_lines() {
        let series = data::load_csv(&asset("series.csv")).expect("csv");
        assert_eq!(series.measure_count(), 11);
        let layout = ChartLayout::compute(&series, Size::new(390.0, 140.0), &LayoutConfig::default());
        assert_eq!(layout.points.iter().filter(|p| p.is_none()).count(), 2);
        assert!(layout.initial_line.is_some());
        // Target 75 is inside the 32.4..=81.0 range, so it is not clamped.
        let target = layout.target_line.expect("target line");
        assert!(target.y > 30.0 && target.y < 110.0);
    }

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["linechart-demo"]);
        assert_eq!(cli.count, 200);
        assert_eq!(cli.mode, TapMode::Append);
        assert_eq!(cli.height, 140);
    }
}
