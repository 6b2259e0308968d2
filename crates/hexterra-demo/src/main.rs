//! Demo binary that generates a hex terrain grid and writes a PNG preview.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p hexterra-demo -- --width 32 --height 24 --preview map.png`.
//! Pass `--watch` to keep running and rebuild whenever `config.ron` changes.

mod preview;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use hexterra_config::{CliArgs, Config};
use hexterra_grid::{GridAssembler, PassSummary};
use tracing::{error, info, warn};

use crate::preview::PreviewRenderer;

#[derive(Parser, Debug)]
#[command(name = "hexterra", about = "Hex terrain generator")]
struct DemoArgs {
    #[command(flatten)]
    settings: CliArgs,

    /// Write a one-pixel-per-cell PNG of the grid to this path.
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Poll `config.ron` and regenerate when it changes.
    #[arg(long)]
    watch: bool,
}

fn main() -> ExitCode {
    let args = DemoArgs::parse();

    let config_dir = args.settings.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hexterra")
    });

    let mut file_config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    let mut config = file_config.clone();
    config.apply_cli_overrides(&args.settings);

    let log_dir = config_dir.join("logs");
    hexterra_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));
    info!("Using config directory {}", config_dir.display());

    let mut assembler = GridAssembler::new(config);
    if !run_pass(&mut assembler, args.preview.as_deref()) {
        return ExitCode::FAILURE;
    }

    if args.watch {
        info!("Watching {} for changes", config_dir.display());
        loop {
            std::thread::sleep(Duration::from_secs(1));
            match file_config.reload(&config_dir) {
                Ok(Some(new_config)) => {
                    file_config = new_config;
                    let mut config = file_config.clone();
                    config.apply_cli_overrides(&args.settings);
                    if assembler.set_config(config) {
                        run_pass(&mut assembler, args.preview.as_deref());
                    }
                }
                Ok(None) => {}
                Err(e) => warn!("Config reload failed: {e}"),
            }
        }
    }

    ExitCode::SUCCESS
}

/// Generate once and optionally save the preview. Returns `false` on failure.
fn run_pass(assembler: &mut GridAssembler, preview_path: Option<&Path>) -> bool {
    let grid = &assembler.config().grid;
    let mut preview = PreviewRenderer::new(grid.width, grid.height);

    let summary = match assembler.generate(&mut preview) {
        Ok(summary) => summary.clone(),
        Err(e) => {
            error!("Generation failed: {e}");
            return false;
        }
    };
    log_summary(&summary);

    if let Some(path) = preview_path {
        match preview.save(path) {
            Ok(()) => info!("Wrote preview to {}", path.display()),
            Err(e) => {
                error!("{e}");
                return false;
            }
        }
    }
    true
}

fn log_summary(summary: &PassSummary) {
    info!(
        "Height coefficients in [{:.3}, {:.3}] over {} cells",
        summary.heights.min,
        summary.heights.max,
        summary.cell_count()
    );
    for (biome, count) in summary.biomes.iter() {
        if count > 0 {
            info!("  {biome:<8} {count}");
        }
    }
}
