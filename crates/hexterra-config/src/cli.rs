//! Command-line argument parsing for Hexterra.

use std::path::PathBuf;

use clap::Parser;
use hexterra_coords::HexOrientation;

use crate::{Config, DisplayMode};

/// Hexterra command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "hexterra", about = "Hex terrain generator")]
pub struct CliArgs {
    /// Number of grid columns.
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of grid rows.
    #[arg(long)]
    pub height: Option<u32>,

    /// Use flat-topped hexes instead of pointy-topped.
    #[arg(long)]
    pub flat_topped: Option<bool>,

    /// Noise frequency of the first octave.
    #[arg(long)]
    pub frequency: Option<f64>,

    /// Number of noise octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Noise seed; also enables a seeded random offset.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Color cells by height coefficient instead of biome.
    #[arg(long)]
    pub greyscale: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.grid.width = w;
        }
        if let Some(h) = args.height {
            self.grid.height = h;
        }
        if let Some(flat) = args.flat_topped {
            self.grid.orientation = if flat {
                HexOrientation::FlatTopped
            } else {
                HexOrientation::PointyTopped
            };
        }
        if let Some(f) = args.frequency {
            self.grid.noise_frequency = f;
        }
        if let Some(o) = args.octaves {
            self.grid.octaves = o;
        }
        if let Some(seed) = args.seed {
            self.generation.seed = seed;
            self.generation.randomize_offset = true;
        }
        if let Some(grey) = args.greyscale {
            self.grid.display_mode = if grey {
                DisplayMode::Greyscale
            } else {
                DisplayMode::BiomeColor
            };
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
