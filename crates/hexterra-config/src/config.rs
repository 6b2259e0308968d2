//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use hexterra_coords::HexOrientation;
use hexterra_terrain::{BiomeThresholds, BiomeTiering, ElevationSpan};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside a config directory.
pub const CONFIG_FILE: &str = "config.ron";

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid shape, cell geometry, and noise parameters.
    pub grid: GridConfig,
    /// Biome bands.
    pub biomes: BiomeConfig,
    /// Generation pass behaviour.
    pub generation: GenerationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// How cells are colored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DisplayMode {
    /// Each cell takes its biome's color.
    #[default]
    BiomeColor,
    /// Each cell is grey, darker for higher height coefficients.
    Greyscale,
}

/// Grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
    /// Hexagon orientation.
    pub orientation: HexOrientation,
    /// Radius of the inner ring of each cap (0 for solid caps).
    pub inner_size: f32,
    /// Circumradius of each cell.
    pub outer_size: f32,
    /// Lowest elevation a cell can take.
    pub min_height: f32,
    /// Highest elevation a cell can take.
    pub max_height: f32,
    /// Frequency of the first noise octave over the normalised grid.
    pub noise_frequency: f64,
    /// Number of noise octaves (at least 1).
    pub octaves: u32,
    /// Offset added to noise sample positions.
    pub noise_offset: [f64; 2],
    /// Biome colors or greyscale heights.
    pub display_mode: DisplayMode,
}

/// Biome band configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BiomeConfig {
    /// Elevation cutoffs between bands.
    pub thresholds: BiomeThresholds,
    /// Five bands with sand, or four without.
    pub tiering: BiomeTiering,
}

/// Generation pass configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed for the noise permutation table and the random offset.
    pub seed: u64,
    /// Replace `grid.noise_offset` with an offset derived from `seed`.
    pub randomize_offset: bool,
    /// How height coefficients are stretched over the elevation range.
    pub elevation_span: ElevationSpan,
    /// Build cells on the rayon thread pool.
    pub parallel: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            orientation: HexOrientation::PointyTopped,
            inner_size: 0.0,
            outer_size: 1.0,
            min_height: 1.0,
            max_height: 10.0,
            noise_frequency: 4.0,
            octaves: 2,
            noise_offset: [0.0, 0.0],
            display_mode: DisplayMode::BiomeColor,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            randomize_offset: false,
            elevation_span: ElevationSpan::Exact,
            parallel: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl GridConfig {
    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Re-read the file: `Some(new_config)` if it differs from `self`, `None` otherwise.
    ///
    /// A changed config means the grid must be rebuilt from scratch.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
