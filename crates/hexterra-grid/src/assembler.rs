//! The generation pass state machine.

use std::time::{Duration, Instant};

use glam::DVec2;
use hexterra_config::{Config, DisplayMode};
use hexterra_coords::{HexCoord, HexLayout, HexOrientation};
use hexterra_mesh::build_cell;
use hexterra_terrain::{
    BiomeClassifier, Color, ElevationMapper, HeightmapParams, HeightmapSampler, NoiseField,
    PerlinField, random_offset,
};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::cell::Cell;
use crate::error::GenerationError;
use crate::render::CellRenderer;
use crate::stats::{BiomeCounts, HeightStats};

/// Where the assembler is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeneratorState {
    /// No pass has completed, or the last trigger was rejected.
    #[default]
    Idle,
    /// A pass is running.
    Generating,
    /// The last pass completed and its cells are available.
    Ready,
}

/// Outcome of a completed pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PassSummary {
    /// Columns generated.
    pub width: u32,
    /// Rows generated.
    pub height: u32,
    /// Hexagon orientation the cells were laid out with.
    pub orientation: HexOrientation,
    /// Noise offset actually used (configured or seeded).
    pub offset: DVec2,
    /// Observed height coefficient range.
    pub heights: HeightStats,
    /// Cells per biome.
    pub biomes: BiomeCounts,
    /// Wall time of the pass.
    pub elapsed: Duration,
}

impl PassSummary {
    /// Number of cells the pass produced.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Everything needed to turn a coordinate into a finished [`Cell`].
///
/// Immutable for the duration of a pass, so it can be shared across rayon
/// workers.
struct CellPipeline<N: NoiseField> {
    sampler: HeightmapSampler<N>,
    mapper: ElevationMapper,
    classifier: BiomeClassifier,
    layout: HexLayout,
    orientation: HexOrientation,
    inner_size: f32,
    outer_size: f32,
    display_mode: DisplayMode,
    width: u32,
    height: u32,
}

impl<N: NoiseField> CellPipeline<N> {
    fn coord_at(&self, index: usize) -> HexCoord {
        let width = self.width as usize;
        HexCoord::new((index % width) as i32, (index / width) as i32)
    }

    fn build(&self, coord: HexCoord) -> Cell {
        let nx = f64::from(coord.column) / f64::from(self.width);
        let ny = f64::from(coord.row) / f64::from(self.height);

        let height_coefficient = self.sampler.height_coefficient(nx, ny);
        let classification = self.classifier.classify(self.mapper.elevation(height_coefficient));

        let color = match self.display_mode {
            DisplayMode::BiomeColor => classification.color,
            DisplayMode::Greyscale => Color::grey((1.0 - height_coefficient) as f32),
        };

        Cell {
            coord,
            height_coefficient,
            elevation: classification.elevation,
            biome: classification.biome,
            color,
            position: self.layout.to_world(coord),
            mesh: build_cell(
                self.inner_size,
                self.outer_size,
                classification.elevation,
                self.orientation,
            ),
        }
    }
}

/// Runs generation passes and owns the cells of the latest one.
///
/// The noise field is rebuilt from `generation.seed` at the start of every
/// pass, so changing the seed through [`set_config`](Self::set_config) takes
/// effect on the next [`generate`](Self::generate).
pub struct GridAssembler<N: NoiseField = PerlinField> {
    config: Config,
    make_noise: fn(u32) -> N,
    state: GeneratorState,
    cells: Vec<Cell>,
    summary: Option<PassSummary>,
}

impl GridAssembler<PerlinField> {
    /// Assembler sampling seeded Perlin noise.
    pub fn new(config: Config) -> Self {
        Self::with_noise(config, PerlinField::new)
    }
}

impl<N: NoiseField> GridAssembler<N> {
    /// Assembler sampling the field produced by `make_noise(seed)`.
    ///
    /// The 64-bit configured seed is truncated to its low 32 bits.
    pub fn with_noise(config: Config, make_noise: fn(u32) -> N) -> Self {
        Self {
            config,
            make_noise,
            state: GeneratorState::Idle,
            cells: Vec::new(),
            summary: None,
        }
    }

    /// Configuration the next pass will use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration. Returns `true` if it changed, meaning the
    /// current cells are stale until the next pass.
    pub fn set_config(&mut self, config: Config) -> bool {
        if config == self.config {
            return false;
        }
        self.config = config;
        true
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// Cells of the last completed pass in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Summary of the last completed pass.
    pub fn summary(&self) -> Option<&PassSummary> {
        self.summary.as_ref()
    }

    /// The cell at `coord` from the last completed pass.
    pub fn cell(&self, coord: HexCoord) -> Option<&Cell> {
        let summary = self.summary.as_ref()?;
        if coord.column < 0 || coord.row < 0 {
            return None;
        }
        let (column, row) = (coord.column as u32, coord.row as u32);
        if column >= summary.width || row >= summary.height {
            return None;
        }
        self.cells
            .get(row as usize * summary.width as usize + column as usize)
    }

    /// Generated cells adjacent to `coord`. Cells on the grid edge have fewer
    /// than six.
    ///
    /// Adjacency follows the layout of the last completed pass, not the
    /// current configuration.
    pub fn neighbors(&self, coord: HexCoord) -> Vec<&Cell> {
        let Some(summary) = self.summary.as_ref() else {
            return Vec::new();
        };
        coord
            .neighbors(summary.orientation)
            .into_iter()
            .filter_map(|n| self.cell(n))
            .collect()
    }

    /// Run a full pass and feed the result to `renderer`.
    ///
    /// An invalid configuration is rejected before anything is touched: the
    /// previous cells stay available and `renderer` receives no calls. A valid
    /// pass discards the previous cells, clears `renderer`, and submits every
    /// new cell in row-major order.
    pub fn generate(
        &mut self,
        renderer: &mut dyn CellRenderer,
    ) -> Result<&PassSummary, GenerationError> {
        self.state = GeneratorState::Generating;
        let start = Instant::now();

        let (pipeline, offset) = match self.pipeline() {
            Ok(ready) => ready,
            Err(err) => {
                warn!("Generation rejected: {err}");
                self.state = GeneratorState::Idle;
                return Err(err);
            }
        };

        self.cells.clear();
        self.summary = None;
        renderer.clear();

        let count = self.config.grid.cell_count();
        let cells: Vec<Cell> = if self.config.generation.parallel {
            (0..count)
                .into_par_iter()
                .map(|i| pipeline.build(pipeline.coord_at(i)))
                .collect()
        } else {
            (0..count)
                .map(|i| pipeline.build(pipeline.coord_at(i)))
                .collect()
        };

        let heights = if self.config.generation.parallel {
            cells
                .par_iter()
                .fold(HeightStats::default, |stats, cell| {
                    stats.with(cell.height_coefficient)
                })
                .reduce(HeightStats::default, HeightStats::merge)
        } else {
            cells
                .iter()
                .fold(HeightStats::default(), |stats, cell| {
                    stats.with(cell.height_coefficient)
                })
        };

        let mut biomes = BiomeCounts::default();
        for cell in &cells {
            biomes.record(cell.biome);
            renderer.submit(cell);
        }

        let summary = PassSummary {
            width: pipeline.width,
            height: pipeline.height,
            orientation: pipeline.orientation,
            offset,
            heights,
            biomes,
            elapsed: start.elapsed(),
        };

        debug!(
            "Height coefficient range [{:.4}, {:.4}], offset ({:.2}, {:.2})",
            heights.min, heights.max, offset.x, offset.y
        );
        info!(
            "Generated {}x{} grid ({} cells) in {:.2}ms: {}",
            summary.width,
            summary.height,
            cells.len(),
            summary.elapsed.as_secs_f64() * 1000.0,
            biomes
                .iter()
                .map(|(biome, n)| format!("{biome}={n}"))
                .collect::<Vec<_>>()
                .join(" "),
        );

        self.cells = cells;
        self.state = GeneratorState::Ready;
        Ok(self.summary.insert(summary))
    }

    /// Validate the configuration and build the per-pass pipeline.
    fn pipeline(&self) -> Result<(CellPipeline<N>, DVec2), GenerationError> {
        self.config.validate()?;

        let grid = &self.config.grid;
        let generation = &self.config.generation;

        let offset = if generation.randomize_offset {
            random_offset(generation.seed)
        } else {
            DVec2::from_array(grid.noise_offset)
        };

        let sampler = HeightmapSampler::new(
            (self.make_noise)(generation.seed as u32),
            HeightmapParams {
                frequency: grid.noise_frequency,
                octaves: grid.octaves,
                offset,
            },
        )?;
        let mapper =
            ElevationMapper::new(grid.min_height, grid.max_height, generation.elevation_span)?;
        let classifier =
            BiomeClassifier::with_tiering(self.config.biomes.thresholds, self.config.biomes.tiering);

        let pipeline = CellPipeline {
            sampler,
            mapper,
            classifier,
            layout: HexLayout::new(grid.orientation, grid.outer_size),
            orientation: grid.orientation,
            inner_size: grid.inner_size,
            outer_size: grid.outer_size,
            display_mode: grid.display_mode,
            width: grid.width,
            height: grid.height,
        };
        Ok((pipeline, offset))
    }
}
