//! Command-line interface for knot generation
//!
//! Generation is deterministic for a fixed seed: the same arguments always
//! produce the same knot, junction for junction.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::geometry::style::Styling;
use crate::io::configuration::{
    DEFAULT_KNOT_HEIGHT, DEFAULT_KNOT_WIDTH, DEFAULT_PROBABILITY, DEFAULT_SCALE, DEFAULT_SEED,
    MAX_KNOT_DIMENSION, MIN_KNOT_DIMENSION,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::lattice::grid::Grid;
use crate::render::latex::knot_document;
use crate::render::svg::KnotSvg;
use crate::render::tikz::TikzPicture;
use crate::topology::crossings::crossing_count;
use crate::topology::paths::trace_paths;
use crate::topology::regions::region_count;

/// Band shape preset
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum StylePreset {
    /// Plain diamonds with wide gaps
    Blocky,
    /// Stylized polygons with the standard bevel
    Chunky,
    /// Stylized polygons with the slight bevel and narrow gaps
    Curvy,
    /// Coin-flip shape per node
    Random,
}

/// Output markup flavor
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Scalable vector graphics
    Svg,
    /// Bare TikZ figure
    Tikz,
    /// TikZ figure wrapped in a compilable LaTeX document
    Latex,
}

#[derive(Parser)]
#[command(name = "knotweave")]
#[command(author, version, about = "Generate Celtic knot patterns as SVG or TikZ")]
/// Command-line arguments for the knot generator
pub struct Cli {
    /// Knot width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_KNOT_WIDTH)]
    pub width: usize,

    /// Knot height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_KNOT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Band shape preset
    #[arg(long, value_enum, default_value_t = StylePreset::Chunky)]
    pub style: StylePreset,

    /// Output markup flavor
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Skip the outer border frame
    #[arg(long)]
    pub no_borders: bool,

    /// Number of concentric inner frames
    #[arg(long, default_value_t = 0)]
    pub inner_frames: usize,

    /// Apply randomized junction toggling
    #[arg(short, long)]
    pub random: bool,

    /// Percent chance per node for random toggling
    #[arg(short, long, default_value_t = DEFAULT_PROBABILITY)]
    pub probability: u32,

    /// Pixel size of one grid unit in SVG output
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Output file (stdout if absent)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print crossing, region, and loop counts to stderr
    #[arg(long)]
    pub stats: bool,

    /// Suppress stderr output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Builds a knot from CLI arguments and writes it out
pub struct KnotRunner {
    cli: Cli,
}

impl KnotRunner {
    /// Create a runner over parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the knot and write it to the requested destination
    ///
    /// # Errors
    ///
    /// Returns an error when a parameter fails validation or the output
    /// destination cannot be written.
    pub fn run(&self) -> Result<()> {
        self.validate()?;

        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut grid = Grid::new(self.cli.width, self.cli.height);

        if !self.cli.no_borders {
            grid.borders();
        }
        for step in 1..=self.cli.inner_frames {
            grid.inner_frame(step);
        }
        if self.cli.random {
            grid.random_lines(self.cli.probability, &mut rng);
        }

        let styling = self.styling(&grid, &mut rng);
        let rendered = match self.cli.format {
            OutputFormat::Svg => self.render_svg(&grid, styling),
            OutputFormat::Tikz => TikzPicture::from_grid(&grid, &styling).render(),
            OutputFormat::Latex => {
                let figure = TikzPicture::from_grid(&grid, &styling).render();
                knot_document(&figure).render()
            }
        };

        self.write_output(&rendered)?;
        self.report_stats(&grid);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.cli.width), ("height", self.cli.height)] {
            if !(MIN_KNOT_DIMENSION..=MAX_KNOT_DIMENSION).contains(&value) {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &format!("must be between {MIN_KNOT_DIMENSION} and {MAX_KNOT_DIMENSION}"),
                ));
            }
        }
        if self.cli.probability > 100 {
            return Err(invalid_parameter(
                "probability",
                &self.cli.probability,
                &"must be a percentage between 0 and 100",
            ));
        }
        if self.cli.scale <= 0.0 {
            return Err(invalid_parameter(
                "scale",
                &self.cli.scale,
                &"must be positive",
            ));
        }
        Ok(())
    }

    fn styling(&self, grid: &Grid, rng: &mut StdRng) -> Styling {
        match self.cli.style {
            StylePreset::Blocky => Styling::plain(grid),
            StylePreset::Chunky => Styling::stylized(grid),
            StylePreset::Curvy => {
                let mut styling = Styling::stylized(grid);
                styling.slight_bevel();
                styling
            }
            StylePreset::Random => Styling::randomized(grid, rng),
        }
    }

    fn render_svg(&self, grid: &Grid, styling: Styling) -> String {
        let svg = KnotSvg::new(grid, self.cli.scale).with_styling(styling);
        let svg = match self.cli.style {
            StylePreset::Curvy => svg.narrow_gaps(),
            StylePreset::Blocky | StylePreset::Chunky | StylePreset::Random => svg.wide_gaps(),
        };
        svg.render()
    }

    fn write_output(&self, rendered: &str) -> Result<()> {
        match &self.cli.output {
            Some(path) => std::fs::write(path, rendered)
                .map_err(|source| file_system_error(path.clone(), "write", source)),
            None => {
                let mut stdout = std::io::stdout();
                stdout
                    .write_all(rendered.as_bytes())
                    .and_then(|()| stdout.write_all(b"\n"))
                    .map_err(|source| {
                        file_system_error(PathBuf::from("<stdout>"), "write", source)
                    })
            }
        }
    }

    // Allow print for user-requested statistics
    #[allow(clippy::print_stderr)]
    fn report_stats(&self, grid: &Grid) {
        if !self.cli.stats || self.cli.quiet {
            return;
        }
        let paths = trace_paths(grid);
        eprintln!(
            "crossings: {}  regions: {}  loops: {}",
            crossing_count(grid),
            region_count(grid),
            paths.loop_count()
        );
    }
}
