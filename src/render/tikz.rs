//! TikZ figure construction
//!
//! Emits a `tikzpicture` wrapped in a centered figure environment. The knot
//! is expressed as thick line segments: junction bridges plus the projected
//! weave segments. Coordinates stay in grid units; TikZ scaling is left to
//! the enclosing document.

use crate::geometry::projector::project;
use crate::geometry::style::Styling;
use crate::lattice::grid::Grid;

/// A line segment inside the picture
#[derive(Debug, Clone, Copy)]
struct TikzLine {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Builder for a TikZ figure
#[derive(Debug, Clone, Default)]
pub struct TikzPicture {
    components: Vec<TikzLine>,
}

impl TikzPicture {
    /// Create an empty picture
    pub const fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Build a picture from a grid's junctions and weave segments
    pub fn from_grid(grid: &Grid, styling: &Styling) -> Self {
        let mut picture = Self::new();
        for junction in grid.junctions() {
            picture.add_line(
                junction.source.0 as f64,
                junction.source.1 as f64,
                junction.target.0 as f64,
                junction.target.1 as f64,
            );
        }
        for node in project(grid, styling) {
            for segment in &node.lines {
                picture.add_line(
                    segment.source.x,
                    segment.source.y,
                    segment.target.x,
                    segment.target.y,
                );
            }
        }
        picture
    }

    /// Append one line segment
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.components.push(TikzLine { x1, y1, x2, y2 });
    }

    /// Number of segments in the picture
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the picture has no segments
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Serialize the figure markup
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("\\begin{figure}[!h] \n");
        out.push_str("\\centering \n");
        out.push_str("\\begin{tikzpicture} \n");
        for line in &self.components {
            out.push_str(&format!(
                "\\draw [ultra thick] ({},{}) -- ({},{}); \n",
                line.x1, line.y1, line.x2, line.y2
            ));
        }
        out.push_str("\\end{tikzpicture} \n");
        out.push_str("\\end{figure} \n");
        out
    }
}
