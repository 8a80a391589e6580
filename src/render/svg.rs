//! SVG rendering of a knot
//!
//! Builds the element tree for a finished knot: background rectangle,
//! junction bridges, node polygons, then weave segments. Gap width between
//! bands comes from the edge stroke; the junction stroke is doubled so
//! bridges read as a single merged band.

use crate::geometry::projector::project;
use crate::geometry::style::Styling;
use crate::io::configuration::{
    JUNCTION_STROKE_MULTIPLIER, NARROW_GAP_DIVISOR, WIDE_GAP_DIVISOR,
};
use crate::lattice::grid::Grid;
use crate::render::markup::Element;

/// SVG builder over a grid and styling
pub struct KnotSvg<'a> {
    grid: &'a Grid,
    styling: Styling,
    scale: f64,
    edge: f64,
    background: String,
    foreground: String,
}

impl<'a> KnotSvg<'a> {
    /// Create a renderer with plain styling and wide gaps
    pub fn new(grid: &'a Grid, scale: f64) -> Self {
        Self {
            grid,
            styling: Styling::plain(grid),
            scale,
            edge: scale / WIDE_GAP_DIVISOR,
            background: "black".to_string(),
            foreground: "white".to_string(),
        }
    }

    /// Stylized polygons, standard bevel, wide gaps
    #[must_use]
    pub fn chunky_style(mut self) -> Self {
        let mut styling = Styling::stylized(self.grid);
        styling.standard_bevel();
        self.styling = styling;
        self.wide_gaps()
    }

    /// Stylized polygons, slight bevel, narrow gaps
    #[must_use]
    pub fn curvy_style(mut self) -> Self {
        let mut styling = Styling::stylized(self.grid);
        styling.slight_bevel();
        self.styling = styling;
        self.narrow_gaps()
    }

    /// Plain polygons, wide gaps
    #[must_use]
    pub fn blocky_style(mut self) -> Self {
        self.styling = Styling::plain(self.grid);
        self.wide_gaps()
    }

    /// Use a custom styling
    #[must_use]
    pub fn with_styling(mut self, styling: Styling) -> Self {
        self.styling = styling;
        self
    }

    /// Narrow the gap between bands
    #[must_use]
    pub fn narrow_gaps(mut self) -> Self {
        self.edge = self.scale / NARROW_GAP_DIVISOR;
        self
    }

    /// Widen the gap between bands
    #[must_use]
    pub fn wide_gaps(mut self) -> Self {
        self.edge = self.scale / WIDE_GAP_DIVISOR;
        self
    }

    /// Band color
    #[must_use]
    pub fn background(mut self, color: &str) -> Self {
        self.background = color.to_string();
        self
    }

    /// Page color
    #[must_use]
    pub fn foreground(mut self, color: &str) -> Self {
        self.foreground = color.to_string();
        self
    }

    /// Render the knot to an SVG string
    pub fn render(&self) -> String {
        let width = (self.grid.xdim() - 1) as f64 * self.scale;
        let height = (self.grid.ydim() - 1) as f64 * self.scale;

        let mut svg = Element::new("svg")
            .attr("version", "1.1")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("align", "center")
            .attr("width", width)
            .attr("height", height)
            .child(
                Element::new("rect")
                    .attr("width", width)
                    .attr("height", height)
                    .attr("fill", &self.foreground),
            );

        for junction in self.grid.junctions() {
            let line = Element::new("line")
                .attr("x1", junction.source.0 as f64 * self.scale)
                .attr("y1", junction.source.1 as f64 * self.scale)
                .attr("x2", junction.target.0 as f64 * self.scale)
                .attr("y2", junction.target.1 as f64 * self.scale)
                .attr("stroke-width", self.edge * JUNCTION_STROKE_MULTIPLIER)
                .attr("stroke", &self.background)
                .attr("stroke-linecap", "round");
            svg = svg.child(line);
        }

        let geometry = project(self.grid, &self.styling);
        for node in &geometry {
            let mut vertices = String::new();
            for coord in &node.polygon {
                vertices.push_str(&format!(
                    "{},{} ",
                    coord.x * self.scale,
                    coord.y * self.scale
                ));
            }
            let polygon = Element::new("polygon")
                .attr("points", vertices.trim_end())
                .attr("stroke-width", self.edge)
                .attr("fill", &self.background)
                .attr("stroke", &self.background);
            svg = svg.child(polygon);
        }

        for node in &geometry {
            for segment in &node.lines {
                let line = Element::new("line")
                    .attr("x1", segment.source.x * self.scale)
                    .attr("y1", segment.source.y * self.scale)
                    .attr("x2", segment.target.x * self.scale)
                    .attr("y2", segment.target.y * self.scale)
                    .attr("stroke-width", self.edge)
                    .attr("stroke", &self.background)
                    .attr("stroke-linecap", "round");
                svg = svg.child(line);
            }
        }

        svg.render()
    }
}
