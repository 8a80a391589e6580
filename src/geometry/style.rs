//! Per-node shape and bevel styling

use rand::Rng;

use crate::lattice::grid::Grid;

/// Bevel used by the chunky preset
pub const STANDARD_BEVEL: f64 = 1.0 / 4.0;
/// Bevel used by the curvy preset
pub const SLIGHT_BEVEL: f64 = 1.0 / 6.0;

/// Polygon variant drawn on a node
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeShape {
    /// Axis-aligned diamond, ignoring junction state
    Plain,
    /// Junction-aware outline with beveled sides
    Stylized,
}

/// Shape and bevel for one node
#[derive(Clone, Copy, Debug)]
pub struct NodeStyle {
    /// Polygon variant
    pub shape: NodeShape,
    /// Bevel inset for stylized sides
    pub bevel: f64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            shape: NodeShape::Plain,
            bevel: STANDARD_BEVEL,
        }
    }
}

/// Styling for every node of a grid, in node construction order
#[derive(Clone, Debug)]
pub struct Styling {
    styles: Vec<NodeStyle>,
}

impl Styling {
    /// Plain diamonds everywhere
    pub fn plain(grid: &Grid) -> Self {
        Self {
            styles: vec![NodeStyle::default(); grid.node_positions().len()],
        }
    }

    /// Stylized outlines everywhere
    pub fn stylized(grid: &Grid) -> Self {
        Self {
            styles: vec![
                NodeStyle {
                    shape: NodeShape::Stylized,
                    bevel: STANDARD_BEVEL,
                };
                grid.node_positions().len()
            ],
        }
    }

    /// Coin-flip shape per node
    pub fn randomized<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        let styles = grid
            .node_positions()
            .iter()
            .map(|_| {
                let shape = if rng.random_range(0..2) == 0 {
                    NodeShape::Stylized
                } else {
                    NodeShape::Plain
                };
                NodeStyle {
                    shape,
                    bevel: STANDARD_BEVEL,
                }
            })
            .collect();
        Self { styles }
    }

    /// Apply the standard bevel to every node
    pub fn standard_bevel(&mut self) -> &mut Self {
        for style in &mut self.styles {
            style.bevel = STANDARD_BEVEL;
        }
        self
    }

    /// Apply the slight bevel to every node
    pub fn slight_bevel(&mut self) -> &mut Self {
        for style in &mut self.styles {
            style.bevel = SLIGHT_BEVEL;
        }
        self
    }

    /// Style for the node at a given ordinal
    pub fn get(&self, ordinal: usize) -> NodeStyle {
        self.styles.get(ordinal).copied().unwrap_or_default()
    }
}
