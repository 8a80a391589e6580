//! Output builders for finished knots
//!
//! The markup builder is a generic element-tree serializer; the SVG, TikZ,
//! and LaTeX builders consume projected geometry and junction state but
//! never reach back into the core.

/// LaTeX document assembly
pub mod latex;
/// Generic markup element trees
pub mod markup;
/// SVG knot rendering
pub mod svg;
/// TikZ figure construction
pub mod tikz;

pub use latex::{Environment, LatexDoc, knot_document};
pub use markup::Element;
pub use svg::KnotSvg;
pub use tikz::TikzPicture;
