use super::edge::Edge;
use crate::lattice::canvas::CanvasPoint;

/// A single drawing instruction for one patch, in patch-local canvas units.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawDirective {
    /// 2x2 squares rooted at each coordinate.
    FillRegion {
        coords: Vec<CanvasPoint>,
        colour: String,
    },
    /// Closed unit-radius half discs starting at each coordinate.
    ArcFill {
        coords: Vec<CanvasPoint>,
        edge: Edge,
        colour: String,
    },
}

impl DrawDirective {
    pub fn coords(&self) -> &[CanvasPoint] {
        match self {
            DrawDirective::FillRegion { coords, .. } => coords,
            DrawDirective::ArcFill { coords, .. } => coords,
        }
    }

    pub fn colour(&self) -> &str {
        match self {
            DrawDirective::FillRegion { colour, .. } => colour,
            DrawDirective::ArcFill { colour, .. } => colour,
        }
    }

    pub fn edge(&self) -> Option<Edge> {
        match self {
            DrawDirective::FillRegion { .. } => None,
            DrawDirective::ArcFill { edge, .. } => Some(*edge),
        }
    }
}
