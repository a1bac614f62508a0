use nalgebra::Vector2;

use crate::lattice::canvas::CanvasShift;
use crate::lattice::{LatticeClass, LatticePoint};

/// One side of a rectangular patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Bottom,
    Right,
    Top,
    Left,
}

/// Which of the two patch colours something is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourRole {
    BottomLeft,
    Other,
}

impl Edge {
    /// Emission order of the boundary arcs.
    pub const ALL: [Edge; 4] = [Edge::Bottom, Edge::Right, Edge::Top, Edge::Left];

    fn index(&self) -> usize {
        match self {
            Edge::Bottom => 0,
            Edge::Right => 1,
            Edge::Top => 2,
            Edge::Left => 3,
        }
    }

    /// Moves the arc origin from the cell's bottom left corner to the corner
    /// the arc is drawn from.
    pub fn shift(&self) -> CanvasShift {
        let (dx, dy) = EDGE_SHIFTS[self.index()];
        Vector2::new(dx, dy)
    }

    /// TikZ arc spec `(start:end:radius)`, angles in degrees.
    pub fn arc(&self) -> &'static str {
        ARC_PATHS[self.index()]
    }

    /// Is the site on this edge of a patch whose lattice is `nx` by `ny`.
    pub fn borders(&self, site: &LatticePoint, nx: i64, ny: i64) -> bool {
        match self {
            Edge::Bottom => site.y == 0,
            Edge::Right => site.x == nx - 1,
            Edge::Top => site.y == ny - 1,
            Edge::Left => site.x == 0,
        }
    }
}

const EDGE_SHIFTS: [(i64, i64); 4] = [(0, 0), (2, 0), (2, 2), (0, 2)];

const ARC_PATHS: [&str; 4] = ["(180:360:1)", "(-90:90:1)", "(0:180:1)", "(90:270:1)"];

/// The two ways a patch boundary can be dressed. `Nudged` swaps the lattice
/// class and the colour of every edge relative to `Standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryVariant {
    #[default]
    Standard,
    Nudged,
}

// Indexed bottom, right, top, left.
const STANDARD_CLASSES: [LatticeClass; 4] = [
    LatticeClass::Symmetric,
    LatticeClass::Skew,
    LatticeClass::Symmetric,
    LatticeClass::Skew,
];
const NUDGED_CLASSES: [LatticeClass; 4] = [
    LatticeClass::Skew,
    LatticeClass::Symmetric,
    LatticeClass::Skew,
    LatticeClass::Symmetric,
];
const STANDARD_COLOURS: [ColourRole; 4] = [
    ColourRole::Other,
    ColourRole::BottomLeft,
    ColourRole::Other,
    ColourRole::BottomLeft,
];
const NUDGED_COLOURS: [ColourRole; 4] = [
    ColourRole::BottomLeft,
    ColourRole::Other,
    ColourRole::BottomLeft,
    ColourRole::Other,
];

impl BoundaryVariant {
    pub fn from_nudge(nudge: bool) -> BoundaryVariant {
        if nudge {
            BoundaryVariant::Nudged
        } else {
            BoundaryVariant::Standard
        }
    }

    /// Lattice class whose sites carry the arcs on `edge`.
    pub fn edge_class(&self, edge: Edge) -> LatticeClass {
        match self {
            BoundaryVariant::Standard => STANDARD_CLASSES[edge.index()],
            BoundaryVariant::Nudged => NUDGED_CLASSES[edge.index()],
        }
    }

    /// Colour used to fill the arcs on `edge`.
    pub fn edge_colour(&self, edge: Edge) -> ColourRole {
        match self {
            BoundaryVariant::Standard => STANDARD_COLOURS[edge.index()],
            BoundaryVariant::Nudged => NUDGED_COLOURS[edge.index()],
        }
    }
}
