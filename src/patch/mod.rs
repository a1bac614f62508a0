//! Layout of a single surface code patch. A patch of distance `(dx, dy)` has
//! a `(dx - 1) x (dy - 1)` lattice of plaquettes, painted as a checkerboard,
//! with half-disc stabilisers hanging off each of its four edges.
//! See [`layout`].

/// Edges, boundary variants and the lookup tables that tie them together.
pub mod edge;

/// The drawing instructions a layout produces.
pub mod directive;

use crate::lattice::canvas::{to_canvas, to_canvas_shifted};
use crate::lattice::{skew_coords, symmetric_coords, LatticeClass};
pub use directive::DrawDirective;
pub use edge::{BoundaryVariant, ColourRole, Edge};

/// Everything needed to draw one patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSpec {
    /// Canvas translation of the whole patch.
    pub origin: (i64, i64),
    /// Code distance along each axis.
    pub distance: (i64, i64),
    /// Nudge flag as written in the request, nonzero swaps the boundary.
    pub nudge: i64,
    pub bottom_left_colour: String,
    pub other_colour: String,
}

impl PatchSpec {
    pub fn new(
        origin: (i64, i64),
        distance: (i64, i64),
        nudge: bool,
        bottom_left_colour: &str,
        other_colour: &str,
    ) -> PatchSpec {
        PatchSpec {
            origin,
            distance,
            nudge: i64::from(nudge),
            bottom_left_colour: bottom_left_colour.to_string(),
            other_colour: other_colour.to_string(),
        }
    }

    /// Size of the plaquette lattice, one less than the distance per axis.
    /// Saturates, so a hugely negative distance is still just an empty lattice.
    pub fn size(&self) -> (i64, i64) {
        (
            self.distance.0.saturating_sub(1),
            self.distance.1.saturating_sub(1),
        )
    }

    pub fn is_nudged(&self) -> bool {
        self.nudge != 0
    }

    pub fn variant(&self) -> BoundaryVariant {
        BoundaryVariant::from_nudge(self.is_nudged())
    }

    pub fn colour(&self, role: ColourRole) -> &str {
        match role {
            ColourRole::BottomLeft => &self.bottom_left_colour,
            ColourRole::Other => &self.other_colour,
        }
    }
}

/// Lay out one patch as an ordered list of directives: the symmetric fill,
/// the skew fill, then one arc batch per edge in [`Edge::ALL`] order.
/// Edges with no boundary sites still get an (empty) arc batch.
pub fn layout(spec: &PatchSpec) -> Vec<DrawDirective> {
    let (nx, ny) = spec.size();
    let variant = spec.variant();

    let mut directives = vec![
        DrawDirective::FillRegion {
            coords: symmetric_coords(nx, ny).iter().map(to_canvas).collect(),
            colour: spec.colour(ColourRole::BottomLeft).to_string(),
        },
        DrawDirective::FillRegion {
            coords: skew_coords(nx, ny).iter().map(to_canvas).collect(),
            colour: spec.colour(ColourRole::Other).to_string(),
        },
    ];

    for edge in Edge::ALL {
        let class: LatticeClass = variant.edge_class(edge);
        let shift = edge.shift();
        let coords = class
            .coords(nx, ny)
            .iter()
            .filter(|site| edge.borders(site, nx, ny))
            .map(|site| to_canvas_shifted(site, &shift))
            .collect();
        directives.push(DrawDirective::ArcFill {
            coords,
            edge,
            colour: spec.colour(variant.edge_colour(edge)).to_string(),
        });
    }
    directives
}
