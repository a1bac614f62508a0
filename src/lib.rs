//! Surface code patch diagrams, as TikZ.
//!
//! Takes a small text file describing one or more rectangular surface code
//! patches (origin, distance, boundary nudge and two colours each) and turns
//! it into a `tikzpicture` of checkerboard plaquettes with half-disc boundary
//! stabilisers. The output is plain TikZ, meant to be `\input` into a LaTeX
//! document.
//!
//! ```rust
//! use sc_tikz::prelude::*;
//!
//! let request: PatchRequest = "origin_x 0 8\n\
//!                              origin_y 0 0\n\
//!                              distance_x 3\n\
//!                              distance_y 3\n\
//!                              nudges 0 1\n\
//!                              bottom_left_colour red\n\
//!                              other_colour blue\n"
//!     .parse()
//!     .unwrap();
//! let doc = assemble(&TikzOptions::default(), request.patches()).unwrap();
//! assert_eq!(doc.scope_count(), 2);
//! ```

/// Error types for request loading and document output.
pub mod errors;

/// Checkerboard classes of a lattice and the lattice to canvas transform.
pub mod lattice;

/// Layout of a single patch into drawing directives.
pub mod patch;

/// Request file parsing, including the single-value broadcast rule.
pub mod request;

/// TikZ document assembly and output.
pub mod tikz;

/// Everything needed to go from request text to a finished picture.
pub mod prelude {
    pub use crate::errors::{DocumentError, RequestLoadError};
    pub use crate::lattice::canvas::to_canvas;
    pub use crate::lattice::{skew_coords, symmetric_coords, LatticeClass};
    pub use crate::patch::{layout, BoundaryVariant, DrawDirective, Edge, PatchSpec};
    pub use crate::request::PatchRequest;
    pub use crate::tikz::{assemble, TikzDocument, TikzOptions};
}
