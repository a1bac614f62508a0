//! Checkerboard partition of a rectangular lattice. Every site of an
//! `nx` by `ny` box is either *symmetric* (x and y share parity) or *skew*
//! (they don't). Both lists come out in row-major order, x first then y,
//! and downstream edge filters rely on that order.
use nalgebra::Point2;

/// Canvas transform for lattice sites.
pub mod canvas;

/// A site on the logical lattice.
pub type LatticePoint = Point2<i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatticeClass {
    Symmetric,
    Skew,
}

impl LatticeClass {
    /// Which class the site (x, y) falls in.
    pub fn of(x: i64, y: i64) -> LatticeClass {
        if x.rem_euclid(2) == y.rem_euclid(2) {
            LatticeClass::Symmetric
        } else {
            LatticeClass::Skew
        }
    }

    /// The other class.
    pub fn opposite(&self) -> LatticeClass {
        match self {
            LatticeClass::Symmetric => LatticeClass::Skew,
            LatticeClass::Skew => LatticeClass::Symmetric,
        }
    }

    pub fn coords(&self, nx: i64, ny: i64) -> Vec<LatticePoint> {
        match self {
            LatticeClass::Symmetric => symmetric_coords(nx, ny),
            LatticeClass::Skew => skew_coords(nx, ny),
        }
    }
}

/// Walk the box column by column, keeping the y values whose parity is
/// `y_parity(x)`. Never sorted afterwards, the walk order is the output order.
fn parity_walk(nx: i64, ny: i64, y_parity: impl Fn(i64) -> i64) -> Vec<LatticePoint> {
    let mut coords = vec![];
    for x in 0..nx {
        let wanted = y_parity(x);
        for y in 0..ny {
            if y % 2 == wanted {
                coords.push(Point2::new(x, y));
            }
        }
    }
    coords
}

/// All sites where x and y are both even or both odd.
pub fn symmetric_coords(nx: i64, ny: i64) -> Vec<LatticePoint> {
    parity_walk(nx, ny, |x| x % 2)
}

/// All sites that are even-odd or odd-even.
pub fn skew_coords(nx: i64, ny: i64) -> Vec<LatticePoint> {
    parity_walk(nx, ny, |x| 1 - x % 2)
}
