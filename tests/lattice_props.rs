//! Property-based tests for the lattice partition, canvas transform and
//! patch layout.

use std::collections::HashSet;

use nalgebra::Point2;
use proptest::prelude::*;
use sc_tikz::prelude::*;

fn pairs(coords: &[Point2<i64>]) -> Vec<(i64, i64)> {
    coords.iter().map(|p| (p.x, p.y)).collect()
}

/// Recover the lattice class of every arc site `layout` emitted for `edge`,
/// by undoing the edge shift and the canvas transform.
fn arc_classes(directive: &DrawDirective, edge: Edge) -> Vec<LatticeClass> {
    directive
        .coords()
        .iter()
        .map(|p| {
            let cell = *p - edge.shift();
            assert_eq!((cell.x % 2, cell.y % 2), (1, 1));
            LatticeClass::of((cell.x - 1) / 2, (cell.y - 1) / 2)
        })
        .collect()
}

proptest! {
    /// The two classes cover the box exactly once.
    #[test]
    fn prop_classes_partition_box(nx in 0i64..40, ny in 0i64..40) {
        let sym = pairs(&symmetric_coords(nx, ny));
        let skew = pairs(&skew_coords(nx, ny));
        prop_assert_eq!((sym.len() + skew.len()) as i64, nx * ny);

        let sym_set: HashSet<(i64, i64)> = sym.iter().copied().collect();
        let skew_set: HashSet<(i64, i64)> = skew.iter().copied().collect();
        prop_assert!(sym_set.is_disjoint(&skew_set));

        for x in 0..nx {
            for y in 0..ny {
                prop_assert!(sym_set.contains(&(x, y)) || skew_set.contains(&(x, y)));
            }
        }
    }

    /// Both lists are strictly increasing in (x, y).
    #[test]
    fn prop_classes_are_row_major(nx in 0i64..40, ny in 0i64..40) {
        for coords in [symmetric_coords(nx, ny), skew_coords(nx, ny)] {
            let list = pairs(&coords);
            prop_assert!(list.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn prop_to_canvas_formula(x in 0i64..10_000, y in 0i64..10_000) {
        let p = to_canvas(&Point2::new(x, y));
        prop_assert_eq!((p.x, p.y), (2 * x + 1, 2 * y + 1));
    }

    #[test]
    fn prop_to_canvas_injective(
        a in (0i64..1000, 0i64..1000),
        b in (0i64..1000, 0i64..1000),
    ) {
        let pa = to_canvas(&Point2::new(a.0, a.1));
        let pb = to_canvas(&Point2::new(b.0, b.1));
        prop_assert_eq!(a == b, pa == pb);
    }

    /// Flipping the nudge flips colour on every edge and never touches fills.
    #[test]
    fn prop_nudge_swaps_edges(dx in 1i64..12, dy in 1i64..12) {
        let standard = layout(&PatchSpec::new((0, 0), (dx, dy), false, "red", "blue"));
        let nudged = layout(&PatchSpec::new((0, 0), (dx, dy), true, "red", "blue"));
        prop_assert_eq!(&standard[..2], &nudged[..2]);
        for (s, n) in standard[2..].iter().zip(&nudged[2..]) {
            prop_assert_eq!(s.edge(), n.edge());
            prop_assert_ne!(s.colour(), n.colour());
            let edge = s.edge().unwrap();
            let standard_classes = arc_classes(s, edge);
            let nudged_classes = arc_classes(n, edge);
            // Unnudged, horizontal edges sit on symmetric sites and vertical
            // edges on skew sites.
            let expected = match edge {
                Edge::Bottom | Edge::Top => LatticeClass::Symmetric,
                Edge::Right | Edge::Left => LatticeClass::Skew,
            };
            for class in &standard_classes {
                prop_assert_eq!(*class, expected);
            }
            for class in &nudged_classes {
                prop_assert_eq!(*class, expected.opposite());
            }
        }
    }

    /// Every fill square is inside the patch and fills never overlap.
    #[test]
    fn prop_fills_tile_the_patch(dx in 1i64..15, dy in 1i64..15) {
        let directives = layout(&PatchSpec::new((0, 0), (dx, dy), false, "a", "b"));
        let squares: Vec<(i64, i64)> = directives[..2]
            .iter()
            .flat_map(|d| pairs(d.coords()))
            .collect();
        prop_assert_eq!(squares.len() as i64, (dx - 1) * (dy - 1));
        let unique: HashSet<(i64, i64)> = squares.iter().copied().collect();
        prop_assert_eq!(unique.len(), squares.len());
        for (x, y) in squares {
            prop_assert!(x >= 1 && x < 2 * dx - 1);
            prop_assert!(y >= 1 && y < 2 * dy - 1);
        }
    }
}
