//! Sierpinski triangles by recursive subdivision.
//!
//! Two ways of drawing the same thing: [`leaves`] draws every triangle that
//! survives `depth` rounds of subdivision, and [`gasket`] draws the outer
//! triangle plus every hole that got cut out of it.

use crate::geo_types::shapes::Triangle;
use crate::render::Instruction;
use geo_types::Point;

/// Deepest subdivision a scene may ask for.
pub const MAX_DEPTH: u32 = 12;

/// The `3^depth` corner triangles left after `depth` subdivisions of the
/// equilateral triangle hanging off `apex`.
///
/// At each level the three children are visited apex, right, left, so the
/// output order is fixed.
pub fn leaves(apex: Point<f64>, side: f64, depth: u32) -> Vec<Triangle> {
    let mut out = Vec::with_capacity(3usize.pow(depth.min(MAX_DEPTH)));
    subdivide(&mut out, apex, side, depth);
    tracing::debug!(side, depth, triangles = out.len(), "sierpinski leaves");
    out
}

fn subdivide(out: &mut Vec<Triangle>, apex: Point<f64>, side: f64, depth: u32) {
    if depth == 0 {
        out.push(Triangle::from_apex(apex, side));
        return;
    }
    let half = 0.5 * side;
    for corner in Triangle::from_apex(apex, half).vertices() {
        subdivide(out, corner, half, depth - 1);
    }
}

/// The `(3^depth - 1) / 2` holes punched out by `depth` subdivisions, each
/// emitted before the three sub-triangles around it are visited.
pub fn holes(apex: Point<f64>, side: f64, depth: u32) -> Vec<Triangle> {
    let mut out = Vec::with_capacity((3usize.pow(depth.min(MAX_DEPTH)) - 1) / 2);
    punch(&mut out, apex, side, depth);
    tracing::debug!(side, depth, triangles = out.len(), "sierpinski holes");
    out
}

fn punch(out: &mut Vec<Triangle>, apex: Point<f64>, side: f64, depth: u32) {
    if depth == 0 {
        return;
    }
    out.push(Triangle::from_apex(apex, side).hole());
    let half = 0.5 * side;
    for corner in Triangle::from_apex(apex, half).vertices() {
        punch(out, corner, half, depth - 1);
    }
}

/// Holes, then the outer boundary on top.
pub fn gasket(apex: Point<f64>, side: f64, depth: u32) -> Vec<Triangle> {
    let mut out = holes(apex, side, depth);
    out.push(Triangle::from_apex(apex, side));
    out
}

/// Pen commands outlining each triangle in turn.
pub fn trace(triangles: &[Triangle]) -> Vec<Instruction> {
    triangles.iter().flat_map(|t| t.trace()).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_types::PointDistance;
    use geo::Area;
    use geo_types::point;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_depth_zero_is_the_triangle() {
        let apex = point! {x: 3.0, y: 4.0};
        assert_eq!(leaves(apex, 10.0, 0), vec![Triangle::from_apex(apex, 10.0)]);
        assert!(holes(apex, 10.0, 0).is_empty());
    }

    #[test]
    fn test_one_subdivision() {
        let parent = Triangle::from_apex(point! {x: 0.0, y: 0.0}, 100.0);
        let tris = leaves(point! {x: 0.0, y: 0.0}, 100.0, 1);
        assert_eq!(tris.len(), 3);
        for t in &tris {
            assert!((t.side() - 50.0).abs() < EPS);
        }
        // Each child keeps one corner of the parent...
        assert_eq!(tris[0].v1, parent.v1);
        assert!(tris[1].v2.distance(&parent.v2) < EPS);
        assert!(tris[2].v3.distance(&parent.v3) < EPS);
        // ...and its other vertices are edge midpoints.
        assert!(tris[0].v2.distance(&parent.v1.midpoint(&parent.v2)) < EPS);
        assert!(tris[0].v3.distance(&parent.v1.midpoint(&parent.v3)) < EPS);
        assert!(tris[1].v3.distance(&parent.v2.midpoint(&parent.v3)) < EPS);
    }

    #[test]
    fn test_first_hole_is_the_middle() {
        let apex = point! {x: 0.0, y: 500.0};
        let first = holes(apex, 1000.0, 3)[0];
        assert_eq!(first, Triangle::from_apex(apex, 1000.0).hole());
    }

    #[test]
    fn test_areas_add_up() {
        // Leaves plus holes cover the parent exactly.
        let apex = point! {x: 0.0, y: 0.0};
        let depth = 4;
        let parent = Triangle::from_apex(apex, 64.0).to_polygon().unsigned_area();
        let leaf_area: f64 = leaves(apex, 64.0, depth)
            .iter()
            .map(|t| t.to_polygon().unsigned_area())
            .sum();
        let hole_area: f64 = holes(apex, 64.0, depth)
            .iter()
            .map(|t| t.to_polygon().unsigned_area())
            .sum();
        assert!((leaf_area + hole_area - parent).abs() < 1e-6);
        assert!((leaf_area - parent * (0.75f64).powi(depth as i32)).abs() < 1e-6);
    }

    #[test]
    fn test_gasket_ends_with_boundary() {
        let apex = point! {x: 0.0, y: 0.0};
        let g = gasket(apex, 10.0, 2);
        assert_eq!(g.len(), 5);
        assert_eq!(g[4], Triangle::from_apex(apex, 10.0));
    }

    #[test]
    fn test_trace_length() {
        let tris = leaves(point! {x: 0.0, y: 0.0}, 8.0, 2);
        let instrs = trace(&tris);
        assert_eq!(instrs.len(), 6 * 9);
        assert_eq!(instrs[1], Instruction::MoveTo(tris[0].v1));
    }

    proptest! {
        #[test]
        fn prop_leaf_count_and_size(depth in 0u32..7, side in 1.0f64..2000.0,
                                    x in -500.0f64..500.0, y in -500.0f64..500.0) {
            let tris = leaves(point! {x: x, y: y}, side, depth);
            prop_assert_eq!(tris.len(), 3usize.pow(depth));
            let expected = side / 2f64.powi(depth as i32);
            for t in &tris {
                prop_assert!(t.is_equilateral(1e-9 * side));
                prop_assert!((t.side() - expected).abs() < 1e-9 * side);
            }
        }

        #[test]
        fn prop_hole_count(depth in 0u32..7, side in 1.0f64..2000.0) {
            let h = holes(point! {x: 0.0, y: 0.0}, side, depth);
            prop_assert_eq!(h.len(), (3usize.pow(depth) - 1) / 2);
            for t in &h {
                prop_assert!(t.is_equilateral(1e-9 * side));
            }
        }

        #[test]
        fn prop_idempotent(depth in 0u32..5, side in 1.0f64..100.0) {
            let apex = point! {x: 1.0, y: 2.0};
            prop_assert_eq!(leaves(apex, side, depth), leaves(apex, side, depth));
            prop_assert_eq!(gasket(apex, side, depth), gasket(apex, side, depth));
        }
    }
}
