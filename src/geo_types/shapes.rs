use super::PointDistance;
use crate::render::Instruction;
use geo_types::{point, LineString, Point, Polygon};

/// Height of an equilateral triangle with the given side.
pub fn equilateral_height(side: f64) -> f64 {
    side * 3.0f64.sqrt() / 2.0
}

/// Three vertices, kept in (apex, right-base, left-base) order for everything
/// built with [`Triangle::from_apex`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v1: Point<f64>,
    pub v2: Point<f64>,
    pub v3: Point<f64>,
}

impl Triangle {
    pub fn new(v1: Point<f64>, v2: Point<f64>, v3: Point<f64>) -> Triangle {
        Triangle { v1, v2, v3 }
    }

    /// Upward pointing equilateral triangle hanging off `apex`.
    pub fn from_apex(apex: Point<f64>, side: f64) -> Triangle {
        let h = equilateral_height(side);
        Triangle {
            v1: apex,
            v2: point! {x: apex.x() + side / 2.0, y: apex.y() - h},
            v3: point! {x: apex.x() - side / 2.0, y: apex.y() - h},
        }
    }

    pub fn vertices(&self) -> [Point<f64>; 3] {
        [self.v1, self.v2, self.v3]
    }

    /// Edge lengths v1-v2, v2-v3, v3-v1.
    pub fn sides(&self) -> [f64; 3] {
        [
            self.v1.distance(&self.v2),
            self.v2.distance(&self.v3),
            self.v3.distance(&self.v1),
        ]
    }

    /// Mean edge length. Exact for anything built by the generators.
    pub fn side(&self) -> f64 {
        self.sides().iter().sum::<f64>() / 3.0
    }

    pub fn is_equilateral(&self, tolerance: f64) -> bool {
        let [a, b, c] = self.sides();
        (a - b).abs() <= tolerance && (b - c).abs() <= tolerance && (c - a).abs() <= tolerance
    }

    /// The inverted middle triangle that gets cut away: the foot of the
    /// apex on the base line, then the midpoints of the right and left edges.
    pub fn hole(&self) -> Triangle {
        Triangle {
            v1: self.v2.midpoint(&self.v3),
            v2: self.v1.midpoint(&self.v2),
            v3: self.v1.midpoint(&self.v3),
        }
    }

    /// Barycentric point-in-triangle test; points on an edge count as inside
    /// when they are within `tolerance`.
    pub fn contains_point(&self, p: &Point<f64>, tolerance: f64) -> bool {
        let cross = |a: &Point<f64>, b: &Point<f64>, c: &Point<f64>| {
            (b.x() - a.x()) * (c.y() - a.y()) - (b.y() - a.y()) * (c.x() - a.x())
        };
        let area = cross(&self.v1, &self.v2, &self.v3);
        if area == 0.0 {
            return false;
        }
        let w1 = cross(&self.v2, &self.v3, p) / area;
        let w2 = cross(&self.v3, &self.v1, p) / area;
        let w3 = cross(&self.v1, &self.v2, p) / area;
        w1 >= -tolerance && w2 >= -tolerance && w3 >= -tolerance
    }

    /// Closed outline v1 -> v2 -> v3 -> v1.
    pub fn to_linestring(&self) -> LineString<f64> {
        LineString::from(vec![self.v1, self.v2, self.v3, self.v1])
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(self.to_linestring(), vec![])
    }

    /// Pen commands drawing the outline: lift, jump to v1, then three edges.
    pub fn trace(&self) -> [Instruction; 6] {
        [
            Instruction::PenUp,
            Instruction::MoveTo(self.v1),
            Instruction::PenDown,
            Instruction::LineTo(self.v2),
            Instruction::LineTo(self.v3),
            Instruction::LineTo(self.v1),
        ]
    }
}
