use geo_types::{CoordNum, Point};
use num_traits::real::Real;

/// Triangles, and the derived geometry the Sierpinski generators need.
pub mod shapes;

/// Trait to convert geometry into an SVG object (or specifically, SVG components)
pub mod svg;

/// Trait that implements a distance function between two [`geo_types::Point`] structs.
/// Also includes a length function which returns the length of a [`geo_types::Point`]
/// as if it were a Vector, and the midpoint used all over the Sierpinski code.
pub trait PointDistance<T: CoordNum> {
    /// Return the scalar distance between two [`geo_types::Point`]s.
    fn distance(&self, other: &Point<T>) -> T;

    /// Treat a [`geo_types::Point`] as a Vector and return its scalar length.
    fn length(&self) -> T;

    /// Point halfway between self and other.
    fn midpoint(&self, other: &Point<T>) -> Point<T>;
}

impl<T> PointDistance<T> for Point<T>
where
    T: CoordNum,
    T: Real,
{
    fn distance(&self, other: &Point<T>) -> T {
        let p = *self - *other;
        p.length()
    }

    fn length(&self) -> T {
        (self.x().powi(2) + self.y().powi(2)).sqrt()
    }

    fn midpoint(&self, other: &Point<T>) -> Point<T> {
        let two = T::one() + T::one();
        Point::new((self.x() + other.x()) / two, (self.y() + other.y()) / two)
    }
}
