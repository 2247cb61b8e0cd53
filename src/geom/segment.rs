use crate::geom::EPS;
use crate::{Line, Point, Vector};
use std::fmt;

/// A directed segment from `start` to `end`.
///
/// The start point doubles as the anchoring end: for a traveling ray it is
/// the emission point or the latest reflection point, and it is preserved by
/// every operation that produces a derived segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The direction of travel, from `start` to `end`.
    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Dot product of the two segment directions.
    pub fn dot(&self, other: &Self) -> f64 {
        self.direction().dot(other.direction())
    }

    /// Returns a copy with the direction scaled by `k`; `start` is preserved.
    pub fn scaled(&self, k: f64) -> Self {
        Self {
            start: self.start,
            end: self.start + self.direction() * k,
        }
    }

    /// Returns a unit-length copy with the same start.
    ///
    /// A degenerate (near-zero) segment is returned unchanged; scaling it
    /// cannot recover a direction, so this is a deliberate no-op rather
    /// than an error.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len < EPS {
            *self
        } else {
            self.scaled(1. / len)
        }
    }

    /// Extends the segment into the infinite line through `start` with the
    /// same direction. Returns None for a degenerate segment.
    pub fn extend(&self) -> Option<Line> {
        Line::new(self.start, self.direction())
    }

    pub fn is_close(&self, other: &Self) -> bool {
        self.start.is_close(&other.start) && self.end.is_close(&other.end)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2);
        write!(f, "{:.prec$} -> {:.prec$}", self.start, self.end, prec = prec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_and_length() {
        let s = Segment::new(Point::new(1., 1.), Point::new(4., 5.));
        assert!(s.direction().is_close(&Vector::new(3., 4.)));
        assert!((s.length() - 5.).abs() < EPS);
    }

    #[test]
    fn test_scaled_preserves_start() {
        let s = Segment::new(Point::new(1., 1.), Point::new(2., 1.));
        let scaled = s.scaled(3.);
        assert!(scaled.start.is_close(&s.start));
        assert!(scaled.end.is_close(&Point::new(4., 1.)));
    }

    #[test]
    fn test_normalized() {
        let s = Segment::new(Point::new(1., 1.), Point::new(1., 9.));
        let n = s.normalized();
        assert!(n.start.is_close(&s.start));
        assert!((n.length() - 1.).abs() < EPS);
        assert!(n.end.is_close(&Point::new(1., 2.)));
    }

    #[test]
    fn test_normalized_degenerate_is_noop() {
        let p = Point::new(3., -2.);
        let s = Segment::new(p, p);
        let n = s.normalized();
        assert!(n.is_close(&s));
    }

    #[test]
    fn test_extend() {
        let s = Segment::new(Point::new(1., -7.), Point::new(2., -7.));
        let line = s.extend().unwrap();
        assert!(line.anchor.is_close(&s.start));
        assert!(line.direction.is_close(&Vector::new(1., 0.)));
        // Degenerate segments have no direction to extend along.
        let p = Point::new(0., 0.);
        assert!(Segment::new(p, p).extend().is_none());
    }

    #[test]
    fn test_dot() {
        let a = Segment::new(Point::new(0., 0.), Point::new(1., 0.));
        let b = Segment::new(Point::new(5., 5.), Point::new(5., 6.));
        assert_eq!(a.dot(&b), 0.);
    }
}
