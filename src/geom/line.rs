//! Infinite line math: line-ray and line-disc intersections, perpendicular
//! feet, and the image-source mirror transform used for wall reflections.

use crate::geom::EPS;
use crate::{Point, Vector};
use std::fmt;

/// An infinite line `anchor + t * direction`, parametrized by `t`.
///
/// Walls and traveling rays are both represented as lines; for a traveling
/// ray the anchor is the originating end (the sender or, after a
/// reflection, the mirrored image point).
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub anchor: Point,
    pub direction: Vector,
}

impl Line {
    /// Creates a line. Returns None for a near-zero direction, which would
    /// not define a line at all.
    pub fn new(anchor: Point, direction: Vector) -> Option<Self> {
        if direction.length() < EPS {
            None
        } else {
            Some(Self { anchor, direction })
        }
    }

    /// Returns the point on the line at parameter `t`.
    pub fn point_at(&self, t: f64) -> Point {
        self.anchor + self.direction * t
    }

    /// Intersects this line (a wall) with a traveling ray line.
    ///
    /// Solves the 2x2 linear system equating the two parametric forms for
    /// the parameter `y` along the ray. Returns None when the directions
    /// are parallel (the determinant vanishes) or when the intersection
    /// lies at or behind the ray's anchor: a ray only ever reaches a wall
    /// it points toward, never one behind it.
    pub fn intersect_ray(&self, ray: &Line) -> Option<Point> {
        let r = self.direction;
        let s = ray.direction;
        let p = self.anchor;
        let q = ray.anchor;

        let det = r.dy * s.dx - r.dx * s.dy;
        if det.abs() < EPS {
            return None;
        }

        let y = (r.dy * (p.x - q.x) + r.dx * (q.y - p.y)) / det;
        if y > EPS { Some(ray.point_at(y)) } else { None }
    }

    /// Intersects this line (a traveling ray) with a disc.
    ///
    /// Substituting the parametric form into the disc equation gives a
    /// quadratic in `t`. A negative discriminant means the disc is missed.
    /// Both roots pass through the same forward-only filter as
    /// `intersect_ray`; a disc entirely behind the ray's anchor is not
    /// reached. Tangency (roots within `EPS`) yields the single tangent
    /// point; otherwise the root closer to the anchor wins, since the
    /// anchor is the ray's originating end.
    pub fn intersect_disc(&self, center: Point, radius: f64) -> Option<Point> {
        let d = self.direction;
        let rel = self.anchor - center;

        let a = d.dot(d);
        let b = 2. * d.dot(rel);
        let c = rel.dot(rel) - radius * radius;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. {
            return None;
        }

        let sq = discriminant.sqrt();
        // a > 0 because the direction is non-degenerate, so t_near <= t_far.
        let t_near = (-b - sq) / (2. * a);
        let t_far = (-b + sq) / (2. * a);

        if (t_far - t_near).abs() < EPS {
            return if t_near > EPS {
                Some(self.point_at(t_near))
            } else {
                None
            };
        }
        if t_near > EPS {
            Some(self.point_at(t_near))
        } else if t_far > EPS {
            Some(self.point_at(t_far))
        } else {
            None
        }
    }

    /// Returns the point on this line closest to `p`.
    ///
    /// Probes with the two opposite perpendicular directions through `p`
    /// and intersects each against the line; the forward-only filter in
    /// `intersect_ray` lets exactly one probe through. Returns None only
    /// when `p` lies on the line itself, where both probes land at
    /// parameter zero.
    pub fn perp_foot(&self, p: Point) -> Option<Point> {
        let n = self.direction.perp();
        let probe = |dir: Vector| {
            let l = Line::new(p, dir)?;
            self.intersect_ray(&l)
        };
        probe(n).or_else(|| probe(-n))
    }

    /// Image-source mirror transform.
    ///
    /// `self` is the wall, `source` the originating end of the incoming
    /// ray, and `intersection` the precomputed wall hit. Mirrors `source`
    /// across the wall and returns the infinite line from the mirrored
    /// anchor through `intersection` — the ray's traveling line for the
    /// next reflection order. Returns None when `source` lies on the wall.
    pub fn image(&self, intersection: Point, source: Point) -> Option<Line> {
        let foot = self.perp_foot(source)?;
        let mirrored = source + (foot - source) * 2.;
        Line::new(mirrored, intersection - mirrored)
    }

    /// Unsigned angle in `[0, pi]` between this line's direction and `v`:
    /// 0 for parallel, pi/2 for perpendicular, pi for opposing.
    pub fn angle(&self, v: Vector) -> f64 {
        let denom = self.direction.length() * v.length();
        (self.direction.dot(v) / denom).clamp(-1., 1.).acos()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2);
        write!(f, "{:.prec$} + t * {:.prec$}", self.anchor, self.direction, prec = prec)
    }
}
