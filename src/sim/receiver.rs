use crate::Point;
use anyhow::{Result, anyhow};

/// A disc receiver: the point listening for rays plus a tolerance radius.
///
/// The radius is not a physical receiver size; it compensates for the
/// measure-zero probability of an exact point hit in real arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct Receiver {
    pub center: Point,
    pub radius: f64,
}

impl Receiver {
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if radius < 0. {
            return Err(anyhow!("receiver radius must be non-negative, got {radius}"));
        }
        Ok(Self { center, radius })
    }

    /// Checks if a point is within the receiver's tolerance disc.
    pub fn contains(&self, point: Point) -> bool {
        let d = point - self.center;
        d.dot(d) <= self.radius * self.radius
    }
}
