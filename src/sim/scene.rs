//! Room setup: reflective walls, a sender and a receiver.

use anyhow::{Result, anyhow};
use rand::Rng;
use std::f64::consts::PI;

use crate::sim::receiver::Receiver;
use crate::{Line, Point, Vector};

/// A simulated room. Walls are infinite reflective lines, fixed for the
/// duration of a simulation run; the sender is the point all rays are
/// emitted from.
#[derive(Debug, Clone)]
pub struct Scene {
    pub walls: Vec<Line>,
    pub sender: Point,
    pub receiver: Receiver,
}

impl Scene {
    pub fn new(walls: Vec<Line>, sender: Point, receiver: Receiver) -> Result<Self> {
        if walls.is_empty() {
            return Err(anyhow!("a scene needs at least one wall"));
        }
        if receiver.contains(sender) {
            return Err(anyhow!(
                "sender {sender} lies inside the receiver disc at {}",
                receiver.center
            ));
        }
        Ok(Self {
            walls,
            sender,
            receiver,
        })
    }

    /// The fixed three-wall demo enclosure: a triangle-like room with the
    /// sender at (1, -7) and the receiver at the origin.
    pub fn demo_room() -> Result<Self> {
        let walls = vec![
            wall(-5., -10., 0.7, -0.2)?,
            wall(10., -6., -1., 2.5)?,
            wall(-10., -6., 1., 1.5)?,
        ];
        let receiver = Receiver::new(Point::new(0., 0.), 0.125)?;
        Self::new(walls, Point::new(1., -7.), receiver)
    }

    /// Generates a random triangular room.
    ///
    /// The two base angles are drawn uniformly from [pi/6, 2*pi/3] with the
    /// pair kept below pi so the side walls meet in an apex. The receiver
    /// sits at the triangle's centroid and the sender is sampled uniformly
    /// inside the triangle.
    pub fn random_room<R: Rng>(rng: &mut R) -> Result<Self> {
        const BASE: f64 = 20.;
        let alpha = rng.gen_range(PI / 6.0..2. * PI / 3.);
        let beta = rng.gen_range(PI / 6.0..PI - alpha);

        let a = Point::new(0., 0.);
        let b = Point::new(BASE, 0.);
        let base = wall(a.x, a.y, 1., 0.)?;
        let left = wall(a.x, a.y, alpha.cos(), alpha.sin())?;
        let right = wall(b.x, b.y, -beta.cos(), beta.sin())?;

        let apex = right
            .intersect_ray(&left)
            .ok_or_else(|| anyhow!("side walls do not meet (alpha={alpha}, beta={beta})"))?;

        let centroid = Point::new((a.x + b.x + apex.x) / 3., (a.y + b.y + apex.y) / 3.);
        let receiver = Receiver::new(centroid, 0.125)?;

        // Uniform sample inside the triangle, folded into the lower half
        // of the parallelogram. Resample if the point lands inside the
        // receiver disc.
        let mut sample = || {
            let mut r1 = rng.gen_range(0.0..1.0);
            let mut r2 = rng.gen_range(0.0..1.0);
            if r1 + r2 > 1. {
                r1 = 1. - r1;
                r2 = 1. - r2;
            }
            a + (b - a) * r1 + (apex - a) * r2
        };
        let mut sender = sample();
        for _ in 0..15 {
            if !receiver.contains(sender) {
                break;
            }
            sender = sample();
        }

        Self::new(vec![base, right, left], sender, receiver)
    }
}

fn wall(ax: f64, ay: f64, dx: f64, dy: f64) -> Result<Line> {
    Line::new(Point::new(ax, ay), Vector::new(dx, dy))
        .ok_or_else(|| anyhow!("degenerate wall direction ({dx}, {dy})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_demo_room() -> Result<()> {
        let scene = Scene::demo_room()?;
        assert_eq!(scene.walls.len(), 3);
        assert!(scene.sender.is_close(&Point::new(1., -7.)));
        assert!(scene.receiver.center.is_close(&Point::new(0., 0.)));
        assert!((scene.receiver.radius - 0.125).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_empty_walls_rejected() -> Result<()> {
        let receiver = Receiver::new(Point::new(0., 0.), 0.125)?;
        assert!(Scene::new(vec![], Point::new(1., 1.), receiver).is_err());
        Ok(())
    }

    #[test]
    fn test_sender_inside_receiver_rejected() -> Result<()> {
        let walls = vec![wall(0., 0., 1., 0.)?];
        let receiver = Receiver::new(Point::new(1., 1.), 0.5)?;
        assert!(Scene::new(walls, Point::new(1.1, 1.), receiver).is_err());
        Ok(())
    }

    #[test]
    fn test_random_room() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(42);
        let scene = Scene::random_room(&mut rng)?;
        assert_eq!(scene.walls.len(), 3);
        // The triangle sits above its base on the x axis.
        assert!(scene.sender.y >= 0.);
        assert!(scene.receiver.center.y > 0.);
        assert!(!scene.receiver.contains(scene.sender));
        Ok(())
    }

    #[test]
    fn test_random_room_reproducible() -> Result<()> {
        let scene_a = Scene::random_room(&mut StdRng::seed_from_u64(7))?;
        let scene_b = Scene::random_room(&mut StdRng::seed_from_u64(7))?;
        assert!(scene_a.sender.is_close(&scene_b.sender));
        assert!(scene_a.receiver.center.is_close(&scene_b.receiver.center));
        for (wa, wb) in scene_a.walls.iter().zip(scene_b.walls.iter()) {
            assert!(wa.anchor.is_close(&wb.anchor));
            assert!(wa.direction.is_close(&wb.direction));
        }
        Ok(())
    }
}
