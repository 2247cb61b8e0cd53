//! Uniform angular sweep: one ray per emission direction, expanded
//! independently and in parallel.

use std::f64::consts::PI;

use log::{debug, info};
use rayon::prelude::*;

use crate::sim::ray::{ImageLog, Ray};
use crate::sim::scene::Scene;
use crate::{Point, Segment};

#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Number of uniformly spaced emission directions over the full circle.
    pub num_rays: usize,
    /// Maximum reflection order per ray.
    pub max_order: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            num_rays: 720,
            max_order: 4,
        }
    }
}

/// All expanded rays of a sweep, in emission-angle order.
pub struct SweepResult {
    pub rays: Vec<Ray>,
    /// Image points recorded across all rays, merged after expansion.
    pub images: ImageLog,
}

impl SweepResult {
    pub fn received_count(&self) -> usize {
        self.rays.iter().filter(|r| r.received()).count()
    }

    pub fn segment_counts(&self) -> Vec<usize> {
        self.rays.iter().map(|r| r.segments().len()).collect()
    }
}

/// Fires `num_rays` rays over a full-circle uniform sweep from the scene's
/// sender and expands each one.
///
/// Expansion mutates only per-ray state, so rays run in parallel with
/// read-only sharing of walls and receiver; image logs are per-ray and
/// merged afterwards. Deterministic: identical inputs give identical
/// outputs.
pub fn run(scene: &Scene, config: SweepConfig) -> SweepResult {
    let n = config.num_rays;
    let expanded: Vec<(Ray, ImageLog)> = (0..n)
        .into_par_iter()
        .map(|i| {
            let theta = 2. * PI * i as f64 / n as f64;
            let end = Point::new(
                scene.sender.x + theta.cos(),
                scene.sender.y + theta.sin(),
            );
            let mut ray = Ray::new(Segment::new(scene.sender, end), config.max_order);
            let mut log = ImageLog::new();
            ray.expand_with_log(&scene.walls, &scene.receiver, &mut log);
            (ray, log)
        })
        .collect();

    let mut rays = Vec::with_capacity(n);
    let mut images = ImageLog::new();
    for (i, (ray, log)) in expanded.into_iter().enumerate() {
        debug!(
            "ray {i}: received={} segments={}",
            ray.received(),
            ray.segments().len()
        );
        rays.push(ray);
        images.merge(log);
    }

    let result = SweepResult { rays, images };
    info!("sweep done: {}/{} rays received", result.received_count(), n);
    result
}
