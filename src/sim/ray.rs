//! Ray expansion: repeated wall selection and image-source mirroring up to
//! a bounded reflection order, terminating early on receiver contact.

use std::collections::HashMap;

use crate::geom::EPS;
use crate::sim::receiver::Receiver;
use crate::{Line, Point, Segment};

/// Caller-owned record of image (mirror) points produced during expansion,
/// keyed by wall index and reflection order.
///
/// Advisory only: expansion never reads it back. A renderer can use it to
/// draw image-source constructions. Points are deduplicated under
/// `Point::is_close`.
#[derive(Debug, Default)]
pub struct ImageLog {
    images: HashMap<(usize, usize), Vec<Point>>,
}

impl ImageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a mirrored anchor for `wall` at `order`, skipping
    /// near-duplicates.
    pub fn record(&mut self, wall: usize, order: usize, point: Point) {
        let bucket = self.images.entry((wall, order)).or_default();
        if bucket.iter().all(|p| !p.is_close(&point)) {
            bucket.push(point);
        }
    }

    /// Image points recorded for `wall` at `order`.
    pub fn points(&self, wall: usize, order: usize) -> &[Point] {
        self.images
            .get(&(wall, order))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Folds another log into this one, deduplicating as it goes.
    pub fn merge(&mut self, other: ImageLog) {
        for ((wall, order), points) in other.images {
            for p in points {
                self.record(wall, order, p);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// A single sound emission traced through the room.
///
/// A ray owns its starting segment and a maximum reflection order, and is
/// expanded at most once: `expand` on an already-expanded ray returns the
/// stored segments unchanged, whatever arguments are passed.
#[derive(Debug, Clone)]
pub struct Ray {
    start: Segment,
    max_order: usize,
    segments: Vec<Segment>,
    received: bool,
    expanded: bool,
}

impl Ray {
    pub fn new(start: Segment, max_order: usize) -> Self {
        Self {
            start,
            max_order,
            segments: Vec::new(),
            received: false,
            expanded: false,
        }
    }

    /// The starting directed segment (anchor = sender, direction = emission).
    pub fn start(&self) -> Segment {
        self.start
    }

    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// True once the ray has passed within the receiver's tolerance disc.
    pub fn received(&self) -> bool {
        self.received
    }

    /// The ordered, connected segments of the physical path. Empty until
    /// expansion; at most `max_order + 1` entries afterwards.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Expands the ray through the walls until it is received or the order
    /// budget runs out. Idempotent: a second call returns the previously
    /// computed path unchanged.
    pub fn expand(&mut self, walls: &[Line], receiver: &Receiver) -> &[Segment] {
        self.expand_inner(walls, receiver, None);
        &self.segments
    }

    /// Like [`expand`](Self::expand), but records every mirrored anchor
    /// into the caller's [`ImageLog`].
    pub fn expand_with_log(
        &mut self,
        walls: &[Line],
        receiver: &Receiver,
        log: &mut ImageLog,
    ) -> &[Segment] {
        self.expand_inner(walls, receiver, Some(log));
        &self.segments
    }

    fn expand_inner(&mut self, walls: &[Line], receiver: &Receiver, mut log: Option<&mut ImageLog>) {
        if self.expanded {
            return;
        }
        self.expanded = true;

        // A degenerate start has no direction to travel along; the ray is
        // exhausted with an empty path.
        let Some(mut curr) = self.start.extend() else {
            return;
        };
        let mut blocked: Option<usize> = None;
        let mut prev: Option<Point> = None;

        for order in 0..=self.max_order {
            // Reception ends the step no matter how close any wall is.
            if let Some(hit) = curr.intersect_disc(receiver.center, receiver.radius) {
                self.received = true;
                let from = prev.unwrap_or(self.start.start);
                self.segments.push(Segment::new(from, hit));
                return;
            }

            // Nearest legal wall intersection. The wall just reflected off
            // is skipped: a ray never bounces off the same wall twice in
            // immediate succession.
            let prev_dist = prev.map(|p| (p - curr.anchor).length());
            let mut nearest: Option<(usize, Point, f64)> = None;
            for (j, wall) in walls.iter().enumerate() {
                if blocked == Some(j) {
                    continue;
                }
                let Some(hit) = wall.intersect_ray(&curr) else {
                    continue;
                };
                let dist = (hit - curr.anchor).length();
                // Walls are unbounded lines, so a wall can mathematically
                // re-intersect the ray within the distance just traveled.
                // A candidate must lie beyond the point the ray departed
                // from.
                if prev_dist.is_some_and(|pd| dist <= pd + EPS) {
                    continue;
                }
                match &nearest {
                    Some((_, _, best)) if *best <= dist => {}
                    _ => nearest = Some((j, hit, dist)),
                }
            }

            // No reachable wall and no reception: nothing to continue with.
            let Some((m, hit, _)) = nearest else {
                return;
            };

            let from = prev.unwrap_or(self.start.start);
            self.segments.push(Segment::new(from, hit));

            let Some(reflected) = walls[m].image(hit, curr.anchor) else {
                return;
            };
            if let Some(log) = log.as_mut() {
                log.record(m, order, reflected.anchor);
            }

            blocked = Some(m);
            prev = Some(hit);
            curr = reflected;
        }
    }
}
