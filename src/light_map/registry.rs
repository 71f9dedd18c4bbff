// src/light_map/registry.rs

use log::{debug, warn};
use crate::geometry::{decompose_to_segments, Circle, RectF, Segment, Shape, MIN_CIRCLE_QUALITY};

pub const DEFAULT_ROOM: RectF = RectF { x: 0.0, y: 0.0, w: 640.0, h: 480.0 };

/// Owns every occluding segment: the room boundary first, then obstacles in
/// the order they were added. Segments are never removed.
#[derive(Clone, Debug)]
pub struct ObstacleRegistry {
    room: RectF,
    segments: Vec<Segment>,
}

impl ObstacleRegistry {
    pub fn new(room: RectF) -> Self {
        let mut registry = Self {
            room,
            segments: Vec::new(),
        };
        registry.add_object(room);
        registry
    }

    pub fn add_object(&mut self, shape: impl Into<Shape>) {
        let shape = shape.into();
        if let Shape::Circle { quality, .. } = shape {
            if quality < MIN_CIRCLE_QUALITY {
                warn!("circle quality {} raised to {}", quality, MIN_CIRCLE_QUALITY);
            }
        }

        let segments = decompose_to_segments(&shape);
        let skipped = segments.iter().filter(|s| !s.is_finite()).count();
        if skipped > 0 {
            warn!("{} segment(s) with non-finite coordinates will not occlude", skipped);
        }

        debug!("registered {} segment(s), {} total", segments.len(), self.segments.len() + segments.len());
        self.segments.extend(segments);
    }

    pub fn add_circle(&mut self, circle: Circle, quality: u32) {
        self.add_object(Shape::Circle { circle, quality });
    }

    /// The room as supplied, before its boundary was stretched.
    pub fn room(&self) -> &RectF {
        &self.room
    }

    /// The room as its boundary segments enclose it, far edges stretched.
    pub fn boundary(&self) -> RectF {
        self.room.stretched(0.0, 1.0, 1.0, 0.0)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl Default for ObstacleRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM)
    }
}
