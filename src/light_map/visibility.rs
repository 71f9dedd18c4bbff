// src/light_map/visibility.rs

use glam::DVec2;
use log::{debug, trace};
use crate::geometry::{RectF, Segment};
use crate::intersection::SegmentIntersection;
use crate::light_map::registry::ObstacleRegistry;

/// Angular perturbation, in radians, of the two rays cast per sample.
pub const RAY_EPSILON: f64 = 1e-10;

/// Distance the light must keep from every room wall.
pub const ROOM_MARGIN: f64 = 1.0;

/// Nearest hits of the rays cast just before and just after one sample angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollidePoints {
    pub left: DVec2,
    pub right: DVec2,
}

/// Length of every cast ray: `2 * sqrt(w² + h + h)`.
///
/// The height term is linear, not squared. This is not the room diagonal,
/// but it is kept as-is because ray length changes which far endpoints come
/// out for unobstructed rays in very flat rooms.
pub fn max_distance(room: &RectF) -> f64 {
    2.0 * (room.w * room.w + room.h + room.h).sqrt()
}

pub struct Visibility;

impl Visibility {
    /// Sweeps around `light_pos` and returns one pair of collide points per
    /// registered segment, ordered by ascending angle.
    ///
    /// Returns an empty vector when the light is not inside the room shrunk
    /// by [`ROOM_MARGIN`].
    pub fn calculate_collide_points(registry: &ObstacleRegistry, light_pos: DVec2) -> Vec<CollidePoints> {
        let room = registry.room();
        if !light_pos.is_finite() || !room.stretched_uniform(-ROOM_MARGIN).contains(light_pos) {
            debug!("light at {:?} is outside the room, nothing lit", light_pos);
            return Vec::new();
        }

        let segments = registry.segments();
        let angles = Self::sample_angles(segments, light_pos);
        let ray_length = max_distance(room);

        let collide_points: Vec<CollidePoints> = angles
            .iter()
            .map(|&angle| {
                let left_ray = Self::cast_ray(light_pos, angle - RAY_EPSILON, ray_length);
                let right_ray = Self::cast_ray(light_pos, angle + RAY_EPSILON, ray_length);
                let points = CollidePoints {
                    left: SegmentIntersection::nearest_hit(&left_ray, segments),
                    right: SegmentIntersection::nearest_hit(&right_ray, segments),
                };
                trace!("angle {:.6}: {:?} / {:?}", angle, points.left, points.right);
                points
            })
            .collect();

        debug!(
            "light at {:?}: {} segment(s), {} collide pair(s)",
            light_pos,
            segments.len(),
            collide_points.len()
        );
        collide_points
    }

    // One angle per segment begin point. Shared vertices give duplicate
    // angles on purpose: each yields its own left/right ray pair.
    fn sample_angles(segments: &[Segment], light_pos: DVec2) -> Vec<f64> {
        let mut angles: Vec<f64> = segments
            .iter()
            .filter(|segment| segment.begin.is_finite())
            .map(|segment| {
                let v = segment.begin - light_pos;
                v.y.atan2(v.x)
            })
            .collect();
        angles.sort_by(f64::total_cmp);
        angles
    }

    fn cast_ray(origin: DVec2, angle: f64, length: f64) -> Segment {
        Segment::new(origin, origin + DVec2::from_angle(angle) * length)
    }
}
