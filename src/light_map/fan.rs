// src/light_map/fan.rs

use glam::DVec2;
use log::debug;
use rayon::prelude::*;
use crate::geometry::{Circle, Segment};
use crate::light_map::registry::ObstacleRegistry;
use crate::light_map::visibility::{CollidePoints, Visibility};

/// One wedge of the lit area: `p0` is the light, `p1` and `p2` lie on the
/// nearest occluders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightTriangle {
    pub p0: DVec2,
    pub p1: DVec2,
    pub p2: DVec2,
}

impl LightTriangle {
    pub fn new(p0: DVec2, p1: DVec2, p2: DVec2) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn area(&self) -> f64 {
        (self.p1 - self.p0).perp_dot(self.p2 - self.p0).abs() / 2.0
    }

    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.p0, self.p1),
            Segment::new(self.p1, self.p2),
            Segment::new(self.p2, self.p0),
        ]
    }

    /// Inside or on the boundary, for either winding.
    pub fn contains(&self, p: DVec2) -> bool {
        let d0 = (self.p1 - self.p0).perp_dot(p - self.p0);
        let d1 = (self.p2 - self.p1).perp_dot(p - self.p1);
        let d2 = (self.p0 - self.p2).perp_dot(p - self.p2);
        let has_negative = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
        let has_positive = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
        !(has_negative && has_positive)
    }

    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        if self.contains(circle.center) {
            return true;
        }
        let r_sq = circle.r * circle.r;
        self.edges()
            .iter()
            .any(|edge| edge.closest_point(circle.center).distance_squared(circle.center) <= r_sq)
    }
}

/// One-unit nudges applied to a light to soften its shadow edges.
pub fn soft_light_offsets() -> [DVec2; 4] {
    [
        DVec2::new(-1.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(0.0, 1.0),
        DVec2::new(0.0, -1.0),
    ]
}

pub struct LightFan;

impl LightFan {
    pub fn calculate_light_triangles(registry: &ObstacleRegistry, light_pos: DVec2) -> Vec<LightTriangle> {
        let collide_points = Visibility::calculate_collide_points(registry, light_pos);
        Self::from_collide_points(light_pos, &collide_points)
    }

    /// Closes the fan: the last wedge ends on the first pair's left point.
    pub fn from_collide_points(light_pos: DVec2, collide_points: &[CollidePoints]) -> Vec<LightTriangle> {
        let n = collide_points.len();
        (0..n)
            .map(|i| LightTriangle::new(light_pos, collide_points[i].right, collide_points[(i + 1) % n].left))
            .collect()
    }

    /// Fans for several lights at once. The registry is shared read-only by
    /// every worker; results keep the order of `lights`.
    pub fn calculate_for_lights(registry: &ObstacleRegistry, lights: &[DVec2]) -> Vec<Vec<LightTriangle>> {
        debug!("computing {} light fan(s) in parallel", lights.len());
        lights
            .par_iter()
            .map(|&light| Self::calculate_light_triangles(registry, light))
            .collect()
    }

    pub fn total_area(triangles: &[LightTriangle]) -> f64 {
        triangles.iter().map(LightTriangle::area).sum()
    }

    /// Share of the enclosed room the fan covers, 1.0 when nothing casts a shadow.
    pub fn lit_fraction(registry: &ObstacleRegistry, triangles: &[LightTriangle]) -> f64 {
        Self::total_area(triangles) / registry.boundary().area()
    }

    /// True when any wedge of the fan touches `sensor`.
    pub fn illuminates(triangles: &[LightTriangle], sensor: &Circle) -> bool {
        triangles.iter().any(|triangle| triangle.intersects_circle(sensor))
    }
}
