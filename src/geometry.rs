// src/geometry.rs

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

pub const MIN_CIRCLE_QUALITY: u32 = 6;
pub const DEFAULT_CIRCLE_QUALITY: u32 = 8;

/// Point on a circle of radius `r` at angle `theta`, screen-space convention
/// (angle 0 points towards -y, angles grow clockwise on a y-down screen).
#[inline]
pub fn circular(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.sin(), -r * theta.cos())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub begin: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(begin: DVec2, end: DVec2) -> Self {
        Self { begin, end }
    }

    pub fn is_finite(&self) -> bool {
        self.begin.is_finite() && self.end.is_finite()
    }

    pub fn moved_by(&self, offset: DVec2) -> Segment {
        Segment::new(self.begin + offset, self.end + offset)
    }

    /// Closest point on the segment to `p`.
    pub fn closest_point(&self, p: DVec2) -> DVec2 {
        let d = self.end - self.begin;
        let len_sq = d.length_squared();
        if len_sq == 0.0 {
            return self.begin;
        }
        let t = ((p - self.begin).dot(d) / len_sq).clamp(0.0, 1.0);
        self.begin + d * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Grows each side independently; negative values shrink.
    pub fn stretched(&self, top: f64, right: f64, bottom: f64, left: f64) -> RectF {
        RectF::new(
            self.x - left,
            self.y - top,
            self.w + left + right,
            self.h + top + bottom,
        )
    }

    pub fn stretched_uniform(&self, d: f64) -> RectF {
        self.stretched(d, d, d, d)
    }

    // Half-open on the far edges.
    pub fn contains(&self, p: DVec2) -> bool {
        self.x <= p.x && p.x < self.x + self.w && self.y <= p.y && p.y < self.y + self.h
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    pub fn top(&self) -> Segment {
        Segment::new(DVec2::new(self.x, self.y), DVec2::new(self.x + self.w, self.y))
    }

    pub fn right(&self) -> Segment {
        Segment::new(
            DVec2::new(self.x + self.w, self.y),
            DVec2::new(self.x + self.w, self.y + self.h),
        )
    }

    pub fn bottom(&self) -> Segment {
        Segment::new(
            DVec2::new(self.x + self.w, self.y + self.h),
            DVec2::new(self.x, self.y + self.h),
        )
    }

    pub fn left(&self) -> Segment {
        Segment::new(DVec2::new(self.x, self.y + self.h), DVec2::new(self.x, self.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub p0: DVec2,
    pub p1: DVec2,
    pub p2: DVec2,
}

impl Triangle {
    pub fn new(p0: DVec2, p1: DVec2, p2: DVec2) -> Self {
        Self { p0, p1, p2 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub p: [DVec2; 4],
}

impl Quad {
    pub fn new(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Self {
        Self { p: [p0, p1, p2, p3] }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub r: f64,
}

impl Circle {
    pub fn new(center: DVec2, r: f64) -> Self {
        Self { center, r }
    }
}

/// Simple polygon given by its outer ring. The ring is implicitly closed.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    outer: Vec<DVec2>,
}

impl Polygon {
    pub fn new(outer: Vec<DVec2>) -> Self {
        Self { outer }
    }

    pub fn outer(&self) -> &[DVec2] {
        &self.outer
    }

    pub fn area(&self) -> f64 {
        let count = self.outer.len();
        if count < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..count {
            let j = (i + 1) % count;
            area += self.outer[i].x * self.outer[j].y;
            area -= self.outer[j].x * self.outer[i].y;
        }
        area.abs() / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Triangle(Triangle),
    Rect(RectF),
    Quad(Quad),
    Circle { circle: Circle, quality: u32 },
    Polygon(Polygon),
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Triangle(triangle)
    }
}

impl From<RectF> for Shape {
    fn from(rect: RectF) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Quad> for Shape {
    fn from(quad: Quad) -> Self {
        Shape::Quad(quad)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle { circle, quality: DEFAULT_CIRCLE_QUALITY }
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

/// Breaks a shape into the closed loop of segments that occludes light.
pub fn decompose_to_segments(shape: &Shape) -> Vec<Segment> {
    match shape {
        Shape::Triangle(t) => vec![
            Segment::new(t.p0, t.p1),
            Segment::new(t.p1, t.p2),
            Segment::new(t.p2, t.p0),
        ],
        Shape::Rect(rect) => {
            // Far edges (x + w, y + h) move out by one unit.
            let s = rect.stretched(0.0, 1.0, 1.0, 0.0);
            vec![s.top(), s.right(), s.bottom(), s.left()]
        }
        Shape::Quad(q) => (0..4)
            .map(|i| Segment::new(q.p[i], q.p[(i + 1) % 4]))
            .collect(),
        Shape::Circle { circle, quality } => {
            let quality = (*quality).max(MIN_CIRCLE_QUALITY);
            let da = TAU / quality as f64;
            (0..quality)
                .map(|i| {
                    Segment::new(
                        circular(circle.r, da * i as f64),
                        circular(circle.r, da * (i + 1) as f64),
                    )
                    .moved_by(circle.center)
                })
                .collect()
        }
        Shape::Polygon(polygon) => {
            let outer = polygon.outer();
            (0..outer.len())
                .map(|i| Segment::new(outer[i], outer[(i + 1) % outer.len()]))
                .collect()
        }
    }
}
