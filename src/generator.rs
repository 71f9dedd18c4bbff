// src/generator.rs

use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;
use crate::geometry::{circular, Circle, Polygon, RectF, Shape, Triangle};

/// Inner-to-outer radius ratio of a regular five-pointed star.
pub const STAR_INNER_RATIO: f64 = 0.381_966_011_250_105_15;

pub struct ShapeGenerator;

impl ShapeGenerator {
    /// Five-pointed star, first tip at `angle` (0 points towards -y).
    pub fn star(radius: f64, angle: f64, center: DVec2) -> Polygon {
        let step = TAU / 10.0;
        let outer = (0..10)
            .map(|i| {
                let r = if i % 2 == 0 { radius } else { radius * STAR_INNER_RATIO };
                center + circular(r, angle + step * i as f64)
            })
            .collect();
        Polygon::new(outer)
    }

    /// Random circles, rectangles and triangles kept inside `room`.
    pub fn scatter_obstacles(rng: &mut impl Rng, room: &RectF, count: usize) -> Vec<Shape> {
        let max_extent = (room.w.min(room.h) * 0.1).max(2.0);
        let area = room.stretched_uniform(-max_extent);
        if area.w <= 0.0 || area.h <= 0.0 {
            return Vec::new();
        }

        let mut shapes = Vec::with_capacity(count);
        for _ in 0..count {
            let center = DVec2::new(
                rng.gen_range(area.x..area.x + area.w),
                rng.gen_range(area.y..area.y + area.h),
            );
            let size = rng.gen_range(max_extent * 0.25..max_extent);

            let shape = match rng.gen_range(0..3) {
                0 => Shape::Circle {
                    circle: Circle::new(center, size),
                    quality: rng.gen_range(6..=16),
                },
                1 => {
                    let w = rng.gen_range(size * 0.5..size);
                    let h = rng.gen_range(size * 0.5..size);
                    Shape::Rect(RectF::new(center.x - w * 0.5, center.y - h * 0.5, w, h))
                }
                _ => Shape::Triangle(Self::random_triangle(rng, center, size)),
            };
            shapes.push(shape);
        }
        shapes
    }

    // Three perturbed, evenly spread angles so the triangle never degenerates.
    fn random_triangle(rng: &mut impl Rng, center: DVec2, radius: f64) -> Triangle {
        let max_perturbation = TAU / 3.0 * 0.15;
        let base = rng.gen_range(0.0..TAU);
        let mut points = [DVec2::ZERO; 3];
        for (i, point) in points.iter_mut().enumerate() {
            let angle = base + i as f64 * TAU / 3.0 + rng.gen_range(-max_perturbation..max_perturbation);
            let r = rng.gen_range(radius * 0.8..radius);
            *point = center + circular(r, angle);
        }
        Triangle::new(points[0], points[1], points[2])
    }
}
