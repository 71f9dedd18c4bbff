// src/demo_scene.rs

use glam::DVec2;
use crate::config::{ObstacleConfig, SceneConfig, SensorConfig};
use crate::geometry::RectF;

pub const DEMO_ROOM: RectF = RectF { x: 40.0, y: 40.0, w: 1200.0, h: 640.0 };
pub const DEMO_CIRCLE_QUALITY: u32 = 12;

/// Colours of the four nudged lights, added together they make one soft light.
pub const SOFT_LIGHT_COLORS: [[f32; 4]; 4] = [
    [0.22, 0.24, 0.21, 1.0],
    [0.23, 0.23, 0.22, 1.0],
    [0.24, 0.22, 0.19, 1.0],
    [0.25, 0.21, 0.20, 1.0],
];

fn rect(x: f64, y: f64, w: f64, h: f64) -> ObstacleConfig {
    ObstacleConfig::Rect { x, y, w, h }
}

fn circle(x: f64, y: f64, radius: f64) -> ObstacleConfig {
    ObstacleConfig::Circle {
        center: DVec2::new(x, y),
        radius,
        quality: DEMO_CIRCLE_QUALITY,
    }
}

pub fn create_demo_scene() -> SceneConfig {
    let obstacles = vec![
        ObstacleConfig::Triangle {
            points: [DVec2::new(120.0, 120.0), DVec2::new(300.0, 120.0), DVec2::new(120.0, 500.0)],
        },
        rect(600.0, 40.0, 40.0, 260.0),
        rect(440.0, 300.0, 440.0, 40.0),
        rect(1040.0, 300.0, 200.0, 40.0),
        rect(480.0, 480.0, 240.0, 100.0),
        circle(1000.0, 500.0, 80.0),
        circle(460.0, 180.0, 30.0),
        circle(240.0, 480.0, 30.0),
        circle(300.0, 560.0, 30.0),
        ObstacleConfig::Star {
            center: DVec2::new(940.0, 180.0),
            radius: 60.0,
            angle: 0.0,
        },
    ];

    SceneConfig {
        room: DEMO_ROOM,
        lights: vec![DEMO_ROOM.center()],
        obstacles,
        sensors: vec![SensorConfig {
            center: DVec2::new(600.0, 610.0),
            radius: 20.0,
        }],
    }
}
