// src/config.rs

// A scene is a room, a list of obstacles, and optionally the lights and
// sensor circles to evaluate, stored as TOML.

use glam::DVec2;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SceneError;
use crate::generator::ShapeGenerator;
use crate::geometry::{Circle, Polygon, Quad, RectF, Shape, Triangle, DEFAULT_CIRCLE_QUALITY};
use crate::light_map::ObstacleRegistry;

/// One obstacle entry, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObstacleConfig {
    Triangle { points: [DVec2; 3] },
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Quad { points: [DVec2; 4] },
    Circle {
        center: DVec2,
        radius: f64,
        #[serde(default = "default_quality")]
        quality: u32,
    },
    Polygon { points: Vec<DVec2> },
    Star {
        center: DVec2,
        radius: f64,
        #[serde(default)]
        angle: f64,
    },
}

fn default_quality() -> u32 {
    DEFAULT_CIRCLE_QUALITY
}

impl ObstacleConfig {
    pub fn to_shape(&self) -> Shape {
        match self {
            ObstacleConfig::Triangle { points } => Triangle::new(points[0], points[1], points[2]).into(),
            ObstacleConfig::Rect { x, y, w, h } => RectF::new(*x, *y, *w, *h).into(),
            ObstacleConfig::Quad { points } => Quad::new(points[0], points[1], points[2], points[3]).into(),
            ObstacleConfig::Circle { center, radius, quality } => Shape::Circle {
                circle: Circle::new(*center, *radius),
                quality: *quality,
            },
            ObstacleConfig::Polygon { points } => Polygon::new(points.clone()).into(),
            ObstacleConfig::Star { center, radius, angle } => ShapeGenerator::star(*radius, *angle, *center).into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub center: DVec2,
    pub radius: f64,
}

impl SensorConfig {
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub room: RectF,
    #[serde(default)]
    pub lights: Vec<DVec2>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleConfig>,
    #[serde(default)]
    pub sensors: Vec<SensorConfig>,
}

impl SceneConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, SceneError> {
        let config: SceneConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        info!(
            "loaded scene {}: {} obstacle(s), {} light(s), {} sensor(s)",
            path.display(),
            config.obstacles.len(),
            config.lights.len(),
            config.sensors.len()
        );
        Ok(config)
    }

    // The geometry itself tolerates degenerate input; only shapes that
    // cannot be built at all are rejected here.
    fn validate(&self) -> Result<(), SceneError> {
        let room = &self.room;
        if !(room.w.is_finite() && room.h.is_finite() && room.w > 0.0 && room.h > 0.0) {
            return Err(SceneError::InvalidRoom { w: room.w, h: room.h });
        }
        for (index, obstacle) in self.obstacles.iter().enumerate() {
            if let ObstacleConfig::Polygon { points } = obstacle {
                if points.is_empty() {
                    return Err(SceneError::InvalidObstacle {
                        index,
                        reason: "polygon has no points".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn build_registry(&self) -> ObstacleRegistry {
        let mut registry = ObstacleRegistry::new(self.room);
        for obstacle in &self.obstacles {
            registry.add_object(obstacle.to_shape());
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"
room = { x = 40.0, y = 40.0, w = 1200.0, h = 640.0 }
lights = [[640.0, 360.0]]
sensors = [{ center = [600.0, 610.0], radius = 20.0 }]

[[obstacles]]
kind = "triangle"
points = [[120.0, 120.0], [300.0, 120.0], [120.0, 500.0]]

[[obstacles]]
kind = "rect"
x = 600.0
y = 40.0
w = 40.0
h = 260.0

[[obstacles]]
kind = "circle"
center = [1000.0, 500.0]
radius = 80.0
quality = 12

[[obstacles]]
kind = "circle"
center = [460.0, 180.0]
radius = 30.0

[[obstacles]]
kind = "star"
center = [940.0, 180.0]
radius = 60.0
"#;

    #[test]
    fn parses_every_field() {
        let config = SceneConfig::from_toml_str(SCENE).unwrap();
        assert_eq!(config.room, RectF::new(40.0, 40.0, 1200.0, 640.0));
        assert_eq!(config.lights, vec![DVec2::new(640.0, 360.0)]);
        assert_eq!(config.sensors.len(), 1);
        assert_eq!(config.obstacles.len(), 5);
        assert_eq!(
            config.obstacles[3],
            ObstacleConfig::Circle { center: DVec2::new(460.0, 180.0), radius: 30.0, quality: 8 }
        );
    }

    #[test]
    fn registry_counts_every_segment() {
        let registry = SceneConfig::from_toml_str(SCENE).unwrap().build_registry();
        // room 4 + triangle 3 + rect 4 + circles 12 and 8 + star 10
        assert_eq!(registry.segment_count(), 41);
    }

    #[test]
    fn rejects_bad_room_and_empty_polygon() {
        let err = SceneConfig::from_toml_str("room = { x = 0.0, y = 0.0, w = -1.0, h = 10.0 }").unwrap_err();
        assert!(matches!(err, SceneError::InvalidRoom { .. }));

        let err = SceneConfig::from_toml_str(
            "room = { x = 0.0, y = 0.0, w = 10.0, h = 10.0 }\n[[obstacles]]\nkind = \"polygon\"\npoints = []\n",
        )
        .unwrap_err();
        assert!(matches!(err, SceneError::InvalidObstacle { index: 0, .. }));
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let err = SceneConfig::from_toml_str(
            "room = { x = 0.0, y = 0.0, w = 10.0, h = 10.0 }\n[[obstacles]]\nkind = \"hexagon\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SceneConfig::load_from_file("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
    }
}
