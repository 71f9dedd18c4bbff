// src/lib.rs

pub mod geometry;
pub mod intersection;
pub mod light_map;
pub mod generator;
pub mod vertex; // Flattened fans for whatever renderer consumes them
pub mod config;
pub mod error;
pub mod demo_scene;

pub use geometry::{Circle, Polygon, Quad, RectF, Segment, Shape, Triangle};
pub use light_map::{CollidePoints, LightFan, LightTriangle, ObstacleRegistry, Visibility};
pub use config::SceneConfig;
pub use error::SceneError;
