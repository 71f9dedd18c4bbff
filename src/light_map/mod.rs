// src/light_map/mod.rs

pub mod registry;
pub mod visibility;
pub mod fan;

pub use registry::{ObstacleRegistry, DEFAULT_ROOM};
pub use visibility::{max_distance, CollidePoints, Visibility, RAY_EPSILON, ROOM_MARGIN};
pub use fan::{soft_light_offsets, LightFan, LightTriangle};
