// tests/light_fan.rs

use approx::assert_relative_eq;
use glam::DVec2;
use light_map_2d::geometry::{Circle, Polygon, RectF};
use light_map_2d::light_map::{LightFan, ObstacleRegistry, Visibility};
use light_map_2d::demo_scene::create_demo_scene;

fn square_room() -> ObstacleRegistry {
    ObstacleRegistry::new(RectF::new(0.0, 0.0, 100.0, 100.0))
}

// The room boundary is stretched by one unit on its far edges.
const STRETCHED_ROOM_AREA: f64 = 101.0 * 101.0;

#[test]
fn centred_light_in_empty_room_sees_four_wedges() {
    let registry = square_room();
    let light = DVec2::new(50.0, 50.0);

    let points = Visibility::calculate_collide_points(&registry, light);
    assert_eq!(points.len(), 4);

    let triangles = LightFan::calculate_light_triangles(&registry, light);
    assert_eq!(triangles.len(), 4);
    assert_relative_eq!(LightFan::total_area(&triangles), STRETCHED_ROOM_AREA, max_relative = 1e-6);
}

#[test]
fn empty_room_is_fully_lit_from_anywhere_inside() {
    let registry = square_room();
    for light in [
        DVec2::new(10.0, 10.0),
        DVec2::new(90.0, 30.0),
        DVec2::new(2.0, 98.0),
        DVec2::new(1.0, 1.0),
    ] {
        let triangles = LightFan::calculate_light_triangles(&registry, light);
        assert_eq!(triangles.len(), 4, "{:?}", light);
        assert_relative_eq!(LightFan::total_area(&triangles), STRETCHED_ROOM_AREA, max_relative = 1e-6);
    }
}

#[test]
fn outside_inset_room_is_dark() {
    let registry = square_room();
    for light in [DVec2::new(0.0, 0.0), DVec2::new(50.0, 100.0), DVec2::new(-5.0, 50.0), DVec2::new(99.5, 99.5)] {
        assert!(Visibility::calculate_collide_points(&registry, light).is_empty());
        assert!(LightFan::calculate_light_triangles(&registry, light).is_empty());
    }
}

#[test]
fn fan_is_closed_and_anchored_at_light() {
    let registry = create_demo_scene().build_registry();
    let light = DVec2::new(700.0, 420.0);

    let points = Visibility::calculate_collide_points(&registry, light);
    let triangles = LightFan::calculate_light_triangles(&registry, light);
    let n = points.len();
    assert_eq!(n, registry.segment_count());
    assert_eq!(triangles.len(), n);

    for (i, triangle) in triangles.iter().enumerate() {
        assert_eq!(triangle.p0, light);
        assert_eq!(triangle.p1, points[i].right);
        assert_eq!(triangle.p2, points[(i + 1) % n].left);
    }
    assert_eq!(triangles[n - 1].p2, points[0].left);
}

#[test]
fn bisecting_obstacle_stops_some_wedges() {
    let mut registry = square_room();
    registry.add_object(Polygon::new(vec![DVec2::new(70.0, 20.0), DVec2::new(70.0, 80.0)]));
    let triangles = LightFan::calculate_light_triangles(&registry, DVec2::new(50.0, 50.0));

    let on_obstacle = |p: DVec2| (p.x - 70.0).abs() < 1e-6 && p.y >= 20.0 - 1e-6 && p.y <= 80.0 + 1e-6;
    assert!(triangles.iter().any(|t| on_obstacle(t.p1) || on_obstacle(t.p2)));
    assert!(LightFan::total_area(&triangles) < STRETCHED_ROOM_AREA);
}

#[test]
fn obstacles_only_shrink_the_lit_area() {
    let light = DVec2::new(30.0, 60.0);
    let empty = LightFan::total_area(&LightFan::calculate_light_triangles(&square_room(), light));

    let mut registry = square_room();
    registry.add_object(Circle::new(DVec2::new(60.0, 40.0), 10.0));
    let one = LightFan::total_area(&LightFan::calculate_light_triangles(&registry, light));

    registry.add_object(RectF::new(15.0, 20.0, 10.0, 20.0));
    let two = LightFan::total_area(&LightFan::calculate_light_triangles(&registry, light));

    assert!(one < empty);
    assert!(two < one);
}

#[test]
fn queries_are_repeatable() {
    let registry = create_demo_scene().build_registry();
    let light = DVec2::new(333.0, 222.0);
    assert_eq!(
        Visibility::calculate_collide_points(&registry, light),
        Visibility::calculate_collide_points(&registry, light)
    );
    assert_eq!(
        LightFan::calculate_light_triangles(&registry, light),
        LightFan::calculate_light_triangles(&registry, light)
    );
}

#[test]
fn bundled_scene_file_matches_demo_scene() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/demo.toml");
    let from_file = light_map_2d::SceneConfig::load_from_file(path).unwrap();
    let demo = create_demo_scene();
    assert_eq!(from_file.room, demo.room);
    assert_eq!(from_file.obstacles, demo.obstacles);
    assert_eq!(from_file.sensors, demo.sensors);
    assert_eq!(from_file.build_registry().segments(), demo.build_registry().segments());
}
