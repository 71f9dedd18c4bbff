// src/main.rs

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use glam::DVec2;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use light_map_2d::demo_scene::{create_demo_scene, SOFT_LIGHT_COLORS};
use light_map_2d::generator::ShapeGenerator;
use light_map_2d::light_map::{soft_light_offsets, LightFan, LightTriangle, Visibility};
use light_map_2d::vertex::Vertex;
use light_map_2d::{ObstacleRegistry, SceneConfig};

fn build_command() -> Command {
    Command::new("light_map_2d")
        .about("Computes the area lit by a point light in a room full of obstacles")
        .arg(
            Arg::new("scene")
                .short('s')
                .long("scene")
                .value_name("FILE")
                .help("TOML scene file (defaults to the built-in demo scene)"),
        )
        .arg(
            Arg::new("light")
                .short('l')
                .long("light")
                .num_args(2)
                .value_names(["X", "Y"])
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .help("Light position, overrides the scene's lights"),
        )
        .arg(
            Arg::new("random")
                .short('r')
                .long("random")
                .value_name("COUNT")
                .value_parser(value_parser!(usize))
                .help("Scatter COUNT random obstacles into the room"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .default_value("0")
                .help("Seed for --random"),
        )
        .arg(
            Arg::new("soft")
                .long("soft")
                .action(ArgAction::SetTrue)
                .help("Use four nudged lights per light for soft shadow edges"),
        )
        .arg(
            Arg::new("points")
                .long("points")
                .action(ArgAction::SetTrue)
                .help("Print every collide point pair"),
        )
        .arg(
            Arg::new("vertices")
                .long("vertices")
                .action(ArgAction::SetTrue)
                .help("Print the coloured vertex buffer of every fan"),
        )
}

fn report(registry: &ObstacleRegistry, scene: &SceneConfig, light: DVec2, fans: &[Vec<LightTriangle>]) {
    for fan in fans {
        if fan.is_empty() {
            println!("light ({:.1}, {:.1}): outside the room, nothing lit", light.x, light.y);
            continue;
        }
        println!(
            "light ({:.1}, {:.1}): {} triangle(s), lit area {:.1} ({:.1}% of room)",
            light.x,
            light.y,
            fan.len(),
            LightFan::total_area(fan),
            100.0 * LightFan::lit_fraction(registry, fan)
        );
    }

    for (i, sensor) in scene.sensors.iter().enumerate() {
        let lit = fans.iter().any(|fan| LightFan::illuminates(fan, &sensor.circle()));
        println!("  sensor {} at ({:.1}, {:.1}): {}", i, sensor.center.x, sensor.center.y, if lit { "ON" } else { "off" });
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let matches = build_command().get_matches();

    let scene = match matches.get_one::<String>("scene") {
        Some(path) => SceneConfig::load_from_file(path).with_context(|| format!("loading scene {}", path))?,
        None => create_demo_scene(),
    };
    let mut registry = scene.build_registry();

    if let Some(&count) = matches.get_one::<usize>("random") {
        let seed = *matches.get_one::<u64>("seed").unwrap_or(&0);
        let mut rng = StdRng::seed_from_u64(seed);
        for shape in ShapeGenerator::scatter_obstacles(&mut rng, registry.room(), count) {
            registry.add_object(shape);
        }
        info!("scattered {} random obstacle(s) with seed {}", count, seed);
    }
    info!("{} occluding segment(s) registered", registry.segment_count());

    let lights: Vec<DVec2> = match matches.get_many::<f64>("light") {
        Some(values) => {
            let xy: Vec<f64> = values.copied().collect();
            vec![DVec2::new(xy[0], xy[1])]
        }
        None if scene.lights.is_empty() => {
            warn!("scene has no lights, using the room centre");
            vec![registry.room().center()]
        }
        None => scene.lights.clone(),
    };

    let soft = matches.get_flag("soft");
    for light in lights {
        if matches.get_flag("points") {
            for (i, pair) in Visibility::calculate_collide_points(&registry, light).iter().enumerate() {
                println!(
                    "  {:4}: ({:.3}, {:.3}) | ({:.3}, {:.3})",
                    i, pair.left.x, pair.left.y, pair.right.x, pair.right.y
                );
            }
        }

        let fans = if soft {
            let nudged: Vec<DVec2> = soft_light_offsets().iter().map(|offset| light + *offset).collect();
            LightFan::calculate_for_lights(&registry, &nudged)
        } else {
            vec![LightFan::calculate_light_triangles(&registry, light)]
        };

        report(&registry, &scene, light, &fans);

        if matches.get_flag("vertices") {
            for (fan, color) in fans.iter().zip(SOFT_LIGHT_COLORS.iter().cycle()) {
                let vertices = Vertex::from_fan(fan, *color);
                let bytes: &[u8] = bytemuck::cast_slice(&vertices[..]);
                println!("  vertex buffer: {} vertices, {} bytes", vertices.len(), bytes.len());
                for v in &vertices {
                    println!(
                        "    ({:.3}, {:.3}) rgba({:.2}, {:.2}, {:.2}, {:.2})",
                        v.position[0], v.position[1], v.color[0], v.color[1], v.color[2], v.color[3]
                    );
                }
            }
        }
    }

    Ok(())
}
