use particle_field::config::{self, Settings};
use particle_field::init_config;

fn main() {
    println!("=== Settings Verification ===");

    let settings = match std::env::args().nth(1) {
        Some(path) => init_config::load_from_file(&path),
        None => init_config::load_default(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            println!("❌ {e}");
            return;
        }
    };

    let defaults = Settings::default();
    println!("Groups (idle, attract, repel): {:?}", settings.counts());
    println!("  attract radius/strength: {} / {}", settings.attract.radius(), settings.attract.strength());
    println!("  repel radius/strength:   {} / {}", settings.repel.radius(), settings.repel.strength());
    println!("  elasticity: {}", settings.elasticity);
    println!("  friction:   {}", settings.friction);
    println!("  gravity:    {}", settings.gravity);
    println!("  drawLines:  {}", settings.draw_lines);

    let ranges = [
        ("attract.particles", settings.attract.particles as f32, config::PARTICLES_RANGE),
        ("repel.particles", settings.repel.particles as f32, config::PARTICLES_RANGE),
        ("attract.radius", settings.attract.radius(), config::RADIUS_RANGE),
        ("repel.radius", settings.repel.radius(), config::RADIUS_RANGE),
        ("attract.strength", settings.attract.strength(), config::STRENGTH_RANGE),
        ("repel.strength", settings.repel.strength(), config::STRENGTH_RANGE),
        ("friction", settings.friction, config::FRICTION_RANGE),
        ("gravity", settings.gravity, config::GRAVITY_RANGE),
    ];
    for (name, value, range) in ranges {
        if (range.min..=range.max).contains(&value) {
            println!("✅ {name} = {value} fits the panel range");
        } else {
            println!("❌ {name} = {value} is outside {}..={}", range.min, range.max);
        }
    }

    if settings == defaults {
        println!("Settings match the defaults");
    }

    match settings.to_share_json() {
        Ok(json) => println!("\nShare payload:\n{json}"),
        Err(e) => println!("❌ could not serialize settings: {e}"),
    }

    println!("\n=== Settings check completed ===");
}
