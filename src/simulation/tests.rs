// Frame-level tests for the Simulation: spawning, boundary handling, the force
// skip policy, explosions and live reconfiguration.

use super::forces;
use super::simulation::{SimState, Simulation};
use crate::config::{Settings, Viewport};
use crate::particle::{Behavior, Particle};
use ultraviolet::Vec2;

const DT: f32 = 1.0 / 60.0;

fn settings(idle: usize, attract: usize, repel: usize) -> Settings {
    let mut s = Settings::default();
    s.idle.particles = idle;
    s.attract.particles = attract;
    s.repel.particles = repel;
    s
}

fn still(behavior: Behavior, x: f32, y: f32, settings: &Settings) -> Particle {
    Particle::new(behavior, Vec2::new(x, y), Vec2::zero(), settings)
}

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn reset_spawns_only_requested_groups() {
        let mut sim = Simulation::with_seed(Viewport::new(640.0, 480.0), 7);
        assert_eq!(sim.state(), SimState::Empty);
        sim.configure(settings(3, 0, 0));
        sim.reset();
        assert_eq!(sim.state(), SimState::Running);
        assert_eq!(sim.particles().len(), 3);
        assert!(sim.particles().iter().all(|p| p.behavior == Behavior::Idle));
    }

    #[test]
    fn reset_spawns_inside_viewport_with_unit_velocity() {
        let viewport = Viewport::new(300.0, 200.0);
        let mut sim = Simulation::with_seed(viewport, 11);
        sim.configure(settings(5, 10, 20));
        sim.reset();
        let ps = sim.particles();
        assert_eq!(ps.len(), 35);
        assert_eq!(ps[0].behavior, Behavior::Idle);
        assert_eq!(ps[5].behavior, Behavior::Attract);
        assert_eq!(ps[34].behavior, Behavior::Repel);
        for p in ps {
            assert!(p.in_bounds(viewport));
            assert!((-1.0..=1.0).contains(&p.velocity.x));
            assert!((-1.0..=1.0).contains(&p.velocity.y));
        }
    }

    #[test]
    fn update_before_reset_does_nothing() {
        let mut sim = Simulation::with_seed(Viewport::default(), 1);
        sim.update(DT);
        assert_eq!(sim.frame, 0);
        assert!(sim.particles().is_empty());
    }

    #[test]
    fn oversized_shared_counts_still_reset() {
        let shared = crate::init_config::settings_from_json(
            r#"{"attract":{"particles":18446744073709551615}}"#,
        )
        .unwrap();
        let mut sim = Simulation::with_seed(Viewport::new(320.0, 240.0), 8);
        sim.configure(shared);
        sim.reset();
        assert_eq!(sim.particles().len(), crate::config::MAX_GROUP_PARTICLES + 256);
        assert_eq!(sim.settings().attract.particles, crate::config::MAX_GROUP_PARTICLES);
    }

    #[test]
    fn reset_can_repeat() {
        let mut sim = Simulation::with_seed(Viewport::default(), 3);
        sim.configure(settings(1, 1, 1));
        sim.reset();
        sim.update(DT);
        sim.configure(settings(0, 4, 0));
        sim.reset();
        assert_eq!(sim.frame, 0);
        assert_eq!(sim.particles().len(), 4);
    }
}

#[cfg(test)]
mod boundaries {
    use super::*;

    #[test]
    fn positions_stay_in_viewport_every_frame() {
        let viewport = Viewport::new(320.0, 240.0);
        let mut s = settings(6, 6, 6);
        s.idle.freeze = false;
        s.attract.strength = Some(5.0);
        s.repel.strength = Some(5.0);
        s.gravity = 80.0;
        let mut sim = Simulation::with_seed(viewport, 42);
        sim.configure(s);
        sim.reset();
        for _ in 0..120 {
            sim.update(DT);
            assert!(sim.particles().iter().all(|p| p.in_bounds(viewport)));
        }
    }

    #[test]
    fn fast_particles_are_clamped_to_the_walls() {
        let viewport = Viewport::new(200.0, 100.0);
        let s = Settings::default();
        let mut sim = Simulation::with_seed(viewport, 0);
        let mut particles = vec![
            still(Behavior::Repel, 20.0, 20.0, &s),
            still(Behavior::Repel, 180.0, 80.0, &s),
        ];
        particles[0].velocity = Vec2::new(-5000.0, -5000.0);
        particles[1].velocity = Vec2::new(5000.0, 5000.0);
        sim.set_particles(particles);
        sim.update(0.1);
        let ps = sim.particles();
        assert_eq!(ps[0].position, Vec2::new(0.0, 0.0));
        assert_eq!(ps[1].position, Vec2::new(200.0, 100.0));
        assert!(ps[0].velocity.x > 0.0 && ps[0].velocity.y > 0.0);
        assert!(ps[1].velocity.x < 0.0 && ps[1].velocity.y < 0.0);
    }

    #[test]
    fn resize_moves_the_walls() {
        let s = Settings::default();
        let mut sim = Simulation::with_seed(Viewport::new(500.0, 500.0), 0);
        sim.set_particles(vec![still(Behavior::Attract, 400.0, 400.0, &s)]);
        sim.resize(100.0, 50.0);
        sim.update(DT);
        assert_eq!(sim.particles()[0].position, Vec2::new(100.0, 50.0));
        assert_eq!(sim.viewport(), Viewport::new(100.0, 50.0));
    }
}

#[cfg(test)]
mod interactions {
    use super::*;

    #[test]
    fn frozen_idle_ignores_close_neighbors() {
        let s = Settings::default();
        let mut idle = still(Behavior::Idle, 100.0, 100.0, &s);
        idle.velocity = Vec2::new(3.0, 4.0);
        assert!(idle.freeze);
        let mut sim = Simulation::with_seed(Viewport::new(400.0, 400.0), 0);
        sim.set_particles(vec![
            idle,
            still(Behavior::Attract, 110.0, 100.0, &s),
            still(Behavior::Repel, 100.0, 115.0, &s),
        ]);
        for _ in 0..10 {
            sim.update(DT);
        }
        let idle = &sim.particles()[0];
        assert_eq!(idle.velocity, Vec2::new(3.0, 4.0));
        assert_eq!(idle.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn equal_radius_attract_and_repel_ignore_each_other() {
        let mut s = Settings::default();
        s.attract.radius = Some(60.0);
        s.repel.radius = Some(60.0);
        s.friction = 0.0;
        let mut sim = Simulation::with_seed(Viewport::new(400.0, 400.0), 0);
        sim.set_particles(vec![
            still(Behavior::Attract, 200.0, 200.0, &s),
            still(Behavior::Repel, 210.0, 200.0, &s),
        ]);
        sim.update(DT);
        for p in sim.particles() {
            assert_eq!(p.velocity, Vec2::zero());
        }
    }

    #[test]
    fn pair_impulses_are_equal_and_opposite() {
        let mut s = Settings::default();
        s.friction = 0.0;
        let mut a = still(Behavior::Attract, 100.0, 100.0, &s);
        let mut r = still(Behavior::Repel, 130.0, 140.0, &s);
        let impulse = forces::interact(&mut a, &mut r, DT).unwrap();
        assert_eq!(a.velocity, impulse);
        assert_eq!(r.velocity, -impulse);

        let mut r2 = still(Behavior::Repel, 100.0, 100.0, &s);
        let mut a2 = still(Behavior::Attract, 110.0, 100.0, &s);
        let impulse = forces::interact(&mut r2, &mut a2, DT).unwrap();
        assert_eq!(r2.velocity, -impulse);
        assert_eq!(a2.velocity, impulse);
    }

    #[test]
    fn attractors_close_in_on_each_other() {
        let mut s = Settings::default();
        s.friction = 0.0;
        let mut sim = Simulation::with_seed(Viewport::new(400.0, 400.0), 0);
        sim.set_particles(vec![
            still(Behavior::Attract, 180.0, 200.0, &s),
            still(Behavior::Attract, 220.0, 200.0, &s),
        ]);
        for _ in 0..5 {
            sim.update(DT);
        }
        let ps = sim.particles();
        assert!(ps[1].position.x - ps[0].position.x < 40.0);
    }

    #[test]
    fn highest_index_steps_first() {
        // The last particle integrates before the pull reaches it, then pulls
        // the first one, which moves when its own turn comes.
        let mut s = Settings::default();
        s.friction = 0.0;
        let mut sim = Simulation::with_seed(Viewport::new(400.0, 400.0), 0);
        sim.set_particles(vec![
            still(Behavior::Attract, 100.0, 100.0, &s),
            still(Behavior::Attract, 150.0, 100.0, &s),
        ]);
        sim.update(DT);
        let ps = sim.particles();
        assert!(ps[0].position.x > 100.0);
        assert_eq!(ps[1].position, Vec2::new(150.0, 100.0));
        assert!(ps[1].velocity.x < 0.0);
    }

    #[test]
    fn update_is_reproducible() {
        let run = || {
            let mut sim = Simulation::with_seed(Viewport::new(480.0, 320.0), 99);
            sim.configure(settings(4, 12, 12));
            sim.reset();
            for i in 0..60 {
                sim.update(DT + (i % 3) as f32 * 0.001);
            }
            sim.particles().to_vec()
        };
        assert_eq!(run(), run());
    }
}

#[cfg(test)]
mod explosions {
    use super::*;

    #[test]
    fn impulse_kicks_radially_outward() {
        let s = Settings::default();
        let mut sim = Simulation::with_seed(Viewport::default(), 0);
        sim.set_particles(vec![
            still(Behavior::Attract, 110.0, 100.0, &s),
            still(Behavior::Idle, 100.0, 80.0, &s),
        ]);
        sim.apply_impulse(Vec2::new(100.0, 100.0), 10.0);
        let ps = sim.particles();
        assert!((ps[0].velocity.x - 20.0).abs() < 1e-4);
        assert!(ps[0].velocity.y.abs() < 1e-4);
        // Frozen particles are still kicked.
        assert!((ps[1].velocity.y + 10.0).abs() < 1e-4);
    }

    #[test]
    fn impulse_at_particle_position_is_unbounded() {
        let s = Settings::default();
        let mut sim = Simulation::with_seed(Viewport::default(), 0);
        sim.set_particles(vec![still(Behavior::Repel, 50.0, 50.0, &s)]);
        sim.apply_impulse(Vec2::new(50.0, 50.0), 1500.0);
        assert!(!sim.particles()[0].velocity.x.is_finite());
    }
}

#[cfg(test)]
mod reconfiguration {
    use super::*;

    #[test]
    fn live_patch_keeps_positions() {
        let mut sim = Simulation::with_seed(Viewport::new(600.0, 400.0), 5);
        sim.configure(settings(2, 3, 4));
        sim.reset();
        let before: Vec<Vec2> = sim.particles().iter().map(|p| p.position).collect();

        let mut next = sim.settings().clone();
        next.attract.radius = Some(150.0);
        next.repel.color = [1, 2, 3];
        next.idle.freeze = false;
        next.gravity = 12.0;
        next.draw_lines = false;
        sim.on_config_change(next);

        let after: Vec<Vec2> = sim.particles().iter().map(|p| p.position).collect();
        assert_eq!(before, after);
        for p in sim.particles() {
            assert_eq!(p.gravity, 12.0);
            assert!(!p.draw_line);
            match p.behavior {
                Behavior::Idle => {
                    assert!(!p.freeze);
                    assert_eq!(p.radius, 0.0);
                }
                Behavior::Attract => assert_eq!(p.radius, 150.0),
                Behavior::Repel => assert_eq!(p.color, [1, 2, 3]),
            }
        }
    }

    #[test]
    fn count_change_respawns() {
        let mut sim = Simulation::with_seed(Viewport::new(600.0, 400.0), 5);
        sim.configure(settings(0, 2, 2));
        sim.reset();
        sim.update(DT);

        let mut next = sim.settings().clone();
        next.repel.particles = 6;
        sim.apply_settings(next);
        assert_eq!(sim.particles().len(), 8);
        assert_eq!(sim.frame, 0);
    }

    #[test]
    fn counts_above_the_cap_do_not_respawn_again() {
        let mut sim = Simulation::with_seed(Viewport::new(600.0, 400.0), 5);
        sim.configure(settings(0, 600, 0));
        sim.reset();
        sim.update(DT);

        let mut next = sim.settings().clone();
        next.attract.particles = 600;
        next.gravity = 4.0;
        sim.apply_settings(next);
        assert_eq!(sim.frame, 1);
        assert_eq!(sim.particles().len(), crate::config::MAX_GROUP_PARTICLES);
    }

    #[test]
    fn same_counts_patch_in_place() {
        let mut sim = Simulation::with_seed(Viewport::new(600.0, 400.0), 5);
        sim.configure(settings(0, 2, 2));
        sim.reset();
        sim.update(DT);
        sim.particles_mut()[0].position = Vec2::new(1.0, 2.0);

        let mut next = sim.settings().clone();
        next.elasticity = 0.2;
        sim.apply_settings(next);
        assert_eq!(sim.frame, 1);
        assert_eq!(sim.particles()[0].position, Vec2::new(1.0, 2.0));
        assert_eq!(sim.particles()[0].elasticity, 0.2);
    }
}
