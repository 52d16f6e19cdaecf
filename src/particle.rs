// Defines the particle struct (position, velocity, behavior and the per-group physical
// parameters) and the per-particle parts of a simulation step: damping/gravity integration
// and boundary reflection. Pairwise forces live in simulation::forces.

use ultraviolet::Vec2;

use crate::config::{Rgb, Settings, Viewport};

/// Behavior group a particle belongs to. Fixed when the particle is spawned.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Behavior {
    Idle,
    Attract,
    Repel,
}

impl Behavior {
    /// Spawn order used by `Simulation::reset`.
    pub const ALL: [Behavior; 3] = [Behavior::Idle, Behavior::Attract, Behavior::Repel];

    /// Whether a particle of this behavior and radius exerts force on `other`.
    /// Idle pairs never interact, and attract/repel pairs with exactly equal
    /// radii are treated as non-interacting groups.
    pub fn interacts_with(self, other: Behavior, radius: f32, other_radius: f32) -> bool {
        use Behavior::*;
        match (self, other) {
            (Idle, Idle) => false,
            (Attract, Repel) | (Repel, Attract) => radius != other_radius,
            _ => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub behavior: Behavior,
    pub color: Rgb,
    pub radius: f32,
    pub strength: f32,
    pub elasticity: f32,
    pub friction: f32,
    pub gravity: f32,
    pub freeze: bool,
    pub draw_line: bool,
}

impl Particle {
    /// A particle of `behavior` with every other field taken from `settings`.
    pub fn new(behavior: Behavior, position: Vec2, velocity: Vec2, settings: &Settings) -> Self {
        let mut particle = Self {
            position,
            velocity,
            behavior,
            color: [255, 255, 255],
            radius: 0.0,
            strength: 0.0,
            elasticity: 1.0,
            friction: 0.0,
            gravity: 0.0,
            freeze: false,
            draw_line: false,
        };
        particle.apply_settings(settings);
        particle
    }

    /// Copy the group and global parameters for this particle's behavior.
    /// Position and velocity are left untouched.
    pub fn apply_settings(&mut self, settings: &Settings) {
        let group = settings.group(self.behavior);
        self.color = group.color;
        self.freeze = group.freeze;
        match self.behavior {
            Behavior::Idle => {
                self.radius = 0.0;
                self.strength = 0.0;
            }
            Behavior::Attract | Behavior::Repel => {
                self.radius = group.radius();
                self.strength = group.strength();
            }
        }
        self.elasticity = settings.elasticity;
        self.friction = settings.friction;
        self.gravity = settings.gravity;
        self.draw_line = settings.draw_lines;
    }

    /// Damp, apply gravity and advance the position. Frozen particles stay put.
    pub fn integrate(&mut self, dt: f32) {
        if self.freeze {
            return;
        }
        self.velocity /= self.friction + 1.0;
        self.velocity.y += self.gravity * dt;
        self.position += self.velocity * dt;
    }

    /// Clamp into the viewport and bounce off any wall that was crossed.
    /// The bounce velocity is also scaled by `dt`, which makes the response
    /// depend on frame rate.
    pub fn reflect(&mut self, viewport: Viewport, dt: f32) {
        let bounce = self.elasticity * dt;
        let Vec2 { x, y } = &mut self.position;
        let Vec2 { x: vx, y: vy } = &mut self.velocity;
        for (pos, vel, extent) in [(x, vx, viewport.width), (y, vy, viewport.height)] {
            if *pos <= 0.0 {
                *pos = 0.0;
                *vel = -*vel * bounce;
            }
            if *pos > extent {
                *pos = extent;
                *vel = -*vel * bounce;
            }
        }
    }

    pub fn in_bounds(&self, viewport: Viewport) -> bool {
        (0.0..=viewport.width).contains(&self.position.x)
            && (0.0..=viewport.height).contains(&self.position.y)
    }
}
