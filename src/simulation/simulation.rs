// simulation/simulation.rs
// Contains the Simulation struct and its frame operations (configure, reset, update,
// apply_impulse, on_config_change)

use ultraviolet::Vec2;

use super::forces;
use crate::config::{self, Settings, Viewport};
use crate::geometry;
use crate::particle::{Behavior, Particle};
use crate::profile_scope;

/// Whether particles have been spawned yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    /// Constructed but `reset` has not run.
    Empty,
    Running,
}

/// The particle field: particles, the settings they were built from, and the
/// viewport they bounce around in.
pub struct Simulation {
    pub frame: usize,
    particles: Vec<Particle>,
    settings: Settings,
    viewport: Viewport,
    state: SimState,
    rng: fastrand::Rng,
}

impl Simulation {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rng(viewport, fastrand::Rng::new())
    }

    /// A simulation whose spawn positions and velocities are reproducible.
    pub fn with_seed(viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(viewport, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(viewport: Viewport, rng: fastrand::Rng) -> Self {
        Self {
            frame: 0,
            particles: Vec::new(),
            settings: Settings::default(),
            viewport,
            state: SimState::Empty,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current configuration; serializable for sharing.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// Store a sanitized copy of `settings`. Existing particles are not touched.
    pub fn configure(&mut self, settings: Settings) {
        self.settings = settings.sanitize();
    }

    /// Replace every particle with a freshly spawned population.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.particles.reserve(self.settings.total_particles());
        for behavior in Behavior::ALL {
            for _ in 0..self.settings.group(behavior).particles {
                let particle = self.spawn(behavior);
                self.particles.push(particle);
            }
        }
        self.frame = 0;
        self.state = SimState::Running;

        let [idle, attract, repel] = self.settings.counts();
        tracing::info!(idle, attract, repel, "particle field reset");
    }

    fn spawn(&mut self, behavior: Behavior) -> Particle {
        let position = Vec2::new(
            self.rng.f32() * self.viewport.width,
            self.rng.f32() * self.viewport.height,
        );
        let velocity = Vec2::new(self.rng.f32() * 2.0 - 1.0, self.rng.f32() * 2.0 - 1.0);
        Particle::new(behavior, position, velocity, &self.settings)
    }

    /// Advance every particle by `dt` seconds against the whole population.
    /// Particles step in place from the highest index down, so later indices
    /// see their neighbors before those neighbors have moved this frame.
    pub fn update(&mut self, dt: f32) {
        profile_scope!("simulation_update");
        if self.state == SimState::Empty {
            return;
        }
        for index in (0..self.particles.len()).rev() {
            forces::step(&mut self.particles, index, dt, self.viewport);
        }
        self.frame += 1;
    }

    /// Radial inverse-distance kick away from `point`. A particle sitting
    /// exactly on `point` ends up with a non-finite velocity.
    pub fn apply_impulse(&mut self, point: Vec2, radius: f32) {
        for p in &mut self.particles {
            let angle = geometry::angle(point, p.position);
            let dist = geometry::distance(point, p.position);
            let strength = (radius / dist) * config::EXPLOSION_SCALE;
            p.velocity += geometry::heading(angle) * strength;
        }
        tracing::debug!(x = point.x, y = point.y, radius, "impulse applied");
    }

    /// Configure, then copy the new group and global parameters onto the
    /// existing particles without respawning them.
    pub fn on_config_change(&mut self, settings: Settings) {
        self.configure(settings);
        for p in &mut self.particles {
            p.apply_settings(&self.settings);
        }
        tracing::debug!(particles = self.particles.len(), "settings patched live");
    }

    /// Parameter-change entry point: respawns when any group count changed,
    /// patches in place otherwise.
    pub fn apply_settings(&mut self, settings: Settings) {
        let settings = settings.sanitize();
        if settings.counts() != self.settings.counts() {
            self.configure(settings);
            self.reset();
        } else {
            self.on_config_change(settings);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        tracing::debug!(width, height, "viewport resized");
    }
}

#[cfg(test)]
impl Simulation {
    /// Test hook: install a hand-built population and mark the field running.
    pub(crate) fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
        self.state = SimState::Running;
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}
