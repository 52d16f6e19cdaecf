// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::particle::Behavior;

/// RGB color with integer channels in `[0, 255]`.
pub type Rgb = [u8; 3];

// ====================
// Group Defaults
// ====================
pub const IDLE_PARTICLES: usize = 0;
pub const IDLE_COLOR: Rgb = [136, 255, 136];
pub const IDLE_FREEZE: bool = true;

pub const ATTRACT_PARTICLES: usize = 128;
pub const ATTRACT_COLOR: Rgb = [255, 68, 0];
pub const ATTRACT_RADIUS: f32 = 100.0;
pub const ATTRACT_STRENGTH: f32 = 15.0;

pub const REPEL_PARTICLES: usize = 256;
pub const REPEL_COLOR: Rgb = [0, 136, 255];
pub const REPEL_RADIUS: f32 = 50.0;
pub const REPEL_STRENGTH: f32 = 15.0;

// ====================
// Global Physics Defaults
// ====================
pub const DRAW_LINES: bool = true;
pub const ELASTICITY: f32 = 0.75;
pub const FRICTION: f32 = 0.002;
pub const GRAVITY: f32 = 0.0;

/// Scale applied to the inverse-distance explosion kick.
pub const EXPLOSION_SCALE: f32 = 20.0;
/// Radius of the circle drawn for every particle.
pub const PARTICLE_DRAW_RADIUS: f32 = 2.0;

// ====================
// Window/Rendering
// ====================
pub const WINDOW_WIDTH: f32 = 1500.0; // Initial viewport width in pixels
pub const WINDOW_HEIGHT: f32 = 1200.0; // Initial viewport height in pixels

// ====================
// GUI Parameter Ranges
// ====================
/// Slider bounds a presentation layer should offer for a parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

pub const PARTICLES_RANGE: ParamRange = ParamRange { min: 0.0, max: 512.0, step: 1.0 };
/// Upper bound on a group's particle count, whatever the settings source.
pub const MAX_GROUP_PARTICLES: usize = PARTICLES_RANGE.max as usize;
pub const RADIUS_RANGE: ParamRange = ParamRange { min: 1.0, max: 200.0, step: 1.0 };
pub const STRENGTH_RANGE: ParamRange = ParamRange { min: 0.0, max: 300.0, step: 5.0 };
pub const ELASTICITY_RANGE: ParamRange = ParamRange { min: 0.0, max: 1.0, step: 0.01 };
pub const FRICTION_RANGE: ParamRange = ParamRange { min: 0.0, max: 0.05, step: 0.001 };
pub const GRAVITY_RANGE: ParamRange = ParamRange { min: 0.0, max: 80.0, step: 2.0 };

/// Drawing-surface extent used for spawning and boundary reflection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

/// Per-behavior group parameters. Idle groups carry no radius or strength.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub particles: usize,
    pub color: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<f32>,
    pub freeze: bool,
}

impl GroupConfig {
    pub fn radius(&self) -> f32 {
        self.radius.unwrap_or(0.0)
    }

    pub fn strength(&self) -> f32 {
        self.strength.unwrap_or(0.0)
    }
}

/// Complete configuration snapshot consumed by the simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub idle: GroupConfig,
    pub attract: GroupConfig,
    pub repel: GroupConfig,
    pub draw_lines: bool,
    pub elasticity: f32,
    pub friction: f32,
    pub gravity: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            idle: GroupConfig {
                particles: IDLE_PARTICLES,
                color: IDLE_COLOR,
                radius: None,
                strength: None,
                freeze: IDLE_FREEZE,
            },
            attract: GroupConfig {
                particles: ATTRACT_PARTICLES,
                color: ATTRACT_COLOR,
                radius: Some(ATTRACT_RADIUS),
                strength: Some(ATTRACT_STRENGTH),
                freeze: false,
            },
            repel: GroupConfig {
                particles: REPEL_PARTICLES,
                color: REPEL_COLOR,
                radius: Some(REPEL_RADIUS),
                strength: Some(REPEL_STRENGTH),
                freeze: false,
            },
            draw_lines: DRAW_LINES,
            elasticity: ELASTICITY,
            friction: FRICTION,
            gravity: GRAVITY,
        }
    }
}

impl Settings {
    pub fn group(&self, behavior: Behavior) -> &GroupConfig {
        match behavior {
            Behavior::Idle => &self.idle,
            Behavior::Attract => &self.attract,
            Behavior::Repel => &self.repel,
        }
    }

    pub fn group_mut(&mut self, behavior: Behavior) -> &mut GroupConfig {
        match behavior {
            Behavior::Idle => &mut self.idle,
            Behavior::Attract => &mut self.attract,
            Behavior::Repel => &mut self.repel,
        }
    }

    /// Particle counts in spawn order (idle, attract, repel).
    pub fn counts(&self) -> [usize; 3] {
        Behavior::ALL.map(|b| self.group(b).particles)
    }

    pub fn total_particles(&self) -> usize {
        self.counts().iter().fold(0, |total, n| total.saturating_add(*n))
    }

    /// Coerce every field into its valid domain. Out-of-range numbers are
    /// clamped; non-finite numbers and non-positive radii fall back to the
    /// defaults. Group counts are capped at [`MAX_GROUP_PARTICLES`] and idle
    /// groups lose any radius or strength.
    pub fn sanitize(mut self) -> Self {
        let defaults = Settings::default();

        self.elasticity = finite_or(self.elasticity, defaults.elasticity).clamp(0.0, 1.0);
        self.friction = finite_or(self.friction, defaults.friction).max(0.0);
        self.gravity = finite_or(self.gravity, defaults.gravity).max(0.0);

        for behavior in Behavior::ALL {
            let group = self.group_mut(behavior);
            group.particles = group.particles.min(MAX_GROUP_PARTICLES);
        }

        self.idle.radius = None;
        self.idle.strength = None;

        for behavior in [Behavior::Attract, Behavior::Repel] {
            let fallback = defaults.group(behavior);
            let group = self.group_mut(behavior);
            group.radius = Some(match group.radius {
                Some(r) if r.is_finite() && r > 0.0 => r,
                _ => fallback.radius(),
            });
            group.strength = Some(finite_or(group.strength(), fallback.strength()).max(0.0));
        }
        self
    }

    /// Overlay a partial settings document. Nested objects are merged
    /// recursively; a field is only taken when its type matches, and colors
    /// are only replaced by a three-number array. Everything else is ignored.
    pub fn merge_value(&mut self, value: &Value) {
        let Some(fields) = value.as_object() else {
            tracing::warn!("settings document is not an object; ignoring it");
            return;
        };
        for (key, v) in fields {
            match key.as_str() {
                "idle" => merge_group(&mut self.idle, v, key, false),
                "attract" => merge_group(&mut self.attract, v, key, true),
                "repel" => merge_group(&mut self.repel, v, key, true),
                "drawLines" => merge_field(&mut self.draw_lines, v.as_bool(), key),
                "elasticity" => merge_field(&mut self.elasticity, as_f32(v), key),
                "friction" => merge_field(&mut self.friction, as_f32(v), key),
                "gravity" => merge_field(&mut self.gravity, as_f32(v), key),
                _ => tracing::debug!(field = %key, "ignoring unknown settings field"),
            }
        }
    }

    /// Settings as the JSON document used for sharing.
    pub fn to_share_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn as_f32(v: &Value) -> Option<f32> {
    v.as_f64().map(|f| f as f32)
}

fn as_color(v: &Value) -> Option<Rgb> {
    let items = v.as_array()?;
    if items.len() != 3 {
        return None;
    }
    let mut rgb = [0u8; 3];
    for (slot, item) in rgb.iter_mut().zip(items) {
        *slot = item.as_f64()?.floor().clamp(0.0, 255.0) as u8;
    }
    Some(rgb)
}

fn merge_field<T>(target: &mut T, candidate: Option<T>, key: &str) {
    match candidate {
        Some(value) => *target = value,
        None => tracing::warn!(field = %key, "settings field has the wrong type; keeping current value"),
    }
}

fn merge_group(group: &mut GroupConfig, value: &Value, section: &str, has_reach: bool) {
    let Some(fields) = value.as_object() else {
        tracing::warn!(section = %section, "settings section is not an object; ignoring it");
        return;
    };
    for (key, v) in fields {
        let path = format!("{section}.{key}");
        match key.as_str() {
            "particles" => {
                let count = v.as_u64().map(|n| usize::try_from(n).unwrap_or(usize::MAX));
                merge_field(&mut group.particles, count, &path)
            }
            "color" => merge_field(&mut group.color, as_color(v), &path),
            "freeze" => merge_field(&mut group.freeze, v.as_bool(), &path),
            "radius" if has_reach => merge_field(&mut group.radius, as_f32(v).map(Some), &path),
            "strength" if has_reach => {
                merge_field(&mut group.strength, as_f32(v).map(Some), &path)
            }
            _ => tracing::debug!(field = %path, "ignoring unknown settings field"),
        }
    }
}
