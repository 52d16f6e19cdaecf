//! Pairwise force model for the particle field.
//!
//! Every attract/repel particle pushes or pulls the particles inside its
//! radius with a strength proportional to `radius / distance`. Both sides of
//! a pair receive equal and opposite impulses unless frozen.

use ultraviolet::Vec2;

use crate::config::Viewport;
use crate::geometry;
use crate::particle::{Behavior, Particle};

/// Apply the force `this` exerts on `other` for a frame of length `dt`.
///
/// Returns the impulse added to `this` (attract) or to `other` (repel) when
/// the pair is in range, before the freeze guards. Coincident particles give
/// a non-finite impulse; that singularity is left in place.
pub fn interact(this: &mut Particle, other: &mut Particle, dt: f32) -> Option<Vec2> {
    if !this
        .behavior
        .interacts_with(other.behavior, this.radius, other.radius)
    {
        return None;
    }

    let dist = geometry::distance(this.position, other.position);
    let in_range = dist < this.radius;
    if !in_range {
        return None;
    }
    let angle = geometry::angle(this.position, other.position);

    let force = (this.radius / dist) * this.strength * dt;
    let impulse = geometry::heading(angle) * 0.5 * force;

    match this.behavior {
        Behavior::Attract => {
            if !this.freeze {
                this.velocity += impulse;
            }
            if !other.freeze {
                other.velocity -= impulse;
            }
        }
        Behavior::Repel => {
            if !this.freeze {
                this.velocity -= impulse;
            }
            if !other.freeze {
                other.velocity += impulse;
            }
        }
        // Idle particles have zero radius and never reach this point.
        Behavior::Idle => return None,
    }
    Some(impulse)
}

/// Advance `particles[index]` by one frame: integrate, interact with every
/// other particle (highest index first), then reflect off the viewport walls.
pub fn step(particles: &mut [Particle], index: usize, dt: f32, viewport: Viewport) {
    particles[index].integrate(dt);

    for other in (0..particles.len()).rev() {
        if other == index {
            continue;
        }
        let (this, neighbor) = pair_mut(particles, index, other);
        interact(this, neighbor, dt);
    }

    particles[index].reflect(viewport, dt);
}

/// Two distinct mutable references into `particles`, in argument order.
fn pair_mut(particles: &mut [Particle], i: usize, j: usize) -> (&mut Particle, &mut Particle) {
    debug_assert_ne!(i, j);
    if i < j {
        let (left, right) = particles.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = particles.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
