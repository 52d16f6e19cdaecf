use std::collections::HashSet;

use super::{Circle, LineSegment, RenderFrame};
use crate::config::{Rgb, PARTICLE_DRAW_RADIUS};
use crate::geometry;
use crate::particle::{Behavior, Particle};
use crate::profile_scope;

/// Unordered particle-index pairs that already have a connecting line this
/// frame. Scratch state: cleared at the start of every frame.
#[derive(Clone, Debug, Default)]
pub struct DrawnSet {
    pairs: HashSet<(usize, usize)>,
}

impl DrawnSet {
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Record the pair; returns false if it was already recorded.
    pub fn insert(&mut self, a: usize, b: usize) -> bool {
        self.pairs.insert((a.min(b), a.max(b)))
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.pairs.contains(&(a.min(b), a.max(b)))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Builds [`RenderFrame`]s, reusing its buffers and drawn-set across frames.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    frame: RenderFrame,
    drawn: DrawnSet,
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the particles from the highest index down, emitting each one's
    /// circle and then the lines it draws. A pair is drawn once, by whichever
    /// reaching particle comes first in that walk, and its opacity is set by
    /// that particle's radius.
    pub fn build(&mut self, particles: &[Particle]) -> &RenderFrame {
        profile_scope!("build_frame");
        self.frame.clear();
        self.drawn.clear();

        for (i, this) in particles.iter().enumerate().rev() {
            self.frame.circles.push(Circle {
                position: this.position,
                radius: PARTICLE_DRAW_RADIUS,
                color: this.color,
            });
            if !this.draw_line || this.radius <= 0.0 {
                continue;
            }
            for (j, other) in particles.iter().enumerate().rev() {
                if i == j || (this.behavior == Behavior::Idle && other.behavior == Behavior::Idle) {
                    continue;
                }
                let dist = geometry::distance(this.position, other.position);
                if dist > this.radius || self.drawn.contains(i, j) {
                    continue;
                }
                self.drawn.insert(i, j);
                self.frame.lines.push(LineSegment {
                    from: this.position,
                    to: other.position,
                    color: line_color(this.color, other.color),
                    opacity: 1.0 - dist / this.radius,
                });
            }
        }

        &self.frame
    }

    pub fn drawn(&self) -> &DrawnSet {
        &self.drawn
    }
}

/// Own color for same-colored pairs, otherwise the floored channel average.
fn line_color(a: Rgb, b: Rgb) -> Rgb {
    if a == b {
        return a;
    }
    [0usize, 1, 2].map(|c| ((a[c] as u16 + b[c] as u16) / 2) as u8)
}
