//! Render snapshot handed to the drawing layer once per frame.
//!
//! The simulation never draws. After each `update`, a [`FrameBuilder`] turns
//! the particle slice into circles and connecting lines, and a [`Presenter`]
//! consumes the finished [`RenderFrame`] read-only.

pub mod draw;

pub use draw::{DrawnSet, FrameBuilder};

use ultraviolet::Vec2;

use crate::config::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub position: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Rgb,
    /// Fades linearly from 1 at zero distance to 0 at the particle radius.
    pub opacity: f32,
}

/// Everything the drawing layer needs for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderFrame {
    pub circles: Vec<Circle>,
    pub lines: Vec<LineSegment>,
}

impl RenderFrame {
    pub fn clear(&mut self) {
        self.circles.clear();
        self.lines.clear();
    }
}

/// The drawing side of the frame loop (canvas, window, or a headless sink).
pub trait Presenter {
    fn present(&mut self, frame: &RenderFrame);
}
