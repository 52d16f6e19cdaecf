use crate::renderer::{Presenter, RenderFrame};

/// Headless presenter: counts what would have been drawn and logs a summary
/// every `interval` frames.
#[derive(Debug)]
pub struct StatsPresenter {
    interval: usize,
    pub frames: usize,
    pub last_circles: usize,
    pub last_lines: usize,
    pub peak_lines: usize,
}

impl StatsPresenter {
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            last_circles: 0,
            last_lines: 0,
            peak_lines: 0,
        }
    }
}

impl Presenter for StatsPresenter {
    fn present(&mut self, frame: &RenderFrame) {
        self.frames += 1;
        self.last_circles = frame.circles.len();
        self.last_lines = frame.lines.len();
        self.peak_lines = self.peak_lines.max(self.last_lines);

        if self.frames % self.interval == 0 {
            let mean_opacity = if frame.lines.is_empty() {
                0.0
            } else {
                frame.lines.iter().map(|l| l.opacity).sum::<f32>() / frame.lines.len() as f32
            };
            tracing::info!(
                frame = self.frames,
                circles = self.last_circles,
                lines = self.last_lines,
                mean_opacity,
                "frame presented"
            );
        }
    }
}
