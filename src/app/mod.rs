use std::time::{Duration, Instant};

use crate::config::{Settings, Viewport};
use crate::simulation::Simulation;

pub mod frame_loop;
pub mod presenter;

pub use frame_loop::FrameLoop;
pub use presenter::StatsPresenter;

/// Target pacing for the headless loop, roughly one display refresh.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Frames between stats log lines.
pub const STATS_INTERVAL: usize = 60;

#[derive(Clone, Debug)]
pub struct RunOptions {
    pub settings: Settings,
    pub viewport: Viewport,
    /// Stop after this many frames; `None` runs until the process is killed.
    pub frames: Option<usize>,
    pub seed: Option<u64>,
}

/// Drive the frame loop headlessly, pacing frames like an animation-frame
/// callback would.
pub fn run(options: RunOptions) -> StatsPresenter {
    let mut simulation = match options.seed {
        Some(seed) => Simulation::with_seed(options.viewport, seed),
        None => Simulation::new(options.viewport),
    };
    simulation.configure(options.settings);
    simulation.reset();

    let mut frame_loop = FrameLoop::new(simulation);
    let mut presenter = StatsPresenter::new(STATS_INTERVAL);

    let mut frame = 0usize;
    while options.frames.map_or(true, |limit| frame < limit) {
        let started = Instant::now();
        frame_loop.run_frame(&mut presenter);
        frame += 1;

        #[cfg(feature = "profiling")]
        {
            if frame % STATS_INTERVAL == 0 {
                crate::PROFILER.lock().print_and_clear();
            }
        }

        if let Some(rest) = FRAME_INTERVAL.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    tracing::info!(
        frames = presenter.frames,
        elapsed = frame_loop.clock().elapsed,
        peak_lines = presenter.peak_lines,
        "run finished"
    );
    presenter
}
