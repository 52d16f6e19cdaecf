use std::sync::mpsc::{channel, Receiver, Sender};

use crate::clock::Clock;
use crate::commands::{self, SimCommand};
use crate::profile_scope;
use crate::renderer::{FrameBuilder, Presenter};
use crate::simulation::Simulation;

/// One host animation-frame callback: apply queued input, tick the clock,
/// advance the simulation, then hand the finished frame to the presenter.
///
/// Everything runs on the caller's thread. The command channel only buffers
/// input between frames; it is drained with `try_recv` before each update.
pub struct FrameLoop {
    clock: Clock,
    simulation: Simulation,
    builder: FrameBuilder,
    tx: Sender<SimCommand>,
    rx: Receiver<SimCommand>,
    warned_non_finite: bool,
}

impl FrameLoop {
    pub fn new(simulation: Simulation) -> Self {
        let (tx, rx) = channel();
        Self {
            clock: Clock::new(),
            simulation,
            builder: FrameBuilder::new(),
            tx,
            rx,
            warned_non_finite: false,
        }
    }

    /// Handle for queueing input from the drawing layer.
    pub fn sender(&self) -> Sender<SimCommand> {
        self.tx.clone()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Run a frame timed by the wall clock.
    pub fn run_frame<P: Presenter>(&mut self, presenter: &mut P) {
        self.clock.tick();
        let dt = self.clock.delta;
        self.advance(dt, presenter);
    }

    /// Run a frame with an explicit delta, bypassing the clock.
    pub fn advance<P: Presenter>(&mut self, dt: f32, presenter: &mut P) {
        profile_scope!("frame");
        while let Ok(cmd) = self.rx.try_recv() {
            tracing::debug!(?cmd, "handling command");
            commands::handle_command(cmd, &mut self.simulation);
        }

        self.simulation.update(dt);
        self.check_finite();

        let frame = self.builder.build(self.simulation.particles());
        presenter.present(frame);
    }

    fn check_finite(&mut self) {
        let invalid = self
            .simulation
            .particles()
            .iter()
            .filter(|p| !p.position.x.is_finite() || !p.position.y.is_finite())
            .count();
        if invalid > 0 && !self.warned_non_finite {
            tracing::warn!(invalid, frame = self.simulation.frame, "particles with non-finite positions");
        }
        self.warned_non_finite = invalid > 0;
    }
}
