// commands.rs
// User input arriving from the drawing layer, applied to the simulation between frames.

use ultraviolet::Vec2;

use crate::config::Settings;
use crate::profile_scope;
use crate::simulation::Simulation;

#[derive(Clone, Debug, PartialEq)]
pub enum SimCommand {
    /// The drawing surface changed size.
    Resize { width: f32, height: f32 },
    /// Pointer click: explode outward from the click position.
    Explode { x: f32, y: f32 },
    /// A parameter changed in the settings panel.
    UpdateSettings(Settings),
    /// The reset button: respawn with the current settings.
    Reset,
}

pub fn handle_command(cmd: SimCommand, simulation: &mut Simulation) {
    profile_scope!("command_handling");
    match cmd {
        SimCommand::Resize { width, height } => simulation.resize(width, height),
        SimCommand::Explode { x, y } => {
            // Click explosions reach across the whole surface.
            let radius = simulation.viewport().width;
            simulation.apply_impulse(Vec2::new(x, y), radius);
        }
        SimCommand::UpdateSettings(settings) => simulation.apply_settings(settings),
        SimCommand::Reset => simulation.reset(),
    }
}
