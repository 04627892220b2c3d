use macroquad::prelude::*;

use crate::application::Simulation;

/// Result of polling the keyboard for one frame
pub struct InputOutcome {
    pub simulation: Simulation,
    pub quit: bool,
}

/// Process keyboard input functionally
pub fn process_keyboard_input(simulation: Simulation) -> InputOutcome {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::reseed),
        // single step, only meaningful while paused
        (KeyCode::N, |s| if s.is_running { s } else { s.step() }),
    ];

    let simulation = actions.iter().fold(simulation, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    InputOutcome {
        simulation,
        quit: is_key_pressed(KeyCode::Escape) || is_quit_requested(),
    }
}
