use macroquad::prelude::*;
use toroidal_life::{
    Config, Renderer, SimConfig, Simulation,
    input,
    rendering::TextureSink,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "life".to_owned(),
        window_width: (Config::GRID_WIDTH * Config::CELL_SCALE) as i32,
        window_height: (Config::GRID_HEIGHT * Config::CELL_SCALE) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    // close requests are handled in the input poll so the loop can exit cleanly
    prevent_quit();

    let config = SimConfig::from_env().unwrap_or_else(|err| {
        log::warn!("ignoring environment overrides: {err}");
        SimConfig::default()
    });
    log::info!(
        "starting {}x{} torus at {} gen/s, reseed every {:?}",
        config.width,
        config.height,
        config.generations_per_second,
        config.reseed_every
    );

    let mut state = Simulation::from_config(&config);
    let mut renderer = Renderer::new(config.width, config.height, config.palette);
    let mut sink = TextureSink::new(config.width, config.height);

    loop {
        let outcome = input::process_keyboard_input(state);
        state = outcome.simulation;
        if outcome.quit {
            break;
        }

        renderer.render(&state.grid, &mut sink);
        state = state.tick(get_frame_time());

        next_frame().await;
    }

    log::info!("stopped after {} generations", state.generation);
}
