//! Block Kuzushi entry point
//!
//! Owns the window and paces the fixed-timestep simulation; all key
//! handling reduces to building a `TickInput` per frame.

use macroquad::prelude::*;

use block_kuzushi::consts::*;
use block_kuzushi::render;
use block_kuzushi::sim::{GameState, TickInput, tick};
use block_kuzushi::tuning::Tuning;

/// Window settings, applied before the first frame
fn window_conf() -> Conf {
    Conf {
        window_title: "Block Kuzushi".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

/// Map the per-frame key queries onto simulation commands
fn sample_input() -> TickInput {
    TickInput {
        move_left: is_key_down(KeyCode::Left),
        move_right: is_key_down(KeyCode::Right),
        launch: is_key_pressed(KeyCode::Space),
        restart: is_key_pressed(KeyCode::R),
        next_level: is_key_pressed(KeyCode::N),
        quit: is_key_pressed(KeyCode::Escape),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Block Kuzushi starting...");

    let tuning = Tuning::load();
    let mut state = GameState::new(tuning);
    let mut last_mode = state.mode;
    let mut accumulator: f32 = 0.0;

    while !state.exit_requested {
        let mut input = sample_input();
        accumulator += get_frame_time().min(0.1);

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.launch = false;
            input.restart = false;
            input.next_level = false;
            input.quit = false;
        }

        if state.mode != last_mode {
            log::info!(
                "{:?} -> {:?} (level {}, score {}, lives {})",
                last_mode,
                state.mode,
                state.level,
                state.score,
                state.paddle.lives
            );
            last_mode = state.mode;
        }

        render::draw(&state);
        next_frame().await;
    }

    log::info!("Quit requested, shutting down");
}
