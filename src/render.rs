//! Frame rendering
//!
//! Thin wrapper over the window library's draw primitives. Reads the game
//! state, never mutates it, and feeds nothing back into the simulation.

use macroquad::prelude::*;

use crate::consts::*;
use crate::sim::{GameMode, GameState};

/// Draw one frame for the current mode
pub fn draw(state: &GameState) {
    clear_background(BLACK);

    match state.mode {
        GameMode::Menu => draw_menu(),
        GameMode::Playing => draw_playfield(state),
        GameMode::GameOver => draw_game_over(state),
        GameMode::Win => draw_win(state),
    }
}

fn draw_menu() {
    draw_text(
        "Welcome to Block Kuzushi!",
        SCREEN_WIDTH / 2.0 - 400.0,
        SCREEN_HEIGHT / 2.0 - 50.0,
        50.0,
        WHITE,
    );
    draw_text(
        "Press SPACE to play!",
        SCREEN_WIDTH / 2.0 - 400.0,
        SCREEN_HEIGHT / 2.0 + 20.0,
        50.0,
        WHITE,
    );
    draw_text(
        "LEFT/RIGHT move the paddle - R restarts - N starts the next level - ESC quits",
        SCREEN_WIDTH / 2.0 - 400.0,
        SCREEN_HEIGHT / 2.0 + 90.0,
        20.0,
        GRAY,
    );
}

fn draw_playfield(state: &GameState) {
    let paddle = &state.paddle.rect;
    draw_rectangle(paddle.x, paddle.y, paddle.width, paddle.height, GREEN);

    draw_circle(state.ball.pos.x, state.ball.pos.y, state.ball.radius, WHITE);

    for brick in state.bricks.iter().filter(|b| b.active) {
        draw_rectangle(
            brick.rect.x,
            brick.rect.y,
            brick.rect.width,
            brick.rect.height,
            RED,
        );
    }

    draw_text(&format!("Points: {}", state.score), 20.0, 50.0, 30.0, YELLOW);
    draw_text(
        &format!("Level: {}", state.level),
        SCREEN_WIDTH / 2.0 - 50.0,
        50.0,
        30.0,
        YELLOW,
    );
    draw_text(
        &format!("Lives: {}", state.paddle.lives),
        1450.0,
        50.0,
        30.0,
        YELLOW,
    );
}

fn draw_game_over(state: &GameState) {
    draw_text(
        "GAME OVER!",
        SCREEN_WIDTH / 2.0 - 300.0,
        SCREEN_HEIGHT / 2.0 - 50.0,
        100.0,
        RED,
    );
    draw_text(
        &format!("Final score: {}", state.score),
        SCREEN_WIDTH / 2.0 - 300.0,
        SCREEN_HEIGHT / 2.0 + 30.0,
        40.0,
        WHITE,
    );
    draw_text(
        "Press R to restart",
        SCREEN_WIDTH / 2.0 - 300.0,
        SCREEN_HEIGHT / 2.0 + 90.0,
        30.0,
        GRAY,
    );
}

fn draw_win(state: &GameState) {
    draw_text(
        "YOU WIN!",
        SCREEN_WIDTH / 2.0 - 100.0,
        SCREEN_HEIGHT / 2.0 - 50.0,
        100.0,
        GREEN,
    );
    draw_text(
        &format!("Level {} cleared", state.level),
        SCREEN_WIDTH / 2.0 - 100.0,
        SCREEN_HEIGHT / 2.0 + 30.0,
        40.0,
        WHITE,
    );
    draw_text(
        "Press N for the next level",
        SCREEN_WIDTH / 2.0 - 100.0,
        SCREEN_HEIGHT / 2.0 + 90.0,
        30.0,
        GRAY,
    );
}
