//! Fixed timestep simulation tick
//!
//! The state machine dispatches on the current mode; only Playing runs the
//! physics step. Transitions requested by the physics (win, game over, armed
//! level-up) are committed before the tick returns.

use crate::consts::*;

use super::collision::circle_rect_overlap;
use super::state::{GameMode, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move the paddle left (held)
    pub move_left: bool,
    /// Move the paddle right (held)
    pub move_right: bool,
    /// Launch the waiting ball (one-shot)
    pub launch: bool,
    /// Restart after a game over (one-shot)
    pub restart: bool,
    /// Advance past a cleared board (one-shot)
    pub next_level: bool,
    /// Quit the game (one-shot)
    pub quit: bool,
}

/// Advance the game state by one fixed timestep.
///
/// Keys that have no meaning in the current mode are no-ops.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Quit is an explicit signal the frontend polls, honored in every mode
    if input.quit {
        state.exit_requested = true;
        return;
    }

    let mut level_up_armed = false;
    match state.mode {
        GameMode::Menu => {
            if input.launch {
                state.launch();
            }
        }
        GameMode::Playing => {
            level_up_armed = step_playing(state, input, dt);
        }
        GameMode::GameOver => {
            if input.restart {
                state.restart();
            }
        }
        GameMode::Win => {
            if input.next_level {
                state.advance_level();
            }
        }
    }

    // Applied after the mode dispatch: a Win or GameOver committed above
    // wins over a level-up armed in the same frame
    if level_up_armed && state.mode == GameMode::Playing {
        state.advance_level();
    }
}

/// One Playing-mode physics step.
///
/// Returns true when the score reached the level-up threshold this frame.
fn step_playing(state: &mut GameState, input: &TickInput, dt: f32) -> bool {
    move_paddle(state, input, dt);

    if state.ball.active {
        state.ball.pos += state.ball.vel * dt;
        collide_walls(state);
        collide_paddle(state);
        collide_bricks(state);
        check_ball_loss(state);
    }

    if state.mode == GameMode::Playing && state.board_cleared() {
        state.mode = GameMode::Win;
    }

    state.tuning.level_up_score > 0 && state.score >= state.tuning.level_up_score
}

/// Held directional input moves the paddle a fixed speed, clamped on-screen
fn move_paddle(state: &mut GameState, input: &TickInput, dt: f32) {
    let mut dir = 0.0;
    if input.move_left {
        dir -= 1.0;
    }
    if input.move_right {
        dir += 1.0;
    }
    let speed = state.tuning.paddle_speed;
    let rect = &mut state.paddle.rect;
    rect.x = (rect.x + dir * speed * dt).clamp(0.0, SCREEN_WIDTH - rect.width);
}

/// Reflect off the side and top edges, re-seating the ball on the boundary
/// so a crossing flips the velocity exactly once
fn collide_walls(state: &mut GameState) {
    let ball = &mut state.ball;
    if ball.pos.x <= ball.radius {
        ball.pos.x = ball.radius;
        ball.vel.x = ball.vel.x.abs();
    } else if ball.pos.x >= SCREEN_WIDTH - ball.radius {
        ball.pos.x = SCREEN_WIDTH - ball.radius;
        ball.vel.x = -ball.vel.x.abs();
    }
    if ball.pos.y <= ball.radius {
        ball.pos.y = ball.radius;
        ball.vel.y = ball.vel.y.abs();
    }
}

/// Bounce off the paddle, repositioning just above its top to prevent
/// tunneling or a double hit on the next frame
fn collide_paddle(state: &mut GameState) {
    let paddle_rect = state.paddle.rect;
    let ball = &mut state.ball;
    if circle_rect_overlap(ball.pos, ball.radius, &paddle_rect) {
        ball.vel.y = -ball.vel.y.abs();
        ball.pos.y = paddle_rect.y - ball.radius;
    }
}

/// Scan every active brick; each overlap deactivates the brick, scores, and
/// inverts the vertical velocity independently (no early exit)
fn collide_bricks(state: &mut GameState) {
    let points = state.tuning.brick_points;
    for brick in state.bricks.iter_mut().filter(|b| b.active) {
        if circle_rect_overlap(state.ball.pos, state.ball.radius, &brick.rect) {
            brick.active = false;
            state.ball.vel.y = -state.ball.vel.y;
            state.score += points;
        }
    }
}

/// A ball past the bottom edge costs a life; with lives left it respawns
/// above the paddle, immediately back in play
fn check_ball_loss(state: &mut GameState) {
    if state.ball.pos.y > SCREEN_HEIGHT {
        state.paddle.lives = state.paddle.lives.saturating_sub(1);
        if state.paddle.lives == 0 {
            state.mode = GameMode::GameOver;
        } else {
            state.reset_ball();
            state.ball.active = true;
        }
    }
}
