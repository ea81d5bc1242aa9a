//! Game state and core simulation types
//!
//! Score, level, lives and mode live in one explicit context struct that the
//! update function receives each frame - nothing here is process-wide.

use glam::Vec2;

use crate::consts::*;
use crate::tuning::Tuning;

use super::level::generate_level;
use super::rect::Rect;

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Title screen, waiting for the launch key
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for the restart key
    GameOver,
    /// Board cleared, waiting for the next-level key
    Win,
}

/// The ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in px/sec
    pub vel: Vec2,
    pub radius: f32,
    /// False while waiting to launch; an inactive ball skips physics
    pub active: bool,
}

/// The player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub rect: Rect,
    /// Remaining lives; zero means game over
    pub lives: u8,
}

/// A brick. Deactivated permanently when hit, within a level.
#[derive(Debug, Clone, Copy)]
pub struct Brick {
    pub rect: Rect,
    pub active: bool,
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current mode; exactly one is active at a time
    pub mode: GameMode,
    /// Points scored on the current level
    pub score: u32,
    /// Current level number (1-based)
    pub level: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Row-major grid of `BRICK_ROWS * BRICK_COLS` bricks
    pub bricks: Vec<Brick>,
    /// Set when the quit input arrives; the frontend ends its loop on it
    pub exit_requested: bool,
    /// Balance values, loaded once at startup
    pub tuning: Tuning,
}

impl GameState {
    /// Create a fresh run: menu mode, level 1, full lives, ball waiting on
    /// the paddle.
    pub fn new(tuning: Tuning) -> Self {
        let paddle = Paddle {
            rect: Rect::new(
                SCREEN_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
                SCREEN_HEIGHT - PADDLE_BOTTOM_OFFSET,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            lives: tuning.starting_lives,
        };

        let mut state = Self {
            mode: GameMode::Menu,
            score: 0,
            level: 1,
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                radius: BALL_RADIUS,
                active: false,
            },
            paddle,
            bricks: generate_level(1, SCREEN_WIDTH),
            exit_requested: false,
            tuning,
        };
        state.reset_ball();
        state
    }

    /// Re-seat the ball above the paddle center with the serve velocity,
    /// inactive until a caller flips the flag.
    pub fn reset_ball(&mut self) {
        let speed = self.tuning.ball_speed;
        self.ball.pos = Vec2::new(
            self.paddle.rect.x + self.paddle.rect.width / 2.0,
            self.paddle.rect.y - self.ball.radius,
        );
        self.ball.vel = Vec2::new(speed, -speed);
        self.ball.active = false;
    }

    /// Menu -> Playing: launch the waiting ball
    pub fn launch(&mut self) {
        self.mode = GameMode::Playing;
        self.ball.active = true;
    }

    /// Move to the next level: fresh board for the new pattern, score back
    /// to zero, ball served immediately.
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.score = 0;
        self.bricks = generate_level(self.level, SCREEN_WIDTH);
        self.reset_ball();
        self.ball.active = true;
        self.mode = GameMode::Playing;
    }

    /// GameOver -> Menu: back to the initial run state
    pub fn restart(&mut self) {
        self.level = 1;
        self.score = 0;
        self.paddle.lives = self.tuning.starting_lives;
        self.paddle.rect.x = SCREEN_WIDTH / 2.0 - PADDLE_WIDTH / 2.0;
        self.bricks = generate_level(1, SCREEN_WIDTH);
        self.reset_ball();
        self.mode = GameMode::Menu;
    }

    /// True when every brick on the board has been cleared
    pub fn board_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.active)
    }
}
