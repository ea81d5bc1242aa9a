//! Brick layout generation
//!
//! A level is fully described by its number: the grid geometry depends only
//! on the screen width, and the active pattern only on the level's parity.
//! Generation is pure, so rebuilding a level always reproduces the same
//! board.

use crate::consts::*;

use super::rect::Rect;
use super::state::Brick;

/// Generate the brick grid for a level, horizontally centered on the screen.
///
/// Bricks are returned row-major (`row * BRICK_COLS + col`). Level 1 opens
/// with the full wall; from level 2 on, even levels keep the even columns
/// and odd levels keep the even rows, alternating sparser boards.
pub fn generate_level(level: u32, screen_width: f32) -> Vec<Brick> {
    let total_width = BRICK_COLS as f32 * BRICK_WIDTH - BRICK_SPACING;
    let start_x = (screen_width - total_width) / 2.0;

    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            let rect = Rect::new(
                start_x + col as f32 * (BRICK_WIDTH + BRICK_SPACING),
                BRICK_TOP_OFFSET + row as f32 * (BRICK_HEIGHT + BRICK_SPACING),
                BRICK_WIDTH,
                BRICK_HEIGHT,
            );
            bricks.push(Brick {
                rect,
                active: brick_active(level, row, col),
            });
        }
    }
    bricks
}

/// Active pattern for one grid cell
fn brick_active(level: u32, row: usize, col: usize) -> bool {
    match level {
        1 => true,
        _ if level % 2 == 0 => col % 2 == 0,
        _ => row % 2 == 0,
    }
}
