//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (row-major brick scan)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::circle_rect_overlap;
pub use level::generate_level;
pub use rect::Rect;
pub use state::{Ball, Brick, GameMode, GameState, Paddle};
pub use tick::{TickInput, tick};
