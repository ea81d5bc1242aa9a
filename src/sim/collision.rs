//! Collision detection between the ball and axis-aligned rectangles
//!
//! Everything the ball can touch (paddle, bricks) is an axis-aligned
//! rectangle, so a single closest-point test covers all of it. Collision
//! response is plain axis-aligned reflection and lives in `tick`.

use glam::Vec2;

use super::rect::Rect;

/// Check whether a circle overlaps an axis-aligned rectangle.
///
/// Clamps the circle center onto the rectangle and compares the distance to
/// the radius, so edge and corner contacts are both handled.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}
