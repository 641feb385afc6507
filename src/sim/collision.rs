//! Collision predicates for the catch game
//!
//! Everything here is a pure function of positions and sizes so the resolver
//! stays trivially testable. Sizes come from the natural dimensions of the
//! decoded sprites; callers that don't have dimensions yet skip the test
//! entirely rather than guessing.

use glam::Vec2;

/// Strict axis-aligned overlap between two rectangles given by top-left
/// corner and size. Touching edges do not count: a fruit resting exactly on
/// the player's outline is not a catch.
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.y + a_size.y > b_pos.y
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.x < b_pos.x + b_size.x
}

/// Ground test: the object's bottom edge has reached or passed the ground
/// line. Inclusive, unlike the catch test; landing exactly on the line
/// counts.
pub fn reached_ground(top_y: f32, height: f32, ground_y: f32) -> bool {
    top_y + height >= ground_y
}

/// Off-screen safety net: the object's top edge is already past the bottom
/// of the viewport, so no part of it is visible. Ordinarily the ground test
/// fires first; this catches anything that slipped past it.
pub fn below_view(top_y: f32, view_height: f32) -> bool {
    top_y > view_height
}
