//! Neighbor-relative resize decisions.
//!
//! The host only knows how to grow or shrink the active pane's own edges.
//! Pressing "resize left" should move the shared border left, so the pane
//! grows when the border is its left edge and shrinks when the border is
//! its right edge. Which edge is the shared one follows from where the
//! neighbors sit.

use panewise_common::{Direction, NeighborPresence, ResizePrimitive};

/// Pick the resize primitive that moves the border in `direction`.
///
/// Only neighbors on the direction's own axis are consulted. Returns `None`
/// when there is no neighbor on that axis; callers must not resize then.
pub fn resolve(direction: Direction, presence: &NeighborPresence) -> Option<ResizePrimitive> {
    use ResizePrimitive::{Narrower, Shorter, Taller, Wider};

    let same = presence.same_side(direction);
    let opposite = presence.opposite_side(direction);

    let primitive = match (direction, same, opposite) {
        (_, false, false) => return None,

        (Direction::Left, true, true) => Narrower,
        (Direction::Left, true, false) => Wider,
        (Direction::Left, false, true) => Narrower,

        (Direction::Right, true, true) => Wider,
        (Direction::Right, true, false) => Wider,
        (Direction::Right, false, true) => Narrower,

        (Direction::Up, true, true) => Shorter,
        (Direction::Up, true, false) => Taller,
        (Direction::Up, false, true) => Shorter,

        (Direction::Down, true, true) => Taller,
        (Direction::Down, true, false) => Taller,
        (Direction::Down, false, true) => Shorter,
    };
    Some(primitive)
}
