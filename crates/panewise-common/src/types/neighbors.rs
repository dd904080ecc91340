use serde::{Deserialize, Serialize};

use super::core::Direction;

/// Which sides of the active pane have an adjacent pane.
///
/// Read fresh from the host for every request; layouts change between
/// invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborPresence {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl NeighborPresence {
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.top,
            Direction::Down => self.bottom,
        }
    }

    pub fn set(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::Left => self.left = present,
            Direction::Right => self.right = present,
            Direction::Up => self.top = present,
            Direction::Down => self.bottom = present,
        }
    }

    /// Neighbor on the side the request points at.
    pub fn same_side(&self, direction: Direction) -> bool {
        self.has(direction)
    }

    /// Neighbor on the other side of the same axis.
    pub fn opposite_side(&self, direction: Direction) -> bool {
        self.has(direction.opposite())
    }
}
