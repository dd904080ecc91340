use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PanewiseError;

/// Host-assigned pane identifier (kitty's window id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaneId(pub u32);

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Edge name used by neighbor queries: `left`, `right`, `top`, `bottom`.
    pub fn edge_name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "top",
            Direction::Down => "bottom",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Orientation of the split that places a new pane on this side.
    pub fn split_orientation(self) -> SplitOrientation {
        match self.axis() {
            Axis::Horizontal => SplitOrientation::Vertical,
            Axis::Vertical => SplitOrientation::Horizontal,
        }
    }

    /// Whether a freshly split pane has to be moved to land on this side.
    ///
    /// The host always inserts the new pane after the old one, so only
    /// `up` and `left` need an explicit move.
    pub fn needs_reposition(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = PanewiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" | "top" => Ok(Direction::Up),
            "down" | "bottom" => Ok(Direction::Down),
            _ => Err(PanewiseError::InvalidDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// Step operation the host applies to the active pane's own edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizePrimitive {
    Wider,
    Narrower,
    Taller,
    Shorter,
}

impl ResizePrimitive {
    pub fn as_str(self) -> &'static str {
        match self {
            ResizePrimitive::Wider => "wider",
            ResizePrimitive::Narrower => "narrower",
            ResizePrimitive::Taller => "taller",
            ResizePrimitive::Shorter => "shorter",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            ResizePrimitive::Wider | ResizePrimitive::Narrower => Axis::Horizontal,
            ResizePrimitive::Taller | ResizePrimitive::Shorter => Axis::Vertical,
        }
    }

    /// `1` when the pane grows, `-1` when it shrinks.
    pub fn sign(self) -> i32 {
        match self {
            ResizePrimitive::Wider | ResizePrimitive::Taller => 1,
            ResizePrimitive::Narrower | ResizePrimitive::Shorter => -1,
        }
    }

    pub fn inverse(self) -> ResizePrimitive {
        match self {
            ResizePrimitive::Wider => ResizePrimitive::Narrower,
            ResizePrimitive::Narrower => ResizePrimitive::Wider,
            ResizePrimitive::Taller => ResizePrimitive::Shorter,
            ResizePrimitive::Shorter => ResizePrimitive::Taller,
        }
    }
}

impl fmt::Display for ResizePrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orientation of the divider created by a split.
///
/// `Horizontal` stacks the panes (new pane below), `Vertical` puts them
/// side by side (new pane to the right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitOrientation {
    Horizontal,
    Vertical,
}

impl fmt::Display for SplitOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitOrientation::Horizontal => f.write_str("horizontal"),
            SplitOrientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// How a pane expects key events on its input stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyProtocol {
    /// xterm-style bytes: control characters, ESC prefixes, `CSI` cursor keys.
    #[default]
    Legacy,
    /// kitty keyboard protocol, disambiguate mode (`CSI <code>;<mods> u`).
    Kitty,
}

impl FromStr for KeyProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" | "xterm" => Ok(KeyProtocol::Legacy),
            "kitty" => Ok(KeyProtocol::Kitty),
            other => Err(format!("unknown key protocol: {other}")),
        }
    }
}
