//! Mouse button and event family definitions

use serde::{Deserialize, Serialize};

use crate::MouseFlags;

/// Event family of a descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum EventKind {
    #[default]
    Mouse = 0,
}

/// Mouse button type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Flag that presses this button
    pub fn down_flag(self) -> MouseFlags {
        match self {
            MouseButton::Left => MouseFlags::LEFT_DOWN,
            MouseButton::Right => MouseFlags::RIGHT_DOWN,
            MouseButton::Middle => MouseFlags::MIDDLE_DOWN,
        }
    }

    /// Flag that releases this button
    pub fn up_flag(self) -> MouseFlags {
        match self {
            MouseButton::Left => MouseFlags::LEFT_UP,
            MouseButton::Right => MouseFlags::RIGHT_UP,
            MouseButton::Middle => MouseFlags::MIDDLE_UP,
        }
    }

    /// Press flag followed by release flag
    pub fn flags(self) -> [MouseFlags; 2] {
        [self.down_flag(), self.up_flag()]
    }
}
