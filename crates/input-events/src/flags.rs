//! Native mouse event flags

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Event-type flags carried by a mouse descriptor.
    ///
    /// Values match the native `MOUSEEVENTF_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MouseFlags: u32 {
        const MOVE = 1;
        const LEFT_DOWN = 2;
        const LEFT_UP = 4;
        const RIGHT_DOWN = 8;
        const RIGHT_UP = 16;
        const MIDDLE_DOWN = 32;
        const MIDDLE_UP = 64;
        const WHEEL = 2048;
    }
}

impl MouseFlags {
    /// All button press flags
    pub const DOWN: Self = Self::LEFT_DOWN
        .union(Self::RIGHT_DOWN)
        .union(Self::MIDDLE_DOWN);

    /// All button release flags
    pub const UP: Self = Self::LEFT_UP.union(Self::RIGHT_UP).union(Self::MIDDLE_UP);

    /// True if any press or release flag is set
    pub fn has_button(&self) -> bool {
        self.intersects(Self::DOWN | Self::UP)
    }
}
