//! Input Events - mouse event vocabulary for Pointer
//!
//! This crate contains the flag constants, button names and the event
//! descriptor shared between the injector backends and their callers.

mod descriptor;
mod flags;
mod mouse;

pub use descriptor::*;
pub use flags::*;
pub use mouse::*;

/// Coordinate sentinel meaning "keep the cursor's current value on this axis"
pub const CURRENT_POSITION: i32 = -1;

/// Wheel movement of one notch, in native `mouseData` units
pub const WHEEL_DELTA: i32 = 120;
