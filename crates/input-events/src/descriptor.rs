//! Mouse event descriptor

use serde::{Deserialize, Serialize};

use crate::{CURRENT_POSITION, EventKind, MouseFlags};

/// One hardware-level input event to hand to the OS
///
/// An axis set to `None` is left out of the native structure, so the OS
/// keeps the cursor's current coordinate on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseEventDescriptor {
    pub kind: EventKind,
    pub dx: Option<i32>,
    pub dy: Option<i32>,
    /// Wheel movement for `WHEEL` events
    pub mouse_data: i32,
    pub flags: MouseFlags,
    /// Always zero, the OS stamps the event
    pub time: u32,
    pub extra_info: usize,
}

impl MouseEventDescriptor {
    /// Event at `(x, y)`, where `CURRENT_POSITION` on an axis omits it
    pub fn at(flags: MouseFlags, x: i32, y: i32) -> Self {
        Self::with_axes(flags, axis(x), axis(y))
    }

    /// Relative move; every delta is taken literally
    pub fn relative(flags: MouseFlags, dx: i32, dy: i32) -> Self {
        Self::with_axes(flags, Some(dx), Some(dy))
    }

    /// Wheel rotation, positive away from the user
    pub fn wheel(amount: i32) -> Self {
        Self {
            mouse_data: amount,
            ..Self::with_axes(MouseFlags::WHEEL, None, None)
        }
    }

    fn with_axes(flags: MouseFlags, dx: Option<i32>, dy: Option<i32>) -> Self {
        Self {
            kind: EventKind::Mouse,
            dx,
            dy,
            mouse_data: 0,
            flags,
            time: 0,
            extra_info: 0,
        }
    }

    /// Coordinates as passed to the OS, omitted axes as zero
    pub fn native_axes(&self) -> (i32, i32) {
        (self.dx.unwrap_or(0), self.dy.unwrap_or(0))
    }
}

fn axis(value: i32) -> Option<i32> {
    (value != CURRENT_POSITION).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_keeps_coordinates() {
        let event = MouseEventDescriptor::at(MouseFlags::RIGHT_DOWN, 500, 500);
        assert_eq!(event.kind, EventKind::Mouse);
        assert_eq!(event.dx, Some(500));
        assert_eq!(event.dy, Some(500));
        assert_eq!(event.flags, MouseFlags::RIGHT_DOWN);
        assert_eq!(event.time, 0);
        assert_eq!(event.extra_info, 0);
        assert_eq!(event.mouse_data, 0);
    }

    #[test]
    fn test_sentinel_omits_axis() {
        let event = MouseEventDescriptor::at(MouseFlags::LEFT_DOWN, -1, 42);
        assert_eq!(event.dx, None);
        assert_eq!(event.dy, Some(42));

        let event = MouseEventDescriptor::at(MouseFlags::LEFT_UP, 7, CURRENT_POSITION);
        assert_eq!(event.dx, Some(7));
        assert_eq!(event.dy, None);
        assert_eq!(event.native_axes(), (7, 0));
    }

    #[test]
    fn test_relative_negative_one_is_a_move() {
        let event = MouseEventDescriptor::relative(MouseFlags::MOVE, -1, -1);
        assert_eq!(event.dx, Some(-1));
        assert_eq!(event.dy, Some(-1));
    }

    #[test]
    fn test_wheel() {
        let event = MouseEventDescriptor::wheel(-240);
        assert_eq!(event.flags, MouseFlags::WHEEL);
        assert_eq!(event.mouse_data, -240);
        assert_eq!(event.dx, None);
        assert_eq!(event.dy, None);
    }

    #[test]
    fn test_omitted_axis_serializes_as_null() {
        let event = MouseEventDescriptor::at(MouseFlags::MIDDLE_UP, -1, -1);
        let json = serde_json::to_value(event).unwrap();

        assert!(json["dx"].is_null());
        assert!(json["dy"].is_null());
        assert_eq!(json["time"], 0);

        let back: MouseEventDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
