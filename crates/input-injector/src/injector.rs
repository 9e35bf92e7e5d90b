//! Mouse injector built on top of an input backend

use input_events::{MouseButton, MouseEventDescriptor, MouseFlags, WHEEL_DELTA};
use tracing::{debug, warn};

use crate::{
    InjectionReport, InjectorConfig, InjectorError, InjectorResult, InputBackend,
    RejectionPolicy,
};

/// Turns move and click requests into submitted mouse events
///
/// Holds no cursor state. Every operation is a one-shot synchronous
/// exchange with the backend, one event per submission.
pub struct MouseInjector<B> {
    backend: B,
    config: InjectorConfig,
}

impl<B: InputBackend> MouseInjector<B> {
    pub fn new(backend: B, config: InjectorConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &InjectorConfig {
        &self.config
    }

    /// Move the cursor relative to its current position
    pub fn move_by(&self, dx: i32, dy: i32) -> InjectorResult<InjectionReport> {
        let mut report = InjectionReport::default();
        self.submit_one(
            MouseEventDescriptor::relative(MouseFlags::MOVE, dx, dy),
            &mut report,
        )?;
        Ok(report)
    }

    /// Left click at `(x, y)`; `-1` on an axis keeps the current coordinate
    pub fn left_click(&self, x: i32, y: i32) -> InjectorResult<InjectionReport> {
        self.click(MouseButton::Left, x, y)
    }

    /// Right click at `(x, y)`; `-1` on an axis keeps the current coordinate
    pub fn right_click(&self, x: i32, y: i32) -> InjectorResult<InjectionReport> {
        self.click(MouseButton::Right, x, y)
    }

    /// Middle click at `(x, y)`; `-1` on an axis keeps the current coordinate
    pub fn middle_click(&self, x: i32, y: i32) -> InjectorResult<InjectionReport> {
        self.click(MouseButton::Middle, x, y)
    }

    /// Press then release `button`, as two separate submissions
    pub fn click(&self, button: MouseButton, x: i32, y: i32) -> InjectorResult<InjectionReport> {
        let mut report = InjectionReport::default();
        for flags in button.flags() {
            self.submit_one(MouseEventDescriptor::at(flags, x, y), &mut report)?;
        }
        Ok(report)
    }

    pub fn press(&self, button: MouseButton, x: i32, y: i32) -> InjectorResult<InjectionReport> {
        self.mouse_action(x, y, button.down_flag())
    }

    pub fn release(&self, button: MouseButton, x: i32, y: i32) -> InjectorResult<InjectionReport> {
        self.mouse_action(x, y, button.up_flag())
    }

    /// Rotate the wheel by `notches`, positive away from the user
    pub fn scroll(&self, notches: i32) -> InjectorResult<InjectionReport> {
        let amount = notches.checked_mul(WHEEL_DELTA).ok_or_else(|| {
            InjectorError::Marshaling(format!("wheel movement of {notches} notches overflows"))
        })?;

        let mut report = InjectionReport::default();
        self.submit_one(MouseEventDescriptor::wheel(amount), &mut report)?;
        Ok(report)
    }

    /// Submit one event with arbitrary `flags` at `(x, y)`
    pub fn mouse_action(
        &self,
        x: i32,
        y: i32,
        flags: MouseFlags,
    ) -> InjectorResult<InjectionReport> {
        let mut report = InjectionReport::default();
        self.submit_one(MouseEventDescriptor::at(flags, x, y), &mut report)?;
        Ok(report)
    }

    fn submit_one(
        &self,
        event: MouseEventDescriptor,
        report: &mut InjectionReport,
    ) -> InjectorResult<()> {
        debug!(
            backend = self.backend.name(),
            flags = ?event.flags,
            dx = ?event.dx,
            dy = ?event.dy,
            "Submitting mouse event"
        );

        let accepted = self.backend.submit(&[event])?;
        report.record(1, accepted);

        if accepted == 0 {
            match self.config.rejection {
                RejectionPolicy::Strict => {
                    return Err(InjectorError::InjectionRejected {
                        flags: event.flags,
                        submitted: 1,
                        accepted,
                    });
                }
                RejectionPolicy::BestEffort => {
                    warn!("Mouse event {:?} was not queued by the OS", event.flags);
                }
            }
        }

        Ok(())
    }
}
