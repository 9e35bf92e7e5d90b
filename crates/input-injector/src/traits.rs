//! Input backend trait abstraction

use input_events::MouseEventDescriptor;

use crate::InjectorResult;

/// Capability to put events into the OS input stream
///
/// The cursor behind it is global state shared with every other process,
/// so implementations must not cache or predict its position.
pub trait InputBackend: Send + Sync {
    /// Short backend name for logs
    fn name(&self) -> &'static str;

    /// Inject `events` in order, returning how many the OS queued
    fn submit(&self, events: &[MouseEventDescriptor]) -> InjectorResult<u32>;
}

impl<B: InputBackend + ?Sized> InputBackend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn submit(&self, events: &[MouseEventDescriptor]) -> InjectorResult<u32> {
        (**self).submit(events)
    }
}

/// Outcome of one injector operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InjectionReport {
    /// Events handed to the backend
    pub submitted: u32,
    /// Events the OS reported as queued
    pub accepted: u32,
}

impl InjectionReport {
    /// True if every submitted event was queued
    pub fn is_complete(&self) -> bool {
        self.accepted == self.submitted
    }

    pub(crate) fn record(&mut self, submitted: u32, accepted: u32) {
        self.submitted += submitted;
        self.accepted += accepted;
    }
}
