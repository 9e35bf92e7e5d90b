//! Backend that records submissions instead of touching the OS

use input_events::MouseEventDescriptor;
use parking_lot::Mutex;
use tracing::debug;

use crate::{InjectorResult, InputBackend};

/// In-memory input backend
///
/// Every call to `submit` is stored as one batch. Useful for dry runs and
/// for checking what an injector would send.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    batches: Mutex<Vec<Vec<MouseEventDescriptor>>>,
    reject: bool,
}

impl RecordingBackend {
    /// Backend that reports every event as queued
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that records events but reports none as queued
    pub fn rejecting() -> Self {
        Self {
            batches: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    /// Submitted batches, in call order
    pub fn batches(&self) -> Vec<Vec<MouseEventDescriptor>> {
        self.batches.lock().clone()
    }

    /// Submitted events with batch boundaries removed
    pub fn events(&self) -> Vec<MouseEventDescriptor> {
        self.batches.lock().iter().flatten().copied().collect()
    }

    /// Number of `submit` calls seen
    pub fn call_count(&self) -> usize {
        self.batches.lock().len()
    }

    pub fn clear(&self) {
        self.batches.lock().clear();
    }
}

impl InputBackend for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn submit(&self, events: &[MouseEventDescriptor]) -> InjectorResult<u32> {
        debug!("Recording {} event(s)", events.len());
        self.batches.lock().push(events.to_vec());

        if self.reject {
            Ok(0)
        } else {
            Ok(events.len() as u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_events::MouseFlags;

    #[test]
    fn test_records_batches() {
        let backend = RecordingBackend::new();
        let down = MouseEventDescriptor::at(MouseFlags::LEFT_DOWN, 1, 2);
        let up = MouseEventDescriptor::at(MouseFlags::LEFT_UP, 1, 2);

        assert_eq!(backend.submit(&[down]).unwrap(), 1);
        assert_eq!(backend.submit(&[up]).unwrap(), 1);

        assert_eq!(backend.call_count(), 2);
        assert_eq!(backend.batches(), vec![vec![down], vec![up]]);
        assert_eq!(backend.events(), vec![down, up]);

        backend.clear();
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn test_rejecting_backend_queues_nothing() {
        let backend = RecordingBackend::rejecting();
        let event = MouseEventDescriptor::relative(MouseFlags::MOVE, 3, 4);

        assert_eq!(backend.submit(&[event]).unwrap(), 0);
        assert_eq!(backend.events(), vec![event]);
    }
}
