//! Windows input injection using SendInput

use input_events::{EventKind, MouseEventDescriptor};
use tracing::{debug, info};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_MOUSE, INPUT_TYPE, MOUSE_EVENT_FLAGS, MOUSEINPUT, SendInput,
};

use crate::{InjectorError, InjectorResult, InputBackend};

/// Windows input backend using `SendInput`
pub struct WindowsInputBackend {
    input_size: i32,
}

impl WindowsInputBackend {
    /// Create a new Windows input backend
    pub fn new() -> InjectorResult<Self> {
        info!("Initializing Windows input backend");

        let input_size = i32::try_from(std::mem::size_of::<INPUT>())
            .map_err(|_| InjectorError::Marshaling("INPUT size exceeds i32".into()))?;

        Ok(Self { input_size })
    }

    fn to_native(event: &MouseEventDescriptor) -> INPUT {
        let (dx, dy) = event.native_axes();

        INPUT {
            r#type: native_kind(event.kind),
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx,
                    dy,
                    mouseData: event.mouse_data as _,
                    dwFlags: MOUSE_EVENT_FLAGS(event.flags.bits()),
                    time: event.time,
                    dwExtraInfo: event.extra_info,
                },
            },
        }
    }
}

fn native_kind(kind: EventKind) -> INPUT_TYPE {
    match kind {
        EventKind::Mouse => INPUT_MOUSE,
    }
}

impl InputBackend for WindowsInputBackend {
    fn name(&self) -> &'static str {
        "windows-sendinput"
    }

    fn submit(&self, events: &[MouseEventDescriptor]) -> InjectorResult<u32> {
        if events.is_empty() {
            return Err(InjectorError::Marshaling("empty event batch".into()));
        }

        let inputs: Vec<INPUT> = events.iter().map(Self::to_native).collect();
        let queued = unsafe { SendInput(&inputs, self.input_size) };

        if queued == 0 {
            debug!(
                "SendInput queued nothing: {}",
                windows::core::Error::from_win32()
            );
        }

        Ok(queued)
    }
}
