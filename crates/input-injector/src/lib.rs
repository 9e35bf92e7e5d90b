//! Input Injector - OS-level mouse input injection for Pointer
//!
//! Provides relative moves, clicks and wheel events through the native
//! input API of the host platform.

mod config;
mod error;
mod injector;
mod recording;
mod traits;

#[cfg(target_os = "windows")]
mod windows;

pub use config::*;
pub use error::*;
pub use injector::*;
pub use recording::*;
pub use traits::*;

pub use input_events::{CURRENT_POSITION, MouseButton, MouseEventDescriptor, MouseFlags};

#[cfg(target_os = "windows")]
pub use windows::WindowsInputBackend;

/// Create a platform-appropriate input backend
pub fn create_backend() -> InjectorResult<Box<dyn InputBackend>> {
    #[cfg(target_os = "windows")]
    {
        Ok(Box::new(WindowsInputBackend::new()?))
    }

    #[cfg(not(target_os = "windows"))]
    {
        Err(InjectorError::UnsupportedPlatform)
    }
}

/// Create a mouse injector on the platform backend
pub fn create_injector(
    config: InjectorConfig,
) -> InjectorResult<MouseInjector<Box<dyn InputBackend>>> {
    Ok(MouseInjector::new(create_backend()?, config))
}
