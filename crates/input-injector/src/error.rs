//! Input injection error types

use input_events::MouseFlags;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InjectorError {
    #[error("Failed to build native input: {0}")]
    Marshaling(String),

    #[error("Input injection rejected for {flags:?}: {accepted} of {submitted} events queued")]
    InjectionRejected {
        flags: MouseFlags,
        submitted: u32,
        accepted: u32,
    },

    #[error("Platform not supported")]
    UnsupportedPlatform,

    #[error("Platform error: {0}")]
    Platform(String),
}

pub type InjectorResult<T> = Result<T, InjectorError>;
