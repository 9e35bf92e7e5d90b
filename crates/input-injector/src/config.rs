//! Injector configuration

/// What to do when the OS queues fewer events than submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RejectionPolicy {
    /// Return `InjectorError::InjectionRejected` and stop the operation
    #[default]
    Strict,
    /// Log a warning and carry on; the report still shows the shortfall
    BestEffort,
}

/// Injector configuration
#[derive(Debug, Clone, Default)]
pub struct InjectorConfig {
    pub rejection: RejectionPolicy,
}

impl InjectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rejection(mut self, rejection: RejectionPolicy) -> Self {
        self.rejection = rejection;
        self
    }
}
