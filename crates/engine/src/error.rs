//! Error types for host interface access

/// Error type for calls across the host boundary
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Host passed or returned a null interface pointer
    #[error("Host returned null for: {0}")]
    NullPointer(&'static str),

    /// Text for the host contained an interior NUL byte
    #[error("Invalid text for host: {0}")]
    InvalidText(#[from] std::ffi::NulError),
}
