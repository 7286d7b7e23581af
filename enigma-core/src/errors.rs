//! Error types for enigma-core.
//!
//! Two failure classes exist: malformed input (letters, wirings, notches,
//! ring settings, names, messages) and plugboard capacity. Both are raised
//! synchronously before any state is mutated.

/// Unified error type for all enigma-core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnigmaError {
    /// Input failed validation (non-alphabetic, wrong length, identical
    /// pair letters, empty message, non-bijective wiring, malformed notch,
    /// ring setting out of range, unknown or reserved wheel name).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Plugboard lead limit exceeded.
    #[error("Capacity error: {0}")]
    Capacity(String),
}

impl EnigmaError {
    /// Stable code for this error class, one of [`ERROR_CODES`].
    pub fn code(&self) -> &'static str {
        match self {
            EnigmaError::InvalidInput(_) => ERROR_CODES[0],
            EnigmaError::Capacity(_) => ERROR_CODES[1],
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EnigmaError::InvalidInput(msg.into())
    }
}

/// Canonical error code registry.
///
/// Shells that surface errors to users or scripts report these codes
/// rather than the display text.
pub const ERROR_CODES: [&str; 2] = ["INVALID_INPUT", "CAPACITY_EXCEEDED"];

/// Returns `true` if the given string is a canonical error code.
pub fn is_valid_error_code(code: &str) -> bool {
    ERROR_CODES.contains(&code)
}
