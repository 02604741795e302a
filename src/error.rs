//! Top-level error type.

use cortex_core::{RegistrationError, TypeIdRange};
use thiserror::Error;

/// Errors raised while installing modules and loading extensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CortexError {
    /// A type in a module failed to register.
    #[error("module '{module}' failed to register: {source}")]
    Registration {
        module: String,
        #[source]
        source: RegistrationError,
    },

    /// An extension's id range collides with one already in use.
    #[error("extension '{extension}' range {range} overlaps {other}")]
    RangeOverlap {
        extension: String,
        range: TypeIdRange,
        other: TypeIdRange,
    },

    /// An extension with the same name is already loaded.
    #[error("extension '{0}' is already loaded")]
    DuplicateExtension(String),
}

impl CortexError {
    /// The underlying registration error, if any.
    pub fn registration_error(&self) -> Option<&RegistrationError> {
        match self {
            CortexError::Registration { source, .. } => Some(source),
            _ => None,
        }
    }
}
