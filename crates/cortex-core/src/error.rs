//! Error types for the type system.
//!
//! Only registration can fail. Queries and casts report a miss as `false` or
//! `None`, which is an ordinary outcome rather than an error.

use thiserror::Error;

use crate::TypeId;

/// Errors raised while wiring a type into the registry.
///
/// All of these are programming errors in the embedding program. The registry
/// keeps the first registration intact when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The invalid sentinel cannot be registered.
    #[error("cannot register '{name}' with the invalid type id")]
    InvalidTypeId { name: &'static str },

    /// The type was registered before with a different base.
    #[error("type '{name}' ({derived}) already has base {existing}, cannot re-register with base {requested}")]
    ConflictingBase {
        name: &'static str,
        derived: TypeId,
        existing: TypeId,
        requested: TypeId,
    },

    /// A name and an id disagree with an earlier registration.
    #[error("type name '{name}' is bound to {existing}, cannot bind it to {requested}")]
    DuplicateName {
        name: &'static str,
        existing: TypeId,
        requested: TypeId,
    },

    /// The id was registered before under another name.
    #[error("type {derived} is registered as '{existing_name}', cannot re-register it as '{name}'")]
    Renamed {
        name: &'static str,
        derived: TypeId,
        existing_name: &'static str,
    },

    /// The requested base already derives from the type being registered.
    #[error("registering '{name}' ({derived}) under base {base} would create a cycle")]
    Cycle {
        name: &'static str,
        derived: TypeId,
        base: TypeId,
    },

    /// The id does not belong to the range the registering component owns.
    #[error("type '{name}' ({id}) is outside the range reserved for '{range}'")]
    OutOfRange {
        name: &'static str,
        id: TypeId,
        range: &'static str,
    },
}

impl RegistrationError {
    /// Name of the type whose registration failed.
    pub fn type_name(&self) -> &'static str {
        match self {
            RegistrationError::InvalidTypeId { name } => name,
            RegistrationError::ConflictingBase { name, .. } => name,
            RegistrationError::DuplicateName { name, .. } => name,
            RegistrationError::Renamed { name, .. } => name,
            RegistrationError::Cycle { name, .. } => name,
            RegistrationError::OutOfRange { name, .. } => name,
        }
    }
}
