//! Errors raised by the object model.

use thiserror::Error;

/// Misuse of an object-model container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    /// A group child must be renderable.
    #[error("cannot add a {type_name} to a group: not a Renderable")]
    NotRenderable { type_name: &'static str },

    /// A primitive variable must hold data.
    #[error("primitive variable '{name}' must hold Data, got {type_name}")]
    NotData { name: String, type_name: &'static str },

    /// Mesh topology is inconsistent.
    #[error("invalid mesh topology: {reason}")]
    InvalidTopology { reason: String },
}
