//! Runtime type identification for the Cortex object model.
//!
//! This crate provides the registry of type ids, the `RunTimeTyped`
//! capability every participating type implements, a reference-counted
//! handle and the casts built on top of them.
//!
//! - [`TypeId`] / [`TypeIdRange`]: integer identity and the partitioning of
//!   the id space between the core library and extensions.
//! - [`TypeRegistry`]: base/derived relationships, with memoised ancestor
//!   chains and descendant sets. [`registry()`] is the process-wide instance.
//! - [`RunTimeTyped`] / [`TypeDescription`]: the instance and static sides
//!   of a type's identity, normally generated by `#[derive(RunTimeTyped)]`.
//! - [`Ptr`]: shared-ownership handle viewing one part of an instance.
//! - [`Identity`]: most-derived identity stored in an instance's root part.
//! - [`run_time_cast`] and friends: casts checked against the registry
//!   instead of the language's own type identity.

mod cast;
mod error;
mod identity;
mod ptr;
mod registry;
mod run_time_typed;
mod type_id;

pub use cast::{asserted_static_cast, asserted_static_cast_ptr, run_time_cast, run_time_cast_ptr};
pub use error::RegistrationError;
pub use identity::Identity;
pub use ptr::{ObjectPtr, Ptr};
pub use registry::{TypeIdChain, TypeIdSet, TypeRegistry, registry};
pub use run_time_typed::{RunTimeTyped, TypeDescription, ensure_registered};
pub use type_id::{TypeId, TypeIdRange, ranges, type_ids};
