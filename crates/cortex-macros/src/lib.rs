//! Cortex Proc Macros
//!
//! This crate provides the derive that wires a struct into the Cortex
//! runtime type system.
//!
//! # Example
//!
//! ```ignore
//! use cortex_macros::RunTimeTyped;
//!
//! #[derive(RunTimeTyped)]
//! #[cortex(id = 20_001)]
//! pub struct Shape {
//!     #[cortex(identity)]
//!     identity: cortex_core::Identity,
//!     pub sides: u32,
//! }
//!
//! #[derive(RunTimeTyped)]
//! #[cortex(id = 20_002, name = "Square")]
//! pub struct SquareShape {
//!     #[cortex(base)]
//!     pub shape: Shape,
//!     pub size: f32,
//! }
//! ```

use proc_macro::TokenStream;

mod attrs;
mod derive_run_time_typed;

/// Derive `RunTimeTyped` and `TypeDescription` for a struct.
///
/// # Attributes
///
/// - `#[cortex(id = ...)]` - Type id: an integer literal or a `TypeId` constant (required)
/// - `#[cortex(base = Type)]` - Declared base type; checked against the base field
/// - `#[cortex(name = "...")]` - Override the registered type name
///
/// # Field Attributes
///
/// - `#[cortex(base)]` - The field holding the base part. Without one, the
///   type derives directly from the root.
/// - `#[cortex(identity)]` - The `cortex_core::Identity` of a root type.
///   Required exactly when there is no base field.
#[proc_macro_derive(RunTimeTyped, attributes(cortex))]
pub fn derive_run_time_typed(input: TokenStream) -> TokenStream {
    derive_run_time_typed::derive_run_time_typed_impl(input)
}
