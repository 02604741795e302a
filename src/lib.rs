//! Cortex
//!
//! Runtime type identification and checked casting for the Cortex object
//! model. Every participating type carries a stable integer [`TypeId`] and
//! registers its single base with a process-wide [`TypeRegistry`]. Ancestry
//! queries and casts are answered from that registry, so they agree across
//! every component that loads types into the process.
//!
//! # Example
//!
//! ```
//! use cortex::prelude::*;
//! use cortex::objects::{Group, MeshPrimitive, Primitive};
//!
//! cortex::initialize();
//!
//! let mesh = Ptr::new(MeshPrimitive::new(vec![3], vec![0, 1, 2]).unwrap()).upcast();
//! assert!(mesh.is_instance_of_name("Renderable"));
//!
//! let primitive = run_time_cast_ptr::<Primitive, _>(&mesh).unwrap();
//! assert_eq!(primitive.type_name(), "MeshPrimitive");
//! assert!(run_time_cast_ptr::<Group, _>(&mesh).is_none());
//! ```
//!
//! # Defining types
//!
//! With the `derive` feature (on by default):
//!
//! ```ignore
//! use cortex::RunTimeTyped;
//! use cortex::objects::Renderable;
//!
//! #[derive(RunTimeTyped)]
//! #[cortex(id = 112_001)]
//! pub struct Light {
//!     #[cortex(base)]
//!     renderable: Renderable,
//!     intensity: f32,
//! }
//! ```
//!
//! A type outside the object model that derives straight from the root
//! carries the instance's [`Identity`] itself:
//!
//! ```ignore
//! #[derive(RunTimeTyped)]
//! #[cortex(id = 400_001)]
//! pub struct Token {
//!     #[cortex(identity)]
//!     identity: cortex::Identity,
//!     value: u32,
//! }
//! ```
//!
//! The generated code names `cortex_core` directly, so crates using the
//! derive depend on `cortex-core` as well.

mod error;
mod extension;
mod module;

use std::sync::Once;

pub use cortex_core::{
    Identity, ObjectPtr, Ptr, RegistrationError, RunTimeTyped, TypeDescription, TypeId, TypeIdChain,
    TypeIdRange, TypeIdSet, TypeRegistry, asserted_static_cast, asserted_static_cast_ptr,
    ensure_registered, ranges, registry, run_time_cast, run_time_cast_ptr, type_ids,
};

#[cfg(feature = "derive")]
pub use cortex_macros::RunTimeTyped;

pub use error::CortexError;
pub use extension::{Extension, ExtensionSet, LoadedExtension};
pub use module::Module;

/// The core object model.
pub mod objects {
    pub use cortex_objects::*;
}

pub mod prelude {
    pub use crate::{
        CortexError, Extension, ExtensionSet, Identity, Module, ObjectPtr, Ptr, RunTimeTyped,
        TypeDescription, TypeId, TypeRegistry, asserted_static_cast, asserted_static_cast_ptr,
        run_time_cast, run_time_cast_ptr,
    };
}

/// Module listing every type of the core object model.
pub fn core_module() -> Module {
    use cortex_objects::{
        BlindDataHolder, BoolData, CompoundData, Data, FloatData, Group, IntData, MeshPrimitive,
        Object, PointsPrimitive, Primitive, Renderable, StringData,
    };

    Module::new("core")
        .ty::<Object>()
        .ty::<Data>()
        .ty::<BoolData>()
        .ty::<IntData>()
        .ty::<FloatData>()
        .ty::<StringData>()
        .ty::<CompoundData>()
        .ty::<BlindDataHolder>()
        .ty::<Renderable>()
        .ty::<Primitive>()
        .ty::<MeshPrimitive>()
        .ty::<PointsPrimitive>()
        .ty::<Group>()
}

static INIT: Once = Once::new();

/// Register the core object model in the global registry.
///
/// Runs once per process; later calls only return the registry. Types also
/// register on first use, so calling this is needed only when name-based
/// queries must see types that have no instances yet.
pub fn initialize() -> &'static TypeRegistry {
    let registry = registry();
    INIT.call_once(|| match core_module().install(registry) {
        Ok(added) => tracing::debug!(added, "core object model registered"),
        Err(err) => {
            tracing::error!(%err, "core object model failed to register");
            debug_assert!(false, "core object model failed to register: {}", err);
        }
    });
    registry
}
