//! The `RunTimeTyped` capability.
//!
//! Every type that takes part in the type system implements two traits:
//!
//! - [`RunTimeTyped`], the object-safe instance side: the most-derived id and
//!   name of a value, ancestry checks, and projection to a base part.
//! - [`TypeDescription`], the static side: the id, name and base of a type,
//!   available without an instance, plus its registration.
//!
//! Both are normally generated by `#[derive(RunTimeTyped)]` from the
//! `cortex-macros` crate. Single inheritance is modelled by composition: a
//! derived struct stores its base struct in one field and forwards
//! [`RunTimeTyped::view`] to it. The root part carries an [`Identity`], so a
//! base part reached through a handle still reports the whole instance.
//!
//! # Example
//!
//! ```
//! use cortex_core::{RunTimeTyped, TypeDescription, TypeId, TypeRegistry, type_ids};
//!
//! struct Shape;
//!
//! impl RunTimeTyped for Shape {
//!     fn type_id(&self) -> TypeId { Self::TYPE_ID }
//!     fn type_name(&self) -> &'static str { Self::TYPE_NAME }
//!     fn as_any(&self) -> &dyn std::any::Any { self }
//!     fn view(&self, target: TypeId) -> Option<&dyn std::any::Any> {
//!         (target == Self::TYPE_ID).then_some(self as &dyn std::any::Any)
//!     }
//! }
//!
//! impl TypeDescription for Shape {
//!     type BaseClass = dyn RunTimeTyped;
//!     const TYPE_ID: TypeId = TypeId(50_000);
//!     const TYPE_NAME: &'static str = "Shape";
//!     const BASE_TYPE_ID: TypeId = type_ids::RUN_TIME_TYPED;
//!     const BASE_TYPE_NAME: &'static str = type_ids::RUN_TIME_TYPED_NAME;
//!
//!     fn register(registry: &TypeRegistry) -> Result<(), cortex_core::RegistrationError> {
//!         registry.register_type(Self::TYPE_ID, Self::BASE_TYPE_ID, Self::TYPE_NAME)
//!     }
//! }
//!
//! let registry = TypeRegistry::new();
//! Shape::register(&registry).unwrap();
//! assert!(registry.inherits_from(Shape::TYPE_ID, type_ids::RUN_TIME_TYPED));
//! ```

use crate::{Identity, RegistrationError, TypeId, TypeRegistry, registry};

/// Instance side of the type system.
///
/// Object safe; handles and heterogeneous containers store
/// `dyn RunTimeTyped`.
pub trait RunTimeTyped: Send + Sync + 'static {
    /// Id of the most-derived type of the instance this value belongs to.
    fn type_id(&self) -> TypeId;

    /// Name of the most-derived type of the instance this value belongs to.
    fn type_name(&self) -> &'static str;

    /// This value as `Any`, for downcasting to its concrete type.
    fn as_any(&self) -> &dyn std::any::Any;

    /// The part of this value typed as `target`.
    ///
    /// Returns the value itself for its own id, the embedded base part for
    /// an ancestor's id, and `None` otherwise.
    fn view(&self, target: TypeId) -> Option<&dyn std::any::Any>;

    /// The identity stored in the root part of this value.
    ///
    /// Root types return their own field and derived types forward to their
    /// base part. `None` for types that carry no identity; those always
    /// report their static type.
    fn identity(&self) -> Option<&Identity> {
        None
    }

    /// Check if this value's type is `type_id` or derives from it.
    fn is_instance_of(&self, type_id: TypeId) -> bool {
        let own = self.type_id();
        type_id.is_valid() && (own == type_id || registry().base_type_ids(own).contains(&type_id))
    }

    /// Name-based form of [`is_instance_of`](Self::is_instance_of).
    fn is_instance_of_name(&self, type_name: &str) -> bool {
        if type_name == self.type_name() {
            return true;
        }
        let type_id = registry().type_id_of(type_name);
        type_id.is_valid() && self.is_instance_of(type_id)
    }
}

impl std::fmt::Debug for dyn RunTimeTyped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.type_name(), self.type_id())
    }
}

/// Static side of the type system.
///
/// Gives a type's identity without an instance, and knows how to register
/// the type and its ancestors.
pub trait TypeDescription: RunTimeTyped + Sized {
    /// The declared base. `dyn RunTimeTyped` for direct children of the root.
    type BaseClass: ?Sized;

    /// Id of this type.
    const TYPE_ID: TypeId;
    /// Name of this type.
    const TYPE_NAME: &'static str;
    /// Id of the direct base.
    const BASE_TYPE_ID: TypeId;
    /// Name of the direct base.
    const BASE_TYPE_NAME: &'static str;

    /// Register the ancestors of this type, then this type.
    fn register(registry: &TypeRegistry) -> Result<(), RegistrationError>;

    /// Id of this type, without an instance.
    fn static_type_id() -> TypeId {
        Self::TYPE_ID
    }

    /// Name of this type, without an instance.
    fn static_type_name() -> &'static str {
        Self::TYPE_NAME
    }

    /// Id of the direct base, without an instance.
    fn base_type_id() -> TypeId {
        Self::BASE_TYPE_ID
    }

    /// Name of the direct base, without an instance.
    fn base_type_name() -> &'static str {
        Self::BASE_TYPE_NAME
    }

    /// Check if this type is `type_id` or derives from it.
    ///
    /// Answered from the global registry, so the type must be registered.
    fn inherits_from(type_id: TypeId) -> bool {
        registry().inherits_from(Self::TYPE_ID, type_id)
    }

    /// Name-based form of [`inherits_from`](Self::inherits_from).
    fn inherits_from_name(type_name: &str) -> bool {
        type_name == Self::TYPE_NAME || registry().inherits_from_name(Self::TYPE_ID, type_name)
    }
}

/// Register `T` and its ancestors in the global registry.
///
/// Registration defects are programming errors: they are logged, and stop a
/// debug build. A release build keeps running with the earlier registration.
pub fn ensure_registered<T: TypeDescription>() {
    let registry = registry();
    if registry.is_registered(T::TYPE_ID) {
        return;
    }
    if let Err(err) = T::register(registry) {
        tracing::error!(type_name = T::TYPE_NAME, %err, "type registration failed");
        debug_assert!(false, "type registration failed: {}", err);
    }
}
