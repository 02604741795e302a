//! Groups of type registrations installed together.
//!
//! A [`Module`] lists the types one component contributes. Installing it
//! registers each type, and each type's ancestors, in a [`TypeRegistry`].
//!
//! # Example
//!
//! ```
//! use cortex::{Module, TypeRegistry};
//! use cortex::objects::{Group, MeshPrimitive};
//!
//! let module = Module::new("geometry")
//!     .ty::<MeshPrimitive>()
//!     .ty::<Group>();
//!
//! let registry = TypeRegistry::new();
//! assert_eq!(module.install(&registry).unwrap(), 2);
//! // Ancestors came along.
//! assert!(registry.is_registered(cortex::objects::type_ids::RENDERABLE));
//! ```

use cortex_core::{RegistrationError, TypeDescription, TypeId, TypeRegistry};

use crate::CortexError;

/// A type listed in a module.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TypeEntry {
    pub(crate) type_id: TypeId,
    pub(crate) name: &'static str,
    register: fn(&TypeRegistry) -> Result<(), RegistrationError>,
}

/// A named set of types registered together.
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    types: Vec<TypeEntry>,
}

impl Module {
    /// Create an empty module.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Add `T` to the module.
    pub fn ty<T: TypeDescription>(mut self) -> Self {
        self.types.push(TypeEntry {
            type_id: T::TYPE_ID,
            name: T::TYPE_NAME,
            register: T::register,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the listed types, in insertion order.
    pub fn type_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.types.iter().map(|entry| entry.type_id)
    }

    pub(crate) fn entries(&self) -> &[TypeEntry] {
        &self.types
    }

    /// Number of listed types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Register every listed type in `registry`.
    ///
    /// Returns how many listed types were not registered before. Installing
    /// a module twice is harmless. Stops at the first failing type; types
    /// registered before it stay registered.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn install(&self, registry: &TypeRegistry) -> Result<usize, CortexError> {
        let mut added = 0;
        for entry in &self.types {
            let is_new = !registry.is_registered(entry.type_id);
            (entry.register)(registry).map_err(|source| CortexError::Registration {
                module: self.name.clone(),
                source,
            })?;
            if is_new {
                added += 1;
            }
        }
        tracing::debug!(module = %self.name, types = self.types.len(), added, "installed module");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cortex_objects::{CompoundData, Data, IntData, Object, type_ids};

    #[test]
    fn module_lists_types_in_order() {
        let module = Module::new("values").ty::<IntData>().ty::<CompoundData>();
        assert_eq!(module.name(), "values");
        assert_eq!(module.len(), 2);
        assert_eq!(
            module.type_ids().collect::<Vec<_>>(),
            [type_ids::INT_DATA, type_ids::COMPOUND_DATA]
        );
        assert!(Module::new("empty").is_empty());
    }

    #[test]
    fn install_counts_new_types_only() {
        let registry = TypeRegistry::new();
        let values = Module::new("values").ty::<IntData>();
        assert_eq!(values.install(&registry).unwrap(), 1);
        assert!(registry.is_registered(type_ids::DATA));
        assert!(registry.is_registered(type_ids::OBJECT));

        let bases = Module::new("bases").ty::<Object>().ty::<Data>();
        assert_eq!(bases.install(&registry).unwrap(), 0);
        assert_eq!(values.install(&registry).unwrap(), 0);
    }

    #[test]
    fn install_reports_the_module() {
        let registry = TypeRegistry::new();
        registry
            .register_type(type_ids::DATA, TypeId(99), "Data")
            .unwrap();

        let err = Module::new("values")
            .ty::<IntData>()
            .install(&registry)
            .unwrap_err();
        assert!(matches!(
            err.registration_error(),
            Some(RegistrationError::ConflictingBase { name: "Data", .. })
        ));
        assert!(err.to_string().starts_with("module 'values'"));
    }
}
