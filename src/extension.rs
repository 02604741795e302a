//! Extensions: modules that own a reserved range of type ids.
//!
//! Every component that defines types outside the core library claims a
//! [`TypeIdRange`] and defines its ids inside it. [`ExtensionSet`] checks the
//! claim when the extension loads, so two components cannot hand out the
//! same id by accident.
//!
//! # Example
//!
//! ```
//! use cortex::{Extension, ExtensionSet, Module, TypeIdRange, TypeRegistry, ranges};
//!
//! let registry = TypeRegistry::new();
//! let mut extensions = ExtensionSet::new();
//!
//! let scene = Extension::new("scene", ranges::SCENE, Module::new("scene"));
//! extensions.load(scene, &registry).unwrap();
//!
//! let tools = TypeIdRange::new("scene-tools", 112_500, 112_599);
//! let clash = Extension::new("scene-tools", tools, Module::new("tools"));
//! assert!(extensions.load(clash, &registry).is_err());
//! ```

use cortex_core::{RegistrationError, TypeId, TypeIdRange, TypeRegistry, ranges};

use crate::{CortexError, Module};

/// A module bound to the id range it owns.
#[derive(Debug, Clone)]
pub struct Extension {
    name: String,
    range: TypeIdRange,
    module: Module,
}

impl Extension {
    pub fn new(name: impl Into<String>, range: TypeIdRange, module: Module) -> Self {
        Self {
            name: name.into(),
            range,
            module,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> TypeIdRange {
        self.range
    }

    pub fn module(&self) -> &Module {
        &self.module
    }
}

/// Record of a loaded extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedExtension {
    pub name: String,
    pub range: TypeIdRange,
    /// Types the extension listed.
    pub type_count: usize,
}

/// The extensions loaded into a registry, with their ranges.
#[derive(Debug, Default)]
pub struct ExtensionSet {
    loaded: Vec<LoadedExtension>,
}

impl ExtensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `extension` and install its module into `registry`.
    ///
    /// Rejects an extension whose name is already loaded, whose range
    /// overlaps the core range or another loaded extension, or which lists
    /// a type outside its range. A type outside the range is accepted when
    /// it is already registered, which covers core bases listed for
    /// completeness. Nothing is registered when validation fails.
    ///
    /// Returns the number of newly registered listed types.
    pub fn load(
        &mut self,
        extension: Extension,
        registry: &TypeRegistry,
    ) -> Result<usize, CortexError> {
        self.validate(&extension, registry)?;

        let added = extension.module.install(registry)?;
        tracing::info!(
            extension = %extension.name,
            range = %extension.range,
            added,
            "loaded extension"
        );
        self.loaded.push(LoadedExtension {
            name: extension.name,
            range: extension.range,
            type_count: extension.module.len(),
        });
        Ok(added)
    }

    fn validate(&self, extension: &Extension, registry: &TypeRegistry) -> Result<(), CortexError> {
        if self.is_loaded(&extension.name) {
            return Err(CortexError::DuplicateExtension(extension.name.clone()));
        }

        let claimed = std::iter::once(ranges::CORE).chain(self.loaded.iter().map(|ext| ext.range));
        for other in claimed {
            if extension.range.overlaps(&other) {
                tracing::warn!(extension = %extension.name, range = %extension.range, %other, "extension range overlap");
                return Err(CortexError::RangeOverlap {
                    extension: extension.name.clone(),
                    range: extension.range,
                    other,
                });
            }
        }

        for entry in extension.module.entries() {
            if !extension.range.contains(entry.type_id) && !registry.is_registered(entry.type_id) {
                return Err(CortexError::Registration {
                    module: extension.module.name().to_string(),
                    source: RegistrationError::OutOfRange {
                        name: entry.name,
                        id: entry.type_id,
                        range: extension.range.name,
                    },
                });
            }
        }

        Ok(())
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.iter().any(|ext| ext.name == name)
    }

    /// Loaded extensions in load order.
    pub fn loaded(&self) -> &[LoadedExtension] {
        &self.loaded
    }

    /// The loaded extension whose range holds `type_id`.
    pub fn owner_of(&self, type_id: TypeId) -> Option<&LoadedExtension> {
        self.loaded.iter().find(|ext| ext.range.contains(type_id))
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}
