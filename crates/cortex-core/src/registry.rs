//! TypeRegistry - process-wide store of base/derived relationships.
//!
//! This module provides [`TypeRegistry`], which records one base edge per
//! registered [`TypeId`] and answers ancestry queries over the resulting
//! forest. A single process-wide instance is reachable through [`registry()`].
//!
//! # Storage Model
//!
//! - **Edges**: `base-of(TypeId) -> TypeId`, plus the reverse `children` index
//!   used to walk descendants without scanning every edge.
//! - **Names**: one name per id and one id per name, for name-based queries.
//! - **Caches**: ancestor chains and descendant sets, memoised per id on first
//!   query. Cached values are immutable `Arc`s, so a reader either sees a
//!   complete set or computes one itself.
//!
//! # Thread Safety
//!
//! Queries may run from any thread. Two threads filling the cache for the
//! same id at once compute the same answer and the first insert wins.
//!
//! Registration is expected to happen while components load, before heavy
//! querying starts. It is still allowed afterwards (extensions loaded into a
//! running host): every new edge clears both caches under the edge write
//! lock, so no stale set survives a registration.
//!
//! # Example
//!
//! ```
//! use cortex_core::{TypeId, TypeRegistry, type_ids};
//!
//! let registry = TypeRegistry::new();
//! registry.register_type(TypeId(10), type_ids::RUN_TIME_TYPED, "Shape").unwrap();
//! registry.register_type(TypeId(11), TypeId(10), "Circle").unwrap();
//!
//! assert_eq!(&*registry.base_type_ids(TypeId(11)), &[TypeId(10), type_ids::RUN_TIME_TYPED]);
//! assert!(registry.inherits_from(TypeId(11), type_ids::RUN_TIME_TYPED));
//! assert!(registry.derived_type_ids(TypeId(10)).contains(&TypeId(11)));
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::RwLock;
use petgraph::dot::{Config, Dot};
use petgraph::graph::DiGraph;
use petgraph::graphmap::DiGraphMap;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{RegistrationError, TypeId, type_ids};

/// Ancestors of a type, nearest first, ending at the root.
pub type TypeIdChain = Arc<[TypeId]>;

/// Every type deriving, directly or transitively, from a type.
pub type TypeIdSet = Arc<FxHashSet<TypeId>>;

lazy_static! {
    static ref REGISTRY: TypeRegistry = TypeRegistry::new();
}

/// The process-wide registry.
///
/// Created on first use with the root type already registered.
pub fn registry() -> &'static TypeRegistry {
    &REGISTRY
}

/// Registered edges and names.
#[derive(Default)]
struct Edges {
    bases: FxHashMap<TypeId, TypeId>,
    children: FxHashMap<TypeId, Vec<TypeId>>,
    names: FxHashMap<TypeId, &'static str>,
    ids_by_name: FxHashMap<&'static str, TypeId>,
}

impl Edges {
    /// Walk `base-of` upward from `type_id`.
    ///
    /// The walk is bounded by the number of edges so a corrupted table can
    /// never spin forever.
    fn ancestors_of(&self, type_id: TypeId) -> Vec<TypeId> {
        let mut chain = Vec::new();
        let mut current = type_id;
        while let Some(&base) = self.bases.get(&current) {
            if base.is_invalid() || chain.len() > self.bases.len() {
                break;
            }
            chain.push(base);
            current = base;
        }
        chain
    }

    /// Breadth-first walk of the reverse edges below `type_id`.
    fn descendants_of(&self, type_id: TypeId) -> FxHashSet<TypeId> {
        let mut found = FxHashSet::default();
        let mut queue = VecDeque::new();
        queue.push_back(type_id);
        while let Some(current) = queue.pop_front() {
            if let Some(children) = self.children.get(&current) {
                for &child in children {
                    if found.insert(child) {
                        queue.push_back(child);
                    }
                }
            }
        }
        found
    }

    fn reaches(&self, from: TypeId, target: TypeId) -> bool {
        from == target || self.ancestors_of(from).contains(&target)
    }
}

/// Process-wide store of type relationships.
///
/// Every registered type has exactly one base; the root's base is
/// [`TypeId::INVALID`]. The base relation is kept acyclic at registration
/// time, so the registered types always form a forest.
pub struct TypeRegistry {
    edges: RwLock<Edges>,
    ancestors: RwLock<FxHashMap<TypeId, TypeIdChain>>,
    descendants: RwLock<FxHashMap<TypeId, TypeIdSet>>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a registry holding only the root type.
    pub fn new() -> Self {
        let mut edges = Edges::default();
        edges.bases.insert(type_ids::RUN_TIME_TYPED, TypeId::INVALID);
        edges
            .names
            .insert(type_ids::RUN_TIME_TYPED, type_ids::RUN_TIME_TYPED_NAME);
        edges
            .ids_by_name
            .insert(type_ids::RUN_TIME_TYPED_NAME, type_ids::RUN_TIME_TYPED);

        Self {
            edges: RwLock::new(edges),
            ancestors: RwLock::new(FxHashMap::default()),
            descendants: RwLock::new(FxHashMap::default()),
        }
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Record that `derived` has base `base` and is called `name`.
    ///
    /// Registering the same triple twice is a no-op. The base does not need
    /// to be registered yet, so types may register in any order.
    pub fn register_type(
        &self,
        derived: TypeId,
        base: TypeId,
        name: &'static str,
    ) -> Result<(), RegistrationError> {
        if derived.is_invalid() {
            return Err(RegistrationError::InvalidTypeId { name });
        }

        let mut edges = self.edges.write();

        if let Some(&existing) = edges.bases.get(&derived) {
            if existing != base {
                return Err(RegistrationError::ConflictingBase {
                    name,
                    derived,
                    existing,
                    requested: base,
                });
            }
            let existing_name = edges.names.get(&derived).copied().unwrap_or_default();
            if existing_name != name {
                return Err(RegistrationError::Renamed {
                    name,
                    derived,
                    existing_name,
                });
            }
            return Ok(());
        }

        if let Some(&existing) = edges.ids_by_name.get(name) {
            return Err(RegistrationError::DuplicateName {
                name,
                existing,
                requested: derived,
            });
        }

        if base.is_valid() && edges.reaches(base, derived) {
            return Err(RegistrationError::Cycle {
                name,
                derived,
                base,
            });
        }

        edges.bases.insert(derived, base);
        if base.is_valid() {
            edges.children.entry(base).or_default().push(derived);
        }
        edges.names.insert(derived, name);
        edges.ids_by_name.insert(name, derived);

        // Cleared while the edge lock is held so no query can cache a set
        // computed from the old edges after this point.
        self.ancestors.write().clear();
        self.descendants.write().clear();

        tracing::trace!(%derived, %base, name, "registered type");
        Ok(())
    }

    // ==========================================================================
    // Queries
    // ==========================================================================

    /// Check if `type_id` has been registered.
    pub fn is_registered(&self, type_id: TypeId) -> bool {
        self.edges.read().bases.contains_key(&type_id)
    }

    /// Number of registered types, the root included.
    pub fn len(&self) -> usize {
        self.edges.read().bases.len()
    }

    /// Check if only the root is registered.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// All registered ids, in ascending order.
    pub fn registered_type_ids(&self) -> Vec<TypeId> {
        let mut ids: Vec<TypeId> = self.edges.read().bases.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Direct base of `type_id`.
    ///
    /// Returns [`TypeId::INVALID`] for the root and for unregistered ids.
    pub fn base_type_id(&self, type_id: TypeId) -> TypeId {
        self.edges
            .read()
            .bases
            .get(&type_id)
            .copied()
            .unwrap_or(TypeId::INVALID)
    }

    /// All ancestors of `type_id`, nearest first, ending at the root.
    ///
    /// Empty for the root and for unregistered ids. The chain is computed
    /// once and shared afterwards.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn base_type_ids(&self, type_id: TypeId) -> TypeIdChain {
        if let Some(chain) = self.ancestors.read().get(&type_id) {
            return Arc::clone(chain);
        }

        let edges = self.edges.read();
        if !edges.bases.contains_key(&type_id) {
            return Arc::from(Vec::new());
        }
        let chain: TypeIdChain = Arc::from(edges.ancestors_of(type_id));
        let mut cache = self.ancestors.write();
        Arc::clone(cache.entry(type_id).or_insert(chain))
    }

    /// Every type whose ancestor chain passes through `type_id`.
    ///
    /// `type_id` itself is not included. Empty for unregistered ids and for
    /// leaves.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn derived_type_ids(&self, type_id: TypeId) -> TypeIdSet {
        if let Some(set) = self.descendants.read().get(&type_id) {
            return Arc::clone(set);
        }

        let edges = self.edges.read();
        if !edges.bases.contains_key(&type_id) {
            return Arc::new(FxHashSet::default());
        }
        let set: TypeIdSet = Arc::new(edges.descendants_of(type_id));
        let mut cache = self.descendants.write();
        Arc::clone(cache.entry(type_id).or_insert(set))
    }

    /// Check if `derived` is `base` or derives from it.
    ///
    /// Always false when `derived` is unregistered.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn inherits_from(&self, derived: TypeId, base: TypeId) -> bool {
        if base.is_invalid() || !self.is_registered(derived) {
            return false;
        }
        derived == base || self.base_type_ids(derived).contains(&base)
    }

    /// Name-based form of [`inherits_from`](Self::inherits_from).
    pub fn inherits_from_name(&self, derived: TypeId, base_name: &str) -> bool {
        let base = self.type_id_of(base_name);
        base.is_valid() && self.inherits_from(derived, base)
    }

    /// Name registered for `type_id`.
    pub fn type_name(&self, type_id: TypeId) -> Option<&'static str> {
        if type_id.is_invalid() {
            return Some(type_ids::INVALID_TYPE_NAME);
        }
        self.edges.read().names.get(&type_id).copied()
    }

    /// Id registered under `name`, or [`TypeId::INVALID`].
    pub fn type_id_of(&self, name: &str) -> TypeId {
        self.edges
            .read()
            .ids_by_name
            .get(name)
            .copied()
            .unwrap_or(TypeId::INVALID)
    }

    // ==========================================================================
    // Diagnostics
    // ==========================================================================

    /// The registered hierarchy as a graph with one `base -> derived` edge per type.
    pub fn hierarchy(&self) -> DiGraphMap<TypeId, ()> {
        let edges = self.edges.read();
        let mut graph = DiGraphMap::with_capacity(edges.bases.len(), edges.bases.len());
        for (&derived, &base) in &edges.bases {
            graph.add_node(derived);
            if base.is_valid() {
                graph.add_edge(base, derived, ());
            }
        }
        graph
    }

    /// Render the hierarchy in Graphviz DOT format, labelled with type names.
    pub fn to_dot(&self) -> String {
        let edges = self.edges.read();
        let mut ids: Vec<TypeId> = edges.bases.keys().copied().collect();
        ids.sort_unstable();

        let mut graph = DiGraph::<String, &str>::new();
        let mut nodes = FxHashMap::default();
        for id in &ids {
            let name = edges.names.get(id).copied().unwrap_or("?");
            nodes.insert(*id, graph.add_node(format!("{} ({})", name, id)));
        }
        for id in &ids {
            let base = edges.bases[id];
            if let (Some(&from), Some(&to)) = (nodes.get(&base), nodes.get(id)) {
                graph.add_edge(from, to, "");
            }
        }

        format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}
