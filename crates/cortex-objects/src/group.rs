//! Hierarchical grouping of renderables.

use cortex_core::{ObjectPtr, Ptr, asserted_static_cast_ptr};
use cortex_macros::RunTimeTyped;

use crate::{ObjectError, Renderable, type_ids};

/// A renderable holding other renderables.
///
/// Children are checked on insertion, so reading them back as
/// [`Renderable`] handles cannot fail.
#[derive(Debug, Clone, Default, RunTimeTyped)]
#[cortex(id = type_ids::GROUP)]
pub struct Group {
    #[cortex(base)]
    renderable: Renderable,
    children: Vec<ObjectPtr>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child. Fails when `child` is not a `Renderable`.
    pub fn add_child(&mut self, child: ObjectPtr) -> Result<(), ObjectError> {
        if !child.is_instance_of(type_ids::RENDERABLE) {
            tracing::warn!(type_name = child.type_name(), "rejected non-renderable group child");
            return Err(ObjectError::NotRenderable {
                type_name: child.type_name(),
            });
        }
        self.children.push(child);
        Ok(())
    }

    /// Remove `child`, matching by identity. Returns whether it was present.
    pub fn remove_child(&mut self, child: &ObjectPtr) -> bool {
        let before = self.children.len();
        self.children.retain(|existing| !Ptr::ptr_eq(existing, child));
        self.children.len() != before
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Children viewed as their `Renderable` part.
    pub fn children(&self) -> impl Iterator<Item = Ptr<Renderable>> + '_ {
        self.children
            .iter()
            .map(|child| asserted_static_cast_ptr::<Renderable, _>(child))
    }

    /// Children as stored.
    pub fn child_objects(&self) -> &[ObjectPtr] {
        &self.children
    }

    pub fn renderable(&self) -> &Renderable {
        &self.renderable
    }
}
