//! Named collections of objects.

use std::collections::BTreeMap;

use cortex_core::{ObjectPtr, Ptr, TypeDescription, run_time_cast_ptr};
use cortex_macros::RunTimeTyped;

use crate::{Data, type_ids};

/// A string-keyed map of objects.
///
/// Members are stored as [`ObjectPtr`] and recovered with a checked cast,
/// so one compound can hold any mix of types.
///
/// # Example
///
/// ```
/// use cortex_objects::{CompoundData, FloatData, IntData};
///
/// let mut compound = CompoundData::new();
/// compound.insert_value("samples", IntData::new(16));
///
/// assert_eq!(*compound.get::<IntData>("samples").unwrap().readable(), 16);
/// assert!(compound.get::<FloatData>("samples").is_none());
/// ```
#[derive(Debug, Clone, Default, RunTimeTyped)]
#[cortex(id = type_ids::COMPOUND_DATA)]
pub struct CompoundData {
    #[cortex(base)]
    data: Data,
    members: BTreeMap<String, ObjectPtr>,
}

impl CompoundData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member, returning the one it replaces.
    pub fn insert(&mut self, name: impl Into<String>, value: ObjectPtr) -> Option<ObjectPtr> {
        self.members.insert(name.into(), value)
    }

    /// Wrap `value` in a handle and insert it.
    pub fn insert_value<T: TypeDescription>(
        &mut self,
        name: impl Into<String>,
        value: T,
    ) -> Option<ObjectPtr> {
        self.insert(name, Ptr::new(value).upcast())
    }

    /// The member called `name`, whatever its type.
    pub fn get_object(&self, name: &str) -> Option<&ObjectPtr> {
        self.members.get(name)
    }

    /// The member called `name` viewed as a `T`.
    ///
    /// `None` when there is no such member or it is not a `T`.
    pub fn get<T: TypeDescription>(&self, name: &str) -> Option<Ptr<T>> {
        let member = self.members.get(name)?;
        let cast = run_time_cast_ptr::<T, _>(member);
        if cast.is_none() {
            tracing::debug!(
                member = name,
                found = member.type_name(),
                requested = T::TYPE_NAME,
                "compound member has a different type"
            );
        }
        cast
    }

    pub fn remove(&mut self, name: &str) -> Option<ObjectPtr> {
        self.members.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ObjectPtr)> {
        self.members.iter().map(|(name, value)| (name.as_str(), value))
    }
}
