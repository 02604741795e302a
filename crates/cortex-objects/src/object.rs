//! The root of the object model.

use cortex_core::Identity;
use cortex_macros::RunTimeTyped;

use crate::type_ids;

/// Base of every object-model type.
///
/// Holds the instance's [`Identity`], which every object-model type reaches
/// through its chain of base parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, RunTimeTyped)]
#[cortex(id = type_ids::OBJECT)]
pub struct Object {
    #[cortex(identity)]
    identity: Identity,
}

impl Object {
    pub const fn new() -> Self {
        Self {
            identity: Identity::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cortex_core::{Ptr, RunTimeTyped, TypeDescription};

    #[test]
    fn object_is_a_root_child() {
        assert_eq!(Object::BASE_TYPE_ID, cortex_core::type_ids::RUN_TIME_TYPED);
        let object = Ptr::new(Object::new());
        assert_eq!(object.type_name(), "Object");
        assert!(object.is_instance_of(cortex_core::type_ids::RUN_TIME_TYPED));
        assert!(Object::new().view(type_ids::OBJECT).is_some());
    }

    #[test]
    fn copies_are_not_bound_to_the_instance() {
        let object = Ptr::new(Object::new());
        assert!(object.identity().is_some_and(Identity::is_bound));
        let copy = (*object).clone();
        assert!(!copy.identity.is_bound());
        assert_eq!(copy, *object);
    }
}
