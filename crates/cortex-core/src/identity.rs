//! Most-derived identity carried by the root part of an instance.
//!
//! A derived struct holds its base part by value, so a reference to that
//! part on its own cannot tell which instance it belongs to. Every root type
//! therefore stores an [`Identity`]. The first [`Ptr`](crate::Ptr) that takes
//! ownership of the instance binds it to the most-derived type and to the
//! owning allocation. From then on every base part of the instance reports
//! the whole instance's type and can be cast back down.
//!
//! An identity that was never bound reports nothing, and the part answers
//! with its own static type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock, Weak};

use crate::{RunTimeTyped, TypeId};

/// Binding of a root part to the instance that contains it.
pub struct Identity {
    cell: OnceLock<Instance>,
}

struct Instance {
    type_id: TypeId,
    type_name: &'static str,
    owner: Weak<dyn RunTimeTyped>,
}

impl Identity {
    /// An unbound identity.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Id of the most-derived type, once bound.
    #[inline]
    pub fn type_id(&self) -> Option<TypeId> {
        self.cell.get().map(|instance| instance.type_id)
    }

    /// Name of the most-derived type, once bound.
    #[inline]
    pub fn type_name(&self) -> Option<&'static str> {
        self.cell.get().map(|instance| instance.type_name)
    }

    /// Check if a handle has bound this identity.
    pub fn is_bound(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The instance this identity belongs to, while a handle keeps it alive.
    pub(crate) fn owner(&self) -> Option<Arc<dyn RunTimeTyped>> {
        self.cell.get()?.owner.upgrade()
    }

    /// Bound once; later handles to the same instance leave it unchanged.
    fn bind_to(&self, owner: &Arc<dyn RunTimeTyped>) {
        if self.is_bound() {
            return;
        }
        let instance = Instance {
            type_id: owner.type_id(),
            type_name: owner.type_name(),
            owner: Arc::downgrade(owner),
        };
        if self.cell.set(instance).is_ok() {
            tracing::trace!(type_name = owner.type_name(), "bound instance identity");
        }
    }
}

/// Bind the identity of `owner`'s root part, if it carries one.
pub(crate) fn bind(owner: &Arc<dyn RunTimeTyped>) {
    if let Some(identity) = owner.identity() {
        identity.bind_to(owner);
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new()
    }
}

/// A copy is a new value, not yet owned by any handle.
impl Clone for Identity {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(instance) => write!(f, "Identity({}({}))", instance.type_name, instance.type_id),
            None => f.write_str("Identity(unbound)"),
        }
    }
}

// Identity never takes part in value comparison.
impl PartialEq for Identity {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ptr, RegistrationError, TypeDescription, TypeRegistry, ranges, type_ids};

    struct Token {
        identity: Identity,
        value: u8,
    }

    impl RunTimeTyped for Token {
        fn type_id(&self) -> TypeId {
            self.identity.type_id().unwrap_or(Self::TYPE_ID)
        }
        fn type_name(&self) -> &'static str {
            self.identity.type_name().unwrap_or(Self::TYPE_NAME)
        }
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
        fn view(&self, target: TypeId) -> Option<&dyn std::any::Any> {
            (target == Self::TYPE_ID).then_some(self as &dyn std::any::Any)
        }
        fn identity(&self) -> Option<&Identity> {
            Some(&self.identity)
        }
    }

    impl TypeDescription for Token {
        type BaseClass = dyn RunTimeTyped;
        const TYPE_ID: TypeId = TypeId(ranges::CORE.last.0 - 30);
        const TYPE_NAME: &'static str = "IdentityTestToken";
        const BASE_TYPE_ID: TypeId = type_ids::RUN_TIME_TYPED;
        const BASE_TYPE_NAME: &'static str = type_ids::RUN_TIME_TYPED_NAME;

        fn register(registry: &TypeRegistry) -> Result<(), RegistrationError> {
            registry.register_type(Self::TYPE_ID, Self::BASE_TYPE_ID, Self::TYPE_NAME)
        }
    }

    fn token(value: u8) -> Token {
        Token {
            identity: Identity::new(),
            value,
        }
    }

    #[test]
    fn unbound_until_owned() {
        let token = token(1);
        assert!(!token.identity.is_bound());
        assert_eq!(token.identity.type_id(), None);
        assert!(token.identity.owner().is_none());
        assert_eq!(format!("{:?}", token.identity), "Identity(unbound)");
    }

    #[test]
    fn handle_binds_the_owner() {
        let ptr = Ptr::new(token(2));
        assert!(ptr.identity.is_bound());
        assert_eq!(ptr.identity.type_id(), Some(Token::TYPE_ID));
        assert_eq!(ptr.identity.type_name(), Some("IdentityTestToken"));
        let owner = ptr.identity.owner().unwrap();
        assert!(std::ptr::addr_eq(Arc::as_ptr(&owner), ptr.as_ptr()));
    }

    #[test]
    fn owner_is_released_with_the_last_handle() {
        let ptr = Ptr::new(token(3));
        let weak = ptr.identity.cell.get().unwrap().owner.clone();
        drop(ptr);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn clones_start_unbound() {
        let ptr = Ptr::new(token(4));
        let copy = ptr.identity.clone();
        assert!(!copy.is_bound());
        assert_eq!(copy, ptr.identity);
        assert_eq!(ptr.value, 4);
    }
}
