//! Reference-counted handles to `RunTimeTyped` values.
//!
//! [`Ptr<T>`] owns the most-derived instance through an `Arc` and views one
//! part of it as `T`. Casting a handle to a base type keeps ownership of the
//! whole instance while dereferencing to the embedded base part, the same
//! way an aliasing shared pointer does.
//!
//! Identity queries on a handle ([`Ptr::type_id`], [`Ptr::is_instance_of`])
//! always answer for the whole instance, whatever part it views.

use std::fmt;
use std::ops::Deref;
use std::ptr::NonNull;
use std::sync::Arc;

use crate::identity;
use crate::run_time_typed::ensure_registered;
use crate::{RunTimeTyped, TypeDescription, TypeId};

/// Handle to any `RunTimeTyped` value.
pub type ObjectPtr = Ptr<dyn RunTimeTyped>;

/// Shared-ownership handle viewing one part of a `RunTimeTyped` instance.
pub struct Ptr<T: ?Sized + RunTimeTyped> {
    owner: Arc<dyn RunTimeTyped>,
    view: NonNull<T>,
}

// SAFETY: `view` points into the allocation kept alive by `owner` and is only
// ever handed out as a shared reference. Every `RunTimeTyped` is Send + Sync.
unsafe impl<T: ?Sized + RunTimeTyped> Send for Ptr<T> {}
// SAFETY: see above.
unsafe impl<T: ?Sized + RunTimeTyped> Sync for Ptr<T> {}

impl<T: TypeDescription> Ptr<T> {
    /// Move `value` into a new handle.
    ///
    /// Registers `T` and its ancestors in the global registry first, so every
    /// live instance reports a registered id.
    pub fn new(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an existing `Arc`.
    ///
    /// Binds the instance's [`Identity`](crate::Identity) to this allocation.
    pub fn from_arc(value: Arc<T>) -> Self {
        ensure_registered::<T>();
        let view = NonNull::from(&*value);
        let owner: Arc<dyn RunTimeTyped> = value;
        identity::bind(&owner);
        Self { owner, view }
    }
}

impl<T: ?Sized + RunTimeTyped> Ptr<T> {
    /// Id of the most-derived type of the instance.
    pub fn type_id(&self) -> TypeId {
        self.owner.type_id()
    }

    /// Name of the most-derived type of the instance.
    pub fn type_name(&self) -> &'static str {
        self.owner.type_name()
    }

    /// Check if the instance is of type `type_id` or derives from it.
    pub fn is_instance_of(&self, type_id: TypeId) -> bool {
        self.owner.is_instance_of(type_id)
    }

    /// Name-based form of [`is_instance_of`](Self::is_instance_of).
    pub fn is_instance_of_name(&self, type_name: &str) -> bool {
        self.owner.is_instance_of_name(type_name)
    }

    /// The whole instance, whatever part this handle views.
    pub fn object(&self) -> &dyn RunTimeTyped {
        &*self.owner
    }

    /// A handle to the whole instance, typed as `dyn RunTimeTyped`.
    pub fn upcast(&self) -> ObjectPtr {
        Ptr::from(Arc::clone(&self.owner))
    }

    /// Address of the viewed part.
    pub fn as_ptr(&self) -> *const T {
        self.view.as_ptr()
    }

    /// Check if both handles share the same instance.
    pub fn ptr_eq<U: ?Sized + RunTimeTyped>(this: &Self, other: &Ptr<U>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&this.owner), Arc::as_ptr(&other.owner))
    }

    /// Number of handles sharing the instance.
    pub fn strong_count(this: &Self) -> usize {
        Arc::strong_count(&this.owner)
    }

    /// A handle to the part of the instance typed as `U`.
    ///
    /// Does not consult the registry; callers check ancestry first.
    pub(crate) fn project<U: TypeDescription>(&self) -> Option<Ptr<U>> {
        let part = self.owner.view(U::TYPE_ID)?.downcast_ref::<U>()?;
        let view = NonNull::from(part);
        Some(Ptr {
            owner: Arc::clone(&self.owner),
            view,
        })
    }
}

impl From<Arc<dyn RunTimeTyped>> for ObjectPtr {
    fn from(owner: Arc<dyn RunTimeTyped>) -> Self {
        identity::bind(&owner);
        let view = NonNull::from(&*owner);
        Self { owner, view }
    }
}

impl<T: ?Sized + RunTimeTyped> Deref for Ptr<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: `view` was created from a reference into `owner`'s
        // allocation, which lives at least as long as `self`.
        unsafe { self.view.as_ref() }
    }
}

impl<T: ?Sized + RunTimeTyped> Clone for Ptr<T> {
    fn clone(&self) -> Self {
        Self {
            owner: Arc::clone(&self.owner),
            view: self.view,
        }
    }
}

impl<T: ?Sized + RunTimeTyped> fmt::Debug for Ptr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ptr")
            .field("type_name", &self.type_name())
            .field("type_id", &self.type_id())
            .finish()
    }
}
