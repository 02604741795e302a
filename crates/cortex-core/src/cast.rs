//! Registry-checked casts.
//!
//! Two families, each in a reference form and a [`Ptr`] form:
//!
//! - [`run_time_cast`] / [`run_time_cast_ptr`]: return `None` when the source
//!   is not an instance of the target. A miss is an ordinary outcome.
//! - [`asserted_static_cast`] / [`asserted_static_cast_ptr`]: for call sites
//!   that already know the cast holds. The registry check runs only with
//!   `debug_assertions`; a cast that cannot be projected panics.
//!
//! The reference forms project within the value they are given first. A
//! reference to an embedded base part falls back to the instance recorded in
//! its [`Identity`](crate::Identity), so it can be cast back down as long as
//! a handle owns the instance. A value that was never owned by a handle only
//! knows about itself and its own base parts.
//!
//! # Example
//!
//! ```ignore
//! let mesh: ObjectPtr = Ptr::new(MeshPrimitive::default()).upcast();
//!
//! let primitive = run_time_cast_ptr::<Primitive, _>(&mesh).unwrap();
//! assert!(run_time_cast_ptr::<IntData, _>(&mesh).is_none());
//! ```

use std::sync::Arc;

use crate::{Ptr, RunTimeTyped, TypeDescription};

/// View `src` as a `T`, or `None` if it is not an instance of `T`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn run_time_cast<T, S>(src: &S) -> Option<&T>
where
    T: TypeDescription,
    S: RunTimeTyped + ?Sized,
{
    if !src.is_instance_of(T::TYPE_ID) {
        return None;
    }
    project_ref(src)
}

/// Handle to the `T` part of `src`'s instance, or `None` if the instance is
/// not a `T`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn run_time_cast_ptr<T, S>(src: &Ptr<S>) -> Option<Ptr<T>>
where
    T: TypeDescription,
    S: RunTimeTyped + ?Sized,
{
    if !src.is_instance_of(T::TYPE_ID) {
        return None;
    }
    src.project::<T>()
}

/// View `src` as a `T`, where the caller guarantees `src` is a `T`.
///
/// # Panics
///
/// When `src` is not a `T`. Debug builds also check the registry first.
#[track_caller]
pub fn asserted_static_cast<T, S>(src: &S) -> &T
where
    T: TypeDescription,
    S: RunTimeTyped + ?Sized,
{
    debug_assert!(
        src.is_instance_of(T::TYPE_ID),
        "asserted_static_cast: {} is not an instance of {}",
        src.type_name(),
        T::TYPE_NAME
    );
    match project_ref::<T, S>(src) {
        Some(part) => part,
        None => invalid_cast(src.type_name(), T::TYPE_NAME),
    }
}

/// Handle form of [`asserted_static_cast`].
///
/// # Panics
///
/// When the instance is not a `T`.
#[track_caller]
pub fn asserted_static_cast_ptr<T, S>(src: &Ptr<S>) -> Ptr<T>
where
    T: TypeDescription,
    S: RunTimeTyped + ?Sized,
{
    debug_assert!(
        src.is_instance_of(T::TYPE_ID),
        "asserted_static_cast_ptr: {} is not an instance of {}",
        src.type_name(),
        T::TYPE_NAME
    );
    match src.project::<T>() {
        Some(part) => part,
        None => invalid_cast(src.type_name(), T::TYPE_NAME),
    }
}

/// The `T` part of the instance `src` belongs to.
///
/// Does not consult the registry; callers check ancestry first.
fn project_ref<T, S>(src: &S) -> Option<&T>
where
    T: TypeDescription,
    S: RunTimeTyped + ?Sized,
{
    if let Some(part) = src.view(T::TYPE_ID).and_then(|part| part.downcast_ref::<T>()) {
        return Some(part);
    }

    let owner = src.identity()?.owner()?;
    let start = Arc::as_ptr(&owner).cast::<u8>().addr();
    let len = std::mem::size_of_val(&*owner).max(1);
    let addr = (src as *const S).cast::<u8>().addr();
    if !(start..start + len).contains(&addr) {
        return None;
    }

    let part: *const T = owner.view(T::TYPE_ID)?.downcast_ref::<T>()?;
    // SAFETY: `src` lies inside `owner`'s allocation and is borrowed for the
    // returned lifetime, so that allocation stays alive at least as long.
    // `part` points into the same allocation and is only read through.
    Some(unsafe { &*part })
}

#[cold]
#[track_caller]
fn invalid_cast(from: &str, to: &str) -> ! {
    panic!("invalid asserted cast from {} to {}", from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Identity, ObjectPtr, RegistrationError, TypeId, TypeRegistry, ranges, type_ids};

    const LIGHT_ID: TypeId = TypeId(ranges::CORE.last.0 - 20);
    const SPOT_ID: TypeId = TypeId(ranges::CORE.last.0 - 21);
    const CAMERA_ID: TypeId = TypeId(ranges::CORE.last.0 - 22);

    struct Light {
        identity: Identity,
        intensity: f32,
    }

    struct SpotLight {
        light: Light,
        cone_angle: f32,
    }

    struct Camera;

    impl RunTimeTyped for Light {
        fn type_id(&self) -> TypeId {
            self.identity.type_id().unwrap_or(LIGHT_ID)
        }
        fn type_name(&self) -> &'static str {
            self.identity.type_name().unwrap_or("CastTestLight")
        }
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
        fn view(&self, target: TypeId) -> Option<&dyn std::any::Any> {
            (target == LIGHT_ID).then_some(self as &dyn std::any::Any)
        }
        fn identity(&self) -> Option<&Identity> {
            Some(&self.identity)
        }
    }

    impl TypeDescription for Light {
        type BaseClass = dyn RunTimeTyped;
        const TYPE_ID: TypeId = LIGHT_ID;
        const TYPE_NAME: &'static str = "CastTestLight";
        const BASE_TYPE_ID: TypeId = type_ids::RUN_TIME_TYPED;
        const BASE_TYPE_NAME: &'static str = type_ids::RUN_TIME_TYPED_NAME;

        fn register(registry: &TypeRegistry) -> Result<(), RegistrationError> {
            registry.register_type(Self::TYPE_ID, Self::BASE_TYPE_ID, Self::TYPE_NAME)
        }
    }

    impl RunTimeTyped for SpotLight {
        fn type_id(&self) -> TypeId {
            self.light.identity.type_id().unwrap_or(SPOT_ID)
        }
        fn type_name(&self) -> &'static str {
            self.light.identity.type_name().unwrap_or("CastTestSpotLight")
        }
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
        fn view(&self, target: TypeId) -> Option<&dyn std::any::Any> {
            if target == SPOT_ID {
                Some(self)
            } else {
                self.light.view(target)
            }
        }
        fn identity(&self) -> Option<&Identity> {
            self.light.identity()
        }
    }

    impl TypeDescription for SpotLight {
        type BaseClass = Light;
        const TYPE_ID: TypeId = SPOT_ID;
        const TYPE_NAME: &'static str = "CastTestSpotLight";
        const BASE_TYPE_ID: TypeId = LIGHT_ID;
        const BASE_TYPE_NAME: &'static str = "CastTestLight";

        fn register(registry: &TypeRegistry) -> Result<(), RegistrationError> {
            Light::register(registry)?;
            registry.register_type(Self::TYPE_ID, Self::BASE_TYPE_ID, Self::TYPE_NAME)
        }
    }

    impl RunTimeTyped for Camera {
        fn type_id(&self) -> TypeId {
            CAMERA_ID
        }
        fn type_name(&self) -> &'static str {
            "CastTestCamera"
        }
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
        fn view(&self, target: TypeId) -> Option<&dyn std::any::Any> {
            (target == CAMERA_ID).then_some(self as &dyn std::any::Any)
        }
    }

    impl TypeDescription for Camera {
        type BaseClass = dyn RunTimeTyped;
        const TYPE_ID: TypeId = CAMERA_ID;
        const TYPE_NAME: &'static str = "CastTestCamera";
        const BASE_TYPE_ID: TypeId = type_ids::RUN_TIME_TYPED;
        const BASE_TYPE_NAME: &'static str = type_ids::RUN_TIME_TYPED_NAME;

        fn register(registry: &TypeRegistry) -> Result<(), RegistrationError> {
            registry.register_type(Self::TYPE_ID, Self::BASE_TYPE_ID, Self::TYPE_NAME)
        }
    }

    fn spot() -> ObjectPtr {
        Ptr::new(SpotLight {
            light: Light {
                identity: Identity::new(),
                intensity: 2.0,
            },
            cone_angle: 30.0,
        })
        .upcast()
    }

    #[test]
    fn reference_cast_to_own_type_keeps_address() {
        let spot = spot();
        let object: &dyn RunTimeTyped = spot.object();
        let cast = run_time_cast::<SpotLight, _>(object).unwrap();
        assert_eq!(cast.cone_angle, 30.0);
        assert!(std::ptr::addr_eq(cast as *const SpotLight, object as *const dyn RunTimeTyped));
    }

    #[test]
    fn reference_cast_to_base_projects() {
        let spot = spot();
        let light = run_time_cast::<Light, _>(spot.object()).unwrap();
        assert_eq!(light.intensity, 2.0);
    }

    #[test]
    fn reference_cast_miss_is_none() {
        let spot = spot();
        assert!(run_time_cast::<Camera, _>(spot.object()).is_none());
        let camera = Camera;
        assert!(run_time_cast::<Light, _>(&camera).is_none());
    }

    #[test]
    fn ptr_cast_keeps_ownership_of_whole_instance() {
        let spot = spot();
        let light = run_time_cast_ptr::<Light, _>(&spot).unwrap();
        assert_eq!(light.intensity, 2.0);
        assert_eq!(light.type_id(), SPOT_ID);
        assert!(Ptr::ptr_eq(&light, &spot));

        // Back down from the base view.
        let back = run_time_cast_ptr::<SpotLight, _>(&light).unwrap();
        assert_eq!(back.cone_angle, 30.0);
        assert!(std::ptr::addr_eq(back.as_ptr(), spot.as_ptr()));
    }

    #[test]
    fn base_part_reports_the_whole_instance() {
        let spot = spot();
        let light = run_time_cast_ptr::<Light, _>(&spot).unwrap();
        let part: &Light = &light;
        assert_eq!(part.type_id(), SPOT_ID);
        assert_eq!(part.type_name(), "CastTestSpotLight");
        assert!(part.is_instance_of(SPOT_ID));

        let back = run_time_cast::<SpotLight, _>(part).unwrap();
        assert_eq!(back.cone_angle, 30.0);
        assert!(std::ptr::addr_eq(back as *const SpotLight, spot.as_ptr()));
        let back = asserted_static_cast::<SpotLight, _>(part);
        assert_eq!(back.cone_angle, 30.0);
    }

    #[test]
    fn unowned_value_reports_its_own_type() {
        let light = Light {
            identity: Identity::new(),
            intensity: 1.0,
        };
        assert_eq!(light.type_id(), LIGHT_ID);
        assert_eq!(light.type_name(), "CastTestLight");
        assert!(run_time_cast::<SpotLight, _>(&light).is_none());
        assert_eq!(run_time_cast::<Light, _>(&light).unwrap().intensity, 1.0);
    }

    #[test]
    fn ptr_cast_miss_is_none() {
        let spot = spot();
        assert!(run_time_cast_ptr::<Camera, _>(&spot).is_none());
    }

    #[test]
    fn asserted_casts_succeed_when_related() {
        let spot = spot();
        let light = asserted_static_cast::<Light, _>(spot.object());
        assert_eq!(light.intensity, 2.0);
        let light = asserted_static_cast_ptr::<Light, _>(&spot);
        assert_eq!(light.type_name(), "CastTestSpotLight");
    }

    #[test]
    #[should_panic]
    fn asserted_cast_panics_when_unrelated() {
        let spot = spot();
        let _ = asserted_static_cast::<Camera, _>(spot.object());
    }

    #[test]
    #[should_panic]
    fn asserted_ptr_cast_panics_when_unrelated() {
        let spot = spot();
        let _ = asserted_static_cast_ptr::<Camera, _>(&spot);
    }
}
