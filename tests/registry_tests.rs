//! Integration tests for registry queries over real hierarchies.

use cortex::objects::type_ids as object_ids;
use cortex::{
    Identity, Ptr, RunTimeTyped, TypeDescription, TypeId, TypeRegistry, core_module, run_time_cast,
    run_time_cast_ptr, type_ids,
};
use petgraph::algo::{has_path_connecting, is_cyclic_directed};

fn core_registry() -> TypeRegistry {
    let registry = TypeRegistry::new();
    core_module().install(&registry).unwrap();
    registry
}

// ============================================================================
// Properties over the core object model
// ============================================================================

#[test]
fn every_edge_is_an_ancestry() {
    let registry = core_registry();
    for id in registry.registered_type_ids() {
        let base = registry.base_type_id(id);
        if base.is_invalid() {
            assert_eq!(id, type_ids::RUN_TIME_TYPED);
            continue;
        }
        assert!(registry.inherits_from(id, base));
        assert!(registry.base_type_ids(id).contains(&base));
    }
}

#[test]
fn derived_sets_match_inherits_from() {
    let registry = core_registry();
    let ids = registry.registered_type_ids();
    for &t in &ids {
        let derived = registry.derived_type_ids(t);
        for &u in &ids {
            let expected = u != t && registry.inherits_from(u, t);
            assert_eq!(derived.contains(&u), expected, "{} derives from {}", u, t);
        }
    }
}

#[test]
fn derived_sets_match_graph_reachability() {
    let registry = core_registry();
    let graph = registry.hierarchy();
    assert!(!is_cyclic_directed(&graph));

    let ids = registry.registered_type_ids();
    for &t in &ids {
        let derived = registry.derived_type_ids(t);
        for &u in &ids {
            let reachable = u != t && has_path_connecting(&graph, t, u, None);
            assert_eq!(derived.contains(&u), reachable);
        }
    }
}

#[test]
fn base_walk_reaches_the_root_in_chain_length_steps() {
    let registry = core_registry();
    for id in registry.registered_type_ids() {
        let chain = registry.base_type_ids(id);
        let mut current = id;
        let mut steps = 0;
        while registry.base_type_id(current).is_valid() {
            current = registry.base_type_id(current);
            steps += 1;
            assert!(steps <= chain.len());
        }
        assert_eq!(current, type_ids::RUN_TIME_TYPED);
        assert_eq!(steps, chain.len());
    }
}

#[test]
fn queries_are_repeatable() {
    let registry = core_registry();
    let before = registry.registered_type_ids();
    for &id in &before {
        assert_eq!(registry.base_type_ids(id), registry.base_type_ids(id));
        assert_eq!(*registry.derived_type_ids(id), *registry.derived_type_ids(id));
        assert_eq!(
            registry.inherits_from(id, object_ids::OBJECT),
            registry.inherits_from(id, object_ids::OBJECT)
        );
    }
    assert_eq!(registry.registered_type_ids(), before);
}

#[test]
fn core_hierarchy_shape() {
    let registry = core_registry();
    assert_eq!(
        &*registry.base_type_ids(object_ids::MESH_PRIMITIVE),
        &[
            object_ids::PRIMITIVE,
            object_ids::RENDERABLE,
            object_ids::BLIND_DATA_HOLDER,
            object_ids::OBJECT,
            type_ids::RUN_TIME_TYPED,
        ]
    );
    let data = registry.derived_type_ids(object_ids::DATA);
    assert_eq!(data.len(), 5);
    assert!(data.contains(&object_ids::COMPOUND_DATA));
    assert!(!data.contains(&object_ids::GROUP));

    assert_eq!(registry.type_id_of("PointsPrimitive"), object_ids::POINTS_PRIMITIVE);
    assert!(registry.inherits_from_name(object_ids::GROUP, "BlindDataHolder"));
    assert!(registry.to_dot().contains("MeshPrimitive (7)"));
}

// ============================================================================
// Concrete scenario: R <- B <- C, R <- D
// ============================================================================

#[derive(RunTimeTyped)]
#[cortex(id = 400_100, name = "ScenarioB")]
struct B {
    #[cortex(identity)]
    identity: Identity,
    weight: u32,
}

#[derive(RunTimeTyped)]
#[cortex(id = 400_101, name = "ScenarioC")]
struct C {
    #[cortex(base)]
    b: B,
    label: &'static str,
}

#[derive(Default, RunTimeTyped)]
#[cortex(id = 400_102, name = "ScenarioD")]
struct D {
    #[cortex(identity)]
    identity: Identity,
}

fn scenario_registry() -> TypeRegistry {
    let registry = TypeRegistry::new();
    registry.register_type(B::TYPE_ID, type_ids::RUN_TIME_TYPED, B::TYPE_NAME).unwrap();
    registry.register_type(C::TYPE_ID, B::TYPE_ID, C::TYPE_NAME).unwrap();
    registry.register_type(D::TYPE_ID, type_ids::RUN_TIME_TYPED, D::TYPE_NAME).unwrap();
    registry
}

#[test]
fn scenario_queries() {
    let registry = scenario_registry();
    let r = type_ids::RUN_TIME_TYPED;

    assert_eq!(&*registry.base_type_ids(C::TYPE_ID), &[B::TYPE_ID, r]);

    let mut below_root: Vec<TypeId> = registry.derived_type_ids(r).iter().copied().collect();
    below_root.sort();
    assert_eq!(below_root, [B::TYPE_ID, C::TYPE_ID, D::TYPE_ID]);

    let below_b: Vec<TypeId> = registry.derived_type_ids(B::TYPE_ID).iter().copied().collect();
    assert_eq!(below_b, [C::TYPE_ID]);

    assert!(registry.inherits_from(C::TYPE_ID, r));
    assert!(!registry.inherits_from(D::TYPE_ID, B::TYPE_ID));
}

#[test]
fn scenario_casts() {
    let c = Ptr::new(C {
        b: B {
            identity: Identity::new(),
            weight: 3,
        },
        label: "c",
    });

    assert!(c.is_instance_of(C::TYPE_ID));
    assert!(c.is_instance_of(B::TYPE_ID));
    assert!(c.is_instance_of(type_ids::RUN_TIME_TYPED));
    assert!(!c.is_instance_of(D::TYPE_ID));

    let object = c.upcast();
    let b = run_time_cast_ptr::<B, _>(&object).unwrap();
    assert_eq!(b.weight, 3);
    assert!(Ptr::ptr_eq(&b, &c));
    assert!(run_time_cast_ptr::<D, _>(&object).is_none());

    let same = run_time_cast::<C, _>(object.object()).unwrap();
    assert_eq!(same.label, "c");
    assert!(std::ptr::addr_eq(same as *const C, c.as_ptr()));
    assert!(run_time_cast::<D, _>(object.object()).is_none());

    // The base part reached through a handle still answers for `C`.
    let part: &B = &b;
    assert_eq!(part.type_name(), "ScenarioC");
    assert!(part.is_instance_of(C::TYPE_ID));
    assert_eq!(run_time_cast::<C, _>(part).unwrap().label, "c");
}

#[test]
fn instance_type_reporting() {
    let d = Ptr::new(D::default());
    assert_eq!(d.type_id(), D::TYPE_ID);
    assert_eq!(d.type_name(), "ScenarioD");
    assert_eq!(D::BASE_TYPE_NAME, "RunTimeTyped");
    assert_eq!(C::BASE_TYPE_ID, B::TYPE_ID);
    assert!(d.object().is_instance_of_name("RunTimeTyped"));
    assert!(!d.object().is_instance_of_name("ScenarioB"));
}
