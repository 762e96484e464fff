//! Integration tests for the world simulation
//!
//! These tests drive entities through several ticks the way the binary does:
//! 1. Models come from a shared PolytopeCache
//! 2. Kinetic and piloted entities move, static ones stay put
//! 3. Dirty flags report what changed since the last frame

use std::sync::Arc;

use polyview_core::{
    Entity, HomogeneousMatrix, Motion, PolytopeCache, SpinController, TopologyKind, World,
};

const EPSILON: f64 = 1e-9;

fn origin_of(entity: &Entity) -> Vec<f64> {
    let mut origin = vec![0.0; entity.dimension()];
    origin.push(1.0);
    entity.transform().apply(&origin).expect("origin should transform")
}

// ==================== Shared Models ====================

/// Entities built from the cache share one model allocation
#[test]
fn test_entities_share_cached_model() {
    let mut cache = PolytopeCache::new();
    let mut world = World::new();

    let a = world.add_entity(
        Entity::new(cache.get_or_generate(4, TopologyKind::Edges).unwrap())
            .unwrap()
            .with_name("a"),
    );
    let b = world.add_entity(
        Entity::new(cache.get_or_generate(4, TopologyKind::Edges).unwrap())
            .unwrap()
            .with_name("b"),
    );

    assert_eq!(cache.len(), 1);
    let model_a = world.get_entity(a).unwrap().model() as *const _;
    let model_b = world.get_entity(b).unwrap().model() as *const _;
    assert_eq!(model_a, model_b, "both entities should point at the cached tesseract");
}

// ==================== Motion ====================

/// A kinetic entity drifts by velocity * dt every tick
#[test]
fn test_kinetic_entity_drifts_over_ticks() {
    let mut cache = PolytopeCache::new();
    let mut world = World::new();
    let key = world.add_entity(
        Entity::new(cache.get_or_generate(3, TopologyKind::Edges).unwrap())
            .unwrap()
            .with_motion(Motion::Kinetic { velocity: vec![1.0, -0.5, 0.25] })
            .unwrap(),
    );

    for _ in 0..10 {
        world.update(0.1).unwrap();
    }

    let origin = origin_of(world.get_entity(key).unwrap());
    for (got, want) in origin.iter().zip([1.0, -0.5, 0.25, 1.0]) {
        assert!((got - want).abs() < EPSILON, "origin drifted to {:?}", origin);
    }
}

/// A piloted entity spins about its own origin and accelerates under thrust
#[test]
fn test_piloted_entity_spins_and_accelerates() {
    let mut world = World::new();
    let model = Arc::new(polyview_core::generate_polytope(3, TopologyKind::Edges).unwrap());
    let controller = SpinController::new(std::f64::consts::FRAC_PI_2, 0, 1)
        .with_thrust(vec![0.0, 0.0, 2.0]);
    let key = world.add_entity(
        Entity::new(model)
            .unwrap()
            .with_motion(Motion::piloted(controller, 3))
            .unwrap(),
    );

    world.update(1.0).unwrap();

    let entity = world.get_entity(key).unwrap();
    assert_eq!(entity.motion().velocity(), Some(&[0.0, 0.0, 2.0][..]));

    // One second at PI/2 rad/s sends local X to world Y, then the drift adds z = 2
    let x = entity.transform().apply(&[1.0, 0.0, 0.0, 1.0]).unwrap();
    assert!(x[0].abs() < EPSILON);
    assert!((x[1] - 1.0).abs() < EPSILON);
    assert!((x[2] - 2.0).abs() < EPSILON);
}

/// Mismatched velocities are rejected when the motion is attached
#[test]
fn test_motion_dimension_checked() {
    let mut cache = PolytopeCache::new();
    let entity = Entity::new(cache.get_or_generate(4, TopologyKind::Faces).unwrap()).unwrap();
    assert!(entity.with_motion(Motion::Kinetic { velocity: vec![1.0, 0.0, 0.0] }).is_err());
}

// ==================== Dirty Tracking ====================

/// Only moving entities are dirty after a frame has been consumed
#[test]
fn test_dirty_tracking_across_frames() {
    let mut cache = PolytopeCache::new();
    let mut world = World::new();
    let bounds = world.add_entity(
        Entity::new(cache.get_or_generate(3, TopologyKind::Edges).unwrap())
            .unwrap()
            .with_tag("bounds"),
    );
    let ship = world.add_entity(
        Entity::new(cache.get_or_generate(3, TopologyKind::Edges).unwrap())
            .unwrap()
            .with_tag("ship")
            .with_motion(Motion::Kinetic { velocity: vec![0.0, 1.0, 0.0] })
            .unwrap(),
    );

    // New entities start dirty
    assert!(world.has_dirty_entities());
    world.clear_all_dirty();

    world.update(1.0 / 60.0).unwrap();
    assert!(!world.get_entity(bounds).unwrap().is_dirty());
    assert!(world.get_entity(ship).unwrap().is_dirty());

    // Placing the bounds explicitly marks them too
    world
        .get_entity_mut(bounds)
        .unwrap()
        .set_transform(HomogeneousMatrix::translation(&[0.2, 0.2, 0.2]).unwrap())
        .unwrap();
    assert!(world.get_entity(bounds).unwrap().is_dirty());
}

/// Destroying an entity removes it from iteration and updates
#[test]
fn test_destroyed_entity_is_not_updated() {
    let mut cache = PolytopeCache::new();
    let mut world = World::new();
    let key = world.add_entity(
        Entity::new(cache.get_or_generate(3, TopologyKind::Edges).unwrap())
            .unwrap()
            .with_motion(Motion::Kinetic { velocity: vec![1.0, 0.0, 0.0] })
            .unwrap(),
    );

    let removed = world.destroy_entity(key).expect("entity should exist");
    world.update(1.0).unwrap();

    assert!(world.is_empty());
    // The removed entity kept the state it had when destroyed
    assert_eq!(origin_of(&removed), vec![0.0, 0.0, 0.0, 1.0]);
}
