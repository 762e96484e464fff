//! Integration tests for the projection pipeline
//!
//! These tests run generated hypercubes through the whole chain:
//! 1. Entity transform, orbit camera and screen transform
//! 2. Perspective divide and shading
//! 3. Culling and colouring in the frame builder

use std::sync::Arc;

use polyview_core::{Entity, Motion, PolytopeCache, World};
use polyview_math::{generate_polytope, HomogeneousMatrix, TopologyKind};
use polyview_render::{
    project_polytope, Frame, OrbitCamera, Palette, ScreenTransform,
};

const EPSILON: f64 = 1e-9;

/// The bounding cube as the viewer places it: shrunk and nudged off the origin
fn bounding_cube(dimension: usize, kind: TopologyKind) -> Arc<polyview_math::Polytope> {
    let cube = generate_polytope(dimension, kind)
        .unwrap()
        .rescale(0.96)
        .unwrap()
        .shift(&vec![0.2; dimension])
        .unwrap();
    Arc::new(cube)
}

// ==================== Projection ====================

/// Every projected bounding-cube vertex is in front of the camera
#[test]
fn test_bounding_cube_projects_in_front() {
    let cube = bounding_cube(3, TopologyKind::Edges);
    let identity = HomogeneousMatrix::identity(3).unwrap();
    let screen = ScreenTransform::default().matrix(3).unwrap();

    let table = project_polytope(&identity, &identity, &screen, &cube).unwrap();
    assert_eq!(table.len(), 8);
    for (i, v) in table.iter().enumerate() {
        let z = cube.vertices().point(i)[2];
        assert!((v.shade - z).abs() < EPSILON, "vertex {} shade {}", i, v.shade);
        assert!(v.x.is_finite() && v.y.is_finite());
    }

    // The nearest corner (0.2, 0.2, 0.2) lands at 100 * 0.2 / 0.2 + 300
    assert!((table[0].x - 400.0).abs() < EPSILON);
    assert!((table[0].y - 400.0).abs() < EPSILON);
}

/// Four-dimensional geometry projects through a 5x5 chain
#[test]
fn test_tesseract_projection() {
    let tesseract = bounding_cube(4, TopologyKind::Edges);
    let camera = OrbitCamera::new(&[0.5; 4], 0.01, 2, 3).unwrap();
    let screen = ScreenTransform::default().matrix(4).unwrap();

    let table = project_polytope(
        &HomogeneousMatrix::identity(4).unwrap(),
        camera.world_to_camera(),
        &screen,
        &tesseract,
    )
    .unwrap();
    assert_eq!(table.len(), 16);

    // The camera has not ticked, so w is the fourth world coordinate.
    // Vertex 15 is (1.16, 1.16, 1.16, 1.16): (100 * 1.16) / 1.16 + 300
    let far = table[15];
    assert!((far.x - 400.0).abs() < EPSILON, "got {:?}", far);
    assert!((far.y - 400.0).abs() < EPSILON, "got {:?}", far);
    assert!((far.shade - 1.16).abs() < EPSILON);

    // Vertex 3 is (1.16, 1.16, 0.2, 0.2): (100 * 1.16) / 0.2 + 300
    let near = table[3];
    assert!((near.x - 880.0).abs() < EPSILON, "got {:?}", near);
    assert!((near.y - 880.0).abs() < EPSILON, "got {:?}", near);
    assert!((near.shade - 0.2).abs() < EPSILON);

    // Vertex 12 is (0.2, 0.2, 1.16, 1.16): shade is z, not w
    let deep = table[12];
    assert!((deep.x - (20.0 / 1.16 + 300.0)).abs() < EPSILON, "got {:?}", deep);
    assert!((deep.shade - 1.16).abs() < EPSILON);
}

// ==================== Frames ====================

/// An orbiting camera keeps the bounding cube fully drawn for a while
#[test]
fn test_orbit_frames_keep_bounding_cube() {
    let mut world = World::new();
    world.add_entity(
        Entity::new(bounding_cube(3, TopologyKind::Edges))
            .unwrap()
            .with_name("bounds"),
    );
    let mut camera = OrbitCamera::new(&[0.5, 0.5, 0.5], 0.003, 0, 1).unwrap();
    let screen = ScreenTransform::default();

    for _ in 0..60 {
        world.update(1.0 / 60.0).unwrap();
        camera.tick().unwrap();
        let frame = Frame::from_world(&world, &camera, &screen, &Palette::BLUE).unwrap();

        // Rotation in the XY plane never changes depth
        assert_eq!(frame.line_count(), 12);
        assert_eq!(frame.culled_count(), 0);
    }
}

/// Faces and edges can share one frame
#[test]
fn test_mixed_topologies_in_one_frame() {
    let mut cache = PolytopeCache::new();
    let mut world = World::new();
    world.add_entity(Entity::new(bounding_cube(3, TopologyKind::Edges)).unwrap());
    world.add_entity(
        Entity::new(cache.get_or_generate(3, TopologyKind::Faces).unwrap())
            .unwrap()
            .with_transform(HomogeneousMatrix::translation(&[0.0, 0.0, 3.0]).unwrap())
            .unwrap(),
    );

    let camera = OrbitCamera::fixed(3).unwrap();
    let frame =
        Frame::from_world(&world, &camera, &ScreenTransform::default(), &Palette::BLUE).unwrap();

    assert_eq!(frame.line_count(), 12);
    assert_eq!(frame.triangle_count(), 24);
    // Shade 3..4 is clamped to the `zero` colour
    assert!(frame.triangles.iter().all(|v| v.color == [0, 0, 255, 255]));
}

/// Objects that drift behind the camera are culled
#[test]
fn test_object_moving_behind_camera_is_culled() {
    let mut world = World::new();
    world.add_entity(
        Entity::new(bounding_cube(3, TopologyKind::Edges))
            .unwrap()
            .with_motion(Motion::Kinetic { velocity: vec![0.0, 0.0, -1.0] })
            .unwrap(),
    );
    let camera = OrbitCamera::fixed(3).unwrap();
    let screen = ScreenTransform::default();

    let before = Frame::from_world(&world, &camera, &screen, &Palette::BLUE).unwrap();
    assert_eq!(before.line_count(), 12);

    // Depth now runs from -0.8 to 0.16
    world.update(1.0).unwrap();
    let after = Frame::from_world(&world, &camera, &screen, &Palette::BLUE).unwrap();
    assert_eq!(after.line_count(), 4);
    assert_eq!(after.culled_count(), 8);
}

/// Camera and entity dimensions must agree
#[test]
fn test_dimension_mismatch_between_camera_and_world() {
    let mut world = World::new();
    world.add_entity(Entity::new(bounding_cube(4, TopologyKind::Edges)).unwrap());
    let camera = OrbitCamera::fixed(3).unwrap();

    assert!(
        Frame::from_world(&world, &camera, &ScreenTransform::default(), &Palette::BLUE).is_err()
    );
}
