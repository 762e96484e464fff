//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for populating a world with hypercubes.

use std::sync::Arc;

use polyview_core::{Entity, Motion, PolytopeCache, SpinController, World};
use polyview_math::{GeometryError, HomogeneousMatrix, TopologyKind};

use crate::config::{MotionConfig, ObjectConfig, SceneConfig};

/// Builder for constructing scenes of hypercubes in one dimension
///
/// # Example
/// ```
/// use polyview::scene::SceneBuilder;
/// use polyview_math::TopologyKind;
///
/// let world = SceneBuilder::new(4)
///     .unwrap()
///     .add_bounding_cube(TopologyKind::Edges, 0.96, 0.2)
///     .unwrap()
///     .build();
/// assert_eq!(world.entity_count(), 1);
/// ```
pub struct SceneBuilder {
    world: World,
    cache: PolytopeCache,
    dimension: usize,
}

impl SceneBuilder {
    /// Create a builder for a `dimension`-dimensional world
    ///
    /// Projection needs a depth axis, so `dimension` must be at least 3.
    pub fn new(dimension: usize) -> Result<Self, GeometryError> {
        if dimension < 3 {
            return Err(GeometryError::DimensionMismatch {
                expected: 3,
                found: dimension,
            });
        }
        Ok(Self {
            world: World::new(),
            cache: PolytopeCache::new(),
            dimension,
        })
    }

    /// Build the world described by a scene configuration
    pub fn from_config(config: &SceneConfig) -> Result<World, GeometryError> {
        let mut builder = Self::new(config.dimension)?.add_bounding_cube(
            config.topology,
            config.bounding_scale,
            config.bounding_offset,
        )?;
        for object in &config.objects {
            builder = builder.add_object(object)?;
        }
        Ok(builder.build())
    }

    /// Add the static bounding hypercube
    ///
    /// The unit cube is scaled by `scale` and every coordinate is then offset
    /// by `offset`.
    pub fn add_bounding_cube(
        mut self,
        kind: TopologyKind,
        scale: f64,
        offset: f64,
    ) -> Result<Self, GeometryError> {
        let cube = self
            .cache
            .get_or_generate(self.dimension, kind)?
            .rescale(scale)?
            .shift(&vec![offset; self.dimension])?;

        self.world.add_entity(
            Entity::new(Arc::new(cube))?
                .with_name("bounds")
                .with_tag("bounds"),
        );
        Ok(self)
    }

    /// Add a configured object
    pub fn add_object(mut self, object: &ObjectConfig) -> Result<Self, GeometryError> {
        let cached = self.cache.get_or_generate(self.dimension, object.topology)?;
        let model = if object.scale == 1.0 {
            cached
        } else {
            Arc::new(cached.rescale(object.scale)?)
        };

        let position = if object.position.is_empty() {
            vec![0.0; self.dimension]
        } else {
            object.position.clone()
        };

        let entity = Entity::new(model)?
            .with_name(object.name.as_str())
            .with_tag("object")
            .with_transform(HomogeneousMatrix::translation(&position)?)?
            .with_motion(self.motion_for(&object.motion)?)?;

        self.world.add_entity(entity);
        Ok(self)
    }

    /// Add a custom entity to the scene
    pub fn add_entity(mut self, entity: Entity) -> Result<Self, GeometryError> {
        if entity.dimension() != self.dimension {
            return Err(GeometryError::DimensionMismatch {
                expected: self.dimension,
                found: entity.dimension(),
            });
        }
        self.world.add_entity(entity);
        Ok(self)
    }

    /// Build the scene and return the populated World
    pub fn build(self) -> World {
        log::debug!(
            "Built {}D scene with {} entities ({} cached models)",
            self.dimension,
            self.world.entity_count(),
            self.cache.len()
        );
        self.world
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn motion_for(&self, config: &MotionConfig) -> Result<Motion, GeometryError> {
        Ok(match config {
            MotionConfig::Static => Motion::Static,
            MotionConfig::Kinetic { velocity } => Motion::Kinetic {
                velocity: velocity.clone(),
            },
            MotionConfig::Spin { rate, plane, thrust } => {
                // Reject bad planes now rather than on the first tick
                HomogeneousMatrix::rotation(self.dimension, *rate, plane[0], plane[1])?;
                let mut controller = SpinController::new(*rate, plane[0], plane[1]);
                if let Some(thrust) = thrust {
                    if thrust.len() != self.dimension {
                        return Err(GeometryError::DimensionMismatch {
                            expected: self.dimension,
                            found: thrust.len(),
                        });
                    }
                    controller = controller.with_thrust(thrust.clone());
                }
                Motion::piloted(controller, self.dimension)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_empty_scene() {
        let world = SceneBuilder::new(3).unwrap().build();
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn test_low_dimension_rejected() {
        assert!(matches!(
            SceneBuilder::new(2),
            Err(GeometryError::DimensionMismatch { expected: 3, found: 2 })
        ));
    }

    #[test]
    fn test_scene_with_bounding_cube() {
        let world = SceneBuilder::new(3)
            .unwrap()
            .add_bounding_cube(TopologyKind::Edges, 0.96, 0.2)
            .unwrap()
            .build();

        let (_, bounds) = world.get_by_name("bounds").unwrap();
        assert!(bounds.has_tag("bounds"));
        assert_eq!(bounds.model().edges().len(), 12);

        let far = bounds.model().vertices().point(7);
        for &c in far {
            assert!((c - 1.16).abs() < EPSILON);
        }
        let near = bounds.model().vertices().point(0);
        assert_eq!(near, &[0.2, 0.2, 0.2]);
    }

    #[test]
    fn test_scene_with_objects() {
        let objects = vec![
            ObjectConfig {
                name: "drifter".to_string(),
                position: vec![0.0, 0.0, 2.0, 0.0],
                motion: MotionConfig::Kinetic { velocity: vec![0.0, 0.0, 0.0, 0.1] },
                ..ObjectConfig::default()
            },
            ObjectConfig {
                name: "spinner".to_string(),
                topology: TopologyKind::Faces,
                scale: 0.5,
                motion: MotionConfig::Spin { rate: 1.0, plane: [2, 3], thrust: None },
                ..ObjectConfig::default()
            },
        ];
        let config = SceneConfig { dimension: 4, objects, ..SceneConfig::default() };
        let world = SceneBuilder::from_config(&config).unwrap();

        assert_eq!(world.entity_count(), 3);
        let (_, drifter) = world.get_by_name("drifter").unwrap();
        assert_eq!(drifter.motion().velocity(), Some(&[0.0, 0.0, 0.0, 0.1][..]));
        let origin = drifter.transform().apply(&[0.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        assert_eq!(origin, vec![0.0, 0.0, 2.0, 0.0, 1.0]);

        let (_, spinner) = world.get_by_name("spinner").unwrap();
        assert_eq!(spinner.model().faces().len(), 24);
        assert_eq!(spinner.model().vertices().point(15), &[0.5, 0.5, 0.5, 0.5]);
        assert!(matches!(spinner.motion(), Motion::Piloted { .. }));
    }

    #[test]
    fn test_object_errors() {
        let bad_plane = ObjectConfig {
            motion: MotionConfig::Spin { rate: 1.0, plane: [0, 3], thrust: None },
            ..ObjectConfig::default()
        };
        assert!(SceneBuilder::new(3).unwrap().add_object(&bad_plane).is_err());

        let bad_thrust = ObjectConfig {
            motion: MotionConfig::Spin { rate: 1.0, plane: [0, 1], thrust: Some(vec![1.0]) },
            ..ObjectConfig::default()
        };
        assert!(SceneBuilder::new(3).unwrap().add_object(&bad_thrust).is_err());

        let bad_position = ObjectConfig { position: vec![1.0, 2.0], ..ObjectConfig::default() };
        assert!(SceneBuilder::new(3).unwrap().add_object(&bad_position).is_err());
    }

    #[test]
    fn test_add_entity_checks_dimension() {
        let model = Arc::new(polyview_math::generate_polytope(4, TopologyKind::Edges).unwrap());
        let entity = Entity::new(model).unwrap();
        assert!(SceneBuilder::new(3).unwrap().add_entity(entity).is_err());
    }
}
