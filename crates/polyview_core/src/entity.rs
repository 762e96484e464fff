//! Entity and motion types
//!
//! An Entity is an object in the world: a shared model, its model-to-world
//! transform, and how it moves each tick. Movement is a tagged [`Motion`]
//! rather than a type hierarchy.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;
use polyview_math::{GeometryError, HomogeneousMatrix, Polytope};

bitflags! {
    /// Flags indicating which parts of an entity have changed since the last frame
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Model-to-world transform has changed
        const TRANSFORM = 1 << 0;
        /// Model geometry has changed
        const MODEL = 1 << 1;
        /// All flags set
        const ALL = Self::TRANSFORM.bits() | Self::MODEL.bits();
    }
}

/// A rotation by `angle` radians in the `axis_i`-`axis_j` plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneRotation {
    pub angle: f64,
    pub axis_i: usize,
    pub axis_j: usize,
}

impl PlaneRotation {
    pub fn new(angle: f64, axis_i: usize, axis_j: usize) -> Self {
        Self { angle, axis_i, axis_j }
    }
}

/// What a pilot asks for during one tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PilotCommand {
    /// Rotations about the entity's own origin, applied in order
    pub rotations: Vec<PlaneRotation>,
    /// World-space acceleration (units per second squared)
    pub thrust: Option<Vec<f64>>,
}

/// Source of steering commands for a piloted entity
pub trait PilotController: Send {
    /// Produce the command for a tick of length `dt` seconds
    fn command(&mut self, dt: f64) -> PilotCommand;
}

/// Scripted pilot: constant spin in one plane and constant thrust
#[derive(Clone, Debug)]
pub struct SpinController {
    /// Angular rate in radians per second
    pub rate: f64,
    pub axis_i: usize,
    pub axis_j: usize,
    pub thrust: Option<Vec<f64>>,
}

impl SpinController {
    pub fn new(rate: f64, axis_i: usize, axis_j: usize) -> Self {
        Self {
            rate,
            axis_i,
            axis_j,
            thrust: None,
        }
    }

    pub fn with_thrust(mut self, thrust: Vec<f64>) -> Self {
        self.thrust = Some(thrust);
        self
    }
}

impl PilotController for SpinController {
    fn command(&mut self, dt: f64) -> PilotCommand {
        PilotCommand {
            rotations: vec![PlaneRotation::new(self.rate * dt, self.axis_i, self.axis_j)],
            thrust: self.thrust.clone(),
        }
    }
}

/// How an entity moves when the world is updated
pub enum Motion {
    /// Never moves
    Static,
    /// Drifts with a constant world-space velocity
    Kinetic { velocity: Vec<f64> },
    /// Steered each tick by a controller, then drifts with its velocity
    Piloted {
        controller: Box<dyn PilotController>,
        velocity: Vec<f64>,
    },
}

impl Motion {
    /// Piloted motion starting at rest
    pub fn piloted(controller: impl PilotController + 'static, dimension: usize) -> Self {
        Motion::Piloted {
            controller: Box::new(controller),
            velocity: vec![0.0; dimension],
        }
    }

    /// Current velocity, `None` for static entities
    pub fn velocity(&self) -> Option<&[f64]> {
        match self {
            Motion::Static => None,
            Motion::Kinetic { velocity } | Motion::Piloted { velocity, .. } => Some(velocity),
        }
    }
}

impl fmt::Debug for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Motion::Static => write!(f, "Static"),
            Motion::Kinetic { velocity } => {
                f.debug_struct("Kinetic").field("velocity", velocity).finish()
            }
            Motion::Piloted { velocity, .. } => {
                f.debug_struct("Piloted").field("velocity", velocity).finish_non_exhaustive()
            }
        }
    }
}

/// An object in the world
///
/// Each entity has:
/// - An optional name and a set of tags
/// - A model (shared between entities through `Arc`)
/// - A model-to-world transform
/// - A [`Motion`]
/// - Dirty flags (for change tracking)
pub struct Entity {
    /// Optional name for this entity (for lookup)
    pub name: Option<String>,
    /// Tags for categorization (e.g., "bounds", "ship")
    pub tags: HashSet<String>,
    model: Arc<Polytope>,
    transform: HomogeneousMatrix,
    motion: Motion,
    dirty: DirtyFlags,
}

impl Entity {
    /// Create a static entity placed at the origin
    pub fn new(model: Arc<Polytope>) -> Result<Self, GeometryError> {
        let transform = HomogeneousMatrix::identity(model.dimension())?;
        Ok(Self {
            name: None,
            tags: HashSet::new(),
            model,
            transform,
            motion: Motion::Static,
            dirty: DirtyFlags::ALL, // New entities are dirty
        })
    }

    /// Set the model-to-world transform
    pub fn with_transform(mut self, transform: HomogeneousMatrix) -> Result<Self, GeometryError> {
        self.set_transform(transform)?;
        Ok(self)
    }

    /// Set the motion; velocities must match the model dimension
    pub fn with_motion(mut self, motion: Motion) -> Result<Self, GeometryError> {
        if let Some(velocity) = motion.velocity() {
            if velocity.len() != self.dimension() {
                return Err(GeometryError::DimensionMismatch {
                    expected: self.dimension(),
                    found: velocity.len(),
                });
            }
        }
        self.motion = motion;
        Ok(self)
    }

    /// Set the name of this entity (for lookup)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a tag to this entity
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Check if this entity has a specific tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[inline]
    pub fn model(&self) -> &Polytope {
        &self.model
    }

    /// Spatial dimension of the model
    #[inline]
    pub fn dimension(&self) -> usize {
        self.model.dimension()
    }

    /// The model-to-world transform
    #[inline]
    pub fn transform(&self) -> &HomogeneousMatrix {
        &self.transform
    }

    #[inline]
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Replace the transform and mark it as dirty
    pub fn set_transform(&mut self, transform: HomogeneousMatrix) -> Result<(), GeometryError> {
        if transform.dimension() != self.dimension() {
            return Err(GeometryError::DimensionMismatch {
                expected: self.dimension() + 1,
                found: transform.side(),
            });
        }
        self.transform = transform;
        self.mark_dirty(DirtyFlags::TRANSFORM);
        Ok(())
    }

    /// Replace the model and mark it as dirty
    pub fn set_model(&mut self, model: Arc<Polytope>) -> Result<(), GeometryError> {
        if model.dimension() != self.dimension() {
            return Err(GeometryError::DimensionMismatch {
                expected: self.dimension(),
                found: model.dimension(),
            });
        }
        self.model = model;
        self.mark_dirty(DirtyFlags::MODEL);
        Ok(())
    }

    /// Advance this entity by `dt` seconds
    ///
    /// Piloted entities first apply their controller's rotations (about their
    /// own origin) and thrust, then every moving entity is translated by
    /// `velocity * dt` in world space.
    pub fn update(&mut self, dt: f64) -> Result<(), GeometryError> {
        let dimension = self.dimension();
        let mut transform = self.transform.clone();

        // Nothing is written back until every fallible step has succeeded
        let velocity = match &mut self.motion {
            Motion::Static => return Ok(()),
            Motion::Kinetic { velocity } => velocity.clone(),
            Motion::Piloted { controller, velocity } => {
                let command = controller.command(dt);
                let mut next = velocity.clone();
                if let Some(thrust) = &command.thrust {
                    if thrust.len() != dimension {
                        return Err(GeometryError::DimensionMismatch {
                            expected: dimension,
                            found: thrust.len(),
                        });
                    }
                    for (v, a) in next.iter_mut().zip(thrust) {
                        *v += a * dt;
                    }
                }
                for r in &command.rotations {
                    let rotation = HomogeneousMatrix::rotation(dimension, r.angle, r.axis_i, r.axis_j)?;
                    transform = transform.compose(&rotation)?;
                }
                next
            }
        };

        let step: Vec<f64> = velocity.iter().map(|v| v * dt).collect();
        let transform = HomogeneousMatrix::translation(&step)?.compose(&transform)?;

        if let Motion::Piloted { velocity: current, .. } = &mut self.motion {
            *current = velocity;
        }
        self.transform = transform;
        self.mark_dirty(DirtyFlags::TRANSFORM);
        Ok(())
    }

    // --- Dirty tracking methods ---

    /// Check if this entity has any dirty flags set
    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Get the current dirty flags
    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    /// Mark this entity as dirty with the given flags
    #[inline]
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    /// Clear all dirty flags
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }
}
