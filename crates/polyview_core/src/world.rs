//! World container for entities
//!
//! The World owns every entity and advances them once per tick.

use polyview_math::GeometryError;
use slotmap::{new_key_type, SlotMap};

use crate::Entity;

new_key_type! {
    /// Key to an entity in the world
    ///
    /// Generational: once an entity is destroyed its key returns None, even if
    /// the slot is reused by a later entity.
    pub struct EntityKey;
}

/// The world containing all entities
pub struct World {
    entities: SlotMap<EntityKey, Entity>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
        }
    }

    /// Create a world with pre-allocated capacity for entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Add an entity to the world, returning its key
    pub fn add_entity(&mut self, entity: Entity) -> EntityKey {
        self.entities.insert(entity)
    }

    /// Remove an entity from the world and return it
    pub fn destroy_entity(&mut self, key: EntityKey) -> Option<Entity> {
        self.entities.remove(key)
    }

    /// Get a reference to an entity by key
    pub fn get_entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Get a mutable reference to an entity by key
    pub fn get_entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    /// Find the first entity with the given name
    pub fn get_by_name(&self, name: &str) -> Option<(EntityKey, &Entity)> {
        self.entities
            .iter()
            .find(|(_, e)| e.name.as_deref() == Some(name))
    }

    /// Get the number of entities
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Check if the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advance every entity by `dt` seconds
    ///
    /// Stops at the first entity whose update fails.
    pub fn update(&mut self, dt: f64) -> Result<(), GeometryError> {
        for (key, entity) in &mut self.entities {
            entity.update(dt).map_err(|e| {
                log::warn!("Entity {:?} ({:?}) failed to update: {}", key, entity.name, e);
                e
            })?;
        }
        Ok(())
    }

    /// Check whether any entity changed since the last [`clear_all_dirty`](Self::clear_all_dirty)
    pub fn has_dirty_entities(&self) -> bool {
        self.entities.values().any(|e| e.is_dirty())
    }

    /// Clear the dirty flags of every entity
    pub fn clear_all_dirty(&mut self) {
        for entity in self.entities.values_mut() {
            entity.clear_dirty();
        }
    }

    /// Clear all entities from the world
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterate over all entities mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }

    /// Iterate over keys and entities
    pub fn iter_with_keys(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities.iter()
    }
}
