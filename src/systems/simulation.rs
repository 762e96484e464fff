//! Simulation system
//!
//! Advances the world and the camera by one fixed step per tick. The loop is
//! headless, so time comes from the configured tick interval rather than a
//! wall clock.

use polyview_core::World;
use polyview_math::GeometryError;
use polyview_render::OrbitCamera;

/// Result of a simulation update
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationResult {
    /// Tick number, starting at 1
    pub tick: u64,
    /// Whether any entity changed during this tick
    pub geometry_dirty: bool,
}

/// Fixed-step driver for the world and camera
pub struct SimulationSystem {
    tick_interval: f64,
    ticks: u64,
}

impl SimulationSystem {
    /// Create a simulation system advancing `tick_interval` seconds per tick
    pub fn new(tick_interval: f64) -> Self {
        Self {
            tick_interval,
            ticks: 0,
        }
    }

    /// Run one simulation tick
    ///
    /// 1. Advance every entity by the tick interval
    /// 2. Advance the orbit camera by one step
    pub fn update(
        &mut self,
        world: &mut World,
        camera: &mut OrbitCamera,
    ) -> Result<SimulationResult, GeometryError> {
        world.update(self.tick_interval)?;
        camera.tick()?;
        self.ticks += 1;

        Ok(SimulationResult {
            tick: self.ticks,
            geometry_dirty: world.has_dirty_entities(),
        })
    }

    /// Simulated seconds elapsed
    pub fn elapsed(&self) -> f64 {
        self.ticks as f64 * self.tick_interval
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick_interval(&self) -> f64 {
        self.tick_interval
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyview_core::{Entity, Motion, PolytopeCache};
    use polyview_math::TopologyKind;

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert_eq!(sim.ticks(), 0);
        assert!((sim.tick_interval() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_update_advances_world_and_camera() {
        let mut cache = PolytopeCache::new();
        let mut world = World::new();
        world.add_entity(
            Entity::new(cache.get_or_generate(3, TopologyKind::Edges).unwrap())
                .unwrap()
                .with_motion(Motion::Kinetic { velocity: vec![1.0, 0.0, 0.0] })
                .unwrap(),
        );
        world.clear_all_dirty();
        let mut camera = OrbitCamera::new(&[0.5, 0.5, 0.5], 0.003, 0, 1).unwrap();
        let mut sim = SimulationSystem::new(0.5);

        let result = sim.update(&mut world, &mut camera).unwrap();
        assert_eq!(result, SimulationResult { tick: 1, geometry_dirty: true });
        assert_eq!(camera.ticks(), 1);

        sim.update(&mut world, &mut camera).unwrap();
        assert_eq!(sim.ticks(), 2);
        assert!((sim.elapsed() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_static_world_is_clean() {
        let mut cache = PolytopeCache::new();
        let mut world = World::new();
        world.add_entity(Entity::new(cache.get_or_generate(3, TopologyKind::Edges).unwrap()).unwrap());
        world.clear_all_dirty();
        let mut camera = OrbitCamera::fixed(3).unwrap();

        let result = SimulationSystem::default().update(&mut world, &mut camera).unwrap();
        assert!(!result.geometry_dirty);
    }
}
