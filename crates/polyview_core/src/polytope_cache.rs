//! Polytope caching
//!
//! Hypercube geometry is a pure function of (dimension, topology kind), so
//! repeated requests can share one `Arc<Polytope>`. The cache is an ordinary
//! value owned by whoever needs it; there is no process-wide instance.
//!
//! # Example
//!
//! ```
//! use polyview_core::PolytopeCache;
//! use polyview_math::TopologyKind;
//!
//! let mut cache = PolytopeCache::new();
//! let a = cache.get_or_generate(4, TopologyKind::Edges).unwrap();
//! let b = cache.get_or_generate(4, TopologyKind::Edges).unwrap();
//! assert!(std::sync::Arc::ptr_eq(&a, &b));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use polyview_math::{generate_polytope, GeometryError, Polytope, TopologyKind};

/// Memo of generated hypercubes keyed by dimension and topology kind
#[derive(Default)]
pub struct PolytopeCache {
    polytopes: HashMap<(usize, TopologyKind), Arc<Polytope>>,
}

impl PolytopeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached hypercube, generating it on first request
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidDimension`] when `dimension` is 0. Failed
    /// requests are not cached.
    pub fn get_or_generate(
        &mut self,
        dimension: usize,
        kind: TopologyKind,
    ) -> Result<Arc<Polytope>, GeometryError> {
        if let Some(polytope) = self.polytopes.get(&(dimension, kind)) {
            return Ok(Arc::clone(polytope));
        }

        let polytope = Arc::new(generate_polytope(dimension, kind)?);
        log::debug!("Cached {}-cube ({:?})", dimension, kind);
        self.polytopes.insert((dimension, kind), Arc::clone(&polytope));
        Ok(polytope)
    }

    /// Check whether a hypercube is already cached
    pub fn contains(&self, dimension: usize, kind: TopologyKind) -> bool {
        self.polytopes.contains_key(&(dimension, kind))
    }

    /// Number of cached polytopes
    pub fn len(&self) -> usize {
        self.polytopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polytopes.is_empty()
    }

    /// Drop every cached polytope (outstanding `Arc`s stay valid)
    pub fn clear(&mut self) {
        self.polytopes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_new_is_empty() {
        let cache = PolytopeCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_cache_reuses_polytope() {
        let mut cache = PolytopeCache::new();
        let a = cache.get_or_generate(3, TopologyKind::Faces).unwrap();
        let b = cache.get_or_generate(3, TopologyKind::Faces).unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(3, TopologyKind::Faces));
    }

    #[test]
    fn test_cache_keys_by_kind() {
        let mut cache = PolytopeCache::new();
        let edges = cache.get_or_generate(3, TopologyKind::Edges).unwrap();
        let faces = cache.get_or_generate(3, TopologyKind::Faces).unwrap();

        assert!(!Arc::ptr_eq(&edges, &faces));
        assert_eq!(edges.edges().len(), 12);
        assert_eq!(faces.faces().len(), 6);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_error_not_stored() {
        let mut cache = PolytopeCache::new();
        assert_eq!(
            cache.get_or_generate(0, TopologyKind::Edges).err(),
            Some(GeometryError::InvalidDimension(0))
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_clear_keeps_handles() {
        let mut cache = PolytopeCache::new();
        let held = cache.get_or_generate(2, TopologyKind::Edges).unwrap();
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(held.vertex_count(), 4);
    }
}
