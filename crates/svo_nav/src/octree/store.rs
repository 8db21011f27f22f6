//! OctreeStore - atomically published, immutable octree snapshots.
//!
//! Resolvers read from an `Arc<OctreeData>` they cloned out of the store, so
//! a rebuild never mutates data that a query is walking. Publishing swaps the
//! whole snapshot under a short write lock and bumps the generation.

use std::sync::{Arc, PoisonError, RwLock};

use super::{OctreeData, OctreeError};

/// Immutable octree data tagged with the generation it was published as.
#[derive(Clone, Debug)]
pub struct OctreeSnapshot {
  /// Publication counter, starting at 0 for the initial data.
  pub generation: u64,
  /// Shared, read-only tree.
  pub data: Arc<OctreeData>,
}

/// Holder of the current octree snapshot.
///
/// Cheap to read from many threads; every `publish` replaces the snapshot
/// as a unit, so readers see either the old tree or the new one.
pub struct OctreeStore {
  current: RwLock<OctreeSnapshot>,
}

impl OctreeStore {
  /// Create a store holding already-validated `data` as generation 0.
  pub fn new(data: OctreeData) -> Result<Self, OctreeError> {
    data.validate()?;
    Ok(Self {
      current: RwLock::new(OctreeSnapshot {
        generation: 0,
        data: Arc::new(data),
      }),
    })
  }

  /// Current snapshot. Holding it keeps that tree alive across publishes.
  pub fn snapshot(&self) -> OctreeSnapshot {
    self
      .current
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .clone()
  }

  /// Current generation.
  pub fn generation(&self) -> u64 {
    self
      .current
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .generation
  }

  /// Validate and publish a rebuilt tree, returning its generation.
  ///
  /// Invalid data is rejected and the current snapshot stays in place.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::publish"))]
  pub fn publish(&self, data: OctreeData) -> Result<u64, OctreeError> {
    data.validate()?;
    let data = Arc::new(data);

    let mut current = self
      .current
      .write()
      .unwrap_or_else(PoisonError::into_inner);
    let generation = current.generation + 1;
    *current = OctreeSnapshot { generation, data };

    #[cfg(feature = "tracing")]
    tracing::debug!(generation, "published octree snapshot");

    Ok(generation)
  }
}
