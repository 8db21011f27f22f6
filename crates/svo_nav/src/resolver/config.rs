//! ResolverConfig - lookup strategy and leaf coordinate mapping.

/// How a layer is searched for the node with a given Morton code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanStrategy {
  /// Linear scan starting at the child offset carried down from the parent.
  ///
  /// Relies on the sorted-layer and first-child invariants that
  /// `OctreeData::validate` checks. Stops early once codes pass the target.
  #[default]
  ForwardScan,

  /// Binary search over the whole layer. Needs only sorted layers.
  BinarySearch,
}

/// How a position inside a layer 0 node maps to a leaf-local coordinate.
///
/// `q = voxel_size(0) / 4` is the sub-voxel edge, `d` the offset of the
/// position from the node's minimum corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeafCoordMode {
  /// `floor(d / q)`, clamped to `0..=3`.
  ///
  /// Sub-voxel `i` owns `[i * q, (i + 1) * q)`, and the center of a
  /// sub-voxel maps back to that sub-voxel.
  #[default]
  Floor,

  /// `round(d / q + 0.5)`, the legacy mapping.
  ///
  /// Equivalent to `floor(d / q) + 1`: sub-voxel 0 is never addressed and
  /// positions in the last sub-voxel produce coordinate 4, which is reported
  /// as `ResolveError::SubvoxelOutOfRange`.
  HalfBiasedRound,
}

/// Configuration for position resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolverConfig {
  /// Layer search strategy.
  pub scan_strategy: ScanStrategy,

  /// Leaf coordinate mapping.
  pub leaf_coord_mode: LeafCoordMode,
}

impl ResolverConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_scan_strategy(mut self, strategy: ScanStrategy) -> Self {
    self.scan_strategy = strategy;
    self
  }

  pub fn with_leaf_coord_mode(mut self, mode: LeafCoordMode) -> Self {
    self.leaf_coord_mode = mode;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = ResolverConfig::default();
    assert_eq!(config.scan_strategy, ScanStrategy::ForwardScan);
    assert_eq!(config.leaf_coord_mode, LeafCoordMode::Floor);
  }

  #[test]
  fn test_config_builder() {
    let config = ResolverConfig::new()
      .with_scan_strategy(ScanStrategy::BinarySearch)
      .with_leaf_coord_mode(LeafCoordMode::HalfBiasedRound);

    assert_eq!(config.scan_strategy, ScanStrategy::BinarySearch);
    assert_eq!(config.leaf_coord_mode, LeafCoordMode::HalfBiasedRound);
  }
}
