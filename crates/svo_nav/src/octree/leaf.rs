//! LeafNode - occupancy mask of a 4x4x4 sub-voxel block.
//!
//! Bit `i` is set when the sub-voxel with Morton index `i` is blocked.

use crate::constants::{LEAF_GRID_SIZE, LEAF_SUBVOXELS};
use crate::morton;

/// 64-bit occupancy record owned by a subdivided layer 0 node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct LeafNode {
  voxel_grid: u64,
}

impl LeafNode {
  /// All sub-voxels free.
  pub const EMPTY: Self = Self { voxel_grid: 0 };

  /// All sub-voxels blocked.
  pub const FULL: Self = Self {
    voxel_grid: u64::MAX,
  };

  /// Create from a raw mask (bit per Morton index).
  pub const fn from_bits(voxel_grid: u64) -> Self {
    Self { voxel_grid }
  }

  /// Raw mask.
  #[inline]
  pub const fn bits(&self) -> u64 {
    self.voxel_grid
  }

  /// Whether the sub-voxel with Morton index `index` is blocked.
  ///
  /// Indices outside the block (>= 64) are never blocked.
  #[inline]
  pub fn is_blocked(&self, index: u64) -> bool {
    index < LEAF_SUBVOXELS as u64 && (self.voxel_grid >> index) & 1 == 1
  }

  /// Whether the sub-voxel at leaf-local coordinate `(x, y, z)` is blocked.
  #[inline]
  pub fn is_blocked_at(&self, x: u32, y: u32, z: u32) -> bool {
    x < LEAF_GRID_SIZE
      && y < LEAF_GRID_SIZE
      && z < LEAF_GRID_SIZE
      && self.is_blocked(morton::encode(x, y, z))
  }

  /// Mark a sub-voxel blocked. Out-of-range indices are ignored.
  #[inline]
  pub fn set_blocked(&mut self, index: u64) {
    if index < LEAF_SUBVOXELS as u64 {
      self.voxel_grid |= 1u64 << index;
    }
  }

  /// Mark a sub-voxel free. Out-of-range indices are ignored.
  #[inline]
  pub fn clear(&mut self, index: u64) {
    if index < LEAF_SUBVOXELS as u64 {
      self.voxel_grid &= !(1u64 << index);
    }
  }

  pub fn is_completely_blocked(&self) -> bool {
    self.voxel_grid == u64::MAX
  }

  pub fn is_completely_free(&self) -> bool {
    self.voxel_grid == 0
  }

  /// Number of blocked sub-voxels.
  pub fn blocked_count(&self) -> u32 {
    self.voxel_grid.count_ones()
  }

  /// Morton indices of the blocked sub-voxels, ascending.
  pub fn blocked_indices(&self) -> impl Iterator<Item = u64> + '_ {
    (0..LEAF_SUBVOXELS as u64).filter(move |&i| self.is_blocked(i))
  }
}

impl From<u64> for LeafNode {
  fn from(voxel_grid: u64) -> Self {
    Self::from_bits(voxel_grid)
  }
}

#[cfg(test)]
#[path = "leaf_test.rs"]
mod leaf_test;
