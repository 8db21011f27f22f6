//! ResolveError - why a position did not resolve to a navigable link.

use glam::{IVec3, Vec3};
use thiserror::Error;

use crate::morton::MortonCode;

/// Failure reasons of [`resolve`](super::resolve).
///
/// `OutOfBounds` and `Blocked` are ordinary answers about the world;
/// `StructuralMiss`, `TooManyLayers` and `MissingLeaf` mean the tree is
/// inconsistent.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ResolveError {
  #[error("position {position} lies outside the volume")]
  OutOfBounds { position: Vec3 },

  #[error("no node with code {code:#x} in layer {layer}")]
  StructuralMiss { layer: usize, code: MortonCode },

  #[error("octree has {num_layers} layers, at most {max} can be resolved")]
  TooManyLayers { num_layers: usize, max: usize },

  #[error("layer 0 node {node_index} references missing leaf {leaf_index}")]
  MissingLeaf { node_index: u32, leaf_index: u32 },

  #[error("sub-voxel {subnode_index} of layer 0 node {node_index} is blocked")]
  Blocked { node_index: u32, subnode_index: u8 },

  #[error("leaf coordinate {coord} of layer 0 node {node_index} is outside the 4x4x4 block")]
  SubvoxelOutOfRange { node_index: u32, coord: IVec3 },
}

impl ResolveError {
  /// The position is inside the volume but the cell is impassable.
  pub fn is_blocked(&self) -> bool {
    matches!(self, ResolveError::Blocked { .. })
  }

  /// The tree is inconsistent (gaps or dangling references).
  pub fn is_data_integrity(&self) -> bool {
    matches!(
      self,
      ResolveError::StructuralMiss { .. }
        | ResolveError::TooManyLayers { .. }
        | ResolveError::MissingLeaf { .. }
    )
  }
}
