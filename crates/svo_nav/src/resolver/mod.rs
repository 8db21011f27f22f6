//! Position resolver: world position -> octree link.
//!
//! # Algorithm
//!
//! Starting at the coarsest layer with scan offset 0:
//!
//! 1. **Locate**: truncate `(position - z_origin) / voxel_size(layer)` to a
//!    grid coordinate and Morton-encode it
//! 2. **Search**: find the node with that code, scanning forward from the
//!    offset inherited from the parent (or binary search)
//! 3. **Undivided node**: the node is the answer
//! 4. **Layer 0 with leaf**: map the position into the 4x4x4 leaf block and
//!    test the occupancy bit
//! 5. **Finer child**: continue at the child's layer and node offset
//!
//! Every failure is an ordinary [`ResolveError`] value; nothing on this path
//! panics. The resolver holds no state besides its configuration, so one
//! instance can be shared by any number of threads.

pub mod config;
pub mod error;
pub mod stats;

// Re-exports
pub use config::{LeafCoordMode, ResolverConfig, ScanStrategy};
pub use error::ResolveError;
pub use stats::ResolveStats;

use glam::{IVec3, UVec3, Vec3};
use rayon::prelude::*;

use crate::constants::{LEAF_SUBVOXEL_SCALE, MAX_LAYERS, MAX_LEAF_COORD};
use crate::morton::{self, MortonCode};
use crate::octree::{Link, Node};
use crate::volume::Volume;

/// Resolve `position` with the default configuration.
#[inline]
pub fn resolve<V: Volume + ?Sized>(position: Vec3, volume: &V) -> Result<Link, ResolveError> {
  PositionResolver::default().resolve(position, volume)
}

/// Grid coordinate of `position` at `layer`, truncated toward zero.
///
/// Truncation maps points up to one voxel below the minimum corner onto
/// cell 0, so callers must test containment first.
#[inline]
pub fn volume_xyz<V: Volume + ?Sized>(position: Vec3, volume: &V, layer: usize) -> IVec3 {
  let local = position - volume.z_origin();
  (local / volume.voxel_size(layer)).as_ivec3()
}

/// Stateless position-to-link resolver.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionResolver {
  config: ResolverConfig,
}

impl PositionResolver {
  pub fn new(config: ResolverConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &ResolverConfig {
    &self.config
  }

  /// Resolve a world position to the tightest navigable link containing it.
  #[inline]
  pub fn resolve<V: Volume + ?Sized>(&self, position: Vec3, volume: &V) -> Result<Link, ResolveError> {
    let mut stats = ResolveStats::default();
    self.descend(position, volume, &mut stats)
  }

  /// Resolve and report how much work the descent did.
  pub fn resolve_with_stats<V: Volume + ?Sized>(
    &self,
    position: Vec3,
    volume: &V,
  ) -> (Result<Link, ResolveError>, ResolveStats) {
    let mut stats = ResolveStats::default();
    let result = self.descend(position, volume, &mut stats);
    (result, stats)
  }

  /// Resolve many positions in parallel. Results keep the input order.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "resolver::resolve_batch", fields(count = positions.len()))
  )]
  pub fn resolve_batch<V: Volume + Sync + ?Sized>(
    &self,
    positions: &[Vec3],
    volume: &V,
  ) -> Vec<Result<Link, ResolveError>> {
    positions
      .par_iter()
      .map(|&position| self.resolve(position, volume))
      .collect()
  }

  fn descend<V: Volume + ?Sized>(
    &self,
    position: Vec3,
    volume: &V,
    stats: &mut ResolveStats,
  ) -> Result<Link, ResolveError> {
    if !volume.encompasses_point(position) {
      return Err(ResolveError::OutOfBounds { position });
    }

    let num_layers = volume.num_layers();
    if num_layers > MAX_LAYERS {
      return Err(ResolveError::TooManyLayers {
        num_layers,
        max: MAX_LAYERS,
      });
    }

    let Some(mut layer_index) = num_layers.checked_sub(1) else {
      return Err(ResolveError::StructuralMiss { layer: 0, code: 0 });
    };
    let mut offset = 0usize;

    loop {
      stats.layers_visited += 1;
      let layer = volume.layer(layer_index);
      let code = layer_code(position, volume, layer_index)?;

      let Some(node_index) = self.find_node(layer, code, offset, stats) else {
        #[cfg(feature = "tracing")]
        tracing::warn!(layer = layer_index, code, "no node for position, octree has a gap");
        return Err(ResolveError::StructuralMiss {
          layer: layer_index,
          code,
        });
      };

      let node = &layer[node_index];
      let Some(child) = node.first_child else {
        return Ok(Link::node(layer_index as u8, node_index as u32));
      };

      if layer_index == 0 {
        return self.resolve_leaf(position, volume, node, node_index as u32, child.node_index, stats);
      }

      // Children must live in a finer layer or the descent would not end.
      let child_layer = usize::from(child.layer_index);
      if child_layer >= layer_index {
        return Err(ResolveError::StructuralMiss {
          layer: child_layer,
          code,
        });
      }

      layer_index = child_layer;
      offset = child.node_index as usize;
    }
  }

  /// Index of the node with `code`, or `None` if the layer has no such node.
  fn find_node(
    &self,
    layer: &[Node],
    code: MortonCode,
    offset: usize,
    stats: &mut ResolveStats,
  ) -> Option<usize> {
    match self.config.scan_strategy {
      ScanStrategy::ForwardScan => {
        let candidates = layer.get(offset..)?;
        for (i, node) in candidates.iter().enumerate() {
          stats.nodes_examined += 1;
          if node.code == code {
            return Some(offset + i);
          }
          // Sorted layer: the target cannot appear later.
          if node.code > code {
            return None;
          }
        }
        None
      }
      ScanStrategy::BinarySearch => {
        stats.nodes_examined += (usize::BITS - layer.len().leading_zeros()) as usize;
        layer.binary_search_by_key(&code, |node| node.code).ok()
      }
    }
  }

  fn resolve_leaf<V: Volume + ?Sized>(
    &self,
    position: Vec3,
    volume: &V,
    node: &Node,
    node_index: u32,
    leaf_index: u32,
    stats: &mut ResolveStats,
  ) -> Result<Link, ResolveError> {
    stats.leaf_tested = true;

    let leaf = volume.leaf_node(leaf_index).ok_or(ResolveError::MissingLeaf {
      node_index,
      leaf_index,
    })?;

    let voxel_size = volume.voxel_size(0);
    let node_min = volume.node_position(0, node.code) - Vec3::splat(voxel_size * 0.5);
    let local = position - node_min;
    let coord = self.leaf_coord(local, voxel_size * LEAF_SUBVOXEL_SCALE, node_index)?;

    let subnode = morton::encode_uvec3(coord);
    if leaf.is_blocked(subnode) {
      return Err(ResolveError::Blocked {
        node_index,
        subnode_index: subnode as u8,
      });
    }

    Ok(Link::subnode(node_index, subnode as u8))
  }

  /// Leaf-local coordinate of a node-local offset.
  fn leaf_coord(&self, local: Vec3, sub_size: f32, node_index: u32) -> Result<UVec3, ResolveError> {
    let max = IVec3::splat(MAX_LEAF_COORD as i32);

    match self.config.leaf_coord_mode {
      LeafCoordMode::Floor => {
        // Clamp absorbs rounding error on the node faces.
        let coord = (local / sub_size).floor().as_ivec3();
        Ok(coord.clamp(IVec3::ZERO, max).as_uvec3())
      }
      LeafCoordMode::HalfBiasedRound => {
        let biased = |d: f32| (f64::from(d / sub_size) + 0.5).round() as i32;
        let coord = IVec3::new(biased(local.x), biased(local.y), biased(local.z));
        if coord.cmplt(IVec3::ZERO).any() || coord.cmpgt(max).any() {
          return Err(ResolveError::SubvoxelOutOfRange { node_index, coord });
        }
        Ok(coord.as_uvec3())
      }
    }
  }
}

/// Morton code of the cell containing `position` at `layer`.
#[inline]
fn layer_code<V: Volume + ?Sized>(
  position: Vec3,
  volume: &V,
  layer: usize,
) -> Result<MortonCode, ResolveError> {
  let coord = volume_xyz(position, volume, layer);
  if coord.cmplt(IVec3::ZERO).any() {
    return Err(ResolveError::OutOfBounds { position });
  }
  let coord = coord.as_uvec3();
  morton::try_encode(coord.x, coord.y, coord.z).ok_or(ResolveError::OutOfBounds { position })
}
