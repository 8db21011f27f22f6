//! Volume - the bounded region that owns an octree and answers geometric
//! queries about it.
//!
//! The [`Volume`] trait is the read-only contract the resolver consumes.
//! [`NavVolume`] is the reference implementation: an axis-aligned box, a
//! layer 0 voxel size, and a shared [`OctreeData`] snapshot.
//!
//! # Coordinate Mapping
//!
//! ```text
//! z-order origin = origin - extent          (where code 0 starts)
//! voxel_size(L)  = voxel_size(0) * 2^L
//! node center    = z-order origin + decode(code) * voxel_size(L) + voxel_size(L) / 2
//! ```

use std::sync::Arc;

use glam::{UVec3, Vec3};

use crate::constants::LEAF_SUBVOXEL_SCALE;
use crate::morton::{self, MortonCode};
use crate::octree::{Aabb3, LeafNode, Link, Node, OctreeData, OctreeSnapshot};

/// Read-only services a volume provides to the resolver.
///
/// Layer 0 is the finest node layer; `num_layers() - 1` is the coarsest.
pub trait Volume {
  /// Containment test. Boundary inclusivity is the implementation's choice.
  fn encompasses_point(&self, point: Vec3) -> bool;

  /// Total number of node layers (at least 1 for a usable volume).
  fn num_layers(&self) -> usize;

  /// Nodes of layer `index`, sorted ascending by Morton code.
  fn layer(&self, index: usize) -> &[Node];

  /// Leaf occupancy record `index`.
  fn leaf_node(&self, index: u32) -> Option<&LeafNode>;

  /// World-space edge length of a voxel at `layer`.
  fn voxel_size(&self, layer: usize) -> f32;

  /// Center of the volume.
  fn origin(&self) -> Vec3;

  /// Half-extent of the volume.
  fn extent(&self) -> Vec3;

  /// World position where Morton code 0 starts (the minimum corner).
  #[inline]
  fn z_origin(&self) -> Vec3 {
    self.origin() - self.extent()
  }

  /// World-space center of the node with `code` at `layer`.
  #[inline]
  fn node_position(&self, layer: usize, code: MortonCode) -> Vec3 {
    let voxel_size = self.voxel_size(layer);
    let coord = morton::decode_uvec3(code).as_vec3();
    self.z_origin() + coord * voxel_size + Vec3::splat(voxel_size * 0.5)
  }

  /// World-space center of the unit a link addresses.
  ///
  /// For a layer 0 node that owns a leaf record this is the center of the
  /// addressed sub-voxel; otherwise the node center. Returns `None` when the
  /// link points past the end of its layer.
  fn link_position(&self, link: Link) -> Option<Vec3> {
    let layer = usize::from(link.layer_index);
    let node = self.layer(layer).get(link.node_index as usize)?;
    let center = self.node_position(layer, node.code);

    if layer != 0 || !node.has_children() {
      return Some(center);
    }

    let voxel_size = self.voxel_size(0);
    let sub_size = voxel_size * LEAF_SUBVOXEL_SCALE;
    let node_min = center - Vec3::splat(voxel_size * 0.5);
    let sub_coord = morton::decode_uvec3(u64::from(link.subnode_index)).as_vec3();
    Some(node_min + sub_coord * sub_size + Vec3::splat(sub_size * 0.5))
  }

  /// Every blocked leaf sub-voxel, with its world-space box.
  fn blocked_boxes(&self) -> Vec<VoxelBox> {
    let sub_size = self.voxel_size(0) * LEAF_SUBVOXEL_SCALE;
    let mut boxes = Vec::new();

    for (node_index, node) in self.layer(0).iter().enumerate() {
      let Some(leaf) = node
        .first_child
        .and_then(|child| self.leaf_node(child.node_index))
      else {
        continue;
      };

      for subnode in leaf.blocked_indices() {
        let link = Link::subnode(node_index as u32, subnode as u8);
        if let Some(center) = self.link_position(link) {
          boxes.push(VoxelBox {
            link,
            center,
            half_size: sub_size * 0.5,
          });
        }
      }
    }

    boxes
  }
}

/// A blocked sub-voxel, for debug visualisation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoxelBox {
  /// Address of the sub-voxel.
  pub link: Link,
  /// World-space center.
  pub center: Vec3,
  /// Half of the sub-voxel edge length.
  pub half_size: f32,
}

/// Geometry of a navigation volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeConfig {
  /// Center of the volume.
  pub origin: Vec3,
  /// Half-extent of the volume.
  pub extent: Vec3,
  /// Edge length of a layer 0 voxel in world units.
  pub voxel_size: f32,
}

impl VolumeConfig {
  pub fn new(origin: Vec3, extent: Vec3, voxel_size: f32) -> Self {
    Self {
      origin,
      extent,
      voxel_size,
    }
  }

  /// Cube of edge `size` whose minimum corner is `min`.
  pub fn from_min_corner(min: Vec3, size: f32, voxel_size: f32) -> Self {
    let half = Vec3::splat(size * 0.5);
    Self::new(min + half, half, voxel_size)
  }

  /// Cube sized so that an octree of `num_layers` layers has a 2x2x2
  /// coarsest grid.
  pub fn for_layers(min: Vec3, num_layers: usize, voxel_size: f32) -> Self {
    let coarsest = voxel_size * layer_scale(num_layers.saturating_sub(1));
    Self::from_min_corner(min, coarsest * 2.0, voxel_size)
  }

  /// Calculate voxel size at given layer.
  /// voxel_at_layer = voxel_size * 2^layer
  #[inline]
  pub fn get_voxel_size(&self, layer: usize) -> f32 {
    self.voxel_size * layer_scale(layer)
  }

  /// Cells per axis at `layer` (rounded down).
  pub fn grid_size(&self, layer: usize) -> UVec3 {
    (self.extent * 2.0 / self.get_voxel_size(layer)).as_uvec3()
  }

  pub fn bounds(&self) -> Aabb3 {
    Aabb3::from_center_half_extents(self.origin, self.extent)
  }
}

/// `2^layer` as a float. Saturates to infinity instead of overflowing.
#[inline]
fn layer_scale(layer: usize) -> f32 {
  2f32.powi(i32::try_from(layer).unwrap_or(i32::MAX))
}

/// Reference volume: configuration plus a shared octree snapshot.
///
/// Containment is half-open (`min <= p < max`), so every contained point
/// maps to a cell inside the grid.
#[derive(Clone, Debug)]
pub struct NavVolume {
  config: VolumeConfig,
  bounds: Aabb3,
  data: Arc<OctreeData>,
}

impl NavVolume {
  pub fn new(config: VolumeConfig, data: impl Into<Arc<OctreeData>>) -> Self {
    Self {
      config,
      bounds: config.bounds(),
      data: data.into(),
    }
  }

  /// Volume over a published snapshot.
  pub fn from_snapshot(config: VolumeConfig, snapshot: &OctreeSnapshot) -> Self {
    Self::new(config, Arc::clone(&snapshot.data))
  }

  /// Same geometry over a different tree.
  pub fn with_data(&self, data: impl Into<Arc<OctreeData>>) -> Self {
    Self::new(self.config, data)
  }

  pub fn config(&self) -> &VolumeConfig {
    &self.config
  }

  pub fn bounds(&self) -> &Aabb3 {
    &self.bounds
  }

  pub fn data(&self) -> &Arc<OctreeData> {
    &self.data
  }
}

impl Volume for NavVolume {
  #[inline]
  fn encompasses_point(&self, point: Vec3) -> bool {
    self.bounds.contains_point_half_open(point)
  }

  #[inline]
  fn num_layers(&self) -> usize {
    self.data.layer_count()
  }

  #[inline]
  fn layer(&self, index: usize) -> &[Node] {
    self.data.layer(index)
  }

  #[inline]
  fn leaf_node(&self, index: u32) -> Option<&LeafNode> {
    self.data.leaf(index)
  }

  #[inline]
  fn voxel_size(&self, layer: usize) -> f32 {
    self.config.get_voxel_size(layer)
  }

  #[inline]
  fn origin(&self) -> Vec3 {
    self.config.origin
  }

  #[inline]
  fn extent(&self) -> Vec3 {
    self.config.extent
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
