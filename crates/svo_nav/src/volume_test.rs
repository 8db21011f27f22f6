use super::*;
use crate::test_utils::{coarse_open_cell, multi_level, open_volume, single_leaf};

// =========================================================================
// VolumeConfig
// =========================================================================

#[test]
fn test_voxel_size_doubles_per_layer() {
  let config = VolumeConfig::new(Vec3::ZERO, Vec3::splat(8.0), 0.5);
  assert_eq!(config.get_voxel_size(0), 0.5);
  assert_eq!(config.get_voxel_size(1), 1.0);
  assert_eq!(config.get_voxel_size(4), 8.0);
}

#[test]
fn test_from_min_corner() {
  let config = VolumeConfig::from_min_corner(Vec3::new(-2.0, 0.0, 4.0), 8.0, 1.0);
  assert_eq!(config.origin, Vec3::new(2.0, 4.0, 8.0));
  assert_eq!(config.extent, Vec3::splat(4.0));
  assert_eq!(config.bounds().min, Vec3::new(-2.0, 0.0, 4.0));
}

/// Layers past the Morton range still give a size instead of overflowing.
#[test]
fn test_voxel_size_of_deep_layers() {
  let config = VolumeConfig::new(Vec3::ZERO, Vec3::splat(8.0), 1.0);
  assert_eq!(config.get_voxel_size(63), 2f32.powi(63));
  assert_eq!(config.get_voxel_size(70), 2f32.powi(70));
  assert_eq!(config.get_voxel_size(200), f32::INFINITY);

  let deep = VolumeConfig::for_layers(Vec3::ZERO, 80, 1.0);
  assert_eq!(deep.extent, Vec3::splat(2f32.powi(79)));
}

/// The coarsest layer of a `for_layers` volume is a 2x2x2 grid.
#[test]
fn test_for_layers_coarsest_grid_is_two() {
  for num_layers in 1..6 {
    let config = VolumeConfig::for_layers(Vec3::ZERO, num_layers, 0.25);
    assert_eq!(config.grid_size(num_layers - 1), UVec3::splat(2));
    assert_eq!(config.grid_size(0), UVec3::splat(1 << num_layers));
  }
}

// =========================================================================
// Volume queries
// =========================================================================

#[test]
fn test_half_open_containment() {
  let volume = coarse_open_cell();
  assert!(volume.encompasses_point(Vec3::ZERO));
  assert!(volume.encompasses_point(Vec3::splat(3.999)));
  assert!(!volume.encompasses_point(Vec3::splat(4.0)));
  assert!(!volume.encompasses_point(Vec3::new(1.0, -0.001, 1.0)));
}

#[test]
fn test_z_origin_is_min_corner() {
  let volume = open_volume(2, Vec3::new(-3.0, 1.0, 0.5));
  assert_eq!(volume.z_origin(), Vec3::new(-3.0, 1.0, 0.5));
}

#[test]
fn test_node_position_is_cell_center() {
  let volume = open_volume(3, Vec3::new(10.0, 0.0, -4.0));

  // Layer 2 (voxel 4), cell (1, 0, 1)
  let code = morton::encode(1, 0, 1);
  assert_eq!(volume.node_position(2, code), Vec3::new(16.0, 2.0, 2.0));

  // Layer 0 (voxel 1), cell (5, 2, 7)
  let code = morton::encode(5, 2, 7);
  assert_eq!(volume.node_position(0, code), Vec3::new(15.5, 2.5, 3.5));
}

#[test]
fn test_missing_layer_and_leaf() {
  let volume = coarse_open_cell();
  assert_eq!(volume.num_layers(), 2);
  assert!(volume.layer(0).is_empty());
  assert!(volume.layer(7).is_empty());
  assert!(volume.leaf_node(0).is_none());
}

#[test]
fn test_link_position_of_undivided_node_is_center() {
  let volume = coarse_open_cell();
  assert_eq!(volume.link_position(Link::node(1, 0)), Some(Vec3::splat(2.0)));
  assert_eq!(volume.link_position(Link::node(1, 1)), None);
}

#[test]
fn test_link_position_of_subnode() {
  let volume = single_leaf(LeafNode::EMPTY);
  let sub = morton::encode(0, 3, 1) as u8;
  let position = volume.link_position(Link::subnode(0, sub));
  assert_eq!(position, Some(Vec3::new(0.125, 0.875, 0.375)));
}

#[test]
fn test_blocked_boxes_lists_each_blocked_subvoxel() {
  let mut leaf = LeafNode::EMPTY;
  leaf.set_blocked(0);
  leaf.set_blocked(morton::encode(3, 3, 3));
  let volume = multi_level(leaf);

  let boxes = volume.blocked_boxes();
  assert_eq!(boxes.len(), 2);

  // Layer 0 node 7 (code 63) spans [3, 4)³.
  assert_eq!(boxes[0].link, Link::subnode(7, 0));
  assert_eq!(boxes[0].center, Vec3::splat(3.125));
  assert_eq!(boxes[0].half_size, 0.125);
  assert_eq!(boxes[1].link, Link::subnode(7, 63));
  assert_eq!(boxes[1].center, Vec3::splat(3.875));
}

#[test]
fn test_blocked_boxes_empty_for_open_volume() {
  assert!(open_volume(2, Vec3::ZERO).blocked_boxes().is_empty());
  assert!(coarse_open_cell().blocked_boxes().is_empty());
}

#[test]
fn test_with_data_keeps_geometry() {
  let volume = open_volume(2, Vec3::ZERO);
  let rebuilt = volume.with_data(OctreeData::build_subdivided(2, |_, _| false, |_| LeafNode::EMPTY));

  assert_eq!(rebuilt.config(), volume.config());
  assert!(rebuilt.layer(0).is_empty());
  assert_eq!(volume.layer(0).len(), 64);
}
