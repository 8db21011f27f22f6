//! Test fixtures: small hand-built trees and generated volumes.

use glam::Vec3;

use crate::morton::{self, MortonCode};
use crate::octree::{ChildLink, LeafNode, Node, OctreeData};
use crate::volume::{NavVolume, VolumeConfig};

// =============================================================================
// Hand-built scenarios
// =============================================================================

/// Two layers, layer 1 voxel size 4, one undivided node with code 0.
///
/// The volume is the single coarse cell spanning [0, 4)³.
pub fn coarse_open_cell() -> NavVolume {
  let data = OctreeData::from_parts(vec![Vec::new(), vec![Node::new(0)]], Vec::new())
    .expect("coarse cell tree is valid");
  NavVolume::new(VolumeConfig::from_min_corner(Vec3::ZERO, 4.0, 2.0), data)
}

/// One layer, voxel size 1, one node over [0, 1)³ owning `leaf`.
pub fn single_leaf(leaf: LeafNode) -> NavVolume {
  let data = OctreeData::from_parts(vec![vec![Node::with_child(0, ChildLink::leaf(0))]], vec![leaf])
    .expect("single leaf tree is valid");
  NavVolume::new(VolumeConfig::from_min_corner(Vec3::ZERO, 1.0, 1.0), data)
}

/// Three layers over [0, 4)³ with layer 0 voxel size 1.
///
/// Layer 2 code 0 -> layer 1 codes 0..8, of which code 7 (cell (1,1,1)) is
/// subdivided -> layer 0 codes 56..64, of which code 63 (cell (3,3,3)) owns
/// `leaf`. Every other node is undivided.
pub fn multi_level(leaf: LeafNode) -> NavVolume {
  let mut layer0: Vec<Node> = (56..64).map(Node::new).collect();
  layer0[7] = Node::with_child(63, ChildLink::leaf(0));

  let mut layer1: Vec<Node> = (0..8).map(Node::new).collect();
  layer1[7] = Node::with_child(7, ChildLink::new(0, 0));

  let layer2 = vec![Node::with_child(0, ChildLink::new(1, 0))];

  let data = OctreeData::from_parts(vec![layer0, layer1, layer2], vec![leaf])
    .expect("multi level tree is valid");
  NavVolume::new(VolumeConfig::from_min_corner(Vec3::ZERO, 4.0, 1.0), data)
}

// =============================================================================
// Generated volumes
// =============================================================================

/// Deterministic occupancy mask derived from a layer 0 code.
pub fn scrambled_leaf(code: MortonCode) -> LeafNode {
  let mut x = code.wrapping_add(0x9e37_79b9_7f4a_7c15);
  x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
  x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
  LeafNode::from_bits(x ^ (x >> 31))
}

/// Mixed tree: some nodes stop at every layer, some reach leaf level.
///
/// A node is subdivided when the low bit of its decoded x coordinate
/// differs from the low bit of its z coordinate, so undivided cells appear
/// at every resolution.
pub fn mixed_volume(num_layers: usize, origin_min: Vec3) -> NavVolume {
  let data = OctreeData::build_subdivided(
    num_layers,
    |_, code| {
      let (x, _, z) = morton::decode(code);
      (x ^ z) & 1 == 1 || code == 0
    },
    scrambled_leaf,
  );
  NavVolume::new(VolumeConfig::for_layers(origin_min, num_layers, 1.0), data)
}

/// Fully subdivided tree where every layer 0 node owns an empty leaf.
pub fn open_volume(num_layers: usize, origin_min: Vec3) -> NavVolume {
  let data = OctreeData::build_subdivided(num_layers, |_, _| true, |_| LeafNode::EMPTY);
  NavVolume::new(VolumeConfig::for_layers(origin_min, num_layers, 1.0), data)
}

/// Centers of a `steps`³ lattice of points strictly inside `[min, min + size)³`.
pub fn lattice(min: Vec3, size: f32, steps: u32) -> Vec<Vec3> {
  let step = size / steps as f32;
  let mut points = Vec::with_capacity((steps * steps * steps) as usize);
  for x in 0..steps {
    for y in 0..steps {
      for z in 0..steps {
        let offset = Vec3::new(x as f32, y as f32, z as f32) + Vec3::splat(0.5);
        points.push(min + offset * step);
      }
    }
  }
  points
}
