//! svo_nav - Sparse voxel octree navigation index
//!
//! This crate answers one question for 3D navigation: given a point in
//! continuous space, which cell of the octree contains it, at what resolution,
//! and is that cell passable?
//!
//! # Features
//!
//! - **Morton keying**: 64-bit Z-order codes for per-layer node lookup and
//!   for addressing sub-voxels inside a leaf
//! - **Layered storage**: nodes stored per layer, sorted by Morton code, with
//!   64-bit occupancy masks below layer 0
//! - **Position resolution**: iterative descent from the coarsest layer to the
//!   tightest containing node or leaf sub-voxel
//! - **Snapshots**: immutable octree data published atomically for concurrent
//!   readers
//!
//! # Example
//!
//! ```ignore
//! use glam::Vec3;
//! use svo_nav::{LeafNode, NavVolume, OctreeData, PositionResolver, VolumeConfig};
//!
//! let data = OctreeData::build_subdivided(3, |_, _| true, |_| LeafNode::EMPTY);
//! let volume = NavVolume::new(VolumeConfig::from_min_corner(Vec3::ZERO, 8.0, 1.0), data);
//!
//! match PositionResolver::default().resolve(Vec3::new(1.2, 3.4, 5.6), &volume) {
//!     Ok(link) => println!("resolved to {link}"),
//!     Err(reason) => println!("not navigable: {reason}"),
//! }
//! ```

pub mod constants;
pub mod morton;
pub use morton::MortonCode;

// Layer/leaf data model
pub mod octree;
pub use octree::{
  Aabb3, ChildLink, LeafNode, Link, Node, OctreeData, OctreeError, OctreeSnapshot, OctreeStore,
};

// Volume query contract and reference implementation
pub mod volume;
pub use volume::{NavVolume, Volume, VolumeConfig, VoxelBox};

// Position-to-link resolution
pub mod resolver;
pub use resolver::{
  resolve, LeafCoordMode, PositionResolver, ResolveError, ResolveStats, ResolverConfig,
  ScanStrategy,
};

// Path points recorded from resolved links
pub mod path;
pub use path::{NavigationPath, PathCostType, PathPoint};

#[cfg(test)]
pub(crate) mod test_utils;
