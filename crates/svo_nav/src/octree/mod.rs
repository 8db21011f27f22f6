//! Octree module: layered node storage and leaf occupancy.
//!
//! The tree is stored as one node vector per layer plus a flat vector of
//! leaf occupancy records. Parent/child relationships are explicit indices,
//! not pointers, so a whole tree can be cloned or swapped as one value.
//!
//! # Layer Convention
//!
//! Layer 0 = finest node layer, higher layer = coarser.
//!
//! ```text
//! Voxel Size = layer0_voxel_size * 2^layer
//! Leaf sub-voxel = layer0_voxel_size / 4
//! ```
//!
//! # Module Structure
//!
//! - [`link`]: `Link` and `ChildLink` - addresses of navigable units
//! - [`node`]: `Node` - Morton-keyed node with optional child
//! - [`leaf`]: `LeafNode` - 64-bit occupancy mask of a 4x4x4 block
//! - [`data`]: `OctreeData` - layers + leaves with invariant validation
//! - [`bounds`]: `Aabb3` - volume bounding box
//! - [`store`]: `OctreeStore` - atomically published immutable snapshots

pub mod bounds;
pub mod data;
pub mod leaf;
pub mod link;
pub mod node;
pub mod store;

// Re-exports
pub use bounds::Aabb3;
pub use data::{OctreeData, OctreeError};
pub use leaf::LeafNode;
pub use link::{ChildLink, Link};
pub use node::Node;
pub use store::{OctreeSnapshot, OctreeStore};
