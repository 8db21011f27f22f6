//! Layout constants for Morton keys and leaf occupancy blocks.
//!
//! # Leaf Block Layout
//!
//! Every layer 0 node that is subdivided owns one leaf record: a 4x4x4 block
//! of sub-voxels, one bit each, addressed by the Morton code of the
//! sub-voxel's local coordinate.
//!
//! ```text
//! Local coord:    x, y, z in 0..4
//! Leaf index:     morton::encode(x, y, z) in 0..64
//! Sub-voxel edge: voxel_size(0) * 0.25
//! ```
//!
//! # Morton Bit Layout
//!
//! ```text
//! bit:   ... 5  4  3  2  1  0
//! axis:  ... z1 y1 x1 z0 y0 x0
//! ```
//!
//! 21 bits per axis fill 63 bits of the key.

/// Bits per axis in a 64-bit Morton code.
pub const MORTON_AXIS_BITS: u32 = 21;

/// Largest encodable coordinate on any axis (2^21 - 1).
pub const MAX_MORTON_COORD: u32 = (1 << MORTON_AXIS_BITS) - 1;

/// Sub-voxels per axis inside a leaf block.
pub const LEAF_GRID_SIZE: u32 = 4;

/// Sub-voxels per leaf block (4³ = 64, one bit each).
pub const LEAF_SUBVOXELS: usize = (LEAF_GRID_SIZE * LEAF_GRID_SIZE * LEAF_GRID_SIZE) as usize;

/// Largest valid leaf-local coordinate on any axis.
pub const MAX_LEAF_COORD: u32 = LEAF_GRID_SIZE - 1;

/// Sub-voxel edge length as a fraction of the layer 0 voxel size.
pub const LEAF_SUBVOXEL_SCALE: f32 = 1.0 / LEAF_GRID_SIZE as f32;

/// Children per subdivided node.
pub const OCTANTS: u64 = 8;

/// Maximum number of layers. Each layer doubles the voxel size, so the
/// coarsest grid still fits in a Morton code.
pub const MAX_LAYERS: usize = MORTON_AXIS_BITS as usize;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
