//! 3D Morton (Z-order) encoding for 64-bit keys.
//!
//! Interleaves the low 21 bits of x, y and z so that x lands in bit 0, y in
//! bit 1 and z in bit 2 of every triple. The same encoding is used for layer
//! node keys and for sub-voxel indices inside a leaf block.
//!
//! Morton order clusters nearby cells but is not a distance metric: two
//! consecutive codes can be far apart across a power-of-two boundary.

use glam::UVec3;

use crate::constants::MAX_MORTON_COORD;

/// Morton code of a cell within one layer's grid.
pub type MortonCode = u64;

/// Spreads the low 21 bits of `a` so that each bit is followed by two zeros.
#[inline(always)]
fn split_by_3(a: u32) -> u64 {
  let mut x = u64::from(a & MAX_MORTON_COORD);
  x = (x | x << 32) & 0x001f_0000_0000_ffff;
  x = (x | x << 16) & 0x001f_0000_ff00_00ff;
  x = (x | x << 8) & 0x100f_00f0_0f00_f00f;
  x = (x | x << 4) & 0x10c3_0c30_c30c_30c3;
  x = (x | x << 2) & 0x1249_2492_4924_9249;
  x
}

/// Inverse of [`split_by_3`]: gathers every third bit back into 21 bits.
#[inline(always)]
fn compact_by_3(code: u64) -> u32 {
  let mut x = code & 0x1249_2492_4924_9249;
  x = (x ^ (x >> 2)) & 0x10c3_0c30_c30c_30c3;
  x = (x ^ (x >> 4)) & 0x100f_00f0_0f00_f00f;
  x = (x ^ (x >> 8)) & 0x001f_0000_ff00_00ff;
  x = (x ^ (x >> 16)) & 0x001f_0000_0000_ffff;
  x = (x ^ (x >> 32)) & u64::from(MAX_MORTON_COORD);
  x as u32
}

/// Encode a grid coordinate into a Morton code.
///
/// Bits above [`MAX_MORTON_COORD`] are discarded; use [`try_encode`] when the
/// coordinate is not known to be in range.
#[inline]
pub fn encode(x: u32, y: u32, z: u32) -> MortonCode {
  split_by_3(x) | (split_by_3(y) << 1) | (split_by_3(z) << 2)
}

/// Decode a Morton code back into its grid coordinate.
#[inline]
pub fn decode(code: MortonCode) -> (u32, u32, u32) {
  (compact_by_3(code), compact_by_3(code >> 1), compact_by_3(code >> 2))
}

/// Encode a coordinate, returning `None` if any axis exceeds 21 bits.
#[inline]
pub fn try_encode(x: u32, y: u32, z: u32) -> Option<MortonCode> {
  if x > MAX_MORTON_COORD || y > MAX_MORTON_COORD || z > MAX_MORTON_COORD {
    return None;
  }
  Some(encode(x, y, z))
}

#[inline]
pub fn encode_uvec3(coord: UVec3) -> MortonCode {
  encode(coord.x, coord.y, coord.z)
}

#[inline]
pub fn decode_uvec3(code: MortonCode) -> UVec3 {
  let (x, y, z) = decode(code);
  UVec3::new(x, y, z)
}

/// Code of the parent cell one layer up.
#[inline]
pub fn parent(code: MortonCode) -> MortonCode {
  code >> 3
}

/// Code of the first (octant 0) child one layer down.
#[inline]
pub fn first_child(code: MortonCode) -> MortonCode {
  code << 3
}

#[cfg(test)]
#[path = "morton_test.rs"]
mod morton_test;
