use super::*;

#[test]
fn test_leaf_block_fits_in_u64() {
  assert_eq!(LEAF_SUBVOXELS, 64);
  assert_eq!(LEAF_SUBVOXELS, u64::BITS as usize);
}

#[test]
fn test_leaf_grid_is_power_of_two() {
  assert!(LEAF_GRID_SIZE.is_power_of_two());
  assert_eq!(MAX_LEAF_COORD, 3);
  assert_eq!(LEAF_SUBVOXEL_SCALE, 0.25);
}

/// Three axes of MORTON_AXIS_BITS must fit in a 64-bit key.
#[test]
fn test_morton_axis_bits_fit_u64() {
  assert!(MORTON_AXIS_BITS * 3 <= u64::BITS);
  assert_eq!(MAX_MORTON_COORD, 0x1f_ffff);
}

/// The largest leaf-local coordinate encodes to the last leaf bit.
#[test]
fn test_max_leaf_coord_encodes_to_last_bit() {
  let index = crate::morton::encode(MAX_LEAF_COORD, MAX_LEAF_COORD, MAX_LEAF_COORD);
  assert_eq!(index as usize, LEAF_SUBVOXELS - 1);
}
