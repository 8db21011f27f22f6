use super::*;

#[test]
fn test_empty_leaf_blocks_nothing() {
  let leaf = LeafNode::EMPTY;
  assert!(leaf.is_completely_free());
  assert!(!leaf.is_completely_blocked());
  for i in 0..64 {
    assert!(!leaf.is_blocked(i), "Sub-voxel {} should be free", i);
  }
}

#[test]
fn test_full_leaf_blocks_everything() {
  let leaf = LeafNode::FULL;
  assert!(leaf.is_completely_blocked());
  assert_eq!(leaf.blocked_count(), 64);
  for i in 0..64 {
    assert!(leaf.is_blocked(i), "Sub-voxel {} should be blocked", i);
  }
}

#[test]
fn test_set_and_clear_single_bit() {
  let mut leaf = LeafNode::EMPTY;
  leaf.set_blocked(37);
  assert!(leaf.is_blocked(37));
  assert_eq!(leaf.blocked_count(), 1);
  assert_eq!(leaf.bits(), 1 << 37);

  leaf.clear(37);
  assert!(!leaf.is_blocked(37));
  assert!(leaf.is_completely_free());
}

#[test]
fn test_out_of_range_index_is_free_and_ignored() {
  let mut leaf = LeafNode::FULL;
  assert!(!leaf.is_blocked(64));
  assert!(!leaf.is_blocked(u64::MAX));

  leaf.clear(64);
  assert!(leaf.is_completely_blocked());

  let mut empty = LeafNode::EMPTY;
  empty.set_blocked(100);
  assert!(empty.is_completely_free());
}

/// Local coordinates address bits through the Morton encoder.
#[test]
fn test_is_blocked_at_uses_morton_index() {
  let mut leaf = LeafNode::EMPTY;
  leaf.set_blocked(morton::encode(2, 0, 3));

  assert!(leaf.is_blocked_at(2, 0, 3));
  assert!(!leaf.is_blocked_at(3, 0, 2));
  assert!(!leaf.is_blocked_at(4, 0, 0), "Outside the block is never blocked");
}

#[test]
fn test_blocked_indices() {
  let leaf = LeafNode::from_bits(0b1000_0101);
  let blocked: Vec<u64> = leaf.blocked_indices().collect();
  assert_eq!(blocked, vec![0, 2, 7]);
}
