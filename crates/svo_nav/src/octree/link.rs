//! Link - structured address of a navigable unit in the octree.

use std::fmt;

/// Address of a node, or of a leaf sub-voxel under a layer 0 node.
///
/// `subnode_index` is only meaningful when `layer_index == 0` and the node
/// owns a leaf record; otherwise it is 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Link {
  /// Layer of the addressed node (0 = finest).
  pub layer_index: u8,
  /// Index of the node within its layer.
  pub node_index: u32,
  /// Morton index of the sub-voxel within the node's leaf block (0..64).
  pub subnode_index: u8,
}

impl Link {
  pub fn new(layer_index: u8, node_index: u32, subnode_index: u8) -> Self {
    Self {
      layer_index,
      node_index,
      subnode_index,
    }
  }

  /// Link to a whole node.
  pub fn node(layer_index: u8, node_index: u32) -> Self {
    Self::new(layer_index, node_index, 0)
  }

  /// Link to a leaf sub-voxel of a layer 0 node.
  pub fn subnode(node_index: u32, subnode_index: u8) -> Self {
    Self::new(0, node_index, subnode_index)
  }
}

impl fmt::Display for Link {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "layer {} node {} sub {}",
      self.layer_index, self.node_index, self.subnode_index
    )
  }
}

/// Reference from a node to its first child.
///
/// For nodes above layer 0, `node_index` is an index into layer
/// `layer_index`. For layer 0 nodes it is an index into the leaf records.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ChildLink {
  pub layer_index: u8,
  pub node_index: u32,
}

impl ChildLink {
  pub fn new(layer_index: u8, node_index: u32) -> Self {
    Self {
      layer_index,
      node_index,
    }
  }

  /// Child reference to a leaf record (only valid on layer 0 nodes).
  pub fn leaf(leaf_index: u32) -> Self {
    Self::new(0, leaf_index)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_node_link_has_zero_subnode() {
    let link = Link::node(3, 17);
    assert_eq!(link.layer_index, 3);
    assert_eq!(link.node_index, 17);
    assert_eq!(link.subnode_index, 0);
  }

  #[test]
  fn test_subnode_link_is_layer_zero() {
    let link = Link::subnode(5, 42);
    assert_eq!(link, Link::new(0, 5, 42));
  }

  #[test]
  fn test_display() {
    assert_eq!(Link::new(1, 2, 3).to_string(), "layer 1 node 2 sub 3");
  }
}
