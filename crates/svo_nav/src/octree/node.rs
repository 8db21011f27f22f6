//! Node - one cell of a layer, keyed by its Morton code.

use super::ChildLink;
use crate::morton::{self, MortonCode};

/// Octree node stored in a layer vector.
///
/// A node without a child is an undivided cell at its own resolution and is
/// treated as navigable. Blocked space is expected to be subdivided down to
/// leaf records so occupancy can be tested.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Node {
  /// Morton code of the cell within its layer's grid.
  pub code: MortonCode,
  /// First child: a node in a finer layer, or a leaf record for layer 0.
  pub first_child: Option<ChildLink>,
}

impl Node {
  /// Undivided node.
  pub fn new(code: MortonCode) -> Self {
    Self {
      code,
      first_child: None,
    }
  }

  /// Node subdivided into `child`.
  pub fn with_child(code: MortonCode, child: ChildLink) -> Self {
    Self {
      code,
      first_child: Some(child),
    }
  }

  #[inline]
  pub fn has_children(&self) -> bool {
    self.first_child.is_some()
  }

  /// Grid coordinate of the node within its layer.
  #[inline]
  pub fn coord(&self) -> (u32, u32, u32) {
    morton::decode(self.code)
  }

  /// Morton code of the node containing this one, one layer up.
  #[inline]
  pub fn parent_code(&self) -> MortonCode {
    morton::parent(self.code)
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
