//! OctreeData - per-layer node vectors plus leaf occupancy records.
//!
//! # Invariants
//!
//! The resolver scans a layer forward from the child offset stored in the
//! parent node, so the data must satisfy:
//!
//! 1. Nodes in every layer are strictly ascending by Morton code.
//! 2. A node's child points to a strictly finer layer and to the first
//!    (lowest code) node of that layer that lies inside the parent cell.
//! 3. Layer 0 children index existing leaf records.
//!
//! Together 1 and 2 make child offsets increase in parent order, so a scan
//! that starts at the stored offset never skips the matching node.
//! [`OctreeData::validate`] checks all of them.

use std::mem;

use thiserror::Error;

use super::{ChildLink, LeafNode, Node};
use crate::constants::{MAX_LAYERS, OCTANTS};
use crate::morton::{self, MortonCode};

/// Build-time integrity violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OctreeError {
  #[error("octree has no layers")]
  NoLayers,

  #[error("octree has {count} layers, at most {max} are supported")]
  TooManyLayers { count: usize, max: usize },

  #[error("layer {layer} holds {count} nodes, more than a u32 index can address")]
  LayerTooLarge { layer: usize, count: usize },

  #[error("layer {layer} is not sorted: node {index} has code {code:#x} after {previous:#x}")]
  UnsortedLayer {
    layer: usize,
    index: usize,
    code: MortonCode,
    previous: MortonCode,
  },

  #[error("node {index} in layer {layer} points to layer {child_layer}, which is not finer")]
  ChildLayerMismatch {
    layer: usize,
    index: usize,
    child_layer: usize,
  },

  #[error("node {index} in layer {layer} points past the end of layer {child_layer} (child {child_index})")]
  DanglingChild {
    layer: usize,
    index: usize,
    child_layer: usize,
    child_index: u32,
  },

  #[error("node {index} in layer {layer} does not point to the first node inside its cell")]
  ChildCodeMismatch { layer: usize, index: usize },

  #[error("layer 0 node {index} references missing leaf {leaf_index}")]
  DanglingLeaf { index: usize, leaf_index: u32 },
}

/// Layers (index 0 = finest) and the leaf records owned by layer 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OctreeData {
  layers: Vec<Vec<Node>>,
  leaf_nodes: Vec<LeafNode>,
}

impl OctreeData {
  /// Create from raw parts without checking invariants.
  pub fn from_parts_unchecked(layers: Vec<Vec<Node>>, leaf_nodes: Vec<LeafNode>) -> Self {
    Self { layers, leaf_nodes }
  }

  /// Create from raw parts, rejecting data that breaks the scan invariants.
  pub fn from_parts(layers: Vec<Vec<Node>>, leaf_nodes: Vec<LeafNode>) -> Result<Self, OctreeError> {
    let data = Self::from_parts_unchecked(layers, leaf_nodes);
    data.validate()?;
    Ok(data)
  }

  /// Build a tree top-down from a subdivision predicate.
  ///
  /// The coarsest layer is a 2x2x2 grid (codes 0..8). Every node for which
  /// `subdivide(layer, code)` returns true gets all 8 children in the layer
  /// below, or a leaf record from `leaf_for(code)` when it is on layer 0.
  /// Children are appended in parent order, so the result always validates.
  pub fn build_subdivided<S, L>(num_layers: usize, mut subdivide: S, mut leaf_for: L) -> Self
  where
    S: FnMut(usize, MortonCode) -> bool,
    L: FnMut(MortonCode) -> LeafNode,
  {
    let num_layers = num_layers.clamp(1, MAX_LAYERS);
    let top = num_layers - 1;
    let mut layers: Vec<Vec<Node>> = vec![Vec::new(); num_layers];
    let mut leaf_nodes = Vec::new();

    layers[top] = (0..OCTANTS).map(Node::new).collect();

    for layer in (0..=top).rev() {
      let (finer, current) = layers.split_at_mut(layer);
      for node in current[0].iter_mut() {
        if !subdivide(layer, node.code) {
          continue;
        }

        if layer == 0 {
          let leaf_index = leaf_nodes.len() as u32;
          leaf_nodes.push(leaf_for(node.code));
          node.first_child = Some(ChildLink::leaf(leaf_index));
        } else {
          let child_layer = &mut finer[layer - 1];
          let child_index = child_layer.len() as u32;
          let first = morton::first_child(node.code);
          child_layer.extend((0..OCTANTS).map(|octant| Node::new(first + octant)));
          node.first_child = Some(ChildLink::new((layer - 1) as u8, child_index));
        }
      }
    }

    Self { layers, leaf_nodes }
  }

  /// Number of node layers.
  #[inline]
  pub fn layer_count(&self) -> usize {
    self.layers.len()
  }

  /// Nodes of layer `index`, or an empty slice if the layer does not exist.
  #[inline]
  pub fn layer(&self, index: usize) -> &[Node] {
    self.layers.get(index).map_or(&[], Vec::as_slice)
  }

  /// All layers, finest first.
  pub fn layers(&self) -> &[Vec<Node>] {
    &self.layers
  }

  /// Leaf record `index`.
  #[inline]
  pub fn leaf(&self, index: u32) -> Option<&LeafNode> {
    self.leaf_nodes.get(index as usize)
  }

  pub fn leaf_nodes(&self) -> &[LeafNode] {
    &self.leaf_nodes
  }

  /// Total nodes across all layers.
  pub fn node_count(&self) -> usize {
    self.layers.iter().map(Vec::len).sum()
  }

  /// Approximate memory held by nodes and leaves, in bytes.
  pub fn memory_size(&self) -> usize {
    let leaves = self.leaf_nodes.len() * mem::size_of::<LeafNode>();
    let nodes = self.node_count() * mem::size_of::<Node>();
    leaves + nodes
  }

  /// Drop all layers and leaves.
  pub fn clear(&mut self) {
    self.layers.clear();
    self.leaf_nodes.clear();
  }

  pub fn is_empty(&self) -> bool {
    self.layers.is_empty()
  }

  /// Check every invariant the resolver relies on.
  pub fn validate(&self) -> Result<(), OctreeError> {
    if self.layers.is_empty() {
      return Err(OctreeError::NoLayers);
    }
    if self.layers.len() > MAX_LAYERS {
      return Err(OctreeError::TooManyLayers {
        count: self.layers.len(),
        max: MAX_LAYERS,
      });
    }

    for (layer, nodes) in self.layers.iter().enumerate() {
      if u32::try_from(nodes.len()).is_err() {
        return Err(OctreeError::LayerTooLarge {
          layer,
          count: nodes.len(),
        });
      }

      for (index, pair) in nodes.windows(2).enumerate() {
        if pair[1].code <= pair[0].code {
          return Err(OctreeError::UnsortedLayer {
            layer,
            index: index + 1,
            code: pair[1].code,
            previous: pair[0].code,
          });
        }
      }

      for (index, node) in nodes.iter().enumerate() {
        let Some(child) = node.first_child else {
          continue;
        };

        if layer == 0 {
          if self.leaf(child.node_index).is_none() {
            return Err(OctreeError::DanglingLeaf {
              index,
              leaf_index: child.node_index,
            });
          }
          continue;
        }

        let child_layer = usize::from(child.layer_index);
        if child_layer >= layer {
          return Err(OctreeError::ChildLayerMismatch {
            layer,
            index,
            child_layer,
          });
        }

        let finer = &self.layers[child_layer];
        let Some(first) = finer.get(child.node_index as usize) else {
          return Err(OctreeError::DanglingChild {
            layer,
            index,
            child_layer,
            child_index: child.node_index,
          });
        };

        let shift = 3 * (layer - child_layer) as u32;
        let inside = |n: &Node| n.code >> shift == node.code;
        let previous_inside = child
          .node_index
          .checked_sub(1)
          .and_then(|i| finer.get(i as usize))
          .is_some_and(inside);
        if !inside(first) || previous_inside {
          return Err(OctreeError::ChildCodeMismatch { layer, index });
        }
      }
    }

    Ok(())
  }
}

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;
