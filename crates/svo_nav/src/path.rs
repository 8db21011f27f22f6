//! Navigation path container filled by a path search.
//!
//! The search itself lives outside this crate; it hands back links, and
//! [`NavigationPath::push_link`] turns them into world-space points.

use glam::Vec3;

use crate::octree::Link;
use crate::volume::Volume;

/// Distance metric a path search scores edges with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathCostType {
  Manhattan,
  #[default]
  Euclidean,
}

impl PathCostType {
  /// Cost of moving from `a` to `b`.
  #[inline]
  pub fn cost(self, a: Vec3, b: Vec3) -> f32 {
    match self {
      PathCostType::Manhattan => (b - a).abs().element_sum(),
      PathCostType::Euclidean => a.distance(b),
    }
  }
}

/// A waypoint and the layer it was resolved at.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathPoint {
  pub position: Vec3,
  /// `None` for points that did not come from the octree (start, goal).
  pub layer: Option<u8>,
}

impl PathPoint {
  pub fn new(position: Vec3, layer: u8) -> Self {
    Self {
      position,
      layer: Some(layer),
    }
  }

  pub fn free(position: Vec3) -> Self {
    Self {
      position,
      layer: None,
    }
  }

  /// Edge length of the cell this point came from.
  pub fn voxel_size<V: Volume + ?Sized>(&self, volume: &V) -> Option<f32> {
    self.layer.map(|layer| volume.voxel_size(usize::from(layer)))
  }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationPath {
  points: Vec<PathPoint>,
  ready: bool,
}

impl NavigationPath {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_point(&mut self, point: PathPoint) {
    self.points.push(point);
  }

  /// Append the world position of `link`.
  ///
  /// Returns `false` and leaves the path unchanged when the link does not
  /// exist in `volume`.
  pub fn push_link<V: Volume + ?Sized>(&mut self, link: Link, volume: &V) -> bool {
    match volume.link_position(link) {
      Some(position) => {
        self.add_point(PathPoint::new(position, link.layer_index));
        true
      }
      None => false,
    }
  }

  /// Drop all points and mark the path as pending.
  pub fn reset_for_repath(&mut self) {
    self.points.clear();
    self.ready = false;
  }

  pub fn points(&self) -> &[PathPoint] {
    &self.points
  }

  pub fn is_ready(&self) -> bool {
    self.ready
  }

  pub fn set_ready(&mut self, ready: bool) {
    self.ready = ready;
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// Sum of segment costs along the path.
  pub fn total_cost(&self, cost_type: PathCostType) -> f32 {
    self
      .points
      .windows(2)
      .map(|pair| cost_type.cost(pair[0].position, pair[1].position))
      .sum()
  }
}

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;
