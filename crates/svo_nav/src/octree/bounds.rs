//! Axis-aligned bounding box of a navigation volume.

use glam::Vec3;

/// Axis-aligned bounding box.
///
/// Volumes are described by center and half-extent; the box is the region
/// the octree covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb3 {
  /// Minimum corner.
  pub min: Vec3,
  /// Maximum corner.
  pub max: Vec3,
}

impl Aabb3 {
  /// Create a new AABB from min and max corners.
  ///
  /// # Panics
  /// Debug-asserts that min <= max on all axes.
  pub fn new(min: Vec3, max: Vec3) -> Self {
    debug_assert!(
      min.x <= max.x && min.y <= max.y && min.z <= max.z,
      "AABB min must be <= max on all axes"
    );
    Self { min, max }
  }

  /// Create a new AABB from center and half-extents.
  pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
    Self {
      min: center - half_extents,
      max: center + half_extents,
    }
  }

  /// Check if this AABB contains a point, boundary included on every face.
  #[inline]
  pub fn contains_point(&self, point: Vec3) -> bool {
    point.cmpge(self.min).all() && point.cmple(self.max).all()
  }

  /// Check if this AABB contains a point, excluding the maximum faces.
  ///
  /// Matches grid cells, which own their minimum faces only.
  #[inline]
  pub fn contains_point_half_open(&self, point: Vec3) -> bool {
    point.cmpge(self.min).all() && point.cmplt(self.max).all()
  }

  /// Get the size of the AABB (max - min).
  #[inline]
  pub fn size(&self) -> Vec3 {
    self.max - self.min
  }

  /// Get the center of the AABB.
  #[inline]
  pub fn center(&self) -> Vec3 {
    (self.min + self.max) * 0.5
  }

  /// Get the half-extents of the AABB.
  #[inline]
  pub fn half_extents(&self) -> Vec3 {
    self.size() * 0.5
  }
}
