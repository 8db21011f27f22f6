//! Probe file parsing: volume geometry, octree layers, leaves and probes.

use anyhow::{Context, Result};
use glam::Vec3;
use serde::Deserialize;
use std::path::Path;
use svo_nav::{
  ChildLink, LeafCoordMode, LeafNode, NavVolume, Node, OctreeData, ResolverConfig, ScanStrategy,
  VolumeConfig,
};

/// Root of a probe file.
#[derive(Debug, Deserialize)]
pub struct ProbeConfig {
  pub volume: VolumeSection,
  #[serde(default)]
  pub resolver: ResolverSection,
  /// Node layers, finest (layer 0) first.
  pub layers: Vec<Vec<NodeEntry>>,
  /// Leaf occupancy masks, indexed by layer 0 child links.
  #[serde(default)]
  pub leaves: Vec<LeafMask>,
  /// Points to resolve.
  #[serde(default)]
  pub probes: Vec<[f32; 3]>,
}

/// Volume geometry.
#[derive(Debug, Deserialize)]
pub struct VolumeSection {
  /// Center of the volume.
  pub origin: [f32; 3],
  /// Half-extent of the volume.
  pub extent: [f32; 3],
  /// Layer 0 voxel edge length.
  pub voxel_size: f32,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResolverSection {
  #[serde(default)]
  pub scan: ScanSetting,
  #[serde(default)]
  pub leaf_coords: LeafCoordSetting,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanSetting {
  #[default]
  Forward,
  Binary,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafCoordSetting {
  #[default]
  Floor,
  Legacy,
}

/// One node: its Morton code and optional `[layer, index]` child link.
#[derive(Debug, Deserialize)]
pub struct NodeEntry {
  pub code: u64,
  #[serde(default)]
  pub child: Option<[u32; 2]>,
}

/// Leaf mask as a TOML integer or a hex string (for masks above `i64::MAX`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LeafMask {
  Bits(i64),
  Hex(String),
}

impl LeafMask {
  pub fn to_leaf(&self) -> Result<LeafNode> {
    let bits = match self {
      // Reinterpret: negative integers carry bit 63.
      LeafMask::Bits(bits) => *bits as u64,
      LeafMask::Hex(text) => {
        let digits = text.trim_start_matches("0x").replace('_', "");
        u64::from_str_radix(&digits, 16).with_context(|| format!("Invalid leaf mask: {text}"))?
      }
    };
    Ok(LeafNode::from_bits(bits))
  }
}

impl ProbeConfig {
  /// Load a probe file from disk.
  pub fn load(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read probe file: {}", path.display()))?;
    Self::parse(&content)
  }

  pub fn parse(content: &str) -> Result<Self> {
    let config: ProbeConfig = toml::from_str(content).context("Failed to parse probe TOML")?;

    if config.layers.is_empty() {
      anyhow::bail!("Probe file must define at least one layer");
    }
    if config.volume.voxel_size.is_nan() || config.volume.voxel_size <= 0.0 {
      anyhow::bail!("voxel_size must be positive, got {}", config.volume.voxel_size);
    }
    if config.volume.extent.iter().any(|&e| e.is_nan() || e <= 0.0) {
      anyhow::bail!("extent must be positive, got {:?}", config.volume.extent);
    }

    Ok(config)
  }

  pub fn resolver_config(&self) -> ResolverConfig {
    let scan = match self.resolver.scan {
      ScanSetting::Forward => ScanStrategy::ForwardScan,
      ScanSetting::Binary => ScanStrategy::BinarySearch,
    };
    let leaf_coords = match self.resolver.leaf_coords {
      LeafCoordSetting::Floor => LeafCoordMode::Floor,
      LeafCoordSetting::Legacy => LeafCoordMode::HalfBiasedRound,
    };
    ResolverConfig::new()
      .with_scan_strategy(scan)
      .with_leaf_coord_mode(leaf_coords)
  }

  /// Build and validate the octree the file describes.
  pub fn to_octree_data(&self) -> Result<OctreeData> {
    let mut layers = Vec::with_capacity(self.layers.len());
    for (layer_index, entries) in self.layers.iter().enumerate() {
      let mut nodes = Vec::with_capacity(entries.len());
      for (node_index, entry) in entries.iter().enumerate() {
        let node = match entry.child {
          None => Node::new(entry.code),
          Some([child_layer, child_index]) => {
            let child_layer = u8::try_from(child_layer).with_context(|| {
              format!("Layer {layer_index} node {node_index}: child layer {child_layer} out of range")
            })?;
            Node::with_child(entry.code, ChildLink::new(child_layer, child_index))
          }
        };
        nodes.push(node);
      }
      layers.push(nodes);
    }

    let leaves = self
      .leaves
      .iter()
      .map(LeafMask::to_leaf)
      .collect::<Result<Vec<_>>>()?;

    OctreeData::from_parts(layers, leaves).context("Octree failed validation")
  }

  pub fn volume_config(&self) -> VolumeConfig {
    VolumeConfig::new(
      Vec3::from_array(self.volume.origin),
      Vec3::from_array(self.volume.extent),
      self.volume.voxel_size,
    )
  }

  pub fn to_volume(&self) -> Result<NavVolume> {
    Ok(NavVolume::new(self.volume_config(), self.to_octree_data()?))
  }

  pub fn probe_points(&self) -> impl Iterator<Item = Vec3> + '_ {
    self.probes.iter().map(|&p| Vec3::from_array(p))
  }
}
