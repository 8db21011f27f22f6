//! Octree position probe.
//!
//! Loads a volume and octree from a TOML probe file, resolves every probe
//! point (from the file and from `--point`), and prints the resulting link or
//! the reason resolution failed.

mod config;

use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use std::path::PathBuf;
use svo_nav::{PositionResolver, ResolveStats, Volume};

use config::ProbeConfig;

/// Resolve probe points against a sparse voxel octree.
#[derive(Parser, Debug)]
#[command(name = "svo_probe")]
#[command(about = "Resolves world positions to octree links")]
struct Args {
  /// Path to the probe TOML file.
  #[arg(short, long)]
  config: PathBuf,

  /// Extra probe point as `x,y,z`. Repeatable.
  #[arg(short, long = "point", value_parser = parse_point)]
  points: Vec<Vec3>,

  /// Also list every blocked leaf sub-voxel.
  #[arg(long)]
  boxes: bool,

  /// Print per-query descent counters.
  #[arg(long)]
  stats: bool,
}

fn parse_point(text: &str) -> Result<Vec3, String> {
  let parts: Vec<&str> = text.split(',').map(str::trim).collect();
  let &[x, y, z] = parts.as_slice() else {
    return Err(format!("expected x,y,z, got '{text}'"));
  };
  let parse = |s: &str| {
    s.parse::<f32>()
      .map_err(|e| format!("invalid coordinate '{s}': {e}"))
  };
  Ok(Vec3::new(parse(x)?, parse(y)?, parse(z)?))
}

fn main() -> Result<()> {
  let args = Args::parse();

  println!("Loading probe file: {}", args.config.display());
  let config = ProbeConfig::load(&args.config)?;
  let volume = config.to_volume()?;
  let resolver = PositionResolver::new(config.resolver_config());

  let data = volume.data();
  println!(
    "Octree: {} layers, {} nodes, {} leaves ({} bytes)",
    data.layer_count(),
    data.node_count(),
    data.leaf_nodes().len(),
    data.memory_size()
  );
  println!(
    "Volume: min {} max {}, voxel size {}",
    volume.bounds().min,
    volume.bounds().max,
    volume.voxel_size(0)
  );

  let points: Vec<Vec3> = config.probe_points().chain(args.points.iter().copied()).collect();
  println!("\nResolving {} points...", points.len());

  let mut total = ResolveStats::default();
  for &point in &points {
    let (result, stats) = resolver.resolve_with_stats(point, &volume);
    total.merge(&stats);

    match result {
      Ok(link) => {
        let center = volume.link_position(link).unwrap_or(point);
        println!("  {point} -> {link} (center {center})");
      }
      Err(reason) => println!("  {point} -> {reason}"),
    }
    if args.stats {
      println!(
        "    layers {}, nodes {}, leaf {}",
        stats.layers_visited, stats.nodes_examined, stats.leaf_tested
      );
    }
  }

  if args.stats {
    println!(
      "\nTotal: {} layers visited, {} nodes examined",
      total.layers_visited, total.nodes_examined
    );
  }

  if args.boxes {
    let boxes = volume.blocked_boxes();
    println!("\n{} blocked sub-voxels:", boxes.len());
    for voxel_box in &boxes {
      println!(
        "  {} center {} half size {}",
        voxel_box.link, voxel_box.center, voxel_box.half_size
      );
    }
  }

  Ok(())
}
