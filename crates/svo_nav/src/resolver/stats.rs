//! Per-query counters for profiling resolution cost.

/// Work done by one resolve call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
  /// Layers searched, coarsest first.
  pub layers_visited: usize,
  /// Nodes whose code was compared against the target.
  pub nodes_examined: usize,
  /// Whether the descent reached a leaf record.
  pub leaf_tested: bool,
}

impl ResolveStats {
  /// Accumulate another query's counters.
  #[inline]
  pub fn merge(&mut self, other: &ResolveStats) {
    self.layers_visited += other.layers_visited;
    self.nodes_examined += other.nodes_examined;
    self.leaf_tested |= other.leaf_tested;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_merge() {
    let mut total = ResolveStats::default();
    total.merge(&ResolveStats {
      layers_visited: 2,
      nodes_examined: 5,
      leaf_tested: false,
    });
    total.merge(&ResolveStats {
      layers_visited: 3,
      nodes_examined: 1,
      leaf_tested: true,
    });

    assert_eq!(total.layers_visited, 5);
    assert_eq!(total.nodes_examined, 6);
    assert!(total.leaf_tested);
  }
}
