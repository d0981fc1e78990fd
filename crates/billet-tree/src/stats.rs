// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::time::Duration;

/// Statistics collected during an exhaustive tree search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSearchStatistics {
    /// Total nodes visited.
    pub nodes_explored: u64,
    /// Total retreats taken, whether from dead ends or completed leaves.
    pub backtracks: u64,
    /// Total leaves reached at the maximum level.
    pub leaves_visited: u64,
    /// The deepest level reached in the tree.
    pub max_depth: u64,
    /// Total goal states encountered.
    pub solutions_found: u64,
    /// Total time spent in the search.
    pub time_total: Duration,
}

impl Default for TreeSearchStatistics {
    fn default() -> Self {
        Self {
            nodes_explored: 0,
            backtracks: 0,
            leaves_visited: 0,
            max_depth: 0,
            solutions_found: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl TreeSearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_leaf_visited(&mut self) {
        self.leaves_visited = self.leaves_visited.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for TreeSearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tree Search Statistics:")?;
        writeln!(f, "  Nodes explored:    {}", self.nodes_explored)?;
        writeln!(f, "  Backtracks:        {}", self.backtracks)?;
        writeln!(f, "  Leaves visited:    {}", self.leaves_visited)?;
        writeln!(f, "  Max depth reached: {}", self.max_depth)?;
        writeln!(f, "  Solutions found:   {}", self.solutions_found)?;
        writeln!(f, "  Total time:        {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = TreeSearchStatistics::default();
        assert_eq!(stats.nodes_explored, 0);
        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.leaves_visited, 0);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.solutions_found, 0);
        assert_eq!(stats.time_total, Duration::ZERO);
    }

    #[test]
    fn test_depth_update_keeps_the_maximum() {
        let mut stats = TreeSearchStatistics::default();
        stats.on_depth_update(3);
        stats.on_depth_update(1);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let mut stats = TreeSearchStatistics::default();
        stats.on_node_explored();
        stats.on_leaf_visited();
        stats.on_solution_found();

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Nodes explored:    1"));
        assert!(rendered.contains("Leaves visited:    1"));
        assert!(rendered.contains("Solutions found:   1"));
    }
}
