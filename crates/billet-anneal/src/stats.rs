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

/// Statistics collected during a simulated annealing run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnealingStatistics {
    /// Number of iterations performed.
    pub iterations: u64,
    /// Number of proposed moves that were accepted.
    pub accepted_moves: u64,
    /// Number of proposed moves that were discarded.
    pub rejected_moves: u64,
    /// Number of iterations that improved on the best known cost.
    pub improvements: u64,
    /// Total time taken by the run.
    pub time_total: Duration,
}

impl Default for AnnealingStatistics {
    fn default() -> Self {
        Self {
            iterations: 0,
            accepted_moves: 0,
            rejected_moves: 0,
            improvements: 0,
            time_total: Duration::ZERO,
        }
    }
}

impl AnnealingStatistics {
    /// Called at each iteration.
    #[inline]
    pub fn on_iteration(&mut self) {
        self.iterations = self.iterations.saturating_add(1);
    }

    /// Called when a proposed move is accepted.
    #[inline]
    pub fn on_accepted_move(&mut self) {
        self.accepted_moves = self.accepted_moves.saturating_add(1);
    }

    /// Called when a proposed move is discarded.
    #[inline]
    pub fn on_rejected_move(&mut self) {
        self.rejected_moves = self.rejected_moves.saturating_add(1);
    }

    /// Called when an accepted move improves on the best known cost.
    #[inline]
    pub fn on_improvement(&mut self) {
        self.improvements = self.improvements.saturating_add(1);
    }

    /// Sets the total time taken by the run.
    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for AnnealingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Annealing Statistics:")?;
        writeln!(f, "  Iterations:      {}", self.iterations)?;
        writeln!(f, "  Accepted Moves:  {}", self.accepted_moves)?;
        writeln!(f, "  Rejected Moves:  {}", self.rejected_moves)?;
        writeln!(f, "  Improvements:    {}", self.improvements)?;
        writeln!(f, "  Total Time:      {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = AnnealingStatistics::default();
        stats.on_iteration();
        stats.on_iteration();
        stats.on_accepted_move();
        stats.on_rejected_move();
        stats.on_improvement();

        assert_eq!(stats.iterations, 2);
        assert_eq!(stats.accepted_moves, 1);
        assert_eq!(stats.rejected_moves, 1);
        assert_eq!(stats.improvements, 1);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let mut stats = AnnealingStatistics::default();
        stats.on_iteration();

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Iterations:      1"));
        assert!(rendered.contains("Accepted Moves:  0"));
        assert!(rendered.contains("Total Time:"));
    }
}
