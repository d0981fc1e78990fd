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

use billet_search::state::AssignmentState;

/// One pending node of the level-order exploration: an independent state
/// snapshot, the cumulative cost of reaching it, and its tree level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierNode<T> {
    state: AssignmentState,
    cumulative_cost: T,
    level: usize,
}

impl<T> FrontierNode<T>
where
    T: Copy,
{
    /// Creates a new `FrontierNode`.
    #[inline]
    pub fn new(state: AssignmentState, cumulative_cost: T, level: usize) -> Self {
        Self {
            state,
            cumulative_cost,
            level,
        }
    }

    /// Returns the state snapshot of this node.
    #[inline]
    pub fn state(&self) -> &AssignmentState {
        &self.state
    }

    /// Consumes the node and returns its state snapshot.
    #[inline]
    pub fn into_state(self) -> AssignmentState {
        self.state
    }

    /// Returns the cumulative cost of reaching this node.
    #[inline]
    pub fn cumulative_cost(&self) -> T {
        self.cumulative_cost
    }

    /// Returns the tree level of this node.
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }
}

/// A FIFO frontier of pending nodes.
///
/// Because nodes are pushed in level order, the level of the front node is
/// monotonically non-decreasing over the whole run; the breadth-first
/// technique exploits this to stop as soon as the front reaches the
/// maximum level.
#[derive(Debug, Clone, Default)]
pub struct Frontier<T> {
    nodes: std::collections::VecDeque<FrontierNode<T>>,
}

impl<T> Frontier<T>
where
    T: Copy,
{
    /// Creates a new, empty `Frontier`.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: std::collections::VecDeque::new(),
        }
    }

    /// Creates a preallocated `Frontier`.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            nodes: std::collections::VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the number of pending nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no nodes are pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the level of the front node, if any.
    #[inline]
    pub fn front_level(&self) -> Option<usize> {
        self.nodes.front().map(|node| node.level())
    }

    /// Enqueues a node at the back.
    #[inline]
    pub fn push(&mut self, node: FrontierNode<T>) {
        self.nodes.push_back(node);
    }

    /// Dequeues the front node.
    #[inline]
    pub fn pop(&mut self) -> Option<FrontierNode<T>> {
        self.nodes.pop_front()
    }

    /// Clears all pending nodes, keeping allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.nodes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    fn node(level: usize) -> FrontierNode<IntegerType> {
        FrontierNode::new(AssignmentState::new(2, 1), 0, level)
    }

    #[test]
    fn test_fifo_order_is_preserved() {
        let mut frontier = Frontier::new();
        frontier.push(node(0));
        frontier.push(node(1));
        frontier.push(node(1));

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.front_level(), Some(0));

        assert_eq!(frontier.pop().unwrap().level(), 0);
        assert_eq!(frontier.pop().unwrap().level(), 1);
        assert_eq!(frontier.pop().unwrap().level(), 1);
        assert!(frontier.pop().is_none());
    }

    #[test]
    fn test_reset_empties_the_frontier() {
        let mut frontier = Frontier::new();
        frontier.push(node(0));
        frontier.reset();
        assert!(frontier.is_empty());
        assert_eq!(frontier.front_level(), None);
    }

    #[test]
    fn test_node_carries_cost_and_state() {
        let state = AssignmentState::new(3, 2);
        let node = FrontierNode::new(state.clone(), 7i64, 2);
        assert_eq!(node.cumulative_cost(), 7);
        assert_eq!(node.level(), 2);
        assert_eq!(node.state(), &state);
        assert_eq!(node.into_state(), state);
    }
}
