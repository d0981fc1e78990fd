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

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    num::CostNumeric,
};

/// A monitor that fans every hook out to a list of child monitors.
///
/// The first child requesting termination wins; the remaining children
/// are not consulted for that step.
pub struct CompositeMonitor<T> {
    monitors: Vec<Box<dyn SearchMonitor<T>>>,
}

impl<T> Default for CompositeMonitor<T>
where
    T: CostNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CompositeMonitor<T>
where
    T: CostNumeric,
{
    /// Creates a new, empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Adds a child monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<T> + 'static,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Returns the number of child monitors.
    #[inline]
    pub fn num_monitors(&self) -> usize {
        self.monitors.len()
    }
}

impl<T> SearchMonitor<T> for CompositeMonitor<T>
where
    T: CostNumeric,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_enter_search();
        }
    }

    fn on_exit_search(&mut self) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exit_search();
        }
    }

    fn on_step(&mut self) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_step();
        }
    }

    fn on_solution_found(&mut self, cost: T, step: u64) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_solution_found(cost, step);
        }
    }

    fn search_command(&self) -> SearchCommand {
        for monitor in self.monitors.iter() {
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                return SearchCommand::Terminate(reason);
            }
        }
        SearchCommand::Continue
    }
}

impl<T> std::fmt::Debug for CompositeMonitor<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor({} children)", self.monitors.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{monitor::interrupt::InterruptMonitor, technique::StopHandle};

    type IntegerType = i64;

    #[test]
    fn test_empty_composite_continues() {
        let monitor = CompositeMonitor::<IntegerType>::new();
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
        assert_eq!(monitor.num_monitors(), 0);
    }

    #[test]
    fn test_first_terminating_child_wins() {
        let first = StopHandle::new();
        let second = StopHandle::new();

        let mut composite = CompositeMonitor::<IntegerType>::new();
        composite.add_monitor(InterruptMonitor::new(first.clone()));
        composite.add_monitor(InterruptMonitor::new(second.clone()));
        assert_eq!(composite.num_monitors(), 2);

        assert_eq!(composite.search_command(), SearchCommand::Continue);

        second.request_stop();
        assert!(matches!(
            composite.search_command(),
            SearchCommand::Terminate(_)
        ));
    }
}
