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
    technique::StopHandle,
};

/// A monitor that checks a shared stop flag to determine whether the
/// search should be interrupted.
#[derive(Debug, Clone)]
pub struct InterruptMonitor<T> {
    handle: StopHandle,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> InterruptMonitor<T> {
    /// Creates a new `InterruptMonitor` observing the given stop handle.
    /// The search will be terminated once a stop has been requested.
    #[inline]
    pub fn new(handle: StopHandle) -> Self {
        Self {
            handle,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> SearchMonitor<T> for InterruptMonitor<T>
where
    T: CostNumeric,
{
    fn name(&self) -> &str {
        "InterruptMonitor"
    }

    fn on_enter_search(&mut self) {}
    fn on_exit_search(&mut self) {}
    fn on_step(&mut self) {}
    fn on_solution_found(&mut self, _cost: T, _step: u64) {}

    fn search_command(&self) -> SearchCommand {
        if self.handle.is_stop_requested() {
            SearchCommand::Terminate("Interrupt signal received".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_interrupt_monitor_continues_when_flag_is_clear() {
        let handle = StopHandle::new();
        let monitor = InterruptMonitor::<IntegerType>::new(handle);

        match monitor.search_command() {
            SearchCommand::Continue => {}
            other => panic!("expected Continue, got {:?}", other),
        }
    }

    #[test]
    fn test_interrupt_monitor_terminates_when_flag_is_set() {
        let handle = StopHandle::new();
        let monitor = InterruptMonitor::<IntegerType>::new(handle.clone());

        handle.request_stop();

        match monitor.search_command() {
            SearchCommand::Terminate(reason) => {
                assert_eq!(reason, "Interrupt signal received");
            }
            other => panic!("expected Terminate, got {:?}", other),
        }
    }
}
