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

//! Cooling schedules for simulated annealing.
//!
//! The schedule owns the thermodynamics of the run: the starting
//! temperature, how it decays over iterations, and the "frozen" floor
//! below which worsening moves are no longer considered. Separating this
//! from the acceptance logic lets different decay strategies be plugged in
//! without touching the technique itself.

/// Defines the thermodynamics of the annealing process.
///
/// Implementors control the initial temperature, the decay function, and
/// the frozen condition where the search reverts to a greedy descent.
pub trait CoolingSchedule: Send + Sync + std::fmt::Debug {
    /// Resets the temperature to its initial state.
    /// Called once at the start of the search.
    fn on_start(&mut self);

    /// Advances the schedule by one iteration.
    /// Called after every move (accepted or rejected).
    fn on_iteration(&mut self);

    /// Returns the current temperature.
    fn current(&self) -> f64;

    /// Returns `true` if the temperature has reached the floor below
    /// which worsening moves are no longer accepted.
    fn is_frozen(&self) -> bool;
}

/// A plateau-geometric schedule: the temperature is held constant for a
/// configurable number of iterations (the wait time), then multiplied by
/// a drop factor in `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateauGeometricCooling {
    initial: f64,
    current: f64,
    drop_factor: f64,
    wait_time: u64,
    iterations_on_plateau: u64,
    floor: f64,
}

impl PlateauGeometricCooling {
    /// Creates a new plateau-geometric cooling schedule.
    ///
    /// # Panics
    ///
    /// Panics if `drop_factor` is not strictly between `0.0` and `1.0`,
    /// if `wait_time` is zero, or if `initial` is not positive.
    pub fn new(initial: f64, drop_factor: f64, wait_time: u64, floor: f64) -> Self {
        assert!(
            drop_factor > 0.0 && drop_factor < 1.0,
            "called `PlateauGeometricCooling::new()` with invalid drop factor: {}. Must be in (0.0, 1.0)",
            drop_factor
        );
        assert!(
            wait_time > 0,
            "called `PlateauGeometricCooling::new()` with a zero wait time"
        );
        assert!(
            initial > 0.0,
            "called `PlateauGeometricCooling::new()` with non-positive initial temperature: {}",
            initial
        );

        Self {
            initial,
            current: initial,
            drop_factor,
            wait_time,
            iterations_on_plateau: 0,
            floor,
        }
    }

    /// Returns the configured wait time per plateau.
    #[inline]
    pub fn wait_time(&self) -> u64 {
        self.wait_time
    }

    /// Returns the configured drop factor.
    #[inline]
    pub fn drop_factor(&self) -> f64 {
        self.drop_factor
    }
}

impl CoolingSchedule for PlateauGeometricCooling {
    #[inline]
    fn on_start(&mut self) {
        self.current = self.initial;
        self.iterations_on_plateau = 0;
    }

    #[inline]
    fn on_iteration(&mut self) {
        self.iterations_on_plateau += 1;
        if self.iterations_on_plateau >= self.wait_time {
            self.current *= self.drop_factor;
            self.iterations_on_plateau = 0;
        }
    }

    #[inline]
    fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    fn is_frozen(&self) -> bool {
        self.current <= self.floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_holds_for_the_wait_time() {
        let mut cooling = PlateauGeometricCooling::new(10.0, 0.5, 3, 0.0);
        cooling.on_start();

        cooling.on_iteration();
        cooling.on_iteration();
        assert_eq!(cooling.current(), 10.0);

        // The third iteration completes the plateau and drops.
        cooling.on_iteration();
        assert_eq!(cooling.current(), 5.0);

        // The next plateau starts counting from zero again.
        cooling.on_iteration();
        assert_eq!(cooling.current(), 5.0);
    }

    #[test]
    fn test_on_start_resets_temperature_and_plateau() {
        let mut cooling = PlateauGeometricCooling::new(4.0, 0.5, 1, 0.0);
        cooling.on_iteration();
        cooling.on_iteration();
        assert_eq!(cooling.current(), 1.0);

        cooling.on_start();
        assert_eq!(cooling.current(), 4.0);
    }

    #[test]
    fn test_frozen_at_or_below_the_floor() {
        let mut cooling = PlateauGeometricCooling::new(2.0, 0.5, 1, 1.0);
        assert!(!cooling.is_frozen());

        cooling.on_iteration();
        assert_eq!(cooling.current(), 1.0);
        assert!(cooling.is_frozen());
    }

    #[test]
    #[should_panic(expected = "invalid drop factor")]
    fn test_rejects_drop_factor_of_one() {
        let _ = PlateauGeometricCooling::new(1.0, 1.0, 1, 0.0);
    }

    #[test]
    #[should_panic(expected = "zero wait time")]
    fn test_rejects_zero_wait_time() {
        let _ = PlateauGeometricCooling::new(1.0, 0.5, 0, 0.0);
    }
}
