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

//! Parameter bundles consumed by the technique registry.

use billet_tree::{breadth_first::BreadthFirstParams, depth_first::DepthFirstParams};

/// Parameters of the annealing technique, including its cooling schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealingConfig {
    initial_temperature: f64,
    drop_factor: f64,
    wait_time: u64,
    temperature_floor: f64,
    patience: u64,
    seed: u64,
}

impl AnnealingConfig {
    #[inline]
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    #[inline]
    pub fn drop_factor(&self) -> f64 {
        self.drop_factor
    }

    #[inline]
    pub fn wait_time(&self) -> u64 {
        self.wait_time
    }

    #[inline]
    pub fn temperature_floor(&self) -> f64 {
        self.temperature_floor
    }

    #[inline]
    pub fn patience(&self) -> u64 {
        self.patience
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sets the initial temperature.
    #[inline]
    pub fn with_initial_temperature(mut self, initial_temperature: f64) -> Self {
        self.initial_temperature = initial_temperature;
        self
    }

    /// Sets the geometric drop factor applied after each plateau.
    #[inline]
    pub fn with_drop_factor(mut self, drop_factor: f64) -> Self {
        self.drop_factor = drop_factor;
        self
    }

    /// Sets the number of iterations the temperature is held constant.
    #[inline]
    pub fn with_wait_time(mut self, wait_time: u64) -> Self {
        self.wait_time = wait_time;
        self
    }

    /// Sets the temperature floor below which the schedule is frozen.
    #[inline]
    pub fn with_temperature_floor(mut self, temperature_floor: f64) -> Self {
        self.temperature_floor = temperature_floor;
        self
    }

    /// Sets the patience window in iterations since the last improvement.
    #[inline]
    pub fn with_patience(mut self, patience: u64) -> Self {
        self.patience = patience;
        self
    }

    /// Sets the RNG seed, making runs reproducible.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            drop_factor: 0.95,
            wait_time: 100,
            temperature_floor: 1e-3,
            patience: 1_000,
            seed: 42,
        }
    }
}

/// The full parameter bundle handed to technique constructors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TechniqueConfig {
    depth_first: DepthFirstParams,
    breadth_first: BreadthFirstParams,
    annealing: AnnealingConfig,
}

impl TechniqueConfig {
    /// Creates the default configuration: both exhaustive techniques run
    /// to full depth and annealing uses a slow seeded schedule.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn depth_first(&self) -> DepthFirstParams {
        self.depth_first
    }

    #[inline]
    pub fn breadth_first(&self) -> BreadthFirstParams {
        self.breadth_first
    }

    #[inline]
    pub fn annealing(&self) -> AnnealingConfig {
        self.annealing
    }

    /// Sets the depth-first parameters.
    #[inline]
    pub fn with_depth_first(mut self, params: DepthFirstParams) -> Self {
        self.depth_first = params;
        self
    }

    /// Sets the breadth-first parameters.
    #[inline]
    pub fn with_breadth_first(mut self, params: BreadthFirstParams) -> Self {
        self.breadth_first = params;
        self
    }

    /// Sets the annealing parameters.
    #[inline]
    pub fn with_annealing(mut self, annealing: AnnealingConfig) -> Self {
        self.annealing = annealing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exhaustive_params_run_to_full_depth() {
        let config = TechniqueConfig::default();
        assert_eq!(config.depth_first().max_level(), None);
        assert_eq!(config.breadth_first().max_level(), None);
    }

    #[test]
    fn test_annealing_setters_chain() {
        let annealing = AnnealingConfig::default()
            .with_initial_temperature(5.0)
            .with_drop_factor(0.9)
            .with_wait_time(10)
            .with_temperature_floor(0.1)
            .with_patience(50)
            .with_seed(7);

        assert_eq!(annealing.initial_temperature(), 5.0);
        assert_eq!(annealing.drop_factor(), 0.9);
        assert_eq!(annealing.wait_time(), 10);
        assert_eq!(annealing.temperature_floor(), 0.1);
        assert_eq!(annealing.patience(), 50);
        assert_eq!(annealing.seed(), 7);
    }

    #[test]
    fn test_config_setters_replace_sections() {
        let config = TechniqueConfig::new()
            .with_depth_first(DepthFirstParams::to_level(3))
            .with_breadth_first(BreadthFirstParams::to_level(2));

        assert_eq!(config.depth_first().max_level(), Some(3));
        assert_eq!(config.breadth_first().max_level(), Some(2));
    }
}
