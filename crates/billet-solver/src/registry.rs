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

//! Explicit technique registry.
//!
//! External callers select a technique by a discriminant tag. The
//! registry maps each tag to a constructor closure producing a boxed,
//! ready-to-run technique from a problem and a parameter bundle. New
//! variants register a constructor; nothing is discovered implicitly.

use crate::config::TechniqueConfig;
use billet_anneal::{
    annealing::{AnnealingParams, SimulatedAnnealingTechnique},
    cooling::PlateauGeometricCooling,
};
use billet_search::{num::CostNumeric, problem::PlacementProblem, technique::Technique};
use billet_tree::{
    breadth_first::BreadthFirstTechnique, depth_first::DepthFirstTechnique,
};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use std::collections::HashMap;
use std::str::FromStr;

/// The discriminant tag naming a solving technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TechniqueKind {
    DepthFirst,
    BreadthFirst,
    SimulatedAnnealing,
}

impl std::fmt::Display for TechniqueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TechniqueKind::DepthFirst => write!(f, "depth-first"),
            TechniqueKind::BreadthFirst => write!(f, "breadth-first"),
            TechniqueKind::SimulatedAnnealing => write!(f, "simulated-annealing"),
        }
    }
}

/// Error raised when parsing an unrecognized technique tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseTechniqueKindError {
    input: String,
}

impl ParseTechniqueKindError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ParseTechniqueKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unrecognized technique tag '{}'. Expected one of: depth-first, breadth-first, simulated-annealing",
            self.input
        )
    }
}

impl std::error::Error for ParseTechniqueKindError {}

impl FromStr for TechniqueKind {
    type Err = ParseTechniqueKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depth-first" => Ok(TechniqueKind::DepthFirst),
            "breadth-first" => Ok(TechniqueKind::BreadthFirst),
            "simulated-annealing" => Ok(TechniqueKind::SimulatedAnnealing),
            other => Err(ParseTechniqueKindError {
                input: other.to_string(),
            }),
        }
    }
}

/// Error raised when the registry holds no constructor for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownTechniqueError {
    kind: TechniqueKind,
}

impl UnknownTechniqueError {
    pub fn new(kind: TechniqueKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> TechniqueKind {
        self.kind
    }
}

impl std::fmt::Display for UnknownTechniqueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No constructor registered for technique '{}'", self.kind)
    }
}

impl std::error::Error for UnknownTechniqueError {}

/// A constructor producing a boxed technique from a problem and the
/// parameter bundle.
pub type TechniqueConstructor<T> = Box<
    dyn Fn(PlacementProblem<T>, &TechniqueConfig) -> Box<dyn Technique<T> + Send> + Send + Sync,
>;

/// Maps discriminant tags to technique constructors.
pub struct TechniqueRegistry<T>
where
    T: CostNumeric,
{
    constructors: HashMap<TechniqueKind, TechniqueConstructor<T>>,
}

impl<T> TechniqueRegistry<T>
where
    T: CostNumeric + 'static,
{
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Creates a registry with the three built-in techniques registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(TechniqueKind::DepthFirst, |problem, config| {
            Box::new(DepthFirstTechnique::new(problem, config.depth_first()))
        });

        registry.register(TechniqueKind::BreadthFirst, |problem, config| {
            Box::new(BreadthFirstTechnique::new(problem, config.breadth_first()))
        });

        registry.register(TechniqueKind::SimulatedAnnealing, |problem, config| {
            let annealing = config.annealing();
            let cooling = PlateauGeometricCooling::new(
                annealing.initial_temperature(),
                annealing.drop_factor(),
                annealing.wait_time(),
                annealing.temperature_floor(),
            );
            let rng = ChaCha8Rng::seed_from_u64(annealing.seed());
            Box::new(SimulatedAnnealingTechnique::new(
                problem,
                cooling,
                AnnealingParams::new(annealing.patience()),
                rng,
            ))
        });

        registry
    }

    /// Registers (or replaces) the constructor for a tag.
    pub fn register<F>(&mut self, kind: TechniqueKind, constructor: F)
    where
        F: Fn(PlacementProblem<T>, &TechniqueConfig) -> Box<dyn Technique<T> + Send>
            + Send
            + Sync
            + 'static,
    {
        self.constructors.insert(kind, Box::new(constructor));
    }

    /// Returns the number of registered constructors.
    #[inline]
    pub fn num_registered(&self) -> usize {
        self.constructors.len()
    }

    /// Checks whether a constructor is registered for the tag.
    #[inline]
    pub fn is_registered(&self, kind: TechniqueKind) -> bool {
        self.constructors.contains_key(&kind)
    }

    /// Constructs a ready-to-run technique for the tag.
    pub fn construct(
        &self,
        kind: TechniqueKind,
        problem: PlacementProblem<T>,
        config: &TechniqueConfig,
    ) -> Result<Box<dyn Technique<T> + Send>, UnknownTechniqueError> {
        match self.constructors.get(&kind) {
            Some(constructor) => Ok(constructor(problem, config)),
            None => Err(UnknownTechniqueError::new(kind)),
        }
    }
}

impl<T> Default for TechniqueRegistry<T>
where
    T: CostNumeric + 'static,
{
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl<T> std::fmt::Debug for TechniqueRegistry<T>
where
    T: CostNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TechniqueRegistry({} constructors)",
            self.constructors.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billet_model::model::ModelBuilder;

    type IntegerType = i64;

    fn build_problem() -> PlacementProblem<IntegerType> {
        let mut builder = ModelBuilder::<IntegerType>::new(2);
        builder.add_group(1, 2);
        PlacementProblem::new(builder.build().unwrap())
    }

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(
            "depth-first".parse::<TechniqueKind>().unwrap(),
            TechniqueKind::DepthFirst
        );
        assert_eq!(
            "breadth-first".parse::<TechniqueKind>().unwrap(),
            TechniqueKind::BreadthFirst
        );
        assert_eq!(
            "simulated-annealing".parse::<TechniqueKind>().unwrap(),
            TechniqueKind::SimulatedAnnealing
        );
    }

    #[test]
    fn test_parse_rejects_unknown_tags() {
        let err = "hill-climbing".parse::<TechniqueKind>().unwrap_err();
        assert!(format!("{}", err).contains("hill-climbing"));
    }

    #[test]
    fn test_builtins_cover_all_kinds() {
        let registry = TechniqueRegistry::<IntegerType>::with_builtins();
        assert_eq!(registry.num_registered(), 3);
        assert!(registry.is_registered(TechniqueKind::DepthFirst));
        assert!(registry.is_registered(TechniqueKind::BreadthFirst));
        assert!(registry.is_registered(TechniqueKind::SimulatedAnnealing));
    }

    #[test]
    fn test_empty_registry_reports_unknown_technique() {
        let registry = TechniqueRegistry::<IntegerType>::new();
        let config = TechniqueConfig::default();

        let err = registry
            .construct(TechniqueKind::DepthFirst, build_problem(), &config)
            .err()
            .expect("expected an unknown-technique error");
        assert_eq!(err.kind(), TechniqueKind::DepthFirst);
    }

    #[test]
    fn test_constructed_techniques_report_their_names() {
        let registry = TechniqueRegistry::<IntegerType>::with_builtins();
        let config = TechniqueConfig::default();

        let technique = registry
            .construct(TechniqueKind::DepthFirst, build_problem(), &config)
            .unwrap();
        assert_eq!(technique.name(), "DepthFirstTechnique");

        let technique = registry
            .construct(TechniqueKind::SimulatedAnnealing, build_problem(), &config)
            .unwrap();
        assert_eq!(technique.name(), "SimulatedAnnealingTechnique");
    }
}
