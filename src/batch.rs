//! Lockstep advancement of many independent simulation instances.
//!
//! A host drives a [`Batch`] once per display refresh for live preview,
//! or once per output frame for offline export. Export loops call
//! [`Batch::for_export`] first, so they run on freshly re-initialized
//! instances derived from each instance's recorded seed rather than on
//! live, already-stepped interactive state.

use crate::geometry::{Bounds, Polygon};
use crate::params::SimulationParams;
use crate::rng::Mulberry32;
use crate::state::SimulationState;
use crate::step::step_simulation;

/// One independently-configured simulation with its reproduction recipe.
///
/// The seed is resolved exactly once at construction, so an instance the
/// host created without an explicit seed can still be rebuilt
/// bit-identically for export.
#[derive(Clone, Debug)]
pub struct Instance {
    seed: u32,
    params: SimulationParams,
    state: SimulationState,
}

impl Instance {
    /// Builds an instance; a missing seed is drawn from entropy and
    /// recorded.
    pub fn new(
        bounds: Bounds,
        params: SimulationParams,
        obstacles: Vec<Polygon>,
        seed: Option<u32>,
    ) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = Mulberry32::new(seed);
        let state = SimulationState::new(bounds, &params, obstacles, &mut rng);
        Self {
            seed,
            params,
            state,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Read-only snapshot for rendering and export collaborators.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// A fresh, unstepped instance with the same seed, params and
    /// obstacles. Obstacles are never mutated by stepping, so the live
    /// state's copy is the original set.
    pub fn reinitialized(&self) -> Self {
        Self::new(
            self.state.bounds,
            self.params.clone(),
            self.state.obstacles.clone(),
            Some(self.seed),
        )
    }

    /// Steps this instance up to `steps_per_frame` times, stopping early
    /// on completion. Returns the nodes added across the burst.
    pub fn step_burst(&mut self) -> usize {
        let mut added = 0;
        for _ in 0..self.params.steps_per_frame {
            if self.state.completed {
                break;
            }
            added += step_simulation(&mut self.state, &self.params);
        }
        added
    }
}

/// An ordered collection of instances advanced in lockstep.
#[derive(Clone, Debug, Default)]
pub struct Batch {
    instances: Vec<Instance>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instance: Instance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// One lockstep tick: every non-completed instance takes its burst of
    /// steps. Instances are fully independent; one completing early never
    /// affects another's stepping.
    ///
    /// Returns the total nodes added across all instances, which lets
    /// "auto" duration hosts stop once growth stalls everywhere.
    pub fn tick(&mut self) -> usize {
        self.instances.iter_mut().map(Instance::step_burst).sum()
    }

    pub fn all_completed(&self) -> bool {
        self.instances.iter().all(|i| i.state().completed)
    }

    /// A self-contained batch for export: every instance rebuilt fresh
    /// from its recorded seed, params and obstacles, independent of any
    /// interactive stepping history.
    pub fn for_export(&self) -> Self {
        Self {
            instances: self.instances.iter().map(Instance::reinitialized).collect(),
        }
    }
}
