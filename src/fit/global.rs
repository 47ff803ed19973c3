//! Global search: differential evolution over a bounded parameter box.
//!
//! The sinusoid objective is highly multi-modal in frequency and phase, so a
//! purely local method started from a single seed tends to lock onto the
//! wrong ridge. DE/rand/1/bin over a data-derived bounds box escapes those
//! local minima at a fixed, predictable cost (population × generations).
//!
//! Reproducibility: every run owns its own generator, seeded with a fixed
//! constant from the config. Two runs on identical data walk the exact same
//! random sequence and return identical parameters. Sharing one generator
//! across fits would break that and must be avoided.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::data::Dataset;
use crate::domain::{FitConfig, Interval, PARAM_COUNT, ParamBounds, SineParams};
use crate::fit::cost::objective;

/// One differential evolution run over discrete generations.
///
/// The population and its parallel fitness values live only for the duration
/// of the run and are discarded once the best member is extracted.
pub struct DifferentialEvolution<'a> {
    dataset: &'a Dataset,
    bounds: [Interval; PARAM_COUNT],
    weight: f64,
    crossover: f64,
    rng: StdRng,
    population: Vec<[f64; PARAM_COUNT]>,
    fitness: Vec<f64>,
}

impl<'a> DifferentialEvolution<'a> {
    /// Initialize the population uniformly inside the bounds box and
    /// evaluate its fitness.
    pub fn new(dataset: &'a Dataset, bounds: ParamBounds, config: &FitConfig) -> Self {
        let pop_size = config.de_pop_size.max(PARAM_COUNT);
        let bounds = bounds.as_array();
        let mut rng = StdRng::seed_from_u64(config.de_seed);

        let mut population = Vec::with_capacity(pop_size);
        for _ in 0..pop_size {
            let mut member = [0.0; PARAM_COUNT];
            for (slot, iv) in member.iter_mut().zip(&bounds) {
                *slot = iv.min + rng.gen_range(0.0..1.0) * iv.width();
            }
            population.push(member);
        }

        let fitness = population
            .iter()
            .map(|m| objective(dataset, &SineParams::from_array(*m)))
            .collect();

        Self {
            dataset,
            bounds,
            weight: config.de_weight,
            crossover: config.de_crossover,
            rng,
            population,
            fitness,
        }
    }

    /// Advance the population by one generation.
    ///
    /// For each member `i`: pick three other distinct indices `a, b, c`, form
    /// a trial by replacing each slot with probability `CR` by
    /// `a + F·(b − c)` clamped into its bound, and keep the trial only if its
    /// fitness is strictly lower than the incumbent's.
    pub fn evolve(&mut self) {
        let pop_size = self.population.len();
        for i in 0..pop_size {
            let mut others: Vec<usize> = (0..pop_size).filter(|&j| j != i).collect();
            others.shuffle(&mut self.rng);
            let (a, b, c) = (others[0], others[1], others[2]);

            let mut trial = self.population[i];
            for j in 0..PARAM_COUNT {
                if self.rng.gen_range(0.0..1.0) < self.crossover {
                    let mutant = self.population[a][j]
                        + self.weight * (self.population[b][j] - self.population[c][j]);
                    trial[j] = self.bounds[j].clamp(mutant);
                }
            }

            let trial_fitness = objective(self.dataset, &SineParams::from_array(trial));
            if trial_fitness < self.fitness[i] {
                self.population[i] = trial;
                self.fitness[i] = trial_fitness;
            }
        }
    }

    /// Run a fixed number of generations (no early stopping) and return the
    /// best member.
    pub fn run(&mut self, generations: usize) -> SineParams {
        for _ in 0..generations {
            self.evolve();
        }
        self.best().0
    }

    /// Current best member and its fitness.
    pub fn best(&self) -> (SineParams, f64) {
        let mut best_idx = 0;
        for (i, &f) in self.fitness.iter().enumerate() {
            if f < self.fitness[best_idx] {
                best_idx = i;
            }
        }
        (
            SineParams::from_array(self.population[best_idx]),
            self.fitness[best_idx],
        )
    }

    /// Current population, slot-ordered per member.
    pub fn population(&self) -> &[[f64; PARAM_COUNT]] {
        &self.population
    }
}
