//! simulated annealing optimization module
//!
use crate::error::{AsmError, Result};
use derive_new::new;
use log::{debug, trace};
use rand::prelude::*;

pub trait SAState: Clone {
    /// Cost of the state to be minimized.
    fn cost(&self) -> f64;
    /// get a randomly-picked neighbor state (using rng)
    fn next<R: Rng>(&self, rng: &mut R) -> Self;
    /// output for logging
    fn as_string(&self) -> String;
}

///
/// Parameters of the annealing schedule
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealParams {
    /// initial temperature, > 0
    pub init_temp: f64,
    /// temperature is multiplied by this in each iteration, in (0, 1)
    pub cooling_rate: f64,
    /// number of iterations
    pub n_iter: u64,
}

impl Default for AnnealParams {
    fn default() -> Self {
        AnnealParams {
            init_temp: 1.0,
            cooling_rate: 0.99,
            n_iter: 1000,
        }
    }
}

impl AnnealParams {
    pub fn new(init_temp: f64, cooling_rate: f64, n_iter: u64) -> Result<AnnealParams> {
        let params = AnnealParams {
            init_temp,
            cooling_rate,
            n_iter,
        };
        params.validate()?;
        Ok(params)
    }
    pub fn validate(&self) -> Result<()> {
        // written as negations so that NaN is rejected
        if !(self.init_temp > 0.0) {
            return Err(AsmError::InvalidInput(format!(
                "initial temperature should be >0 (got {})",
                self.init_temp
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(AsmError::InvalidInput(format!(
                "cooling rate should be in (0,1) (got {})",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}

///
/// Record of one iteration, passed to the progress callback
///
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct AnnealStep {
    pub iteration: u64,
    pub temp: f64,
    /// cost of the state before this iteration
    pub current_cost: f64,
    pub candidate_cost: f64,
    /// best cost found so far, including this iteration
    pub best_cost: f64,
    pub is_accepted: bool,
}

#[derive(Debug, Clone)]
pub struct AnnealResult<T> {
    /// state with the lowest cost visited
    pub best: T,
    pub best_cost: f64,
    pub initial_cost: f64,
    /// `history[i]` is the best cost after iteration `i`
    pub history: Vec<f64>,
    pub n_accepted: u64,
}

///
/// Metropolis acceptance probability of moving from `old_cost` to `new_cost`
/// at temperature `temp`.
///
/// Improvements are always accepted. A worse state is accepted with
/// `exp(-(new - old) / temp)`.
///
pub fn acceptance_probability(old_cost: f64, new_cost: f64, temp: f64) -> f64 {
    let diff = new_cost - old_cost;
    if diff <= 0.0 {
        1.0
    } else if diff > 0.0 && temp > 0.0 {
        (-diff / temp).exp()
    } else {
        // frozen, or an undefined difference
        0.0
    }
}

/// upper bound of the history entries reserved before a run
const HISTORY_RESERVE: u64 = 1 << 16;

///
/// number of history entries to reserve for a run of `n_iter` iterations
///
fn history_capacity(n_iter: u64) -> usize {
    n_iter.min(HISTORY_RESERVE) as usize
}

/// find SAState with global minimum cost
#[derive(Debug, Clone)]
pub struct Annealer {
    params: AnnealParams,
}

impl Annealer {
    pub fn new(params: AnnealParams) -> Result<Annealer> {
        params.validate()?;
        Ok(Annealer { params })
    }
    pub fn params(&self) -> &AnnealParams {
        &self.params
    }
    ///
    /// temperature used in the `iteration`-th step (geometric cooling)
    ///
    pub fn temp_schedule(&self, iteration: u64) -> f64 {
        self.params.init_temp * self.params.cooling_rate.powf(iteration as f64)
    }
    pub fn run<T: SAState, R: Rng>(&self, rng: &mut R, init_state: T) -> AnnealResult<T> {
        self.run_with_callback(rng, init_state, |_| {})
    }
    ///
    /// Run `n_iter` iterations from `init_state`, calling `callback` after
    /// each iteration.
    ///
    pub fn run_with_callback<T, R, F>(
        &self,
        rng: &mut R,
        init_state: T,
        mut callback: F,
    ) -> AnnealResult<T>
    where
        T: SAState,
        R: Rng,
        F: FnMut(&AnnealStep),
    {
        let mut now = init_state;
        let mut now_cost = now.cost();
        let initial_cost = now_cost;
        let mut best = now.clone();
        let mut best_cost = now_cost;
        let mut history = Vec::with_capacity(history_capacity(self.params.n_iter));
        let mut n_accepted = 0;
        let mut temp = self.params.init_temp;

        for iteration in 0..self.params.n_iter {
            let next = now.next(rng);
            let next_cost = next.cost();

            let is_accepted = next_cost < now_cost || {
                let p = acceptance_probability(now_cost, next_cost, temp);
                rng.gen_bool(p.clamp(0.0, 1.0))
            };

            let step = AnnealStep::new(
                iteration,
                temp,
                now_cost,
                next_cost,
                best_cost.min(next_cost),
                is_accepted,
            );
            trace!(
                "{}\t{:.8}\t{}\t{}\t{}\t{}",
                iteration,
                temp,
                now_cost,
                next_cost,
                is_accepted,
                next.as_string(),
            );

            if is_accepted {
                n_accepted += 1;
                now = next;
                now_cost = next_cost;
                if now_cost < best_cost {
                    best = now.clone();
                    best_cost = now_cost;
                }
            }
            history.push(best_cost);
            callback(&step);

            temp *= self.params.cooling_rate;
        }

        debug!(
            "annealing finished: initial_cost={} best_cost={} accepted={}/{}",
            initial_cost, best_cost, n_accepted, self.params.n_iter
        );
        AnnealResult {
            best,
            best_cost,
            initial_cost,
            history,
            n_accepted,
        }
    }
}

//
// tests
//
