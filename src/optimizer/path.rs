//!
//! Hamiltonian path search by simulated annealing
//!
//! A state is a permutation of all nodes of a `HamiltonianGraph`, and a
//! neighbor is made by swapping two positions.
//!
use super::annealer::{AnnealParams, AnnealStep, Annealer, SAState};
use crate::common::NodeId;
use crate::error::{AsmError, Result};
use crate::hamiltonian::HamiltonianGraph;
use fnv::FnvHashSet as HashSet;
use itertools::Itertools;
use log::info;
use rand::prelude::*;
use rand::seq::index::sample;
use rand_xoshiro::Xoshiro256PlusPlus;

/// cost of visiting a node again
pub const REVISIT_PENALTY: f64 = 5.0;
/// cost of a consecutive pair which is not an edge
pub const BROKEN_EDGE_PENALTY: f64 = 10.0;

///
/// Cost of a node path.
///
/// `5 * (revisits) + 10 * (broken edges)`, or infinity if the path is shorter
/// than the number of nodes. Zero means a Hamiltonian path.
///
pub fn path_cost(graph: &HamiltonianGraph, path: &[NodeId]) -> f64 {
    if path.len() < graph.n_nodes() {
        return f64::INFINITY;
    }
    let mut visited: HashSet<NodeId> = HashSet::default();
    let n_revisits = path.iter().filter(|&&node| !visited.insert(node)).count();
    let n_broken = path
        .iter()
        .tuple_windows()
        .filter(|(&u, &v)| !graph.has_edge(u, v))
        .count();
    REVISIT_PENALTY * n_revisits as f64 + BROKEN_EDGE_PENALTY * n_broken as f64
}

///
/// Node permutation with its cost
///
#[derive(Debug, Clone)]
pub struct PathState<'a> {
    graph: &'a HamiltonianGraph,
    path: Vec<NodeId>,
    cost: f64,
}

impl<'a> PathState<'a> {
    pub fn new(graph: &'a HamiltonianGraph, path: Vec<NodeId>) -> PathState<'a> {
        let cost = path_cost(graph, &path);
        PathState { graph, path, cost }
    }
    /// uniformly random permutation of all nodes
    pub fn random<R: Rng>(graph: &'a HamiltonianGraph, rng: &mut R) -> PathState<'a> {
        let mut path: Vec<NodeId> = graph.nodes().collect();
        path.shuffle(rng);
        PathState::new(graph, path)
    }
    pub fn path(&self) -> &[NodeId] {
        &self.path
    }
    pub fn into_path(self) -> Vec<NodeId> {
        self.path
    }
}

impl<'a> SAState for PathState<'a> {
    fn cost(&self) -> f64 {
        self.cost
    }
    /// swap two distinct positions
    fn next<R: Rng>(&self, rng: &mut R) -> Self {
        let mut path = self.path.clone();
        if path.len() >= 2 {
            let positions = sample(rng, path.len(), 2);
            path.swap(positions.index(0), positions.index(1));
        }
        PathState::new(self.graph, path)
    }
    fn as_string(&self) -> String {
        self.path.iter().join(",")
    }
}

///
/// Output of the path search
///
#[derive(Debug, Clone)]
pub struct PathResult {
    /// best node permutation found
    pub path: Vec<NodeId>,
    /// cost of `path`
    pub cost: f64,
    /// cost of the random initial permutation
    pub initial_cost: f64,
    /// best cost after each iteration
    pub history: Vec<f64>,
}

impl PathResult {
    /// true if `path` visits every node once along existing edges
    pub fn is_hamiltonian(&self) -> bool {
        self.cost == 0.0
    }
}

///
/// Approximate Hamiltonian path solver on a `HamiltonianGraph`
///
#[derive(Debug, Clone)]
pub struct AnnealingSolver<'a> {
    graph: &'a HamiltonianGraph,
    annealer: Annealer,
}

impl<'a> AnnealingSolver<'a> {
    pub fn new(graph: &'a HamiltonianGraph, params: AnnealParams) -> Result<AnnealingSolver<'a>> {
        Ok(AnnealingSolver {
            graph,
            annealer: Annealer::new(params)?,
        })
    }
    pub fn graph(&self) -> &HamiltonianGraph {
        self.graph
    }
    pub fn params(&self) -> &AnnealParams {
        self.annealer.params()
    }
    pub fn cost(&self, path: &[NodeId]) -> f64 {
        path_cost(self.graph, path)
    }
    pub fn solve<R: Rng>(&self, rng: &mut R) -> PathResult {
        self.solve_with_callback(rng, |_| {})
    }
    ///
    /// Run the search from a random permutation. `callback` receives the
    /// record of every iteration for progress reporting.
    ///
    pub fn solve_with_callback<R, F>(&self, rng: &mut R, callback: F) -> PathResult
    where
        R: Rng,
        F: FnMut(&AnnealStep),
    {
        let init = PathState::random(self.graph, rng);
        let result = self.annealer.run_with_callback(rng, init, callback);
        PathResult {
            path: result.best.into_path(),
            cost: result.best_cost,
            initial_cost: result.initial_cost,
            history: result.history,
        }
    }
    pub fn solve_with_seed(&self, seed: u64) -> PathResult {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        self.solve(&mut rng)
    }
    ///
    /// Independent runs seeded with `seed, seed+1, ...`, one after another.
    /// The lowest cost wins, earlier runs first on ties.
    ///
    pub fn solve_restarts(&self, n_restarts: usize, seed: u64) -> Result<PathResult> {
        let mut best: Option<PathResult> = None;
        for i in 0..n_restarts {
            let result = self.solve_with_seed(seed.wrapping_add(i as u64));
            info!("restart #{} cost={}", i, result.cost);
            let is_better = match &best {
                Some(b) => result.cost < b.cost,
                None => true,
            };
            if is_better {
                best = Some(result);
            }
            if best.as_ref().map_or(false, |b| b.is_hamiltonian()) {
                break;
            }
        }
        best.ok_or_else(|| AsmError::InvalidInput("number of restarts should be >=1".to_owned()))
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ni;
    use crate::mocks::{mock_chain, mock_cycle4};
    use approx::assert_abs_diff_eq;

    #[test]
    fn cost_function() {
        let g = HamiltonianGraph::new(&["ATG", "TGC", "GCA"]).unwrap();
        assert_abs_diff_eq!(path_cost(&g, &[ni(0), ni(1), ni(2)]), 0.0);
        // one broken edge
        assert_abs_diff_eq!(path_cost(&g, &[ni(1), ni(2), ni(0)]), 10.0);
        // two broken edges
        assert_abs_diff_eq!(path_cost(&g, &[ni(2), ni(1), ni(0)]), 20.0);
        // revisit of 0 and broken edges 1->0, 0->... none
        assert_abs_diff_eq!(path_cost(&g, &[ni(0), ni(1), ni(0)]), 15.0);
        // incomplete
        assert_eq!(path_cost(&g, &[ni(0), ni(1)]), f64::INFINITY);
    }

    #[test]
    fn path_state_next_is_swap() {
        let g = mock_chain();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);
        let s = PathState::random(&g, &mut rng);
        for _ in 0..50 {
            let t = s.next(&mut rng);
            assert_eq!(t.path().len(), s.path().len());
            let n_diff = s
                .path()
                .iter()
                .zip(t.path().iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(n_diff, 2);
            let mut sorted = t.path().to_vec();
            sorted.sort();
            assert_eq!(sorted, g.nodes().collect::<Vec<_>>());
        }
    }

    #[test]
    fn single_node() {
        let g = HamiltonianGraph::new(&["ACGT"]).unwrap();
        let solver = AnnealingSolver::new(&g, AnnealParams::default()).unwrap();
        let result = solver.solve_with_seed(0);
        assert_eq!(result.path, vec![ni(0)]);
        assert!(result.is_hamiltonian());
    }

    #[test]
    fn solver_invalid_params() {
        let g = mock_cycle4();
        let params = AnnealParams {
            init_temp: 1.0,
            cooling_rate: 1.5,
            n_iter: 10,
        };
        assert!(matches!(
            AnnealingSolver::new(&g, params),
            Err(AsmError::InvalidInput(_))
        ));
        let solver = AnnealingSolver::new(&g, AnnealParams::default()).unwrap();
        assert!(solver.solve_restarts(0, 0).is_err());
    }

    #[test]
    fn solver_best_cost_is_monotonic() {
        let g = mock_chain();
        let params = AnnealParams::new(1.0, 0.99, 500).unwrap();
        let solver = AnnealingSolver::new(&g, params).unwrap();
        for seed in 0..5 {
            let result = solver.solve_with_seed(seed);
            assert_eq!(result.history.len(), 500);
            assert!(result.cost <= result.initial_cost);
            for w in result.history.windows(2) {
                assert!(w[1] <= w[0]);
            }
            assert_abs_diff_eq!(*result.history.last().unwrap(), result.cost);
            assert_abs_diff_eq!(solver.cost(&result.path), result.cost);
        }
    }

    #[test]
    fn solver_cycle4_zero_cost() {
        let g = mock_cycle4();
        let params = AnnealParams::new(1.0, 0.99, 5000).unwrap();
        let solver = AnnealingSolver::new(&g, params).unwrap();
        let n_solved = (0..20)
            .filter(|&seed| solver.solve_with_seed(seed).is_hamiltonian())
            .count();
        assert!(n_solved >= 18, "solved {}/20", n_solved);

        let result = solver.solve_restarts(5, 100).unwrap();
        assert!(result.is_hamiltonian());
        // rotation of the cycle
        for (u, v) in result.path.iter().tuple_windows() {
            assert!(g.has_edge(*u, *v));
        }
    }

    #[test]
    fn solver_callback() {
        let g = mock_cycle4();
        let params = AnnealParams::new(2.0, 0.5, 20).unwrap();
        let solver = AnnealingSolver::new(&g, params).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let mut steps = Vec::new();
        let result = solver.solve_with_callback(&mut rng, |step| steps.push(*step));
        assert_eq!(steps.len(), 20);
        assert_abs_diff_eq!(steps[0].temp, 2.0);
        assert_abs_diff_eq!(steps[3].temp, 0.25);
        assert_abs_diff_eq!(steps[19].best_cost, result.cost);
        assert_abs_diff_eq!(steps[0].current_cost, result.initial_cost);
    }
}
