//!
//! simulated annealing optimization module
//!
//! * `annealer`: generic annealing loop over `SAState`s
//! * `path`: Hamiltonian path search on `HamiltonianGraph`
//!
pub mod annealer;
pub mod path;
