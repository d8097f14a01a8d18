pub mod cli;
pub mod common;
pub mod dbg;
pub mod error;
pub mod eval;
pub mod hamiltonian;
pub mod io;
pub mod kmer;
pub mod mocks;
pub mod optimizer;
pub mod prelude;
pub mod random_seq;
pub mod stats;
