//!
//! Small graphs for tests and demos
//!
use crate::dbg::DeBruijnGraph;
use crate::hamiltonian::HamiltonianGraph;

/// sequence whose 3-mer de Bruijn graph has an Eulerian path from "AC"
pub const EXAMPLE_SEQ: &str = "ATGCGATGACCTGACT";

///
/// Chain ATG -> TGC -> GCA, a single Hamiltonian path
///
pub fn mock_chain() -> HamiltonianGraph {
    HamiltonianGraph::new(&["ATG", "TGC", "GCA"]).unwrap()
}

///
/// Cycle ACG -> CGT -> GTA -> TAC -> ACG, every rotation is a Hamiltonian path
///
pub fn mock_cycle4() -> HamiltonianGraph {
    HamiltonianGraph::new(&["ACG", "CGT", "GTA", "TAC"]).unwrap()
}

///
/// 3-mer de Bruijn graph of `EXAMPLE_SEQ`
///
pub fn mock_example_dbg() -> DeBruijnGraph {
    DeBruijnGraph::from_seq(EXAMPLE_SEQ, 3).unwrap()
}
