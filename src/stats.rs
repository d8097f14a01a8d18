//!
//! Node/edge counts handed to reporting
//!
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct GraphStats {
    /// number of nodes
    pub n_nodes: usize,
    /// number of edges. repeated k-mers are counted with their multiplicity
    pub n_edges: usize,
}

impl GraphStats {
    pub fn to_json(&self) -> String {
        // a struct of two integers always serializes
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl std::fmt::Display for GraphStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "kmers\t{}", self.n_nodes)?;
        write!(f, "overlaps\t{}", self.n_edges)
    }
}
