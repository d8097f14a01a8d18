//!
//! Hamiltonian assembly graph
//!
//! * nodes: k-mer occurrences. Duplicated k-mers are kept as distinct nodes.
//! * edges: overlaps `u -> v` (u != v) where suffix of u equals prefix of v
//!
//! Adjacency is stored as per-node lists of edge ids, in the same way for
//! both directions.
//!
pub mod output;

use crate::common::{EdgeId, NodeId, Sequence};
use crate::error::{AsmError, Result};
use crate::kmer::{check_kmers, first_kmer_len, prefix, suffix};
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct HamEdge {
    source: NodeId,
    target: NodeId,
    weight: Option<f64>,
}

impl HamEdge {
    pub fn source(&self) -> NodeId {
        self.source
    }
    pub fn target(&self) -> NodeId {
        self.target
    }
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }
}

#[derive(Debug, Clone)]
pub struct HamiltonianGraph {
    k: usize,
    kmers: Vec<String>,
    edges: Vec<HamEdge>,
    out_edges: Vec<Vec<EdgeId>>,
    in_edges: Vec<Vec<EdgeId>>,
}

///
/// Constructors
///
impl HamiltonianGraph {
    ///
    /// Build the overlap graph of `kmers` by comparing all ordered pairs.
    ///
    /// `k` is the length of the first k-mer, and every k-mer should be a DNA
    /// sequence of length `k`.
    ///
    pub fn new<S: AsRef<str>>(kmers: &[S]) -> Result<HamiltonianGraph> {
        let mut graph = HamiltonianGraph {
            k: 0,
            kmers: Vec::new(),
            edges: Vec::new(),
            out_edges: Vec::new(),
            in_edges: Vec::new(),
        };
        graph.rebuild(kmers)?;
        Ok(graph)
    }
    ///
    /// Replace all nodes and edges by the graph of `kmers`.
    ///
    /// `k` is derived again from the first k-mer, so the new list may use
    /// another k. On error the graph is left unchanged.
    ///
    pub fn rebuild<S: AsRef<str>>(&mut self, kmers: &[S]) -> Result<()> {
        let k = first_kmer_len(kmers)?;
        check_kmers(kmers, k)?;

        let prefixes: Vec<&str> = kmers
            .iter()
            .map(|kmer| prefix(kmer.as_ref()))
            .collect::<Result<_>>()?;
        let suffixes: Vec<&str> = kmers
            .iter()
            .map(|kmer| suffix(kmer.as_ref()))
            .collect::<Result<_>>()?;

        let n = kmers.len();
        self.k = k;
        self.kmers = kmers.iter().map(|kmer| kmer.as_ref().to_owned()).collect();
        self.edges.clear();
        self.out_edges = vec![Vec::new(); n];
        self.in_edges = vec![Vec::new(); n];

        // O(n^2) comparison over ordered pairs
        for u in 0..n {
            for v in 0..n {
                if u != v && suffixes[u] == prefixes[v] {
                    self.push_edge(NodeId(u), NodeId(v));
                }
            }
        }
        debug!(
            "hamiltonian graph k={} n_nodes={} n_edges={}",
            self.k,
            self.n_nodes(),
            self.n_edges()
        );
        Ok(())
    }
    fn push_edge(&mut self, source: NodeId, target: NodeId) {
        let edge = EdgeId(self.edges.len());
        self.edges.push(HamEdge {
            source,
            target,
            weight: None,
        });
        self.out_edges[source.index()].push(edge);
        self.in_edges[target.index()].push(edge);
    }
}

///
/// Basic operations
///
impl HamiltonianGraph {
    pub fn k(&self) -> usize {
        self.k
    }
    ///
    /// `k` is derived from the k-mers, so this always fails.
    ///
    pub fn set_k(&mut self, k: usize) -> Result<()> {
        Err(AsmError::InvalidOperation(format!(
            "k is read-only, deduced from k-mers (k={}, requested {})",
            self.k, k
        )))
    }
    pub fn n_nodes(&self) -> usize {
        self.kmers.len()
    }
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.n_nodes()).map(NodeId)
    }
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.n_nodes()
    }
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &HamEdge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (EdgeId(i), edge))
    }
    ///
    /// k-mer value of the node, `NotFound` for an unknown node
    ///
    pub fn kmer(&self, node: NodeId) -> Result<&str> {
        self.kmers
            .get(node.index())
            .map(String::as_str)
            .ok_or_else(|| AsmError::NotFound(format!("node {}", node)))
    }
    pub fn kmers(&self) -> &[String] {
        &self.kmers
    }
    pub fn edge(&self, edge: EdgeId) -> Result<&HamEdge> {
        self.edges
            .get(edge.index())
            .ok_or_else(|| AsmError::NotFound(format!("edge {}", edge)))
    }
    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.out_edges
            .get(source.index())?
            .iter()
            .copied()
            .find(|&edge| self.edges[edge.index()].target == target)
    }
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.find_edge(source, target).is_some()
    }
    pub fn childs(&self, node: NodeId) -> Result<impl Iterator<Item = NodeId> + '_> {
        let edges = self
            .out_edges
            .get(node.index())
            .ok_or_else(|| AsmError::NotFound(format!("node {}", node)))?;
        Ok(edges.iter().map(move |&edge| self.edges[edge.index()].target))
    }
    pub fn parents(&self, node: NodeId) -> Result<impl Iterator<Item = NodeId> + '_> {
        let edges = self
            .in_edges
            .get(node.index())
            .ok_or_else(|| AsmError::NotFound(format!("node {}", node)))?;
        Ok(edges.iter().map(move |&edge| self.edges[edge.index()].source))
    }
    ///
    /// Weight of edge `source -> target`.
    ///
    /// `NotFound` if the edge does not exist or has no weight assigned.
    ///
    pub fn edge_weight(&self, source: NodeId, target: NodeId) -> Result<f64> {
        let edge = self.find_edge(source, target).ok_or_else(|| {
            AsmError::NotFound(format!("edge {} -> {}", source, target))
        })?;
        self.edges[edge.index()].weight.ok_or_else(|| {
            AsmError::NotFound(format!("weight of edge {} -> {}", source, target))
        })
    }
    pub fn set_edge_weight(&mut self, source: NodeId, target: NodeId, weight: f64) -> Result<()> {
        let edge = self.find_edge(source, target).ok_or_else(|| {
            AsmError::NotFound(format!("edge {} -> {}", source, target))
        })?;
        self.edges[edge.index()].weight = Some(weight);
        Ok(())
    }
    pub fn assign_uniform_weights(&mut self, weight: f64) {
        for edge in self.edges.iter_mut() {
            edge.weight = Some(weight);
        }
    }
    ///
    /// Spell a node path: the first k-mer followed by the last base of every
    /// following k-mer.
    ///
    /// Consecutive nodes are not required to overlap, so a path with broken
    /// edges gives a sequence with errors at the breaks.
    ///
    pub fn path_to_sequence(&self, path: &[NodeId]) -> Result<Sequence> {
        let (first, rest) = path
            .split_first()
            .ok_or_else(|| AsmError::InvalidInput("empty path".to_owned()))?;
        let mut seq: Sequence = self.kmer(*first)?.to_owned();
        for &node in rest {
            seq.extend(self.kmer(node)?.chars().last());
        }
        Ok(seq)
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ni;
    use crate::kmer::{is_adjacent, split_into_kmers};
    use crate::random_seq::generate;

    #[test]
    fn ham_simple() {
        let g = HamiltonianGraph::new(&["ATG", "TGC", "GCA"]).unwrap();
        assert_eq!(g.k(), 3);
        assert_eq!(g.n_nodes(), 3);
        assert_eq!(g.n_edges(), 2);
        assert!(g.has_edge(ni(0), ni(1)));
        assert!(g.has_edge(ni(1), ni(2)));
        assert!(!g.has_edge(ni(0), ni(2)));
        assert!(!g.has_edge(ni(1), ni(0)));
        for v in g.nodes() {
            assert!(!g.has_edge(v, v));
        }
        assert_eq!(g.childs(ni(0)).unwrap().collect::<Vec<_>>(), vec![ni(1)]);
        assert_eq!(g.parents(ni(2)).unwrap().collect::<Vec<_>>(), vec![ni(1)]);
        // out of range
        assert!(!g.has_edge(ni(5), ni(0)));
    }

    #[test]
    fn ham_duplicated_kmers() {
        // AAA appears twice: two nodes linked in both directions
        let g = HamiltonianGraph::new(&["AAA", "AAA", "AAC"]).unwrap();
        assert_eq!(g.n_nodes(), 3);
        assert_eq!(g.kmer(ni(0)), g.kmer(ni(1)));
        assert_eq!(g.kmer(ni(2)), Ok("AAC"));
        assert!(g.has_edge(ni(0), ni(1)));
        assert!(g.has_edge(ni(1), ni(0)));
        assert!(g.has_edge(ni(0), ni(2)));
        assert!(g.has_edge(ni(1), ni(2)));
        assert!(!g.has_edge(ni(0), ni(0)));
        assert_eq!(g.n_edges(), 4);
    }

    #[test]
    fn ham_edges_are_overlaps() {
        let seq = generate(50, 3);
        let kmers = split_into_kmers(&seq, 4).unwrap();
        let g = HamiltonianGraph::new(&kmers).unwrap();
        for u in g.nodes() {
            for v in g.nodes() {
                let expected = u != v && is_adjacent(g.kmer(u).unwrap(), g.kmer(v).unwrap());
                assert_eq!(g.has_edge(u, v), expected);
            }
        }
        // the source order is a path
        for i in 0..g.n_nodes() - 1 {
            assert!(g.has_edge(ni(i), ni(i + 1)));
        }
    }

    #[test]
    fn ham_invalid() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            HamiltonianGraph::new(&empty),
            Err(AsmError::InvalidInput(_))
        ));
        match HamiltonianGraph::new(&["ATG", "TGCA"]) {
            Err(AsmError::InvalidInput(message)) => assert!(message.contains("TGCA")),
            _ => panic!("invalid k-mer should be rejected"),
        }
        assert!(matches!(
            HamiltonianGraph::new(&["ATG", "TNC"]),
            Err(AsmError::InvalidInput(_))
        ));
        assert!(matches!(
            HamiltonianGraph::new(&[""]),
            Err(AsmError::InvalidInput(_))
        ));
    }

    #[test]
    fn ham_k_and_rebuild() {
        let mut g = HamiltonianGraph::new(&["ATG", "TGC", "GCA"]).unwrap();
        assert!(matches!(g.set_k(4), Err(AsmError::InvalidOperation(_))));

        g.rebuild(&["ACGT", "CGTA"]).unwrap();
        assert_eq!(g.k(), 4);
        assert_eq!(g.n_nodes(), 2);
        assert_eq!(g.n_edges(), 1);

        // failed rebuild keeps the graph
        assert!(g.rebuild(&["ACGT", "CG"]).is_err());
        assert_eq!(g.k(), 4);
        assert_eq!(g.n_edges(), 1);
    }

    #[test]
    fn ham_edge_weight() {
        let mut g = HamiltonianGraph::new(&["ATG", "TGC", "GCA"]).unwrap();
        assert!(matches!(
            g.edge_weight(ni(0), ni(1)),
            Err(AsmError::NotFound(_))
        ));
        g.set_edge_weight(ni(0), ni(1), 2.5).unwrap();
        assert_eq!(g.edge_weight(ni(0), ni(1)), Ok(2.5));
        assert!(matches!(
            g.set_edge_weight(ni(0), ni(2), 1.0),
            Err(AsmError::NotFound(_))
        ));
        g.assign_uniform_weights(1.0);
        assert_eq!(g.edge_weight(ni(0), ni(1)), Ok(1.0));
        assert_eq!(g.edge_weight(ni(1), ni(2)), Ok(1.0));
        assert!(matches!(
            g.edge_weight(ni(2), ni(0)),
            Err(AsmError::NotFound(_))
        ));
    }

    #[test]
    fn ham_unknown_handles() {
        let g = HamiltonianGraph::new(&["ATG", "TGC"]).unwrap();
        assert!(matches!(g.kmer(ni(5)), Err(AsmError::NotFound(_))));
        assert!(matches!(g.childs(ni(5)), Err(AsmError::NotFound(_))));
        assert!(matches!(g.parents(ni(2)), Err(AsmError::NotFound(_))));
        assert!(matches!(g.edge(EdgeId(1)), Err(AsmError::NotFound(_))));
        assert_eq!(g.edge(EdgeId(0)).unwrap().target(), ni(1));
        assert!(!g.contains_node(ni(2)));
    }

    #[test]
    fn ham_path_to_sequence() {
        let g = HamiltonianGraph::new(&["GCA", "ATG", "TGC"]).unwrap();
        assert_eq!(
            g.path_to_sequence(&[ni(1), ni(2), ni(0)]).unwrap(),
            "ATGCA"
        );
        assert!(matches!(
            g.path_to_sequence(&[]),
            Err(AsmError::InvalidInput(_))
        ));
        assert!(matches!(
            g.path_to_sequence(&[ni(0), ni(3)]),
            Err(AsmError::NotFound(_))
        ));
    }
}
