//!
//! De Bruijn graph with degree-tracked nodes
//!
//! * edges: k-mers, repeated k-mers are collapsed into one edge with multiplicity
//! * nodes: (k-1)-mer prefixes and suffixes of the k-mers, identified by value
//!
//! The node registry is owned by each graph instance.
//!
pub mod euler;
pub mod output;

use crate::common::{EdgeId, Multiplicity, NodeId};
use crate::error::{AsmError, Result};
use crate::kmer::{check_kmers, first_kmer_len, prefix, split_into_kmers, suffix, validate_dna};
use fnv::FnvHashMap as HashMap;
use log::{debug, warn};

///
/// (k-1)-mer node with its in/out degree.
///
/// Degrees are only changed by `DeBruijnGraph::add_edge`.
///
#[derive(Debug, Clone)]
pub struct DbgNode {
    value: String,
    in_degree: usize,
    out_degree: usize,
}

impl DbgNode {
    fn new(value: &str) -> DbgNode {
        DbgNode {
            value: value.to_owned(),
            in_degree: 0,
            out_degree: 0,
        }
    }
    pub fn value(&self) -> &str {
        &self.value
    }
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }
}

impl PartialEq for DbgNode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for DbgNode {}

impl std::fmt::Display for DbgNode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

///
/// k-mer edge `prefix -> suffix`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbgEdge {
    kmer: String,
    from_node: NodeId,
    to_node: NodeId,
    multiplicity: Multiplicity,
}

impl DbgEdge {
    pub fn kmer(&self) -> &str {
        &self.kmer
    }
    pub fn from_node(&self) -> NodeId {
        self.from_node
    }
    pub fn to_node(&self) -> NodeId {
        self.to_node
    }
    pub fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }
}

impl std::fmt::Display for DbgEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.kmer)
    }
}

#[derive(Debug, Clone)]
pub struct DeBruijnGraph {
    k: usize,
    nodes: Vec<DbgNode>,
    node_ids: HashMap<String, NodeId>,
    edges: Vec<DbgEdge>,
    edge_ids: HashMap<String, EdgeId>,
}

///
/// Constructors
///
impl DeBruijnGraph {
    pub fn new(k: usize) -> Result<DeBruijnGraph> {
        if k == 0 {
            return Err(AsmError::InvalidInput("k should be >=1".to_owned()));
        }
        Ok(DeBruijnGraph {
            k,
            nodes: Vec::new(),
            node_ids: HashMap::default(),
            edges: Vec::new(),
            edge_ids: HashMap::default(),
        })
    }
    ///
    /// Build from a list of k-mers. `k` is the length of the first k-mer.
    ///
    /// Every k-mer is validated before insertion, and a single malformed one
    /// rejects the whole list.
    ///
    pub fn from_kmers<S: AsRef<str>>(kmers: &[S]) -> Result<DeBruijnGraph> {
        let k = first_kmer_len(kmers)?;
        check_kmers(kmers, k)?;
        let mut graph = DeBruijnGraph::new(k)?;
        graph.add_kmers(kmers);
        Ok(graph)
    }
    pub fn from_seq(seq: &str, k: usize) -> Result<DeBruijnGraph> {
        if !validate_dna(seq) {
            return Err(AsmError::InvalidInput(
                "sequence should consist of A, C, G, T".to_owned(),
            ));
        }
        let mut graph = DeBruijnGraph::new(k)?;
        graph.add_kmers(&split_into_kmers(seq, k)?);
        Ok(graph)
    }
}

///
/// Basic operations
///
impl DeBruijnGraph {
    pub fn k(&self) -> usize {
        self.k
    }
    ///
    /// `k` is fixed at construction, so this always fails.
    ///
    pub fn set_k(&mut self, k: usize) -> Result<()> {
        Err(AsmError::InvalidOperation(format!(
            "k is read-only (k={}, requested {})",
            self.k, k
        )))
    }
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }
    /// number of distinct k-mers
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }
    /// number of inserted k-mers, i.e. sum of multiplicities
    pub fn n_edges_with_multiplicity(&self) -> usize {
        self.edges.iter().map(|edge| edge.multiplicity).sum()
    }
    /// `NotFound` for a handle not issued by this graph
    pub fn node(&self, node: NodeId) -> Result<&DbgNode> {
        self.nodes
            .get(node.index())
            .ok_or_else(|| AsmError::NotFound(format!("node {}", node)))
    }
    pub fn edge(&self, edge: EdgeId) -> Result<&DbgEdge> {
        self.edges
            .get(edge.index())
            .ok_or_else(|| AsmError::NotFound(format!("edge {}", edge)))
    }
    /// nodes in order of creation
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &DbgNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }
    /// edges in order of first insertion
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &DbgEdge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (EdgeId(i), edge))
    }
    pub fn find_node(&self, value: &str) -> Option<NodeId> {
        self.node_ids.get(value).copied()
    }
    pub fn find_edge(&self, kmer: &str) -> Option<EdgeId> {
        self.edge_ids.get(kmer).copied()
    }
    pub fn multiplicity(&self, kmer: &str) -> Multiplicity {
        match self.find_edge(kmer) {
            Some(edge) => self.edges[edge.index()].multiplicity,
            None => 0,
        }
    }
    fn get_or_insert_node(&mut self, value: &str) -> NodeId {
        match self.node_ids.get(value) {
            Some(&node) => node,
            None => {
                let node = NodeId(self.nodes.len());
                self.nodes.push(DbgNode::new(value));
                self.node_ids.insert(value.to_owned(), node);
                node
            }
        }
    }
    ///
    /// Insert a k-mer as an edge `prefix -> suffix`.
    ///
    /// A k-mer already in the graph only gets its multiplicity incremented;
    /// node degrees are incremented once per distinct k-mer.
    /// A k-mer of wrong length or alphabet is skipped with a warning and
    /// reported as `InvalidInput`.
    ///
    pub fn add_edge(&mut self, kmer: &str) -> Result<EdgeId> {
        let length = kmer.chars().count();
        if length != self.k {
            warn!(
                "k-mer {} of size {} is not valid for this graph (k={}), skipped",
                kmer, length, self.k
            );
            return Err(AsmError::InvalidInput(format!(
                "k-mer {} has length {} (k={})",
                kmer, length, self.k
            )));
        }
        if !validate_dna(kmer) {
            warn!("k-mer {} has non-ACGT bases, skipped", kmer);
            return Err(AsmError::InvalidInput(format!(
                "k-mer {} should consist of A, C, G, T",
                kmer
            )));
        }

        if let Some(&edge) = self.edge_ids.get(kmer) {
            self.edges[edge.index()].multiplicity += 1;
            return Ok(edge);
        }

        let from_node = self.get_or_insert_node(prefix(kmer)?);
        let to_node = self.get_or_insert_node(suffix(kmer)?);
        self.nodes[from_node.index()].out_degree += 1;
        self.nodes[to_node.index()].in_degree += 1;

        let edge = EdgeId(self.edges.len());
        self.edges.push(DbgEdge {
            kmer: kmer.to_owned(),
            from_node,
            to_node,
            multiplicity: 1,
        });
        self.edge_ids.insert(kmer.to_owned(), edge);
        Ok(edge)
    }
    ///
    /// Insert all k-mers, skipping malformed ones.
    /// Returns the number of k-mers inserted.
    ///
    pub fn add_kmers<S: AsRef<str>>(&mut self, kmers: &[S]) -> usize {
        let n_added = kmers
            .iter()
            .filter(|kmer| self.add_edge(kmer.as_ref()).is_ok())
            .count();
        debug!(
            "added {}/{} k-mers (n_nodes={} n_edges={})",
            n_added,
            kmers.len(),
            self.n_nodes(),
            self.n_edges()
        );
        n_added
    }
    ///
    /// Clear all nodes and edges and insert `kmers` again.
    ///
    /// `k` is kept: k-mers of another length are skipped with a warning like
    /// in `add_edge`. Returns the number of k-mers inserted.
    ///
    pub fn rebuild<S: AsRef<str>>(&mut self, kmers: &[S]) -> usize {
        self.nodes.clear();
        self.node_ids.clear();
        self.edges.clear();
        self.edge_ids.clear();
        self.add_kmers(kmers)
    }
}

///
/// Eulerian feasibility
///
impl DeBruijnGraph {
    ///
    /// Check whether the degrees allow an Eulerian path or circuit.
    ///
    /// Every node should be balanced, except at most one source
    /// (out = in + 1) and one sink (in = out + 1) which come in a pair.
    ///
    pub fn is_eulerian(&self) -> bool {
        let mut n_sources = 0;
        let mut n_sinks = 0;
        for node in self.nodes.iter() {
            let diff = node.in_degree as isize - node.out_degree as isize;
            match diff {
                0 => {}
                1 => n_sinks += 1,
                -1 => n_sources += 1,
                _ => return false,
            }
        }
        (n_sources == 0 && n_sinks == 0) || (n_sources == 1 && n_sinks == 1)
    }
    ///
    /// Start node of an Eulerian path.
    ///
    /// The first node with out = in + 1 if any, otherwise the first node
    /// having an out edge.
    ///
    pub fn find_source(&self) -> Option<NodeId> {
        self.nodes()
            .find(|(_, node)| node.out_degree == node.in_degree + 1)
            .or_else(|| self.nodes().find(|(_, node)| node.out_degree > 0))
            .map(|(id, _)| id)
    }
}

//
// tests
//
