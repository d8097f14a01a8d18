//!
//! Shared type aliases and constants
//!

/// Type of DNA sequence stored as a string of bases.
pub type Sequence = String;

/// integer multiplicity (= occurrence of an identical k-mer in the input)
pub type Multiplicity = usize;

///
/// Array of valid DNA bases
///
pub const VALID_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

///
/// Handle of a node in a graph.
///
/// A node of `DeBruijnGraph` is identified by its (k-1)-mer value, so the
/// handle is only a position in the node registry. A node of
/// `HamiltonianGraph` is one occurrence of a k-mer, so two handles can point to
/// k-mers with the same value.
///
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Hash, Copy, Clone, serde::Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

///
/// Handle of an edge in a graph.
///
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Hash, Copy, Clone, serde::Serialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

///
/// short-hand of `NodeId`
///
pub fn ni(index: usize) -> NodeId {
    NodeId(index)
}

///
/// short-hand of `EdgeId`
///
pub fn ei(index: usize) -> EdgeId {
    EdgeId(index)
}
