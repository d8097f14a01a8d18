//!
//! Eulerian walk over the k-mer edges
//!
//! Each edge is traversed as many times as its multiplicity, so the walk
//! spells the sequence the k-mers were taken from.
//!
use super::DeBruijnGraph;
use crate::common::{EdgeId, Sequence};
use fnv::FnvHashMap as HashMap;
use log::debug;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

///
/// join two circuits at an intersection point
///
/// `None` if the circuits share no node.
///
pub fn join_circuit(
    graph: &DiGraph<(), usize>,
    mut a: Vec<EdgeIndex>,
    mut b: Vec<EdgeIndex>,
) -> Option<Vec<EdgeIndex>> {
    // find intersection point (node that is passed by both circuits)
    let hash_a: HashMap<NodeIndex, usize> = a
        .iter()
        .enumerate()
        .filter_map(|(i, &ea)| graph.edge_endpoints(ea).map(|(source, _)| (source, i)))
        .collect();
    let (ia, ib) = b.iter().enumerate().find_map(|(ib, &eb)| {
        let (source, _) = graph.edge_endpoints(eb)?;
        hash_a.get(&source).map(|&ia| (ia, ib))
    })?;

    // a  = [0, ia)  a2 = [ia, na)
    let mut a2 = a.split_off(ia);
    // b  = [0, ib)  b2 = [ib, nb)
    let mut b2 = b.split_off(ib);

    // a     b2   b   a2
    // ----> ---> --> ------->
    a.append(&mut b2);
    a.append(&mut b);
    a.append(&mut a2);

    Some(a)
}

///
/// get an Euler circuit starting from `from` as edge vector
///
/// Edge weight is the number of times the edge is traversed. Returns `None`
/// if the edges do not form a single balanced component reachable from `from`.
///
pub fn euler_circuit(graph: &DiGraph<(), usize>, from: NodeIndex) -> Option<Vec<EdgeIndex>> {
    // remain[edge] = (how many multiplicity remains in the edge?)
    let mut remain: Vec<usize> = graph.edge_indices().map(|e| graph[e]).collect();
    let mut total_remain: usize = remain.iter().sum();
    let node_remain = |node: NodeIndex, remain: &[usize]| {
        graph
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| remain[edge.id().index()])
            .sum::<usize>()
    };

    // empty circuit is fine
    if total_remain == 0 {
        return Some(vec![]);
    }
    if node_remain(from, &remain) == 0 {
        return None;
    }

    let mut circuit: Vec<EdgeIndex> = Vec::new();
    let mut start = from;
    loop {
        // traverse to find a cycle
        let mut cycle: Vec<EdgeIndex> = Vec::new();
        let mut node = start;
        while let Some(edge) = graph
            .edges_directed(node, Direction::Outgoing)
            .find(|edge| remain[edge.id().index()] > 0)
        {
            cycle.push(edge.id());
            remain[edge.id().index()] -= 1;
            total_remain -= 1;
            node = edge.target();
        }
        if node != start {
            // stuck at a node other than the start: unbalanced
            return None;
        }

        circuit = if circuit.is_empty() {
            cycle
        } else {
            join_circuit(graph, circuit, cycle)?
        };

        if total_remain == 0 {
            break;
        }

        // next cycle starts on the circuit so that it can be joined
        start = circuit
            .iter()
            .filter_map(|&e| graph.edge_endpoints(e).map(|(source, _)| source))
            .find(|&node| node_remain(node, &remain) > 0)?;
    }

    Some(circuit)
}

impl DeBruijnGraph {
    ///
    /// petgraph view: node/edge indices are the same as `NodeId`/`EdgeId`,
    /// and edge weight is the multiplicity.
    ///
    pub fn to_petgraph(&self) -> DiGraph<(), usize> {
        let mut graph = DiGraph::with_capacity(self.n_nodes(), self.n_edges() + 1);
        for _ in self.nodes() {
            graph.add_node(());
        }
        for (_, edge) in self.edges() {
            graph.add_edge(
                NodeIndex::new(edge.from_node().index()),
                NodeIndex::new(edge.to_node().index()),
                edge.multiplicity(),
            );
        }
        graph
    }
    ///
    /// Eulerian walk traversing each edge `multiplicity` times.
    ///
    /// `None` if no such walk exists. An edgeless graph has the empty walk.
    ///
    pub fn euler_walk(&self) -> Option<Vec<EdgeId>> {
        let mut graph = self.to_petgraph();

        // excess[v] = (total out multiplicity) - (total in multiplicity)
        let mut excess = vec![0isize; self.n_nodes()];
        for (_, edge) in self.edges() {
            excess[edge.from_node().index()] += edge.multiplicity() as isize;
            excess[edge.to_node().index()] -= edge.multiplicity() as isize;
        }
        let mut sources = Vec::new();
        let mut sinks = Vec::new();
        for (i, &e) in excess.iter().enumerate() {
            match e {
                0 => {}
                1 => sources.push(NodeIndex::new(i)),
                -1 => sinks.push(NodeIndex::new(i)),
                _ => return None,
            }
        }

        let walk = match (sources.as_slice(), sinks.as_slice()) {
            ([], []) => {
                let start = match self.find_source() {
                    Some(node) => NodeIndex::new(node.index()),
                    None => return Some(vec![]),
                };
                euler_circuit(&graph, start)?
            }
            ([source], [sink]) => {
                // close the path with an extra edge sink -> source and open
                // the circuit there
                let closing = graph.add_edge(*sink, *source, 1);
                let circuit = euler_circuit(&graph, *source)?;
                let i = circuit.iter().position(|&e| e == closing)?;
                let mut walk = circuit[i + 1..].to_vec();
                walk.extend_from_slice(&circuit[..i]);
                walk
            }
            _ => return None,
        };
        debug!("euler walk of {} edges", walk.len());
        Some(walk.into_iter().map(|e| EdgeId(e.index())).collect())
    }
    ///
    /// Spell the Eulerian walk: the first k-mer followed by the last base of
    /// every following k-mer.
    ///
    pub fn reconstruct(&self) -> Option<Sequence> {
        let walk = self.euler_walk()?;
        let (first, rest) = walk.split_first()?;
        let mut seq: Sequence = self.edge(*first).ok()?.kmer().to_owned();
        for &edge in rest {
            seq.extend(self.edge(edge).ok()?.kmer().chars().last());
        }
        Some(seq)
    }
}

//
// tests
//
