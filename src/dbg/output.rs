//!
//! Output related functions of DeBruijnGraph
//!
use super::DeBruijnGraph;
use crate::common::EdgeId;
use crate::io::cytoscape::Element;
use crate::stats::GraphStats;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

impl DeBruijnGraph {
    ///
    /// (number of nodes, number of k-mers counting multiplicity)
    ///
    pub fn stats(&self) -> GraphStats {
        GraphStats::new(self.n_nodes(), self.n_edges_with_multiplicity())
    }
    ///
    /// Nodes and k-mer labelled edges for a renderer. Edges in `path` are
    /// marked as highlighted.
    ///
    pub fn to_elements_with_path(&self, path: &[EdgeId]) -> Vec<Element> {
        let mut elements = Vec::new();
        for (node, weight) in self.nodes() {
            elements.push(Element::Node {
                id: node.index(),
                label: weight.value().to_owned(),
            });
        }
        for (edge, weight) in self.edges() {
            elements.push(Element::Edge {
                id: edge.index(),
                source: weight.from_node().index(),
                target: weight.to_node().index(),
                label: Some(weight.kmer().to_owned()),
                multiplicity: Some(weight.multiplicity()),
                weight: None,
                highlighted: path.contains(&edge),
            });
        }
        elements
    }
    pub fn to_elements(&self) -> Vec<Element> {
        self.to_elements_with_path(&[])
    }
    ///
    /// Graphviz dot with (k-1)-mer nodes and k-mer edges
    ///
    pub fn to_dot(&self) -> String {
        let mut graph: DiGraph<&str, String> = DiGraph::new();
        for (_, node) in self.nodes() {
            graph.add_node(node.value());
        }
        for (_, edge) in self.edges() {
            let label = if edge.multiplicity() > 1 {
                format!("{} x{}", edge.kmer(), edge.multiplicity())
            } else {
                edge.kmer().to_owned()
            };
            graph.add_edge(
                NodeIndex::new(edge.from_node().index()),
                NodeIndex::new(edge.to_node().index()),
                label,
            );
        }
        format!("{}", Dot::with_config(&graph, &[]))
    }
}

impl std::fmt::Display for DeBruijnGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (_, edge) in self.edges() {
            writeln!(f, "{} {}", edge.kmer(), edge.multiplicity())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ei;

    #[test]
    fn dbg_stats() {
        let g = DeBruijnGraph::from_seq("ATGCGATGACCTGACT", 3).unwrap();
        let s = g.stats();
        assert_eq!(s.n_nodes, 8);
        assert_eq!(s.n_edges, 14);
    }

    #[test]
    fn dbg_elements() {
        let g = DeBruijnGraph::from_kmers(&["ATG", "TGC", "ATG"]).unwrap();
        let elements = g.to_elements_with_path(&[ei(1)]);
        assert_eq!(elements.iter().filter(|e| e.is_node()).count(), 3);
        assert_eq!(elements.iter().filter(|e| e.is_edge()).count(), 2);
        assert_eq!(
            elements[3],
            Element::Edge {
                id: 0,
                source: 0,
                target: 1,
                label: Some("ATG".to_owned()),
                multiplicity: Some(2),
                weight: None,
                highlighted: false,
            }
        );
        match &elements[4] {
            Element::Edge { highlighted, .. } => assert!(*highlighted),
            _ => panic!("edge expected"),
        }
    }

    #[test]
    fn dbg_dot_and_display() {
        let g = DeBruijnGraph::from_kmers(&["ATG", "TGC", "ATG"]).unwrap();
        let dot = g.to_dot();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("ATG x2"));
        assert!(dot.contains("TGC"));
        assert_eq!(g.to_string(), "ATG 2\nTGC 1\n");
    }
}
