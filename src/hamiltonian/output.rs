//!
//! Output related functions of HamiltonianGraph
//!
use super::HamiltonianGraph;
use crate::common::NodeId;
use crate::io::cytoscape::Element;
use crate::stats::GraphStats;
use itertools::Itertools;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

impl HamiltonianGraph {
    ///
    /// (number of k-mer occurrences, number of overlaps)
    ///
    pub fn stats(&self) -> GraphStats {
        GraphStats::new(self.n_nodes(), self.n_edges())
    }
    ///
    /// Elements for a renderer; the edges walked by `path` are highlighted.
    ///
    pub fn to_elements_with_path(&self, path: &[NodeId]) -> Vec<Element> {
        let on_path: Vec<(NodeId, NodeId)> = path.iter().copied().tuple_windows().collect();
        let mut elements: Vec<Element> = self
            .nodes()
            .zip(self.kmers())
            .map(|(node, kmer)| Element::Node {
                id: node.index(),
                label: kmer.to_owned(),
            })
            .collect();
        for (edge, weight) in self.edges() {
            elements.push(Element::Edge {
                id: edge.index(),
                source: weight.source().index(),
                target: weight.target().index(),
                label: None,
                multiplicity: None,
                weight: weight.weight(),
                highlighted: on_path.contains(&(weight.source(), weight.target())),
            });
        }
        elements
    }
    pub fn to_elements(&self) -> Vec<Element> {
        self.to_elements_with_path(&[])
    }
    ///
    /// Graphviz dot with k-mer labelled nodes
    ///
    pub fn to_dot(&self) -> String {
        let mut graph: DiGraph<&str, &str> = DiGraph::new();
        for kmer in self.kmers() {
            graph.add_node(kmer.as_str());
        }
        for (_, edge) in self.edges() {
            graph.add_edge(
                NodeIndex::new(edge.source().index()),
                NodeIndex::new(edge.target().index()),
                "",
            );
        }
        format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}

impl std::fmt::Display for HamiltonianGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (node, kmer) in self.nodes().zip(self.kmers()) {
            let childs = self
                .childs(node)
                .into_iter()
                .flatten()
                .map(|child| child.to_string())
                .join(",");
            writeln!(f, "{} {} -> [{}]", node, kmer, childs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ni;

    #[test]
    fn ham_output() {
        let g = HamiltonianGraph::new(&["ATG", "TGC", "GCA"]).unwrap();
        assert_eq!(g.stats(), GraphStats::new(3, 2));

        let elements = g.to_elements_with_path(&[ni(0), ni(1), ni(2)]);
        assert_eq!(elements.len(), 5);
        let n_highlighted = elements
            .iter()
            .filter(|e| matches!(e, Element::Edge { highlighted: true, .. }))
            .count();
        assert_eq!(n_highlighted, 2);
        let n_highlighted = g
            .to_elements_with_path(&[ni(1), ni(2), ni(0)])
            .iter()
            .filter(|e| matches!(e, Element::Edge { highlighted: true, .. }))
            .count();
        assert_eq!(n_highlighted, 1);

        let dot = g.to_dot();
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("TGC"));
        assert_eq!(
            g.to_string(),
            "v0 ATG -> [v1]\nv1 TGC -> [v2]\nv2 GCA -> []\n"
        );
    }
}
