//!
//! Graph elements in cytoscape.js JSON format, consumed by external renderers
//!
use crate::common::Multiplicity;
use serde::Serialize;

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "group", content = "data")]
pub enum Element {
    #[serde(rename = "nodes")]
    Node { id: usize, label: String },
    #[serde(rename = "edges")]
    Edge {
        id: usize,
        source: usize,
        target: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        multiplicity: Option<Multiplicity>,
        #[serde(skip_serializing_if = "Option::is_none")]
        weight: Option<f64>,
        /// edge is on the highlighted path
        #[serde(skip_serializing_if = "is_false")]
        highlighted: bool,
    },
}

impl Element {
    pub fn is_node(&self) -> bool {
        matches!(self, Element::Node { .. })
    }
    pub fn is_edge(&self) -> bool {
        matches!(self, Element::Edge { .. })
    }
}

///
/// serialize elements into pretty JSON
///
pub fn to_json(elements: &[Element]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(elements)
}
