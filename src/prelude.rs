//!
//! globally-available parts
//!
pub use crate::common::{EdgeId, NodeId, Sequence};
pub use crate::dbg::DeBruijnGraph;
pub use crate::error::{AsmError, Result};
pub use crate::hamiltonian::HamiltonianGraph;
pub use crate::optimizer::annealer::AnnealParams;
pub use crate::optimizer::path::AnnealingSolver;
