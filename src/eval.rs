//!
//! Accuracy of a reconstructed sequence against the true sequence
//!
use crate::error::{AsmError, Result};
use bio::alignment::pairwise::Aligner;
use bio::alignment::AlignmentOperation;
use derive_new::new;
use serde::Serialize;

/// score of a matched base
pub const MATCH_SCORE: i32 = 1;
/// score of a substituted base
pub const MISMATCH_SCORE: i32 = -1;
pub const GAP_OPEN: i32 = -5;
pub const GAP_EXTEND: i32 = -1;

///
/// Summary of a global alignment between the true and the reconstructed
/// sequence.
///
/// `mismatches` counts every non-match column (substitutions and gaps), and
/// `accuracy = (len_true - gaps - mismatches) / len_true`.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, new)]
pub struct Accuracy {
    pub len_true: usize,
    pub len_reconstructed: usize,
    pub gaps: usize,
    pub mismatches: usize,
    pub accuracy: f64,
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "len_true={} len_reconstructed={} gaps={} mismatches={} accuracy={:.4}",
            self.len_true, self.len_reconstructed, self.gaps, self.mismatches, self.accuracy
        )
    }
}

///
/// Globally align `reconstructed` to `true_seq` and summarize the columns.
///
/// The alignment is scored with match +1, mismatch -1, gap open -5 and gap
/// extend -1. Gaps are therefore costly and substitutions are preferred over
/// indels. An LCS-style scoring (match 1, mismatch 0, free gaps) can align
/// the same pair with more gap columns, so its counts and accuracy differ.
///
pub fn evaluate(true_seq: &str, reconstructed: &str) -> Result<Accuracy> {
    if true_seq.is_empty() {
        return Err(AsmError::InvalidInput(
            "true sequence should not be empty".to_owned(),
        ));
    }
    let x = true_seq.as_bytes();
    let y = reconstructed.as_bytes();
    let score = |a: u8, b: u8| if a == b { MATCH_SCORE } else { MISMATCH_SCORE };
    let mut aligner = Aligner::with_capacity(x.len(), y.len(), GAP_OPEN, GAP_EXTEND, score);
    let alignment = aligner.global(x, y);

    let mut gaps = 0;
    let mut substitutions = 0;
    for op in alignment.operations.iter() {
        match op {
            AlignmentOperation::Match => {}
            AlignmentOperation::Subst => substitutions += 1,
            AlignmentOperation::Ins | AlignmentOperation::Del => gaps += 1,
            AlignmentOperation::Xclip(n) | AlignmentOperation::Yclip(n) => gaps += n,
        }
    }
    let mismatches = substitutions + gaps;
    let accuracy = (x.len() as f64 - gaps as f64 - mismatches as f64) / x.len() as f64;
    Ok(Accuracy::new(x.len(), y.len(), gaps, mismatches, accuracy))
}
