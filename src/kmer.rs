//!
//! k-mer helpers
//!
//! k-mers are plain `&str` slices over the alphabet {A,C,G,T}.
//!
use crate::common::VALID_BASES;
use crate::error::{AsmError, Result};

///
/// (k-1)-mer obtained by dropping the last base.
///
pub fn prefix(kmer: &str) -> Result<&str> {
    let mut bases = kmer.chars();
    match bases.next_back() {
        Some(_) => Ok(bases.as_str()),
        None => Err(AsmError::InvalidInput(
            "prefix of an empty k-mer".to_owned(),
        )),
    }
}

///
/// (k-1)-mer obtained by dropping the first base.
///
pub fn suffix(kmer: &str) -> Result<&str> {
    let mut bases = kmer.chars();
    match bases.next() {
        Some(_) => Ok(bases.as_str()),
        None => Err(AsmError::InvalidInput(
            "suffix of an empty k-mer".to_owned(),
        )),
    }
}

///
/// true iff every base is one of A, C, G, T
///
pub fn validate_dna(seq: &str) -> bool {
    seq.bytes().all(|base| VALID_BASES.contains(&base))
}

pub fn validate_kmer(kmer: &str, k: usize) -> bool {
    validate_dna(kmer) && kmer.chars().count() == k
}

///
/// `a -> b` overlap, i.e. suffix of `a` equals prefix of `b`.
///
pub fn is_adjacent(a: &str, b: &str) -> bool {
    match (suffix(a), prefix(b)) {
        (Ok(a_suffix), Ok(b_prefix)) => a_suffix == b_prefix,
        _ => false,
    }
}

///
/// All length-k windows of `seq` from left to right.
///
/// A sequence shorter than k has no window.
///
pub fn split_into_kmers(seq: &str, k: usize) -> Result<Vec<&str>> {
    if k == 0 {
        return Err(AsmError::InvalidInput("k should be >=1".to_owned()));
    }
    // byte offsets of each base, plus the end of the string
    let bounds: Vec<usize> = seq
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(seq.len()))
        .collect();
    let n = bounds.len() - 1;
    if n < k {
        return Ok(Vec::new());
    }
    Ok((0..=n - k).map(|i| &seq[bounds[i]..bounds[i + k]]).collect())
}

///
/// length of the first k-mer, i.e. the k of a k-mer list
///
pub fn first_kmer_len<S: AsRef<str>>(kmers: &[S]) -> Result<usize> {
    match kmers.first() {
        Some(kmer) => Ok(kmer.as_ref().chars().count()),
        None => Err(AsmError::InvalidInput("k-mer list is empty".to_owned())),
    }
}

///
/// Fail on the first k-mer which is not a valid k-mer of length `k`.
///
pub fn check_kmers<S: AsRef<str>>(kmers: &[S], k: usize) -> Result<()> {
    if k == 0 {
        return Err(AsmError::InvalidInput("k should be >=1".to_owned()));
    }
    match kmers
        .iter()
        .enumerate()
        .find(|(_, kmer)| !validate_kmer(kmer.as_ref(), k))
    {
        Some((i, kmer)) => Err(AsmError::InvalidInput(format!(
            "k-mer #{} ({}) is not a DNA sequence of length {}",
            i,
            kmer.as_ref(),
            k
        ))),
        None => Ok(()),
    }
}

//
// Tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_seq::generate;
    use test_case::test_case;

    #[test]
    fn kmer_prefix_suffix() {
        assert_eq!(prefix("ATCG").unwrap(), "ATC");
        assert_eq!(suffix("ATCG").unwrap(), "TCG");
        assert_eq!(prefix("A").unwrap(), "");
        assert_eq!(suffix("A").unwrap(), "");
        assert!(matches!(prefix(""), Err(AsmError::InvalidInput(_))));
        assert!(matches!(suffix(""), Err(AsmError::InvalidInput(_))));
    }

    #[test_case("ACGT" => true)]
    #[test_case("" => true ; "empty")]
    #[test_case("ACGN" => false)]
    #[test_case("acgt" => false ; "lowercase")]
    #[test_case("AUG" => false ; "rna")]
    fn kmer_validate_dna(seq: &str) -> bool {
        validate_dna(seq)
    }

    #[test]
    fn kmer_validate_kmer() {
        assert!(validate_kmer("ATG", 3));
        assert!(!validate_kmer("ATG", 4));
        assert!(!validate_kmer("AXG", 3));
    }

    #[test]
    fn kmer_adjacency() {
        assert!(is_adjacent("ATCGATTAG", "TCGATTAGA"));
        assert!(!is_adjacent("ATCGATTAG", "TCGATTAAA"));
        assert!(!is_adjacent("", "A"));
    }

    #[test]
    fn kmer_split() {
        let kmers = split_into_kmers("ATGCGA", 3).unwrap();
        assert_eq!(kmers, vec!["ATG", "TGC", "GCG", "CGA"]);
        assert_eq!(split_into_kmers("ATG", 3).unwrap(), vec!["ATG"]);
        assert!(split_into_kmers("AT", 3).unwrap().is_empty());
        assert!(split_into_kmers("", 1).unwrap().is_empty());
        assert!(matches!(
            split_into_kmers("ATG", 0),
            Err(AsmError::InvalidInput(_))
        ));
    }

    #[test]
    fn kmer_split_random() {
        for seed in 0..5 {
            let seq = generate(40, seed);
            for k in 1..=seq.len() {
                let kmers = split_into_kmers(&seq, k).unwrap();
                assert_eq!(kmers.len(), seq.len() - k + 1);
                assert!(kmers.iter().all(|kmer| validate_kmer(kmer, k)));
                // first base of each window walks through the sequence
                let heads: String = kmers.iter().map(|kmer| &kmer[..1]).collect();
                assert_eq!(heads, &seq[..seq.len() - k + 1]);
            }
        }
    }
}
