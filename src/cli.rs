//!
//! Entry points of `asmgraph` subcommands
//!
//! Each function prints a tab separated report to stdout.
//!
use crate::dbg::DeBruijnGraph;
use crate::error::AsmError;
use crate::eval::evaluate;
use crate::hamiltonian::HamiltonianGraph;
use crate::io::cytoscape::{to_json, Element};
use crate::io::write_string;
use crate::kmer::{split_into_kmers, validate_dna};
use crate::optimizer::annealer::AnnealParams;
use crate::optimizer::path::{AnnealingSolver, PathResult};
use crate::random_seq;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use log::{info, warn};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::path::PathBuf;

pub type CliResult = std::result::Result<(), Box<dyn std::error::Error>>;

///
/// Optional files to export the graph into
///
#[derive(Debug, Clone, Default)]
pub struct Exports {
    /// Graphviz dot
    pub dot: Option<PathBuf>,
    /// cytoscape elements JSON
    pub json: Option<PathBuf>,
}

impl Exports {
    fn write<D, E>(&self, dot: D, elements: E) -> CliResult
    where
        D: FnOnce() -> String,
        E: FnOnce() -> Vec<Element>,
    {
        if let Some(path) = &self.dot {
            write_string(path, &dot())?;
            info!("dot written to {}", path.display());
        }
        if let Some(path) = &self.json {
            write_string(path, &to_json(&elements())?)?;
            info!("json written to {}", path.display());
        }
        Ok(())
    }
}

fn print_header() {
    println!("# started_at={}", chrono::Local::now());
}

///
/// The sequence given, or a random one
///
pub fn input_seq(seq: Option<String>, length: usize, seed: u64) -> Result<String, AsmError> {
    match seq {
        Some(seq) => {
            if validate_dna(&seq) {
                Ok(seq)
            } else {
                Err(AsmError::InvalidInput(format!("{} is not a DNA sequence", seq)))
            }
        }
        None => Ok(random_seq::generate(length, seed)),
    }
}

pub fn generate(length: usize, seed: u64) {
    let seq = random_seq::generate(length, seed);
    println!(">randseq");
    println!("{}", seq);
}

///
/// Build the de Bruijn graph of `seq` and spell it back along an Eulerian walk.
///
pub fn dbg(seq: &str, k: usize, exports: &Exports) -> CliResult {
    print_header();
    println!("# k={} seq={}", k, seq);
    let kmers = split_into_kmers(seq, k)?;
    let graph = DeBruijnGraph::from_kmers(&kmers)?;
    println!("{}", graph.stats());

    let is_eulerian = graph.is_eulerian();
    println!("eulerian\t{}", is_eulerian);
    match graph.find_source() {
        Some(source) => println!("source\t{}", graph.node(source)?.value()),
        None => println!("source\t-"),
    }

    let walk = graph.euler_walk();
    match graph.reconstruct() {
        Some(reconstructed) => {
            println!("reconstructed\t{}", reconstructed);
            let accuracy = evaluate(seq, &reconstructed)?;
            println!("accuracy\t{}", accuracy);
        }
        None => warn!("no eulerian walk exists"),
    }

    exports.write(
        || graph.to_dot(),
        || match &walk {
            Some(walk) => graph.to_elements_with_path(walk),
            None => graph.to_elements(),
        },
    )
}

///
/// Build the overlap graph of `seq` and search a Hamiltonian path.
///
/// With `n_restarts == 1` a progress bar follows the iterations.
///
pub fn ham(
    seq: &str,
    k: usize,
    params: AnnealParams,
    n_restarts: usize,
    seed: u64,
    exports: &Exports,
) -> CliResult {
    print_header();
    println!(
        "# k={} seq={} params={:?} restarts={}",
        k, seq, params, n_restarts
    );
    let kmers = split_into_kmers(seq, k)?;
    let graph = HamiltonianGraph::new(&kmers)?;
    println!("{}", graph.stats());

    let solver = AnnealingSolver::new(&graph, params)?;
    let result = if n_restarts == 1 {
        solve_with_progress(&solver, seed)
    } else {
        solver.solve_restarts(n_restarts, seed)?
    };

    println!("initial_cost\t{}", result.initial_cost);
    println!("best_cost\t{}", result.cost);
    println!("hamiltonian\t{}", result.is_hamiltonian());
    println!("path\t{}", result.path.iter().join(","));
    let reconstructed = graph.path_to_sequence(&result.path)?;
    println!("reconstructed\t{}", reconstructed);
    let accuracy = evaluate(seq, &reconstructed)?;
    println!("accuracy\t{}", accuracy);

    exports.write(
        || graph.to_dot(),
        || graph.to_elements_with_path(&result.path),
    )
}

fn solve_with_progress(solver: &AnnealingSolver, seed: u64) -> PathResult {
    let bar = ProgressBar::new(solver.params().n_iter);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}") {
        bar.set_style(style);
    }
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let result = solver.solve_with_callback(&mut rng, |step| {
        bar.inc(1);
        if step.iteration % 100 == 0 {
            bar.set_message(format!("temp={:.4} best={}", step.temp, step.best_cost));
        }
    });
    bar.finish_and_clear();
    result
}
