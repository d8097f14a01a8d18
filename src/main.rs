use asmgraph::cli;
use asmgraph::optimizer::annealer::AnnealParams;
use clap::{Args, Parser, Subcommand};
use log::error;

#[derive(Parser, Debug)]
#[clap(author, version, about = "genome assembly on de Bruijn and Hamiltonian graphs")]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a random DNA sequence in fasta
    Generate {
        #[clap(short = 'l', long, default_value = "100")]
        length: usize,
        #[clap(short = 's', long, default_value = "0")]
        seed: u64,
    },
    /// Assemble by an Eulerian walk on the de Bruijn graph
    Dbg {
        #[clap(flatten)]
        input: InputOpts,
        #[clap(flatten)]
        exports: ExportOpts,
    },
    /// Assemble by a Hamiltonian path search on the overlap graph
    Ham {
        #[clap(flatten)]
        input: InputOpts,
        #[clap(flatten)]
        exports: ExportOpts,
        /// initial temperature
        #[clap(short = 'T', long, default_value = "1.0")]
        init_temp: f64,
        /// cooling rate in (0,1)
        #[clap(short = 'a', long, default_value = "0.99")]
        cooling_rate: f64,
        #[clap(short = 'n', long, default_value = "1000")]
        n_iter: u64,
        /// number of independent runs
        #[clap(short = 'r', long, default_value = "1")]
        restarts: usize,
    },
}

#[derive(Args, Debug)]
struct InputOpts {
    /// DNA sequence to assemble. A random one is used if omitted.
    #[clap(long)]
    seq: Option<String>,
    /// length of the random sequence
    #[clap(short = 'l', long, default_value = "50")]
    length: usize,
    #[clap(short = 's', long, default_value = "0")]
    seed: u64,
    #[clap(short = 'k', default_value = "3")]
    k: usize,
}

#[derive(Args, Debug)]
struct ExportOpts {
    /// Graphviz dot output
    #[clap(long)]
    dot: Option<std::path::PathBuf>,
    /// cytoscape elements JSON output
    #[clap(long)]
    json: Option<std::path::PathBuf>,
}

impl From<ExportOpts> for cli::Exports {
    fn from(opts: ExportOpts) -> cli::Exports {
        cli::Exports {
            dot: opts.dot,
            json: opts.json,
        }
    }
}

fn run(opts: Opts) -> cli::CliResult {
    match opts.command {
        Command::Generate { length, seed } => {
            cli::generate(length, seed);
            Ok(())
        }
        Command::Dbg { input, exports } => {
            let seq = cli::input_seq(input.seq, input.length, input.seed)?;
            cli::dbg(&seq, input.k, &exports.into())
        }
        Command::Ham {
            input,
            exports,
            init_temp,
            cooling_rate,
            n_iter,
            restarts,
        } => {
            let seq = cli::input_seq(input.seq, input.length, input.seed)?;
            let params = AnnealParams::new(init_temp, cooling_rate, n_iter)?;
            cli::ham(&seq, input.k, params, restarts, input.seed, &exports.into())
        }
    }
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    if let Err(e) = run(opts) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
