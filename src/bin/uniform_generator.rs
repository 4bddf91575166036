use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process;
use structopt::clap::ErrorKind;
use structopt::StructOpt;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use uniform_generator::{generate, sample_rng, Domain, Samples};

/// Exit status for usage errors.
const EXIT_USAGE: i32 = 1;
/// Exit status when the output file cannot be created or written.
const EXIT_IO_ERROR: i32 = 2;

#[derive(StructOpt, Debug)]
#[structopt(name = "uniform_generator")]
/// Generate uniformly distributed numbers and store them to file.
///
/// By default the numbers are f64 values in [0, 1); with `--die` they are
/// rolls of a fair die with the given number of sides.
struct Config {
    /// Numbers to be generated
    num_samples: usize,
    /// Output file
    #[structopt(parse(from_os_str))]
    output_file: PathBuf,
    /// Roll a die with this many sides (e.g. 4 or 6) instead of drawing from [0, 1)
    #[structopt(long)]
    die: Option<NonZeroU32>,
    /// Write only the values, without the count and bounds lines
    #[structopt(long)]
    no_header: bool,
    /// Seed for a reproducible run
    #[structopt(long)]
    seed: Option<u64>,
}

impl Config {
    fn samples(&self) -> Samples {
        let domain = self.die.map_or(Domain::Unit, Domain::Die);
        Samples::new(self.num_samples)
            .domain(domain)
            .header(!self.no_header)
    }
}

fn init_logging() {
    // Diagnostics go to stderr so stdout only carries the result line.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_config() -> Config {
    match Config::from_iter_safe(std::env::args_os()) {
        Ok(conf) => conf,
        // Missing positionals print usage on stdout.
        Err(e) if e.kind == ErrorKind::MissingRequiredArgument => {
            println!("{}", e.message);
            process::exit(EXIT_USAGE);
        }
        Err(e) => e.exit(),
    }
}

fn main() {
    let conf = parse_config();
    init_logging();

    let mut rng = sample_rng(conf.seed);
    match generate(&conf.samples(), &conf.output_file, &mut rng) {
        Ok(()) => println!(
            "Generated {} samples in {}",
            conf.num_samples,
            conf.output_file.display()
        ),
        Err(e) => {
            debug!(error = ?e, "generation aborted");
            eprintln!("Error writing to file: {}", e);
            process::exit(EXIT_IO_ERROR);
        }
    }
}
