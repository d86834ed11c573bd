use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::{SeedableRng, rngs::StdRng};

use dist_plot::{
    adapters::output::write_distribution_file,
    config::DEFAULT_OUTPUT_PATH,
    engine::generator::{self, FixedWorkload, GenerateError, PoissonWorkload, WorkloadDistribution},
};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DistributionKind {
    Fixed,
    Poisson,
}

/// Generate an arrival time sample for dist_plot
#[derive(Parser, Debug)]
#[command(name = "gen_distribution", version, about)]
struct Args {
    /// Amount of task arrival times to generate
    #[arg(short = 'n', long, default_value_t = 100)]
    sample_size: u32,

    /// Interarrival probability distribution
    #[arg(short, long, value_enum, default_value_t = DistributionKind::Poisson)]
    distribution: DistributionKind,

    /// Mean interarrival time (constant offset for `fixed`)
    #[arg(short, long, default_value_t = 1.0)]
    mean: f64,

    /// Pseudorandom number generator seed (random when omitted)
    #[arg(short = 's', long)]
    prng_seed: Option<u64>,

    /// File the sample is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Print every generated sample
    #[arg(short = 'l', long)]
    debug: bool,
}

fn build_workload(args: &Args) -> Result<Box<dyn WorkloadDistribution>, GenerateError> {
    Ok(match args.distribution {
        DistributionKind::Fixed => Box::new(FixedWorkload::new(args.mean)?),
        DistributionKind::Poisson => Box::new(PoissonWorkload::new(args.mean)?),
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let workload = build_workload(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let seed = args.prng_seed.unwrap_or_else(rand::random);
    log::info!(
        "Generating {} samples ({:?}, mean {}) with seed {}",
        args.sample_size,
        args.distribution,
        args.mean,
        seed
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let distribution = generator::generate(workload.as_ref(), args.sample_size as usize, &mut rng);

    if args.debug {
        for record in distribution.records() {
            println!(
                "Arrival Time: {:.6}, Interarrival Time: {:.6}.",
                record.arrival, record.interarrival
            );
        }
    }

    if let Err(e) = write_distribution_file(&distribution, &args.output) {
        eprintln!("Error: Failed to write {}: {}", args.output.display(), e);
        std::process::exit(1);
    }

    log::info!("Wrote {} samples to {}", distribution.len(), args.output.display());
}
