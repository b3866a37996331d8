use clap::Parser;
use tracing::debug;
use roi_kernels::cli::init_tracing;
use roi_kernels::compute::{run_compute, DEFAULT_ITERATIONS};
use roi_kernels::{default_harness, parse_count};

#[derive(Parser, Debug)]
#[command(name="compute", about="Minimal integer add chain plus two FP recurrences")]
struct Args {
    #[arg(value_parser = parse_count, default_value_t = DEFAULT_ITERATIONS)] iterations: u64,
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let mut harness = default_harness();
    let st = run_compute(harness.as_mut(), args.iterations);
    debug!(?st, "compute done");
}
