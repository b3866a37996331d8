use std::path::PathBuf;
use clap::Parser;
use tracing::error;

use roi_kernels::cli::init_tracing;
use roi_kernels::config::{DEFAULT_ARRAY_LEN, DEFAULT_ITERATIONS};
use roi_kernels::harness::{DEFAULT_ROI_FLAG, DEFAULT_ROI_ID};
use roi_kernels::{default_harness, parse_count, run_with_manifest, KernelConfig, Roi};

#[derive(Parser, Debug)]
#[command(name="mixed", about="Fused ALU/FPU/branch/cache kernel bracketed by ROI markers")]
struct Args {
    /// Number of ticks inside the measured region
    #[arg(value_parser = parse_count, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u64,
    /// Length of each memory region (power of two)
    #[arg(value_parser = parse_count, default_value_t = DEFAULT_ARRAY_LEN)]
    array_size: u64,
    #[arg(long, default_value_t = DEFAULT_ROI_ID)] roi_id: u64,
    #[arg(long, default_value_t = DEFAULT_ROI_FLAG)] roi_flag: u64,
    /// Write a JSON run manifest after the result line
    #[arg(long)] manifest: Option<PathBuf>,
    /// Compare the run against a saved manifest, exit 1 on mismatch
    #[arg(long)] expect: Option<PathBuf>,
}

fn run(args: &Args) -> roi_kernels::Result<bool> {
    let cfg = KernelConfig::new(args.iterations, args.array_size);
    let roi = Roi { id: args.roi_id, flag: args.roi_flag };
    let mut harness = default_harness();
    run_with_manifest(cfg, roi, harness.as_mut(), &mut std::io::stdout().lock(),
                      args.manifest.as_deref(), args.expect.as_deref())
}

fn main() {
    init_tracing();
    let args = Args::parse();
    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
