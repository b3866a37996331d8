use clap::Parser;
use tracing::debug;
use roi_kernels::chase::{run_chase, DEFAULT_NODES, DEFAULT_TRAVERSALS};
use roi_kernels::cli::init_tracing;
use roi_kernels::{default_harness, parse_count};

#[derive(Parser, Debug)]
#[command(name="chase", about="Walk a singly linked list head to tail, repeatedly")]
struct Args {
    #[arg(value_parser = parse_count, default_value_t = DEFAULT_NODES)] nodes: u64,
    #[arg(value_parser = parse_count, default_value_t = DEFAULT_TRAVERSALS)] traversals: u64,
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let mut harness = default_harness();
    let sum = run_chase(harness.as_mut(), args.nodes, args.traversals);
    debug!(sum, "chase done");
}
