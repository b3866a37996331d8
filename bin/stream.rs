use clap::Parser;
use roi_kernels::cli::init_tracing;
use roi_kernels::stream::{run_stream, stream_line, DEFAULT_LENGTH, DEFAULT_STRIDE};
use roi_kernels::{default_harness, parse_count};

#[derive(Parser, Debug)]
#[command(name="stream", about="Strided triad A = B + s*C over f64 arrays")]
struct Args {
    #[arg(value_parser = parse_count, default_value_t = DEFAULT_LENGTH)] length: u64,
    #[arg(value_parser = parse_count, default_value_t = DEFAULT_STRIDE)] stride: u64,
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let mut harness = default_harness();
    let checksum = run_stream(harness.as_mut(), args.length, args.stride);
    println!("{}", stream_line(checksum));
}
