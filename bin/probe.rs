use roi_kernels::cli::init_tracing;
use roi_kernels::default_harness;
use roi_kernels::probe::{log_path, run_probe};

// Takes no parsed options: every argument is part of what gets recorded.
fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();
    let mut harness = default_harness();
    if run_probe(harness.as_mut(), &log_path(), &args).is_err() {
        eprintln!("Unable to open log file.");
    }
}
