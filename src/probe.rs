// src/probe.rs
//! Diagnostic kernel: dumps the received argument vector to a log file from
//! inside the bracketed region. Produces no checksum.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::harness::{bracket, Harness, DEFAULT_ROI_FLAG, DEFAULT_ROI_ID};

pub const DEFAULT_LOG: &str = "test_log.txt";
pub const LOG_ENV: &str = "PROBE_LOG";

pub fn log_path() -> PathBuf {
    std::env::var_os(LOG_ENV).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_LOG))
}

/// Argument count, then one `argv[i] = <arg>` line per argument.
pub fn write_args<W: Write>(w: &mut W, args: &[String]) -> io::Result<()> {
    writeln!(w, "{}", args.len())?;
    for (i, a) in args.iter().enumerate() {
        writeln!(w, "argv[{}] = {}", i, a)?;
    }
    w.flush()
}

/// The region is closed even when the log cannot be written; reporting the
/// failure is left to the caller.
pub fn run_probe<H: Harness + ?Sized>(harness: &mut H, path: &Path, args: &[String]) -> io::Result<()> {
    bracket(harness, DEFAULT_ROI_ID, DEFAULT_ROI_FLAG, || {
        File::create(path).and_then(|mut f| write_args(&mut f, args))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{Marker, RecordingHarness};
    use tempfile::TempDir;

    fn args() -> Vec<String> { vec!["probe".into(), "--x".into(), "7".into()] }

    #[test]
    fn dump_format() {
        let mut buf = Vec::new();
        write_args(&mut buf, &args()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "3\nargv[0] = probe\nargv[1] = --x\nargv[2] = 7\n");
    }

    #[test]
    fn writes_file_inside_region() {
        let mut h = RecordingHarness::default();
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("log.txt");
        run_probe(&mut h, &path, &args()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("3\nargv[0] = probe"));
        assert_eq!(h.calls.len(), 2);
    }

    #[test]
    fn failure_still_closes_region() {
        let mut h = RecordingHarness::default();
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("log.txt");
        let err = run_probe(&mut h, &path, &args()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(h.calls.len(), 2);
        assert_eq!(h.calls.last().map(|c| c.0), Some(Marker::End));
        assert!(!path.exists());
    }
}
