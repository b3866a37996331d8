use std::io;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KernelError {
    /// A positional argument was not an unsigned integer.
    #[error("invalid numeric argument {value:?}: {source}")]
    ArgumentParse {
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// Masked indexing with `len - 1` is only a modulo when `len` is a nonzero power of two.
    #[error("array size {len} is not a nonzero power of two")]
    InvalidConfiguration { len: u64 },
    #[error("ring of {size} nodes is not a single cycle ({visited} distinct nodes reached)")]
    BrokenRing { size: usize, visited: usize },
    #[error("manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    /// Written by a newer build; fields may have changed meaning.
    #[error("unsupported manifest version {found} (max {supported})")]
    ManifestVersion { found: u32, supported: u32 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, KernelError>;
