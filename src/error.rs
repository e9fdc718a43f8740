use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort the whole run with an UNKNOWN outcome.
///
/// Partial results are never reported: a mount table we cannot read or a
/// selected mount we cannot stat leaves a gap in coverage, and an aggregate
/// severity with gaps is worse than no answer.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("unable to read mount table {}: {}", .path.display(), .source)]
    Enumeration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to stat {mount_point}: {source}")]
    Stat {
        mount_point: String,
        #[source]
        source: nix::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProbeError>;
