use std::path::PathBuf;

use crate::collectors::mounts::PROC_MOUNTS;
use crate::filter::MountFilter;

/// Bytes per decimal GB, the unit of the minimum-size option.
pub const GB: f64 = 1_000_000_000.0;

/// Everything one run needs to know, assembled by the CLI layer and
/// immutable from there on.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub thresholds: Thresholds,
    pub filter:     MountFilter,
    pub mtab_path:  PathBuf,
    pub verbose:    bool,
    pub linebreaks: bool,
}

/// Threshold knobs. Percentages are 0-100.
#[derive(Debug, Clone)]
pub struct Thresholds {
    pub bytes_warn:  f64,
    pub bytes_crit:  f64,
    pub inodes_warn: f64,
    pub inodes_crit: f64,
    /// Exponent relaxing byte thresholds with size (1.0 = fixed).
    pub magic:       f64,
    /// Filesystem size in MiB at which the scaling factor is exactly 1.
    pub normal:      f64,
    /// Filesystems below this many bytes keep their base thresholds.
    pub minimum_bytes: f64,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            filter:     MountFilter::default(),
            mtab_path:  PathBuf::from(PROC_MOUNTS),
            verbose:    false,
            linebreaks: false,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            bytes_warn:    85.0,
            bytes_crit:    95.0,
            inodes_warn:   85.0,
            inodes_crit:   95.0,
            magic:         1.0,
            normal:        20.0,
            minimum_bytes: 100.0 * GB,
        }
    }
}
