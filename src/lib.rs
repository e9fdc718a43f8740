//! Disk usage check with size-adaptive thresholds.
//!
//! A fixed warn/crit percentage treats a 20 GiB root disk and a 40 TiB
//! array the same, even though the absolute headroom behind "95% full"
//! differs by three orders of magnitude. This crate relaxes byte
//! thresholds with filesystem size ([`scaling::adjusted_percent`]),
//! classifies byte and inode usage per mount, and reports with
//! monitoring-plugin conventions: exit codes 0/1/2/3, one summary line.

pub mod collectors;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod filter;
pub mod models;
pub mod probe;
pub mod report;
pub mod scaling;
pub mod util;
