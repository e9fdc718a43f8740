use crate::config::Thresholds;
use crate::models::{MountStats, Status};
use crate::scaling;

/// Byte-side metrics for one evaluated mount. Threshold percentages are the
/// size-adjusted values actually compared against.
#[derive(Debug, Clone)]
pub struct ByteUsage {
    pub total:        u64,
    pub free:         u64,
    pub used:         u64,
    pub used_percent: f64,
    pub warn_percent: f64,
    pub crit_percent: f64,
    /// Byte count at which the warn threshold trips.
    pub warn_size:    f64,
    /// Byte count at which the crit threshold trips.
    pub crit_size:    f64,
    pub status:       Status,
}

/// Inode-side metrics. Inode thresholds are never size-scaled.
#[derive(Debug, Clone)]
pub struct InodeUsage {
    pub total:        u64,
    pub free:         u64,
    pub used:         u64,
    pub used_percent: f64,
    pub status:       Status,
}

/// Classification of a single mount.
#[derive(Debug, Clone)]
pub struct EvaluatedMount {
    pub mount_point: String,
    pub fs_type:     String,
    pub bytes:       ByteUsage,
    pub inodes:      Option<InodeUsage>,
}

impl EvaluatedMount {
    /// Worst of the byte and inode statuses.
    pub fn status(&self) -> Status {
        match &self.inodes {
            Some(inodes) => self.bytes.status.max(inodes.status),
            None         => self.bytes.status,
        }
    }
}

/// Round to two decimals; applied to used percentages before comparison and
/// to threshold percentages at render time.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn used_percent(total: u64, free: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(100.0 - 100.0 * free as f64 / total as f64)
}

/// Critical is checked first: a value at or above both thresholds is
/// critical, never merely warning.
fn classify(used_percent: f64, warn: f64, crit: f64) -> Status {
    if used_percent >= crit {
        Status::Critical
    } else if used_percent >= warn {
        Status::Warning
    } else {
        Status::Ok
    }
}

/// Classify one mount's byte and inode usage against the thresholds.
///
/// Byte thresholds are size-adjusted (see [`scaling::adjusted_percent`]);
/// inode thresholds apply as given. A zero-size filesystem or zero inode
/// total is degenerate: 0% used, status ok, nothing divided.
pub fn evaluate(stats: MountStats, thresholds: &Thresholds) -> EvaluatedMount {
    let total = stats.bytes_total;
    let free  = stats.bytes_free;
    let pct   = used_percent(total, free);

    let (warn_pct, crit_pct) = if total == 0 {
        (thresholds.bytes_warn, thresholds.bytes_crit)
    } else {
        (
            scaling::adjusted_percent(
                total,
                thresholds.bytes_warn,
                thresholds.magic,
                thresholds.normal,
                thresholds.minimum_bytes,
            ),
            scaling::adjusted_percent(
                total,
                thresholds.bytes_crit,
                thresholds.magic,
                thresholds.normal,
                thresholds.minimum_bytes,
            ),
        )
    };

    let bytes = ByteUsage {
        total,
        free,
        used: total.saturating_sub(free),
        used_percent: pct,
        warn_percent: warn_pct,
        crit_percent: crit_pct,
        warn_size: total as f64 * warn_pct / 100.0,
        crit_size: total as f64 * crit_pct / 100.0,
        status: if total == 0 { Status::Ok } else { classify(pct, warn_pct, crit_pct) },
    };

    let inodes = stats.inodes.map(|counts| {
        let pct = used_percent(counts.total, counts.free);
        InodeUsage {
            total: counts.total,
            free:  counts.free,
            used:  counts.total.saturating_sub(counts.free),
            used_percent: pct,
            status: if counts.total == 0 {
                Status::Ok
            } else {
                classify(pct, thresholds.inodes_warn, thresholds.inodes_crit)
            },
        }
    });

    EvaluatedMount {
        mount_point: stats.mount_point,
        fs_type:     stats.fs_type,
        bytes,
        inodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InodeCounts;

    const GB: u64 = 1_000_000_000;

    fn stats(total: u64, free: u64) -> MountStats {
        MountStats {
            mount_point: "/data".to_string(),
            fs_type:     "ext4".to_string(),
            bytes_total: total,
            bytes_free:  free,
            inodes:      None,
        }
    }

    fn stats_with_inodes(total: u64, free: u64, itotal: u64, ifree: u64) -> MountStats {
        MountStats {
            inodes: Some(InodeCounts { total: itotal, free: ifree }),
            ..stats(total, free)
        }
    }

    #[test]
    fn below_minimum_uses_base_thresholds() {
        let thresholds = Thresholds { magic: 0.5, ..Thresholds::default() };
        let m = evaluate(stats(50 * GB, 25 * GB), &thresholds);
        assert_eq!(m.bytes.used_percent, 50.0);
        assert_eq!(m.bytes.warn_percent, 85.0);
        assert_eq!(m.bytes.crit_percent, 95.0);
        assert_eq!(m.bytes.status, Status::Ok);
    }

    #[test]
    fn warn_and_crit_sizes_follow_adjusted_percents() {
        let thresholds = Thresholds::default();
        let m = evaluate(stats(200 * GB, 100 * GB), &thresholds);
        assert!((m.bytes.warn_size - 170.0 * GB as f64).abs() < 1e-3);
        assert!((m.bytes.crit_size - 190.0 * GB as f64).abs() < 1e-3);
    }

    #[test]
    fn critical_wins_when_thresholds_collide() {
        let thresholds = Thresholds {
            bytes_warn: 90.0,
            bytes_crit: 90.0,
            ..Thresholds::default()
        };
        let m = evaluate(stats(10 * GB, 1 * GB), &thresholds);
        assert_eq!(m.bytes.used_percent, 90.0);
        assert_eq!(m.bytes.status, Status::Critical);
    }

    #[test]
    fn zero_total_is_degenerate_ok() {
        let m = evaluate(stats(0, 0), &Thresholds::default());
        assert_eq!(m.bytes.used_percent, 0.0);
        assert_eq!(m.bytes.status, Status::Ok);
    }

    #[test]
    fn zero_inode_total_is_degenerate_ok() {
        let m = evaluate(stats_with_inodes(10 * GB, 5 * GB, 0, 0), &Thresholds::default());
        let inodes = m.inodes.unwrap();
        assert_eq!(inodes.used_percent, 0.0);
        assert_eq!(inodes.status, Status::Ok);
    }

    #[test]
    fn used_percent_is_rounded_before_comparison() {
        // 14/1500 free: raw used% = 99.0666..., rounds to 99.07
        let m = evaluate(stats(1500, 14), &Thresholds {
            minimum_bytes: 0.0,
            bytes_crit: 99.07,
            ..Thresholds::default()
        });
        assert_eq!(m.bytes.used_percent, 99.07);
        assert_eq!(m.bytes.status, Status::Critical);
    }

    #[test]
    fn relaxed_thresholds_downgrade_large_filesystems() {
        // 200 GB at 95% used: critical against fixed thresholds, warning
        // once magic 0.9 lifts crit to ~98%.
        let fixed = Thresholds::default();
        let m = evaluate(stats(200 * GB, 10 * GB), &fixed);
        assert_eq!(m.bytes.used_percent, 95.0);
        assert_eq!(m.bytes.status, Status::Critical);

        let relaxed = Thresholds { magic: 0.9, ..Thresholds::default() };
        let m = evaluate(stats(200 * GB, 10 * GB), &relaxed);
        assert_eq!(m.bytes.used_percent, 95.0);
        assert!(m.bytes.crit_percent > 95.0);
        assert_eq!(m.bytes.status, Status::Warning);
    }

    #[test]
    fn inode_thresholds_are_never_scaled() {
        let relaxed = Thresholds { magic: 0.9, ..Thresholds::default() };
        // bytes fine, inodes at 86% of 1M used
        let m = evaluate(
            stats_with_inodes(200 * GB, 150 * GB, 1_000_000, 140_000),
            &relaxed,
        );
        assert_eq!(m.bytes.status, Status::Ok);
        let inodes = m.inodes.unwrap();
        assert_eq!(inodes.used_percent, 86.0);
        assert_eq!(inodes.status, Status::Warning);
    }

    #[test]
    fn overall_status_is_the_worst_metric() {
        let thresholds = Thresholds::default();
        let m = evaluate(
            stats_with_inodes(10 * GB, 5 * GB, 1_000_000, 10_000),
            &thresholds,
        );
        assert_eq!(m.bytes.status, Status::Ok);
        assert_eq!(m.inodes.as_ref().unwrap().status, Status::Critical);
        assert_eq!(m.status(), Status::Critical);
    }
}
