//! Size-adaptive threshold scaling.
//!
//! A fixed "95% full" threshold means very different absolute headroom on a
//! 10 GiB root disk and a 40 TiB array. The scaler relaxes a base
//! percentage as the filesystem grows, tuned by two knobs: `magic`, the
//! exponent controlling how aggressively relaxation kicks in, and `normal`,
//! the size in MiB at which the scaling factor is exactly 1.

/// Adjust a warn/crit percentage for filesystem size.
///
/// Filesystems smaller than `minimum_bytes` keep the base percentage.
/// `magic = 1` leaves every size unchanged; `magic < 1` pushes the
/// threshold toward 100 as size grows. No rounding here: callers round for
/// display only.
///
/// `total_bytes` must be non-zero; the evaluator treats zero-size
/// filesystems as degenerate before calling in.
pub fn adjusted_percent(
    total_bytes: u64,
    base_percent: f64,
    magic: f64,
    normal: f64,
    minimum_bytes: f64,
) -> f64 {
    if (total_bytes as f64) < minimum_bytes {
        return base_percent;
    }
    let hsize = (total_bytes as f64 / 1_048_576.0) / normal;
    let felt  = hsize.powf(magic);
    let scale = felt / hsize;
    100.0 - (100.0 - base_percent) * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    const GB: u64 = 1_000_000_000;

    #[test]
    fn magic_one_changes_nothing() {
        for &total in &[100 * GB, 200 * GB, 4000 * GB] {
            let adjusted = adjusted_percent(total, 85.0, 1.0, 20.0, 100e9);
            assert!((adjusted - 85.0).abs() < 1e-9);
        }
    }

    #[test]
    fn small_filesystems_keep_base_percent() {
        let adjusted = adjusted_percent(50 * GB, 85.0, 0.5, 20.0, 100e9);
        assert_eq!(adjusted, 85.0);
    }

    #[test]
    fn sub_linear_magic_relaxes_with_size() {
        let at_200gb = adjusted_percent(200 * GB, 95.0, 0.9, 20.0, 100e9);
        let at_2tb   = adjusted_percent(2000 * GB, 95.0, 0.9, 20.0, 100e9);
        assert!(at_200gb > 95.0);
        assert!(at_2tb > at_200gb);
        assert!(at_2tb < 100.0);
    }

    #[test]
    fn relaxation_never_reverses_as_size_grows() {
        let mut prev = 0.0;
        for &total in &[100 * GB, 150 * GB, 200 * GB, 500 * GB, 1000 * GB, 10_000 * GB] {
            let adjusted = adjusted_percent(total, 85.0, 0.9, 20.0, 100e9);
            assert!(adjusted >= prev);
            prev = adjusted;
        }
    }

    #[test]
    fn two_hundred_gb_lifts_crit_to_about_98() {
        let crit = adjusted_percent(200 * GB, 95.0, 0.9, 20.0, 100e9);
        assert!((crit - 98.0).abs() < 0.05);
    }
}
