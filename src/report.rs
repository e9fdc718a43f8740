use crate::evaluate::{round2, EvaluatedMount};
use crate::models::Status;
use crate::util::human::fmt_bytes;

/// Aggregate of one run: every evaluated mount plus the severity buckets
/// driving the exit status.
#[derive(Debug, Clone)]
pub struct Report {
    pub mounts:   Vec<EvaluatedMount>,
    pub critical: Vec<String>,
    pub warning:  Vec<String>,
    pub ok:       Vec<String>,
}

/// Partition evaluated mounts into severity buckets.
///
/// Byte and inode metrics vote separately, so one mount lands in two
/// buckets when they disagree (bytes critical, inodes warning). Within a
/// bucket a mount appears once.
pub fn aggregate(mounts: Vec<EvaluatedMount>) -> Report {
    let mut critical = Vec::new();
    let mut warning  = Vec::new();
    let mut ok       = Vec::new();

    for m in &mounts {
        for status in [Status::Critical, Status::Warning, Status::Ok] {
            let tripped = m.bytes.status == status
                || m.inodes.as_ref().is_some_and(|i| i.status == status);
            if tripped {
                let bucket = match status {
                    Status::Critical => &mut critical,
                    Status::Warning  => &mut warning,
                    Status::Ok       => &mut ok,
                };
                bucket.push(m.mount_point.clone());
            }
        }
    }

    Report { mounts, critical, warning, ok }
}

impl Report {
    /// Worst severity across the buckets.
    pub fn overall(&self) -> Status {
        if !self.critical.is_empty() {
            Status::Critical
        } else if !self.warning.is_empty() {
            Status::Warning
        } else {
            Status::Ok
        }
    }

    /// Render the plugin summary, one entry per evaluated mount regardless
    /// of severity. Entries concatenate directly unless line breaks are
    /// requested (single-line plugin convention).
    pub fn render(&self, verbose: bool, linebreaks: bool) -> String {
        if self.mounts.is_empty() {
            return "no mounts checked".to_string();
        }
        let entries: Vec<String> = self
            .mounts
            .iter()
            .map(|m| if verbose { verbose_entry(m) } else { compact_entry(m) })
            .collect();
        let separator = if linebreaks { "\n" } else { "" };
        entries.join(separator)
    }
}

/// Integral percents keep one decimal ("20.0"); fractional print as-is.
fn fmt_percent(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

fn verbose_entry(m: &EvaluatedMount) -> String {
    let b = &m.bytes;
    let mut out = format!("{}: ", m.mount_point);
    if let Some(i) = &m.inodes {
        out.push_str(&format!(
            "{}% inodes used ({} of {}) ",
            fmt_percent(i.used_percent),
            i.used,
            i.total
        ));
    }
    out.push_str(&format!(
        "{}% used ({} of {}); warn={}% ({}),crit={}% ({}); ",
        fmt_percent(b.used_percent),
        fmt_bytes(b.used as f64),
        fmt_bytes(b.total as f64),
        fmt_percent(round2(b.warn_percent)),
        fmt_bytes(b.warn_size),
        fmt_percent(round2(b.crit_percent)),
        fmt_bytes(b.crit_size),
    ));
    out
}

fn compact_entry(m: &EvaluatedMount) -> String {
    let mut out = format!("{} {}% used", m.mount_point, fmt_percent(m.bytes.used_percent));
    if let Some(i) = &m.inodes {
        out.push_str(&format!(", {}% inodes used", fmt_percent(i.used_percent)));
    }
    out.push_str("; ");
    out
}
