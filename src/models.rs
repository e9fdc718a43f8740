use serde::Serialize;

/// Severity of a single metric, ordered so `max` picks the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Warning,
    Critical,
}

/// Final outcome of a run as reported to the monitoring host.
///
/// `Unknown` is reserved for enumeration/stat failures and never derives
/// from thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl RunOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            RunOutcome::Ok       => "OK",
            RunOutcome::Warning  => "WARNING",
            RunOutcome::Critical => "CRITICAL",
            RunOutcome::Unknown  => "UNKNOWN",
        }
    }

    /// Conventional monitoring-plugin exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Ok       => 0,
            RunOutcome::Warning  => 1,
            RunOutcome::Critical => 2,
            RunOutcome::Unknown  => 3,
        }
    }
}

impl From<Status> for RunOutcome {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok       => RunOutcome::Ok,
            Status::Warning  => RunOutcome::Warning,
            Status::Critical => RunOutcome::Critical,
        }
    }
}

/// One line of the mount table.
#[derive(Debug, Clone)]
pub struct MountEntry {
    pub device:      String,
    pub mount_point: String,
    pub fs_type:     String,
}

/// Raw usage counters for one mounted filesystem.
#[derive(Debug, Clone)]
pub struct MountStats {
    pub mount_point: String,
    pub fs_type:     String,
    pub bytes_total: u64,
    pub bytes_free:  u64,
    /// Absent on filesystems that do not track inodes.
    pub inodes:      Option<InodeCounts>,
}

/// Inode counters, present only when the filesystem tracks them.
#[derive(Debug, Clone, Copy)]
pub struct InodeCounts {
    pub total: u64,
    pub free:  u64,
}
