use crate::models::MountEntry;

/// Filesystem types skipped by default: pseudo filesystems whose capacity
/// numbers are meaningless, and network mounts that are another host's
/// problem.
pub const DEFAULT_IGNORED_TYPES: &[&str] = &[
    "nfs", "nfs4", "nfsd", "rpc_pipefs", "tmpfs", "devpts", "sysfs",
    "proc", "binfmt_misc",
];

/// Decides which discovered mounts get evaluated. All matching is exact
/// string equality, never substring.
#[derive(Debug, Clone)]
pub struct MountFilter {
    /// Only these filesystem types, when present and non-empty.
    pub fs_types:      Option<Vec<String>>,
    /// Filesystem types to skip.
    pub ignore_types:  Vec<String>,
    /// Mount points to skip.
    pub ignore_mounts: Vec<String>,
}

impl Default for MountFilter {
    fn default() -> Self {
        Self {
            fs_types:      None,
            ignore_types:  MountFilter::default_ignore_types(),
            ignore_mounts: Vec::new(),
        }
    }
}

impl MountFilter {
    pub fn default_ignore_types() -> Vec<String> {
        DEFAULT_IGNORED_TYPES.iter().map(|t| t.to_string()).collect()
    }

    /// The allow-list is consulted first, but the deny-lists still apply to
    /// whatever it lets through.
    pub fn should_evaluate(&self, entry: &MountEntry) -> bool {
        if let Some(allow) = &self.fs_types {
            if !allow.is_empty() && !allow.contains(&entry.fs_type) {
                return false;
            }
        }
        if self.ignore_types.contains(&entry.fs_type) {
            return false;
        }
        if self.ignore_mounts.contains(&entry.mount_point) {
            return false;
        }
        true
    }
}
