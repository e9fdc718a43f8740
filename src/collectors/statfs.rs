use nix::sys::statvfs::statvfs;
use tracing::debug;

use crate::error::{ProbeError, Result};
use crate::models::{InodeCounts, MountEntry, MountStats};

/// Stat one mount point.
///
/// Counters follow statvfs semantics: sizes are in fragment-size units and
/// free means `f_bfree` (free including the root reserve, which is what the
/// usage percentage is judged against). A filesystem reporting zero total
/// inodes does not track them (vfat, most pseudo filesystems); its inode
/// counters are absent rather than zero.
pub fn stat_mount(entry: &MountEntry) -> Result<MountStats> {
    let stat = statvfs(entry.mount_point.as_str()).map_err(|source| ProbeError::Stat {
        mount_point: entry.mount_point.clone(),
        source,
    })?;

    let frsize      = stat.fragment_size() as u64;
    let bytes_total = stat.blocks() * frsize;
    let bytes_free  = stat.blocks_free() * frsize;

    let inodes = match stat.files() {
        0     => None,
        total => Some(InodeCounts { total, free: stat.files_free() }),
    };

    debug!(
        "{}: {} bytes total, {} free, inodes {}",
        entry.mount_point,
        bytes_total,
        bytes_free,
        if inodes.is_some() { "tracked" } else { "absent" },
    );

    Ok(MountStats {
        mount_point: entry.mount_point.clone(),
        fs_type:     entry.fs_type.clone(),
        bytes_total,
        bytes_free,
        inodes,
    })
}
