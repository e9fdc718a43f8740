use std::path::Path;

use tracing::debug;

use crate::error::{ProbeError, Result};
use crate::models::MountEntry;

/// Default mount table on Linux.
pub const PROC_MOUNTS: &str = "/proc/self/mounts";

/// Read and parse the mount table. An unreadable table is fatal for the
/// run: without it there is no way to know what coverage was missed.
pub fn list_mounts(path: &Path) -> Result<Vec<MountEntry>> {
    let content = std::fs::read_to_string(path).map_err(|source| ProbeError::Enumeration {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_mount_table(&content);
    debug!("{} mount entries in {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse mount table text: `device mountpoint fstype options dump pass`
/// per line. Short lines are skipped.
pub fn parse_mount_table(content: &str) -> Vec<MountEntry> {
    let mut entries = Vec::new();
    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            continue;
        }
        entries.push(MountEntry {
            device:      fields[0].to_string(),
            mount_point: decode_octal_escapes(fields[1]),
            fs_type:     fields[2].to_string(),
        });
    }
    entries
}

/// Decode the `\040`-style escapes getmntent writes for whitespace in
/// mount paths ("/mnt/usb\040drive" → "/mnt/usb drive").
fn decode_octal_escapes(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\'
            && i + 3 < bytes.len()
            && (b'0'..=b'3').contains(&bytes[i + 1])
            && (b'0'..=b'7').contains(&bytes[i + 2])
            && (b'0'..=b'7').contains(&bytes[i + 3])
        {
            out.push((bytes[i + 1] - b'0') * 64 + (bytes[i + 2] - b'0') * 8 + (bytes[i + 3] - b'0'));
            i += 4;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typical_proc_mounts() {
        let table = "\
/dev/nvme0n1p2 / ext4 rw,relatime 0 0
proc /proc proc rw,nosuid,nodev,noexec 0 0
tmpfs /run tmpfs rw,nosuid,nodev,size=1M 0 0
";
        let entries = parse_mount_table(table);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].device, "/dev/nvme0n1p2");
        assert_eq!(entries[0].mount_point, "/");
        assert_eq!(entries[0].fs_type, "ext4");
        assert_eq!(entries[2].fs_type, "tmpfs");
    }

    #[test]
    fn short_and_empty_lines_are_skipped() {
        let entries = parse_mount_table("\n/dev/sda1 /boot\n/dev/sda2 / ext4 rw 0 0\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].mount_point, "/");
    }

    #[test]
    fn octal_escapes_in_mount_points_decode() {
        let entries = parse_mount_table("/dev/sdb1 /mnt/usb\\040drive vfat rw 0 0");
        assert_eq!(entries[0].mount_point, "/mnt/usb drive");
    }

    #[test]
    fn backslash_escape_decodes_to_backslash() {
        let entries = parse_mount_table("/dev/sdb1 /mnt/odd\\134name ext4 rw 0 0");
        assert_eq!(entries[0].mount_point, "/mnt/odd\\name");
    }

    #[test]
    fn non_octal_backslash_sequences_pass_through() {
        let entries = parse_mount_table("/dev/sdb1 /mnt/x\\9y ext4 rw 0 0");
        assert_eq!(entries[0].mount_point, "/mnt/x\\9y");
    }

    #[test]
    fn missing_table_is_an_enumeration_error() {
        let err = list_mounts(Path::new("/no/such/mtab")).unwrap_err();
        assert!(matches!(err, ProbeError::Enumeration { .. }));
    }
}
