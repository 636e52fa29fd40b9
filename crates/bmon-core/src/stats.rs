//! Maildir statistics — per-user folder counts over a domain tree.
//!
//! Walks a base directory laid out as `<base>/<domain>/<user>/`, where
//! each user directory is a maildir: `cur`, `new`, `tmp` at the root plus
//! the dotted special folders (`.Sent`, `.Drafts`, `.Trash`, `.Junk`).
//! Counting is a pure filesystem walk; disk usage is injected by the
//! caller so the scan can be tested without running `du`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File counts per maildir folder class. Missing folders count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FolderCounts {
    pub cur: usize,
    pub new: usize,
    pub tmp: usize,
    pub sent: usize,
    pub drafts: usize,
    pub trash: usize,
    pub junk: usize,
}

impl FolderCounts {
    /// Messages in the inbox proper: `cur` plus `new`.
    pub fn inbox(&self) -> usize {
        self.cur + self.new
    }
}

/// Statistics for one `user@domain` mailbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// `user@domain`, assembled from the two directory names.
    pub address: String,
    /// Human-readable disk usage as reported by the injected probe
    /// (`du -sh` in production).
    pub disk_usage: String,
    pub counts: FolderCounts,
}

/// Count every folder class of one maildir.
pub fn count_maildir(maildir: &Path) -> FolderCounts {
    FolderCounts {
        cur: count_files(&maildir.join("cur")),
        new: count_files(&maildir.join("new")),
        tmp: count_files(&maildir.join("tmp")),
        sent: count_files(&maildir.join(".Sent")),
        drafts: count_files(&maildir.join(".Drafts")),
        trash: count_files(&maildir.join(".Trash")),
        junk: count_files(&maildir.join(".Junk")),
    }
}

/// Recursively count regular files under `dir`. A missing folder counts
/// as zero; an unreadable entry is skipped rather than aborting the scan.
fn count_files(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    entries
        .flatten()
        .map(|entry| {
            let path = entry.path();
            if path.is_dir() {
                count_files(&path)
            } else {
                1
            }
        })
        .sum()
}

/// Scan `<base>/<domain>/<user>/` and build one [`UserStats`] per user
/// directory, in sorted path order so output is deterministic.
///
/// `disk_usage` is called once per user directory. An unreadable `base`
/// is an error; stray non-directory entries at either level are ignored.
pub fn scan_domains(
    base: &Path,
    disk_usage: impl Fn(&Path) -> String,
) -> io::Result<Vec<UserStats>> {
    let mut stats = Vec::new();
    for domain in sorted_dirs(base)? {
        let domain_name = dir_name(&domain);
        for user in sorted_dirs(&domain)? {
            tracing::debug!(path = %user.display(), "scanning mailbox");
            stats.push(UserStats {
                address: format!("{}@{}", dir_name(&user), domain_name),
                disk_usage: disk_usage(&user),
                counts: count_maildir(&user),
            });
        }
    }
    Ok(stats)
}

fn sorted_dirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
