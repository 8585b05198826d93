//! Where replay logs live.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "norpie";
const APPLICATION: &str = "datagrid-replay";

const LATEST: &str = "latest.log";

/// Archived replay logs kept beside `latest.log`.
pub const KEEP_LOGS: usize = 10;

/// Log directory, or None without a resolvable home.
///
/// - Linux: `$XDG_CACHE_HOME/datagrid-replay` or `~/.cache/datagrid-replay`
/// - macOS: `~/Library/Caches/dev.norpie.datagrid-replay`
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Current log file inside `dir`.
pub fn log_file(dir: &Path) -> PathBuf {
    dir.join(LATEST)
}

/// Archive `latest.log` under a timestamp and prune all but the newest
/// `keep` archives. Failures are ignored; logging is best effort.
pub fn rotate_logs(dir: &Path, keep: usize) {
    let latest = log_file(dir);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S%.3f");
        let _ = fs::rename(&latest, dir.join(format!("replay_{}.log", stamp)));
    }

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let mut archived: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("replay_") && name.ends_with(".log"))
        })
        .collect();

    // Timestamped names sort chronologically.
    archived.sort();
    let excess = archived.len().saturating_sub(keep);
    for path in archived.into_iter().take(excess) {
        let _ = fs::remove_file(path);
    }
}
