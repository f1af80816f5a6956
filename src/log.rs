use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const MAX_LOG_BYTES: u64 = 8 * 1024 * 1024; // 8 MB
const MAX_LOG_BACKUPS: usize = 3;

fn log_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    let dir = home.join(".trip-aid");
    let _ = std::fs::create_dir_all(&dir);
    Some(dir.join("error.log"))
}

// Shift error.log -> error.log.1 -> ... -> error.log.N, best effort.
fn rotate_backups(base: &PathBuf) {
    for i in (1..=MAX_LOG_BACKUPS).rev() {
        let src = if i == 1 {
            base.clone()
        } else {
            base.with_extension(format!("log.{}", i - 1))
        };
        let dst = base.with_extension(format!("log.{}", i));
        if src.exists() {
            if dst.exists() {
                let _ = std::fs::remove_file(&dst);
            }
            let _ = std::fs::rename(&src, &dst);
        }
    }
}

/// Append a diagnostic line to the error log, rotating when it grows past
/// MAX_LOG_BYTES. Falls back to stderr when the log file is unavailable.
/// Diagnostics never surface raw in the UI.
pub fn log_error(msg: &str) {
    let Some(path) = log_path() else {
        let _ = writeln!(std::io::stderr(), "{}", msg);
        return;
    };

    if let Ok(meta) = std::fs::metadata(&path) {
        if meta.len() >= MAX_LOG_BYTES {
            rotate_backups(&path);
        }
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(mut f) => {
            let ts = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            let _ = writeln!(f, "[{}] {}", ts, msg);
        }
        Err(_) => {
            let _ = writeln!(std::io::stderr(), "{}", msg);
        }
    }
}
