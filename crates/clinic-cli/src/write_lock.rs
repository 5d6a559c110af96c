//! Cross-process write lock for the data directory.
//!
//! Every mutating command rewrites whole CSV files, so two `clinic`
//! processes must never write at once. The lock file holds a JSON
//! [`LockOwner`] and is removed when the guard drops.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const WAIT_TIMEOUT: Duration = Duration::from_secs(30);
const RETRY_DELAY: Duration = Duration::from_millis(100);

/// Who holds the lock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LockOwner {
    pub pid: u32,
    /// Top-level command name, e.g. `appointment`.
    pub command: String,
    pub acquired_at: DateTime<Utc>,
}

impl LockOwner {
    fn current(command: &str) -> Self {
        Self {
            pid: std::process::id(),
            command: command.to_string(),
            acquired_at: Utc::now(),
        }
    }
}

pub struct WriteLockGuard {
    path: PathBuf,
}

impl Drop for WriteLockGuard {
    fn drop(&mut self) {
        if let Err(error) = std::fs::remove_file(&self.path) {
            tracing::warn!(path = %self.path.display(), %error, "failed to remove write lock");
        }
    }
}

/// Take the write lock for `command`, waiting up to 30 seconds for a live
/// holder. Locks left behind by dead processes are taken over.
pub fn acquire(lock_path: &Path, command: &str) -> anyhow::Result<WriteLockGuard> {
    let started = Instant::now();

    loop {
        let state = match try_acquire(lock_path, command) {
            Ok(guard) => return Ok(guard),
            Err(state) => state,
        };

        if let LockState::Stale(owner) = &state {
            tracing::warn!(pid = owner.pid, command = %owner.command, "taking over stale write lock");
            if remove_stale(lock_path) {
                continue;
            }
        }
        if started.elapsed() >= WAIT_TIMEOUT {
            match state {
                LockState::HeldBy(owner) => anyhow::bail!(
                    "data directory is busy: `clinic {}` (pid {}) has held the write lock since {}",
                    owner.command,
                    owner.pid,
                    owner.acquired_at.format("%H:%M:%S")
                ),
                _ => anyhow::bail!(
                    "could not take the write lock at {}; delete it if no clinic command is running",
                    lock_path.display()
                ),
            }
        }
        std::thread::sleep(RETRY_DELAY);
    }
}

/// Remove a stale lock file. `false` means it is still there and the caller
/// should wait before trying again.
fn remove_stale(lock_path: &Path) -> bool {
    match std::fs::remove_file(lock_path) {
        Ok(()) => true,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => true,
        Err(error) => {
            tracing::warn!(path = %lock_path.display(), %error, "failed to remove stale write lock");
            false
        }
    }
}

#[derive(Debug)]
enum LockState {
    HeldBy(LockOwner),
    Stale(LockOwner),
    /// The lock exists but its owner cannot be read.
    Unreadable,
}

fn try_acquire(lock_path: &Path, command: &str) -> Result<WriteLockGuard, LockState> {
    if let Some(parent) = lock_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match OpenOptions::new().write(true).create_new(true).open(lock_path) {
        Ok(mut file) => {
            let owner = LockOwner::current(command);
            if let Ok(body) = serde_json::to_string(&owner) {
                let _ = writeln!(file, "{body}");
            }
            tracing::debug!(path = %lock_path.display(), command, "write lock acquired");
            Ok(WriteLockGuard {
                path: lock_path.to_path_buf(),
            })
        }
        Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(read_owner(lock_path).map_or(LockState::Unreadable, |owner| {
                if is_process_running(owner.pid) {
                    LockState::HeldBy(owner)
                } else {
                    LockState::Stale(owner)
                }
            }))
        }
        Err(_) => Err(LockState::Unreadable),
    }
}

fn read_owner(lock_path: &Path) -> Option<LockOwner> {
    let body = std::fs::read_to_string(lock_path).ok()?;
    serde_json::from_str(body.trim()).ok()
}

#[cfg(unix)]
fn is_process_running(pid: u32) -> bool {
    std::process::Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

#[cfg(not(unix))]
fn is_process_running(_pid: u32) -> bool {
    true
}
