//! Flag Store: uniform access to filesystem-backed flags.
//!
//! Flags are owned by external scripts and daemons; this process only has
//! read/write access to them. Every call performs a fresh filesystem access
//! because another process may flip a flag between two reads — a cached
//! value here is a correctness bug, not a lost optimization.

use crate::domain::constants::FLAG_TRUE;
use std::fs;
use std::path::Path;

#[derive(Copy, Clone, Debug, Default)]
pub struct FlagStore;

impl FlagStore {
    /// Presence flag: set iff the path exists.
    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Raw content, untrimmed. Absent or unreadable reads are `None`.
    pub fn read_string(&self, path: &Path) -> Option<String> {
        fs::read_to_string(path).ok()
    }

    /// Fire-and-forget write: parent directories are created, the value is
    /// written verbatim, and failures are logged without surfacing. Nothing
    /// verifies the write was observed by any reader.
    pub fn write_string(&self, path: &Path, value: &str) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(err) = fs::write(path, value) {
            log::warn!("failed to write flag {}: {}", path.display(), err);
        }
    }

    /// Content flag against an expected literal. Exact equality; a trailing
    /// newline in the file is significant and makes the flag unset.
    pub fn content_equals(&self, path: &Path, expected: &str) -> bool {
        self.read_string(path).as_deref() == Some(expected)
    }

    /// Boolean content flag.
    pub fn is_true(&self, path: &Path) -> bool {
        self.content_equals(path, FLAG_TRUE)
    }

    /// Integer flag, whitespace-trimmed before parsing since companion
    /// scripts write these with `echo`.
    pub fn read_int(&self, path: &Path) -> Option<i64> {
        self.read_string(path)?.trim().parse().ok()
    }
}
