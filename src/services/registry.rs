//! App Registry Synchronizer.
//!
//! Two independent, idempotent passes over the apps root. Aggregate rebuilds
//! the master list from per-app shards; Disaggregate pushes master entries
//! back into matching shards. They are not inverses: Aggregate preserves
//! scan order and never deduplicates, Disaggregate matches names by
//! case-insensitive substring containment, so one entry can update several
//! directories. Callers must not run overlapping passes concurrently.

use crate::domain::constants::SHARD_FILE;
use crate::domain::models::{AggregateReport, DisaggregateReport};
use crate::domain::paths::Paths;
use anyhow::Context;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Shards → master. Skips anything unusable with a warn log and rewrites
/// the master document wholesale from what remains; an empty apps root
/// yields an empty list.
pub fn aggregate(paths: &Paths) -> anyhow::Result<AggregateReport> {
    let mut report = AggregateReport::default();
    let mut list = Vec::new();

    for dir in app_dirs(&paths.apps_root())? {
        let name = dir_name(&dir);
        let shard = dir.join(SHARD_FILE);
        if !shard.exists() {
            log::warn!(
                "application directory has no {}: {}",
                SHARD_FILE,
                dir.display()
            );
            report.skipped_missing_shard.push(name);
            continue;
        }
        match read_shard(&shard) {
            Some(app) => {
                list.push(app);
                report.collected += 1;
            }
            None => report.skipped_invalid.push(name),
        }
    }

    let master = paths.master_registry();
    let body = format!("{}\n", serde_json::to_string_pretty(&json!({ "list": list }))?);
    fs::write(&master, body)
        .with_context(|| format!("write master registry {}", master.display()))?;
    Ok(report)
}

/// Master → shards. The master document is parsed completely before any
/// write, so a malformed master aborts the whole pass with every shard
/// untouched. Directories matched by zero entries keep their shards.
pub fn disaggregate(paths: &Paths) -> anyhow::Result<DisaggregateReport> {
    let master = paths.master_registry();
    let raw = fs::read_to_string(&master)
        .with_context(|| format!("read master registry {}", master.display()))?;
    let doc: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parse master registry {}", master.display()))?;
    let list = doc
        .get("list")
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow::anyhow!("master registry {} has no \"list\" array", master.display()))?;

    // Fresh listing: the tree may have changed since the master was built.
    let dirs = all_dirs(&paths.apps_root())?;
    let mut report = DisaggregateReport {
        entries: list.len(),
        updated: Vec::new(),
    };

    for entry in list {
        let Some(name) = descriptor_name(entry) else {
            log::warn!("master entry without a usable name skipped: {}", entry);
            continue;
        };
        let needle = name.to_lowercase();
        for dir in &dirs {
            if dir_name(dir).to_lowercase().contains(&needle) {
                write_shard(dir, entry);
                report.updated.push(dir_name(dir));
            }
        }
    }
    Ok(report)
}

/// Top-level application directories in lexicographic order. Entries whose
/// name contains a literal `.` are not applications (backups, the master
/// file's own directory entry) and are excluded on this side only.
fn app_dirs(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut dirs = all_dirs(root)?;
    dirs.retain(|dir| !dir_name(dir).contains('.'));
    Ok(dirs)
}

fn all_dirs(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(root).with_context(|| format!("scan apps root {}", root.display()))?;
    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("scan apps root {}", root.display()))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_shard(shard: &Path) -> Option<Value> {
    let raw = match fs::read_to_string(shard) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("unreadable shard {}: {}", shard.display(), err);
            return None;
        }
    };
    let doc: Value = match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(err) => {
            log::warn!("malformed shard {}: {}", shard.display(), err);
            return None;
        }
    };
    match doc.get("app") {
        Some(app @ Value::Object(_)) => Some(app.clone()),
        _ => {
            log::warn!("shard {} is missing its \"app\" object", shard.display());
            None
        }
    }
}

/// `Name` is the identity field of a descriptor; some producers spell it
/// lowercase. Empty names are unusable — an empty needle would substring-
/// match every directory.
fn descriptor_name(entry: &Value) -> Option<&str> {
    entry
        .get("Name")
        .or_else(|| entry.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
}

fn write_shard(dir: &Path, entry: &Value) {
    let shard = dir.join(SHARD_FILE);
    match serde_json::to_string_pretty(&json!({ "app": entry })) {
        Ok(body) => {
            if let Err(err) = fs::write(&shard, format!("{body}\n")) {
                log::warn!("failed to write shard {}: {}", shard.display(), err);
            }
        }
        Err(err) => log::warn!("failed to serialize shard {}: {}", shard.display(), err),
    }
}
