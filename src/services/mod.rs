//! Service layer containing the decision and reconciliation logic.
//!
//! ## Service map
//! - `flags.rs` — filesystem-backed flag access (presence + content flags).
//! - `device.rs` — device identity resolution.
//! - `boot.rs` — startup flow selection and its bundled flag writes.
//! - `registry.rs` — master/shard application registry passes.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Every flag read hits the filesystem fresh; no in-process caching.
//! - Read failures degrade to safe defaults; write failures log and move on.
//! - Keep command handlers thin; delegate to services.

pub mod boot;
pub mod device;
pub mod flags;
pub mod output;
pub mod registry;
