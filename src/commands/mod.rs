//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `startup.rs` — boot selection, identity resolution, raw flag access.
//! - `apps.rs` — master/shard registry reconciliation passes.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate decision logic to `services/*`.
//! - A failed reconciliation pass is reported in the output, never
//!   propagated as a process error.

pub mod apps;
pub mod startup;
