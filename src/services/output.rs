//! JSON/text output helpers shared by the command handlers.

use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Aborted passes are reported, not propagated: the process still exits
/// cleanly and wrapper scripts read the failure from the output.
pub fn print_failure(json: bool, message: &str) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: false,
                data: message
            })?
        );
    } else {
        eprintln!("{message}");
    }
    Ok(())
}
