use crate::cli::{AppsCommands, Cli};
use crate::domain::paths::Paths;
use crate::services::output::{print_failure, print_one};
use crate::services::registry;

pub fn handle_apps(cli: &Cli, paths: &Paths, command: &AppsCommands) -> anyhow::Result<()> {
    match command {
        AppsCommands::Aggregate => match registry::aggregate(paths) {
            Ok(report) => print_one(cli.json, report, |r| {
                format!("aggregated {} applications", r.collected)
            }),
            Err(err) => {
                log::error!("aggregate pass aborted: {err:#}");
                print_failure(cli.json, &format!("aggregate pass aborted: {err:#}"))
            }
        },
        AppsCommands::Disaggregate => match registry::disaggregate(paths) {
            Ok(report) => print_one(cli.json, report, |r| {
                format!("updated {} shards from {} entries", r.updated.len(), r.entries)
            }),
            Err(err) => {
                log::error!("disaggregate pass aborted: {err:#}");
                print_failure(cli.json, &format!("disaggregate pass aborted: {err:#}"))
            }
        },
    }
}
