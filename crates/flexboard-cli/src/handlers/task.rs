use crate::cli::Commands;
use crate::output;
use flexboard_domain::{Filter, TaskId};
use flexboard_persistence::TaskStore;
use serde_json::json;

/// Runs one store operation and prints its JSON response. A failed save is
/// returned as an error and leaves the snapshot on disk as it was.
pub fn handle(store: &mut TaskStore, command: Commands, filter: Filter) -> anyhow::Result<()> {
    match command {
        Commands::Add { title, desc } => {
            let task = store.create(&title, &desc)?;
            output::output_success(task);
        }
        Commands::List => {
            let tasks: Vec<_> = filter.apply(store.tasks()).cloned().collect();
            output::output_list(tasks);
        }
        Commands::Counts => {
            output::output_success(Some(store.counts()));
        }
        Commands::Edit { id, title } => {
            let task = store.update_title(&TaskId::from(id), &title)?;
            output::output_success(task);
        }
        Commands::Move { id, direction } => {
            let task = store.move_task(&TaskId::from(id), direction)?;
            output::output_success(task);
        }
        Commands::Toggle { id } => {
            let task = store.toggle_done(&TaskId::from(id))?;
            output::output_success(task);
        }
        Commands::Delete { id } => {
            let task = store.delete(&TaskId::from(id))?;
            output::output_success(task.map(|t| json!({ "deleted": t.id })));
        }
        Commands::Seed => {
            let tasks = store.seed()?;
            output::output_list(tasks);
        }
        Commands::Clear { yes } => {
            if !yes {
                output::output_error("Clear not confirmed; pass --yes to delete every task");
            }
            let cleared = store.clear()?;
            output::output_success(Some(json!({ "cleared": cleared })));
        }
        Commands::Completions { .. } => {
            anyhow::bail!("completions are generated before the store is opened");
        }
    }
    Ok(())
}
