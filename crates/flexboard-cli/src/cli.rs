use clap::{Parser, Subcommand};
use flexboard_domain::{Direction, Filter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flexboard")]
#[command(about = "A three-column terminal task board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the task snapshot (or set FLEXBOARD_DIR)
    #[arg(long, value_name = "DIR", env = "FLEXBOARD_DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Filter to apply: all, todo (not done) or done
    #[arg(long, global = true)]
    pub filter: Option<Filter>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the todo column
    Add {
        title: String,
        #[arg(long, default_value = "")]
        desc: String,
    },
    /// List tasks in board order
    List,
    /// Show per-column totals
    Counts,
    /// Change a task title
    Edit { id: String, title: String },
    /// Move a task one column left or right
    Move { id: String, direction: Direction },
    /// Toggle a task between done and todo
    Toggle { id: String },
    /// Delete a task
    Delete { id: String },
    /// Add the example tasks
    Seed,
    /// Delete every task
    Clear {
        /// Confirm clearing without a prompt
        #[arg(long)]
        yes: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
