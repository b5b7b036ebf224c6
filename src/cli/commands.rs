use clap::{Parser, Subcommand};

pub const VERSION: &str = env!("CLIKAN_VERSION");

#[derive(Parser)]
#[command(
    name = "clikan",
    version = VERSION,
    about = "clikan: CLI personal kanban",
    infer_subcommands = true,
    after_help = "\
NOTE:
  Data lives in $CLIKAN_HOME (default ~/.clikan): one .<project>.yaml config and
  one .<project>.dat data file per project. Run `clikan configure` first.
  Any unique command prefix works (`clikan a`, `clikan pro 1`).

EXIT CODES:
  0  Success, including per-task problems (unknown id, limit reached, ...)
  1  Fatal error (unreadable data or config file, unconfigured project)

DATES:
  --date accepts today, tomorrow, nextweek or an ISO-8601 date/datetime.
  `edit --date none` clears a due date."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the board (default)
    Show {
        /// Only tasks due today or overdue
        #[arg(long)]
        due: bool,
    },

    /// Add tasks in todo
    Add {
        /// Task labels, one task per argument
        #[arg(required = true)]
        tasks: Vec<String>,
        /// Due date for every task added
        #[arg(long)]
        date: Option<String>,
    },

    /// Promote tasks (todo → in-progress → done)
    Promote {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Regress tasks (done → in-progress → todo)
    Regress {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Delete tasks (kept as deleted until the next refresh)
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Edit a task's label, due date or description
    Edit {
        id: String,
        #[arg(long)]
        task: Option<String>,
        /// New due date, or `none` to clear it
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        desc: Option<String>,
    },

    /// Show one task in full
    Info {
        id: String,
    },

    /// Renumber tasks, dropping done and deleted ones
    #[command(after_help = "\
NOTE:
  Destructive: ids change, done tasks are dropped and deleted tasks are purged.")]
    Refresh {
        /// Refresh every project
        #[arg(long)]
        all: bool,
    },

    /// Place the default project config in CLIKAN_HOME
    Configure {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Switch to a project, creating it if needed
    Switch {
        /// Project name (default: "default")
        name: Option<String>,
    },

    /// List all projects
    Projects,

    /// Delete a project and its data
    Delproj {
        name: String,
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}
