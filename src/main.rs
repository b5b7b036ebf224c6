use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use clikan::cli::{self, Cli, Commands};
use clikan::engine::Edit;

fn main() {
    if let Ok(filter) = std::env::var("CLIKAN_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .init();
    }

    let cli_args = Cli::parse();
    let json_output = cli_args.json;

    let exit_code = match cli_args.command.unwrap_or(Commands::Show { due: false }) {
        Commands::Show { due } => cli::show::run(due, json_output),
        Commands::Add { tasks, date } => cli::task::run_add(&tasks, date.as_deref(), json_output),
        Commands::Promote { ids } => cli::task::run_promote(&ids, json_output),
        Commands::Regress { ids } => cli::task::run_regress(&ids, json_output),
        Commands::Delete { ids } => cli::task::run_delete(&ids, json_output),
        Commands::Edit { id, task, date, desc } => {
            cli::task::run_edit(&id, Edit { task, date, desc }, json_output)
        }
        Commands::Info { id } => cli::task::run_info(&id, json_output),
        Commands::Refresh { all } => cli::task::run_refresh(all, json_output),
        Commands::Configure { force } => cli::project::run_configure(force, json_output),
        Commands::Switch { name } => cli::project::run_switch(name.as_deref(), json_output),
        Commands::Projects => cli::project::run_projects(json_output),
        Commands::Delproj { name, yes } => cli::project::run_delproj(&name, yes, json_output),
    };

    process::exit(exit_code);
}
