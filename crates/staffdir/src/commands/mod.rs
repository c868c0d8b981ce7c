//! Command handlers and dispatch.

mod config_cmd;
mod employees;
mod search;
mod util;

use clap::CommandFactory;
use staffdir_core::{DeletePolicy, EmployeeStore};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::config;
use crate::error::CliError;

/// Route a parsed command to its handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    tracing::debug!(command = ?cmd, "dispatching command");

    match cmd {
        // Config and completions never touch the directory service
        Command::Config(args) => config_cmd::handle(args, global),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "staffdir", &mut std::io::stdout());
            Ok(())
        }

        Command::List(args) => employees::list(&open_store(global, None)?, args, global).await,
        Command::Get(args) => employees::get(&open_store(global, None)?, args, global).await,
        Command::Add(args) => employees::add(&open_store(global, None)?, args, global).await,
        Command::Edit(args) => employees::edit(&open_store(global, None)?, args, global).await,
        Command::Delete(args) => {
            let policy = args.rollback.then_some(DeletePolicy::Rollback);
            employees::delete(&open_store(global, policy)?, args, global).await
        }
        Command::Search(args) => search::handle(&open_store(global, None)?, args, global).await,
    }
}

/// Build the session store from the config file, env and flag overrides.
fn open_store(
    global: &GlobalOpts,
    delete_policy: Option<DeletePolicy>,
) -> Result<EmployeeStore, CliError> {
    let cfg = config::load_config(&config::config_path(global))?;
    let mut directory = config::resolve(&cfg, global)?;
    if let Some(policy) = delete_policy {
        directory.delete_policy = policy;
    }

    tracing::debug!(
        url = %directory.base_url,
        timeout = ?directory.timeout,
        delete_policy = %directory.delete_policy,
        "opening employee store"
    );
    Ok(EmployeeStore::new(&directory)?)
}
