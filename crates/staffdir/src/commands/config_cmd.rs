//! Config subcommand handlers.

use std::io::IsTerminal;

use dialoguer::Input;

use staffdir_core::DEFAULT_BASE_URL;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Map a dialoguer failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Ask for the base URL unless it was given on the command line.
fn prompt_url(given: Option<String>, global: &GlobalOpts) -> Result<String, CliError> {
    if let Some(url) = given.or_else(|| global.api_url.clone()) {
        return Ok(url);
    }
    if global.yes || !std::io::stdin().is_terminal() {
        return Ok(DEFAULT_BASE_URL.into());
    }
    Input::new()
        .with_prompt("Directory service URL")
        .default(DEFAULT_BASE_URL.to_string())
        .interact_text()
        .map_err(prompt_err)
}

fn render_config(cfg: &Config, format: &OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Table | OutputFormat::Plain => Ok(toml::to_string_pretty(cfg)?),
        other => output::render_single(other, cfg, |_| String::new(), |_| String::new()),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::config_path(global);

    match args.command {
        ConfigCommand::Init { url, force } => {
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let api_url = prompt_url(url, global)?;
            // Fail before writing anything unusable
            config::parse_base_url(&api_url)?;

            let cfg = Config {
                api_url,
                ..Config::default()
            };
            config::save_config(&cfg, &path)?;
            output::print_status(&format!("Config written to {}", path.display()), global);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config(&path)?;
            output::print_output(&render_config(&cfg, &global.output)?, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }
    }
}
