//! Clap derive structures for the `staffdir` CLI.
//!
//! Defines the command tree, global flags, and shared argument types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// staffdir -- employee directory from the command line
#[derive(Debug, Parser)]
#[command(
    name = "staffdir",
    version,
    about = "Browse and edit the employee directory from the command line",
    long_about = "List, search, create, edit and delete employee records held by a\n\
        remote directory service exposing a `/User` REST resource.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Directory service base URL (overrides config)
    #[arg(long, short = 'u', env = "STAFFDIR_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Path to the config file
    #[arg(long, env = "STAFFDIR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "STAFFDIR_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "STAFFDIR_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long, env = "STAFFDIR_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List employees
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a single employee
    Get(GetArgs),

    /// Create an employee
    #[command(alias = "new")]
    Add(AddArgs),

    /// Edit an existing employee
    Edit(EditArgs),

    /// Delete an employee
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Filter employees with queries read line by line from stdin
    Search(SearchArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Employee commands ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show employees whose name, email or profession contains this text
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Employee ID
    pub id: String,
}

/// Editable employee fields, shared by `add` and `edit`.
#[derive(Debug, Clone, Default, Args)]
pub struct EmployeeFields {
    /// Given name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Family name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Profession
    #[arg(long)]
    pub profession: Option<String>,
}

impl EmployeeFields {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.profession.is_none()
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: EmployeeFields,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Employee ID
    pub id: String,

    #[command(flatten)]
    pub fields: EmployeeFields,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Employee ID
    pub id: String,

    /// Restore the local entry if the server rejects the delete
    #[arg(long)]
    pub rollback: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Quiet period before a query is applied, in milliseconds
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,
}

// ── Config / completions ─────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write an initial config file
    Init {
        /// Base URL to store (prompted for when omitted)
        #[arg(long = "url")]
        url: Option<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Display the resolved configuration
    Show,

    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
