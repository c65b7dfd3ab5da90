use crate::config::main_config::DEFAULT_ENVIRONMENT;
use crate::core::render::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "apimctl", version)]
#[command(about = "Import, export and list Applications of an API Manager environment")]
pub struct Cli {
    /// Path to the main configuration file (defaults to ~/.apimctl/main_config.toml)
    #[arg(long, global = true, env = "APIMCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip TLS certificate verification
    #[arg(short = 'k', long, global = true)]
    pub insecure: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List resources of an environment
    List {
        #[command(subcommand)]
        resource: ListResource,
    },

    /// Export an Application from an environment
    #[command(name = "export-app")]
    ExportApp(ExportAppArgs),

    /// Import an Application to an environment
    #[command(name = "import-app")]
    ImportApp(ImportAppArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum ListResource {
    /// Display a list of Applications in an environment specific to the user
    Apps(ListAppsArgs),
}

#[derive(Debug, Clone, Args)]
pub struct EnvironmentArgs {
    /// Environment to operate on
    #[arg(short, long, default_value = DEFAULT_ENVIRONMENT)]
    pub environment: String,

    /// Username of the application owner
    #[arg(short, long)]
    pub username: Option<String>,

    /// Access token for the environment
    #[arg(long, env = "APIMCTL_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ListAppsArgs {
    #[command(flatten)]
    pub env: EnvironmentArgs,

    /// Search query forwarded to the store, e.g. name:SampleApp
    #[arg(short, long)]
    pub query: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Args)]
pub struct ExportAppArgs {
    #[command(flatten)]
    pub env: EnvironmentArgs,

    /// Name of the Application to be exported
    #[arg(short, long)]
    pub name: String,
}

#[derive(Debug, Clone, Args)]
pub struct ImportAppArgs {
    #[command(flatten)]
    pub env: EnvironmentArgs,

    /// Archive (or directory) to import, relative to the export directory
    /// unless absolute, e.g. dev/admin_SampleApp.zip
    #[arg(short, long)]
    pub file: PathBuf,

    /// Preserve the original owner of the Application
    #[arg(short = 'o', long)]
    pub preserve_owner: bool,

    /// Re-create the subscriptions of the Application
    #[arg(short = 's', long)]
    pub add_subscriptions: bool,
}
