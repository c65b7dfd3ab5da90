// Command executors: each one loads the config, resolves the environment and
// its token, then performs a single request against the store.

pub mod export_app;
pub mod import_app;
pub mod list_apps;

use crate::config::cli::{Cli, Command, EnvironmentArgs, ListResource};
use crate::config::main_config::default_config_path;
use crate::config::{MainConfig, TokenResolver};
use crate::core::client::ApiClient;
use crate::domain::ports::TokenProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;
use std::path::Path;

pub struct CommandContext {
    pub config: MainConfig,
    pub insecure: bool,
}

impl CommandContext {
    pub fn new(config: MainConfig, insecure: bool) -> Self {
        Self { config, insecure }
    }

    /// Loads and validates the config at `path`, or the default location.
    pub fn load(path: Option<&Path>, insecure: bool) -> Result<Self> {
        let config = match path {
            Some(path) => MainConfig::from_file(path)?,
            None => MainConfig::from_file(default_config_path())?,
        };
        config.validate()?;
        Ok(Self::new(config, insecure))
    }

    pub async fn client_for(&self, env: &EnvironmentArgs) -> Result<ApiClient> {
        self.config.environment(&env.environment)?;

        let tokens = TokenResolver::new(env.token.clone(), &self.config);
        let token = tokens.access_token(&env.environment).await?;

        ApiClient::new(self.config.http_settings(self.insecure), token)
    }
}

pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let ctx = CommandContext::load(cli.config.as_deref(), cli.insecure)?;

    match &cli.command {
        Command::List {
            resource: ListResource::Apps(args),
        } => {
            tracing::info!("apps called");
            list_apps::execute(&ctx, args, out).await
        }
        Command::ExportApp(args) => {
            tracing::info!("export-app called");
            export_app::execute(&ctx, args, out).await
        }
        Command::ImportApp(args) => {
            tracing::info!("import-app called");
            import_app::execute(&ctx, args, out).await
        }
    }
}
