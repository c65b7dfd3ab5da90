use crate::core::client::HttpSettings;
use crate::domain::ports::EnvironmentResolver;
use crate::utils::error::{CliError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENVIRONMENT: &str = "default";
pub const DEFAULT_HTTP_REQUEST_TIMEOUT: u64 = 10;
const MAX_HTTP_REQUEST_TIMEOUT: u64 = 3600;
const CONFIG_DIRECTORY: &str = ".apimctl";
const CONFIG_FILE_NAME: &str = "main_config.toml";
const EXPORT_DIRECTORY_NAME: &str = "exported";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MainConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub environments: BTreeMap<String, EnvironmentConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default = "default_http_request_timeout")]
    pub http_request_timeout: u64,
    pub export_directory: Option<String>,
    #[serde(default)]
    pub insecure: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub store_endpoint: String,
    pub application_list_endpoint: Option<String>,
    pub access_token: Option<String>,
}

fn default_http_request_timeout() -> u64 {
    DEFAULT_HTTP_REQUEST_TIMEOUT
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            http_request_timeout: DEFAULT_HTTP_REQUEST_TIMEOUT,
            export_directory: None,
            insecure: false,
        }
    }
}

/// `~/.apimctl`, or `./.apimctl` when no home directory is known.
pub fn config_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIRECTORY)
}

pub fn default_config_path() -> PathBuf {
    config_home().join(CONFIG_FILE_NAME)
}

impl MainConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CliError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        tracing::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the value of the environment variable. Unknown
    /// variables are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CliError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_range(
            "settings.http_request_timeout",
            self.settings.http_request_timeout,
            1,
            MAX_HTTP_REQUEST_TIMEOUT,
        )?;

        if let Some(dir) = &self.settings.export_directory {
            validation::validate_path("settings.export_directory", dir)?;
        }

        for (name, env) in &self.environments {
            validation::validate_non_empty_string("environments", name)?;
            validation::validate_url(
                &format!("environments.{}.store_endpoint", name),
                &env.store_endpoint,
            )?;
            if let Some(endpoint) = &env.application_list_endpoint {
                validation::validate_url(
                    &format!("environments.{}.application_list_endpoint", name),
                    endpoint,
                )?;
            }
        }

        Ok(())
    }

    pub fn environment(&self, name: &str) -> Result<&EnvironmentConfig> {
        self.environments
            .get(name)
            .ok_or_else(|| CliError::EnvironmentNotFoundError {
                name: name.to_string(),
            })
    }

    pub fn export_directory(&self) -> PathBuf {
        match &self.settings.export_directory {
            Some(dir) => PathBuf::from(dir),
            None => config_home().join(EXPORT_DIRECTORY_NAME),
        }
    }

    /// HTTP settings for this config; `insecure` from the command line wins
    /// when set.
    pub fn http_settings(&self, insecure: bool) -> HttpSettings {
        HttpSettings {
            timeout_seconds: self.settings.http_request_timeout,
            insecure: insecure || self.settings.insecure,
        }
    }
}

impl EnvironmentResolver for MainConfig {
    fn store_endpoint(&self, environment: &str) -> Result<String> {
        Ok(self.environment(environment)?.store_endpoint.clone())
    }

    fn application_list_endpoint(&self, environment: &str) -> Result<String> {
        let env = self.environment(environment)?;
        Ok(match &env.application_list_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("{}applications", append_slash(&env.store_endpoint)),
        })
    }
}

impl Validate for MainConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

pub fn append_slash(endpoint: &str) -> String {
    if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{}/", endpoint)
    }
}
