use crate::config::main_config::MainConfig;
use crate::domain::ports::TokenProvider;
use crate::utils::error::{CliError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Resolves an already-issued access token: an explicit token (flag or
/// `APIMCTL_ACCESS_TOKEN`) first, then the environment's `access_token`.
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    explicit: Option<String>,
    configured: BTreeMap<String, String>,
}

impl TokenResolver {
    pub fn new(explicit: Option<String>, config: &MainConfig) -> Self {
        let configured = config
            .environments
            .iter()
            .filter_map(|(name, env)| {
                env.access_token
                    .as_ref()
                    .map(|token| (name.clone(), token.clone()))
            })
            .collect();

        Self {
            explicit: explicit.filter(|t| !t.trim().is_empty()),
            configured,
        }
    }
}

fn is_unresolved_placeholder(token: &str) -> bool {
    token.starts_with("${") && token.ends_with('}')
}

#[async_trait]
impl TokenProvider for TokenResolver {
    async fn access_token(&self, environment: &str) -> Result<String> {
        if let Some(token) = &self.explicit {
            tracing::debug!("Using access token supplied on the command line");
            return Ok(token.clone());
        }

        match self.configured.get(environment) {
            Some(token) if is_unresolved_placeholder(token) => {
                tracing::warn!(
                    "access_token for '{}' references an unset variable: {}",
                    environment,
                    token
                );
                Err(CliError::MissingTokenError {
                    environment: environment.to_string(),
                })
            }
            Some(token) if !token.trim().is_empty() => {
                tracing::debug!("Using access token configured for '{}'", environment);
                Ok(token.clone())
            }
            _ => Err(CliError::MissingTokenError {
                environment: environment.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MainConfig {
        MainConfig::from_toml_str(
            r#"
[environments.dev]
store_endpoint = "https://dev.example.com/store"
access_token = "dev-token"

[environments.prod]
store_endpoint = "https://prod.example.com/store"

[environments.qa]
store_endpoint = "https://qa.example.com/store"
access_token = "${APIMCTL_TOKEN_TEST_NEVER_SET}"
"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_explicit_token_wins() {
        let resolver = TokenResolver::new(Some("cli-token".to_string()), &config());
        assert_eq!(resolver.access_token("dev").await.unwrap(), "cli-token");
        assert_eq!(resolver.access_token("prod").await.unwrap(), "cli-token");
    }

    #[tokio::test]
    async fn test_configured_token() {
        let resolver = TokenResolver::new(None, &config());
        assert_eq!(resolver.access_token("dev").await.unwrap(), "dev-token");
    }

    #[tokio::test]
    async fn test_missing_token() {
        let resolver = TokenResolver::new(Some("  ".to_string()), &config());
        let err = resolver.access_token("prod").await.unwrap_err();
        assert!(matches!(err, CliError::MissingTokenError { environment } if environment == "prod"));
    }

    #[tokio::test]
    async fn test_unresolved_placeholder_is_missing() {
        let resolver = TokenResolver::new(None, &config());
        assert!(resolver.access_token("qa").await.is_err());
    }
}
