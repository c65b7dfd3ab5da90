use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Byte store rooted at a base directory; paths are relative to it.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

/// Resolves per-environment endpoints.
pub trait EnvironmentResolver: Send + Sync {
    fn store_endpoint(&self, environment: &str) -> Result<String>;
    fn application_list_endpoint(&self, environment: &str) -> Result<String>;
}

/// Supplies the bearer token used to authorize requests against an environment.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self, environment: &str) -> Result<String>;
}
