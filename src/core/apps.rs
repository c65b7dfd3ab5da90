use crate::core::client::ApiClient;
use crate::domain::model::ApplicationList;
use crate::utils::error::{CliError, Result};
use reqwest::StatusCode;

const OPERATION: &str = "list applications";

/// Fetches the Applications visible to the token's owner.
///
/// `query` is forwarded to the store as the `query` parameter.
pub async fn list_applications(
    client: &ApiClient,
    endpoint: &str,
    query: Option<&str>,
) -> Result<ApplicationList> {
    let params: Vec<(&str, &str)> = query.map(|q| vec![("query", q)]).unwrap_or_default();
    let response = client
        .get(endpoint, Some("application/json"), &params)
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(CliError::unexpected_status(OPERATION, status));
    }

    let body = response.text().await?;
    let apps: ApplicationList =
        serde_json::from_str(&body).map_err(|e| CliError::InvalidResponseError {
            message: format!("invalid JSON response: {}", e),
        })?;

    tracing::debug!("Received {} of {} applications", apps.list.len(), apps.count);
    Ok(apps)
}
