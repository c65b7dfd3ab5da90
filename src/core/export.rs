use crate::config::main_config::append_slash;
use crate::core::client::ApiClient;
use crate::domain::ports::Storage;
use crate::utils::error::{CliError, Result};
use crate::utils::validation::validate_file_name_segment;
use reqwest::StatusCode;
use std::path::PathBuf;

const OPERATION: &str = "export application";
const ZIP_CONTENT_TYPE: &str = "application/zip";

/// Downloads the export archive of the Application named `name`.
///
/// A 500 from the store means the owner credentials were rejected.
pub async fn export_application(
    client: &ApiClient,
    store_endpoint: &str,
    name: &str,
) -> Result<Vec<u8>> {
    let url = format!("{}export/applications", append_slash(store_endpoint));
    tracing::info!("ExportApp: URL: {}?appId={}", url, name);

    let response = client
        .get(&url, Some(ZIP_CONTENT_TYPE), &[("appId", name)])
        .await?;

    match response.status() {
        StatusCode::OK => Ok(response.bytes().await?.to_vec()),
        StatusCode::INTERNAL_SERVER_ERROR => Err(CliError::InvalidCredentialsError),
        status => Err(CliError::unexpected_status(OPERATION, status)),
    }
}

/// `admin_SampleApp.zip`, or `SampleApp.zip` without a username.
pub fn export_file_name(username: Option<&str>, name: &str) -> Result<String> {
    validate_file_name_segment("name", name)?;
    match username.map(str::trim).filter(|u| !u.is_empty()) {
        Some(user) => {
            validate_file_name_segment("username", user)?;
            Ok(format!("{}_{}.zip", user, name))
        }
        None => Ok(format!("{}.zip", name)),
    }
}

/// Stores an exported archive under `<environment>/<file_name>`.
pub async fn write_exported_archive<S: Storage>(
    storage: &S,
    environment: &str,
    file_name: &str,
    bytes: &[u8],
) -> Result<PathBuf> {
    let relative = format!("{}/{}", environment, file_name);
    tracing::debug!("Writing {} bytes to {}", bytes.len(), relative);
    storage.write_file(&relative, bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(Some("admin"), "testApp").unwrap(), "admin_testApp.zip");
        assert_eq!(export_file_name(None, "testApp").unwrap(), "testApp.zip");
        assert_eq!(export_file_name(Some(" "), "testApp").unwrap(), "testApp.zip");
    }

    #[test]
    fn test_export_file_name_rejects_path_segments() {
        let err = export_file_name(None, "../../escaped").unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidConfigValueError { ref field, .. } if field == "name"
        ));

        let err = export_file_name(Some("../admin"), "testApp").unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidConfigValueError { ref field, .. } if field == "username"
        ));
    }
}
