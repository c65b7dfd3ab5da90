use crate::config::main_config::append_slash;
use crate::core::client::ApiClient;
use crate::domain::model::{ImportArchive, ImportOptions};
use crate::utils::archive::zip_directory;
use crate::utils::error::{CliError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use std::path::{Component, Path, PathBuf};

const OPERATION: &str = "import application";
const FILE_FIELD: &str = "file";
const FILE_CONTENT_TYPE: &str = "application/octet-stream";

/// Absolute paths are kept; relative ones resolve against the export directory.
pub fn resolve_import_path(export_directory: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        export_directory.join(file)
    }
}

/// The environment an archive was exported from: the first component of a
/// relative `<env>/<archive>` argument.
pub fn source_environment(file: &Path) -> Option<String> {
    if file.is_absolute() {
        return None;
    }
    let mut components = file.components().filter(|c| matches!(c, Component::Normal(_)));
    let first = components.next()?;
    components.next()?;
    Some(first.as_os_str().to_string_lossy().into_owned())
}

/// Reads an archive from disk. Directories are zipped in memory and named
/// `<dir>.zip`.
pub fn load_archive(path: &Path) -> Result<ImportArchive> {
    if !path.exists() {
        return Err(CliError::ArchiveNotFoundError {
            path: path.display().to_string(),
        });
    }

    let base_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::ArchiveNotFoundError {
            path: path.display().to_string(),
        })?;

    if path.is_dir() {
        tracing::info!("Zipping application directory {}", path.display());
        Ok(ImportArchive {
            file_name: format!("{}.zip", base_name),
            bytes: zip_directory(path)?,
        })
    } else {
        Ok(ImportArchive {
            file_name: base_name,
            bytes: std::fs::read(path)?,
        })
    }
}

pub fn build_upload_form(archive: ImportArchive) -> Result<Form> {
    let part = Part::bytes(archive.bytes)
        .file_name(archive.file_name)
        .mime_str(FILE_CONTENT_TYPE)?;
    Ok(Form::new().part(FILE_FIELD, part))
}

fn option_params(options: ImportOptions) -> Vec<(&'static str, &'static str)> {
    let mut params = Vec::new();
    if options.preserve_owner {
        params.push(("preserveOwner", "true"));
    }
    if options.add_subscriptions {
        params.push(("addSubscriptions", "true"));
    }
    params
}

/// Uploads an archive to `<store>/import/applications`. 200 and 201 count
/// as success.
pub async fn import_application(
    client: &ApiClient,
    store_endpoint: &str,
    archive: ImportArchive,
    options: ImportOptions,
) -> Result<StatusCode> {
    let url = format!("{}import/applications", append_slash(store_endpoint));
    tracing::info!("Import URL: {}", url);
    tracing::debug!(
        "Uploading {} ({} bytes)",
        archive.file_name,
        archive.bytes.len()
    );

    let form = build_upload_form(archive)?;
    let response = client
        .post_multipart(&url, form, &option_params(options))
        .await?;

    match response.status() {
        status @ (StatusCode::OK | StatusCode::CREATED) => {
            tracing::debug!("Header: {:?}", response.headers());
            Ok(status)
        }
        status => {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Import failed with {}: {}", status, body);
            Err(CliError::unexpected_status(OPERATION, status))
        }
    }
}
