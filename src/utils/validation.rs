use crate::utils::error::{CliError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CliError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "endpoint URL is required".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CliError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("store endpoints must use http or https, not {}", scheme),
            }),
        },
        Err(e) => Err(CliError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("not a valid endpoint URL: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CliError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "export directory cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CliError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "export directory contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CliError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "environment names cannot be blank".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CliError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("must be between {} and {} seconds", min, max),
        });
    }
    Ok(())
}

/// A single file name segment under the export directory: no separators and
/// no `..`, so the archive cannot land outside `<export_directory>/<env>/`.
pub fn validate_file_name_segment(field_name: &str, value: &str) -> Result<()> {
    let reason = if value.trim().is_empty() {
        "cannot be empty"
    } else if value.contains(['/', '\\', '\0']) {
        "cannot contain path separators"
    } else if value.contains("..") {
        "cannot contain '..'"
    } else {
        return Ok(());
    };

    Err(CliError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}
