use crate::utils::error::{IndexError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.is_empty() {
        return Err(IndexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.into_owned(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(IndexError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.replace('\0', "\\0"),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_optional_path(field_name: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => validate_path(field_name, path),
        None => Ok(()),
    }
}
