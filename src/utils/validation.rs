use crate::utils::error::{Result, RowsError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RowsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RowsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RowsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_resource_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if !path.starts_with('/') {
        return Err(RowsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Resource path must start with '/'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RowsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RowsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RowsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("fetch.base_url", "https://example.com").is_ok());
        assert!(validate_url("fetch.base_url", "http://localhost:8082").is_ok());
        assert!(validate_url("fetch.base_url", "").is_err());
        assert!(validate_url("fetch.base_url", "invalid-url").is_err());
        assert!(validate_url("fetch.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_resource_path() {
        assert!(validate_resource_path("fetch.resource_path", "/eq-rows").is_ok());
        assert!(validate_resource_path("fetch.resource_path", "eq-rows").is_err());
        assert!(validate_resource_path("fetch.resource_path", "  ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("render.page", "static/index.html").is_ok());
        assert!(validate_path("render.page", "").is_err());
        assert!(validate_path("render.page", "bad\0path").is_err());
    }
}
