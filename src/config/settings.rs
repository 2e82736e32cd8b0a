use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::domain::model::{DEFAULT_BASE_URL, DEFAULT_RESOURCE_PATH, DEFAULT_TARGET_ID};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_resource_path, validate_url, Validate,
};
use std::path::PathBuf;

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub resource_path: String,
    pub target_id: String,
    pub page: Option<PathBuf>,
    pub open_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            target_id: DEFAULT_TARGET_ID.to_string(),
            page: None,
            open_browser: false,
        }
    }
}

impl Settings {
    /// 以 TOML 中有設定的欄位覆蓋
    pub fn merge_toml(mut self, config: &TomlConfig) -> Self {
        if let Some(base_url) = &config.fetch.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(resource_path) = &config.fetch.resource_path {
            self.resource_path = resource_path.clone();
        }
        if let Some(target_id) = &config.render.target_id {
            self.target_id = target_id.clone();
        }
        if let Some(page) = &config.render.page {
            self.page = Some(PathBuf::from(page));
        }
        if let Some(open_browser) = config.render.open_browser {
            self.open_browser = open_browser;
        }
        self
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resource_path(&self) -> &str {
        &self.resource_path
    }

    fn target_id(&self) -> &str {
        &self.target_id
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("fetch.base_url", &self.base_url)?;
        validate_resource_path("fetch.resource_path", &self.resource_path)?;
        validate_non_empty_string("render.target_id", &self.target_id)?;
        if let Some(page) = &self.page {
            validate_path("render.page", &page.to_string_lossy())?;
        }
        Ok(())
    }
}
