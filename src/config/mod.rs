pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::{settings::Settings, toml_config::TomlConfig};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "quake-rows")]
#[command(about = "Fetch earthquake table rows and render them into a page")]
pub struct CliConfig {
    #[arg(long, help = "Server base URL [default: http://localhost:8082]")]
    pub base_url: Option<String>,

    #[arg(long, help = "Rows resource path [default: /eq-rows]")]
    pub resource_path: Option<String>,

    #[arg(long, help = "Id of the element receiving the rows [default: earthquake-tbody]")]
    pub target_id: Option<String>,

    #[arg(long, help = "HTML page to render into; prints the rows when omitted")]
    pub page: Option<PathBuf>,

    #[arg(long, short = 'c', help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Open the page in the browser after rendering")]
    pub open: bool,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併順序：預設值 < TOML 檔 < 命令列參數
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading config file {}", path.display());
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            settings = settings.merge_toml(&file);
        }

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(resource_path) = &self.resource_path {
            settings.resource_path = resource_path.clone();
        }
        if let Some(target_id) = &self.target_id {
            settings.target_id = target_id.clone();
        }
        if let Some(page) = &self.page {
            settings.page = Some(page.clone());
        }
        if self.open {
            settings.open_browser = true;
        }

        Ok(settings)
    }
}
