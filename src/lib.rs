pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{http::ReqwestClient, memory::MemoryDocument, page::HtmlPage};
pub use crate::config::{settings::Settings, toml_config::TomlConfig};
pub use crate::core::fetcher::RowFetcher;
pub use crate::domain::model::FallbackRow;
pub use crate::utils::error::{Result, RowsError};
