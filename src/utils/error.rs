use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowsError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request failed: {message}")]
    RequestError { message: String },

    #[error("Failed to read response body: {message}")]
    BodyError { message: String },

    #[error("Render target '{id}' is no longer in the document")]
    TargetDetached { id: String },

    #[error("Malformed page: {message}")]
    MalformedPage { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl RowsError {
    /// 是否為配置相關錯誤
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            RowsError::ConfigError { .. }
                | RowsError::InvalidConfigValueError { .. }
                | RowsError::MissingConfigError { .. }
                | RowsError::UrlError(_)
        )
    }

    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            RowsError::HttpError(_) | RowsError::RequestError { .. } => {
                "Could not reach the rows endpoint".to_string()
            }
            RowsError::BodyError { .. } => "The rows endpoint sent an unreadable body".to_string(),
            RowsError::IoError(e) => format!("File access failed: {}", e),
            RowsError::TargetDetached { id } => {
                format!("The page no longer contains an element with id '{}'", id)
            }
            RowsError::MalformedPage { message } => format!("The page is malformed: {}", message),
            RowsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            RowsError::MissingConfigError { field } => format!("Missing setting '{}'", field),
            RowsError::ConfigError { message } => format!("Configuration problem: {}", message),
            RowsError::UrlError(e) => format!("Invalid URL: {}", e),
        }
    }

    /// 修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RowsError::HttpError(_) | RowsError::RequestError { .. } => {
                "Check that the server is running and --base-url points at it"
            }
            RowsError::BodyError { .. } => "Retry the request; the connection may have dropped",
            RowsError::IoError(_) => "Check the file path and its permissions",
            RowsError::TargetDetached { .. } | RowsError::MalformedPage { .. } => {
                "Make sure the page contains the target element, e.g. <tbody id=\"earthquake-tbody\"></tbody>"
            }
            RowsError::InvalidConfigValueError { .. }
            | RowsError::MissingConfigError { .. }
            | RowsError::ConfigError { .. }
            | RowsError::UrlError(_) => "Fix the command line flags or the TOML config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, RowsError>;
