use std::fmt;

/// 預設的資料列端點
pub const DEFAULT_RESOURCE_PATH: &str = "/eq-rows";

/// 預設的渲染目標元素 id
pub const DEFAULT_TARGET_ID: &str = "earthquake-tbody";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8082";

/// The row rendered in place of the table body when fetching fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRow {
    pub colspan: u32,
    pub message: String,
}

impl FallbackRow {
    pub fn markup(&self) -> String {
        format!(
            "<tr><td colspan=\"{}\">{}</td></tr>",
            self.colspan, self.message
        )
    }
}

impl Default for FallbackRow {
    fn default() -> Self {
        Self {
            colspan: 8,
            message: "Error: bad request.".to_string(),
        }
    }
}

impl fmt::Display for FallbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup())
    }
}
