use std::path::Path;

/// 以系統預設瀏覽器開啟頁面，失敗只記錄警告
pub fn open_page(path: &Path) {
    match open::that_detached(path) {
        Ok(()) => tracing::info!("Opened {} in the browser", path.display()),
        Err(e) => tracing::warn!("Browser could not be opened: {}", e),
    }
}
