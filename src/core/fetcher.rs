use crate::core::{ConfigProvider, Document, Element, HttpClient, HttpResponse};
use crate::domain::model::{FallbackRow, DEFAULT_RESOURCE_PATH, DEFAULT_TARGET_ID};
use crate::utils::error::Result;

/// Fetches the table rows and writes them into the target element.
///
/// Every failure ends in the fallback row plus a single `Fetch error` record
/// on the diagnostic stream; nothing is returned to the caller.
pub struct RowFetcher<C: HttpClient, D: Document> {
    client: C,
    document: D,
    resource_path: String,
    target_id: String,
    fallback: FallbackRow,
}

impl<C: HttpClient, D: Document> RowFetcher<C, D> {
    pub fn new(client: C, document: D) -> Self {
        Self {
            client,
            document,
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            target_id: DEFAULT_TARGET_ID.to_string(),
            fallback: FallbackRow::default(),
        }
    }

    pub fn from_config<P: ConfigProvider>(client: C, document: D, config: &P) -> Self {
        Self {
            client,
            document,
            resource_path: config.resource_path().to_string(),
            target_id: config.target_id().to_string(),
            fallback: FallbackRow::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackRow) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub async fn fetch_and_render(&self) {
        if let Err(e) = self.render_rows().await {
            tracing::error!("Fetch error: {}", e);
            self.render_fallback().await;
        }
    }

    async fn render_rows(&self) -> Result<()> {
        tracing::debug!("Requesting rows from {}", self.resource_path);
        let response = self.client.get(&self.resource_path).await?;

        // 不區分狀態碼，body 一律原樣寫入
        tracing::debug!("Rows response status: {}", response.status());
        let rows = response.text().await?;

        match self.document.get_element_by_id(&self.target_id).await {
            Some(element) => {
                element.set_inner_html(&rows).await?;
                tracing::debug!("Rendered {} bytes into #{}", rows.len(), self.target_id);
            }
            None => tracing::debug!("#{} not found, skipping render", self.target_id),
        }

        Ok(())
    }

    async fn render_fallback(&self) {
        // Looked up again on purpose: the element may have changed since the
        // success path ran.
        let Some(element) = self.document.get_element_by_id(&self.target_id).await else {
            tracing::debug!("#{} not found, skipping fallback", self.target_id);
            return;
        };

        if let Err(e) = element.set_inner_html(&self.fallback.markup()).await {
            tracing::debug!("Fallback render into #{} failed: {}", self.target_id, e);
        }
    }
}
