use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound read capability. `path` is resolved against whatever base the
/// implementation was built with.
#[async_trait]
pub trait HttpClient: Send + Sync {
    type Response: HttpResponse;

    async fn get(&self, path: &str) -> Result<Self::Response>;
}

#[async_trait]
pub trait HttpResponse: Send {
    fn status(&self) -> u16;

    /// Consumes the response and reads the whole body as text.
    async fn text(self) -> Result<String>;
}

/// A host document whose elements can be looked up by id.
pub trait Document: Send + Sync {
    type Element: Element;

    fn get_element_by_id(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Option<Self::Element>> + Send;
}

pub trait Element: Send + Sync {
    /// Replaces the element's content with `markup`, verbatim.
    fn set_inner_html(&self, markup: &str)
        -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn resource_path(&self) -> &str;
    fn target_id(&self) -> &str;
}
