use crate::core::{HttpClient, HttpResponse};
use crate::utils::error::{Result, RowsError};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// reqwest 實作，資源路徑相對於 base_url 解析
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
    base_url: Url,
}

pub struct ReqwestResponse {
    inner: reqwest::Response,
}

impl ReqwestClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// An absolute path replaces the base URL's path, the way a page-relative
    /// fetch of `/eq-rows` would.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    type Response = ReqwestResponse;

    async fn get(&self, path: &str) -> Result<ReqwestResponse> {
        let url = self.resolve(path)?;
        tracing::debug!("Making request to: {}", url);

        let response = self.client.get(url).send().await?;
        Ok(ReqwestResponse { inner: response })
    }
}

#[async_trait]
impl HttpResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(|e| RowsError::BodyError {
            message: e.to_string(),
        })
    }
}
