pub mod fetcher;

pub use crate::domain::model::FallbackRow;
pub use crate::domain::ports::{ConfigProvider, Document, Element, HttpClient, HttpResponse};
pub use crate::utils::error::Result;
