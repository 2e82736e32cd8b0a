use crate::core::{Document, Element};
use crate::utils::error::{Result, RowsError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

type Slot = Arc<Mutex<String>>;

/// 記憶體中的文件，元素以 id 索引
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Arc<Mutex<HashMap<String, Slot>>>,
}

#[derive(Debug, Clone)]
pub struct MemoryElement {
    id: String,
    slot: Slot,
    document: MemoryDocument,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = ids
            .into_iter()
            .map(|id| (id.into(), Slot::default()))
            .collect();

        Self {
            elements: Arc::new(Mutex::new(elements)),
        }
    }

    pub async fn insert_element(&self, id: &str) {
        let mut elements = self.elements.lock().await;
        elements.entry(id.to_string()).or_default();
    }

    /// Detaches the element; handles already looked up stop accepting writes.
    pub async fn remove_element(&self, id: &str) -> Option<String> {
        let slot = self.elements.lock().await.remove(id)?;
        let content = slot.lock().await.clone();
        Some(content)
    }

    pub async fn inner_html(&self, id: &str) -> Option<String> {
        let slot = self.elements.lock().await.get(id).cloned()?;
        let content = slot.lock().await.clone();
        Some(content)
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    async fn get_element_by_id(&self, id: &str) -> Option<MemoryElement> {
        let elements = self.elements.lock().await;
        elements.get(id).map(|slot| MemoryElement {
            id: id.to_string(),
            slot: slot.clone(),
            document: self.clone(),
        })
    }
}

impl Element for MemoryElement {
    async fn set_inner_html(&self, markup: &str) -> Result<()> {
        let elements = self.document.elements.lock().await;
        let attached = elements
            .get(&self.id)
            .is_some_and(|slot| Arc::ptr_eq(slot, &self.slot));
        if !attached {
            return Err(RowsError::TargetDetached {
                id: self.id.clone(),
            });
        }

        *self.slot.lock().await = markup.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_and_write() {
        tokio_test::block_on(async {
            let document = MemoryDocument::with_elements(["earthquake-tbody"]);

            let element = document.get_element_by_id("earthquake-tbody").await.unwrap();
            element.set_inner_html("<tr></tr>").await.unwrap();

            assert_eq!(
                document.inner_html("earthquake-tbody").await.unwrap(),
                "<tr></tr>"
            );
            assert!(document.get_element_by_id("other").await.is_none());
        });
    }

    #[test]
    fn test_detached_element_rejects_writes() {
        tokio_test::block_on(async {
            let document = MemoryDocument::new();
            document.insert_element("rows").await;
            let element = document.get_element_by_id("rows").await.unwrap();

            assert_eq!(document.remove_element("rows").await.unwrap(), "");
            assert!(matches!(
                element.set_inner_html("<tr></tr>").await,
                Err(RowsError::TargetDetached { .. })
            ));

            // A new element under the same id is a different element.
            document.insert_element("rows").await;
            assert!(element.set_inner_html("<tr></tr>").await.is_err());
            assert_eq!(document.inner_html("rows").await.unwrap(), "");
        });
    }

    #[test]
    fn test_insert_keeps_existing_content() {
        tokio_test::block_on(async {
            let document = MemoryDocument::with_elements(["rows"]);
            let element = document.get_element_by_id("rows").await.unwrap();
            element.set_inner_html("kept").await.unwrap();

            document.insert_element("rows").await;
            assert_eq!(document.inner_html("rows").await.unwrap(), "kept");
        });
    }
}
