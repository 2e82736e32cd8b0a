use crate::core::{Document, Element};
use crate::utils::error::{Result, RowsError};
use regex::Regex;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// An HTML file on disk used as the host document.
///
/// Writes only touch the content between the target element's opening tag and
/// its matching closing tag; every other byte of the file is preserved.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

#[derive(Debug, Clone)]
pub struct PageElement {
    page: HtmlPage,
    id: String,
}

impl HtmlPage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn inner_html(&self, id: &str) -> Result<Option<String>> {
        let html = tokio::fs::read_to_string(&self.path).await?;
        Ok(locate_inner(&html, id)?.map(|range| html[range].to_string()))
    }
}

impl Document for HtmlPage {
    type Element = PageElement;

    async fn get_element_by_id(&self, id: &str) -> Option<PageElement> {
        let html = match tokio::fs::read_to_string(&self.path).await {
            Ok(html) => html,
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", self.path.display(), e);
                return None;
            }
        };

        match locate_inner(&html, id) {
            Ok(Some(_)) => Some(PageElement {
                page: self.clone(),
                id: id.to_string(),
            }),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!("Cannot locate #{} in {}: {}", id, self.path.display(), e);
                None
            }
        }
    }
}

impl Element for PageElement {
    async fn set_inner_html(&self, markup: &str) -> Result<()> {
        let _guard = self.page.write_lock.lock().await;

        let html = tokio::fs::read_to_string(&self.page.path).await?;
        let range = locate_inner(&html, &self.id)?.ok_or_else(|| RowsError::TargetDetached {
            id: self.id.clone(),
        })?;

        let mut updated = String::with_capacity(html.len() - range.len() + markup.len());
        updated.push_str(&html[..range.start]);
        updated.push_str(markup);
        updated.push_str(&html[range.end..]);

        tokio::fs::write(&self.page.path, updated).await?;
        Ok(())
    }
}

/// 找出 id 對應元素的內容範圍（開始標籤之後、對應結束標籤之前）
///
/// Tags inside `<!-- ... -->` comments are ignored.
fn locate_inner(html: &str, id: &str) -> Result<Option<Range<usize>>> {
    let escaped = regex::escape(id);
    let open_re = Regex::new(&format!(
        r#"<([A-Za-z][A-Za-z0-9-]*)\s(?:[^>]*\s)?(?i:id)\s*=\s*(?:"{0}"|'{0}')[^>]*>"#,
        escaped
    ))
    .map_err(|e| RowsError::ConfigError {
        message: format!("invalid element id '{}': {}", id, e),
    })?;

    let comments = comment_ranges(html)?;
    let in_comment = |pos: usize| comments.iter().any(|range| range.contains(&pos));

    let Some(caps) = open_re
        .captures_iter(html)
        .find(|caps| caps.get(0).is_some_and(|m| !in_comment(m.start())))
    else {
        return Ok(None);
    };
    let (Some(open_tag), Some(tag_name)) = (caps.get(0), caps.get(1)) else {
        return Ok(None);
    };

    if open_tag.as_str().ends_with("/>") {
        return Err(RowsError::MalformedPage {
            message: format!("#{} is a self-closing <{}>", id, tag_name.as_str()),
        });
    }

    let tag_re = Regex::new(&format!(r"(?i)<(/?){}\b[^>]*>", regex::escape(tag_name.as_str())))
        .map_err(|e| RowsError::MalformedPage {
            message: e.to_string(),
        })?;

    let start = open_tag.end();
    let mut depth = 1usize;
    for tag in tag_re.captures_iter(&html[start..]) {
        let (Some(whole), Some(slash)) = (tag.get(0), tag.get(1)) else {
            continue;
        };
        if in_comment(start + whole.start()) {
            continue;
        }
        if !slash.as_str().is_empty() {
            depth -= 1;
            if depth == 0 {
                return Ok(Some(start..start + whole.start()));
            }
        } else if !whole.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    Err(RowsError::MalformedPage {
        message: format!("<{}> with id '{}' is never closed", tag_name.as_str(), id),
    })
}

/// An unterminated comment runs to the end of the document.
fn comment_ranges(html: &str) -> Result<Vec<Range<usize>>> {
    let comment_re = Regex::new(r"(?s)<!--.*?(?:-->|\z)").map_err(|e| RowsError::MalformedPage {
        message: e.to_string(),
    })?;
    Ok(comment_re.find_iter(html).map(|m| m.range()).collect())
}
