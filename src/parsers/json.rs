use crate::error::{Error, Result};
use crate::metadata::Tag;
use crate::parsers::require_non_empty;
use serde::Deserialize;

/// Upstream chapter document (`/chapters/<slug>.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterDocument {
    pub long_title: String,
    pub tags: Vec<ChapterTag>,
    pub pages: Vec<ChapterPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterTag {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterPage {
    pub url: String,
}

impl ChapterDocument {
    /// Upstream-relative URL of the first page
    pub fn first_page_url(&self) -> Result<&str> {
        self.pages
            .first()
            .map(|page| page.url.as_str())
            .ok_or_else(|| Error::UpstreamParse("chapter has no pages".to_string()))
    }

    /// Tags converted to the shared representation
    pub fn tags(&self) -> Vec<Tag> {
        self.tags
            .iter()
            .map(|tag| Tag::new(tag.kind.clone(), tag.name.clone()))
            .collect()
    }
}

/// Parses a chapter JSON body, rejecting documents without pages
pub fn parse_chapter(body: &str) -> Result<ChapterDocument> {
    let doc: ChapterDocument = serde_json::from_str(body)?;
    require_non_empty(doc.first_page_url()?, "first page url")?;

    ::log::debug!(
        "Chapter JSON parsed: {} tags, {} pages",
        doc.tags.len(),
        doc.pages.len()
    );
    Ok(doc)
}
