use crate::error::Result;
use crate::fetchers::Upstream;
use crate::metadata::ContentMetadata;
use crate::parsers::json::parse_chapter;

/// Fetches `<base>/chapters/<slug>.json` and normalizes it.
///
/// The preview image is the chapter's first page.
pub async fn fetch_chapter(upstream: &Upstream, slug: &str) -> Result<ContentMetadata> {
    let url = upstream.chapter_json_url(slug)?;
    let body = upstream.get_text(url.as_str()).await?;
    let doc = parse_chapter(&body)?;

    let image_url = upstream.absolute(doc.first_page_url()?)?;
    Ok(ContentMetadata::new(doc.long_title.clone(), image_url, doc.tags()))
}
