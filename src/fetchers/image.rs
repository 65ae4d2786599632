use crate::error::Result;
use crate::fetchers::Upstream;
use crate::metadata::ContentMetadata;
use crate::parsers::ResourceKind;
use crate::parsers::html::parse_image_page;

/// Fetches the HTML page of an image and scrapes its source and tags
pub async fn fetch_image(
    upstream: &Upstream,
    slug: &str,
    raw_query: Option<&str>,
) -> Result<ContentMetadata> {
    let url = upstream.resource_url(ResourceKind::Image, slug, raw_query)?;
    let body = upstream.get_text(&url).await?;
    let doc = parse_image_page(&body)?;

    let image_url = upstream.absolute(&doc.src)?;
    Ok(ContentMetadata::new(doc.title(), image_url, doc.tags))
}
