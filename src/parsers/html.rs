use crate::error::{Error, Result};
use crate::metadata::{DEFAULT_CATEGORY, Tag};
use crate::parsers::require_non_empty;
use scraper::{ElementRef, Html, Selector};

/// Fields scraped from an upstream image page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDocument {
    /// `src` of the image, usually upstream-relative
    pub src: String,
    /// Tags in page order
    pub tags: Vec<Tag>,
}

impl ImageDocument {
    /// Preview title, e.g. `Image: Comedy, A x B`
    pub fn title(&self) -> String {
        let names = self
            .tags
            .iter()
            .map(|tag| tag.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Image: {}", names)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::UpstreamParse(format!("selector {}: {}", css, e)))
}

/// Concatenated text content of an element
fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>()
}

/// Splits anchor text on its first colon into category and name.
///
/// Text without a colon falls into the `General` category.
pub fn parse_tag_text(text: &str) -> Tag {
    match text.split_once(':') {
        Some((category, name)) => Tag::new(category.trim(), name.trim()),
        None => Tag::new(DEFAULT_CATEGORY, text.trim()),
    }
}

/// Parses an upstream image page.
///
/// The page must contain an element with class `image` wrapping an `<img src>`,
/// and an element with class `tags` wrapping the tag anchors.
pub fn parse_image_page(body: &str) -> Result<ImageDocument> {
    let doc = Html::parse_document(body);

    let image_container = doc
        .select(&selector(".image")?)
        .next()
        .ok_or_else(|| Error::UpstreamParse("no .image element".to_string()))?;
    let src = image_container
        .select(&selector("img")?)
        .find_map(|img| img.value().attr("src"))
        .ok_or_else(|| Error::UpstreamParse("no img[src] inside .image".to_string()))?
        .to_string();
    require_non_empty(&src, "image src")?;

    let tags_container = doc
        .select(&selector(".tags")?)
        .next()
        .ok_or_else(|| Error::UpstreamParse("no .tags element".to_string()))?;
    let tags = tags_container
        .select(&selector("a")?)
        .map(|anchor| element_text(&anchor))
        .filter(|text| !text.trim().is_empty())
        .map(|text| parse_tag_text(&text))
        .collect::<Vec<_>>();

    ::log::debug!("Image page parsed: src={} with {} tags", src, tags.len());

    Ok(ImageDocument { src, tags })
}
