/// Category assigned to tags that carry no explicit prefix
pub const DEFAULT_CATEGORY: &str = "General";

/// A single upstream tag, e.g. `Author: Jane`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub category: String,
    pub name: String,
}

impl Tag {
    /// Create a new tag
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }
}

/// Normalized description of an upstream resource, independent of whether it
/// was read from JSON or scraped from HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentMetadata {
    /// Title shown in the preview card
    pub title: String,

    /// Absolute URL of the preview image
    pub image_url: String,

    /// Tags in the order upstream listed them
    pub tags: Vec<Tag>,
}

impl ContentMetadata {
    /// Create a new metadata record
    pub fn new(title: String, image_url: String, tags: Vec<Tag>) -> Self {
        Self {
            title,
            image_url,
            tags,
        }
    }
}
