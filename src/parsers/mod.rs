pub mod html;
pub mod json;

#[cfg(test)]
mod tests;

use crate::error::{Error, Result};

/// Upstream resource families this relay understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Chapter pages, described by a JSON document
    Chapter,
    /// Standalone images, described by an HTML page
    Image,
}

impl ResourceKind {
    /// Path segment the resource lives under, both here and upstream
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::Chapter => "chapters",
            ResourceKind::Image => "images",
        }
    }
}

/// Fails with a parse error when a required upstream value is empty
pub(crate) fn require_non_empty(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::UpstreamParse(format!("{} is empty", what)));
    }
    Ok(())
}
