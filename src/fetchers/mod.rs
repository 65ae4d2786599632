pub mod chapter;
pub mod image;

pub use chapter::fetch_chapter;
pub use image::fetch_image;

use crate::config::EmbedConfig;
use crate::error::{Error, Result};
use crate::parsers::ResourceKind;
use url::Url;

/// Handle on the upstream site: the base URL plus a pooled HTTP client.
///
/// Created once at startup and cloned into every request; clones share the
/// same connection pool.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: reqwest::Client,
    base: Url,
}

impl Upstream {
    /// Build the shared client from configuration
    pub fn new(config: &EmbedConfig) -> Result<Self> {
        let base = config.upstream_url()?;
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Http(format!("failed to build upstream client: {}", e)))?;

        Ok(Self { client, base })
    }

    /// Public URL of a resource, e.g. `<base>/chapters/<slug>?<query>`.
    ///
    /// The query string is appended exactly as received, without re-encoding.
    pub fn resource_url(
        &self,
        kind: ResourceKind,
        slug: &str,
        raw_query: Option<&str>,
    ) -> Result<String> {
        let url = self.join_segments(&[kind.path_segment(), slug])?;
        Ok(match raw_query {
            Some(query) => format!("{}?{}", url, query),
            None => url.to_string(),
        })
    }

    /// JSON representation of a chapter
    pub fn chapter_json_url(&self, slug: &str) -> Result<Url> {
        let file = format!("{}.json", slug);
        self.join_segments(&[ResourceKind::Chapter.path_segment(), &file])
    }

    /// Resolves an upstream-relative path (page url, img src) against the base
    pub fn absolute(&self, path: &str) -> Result<String> {
        self.base
            .join(path)
            .map(|url| url.to_string())
            .map_err(|e| Error::UpstreamParse(format!("bad upstream path {}: {}", path, e)))
    }

    fn join_segments(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("{} cannot be used as a base", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Single GET against upstream, returning the body of a 2xx response
    pub async fn get_text(&self, url: &str) -> Result<String> {
        ::log::debug!("Fetching upstream: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamFetch(format!("{} returned {}", url, status)));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(base: &str) -> Upstream {
        let config = EmbedConfig {
            upstream_base: base.to_string(),
            ..EmbedConfig::default()
        };
        Upstream::new(&config).unwrap()
    }

    #[test]
    fn test_resource_url_without_query() {
        let up = upstream("https://dynasty-scans.com");
        let url = up.resource_url(ResourceKind::Chapter, "abc", None).unwrap();
        assert_eq!(url, "https://dynasty-scans.com/chapters/abc");
    }

    #[test]
    fn test_resource_url_forwards_query_verbatim() {
        let up = upstream("https://dynasty-scans.com");
        let url = up
            .resource_url(ResourceKind::Image, "xyz", Some("b=2&a=1&a=3"))
            .unwrap();
        assert_eq!(url, "https://dynasty-scans.com/images/xyz?b=2&a=1&a=3");
    }

    #[test]
    fn test_query_characters_are_not_reencoded() {
        let up = upstream("https://dynasty-scans.com");
        let url = up
            .resource_url(ResourceKind::Chapter, "abc", Some("name='abc'&a=%20b&a=c&x=\"x\""))
            .unwrap();
        assert_eq!(
            url,
            "https://dynasty-scans.com/chapters/abc?name='abc'&a=%20b&a=c&x=\"x\""
        );
    }

    #[test]
    fn test_empty_query_keeps_question_mark() {
        let up = upstream("https://dynasty-scans.com");
        let url = up.resource_url(ResourceKind::Image, "xyz", Some("")).unwrap();
        assert_eq!(url, "https://dynasty-scans.com/images/xyz?");
    }

    #[test]
    fn test_slug_is_encoded_as_one_segment() {
        let up = upstream("https://dynasty-scans.com/");
        let url = up
            .resource_url(ResourceKind::Chapter, "a b/c", None)
            .unwrap();
        assert_eq!(url, "https://dynasty-scans.com/chapters/a%20b%2Fc");
    }

    #[test]
    fn test_base_with_path_prefix() {
        let up = upstream("https://mirror.example/dynasty/");
        let url = up.chapter_json_url("abc").unwrap();
        assert_eq!(url.as_str(), "https://mirror.example/dynasty/chapters/abc.json");
    }

    #[test]
    fn test_absolute() {
        let up = upstream("https://dynasty-scans.com");
        assert_eq!(
            up.absolute("/img/1.png").unwrap(),
            "https://dynasty-scans.com/img/1.png"
        );
        assert_eq!(
            up.absolute("https://cdn.example/1.png").unwrap(),
            "https://cdn.example/1.png"
        );
    }
}
