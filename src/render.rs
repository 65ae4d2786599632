/// Value of the `og:site_name` tag on every preview page
pub const SITE_NAME: &str = "Dynasty Scans Embedded";

/// Extra markup for the image route, asking for a large image card
pub const LARGE_IMAGE_CARD: &str = r#"<meta name="twitter:card" content="summary_large_image">"#;

/// Fields substituted into the preview page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub title: String,
    pub description: String,
    pub image: String,
    /// Where the page refreshes to, also used as `og:url`
    pub location: String,
    /// Fixed snippet chosen by the route, inserted without escaping
    pub extra_markup: &'static str,
}

/// Escapes a value for use inside a double-quoted attribute or element text
pub fn escape(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}

/// Renders the preview document for `page`
pub fn render(page: &PageModel) -> String {
    let title = escape(&page.title);
    let location = escape(&page.location);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <meta http-equiv="refresh" content="0; url={location}">
    <meta property="og:title" content="{title}"/>
    <meta property="og:site_name" content="{site_name}"/>
    <meta property="og:description" content="{description}"/>
    <meta property="og:image" content="{image}"/>
    <meta property="og:url" content="{location}"/>
    {extra}
</head>
<body>
</body>
</html>
"#,
        title = title,
        location = location,
        site_name = escape(SITE_NAME),
        description = escape(&page.description),
        image = escape(&page.image),
        extra = page.extra_markup,
    )
}
