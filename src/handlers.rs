use crate::bot::is_bot;
use crate::description::build_description;
use crate::error::Result;
use crate::fetchers::{fetch_chapter, fetch_image};
use crate::parsers::ResourceKind;
use crate::render::{LARGE_IMAGE_CARD, PageModel, render};
use crate::server::AppState;
use crate::tags::group_by_category;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};

const DOCS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>dynasty-embed</title>
</head>
<body>
    <h1>dynasty-embed</h1>
    <p>Link previews for Dynasty Scans. Replace <code>dynasty-scans.com</code> in a link with this host.</p>
    <ul>
        <li><code>GET /chapters/{slug}</code>: chapter preview</li>
        <li><code>GET /images/{slug}</code>: image preview with a large image card</li>
        <li><code>GET /health</code>: liveness probe</li>
    </ul>
    <p>Clients whose <code>User-Agent</code> contains <code>bot</code> (any case) receive
    OpenGraph metadata. Everyone else is redirected to the original page, query string included.</p>
</body>
</html>
"#;

/// 302 Found to `location`
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

fn user_agent(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
}

pub async fn index() -> Response {
    found("/docs")
}

pub async fn docs() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn chapter(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response> {
    preview(&state, ResourceKind::Chapter, &slug, &uri, &headers).await
}

pub async fn image(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response> {
    preview(&state, ResourceKind::Image, &slug, &uri, &headers).await
}

/// Redirects humans upstream; renders the preview page for bots
async fn preview(
    state: &AppState,
    kind: ResourceKind,
    slug: &str,
    uri: &Uri,
    headers: &HeaderMap,
) -> Result<Response> {
    let location = state.upstream.resource_url(kind, slug, uri.query())?;
    let agent = user_agent(headers);

    if !is_bot(agent) {
        ::log::debug!("Redirecting {:?} to {}", agent, location);
        return Ok(found(&location));
    }

    ::log::debug!("Rendering {:?} preview of {} for {:?}", kind, slug, agent);
    let (metadata, extra_markup) = match kind {
        ResourceKind::Chapter => (fetch_chapter(&state.upstream, slug).await?, ""),
        ResourceKind::Image => (
            fetch_image(&state.upstream, slug, uri.query()).await?,
            LARGE_IMAGE_CARD,
        ),
    };

    let grouped = group_by_category(&metadata.tags);
    let page = PageModel {
        title: metadata.title,
        description: build_description(&grouped),
        image: metadata.image_url,
        location,
        extra_markup,
    };

    Ok(Html(render(&page)).into_response())
}
