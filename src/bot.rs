/// Marker looked for in the uppercased user agent
const BOT_MARKER: &str = "BOT";

/// Returns true if the user agent looks like a link-preview crawler.
///
/// A missing header counts as a human visitor.
pub fn is_bot(user_agent: Option<&str>) -> bool {
    user_agent
        .map(|agent| agent.to_uppercase().contains(BOT_MARKER))
        .unwrap_or(false)
}
