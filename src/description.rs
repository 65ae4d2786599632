use crate::tags::TagsByCategory;

/// Builds the preview description from grouped tags.
///
/// Categories are always rendered in the same order (Doujin, Pairing, General,
/// Author, Scanlator); empty categories are skipped and the sentences are joined
/// with a single space. No tags yields an empty string.
pub fn build_description(grouped: &TagsByCategory) -> String {
    let mut sentences = Vec::new();

    let doujin = grouped.get("Doujin");
    if !doujin.is_empty() {
        sentences.push(format!("{} Doujin.", doujin.join(" and ")));
    }

    let pairing = grouped.get("Pairing");
    if !pairing.is_empty() {
        sentences.push(format!("Pairing: {}.", pairing.join(" and ")));
    }

    let general = grouped.get("General");
    if !general.is_empty() {
        sentences.push(format!("Tags: {}.", general.join(", ")));
    }

    let author = grouped.get("Author");
    if !author.is_empty() {
        sentences.push(format!("By {}.", author.join(" and ")));
    }

    let scanlator = grouped.get("Scanlator");
    if !scanlator.is_empty() {
        sentences.push(format!("Scanned by {}.", scanlator.join(" and ")));
    }

    sentences.join(" ")
}
