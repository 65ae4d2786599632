use crate::metadata::Tag;

/// Tag names grouped by category. Categories keep the order they were first
/// seen in; names keep their input order and duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagsByCategory {
    // A handful of categories per resource, so a linear scan is enough
    groups: Vec<(String, Vec<String>)>,
}

impl TagsByCategory {
    /// Names recorded for `category`, empty if none were seen
    pub fn get(&self, category: &str) -> &[String] {
        self.groups
            .iter()
            .find(|(key, _)| key.as_str() == category)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[])
    }

    /// Append `name` to the list for `category`
    pub fn push(&mut self, category: &str, name: &str) {
        match self.groups.iter_mut().find(|(key, _)| key.as_str() == category) {
            Some((_, names)) => names.push(name.to_string()),
            None => self
                .groups
                .push((category.to_string(), vec![name.to_string()])),
        }
    }

    /// Categories in first-seen order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

/// Groups tag names by their category, preserving input order within each category
pub fn group_by_category(tags: &[Tag]) -> TagsByCategory {
    tags.iter().fold(TagsByCategory::default(), |mut grouped, tag| {
        grouped.push(&tag.category, &tag.name);
        grouped
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_preserves_order_within_category() {
        let tags = vec![
            Tag::new("General", "Comedy"),
            Tag::new("Author", "Jane"),
            Tag::new("General", "Drama"),
            Tag::new("General", "Action"),
        ];

        let grouped = group_by_category(&tags);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.get("General"), ["Comedy", "Drama", "Action"]);
        assert_eq!(grouped.get("Author"), ["Jane"]);
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let tags = vec![
            Tag::new("Scanlator", "Team S"),
            Tag::new("General", "Comedy"),
            Tag::new("Author", "Jane"),
            Tag::new("General", "Drama"),
            Tag::new("Scanlator", "Team T"),
        ];

        let grouped = group_by_category(&tags);
        let categories: Vec<&str> = grouped.categories().collect();
        assert_eq!(categories, vec!["Scanlator", "General", "Author"]);
    }

    #[test]
    fn test_group_keeps_duplicates() {
        let tags = vec![
            Tag::new("Scanlator", "Team A"),
            Tag::new("Scanlator", "Team A"),
        ];

        let grouped = group_by_category(&tags);
        assert_eq!(grouped.get("Scanlator"), ["Team A", "Team A"]);
    }

    #[test]
    fn test_missing_category_is_empty() {
        let grouped = group_by_category(&[]);
        assert!(grouped.is_empty());
        assert!(grouped.get("Doujin").is_empty());
    }

    #[test]
    fn test_group_never_drops_entries() {
        let tags: Vec<Tag> = (0..50)
            .map(|i| Tag::new(format!("C{}", i % 7), format!("n{}", i)))
            .collect();

        let grouped = group_by_category(&tags);
        let total: usize = (0..7).map(|c| grouped.get(&format!("C{}", c)).len()).sum();
        assert_eq!(total, tags.len());

        for c in 0..7 {
            let category = format!("C{}", c);
            let expected: Vec<String> = tags
                .iter()
                .filter(|t| t.category == category)
                .map(|t| t.name.clone())
                .collect();
            assert_eq!(grouped.get(&category), expected.as_slice());
        }
    }
}
