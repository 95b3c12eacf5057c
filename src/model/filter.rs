//! Filter controls and the predicate derived from their tokens.

use crate::model::item::GalleryEntry;

/// Sentinel category token meaning "show everything".
pub const ALL_TOKEN: &str = "*";

/// One filter control: a button in the bar tied to a category token.
///
/// At most one control carries the active marker at a time; the controller
/// maintains that convention when it handles activations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub token: String,
    pub active: bool,
}

impl Control {
    pub fn new(label: &str, token: &str) -> Self {
        Self {
            label: label.to_string(),
            token: token.to_string(),
            active: false,
        }
    }

    /// The control for the sentinel token.
    pub fn select_all() -> Self {
        Self::new("All", ALL_TOKEN)
    }
}

/// Predicate handed to the layout engine when a control is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Sentinel: every item matches.
    All,
    /// Items carrying this tag match.
    Tag(String),
}

impl Filter {
    /// Derive the predicate from a raw category token. Tokens are taken
    /// as-is; one that names no tag simply matches nothing.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_TOKEN {
            Filter::All
        } else {
            Filter::Tag(token.to_string())
        }
    }

    pub fn matches(&self, entry: &GalleryEntry) -> bool {
        match self {
            Filter::All => true,
            Filter::Tag(tag) => entry.has_tag(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, tags: &[&str]) -> GalleryEntry {
        GalleryEntry {
            title: title.to_string(),
            kind: "item".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            caption: None,
            date: None,
        }
    }

    #[test]
    fn test_sentinel_token_derives_all() {
        assert_eq!(Filter::from_token("*"), Filter::All);
    }

    #[test]
    fn test_category_token_derives_tag() {
        assert_eq!(Filter::from_token("photo"), Filter::Tag("photo".to_string()));
    }

    #[test]
    fn test_all_matches_everything() {
        let filter = Filter::from_token("*");

        assert!(filter.matches(&entry("a", &["photo"])));
        assert!(filter.matches(&entry("b", &[])));
    }

    #[test]
    fn test_tag_matches_any_of_the_entry_tags() {
        let filter = Filter::from_token("sea");

        assert!(filter.matches(&entry("a", &["photo", "sea"])));
        assert!(!filter.matches(&entry("b", &["photo"])));
    }

    #[test]
    fn test_unknown_token_matches_nothing() {
        let filter = Filter::from_token("sculpture");

        assert!(!filter.matches(&entry("a", &["photo"])));
        assert!(!filter.matches(&entry("b", &["video", "print"])));
    }

    #[test]
    fn test_empty_token_is_a_tag_not_the_sentinel() {
        let filter = Filter::from_token("");

        assert_eq!(filter, Filter::Tag(String::new()));
        assert!(!filter.matches(&entry("a", &["photo"])));
    }
}
