//! Data types for the gallery manifest.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One manifest entry.
///
/// Entries whose `kind` is not matched by the engine's item selector never
/// reach the grid; everything else participates and is shown or hidden by the
/// current filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub title: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Category tokens this entry belongs to. An entry may carry several.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

fn default_kind() -> String {
    "item".to_string()
}

impl GalleryEntry {
    /// Exact tag membership, the category test the filter predicate uses.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// An authored filter control: the label shown on the button and the category
/// token it selects. Tokens are taken as written and never checked against
/// the items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpec {
    pub label: String,
    pub token: String,
}

/// The gallery manifest file (JSON or YAML).
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryManifest {
    #[serde(default)]
    pub title: Option<String>,
    /// Explicit control set. When absent, controls are derived from the tags
    /// found on the items.
    #[serde(default)]
    pub filters: Option<Vec<FilterSpec>>,
    #[serde(default)]
    pub items: Vec<GalleryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_defaults_from_minimal_json() {
        let entry: GalleryEntry = serde_json::from_str(r#"{"title": "Dawn"}"#).unwrap();

        assert_eq!(entry.title, "Dawn");
        assert_eq!(entry.kind, "item");
        assert!(entry.tags.is_empty());
        assert!(entry.caption.is_none());
        assert!(entry.date.is_none());
    }

    #[test]
    fn test_entry_parses_date_and_tags() {
        let entry: GalleryEntry = serde_json::from_str(
            r#"{"title": "Harbor", "tags": ["photo", "sea"], "date": "2024-03-12"}"#,
        )
        .unwrap();

        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 12));
        assert!(entry.has_tag("photo"));
        assert!(entry.has_tag("sea"));
    }

    #[test]
    fn test_has_tag_is_exact() {
        let entry: GalleryEntry =
            serde_json::from_str(r#"{"title": "Reel", "tags": ["video"]}"#).unwrap();

        assert!(entry.has_tag("video"));
        assert!(!entry.has_tag("vid"));
        assert!(!entry.has_tag("VIDEO"));
        assert!(!entry.has_tag(""));
    }

    #[test]
    fn test_manifest_without_filters_or_title() {
        let manifest: GalleryManifest =
            serde_json::from_str(r#"{"items": [{"title": "One"}]}"#).unwrap();

        assert!(manifest.title.is_none());
        assert!(manifest.filters.is_none());
        assert_eq!(manifest.items.len(), 1);
    }
}
