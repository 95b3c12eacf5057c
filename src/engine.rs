//! Grid layout engine.
//!
//! Owns the bound item collection and the visible set. The filter controller
//! talks to it only through the [`LayoutEngine`] trait; cell geometry is
//! produced later by `ratatui`'s layout solver from the row groupings
//! computed here.

use crate::model::{Filter, GalleryEntry};
use serde::{Deserialize, Serialize};

/// Arrangement strategy the engine is initialized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Cells flow left to right into uniform rows.
    #[default]
    FitRows,
    /// One full-width cell per row.
    Vertical,
}

impl LayoutMode {
    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::FitRows => "fit-rows",
            LayoutMode::Vertical => "vertical",
        }
    }

    /// The other mode, for the runtime toggle.
    pub fn next(&self) -> LayoutMode {
        match self {
            LayoutMode::FitRows => LayoutMode::Vertical,
            LayoutMode::Vertical => LayoutMode::FitRows,
        }
    }
}

/// Decides which manifest entries are bound into the grid at all. Entries
/// rejected here are invisible to every later arrange call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSelector {
    kind: String,
}

impl ItemSelector {
    pub fn kind(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
        }
    }

    pub fn matches(&self, entry: &GalleryEntry) -> bool {
        entry.kind == self.kind
    }
}

impl Default for ItemSelector {
    fn default() -> Self {
        Self::kind("item")
    }
}

/// The re-filter seam between the controller and the engine.
pub trait LayoutEngine {
    /// Re-arrange the collection: show items matching `filter`, hide the
    /// rest. Relative order of the survivors is preserved.
    fn arrange(&mut self, filter: &Filter);
}

/// Production engine backing the grid view.
pub struct GridEngine {
    items: Vec<GalleryEntry>,
    /// Indices into `items`, in manifest order.
    visible: Vec<usize>,
    mode: LayoutMode,
}

impl GridEngine {
    /// Bind the engine to an item collection once at startup. Entries not
    /// matching `selector` are dropped; everything else starts visible.
    pub fn bind(entries: Vec<GalleryEntry>, selector: &ItemSelector, mode: LayoutMode) -> Self {
        let items: Vec<GalleryEntry> = entries
            .into_iter()
            .filter(|entry| selector.matches(entry))
            .collect();
        let visible = (0..items.len()).collect();

        Self {
            items,
            visible,
            mode,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: LayoutMode) {
        self.mode = mode;
    }

    /// Total bound items, visible or not.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Cells per row for the current mode. `columns` is how many cells fit
    /// the target area; vertical mode ignores it.
    pub fn lanes(&self, columns: usize) -> usize {
        match self.mode {
            LayoutMode::FitRows => columns.max(1),
            LayoutMode::Vertical => 1,
        }
    }

    /// Group the visible items into rows for the current mode.
    pub fn rows(&self, columns: usize) -> Vec<Vec<&GalleryEntry>> {
        self.visible
            .chunks(self.lanes(columns))
            .map(|chunk| chunk.iter().map(|&i| &self.items[i]).collect())
            .collect()
    }

    /// Row count for the current mode, for scroll bounds.
    pub fn row_count(&self, columns: usize) -> usize {
        self.visible.len().div_ceil(self.lanes(columns))
    }
}

impl LayoutEngine for GridEngine {
    fn arrange(&mut self, filter: &Filter) {
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(item))
            .map(|(i, _)| i)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, kind: &str, tags: &[&str]) -> GalleryEntry {
        GalleryEntry {
            title: title.to_string(),
            kind: kind.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            caption: None,
            date: None,
        }
    }

    fn visible_titles(engine: &GridEngine) -> Vec<String> {
        engine
            .rows(usize::MAX)
            .into_iter()
            .flatten()
            .map(|item| item.title.clone())
            .collect()
    }

    #[test]
    fn test_bind_drops_entries_the_selector_rejects() {
        let engine = GridEngine::bind(
            vec![
                entry("a", "item", &["photo"]),
                entry("divider", "heading", &[]),
                entry("b", "item", &["video"]),
            ],
            &ItemSelector::default(),
            LayoutMode::FitRows,
        );

        assert_eq!(engine.len(), 2);
        assert_eq!(visible_titles(&engine), vec!["a", "b"]);
    }

    #[test]
    fn test_everything_visible_before_first_arrange() {
        let engine = GridEngine::bind(
            vec![entry("a", "item", &["photo"]), entry("b", "item", &["video"])],
            &ItemSelector::default(),
            LayoutMode::FitRows,
        );

        assert_eq!(engine.visible_len(), engine.len());
    }

    #[test]
    fn test_arrange_keeps_matching_items_in_order() {
        let mut engine = GridEngine::bind(
            vec![
                entry("p1", "item", &["photo"]),
                entry("v1", "item", &["video"]),
                entry("p2", "item", &["photo"]),
            ],
            &ItemSelector::default(),
            LayoutMode::FitRows,
        );

        engine.arrange(&Filter::from_token("photo"));
        assert_eq!(visible_titles(&engine), vec!["p1", "p2"]);

        engine.arrange(&Filter::from_token("*"));
        assert_eq!(visible_titles(&engine), vec!["p1", "v1", "p2"]);
    }

    #[test]
    fn test_arrange_with_unknown_token_hides_everything() {
        let mut engine = GridEngine::bind(
            vec![entry("a", "item", &["photo"])],
            &ItemSelector::default(),
            LayoutMode::FitRows,
        );

        engine.arrange(&Filter::from_token("sculpture"));

        assert_eq!(engine.visible_len(), 0);
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_fit_rows_chunks_by_column_count() {
        let engine = GridEngine::bind(
            vec![
                entry("a", "item", &[]),
                entry("b", "item", &[]),
                entry("c", "item", &[]),
                entry("d", "item", &[]),
                entry("e", "item", &[]),
            ],
            &ItemSelector::default(),
            LayoutMode::FitRows,
        );

        let rows = engine.rows(2);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[2].len(), 1);
        assert_eq!(engine.row_count(2), 3);
    }

    #[test]
    fn test_vertical_mode_ignores_column_count() {
        let engine = GridEngine::bind(
            vec![entry("a", "item", &[]), entry("b", "item", &[])],
            &ItemSelector::default(),
            LayoutMode::Vertical,
        );

        assert_eq!(engine.lanes(4), 1);
        assert_eq!(engine.rows(4).len(), 2);
    }

    #[test]
    fn test_zero_columns_clamps_to_one_lane() {
        let engine = GridEngine::bind(
            vec![entry("a", "item", &[])],
            &ItemSelector::default(),
            LayoutMode::FitRows,
        );

        assert_eq!(engine.lanes(0), 1);
        assert_eq!(engine.row_count(0), 1);
    }

    #[test]
    fn test_mode_toggle_round_trips() {
        assert_eq!(LayoutMode::FitRows.next(), LayoutMode::Vertical);
        assert_eq!(LayoutMode::Vertical.next(), LayoutMode::FitRows);
    }
}
