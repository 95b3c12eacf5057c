//! Filter controller.
//!
//! Owns the control set and reacts to activation events: clear the active
//! markers, derive a predicate from the activated control's token, hand it to
//! the layout engine, then mark the control active. The items themselves are
//! never inspected or mutated here; that stays the engine's business.

use crate::engine::LayoutEngine;
use crate::model::{Control, Filter};

pub struct FilterController {
    controls: Vec<Control>,
}

impl FilterController {
    pub fn new(controls: Vec<Control>) -> Self {
        Self { controls }
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Position of the control carrying the active marker, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.controls.iter().position(|control| control.active)
    }

    pub fn active_control(&self) -> Option<&Control> {
        self.active_index().map(|i| &self.controls[i])
    }

    /// Handle an activation of the control at `index`.
    ///
    /// Every active marker is cleared, the predicate derived from the
    /// control's token is handed to the engine, and the control is marked
    /// active, in that order. Re-activating the already-active control runs
    /// the same sequence and lands in the same state. An index that names no
    /// control is ignored outright, markers included.
    pub fn on_control_activated(&mut self, index: usize, engine: &mut dyn LayoutEngine) {
        let Some(token) = self.controls.get(index).map(|c| c.token.clone()) else {
            return;
        };

        for control in &mut self.controls {
            control.active = false;
        }

        let filter = Filter::from_token(&token);
        engine.arrange(&filter);

        self.controls[index].active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GridEngine, ItemSelector, LayoutMode};
    use crate::model::GalleryEntry;

    /// Engine double that records every predicate it is handed.
    struct RecordingEngine {
        seen: Vec<Filter>,
    }

    impl RecordingEngine {
        fn new() -> Self {
            Self { seen: Vec::new() }
        }
    }

    impl LayoutEngine for RecordingEngine {
        fn arrange(&mut self, filter: &Filter) {
            self.seen.push(filter.clone());
        }
    }

    fn controls() -> Vec<Control> {
        vec![
            Control::select_all(),
            Control::new("Photos", "photo"),
            Control::new("Videos", "video"),
        ]
    }

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
    fn test_activation_marks_exactly_one_control() {
        let mut controller = FilterController::new(controls());
        let mut engine = RecordingEngine::new();

        controller.on_control_activated(1, &mut engine);

        let active: Vec<bool> = controller.controls().iter().map(|c| c.active).collect();
        assert_eq!(active, vec![false, true, false]);
        assert_eq!(controller.active_index(), Some(1));
    }

    #[test]
    fn test_activation_clears_the_previous_marker() {
        let mut controller = FilterController::new(controls());
        let mut engine = RecordingEngine::new();

        controller.on_control_activated(1, &mut engine);
        controller.on_control_activated(2, &mut engine);

        let active: Vec<bool> = controller.controls().iter().map(|c| c.active).collect();
        assert_eq!(active, vec![false, false, true]);
    }

    #[test]
    fn test_sentinel_control_forwards_the_all_predicate() {
        let mut controller = FilterController::new(controls());
        let mut engine = RecordingEngine::new();

        controller.on_control_activated(0, &mut engine);

        assert_eq!(engine.seen, vec![Filter::All]);
    }

    #[test]
    fn test_category_control_forwards_its_token() {
        let mut controller = FilterController::new(controls());
        let mut engine = RecordingEngine::new();

        controller.on_control_activated(2, &mut engine);

        assert_eq!(engine.seen, vec![Filter::Tag("video".to_string())]);
    }

    #[test]
    fn test_reactivating_the_active_control_repeats_the_arrange() {
        let mut controller = FilterController::new(controls());
        let mut engine = RecordingEngine::new();

        controller.on_control_activated(1, &mut engine);
        controller.on_control_activated(1, &mut engine);

        assert_eq!(
            engine.seen,
            vec![
                Filter::Tag("photo".to_string()),
                Filter::Tag("photo".to_string())
            ]
        );
        assert_eq!(controller.active_index(), Some(1));
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut controller = FilterController::new(controls());
        let mut engine = RecordingEngine::new();

        controller.on_control_activated(1, &mut engine);
        controller.on_control_activated(9, &mut engine);

        // Neither the markers nor the engine saw the bad activation.
        assert_eq!(controller.active_index(), Some(1));
        assert_eq!(engine.seen.len(), 1);
    }

    #[test]
    fn test_controls_with_unknown_tokens_are_kept_as_authored() {
        let mut controller =
            FilterController::new(vec![Control::new("Sculptures", "sculpture")]);
        let mut engine = RecordingEngine::new();

        controller.on_control_activated(0, &mut engine);

        assert_eq!(engine.seen, vec![Filter::Tag("sculpture".to_string())]);
        assert_eq!(controller.active_index(), Some(0));
    }

    #[test]
    fn test_activation_refilters_a_real_grid() {
        let mut controller = FilterController::new(controls());
        let mut engine = GridEngine::bind(
            vec![
                entry("p1", &["photo"]),
                entry("v1", &["video"]),
                entry("p2", &["photo"]),
            ],
            &ItemSelector::default(),
            LayoutMode::FitRows,
        );

        controller.on_control_activated(1, &mut engine);
        assert_eq!(engine.visible_len(), 2);

        controller.on_control_activated(2, &mut engine);
        assert_eq!(engine.visible_len(), 1);

        controller.on_control_activated(0, &mut engine);
        assert_eq!(engine.visible_len(), 3);
    }
}
