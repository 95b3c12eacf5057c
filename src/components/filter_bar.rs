//! Filter bar component
//!
//! Renders the row of filter controls and turns key presses into actions.
//! Button rectangles are recorded at draw time so mouse clicks can be
//! resolved back to a control index.

use crate::action::Action;
use crate::component::Component;
use crate::model::Control;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// The filter control bar across the top of the screen
#[derive(Default)]
pub struct FilterBarComponent {
    /// Keyboard focus. Independent of the active marker: focus moves freely,
    /// activation follows it only on Enter or Space.
    pub focused: usize,
    /// Button rectangles from the last draw, in control order.
    hitboxes: Vec<Rect>,
}

impl FilterBarComponent {
    pub fn new() -> Self {
        Self {
            focused: 0,
            hitboxes: Vec::new(),
        }
    }

    pub fn focus_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.focused = (self.focused + 1) % count;
    }

    pub fn focus_prev(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.focused = if self.focused == 0 {
            count - 1
        } else {
            self.focused - 1
        };
    }

    pub fn set_focus(&mut self, index: usize) {
        self.focused = index;
    }

    /// Keep focus valid when the control set shrinks (e.g. after a reload).
    pub fn clamp_focus(&mut self, count: usize) {
        if count == 0 {
            self.focused = 0;
        } else if self.focused >= count {
            self.focused = count - 1;
        }
    }

    /// Resolve a screen position to the control drawn there.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        self.hitboxes
            .iter()
            .position(|rect| rect.contains(Position::new(column, row)))
    }
}

impl Component for FilterBarComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                Some(Action::FocusPrevControl)
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Action::FocusNextControl),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateControl(self.focused)),
            KeyCode::Char(c @ '1'..='9') => {
                Some(Action::ActivateControl(c as usize - '1' as usize))
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('m') => Some(Action::CycleLayoutMode),
            KeyCode::Char('r') => Some(Action::ReloadGallery),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Rendering needs the control set, so it happens in render_filter_bar
        Ok(())
    }
}

/// Render the filter bar and record the button hit-boxes on the component.
pub fn render_filter_bar(
    frame: &mut Frame,
    area: Rect,
    bar: &mut FilterBarComponent,
    controls: &[Control],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filters ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    bar.clamp_focus(controls.len());

    if controls.is_empty() {
        bar.hitboxes = Vec::new();
        frame.render_widget(
            Paragraph::new(Span::styled(
                "no filter controls",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    let (line, hitboxes) = button_row(controls, bar.focused, inner);
    bar.hitboxes = hitboxes;
    frame.render_widget(Paragraph::new(line), inner);
}

/// Lay the buttons out on one line. Returns the styled line and one rectangle
/// per control that is at least partly visible.
fn button_row(controls: &[Control], focused: usize, inner: Rect) -> (Line<'static>, Vec<Rect>) {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut hitboxes = Vec::new();
    let mut x = inner.x;

    for (i, control) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " │ ",
                Style::default().fg(Color::DarkGray),
            ));
            x = x.saturating_add(3);
        }

        let marker = if control.active { "● " } else { "  " };
        let text = format!("{}{}", marker, control.label);
        let width = text.width() as u16;

        let mut style = if control.active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if i == focused {
            style = style.add_modifier(Modifier::REVERSED);
        }

        if x < inner.right() {
            let visible = width.min(inner.right() - x);
            hitboxes.push(Rect::new(x, inner.y, visible, 1));
        }

        spans.push(Span::styled(text, style));
        x = x.saturating_add(width);
    }

    (Line::from(spans), hitboxes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn controls() -> Vec<Control> {
        vec![
            Control::select_all(),
            Control::new("Photos", "photo"),
            Control::new("Videos", "video"),
        ]
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut bar = FilterBarComponent::new();

        bar.focus_prev(3);
        assert_eq!(bar.focused, 2);

        bar.focus_next(3);
        assert_eq!(bar.focused, 0);
    }

    #[test]
    fn test_focus_is_clamped_when_controls_shrink() {
        let mut bar = FilterBarComponent::new();
        bar.set_focus(5);

        bar.clamp_focus(3);
        assert_eq!(bar.focused, 2);

        bar.clamp_focus(0);
        assert_eq!(bar.focused, 0);
    }

    #[test]
    fn test_enter_activates_the_focused_control() {
        let mut bar = FilterBarComponent::new();
        bar.set_focus(2);

        let action = bar.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::ActivateControl(2)));
    }

    #[test]
    fn test_digits_activate_by_position() {
        let mut bar = FilterBarComponent::new();

        let action = bar.handle_key_event(key(KeyCode::Char('1'))).unwrap();
        assert_eq!(action, Some(Action::ActivateControl(0)));

        let action = bar.handle_key_event(key(KeyCode::Char('9'))).unwrap();
        assert_eq!(action, Some(Action::ActivateControl(8)));
    }

    #[test]
    fn test_hit_test_resolves_buttons_and_gaps() {
        let mut bar = FilterBarComponent::new();
        let inner = Rect::new(1, 1, 60, 1);

        let (_, hitboxes) = button_row(&controls(), 0, inner);
        bar.hitboxes = hitboxes;

        // "  All" starts at x=1 and is 5 cells wide.
        assert_eq!(bar.hit_test(1, 1), Some(0));
        assert_eq!(bar.hit_test(5, 1), Some(0));
        // The divider between buttons belongs to nobody.
        assert_eq!(bar.hit_test(7, 1), None);
        // "  Photos" starts after the 3-cell divider.
        assert_eq!(bar.hit_test(9, 1), Some(1));
        // Outside the bar entirely.
        assert_eq!(bar.hit_test(9, 5), None);
    }

    #[test]
    fn test_buttons_past_the_right_edge_get_no_hitbox() {
        let inner = Rect::new(0, 0, 8, 1);

        let (_, hitboxes) = button_row(&controls(), 0, inner);

        // Only the first button fits an 8-cell bar.
        assert_eq!(hitboxes.len(), 1);
    }
}
