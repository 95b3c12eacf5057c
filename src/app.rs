//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that routes events to child components and applies actions to
//! the filter controller and the layout engine. App coordinates; the
//! filtering semantics themselves live in `controller` and `engine`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, centered_popup, render_filter_bar, render_grid, FilterBarComponent,
    GridComponent, HelpDialog,
};
use crate::config::Config;
use crate::controller::FilterController;
use crate::engine::{GridEngine, ItemSelector};
use crate::model::modal::{Modal, ModalStack};
use crate::services;
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::path::{Path, PathBuf};

// ═══════════════════════════════════════════════════════════════════════════════
// Error Message Helpers
// ═══════════════════════════════════════════════════════════════════════════════

/// Generate a user-friendly error message for a manifest that failed to load
fn gallery_load_error(path: &Path, reason: &str) -> String {
    let mut msg = format!(
        "Could not load the gallery manifest:\n  {}\n\n{}\n\n",
        path.display(),
        reason
    );

    if !path.exists() {
        msg.push_str("Create the file, or start with a different path:\n");
        msg.push_str("  gallery-tui <path/to/manifest.{json,yaml}>\n\n");
    }

    msg.push_str("A minimal manifest looks like:\n");
    msg.push_str("  {\"items\": [{\"title\": \"Dawn\", \"tags\": [\"photo\"]}]}\n\n");
    msg.push_str("Press 'r' to retry or 'q' to quit.");

    msg
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// The control set and the one-active-at-a-time marker logic
    pub controller: FilterController,

    /// Item collection, visible set, and row arrangement
    pub engine: GridEngine,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display instead of the grid
    pub error: Option<String>,

    /// Status message for the status bar
    pub status_message: Option<String>,

    /// Manifest the gallery was loaded from
    pub gallery_path: PathBuf,

    /// Title from the manifest, if it carries one
    pub gallery_title: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub filter_bar: FilterBarComponent,
    pub grid: GridComponent,
    pub help_dialog: HelpDialog,

    /// Current config (for persisting the layout mode)
    pub config: Config,
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance. `gallery_path` overrides the configured
    /// manifest location when given.
    pub fn new(gallery_path: Option<PathBuf>) -> App {
        let config = Config::load().unwrap_or_default();
        let gallery_path = gallery_path.unwrap_or_else(|| PathBuf::from(&config.gallery_path));

        let mut app = App {
            controller: FilterController::new(Vec::new()),
            engine: GridEngine::bind(Vec::new(), &ItemSelector::default(), config.layout_mode),
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            gallery_path,
            gallery_title: None,
            filter_bar: FilterBarComponent::new(),
            grid: GridComponent::new(),
            help_dialog: HelpDialog::default(),
            config,
        };

        app.load_gallery();
        app
    }

    /// Load (or reload) the manifest, rebuild the control set, bind the
    /// engine, and run the initial activation.
    fn load_gallery(&mut self) {
        let previous_token = self.controller.active_control().map(|c| c.token.clone());

        match services::load_manifest(&self.gallery_path) {
            Ok(manifest) => {
                self.error = None;
                self.gallery_title = manifest.title.clone();

                let controls = services::build_controls(&manifest);
                let mode = self.engine.mode();
                self.engine = GridEngine::bind(manifest.items, &ItemSelector::default(), mode);
                self.controller = FilterController::new(controls);

                // Restore the previously active control by token, otherwise
                // start on the first control.
                let initial = previous_token
                    .and_then(|token| {
                        self.controller
                            .controls()
                            .iter()
                            .position(|control| control.token == token)
                    })
                    .unwrap_or(0);

                self.controller.on_control_activated(initial, &mut self.engine);
                self.filter_bar
                    .set_focus(self.controller.active_index().unwrap_or(0));
                self.grid.reset_scroll();
            }
            Err(e) => {
                self.error = Some(gallery_load_error(&self.gallery_path, &format!("{e:#}")));
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        // A load failure narrows the keymap to retry-or-quit
        if self.error.is_some() {
            return self.handle_error_key_event(key);
        }

        self.filter_bar.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Dialogs own the screen; the main surface ignores the mouse while
        // one is open.
        if !self.modals.is_empty() {
            return Ok(None);
        }

        // A load failure narrows input to the retry-or-quit keys; the stale
        // controls and grid behind the error panel take no clicks or wheel.
        if self.error.is_some() {
            return Ok(None);
        }

        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .filter_bar
                .hit_test(mouse.column, mouse.row)
                .map(Action::ActivateControl),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {}
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Filter Bar
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNextControl => self.filter_bar.focus_next(self.controller.len()),
            Action::FocusPrevControl => self.filter_bar.focus_prev(self.controller.len()),
            Action::ActivateControl(index) => {
                self.controller.on_control_activated(index, &mut self.engine);
                // Focus follows a successful activation; a bad index leaves
                // everything untouched.
                if self.controller.active_index() == Some(index) {
                    self.filter_bar.set_focus(index);
                    self.grid.reset_scroll();
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Grid Scrolling (delegate to GridComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                self.grid.update(action)?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Layout Engine
            // ─────────────────────────────────────────────────────────────────
            Action::CycleLayoutMode => {
                let mode = self.engine.mode().next();
                self.engine.set_mode(mode);
                self.grid.reset_scroll();

                self.config.layout_mode = mode;
                let _ = self.config.save();

                self.status_message = Some(format!("Layout mode: {}", mode.name()));
            }

            // ─────────────────────────────────────────────────────────────────
            // Gallery Management
            // ─────────────────────────────────────────────────────────────────
            Action::ReloadGallery => {
                self.load_gallery();
                if self.error.is_none() {
                    self.status_message = Some("Gallery reloaded".to_string());
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        render_filter_bar(
            frame,
            layout.filter_bar,
            &mut self.filter_bar,
            self.controller.controls(),
        );
        render_grid(
            frame,
            layout.grid,
            &mut self.grid,
            &self.engine,
            self.error.as_deref(),
        );
        self.render_status_bar(frame, layout.status);
        self.render_help_bar(frame, layout.help);

        // Draw modal overlay if active
        if let Some(modal) = self.modals.top().cloned() {
            match modal {
                Modal::Help => self.help_dialog.draw(frame, area)?,
                Modal::QuitConfirm => self.draw_quit_confirm(frame, area),
            }
        }

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::QuitConfirm => {
                let action = match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                        Some(Action::ForceQuit)
                    }
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
                        Some(Action::CloseModal)
                    }
                    _ => None,
                };
                Ok(action)
            }
        }
    }

    /// Key events while the gallery failed to load
    fn handle_error_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('r') => Some(Action::ReloadGallery),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::ForceQuit),
            _ => None,
        };
        Ok(action)
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();

        if self.error.is_some() {
            spans.push(Span::styled(
                " gallery failed to load, 'r' retries ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        } else {
            let title = self.gallery_title.as_deref().unwrap_or("gallery");
            spans.push(Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));

            if let Some(control) = self.controller.active_control() {
                spans.push(Span::styled(
                    format!(" ● {}", control.label),
                    Style::default().fg(Color::Cyan),
                ));
            }

            spans.push(Span::styled(
                format!(
                    "  {} of {} items",
                    self.engine.visible_len(),
                    self.engine.len()
                ),
                Style::default().fg(Color::Gray),
            ));

            spans.push(Span::styled(
                format!("  [{}]", self.engine.mode().name()),
                Style::default().fg(Color::DarkGray),
            ));

            if let Some(message) = &self.status_message {
                spans.push(Span::styled(
                    format!("  {}", message),
                    Style::default().fg(Color::Yellow),
                ));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(Color::DarkGray);

        let spans = vec![
            Span::styled(" ←/→", key_style),
            Span::styled(" filter  ", text_style),
            Span::styled("Enter", key_style),
            Span::styled(" apply  ", text_style),
            Span::styled("j/k", key_style),
            Span::styled(" scroll  ", text_style),
            Span::styled("m", key_style),
            Span::styled(" layout  ", text_style),
            Span::styled("r", key_style),
            Span::styled(" reload  ", text_style),
            Span::styled("?", key_style),
            Span::styled(" help  ", text_style),
            Span::styled("q", key_style),
            Span::styled(" quit", text_style),
        ];

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Draw the quit confirmation popup
    fn draw_quit_confirm(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_popup(area, 40, 7);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Quit the gallery?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("quit  "),
                Span::styled(
                    " n/Esc ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("stay"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Quit? ")
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
    }
}
