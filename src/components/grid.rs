//! Grid component
//!
//! Renders the engine's visible items as bordered cells, row by row, and
//! owns the scroll position. Cell geometry comes from ratatui's layout
//! solver; which item lands in which row is decided by the engine.

use crate::action::Action;
use crate::component::Component;
use crate::engine::GridEngine;
use crate::model::GalleryEntry;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Narrowest cell worth drawing; the column count follows from this.
const MIN_CELL_WIDTH: u16 = 24;
/// Fixed cell height: border rows plus title, caption, date, and tags.
const CELL_HEIGHT: u16 = 6;
/// Rows jumped by PageUp/PageDown.
const PAGE_ROWS: usize = 3;

/// The item grid below the filter bar
#[derive(Default)]
pub struct GridComponent {
    /// Topmost visible grid row. Clamped against the row count at draw time.
    pub scroll_row: usize,
}

impl GridComponent {
    pub fn new() -> Self {
        Self { scroll_row: 0 }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_row = self.scroll_row.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_row = self.scroll_row.saturating_add(1);
    }

    pub fn page_up(&mut self) {
        self.scroll_row = self.scroll_row.saturating_sub(PAGE_ROWS);
    }

    pub fn page_down(&mut self) {
        self.scroll_row = self.scroll_row.saturating_add(PAGE_ROWS);
    }

    /// Back to the top, for when the visible set just changed.
    pub fn reset_scroll(&mut self) {
        self.scroll_row = 0;
    }

    /// Clamp against the arrangement: `row_count` grid rows total, `rows_fit`
    /// of them on screen at once. Scrolling past the end lands on the last
    /// page.
    pub fn clamp_scroll(&mut self, row_count: usize, rows_fit: usize) {
        let max_scroll = row_count.saturating_sub(rows_fit);
        if self.scroll_row > max_scroll {
            self.scroll_row = max_scroll;
        }
    }
}

impl Component for GridComponent {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollUp => self.scroll_up(),
            Action::ScrollDown => self.scroll_down(),
            Action::PageUp => self.page_up(),
            Action::PageDown => self.page_down(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Rendering needs the engine, so it happens in render_grid
        Ok(())
    }
}

/// How many cells fit side by side in `width` columns of screen.
fn columns_for(width: u16) -> usize {
    (width / MIN_CELL_WIDTH).max(1) as usize
}

/// Render the grid and clamp the scroll position against the arrangement.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    grid: &mut GridComponent,
    engine: &GridEngine,
    error: Option<&str>,
) {
    let title = format!(" Gallery ({} of {}) ", engine.visible_len(), engine.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if let Some(message) = error {
        render_error(frame, inner, message);
        return;
    }

    if engine.is_empty() {
        render_notice(frame, inner, "The gallery has no items.", Color::DarkGray);
        return;
    }

    if engine.visible_len() == 0 {
        render_notice(
            frame,
            inner,
            "No items match this filter.\n\nActivate another control to see items again.",
            Color::Yellow,
        );
        return;
    }

    let columns = columns_for(inner.width);
    let lanes = engine.lanes(columns);
    let rows = engine.rows(columns);
    let total_rows = engine.row_count(columns);
    let rows_fit = ((inner.height / CELL_HEIGHT).max(1)) as usize;
    grid.clamp_scroll(total_rows, rows_fit);

    let constraints: Vec<Constraint> = (0..lanes)
        .map(|_| Constraint::Ratio(1, lanes as u32))
        .collect();

    for (i, row) in rows.iter().skip(grid.scroll_row).take(rows_fit).enumerate() {
        let y = inner.y + (i as u16) * CELL_HEIGHT;
        let height = CELL_HEIGHT.min(inner.bottom().saturating_sub(y));
        if height < 3 {
            break;
        }

        let row_area = Rect::new(inner.x, y, inner.width, height);
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints.clone())
            .split(row_area);

        // A short final row still uses the leading cells so columns line up.
        for (cell_area, entry) in cells.iter().zip(row.iter()) {
            render_cell(frame, *cell_area, entry);
        }
    }

    if total_rows > rows_fit {
        let mut scrollbar_state =
            ScrollbarState::new(total_rows.saturating_sub(rows_fit)).position(grid.scroll_row);

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓")),
            area.inner(ratatui::layout::Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn render_cell(frame: &mut Frame, area: Rect, entry: &GalleryEntry) {
    let title_width = area.width.saturating_sub(4) as usize;
    let title = format!(" {} ", truncate_to_width(&entry.title, title_width));

    let mut lines: Vec<Line> = Vec::new();
    if let Some(caption) = &entry.caption {
        lines.push(Line::from(Span::styled(
            caption.clone(),
            Style::default().fg(Color::Gray),
        )));
    }
    if let Some(date) = entry.date {
        lines.push(Line::from(Span::styled(
            date.format("%Y-%m-%d").to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if !entry.tags.is_empty() {
        lines.push(Line::from(Span::styled(
            entry.tags.join(" "),
            Style::default().fg(Color::Cyan),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Multi-line load failure, left-aligned so paths and hints stay readable.
fn render_error(frame: &mut Frame, inner: Rect, message: &str) {
    let lines: Vec<Line> = message
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Red))))
        .collect();

    let padded = inner.inner(ratatui::layout::Margin {
        vertical: 1,
        horizontal: 2,
    });

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), padded);
}

fn render_notice(frame: &mut Frame, inner: Rect, message: &str, color: Color) {
    let lines: Vec<Line> = message
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(color))))
        .collect();

    let vertical_pad = inner.height.saturating_sub(lines.len() as u16) / 2;
    let notice_area = Rect::new(
        inner.x,
        inner.y + vertical_pad,
        inner.width,
        inner.height.saturating_sub(vertical_pad),
    );

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        notice_area,
    );
}

/// Truncate to a display width, ending with an ellipsis when cut short.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
