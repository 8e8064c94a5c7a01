//! Layout components (header, form grid, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::forms::{FieldDescriptor, FieldKind, FormPhase};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the action panel on the right
pub const ACTION_PANEL_WIDTH: u16 = 40;

/// Create the main layout: header, content, status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split content into form (left) and action panel (right)
pub fn split_form_and_panel(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),                    // Form area
            Constraint::Length(ACTION_PANEL_WIDTH), // Action panel
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// A field's place in the form grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Index into the slice passed to [`pack_rows`]
    pub field: usize,
    pub column: u16,
    pub span: u16,
}

/// Flow fields into rows of `columns` grid units
///
/// A field starts a new row when it doesn't fit in the current one, or when
/// its `row` or `group` hint differs from the row's first field.
pub fn pack_rows(fields: &[&FieldDescriptor], columns: u16) -> Vec<Vec<GridCell>> {
    let columns = columns.max(1);
    let mut rows: Vec<Vec<GridCell>> = Vec::new();
    let mut current: Vec<GridCell> = Vec::new();
    let mut used = 0u16;
    let mut row_key = None;

    for (index, field) in fields.iter().enumerate() {
        let span = field.layout.span().min(columns);
        let key = (field.layout.row, field.layout.group.as_deref());

        if !current.is_empty()
            && (used.saturating_add(span) > columns || row_key != Some(key))
        {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        if current.is_empty() {
            row_key = Some(key);
        }

        current.push(GridCell {
            field: index,
            column: used,
            span,
        });
        used += span;
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Rows a field's control needs
pub fn field_height(kind: FieldKind) -> u16 {
    match kind {
        FieldKind::Text | FieldKind::SingleSelect => 3,
        FieldKind::MultilineText => 6,
        FieldKind::Unsupported => 0,
    }
}

/// Area of a grid cell within a row
pub fn cell_area(row_area: Rect, columns: u16, cell: &GridCell) -> Rect {
    let columns = columns.max(1);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
        .split(row_area);

    let first = cols[cell.column as usize];
    let last_index = cell
        .column
        .saturating_add(cell.span.max(1) - 1)
        .min(columns - 1);
    let last = cols[last_index as usize];
    Rect {
        x: first.x,
        y: row_area.y,
        width: last.right().saturating_sub(first.x),
        height: row_area.height,
    }
}

/// Draw the title line
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.state.title, Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(header, area);
}

fn phase_indicator(phase: FormPhase) -> Span<'static> {
    let color = match phase {
        FormPhase::Pristine => Color::Gray,
        FormPhase::Editing | FormPhase::Submitting => Color::Yellow,
        FormPhase::Accepted => Color::Green,
        FormPhase::Rejected => Color::Red,
    };
    Span::styled(" ● ", Style::default().fg(color))
}

/// Get keyboard hints for the focused element
fn get_focus_hints(app: &App) -> String {
    if app.state.is_action_panel_focused() {
        return format!("↑/↓:button  Enter:press  {COPY_SHORTCUT}:copy  Tab:next");
    }
    match app.state.active_field().map(|f| f.kind) {
        Some(FieldKind::SingleSelect) => format!(
            "←/→:choose  Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset"
        ),
        Some(FieldKind::MultilineText) => format!(
            "Enter:newline  Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset"
        ),
        _ => format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset"),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![phase_indicator(app.state.form.phase())];

    spans.push(Span::styled(
        get_focus_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        let color = match app.state.form.phase() {
            FormPhase::Rejected => Color::Red,
            FormPhase::Accepted => Color::Green,
            _ => Color::White,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C/Esc:quit ";
    let hint_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.right().saturating_sub(hint_width),
        y: area.y,
        width: hint_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
