//! Form grid rendering

use super::field_renderer::{draw_field, FieldProps};
use crate::app::App;
use crate::ui::layout::{cell_area, field_height, pack_rows};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows the grid should skip so the active row is fully visible
pub fn first_visible_row(heights: &[u16], active_row: Option<usize>, available: u16) -> usize {
    let Some(active) = active_row else {
        return 0;
    };
    let mut first = 0;
    while first < active {
        let used: u16 = heights[first..=active].iter().sum();
        if used <= available {
            break;
        }
        first += 1;
    }
    first
}

/// Draw every renderable field in a grid
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let form_focused = !state.is_action_panel_focused();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {} ", state.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = state.focusable_fields();
    let rows = pack_rows(&fields, state.columns);
    let heights: Vec<u16> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| field_height(fields[cell.field].kind))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let active_row = rows
        .iter()
        .position(|row| row.iter().any(|cell| cell.field == state.active_form_field));
    let first = first_visible_row(&heights, active_row, inner.height);

    let mut y = inner.y;
    for (row, height) in rows.iter().zip(&heights).skip(first) {
        if y + height > inner.bottom() {
            break;
        }
        let row_area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: *height,
        };
        for cell in row {
            let field = fields[cell.field];
            let area = cell_area(row_area, state.columns, cell);
            let props = FieldProps::for_field(
                field,
                &state.form,
                cell.field == state.active_form_field,
                state.show_descriptions,
            );
            draw_field(frame, area, field, &props);
        }
        y += height;
    }
}
