//! Action panel: submit/reset buttons and the last submission

use crate::app::App;
use crate::state::FormButton;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the action panel on the right of the form
pub fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.is_action_panel_focused();
    let border_color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),                // Last submission
        ])
        .split(inner);

    for (idx, button) in FormButton::ALL.iter().enumerate() {
        let is_selected = app.state.selected_button == *button;
        render_button(frame, chunks[idx], button.label(), is_selected, focused);
    }

    draw_last_submission(frame, chunks[2], app);
}

fn draw_last_submission(frame: &mut Frame, area: Rect, app: &App) {
    let submissions = &app.state.submissions;
    let Some(latest) = submissions.latest() else {
        let empty = Paragraph::new("Nothing submitted yet.")
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "You submitted the following values:",
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!(
                "#{} at {}",
                submissions.len(),
                latest.submitted_at.format("%H:%M:%S")
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if let Some(json) = submissions.latest_json() {
        lines.extend(json.lines().map(|l| Line::from(l.to_string())));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}
