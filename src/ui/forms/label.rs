//! Field chrome: label, required marker, error message, description

use super::field_renderer::FieldProps;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Label with a red `*` when the field is required
pub fn label_line<'a>(props: &FieldProps<'a>) -> Line<'a> {
    let mut spans = vec![Span::raw(" "), Span::raw(props.label)];
    if props.is_required {
        spans.push(Span::styled("*", Style::default().fg(Color::Red)));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

/// First error message, right-aligned
pub fn error_line<'a>(props: &FieldProps<'a>) -> Option<Line<'a>> {
    props.errors.first().map(|message| {
        Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .right_aligned()
    })
}

/// Bordered block carrying the label, error and description
pub fn field_block<'a>(props: &FieldProps<'a>) -> Block<'a> {
    let border_color = if !props.errors.is_empty() {
        Color::Red
    } else if props.is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title_top(label_line(props));

    if let Some(error) = error_line(props) {
        block = block.title_top(error);
    }

    if let Some(description) = props.description {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {description} "),
            Style::default().fg(Color::DarkGray),
        )));
    }

    block
}
