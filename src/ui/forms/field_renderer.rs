//! Field rendering: one widget per field kind

use super::label::field_block;
use crate::state::forms::{FieldDescriptor, FieldKind, FormController, SelectOption};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// What a field widget needs to draw itself
#[derive(Debug, Clone, Copy)]
pub struct FieldProps<'a> {
    pub value: &'a str,
    pub label: &'a str,
    pub placeholder: &'a str,
    pub description: Option<&'a str>,
    pub is_required: bool,
    pub errors: &'a [String],
    pub is_active: bool,
}

impl<'a> FieldProps<'a> {
    /// Props for `field` from the controller's current state
    pub fn for_field(
        field: &'a FieldDescriptor,
        form: &'a FormController,
        is_active: bool,
        show_description: bool,
    ) -> Self {
        Self {
            value: form.value(&field.name).unwrap_or_default(),
            label: &field.label,
            placeholder: &field.placeholder,
            description: field.description.as_deref().filter(|_| show_description),
            is_required: form.is_required(&field.name),
            errors: form.field_errors(&field.name),
            is_active,
        }
    }
}

/// Draw a field with the control matching its kind
///
/// Unsupported kinds draw nothing.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldDescriptor, props: &FieldProps) {
    match field.kind {
        FieldKind::Text => draw_text_input(frame, area, props),
        FieldKind::SingleSelect => draw_select(frame, area, props, &field.options),
        FieldKind::MultilineText => draw_textarea(frame, area, props),
        FieldKind::Unsupported => {}
    }
}

fn value_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}

fn placeholder_span<'a>(props: &FieldProps<'a>) -> Span<'a> {
    Span::styled(props.placeholder, Style::default().fg(Color::DarkGray))
}

fn cursor_span(is_active: bool) -> Span<'static> {
    let cursor = if is_active { CURSOR } else { "" };
    Span::styled(cursor, Style::default().fg(Color::Cyan))
}

/// Single-line text input
pub fn draw_text_input(frame: &mut Frame, area: Rect, props: &FieldProps) {
    let line = if props.value.is_empty() {
        Line::from(vec![cursor_span(props.is_active), placeholder_span(props)])
    } else {
        Line::from(vec![
            Span::styled(props.value, value_style(props.is_active)),
            cursor_span(props.is_active),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(field_block(props)), area);
}

/// Multiline text input
pub fn draw_textarea(frame: &mut Frame, area: Rect, props: &FieldProps) {
    let lines: Vec<Line> = if props.value.is_empty() {
        vec![Line::from(vec![
            cursor_span(props.is_active),
            placeholder_span(props),
        ])]
    } else {
        let style = value_style(props.is_active);
        // split('\n') keeps a trailing empty line so the cursor lands after a newline
        let mut lines: Vec<Line> = props
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span(props.is_active));
        }
        lines
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(field_block(props)),
        area,
    );
}

/// Single-select; the chosen option's label, or the placeholder
pub fn draw_select(frame: &mut Frame, area: Rect, props: &FieldProps, options: &[SelectOption]) {
    let chosen = options.iter().find(|o| o.value == props.value);

    let mut spans = Vec::new();
    if props.is_active {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }
    match chosen {
        Some(option) => spans.push(Span::styled(
            option.label.as_str(),
            value_style(props.is_active),
        )),
        None => spans.push(placeholder_span(props)),
    }
    if props.is_active {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
        if let Some(position) = chosen.and_then(|c| options.iter().position(|o| o == c)) {
            spans.push(Span::styled(
                format!("  {}/{}", position + 1, options.len()),
                Style::default().fg(Color::DarkGray),
            ));
        }
    } else {
        spans.push(Span::styled(" ▾", Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(field_block(props)), area);
}
