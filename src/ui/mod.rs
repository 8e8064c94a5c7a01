//! UI module for rendering the TUI

pub mod components;
pub mod forms;
pub mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, content_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // Form on the left, actions on the right
    let (form_area, panel_area) = layout::split_form_and_panel(content_area);
    forms::draw_form(frame, form_area, app);
    forms::draw_action_panel(frame, panel_area, app);

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Buffer contents as one string per row
    pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width.max(1))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::buffer_lines;
    use super::*;
    use crate::state::forms::FormDefinition;
    use crate::state::AppState;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn sample_app() -> App {
        App::new(AppState::from_definition(&FormDefinition::sample()).unwrap())
    }

    #[test]
    fn test_draws_title_fields_and_buttons() {
        let screen = render(&sample_app()).join("\n");
        assert!(screen.contains("Dynamic Form Builder"));
        assert!(screen.contains("Username*"));
        assert!(screen.contains("Category*"));
        assert!(screen.contains("Description*"));
        assert!(screen.contains("Submit"));
        assert!(screen.contains("Reset"));
        assert!(screen.contains("Nothing submitted yet."));
    }

    #[test]
    fn test_draws_errors_after_rejected_submit() {
        let mut app = sample_app();
        app.state.submit_form();
        let screen = render(&app).join("\n");
        assert!(screen.contains("Please select a category."));
        assert!(screen.contains("need attention"));
    }

    #[test]
    fn test_draws_last_submission() {
        let mut app = sample_app();
        for c in "ab".chars() {
            app.state.form_input_char(c);
        }
        app.state.focus_field("category");
        app.state.cycle_option(true);
        app.state.focus_field("description");
        app.state.form_input_char('x');
        assert!(app.state.submit_form().is_accepted());

        let screen = render(&app).join("\n");
        assert!(screen.contains("You submitted the following values:"));
        assert!(screen.contains("\"category\": \"tech\""));
    }

    #[test]
    fn test_status_bar_on_last_row() {
        let lines = render(&sample_app());
        assert!(lines[29].contains("quit"));
    }
}
