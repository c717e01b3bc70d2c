pub mod header_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod progress_pane;
pub mod questions_pane;
pub mod quote_pane;
pub mod status_line;
pub mod styles;

use crate::app::AppState;
use header_pane::render_header_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use progress_pane::render_progress_pane;
use questions_pane::render_questions_pane;
use quote_pane::render_quote_pane;
use ratatui::Frame;
use status_line::render_status_line;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_header_pane(f, app, layout.header_area);
    render_quote_pane(f, app, layout.quote_area);
    render_questions_pane(f, app, layout.questions_area);
    render_progress_pane(f, app, layout.progress_area);
    render_status_line(f, app, layout.status_area);
    render_keybindings(f, app, layout.keybindings_area);

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DayRecord;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn screen_text(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn create_test_app() -> AppState {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut record = DayRecord::fresh(date, "Keep going.");
        record.set_topic("Binary Search");
        AppState::new(record, PathBuf::from("progress.json"))
    }

    #[test]
    fn test_render_empty_day() {
        let app = create_test_app();
        let text = screen_text(&app);

        assert!(text.contains("Binary Search"));
        assert!(text.contains("Keep going."));
        assert!(text.contains("0/0 Questions Completed"));
        assert!(text.contains("No questions yet"));
    }

    #[test]
    fn test_render_checklist_and_progress() {
        let mut app = create_test_app();
        app.add_question("Two Sum");
        app.add_question("Reverse LL");
        app.set_completed(0, true);

        let text = screen_text(&app);

        assert!(text.contains("[x] Two Sum"));
        assert!(text.contains("[ ] Reverse LL"));
        assert!(text.contains("1/2 Questions Completed"));
        assert!(text.contains("50%"));
    }

    #[test]
    fn test_render_input_form() {
        let mut app = create_test_app();
        app.start_add_question();
        app.input_form_add_char('x');

        let text = screen_text(&app);
        assert!(text.contains("Add New Question"));
    }
}
