use crate::app::AppState;
use crate::ui::styles::{border_style, date_style, default_style, hint_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Long date shown in the header, e.g. "Monday, 19 October 2026"
pub fn format_header_date(date: chrono::NaiveDate) -> String {
    date.format("%A, %d %B %Y").to_string()
}

/// Render the header with today's date and topic
pub fn render_header_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let topic = if app.record.topic.is_empty() {
        Span::styled("press t to set today's topic", hint_style())
    } else {
        Span::styled(app.record.topic.as_str(), default_style())
    };

    let lines = vec![
        Line::from(vec![Span::styled("Topic: ", title_style()), topic]),
        Line::from(Span::styled(format_header_date(app.record.date), date_style()))
            .alignment(Alignment::Right),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" DSA Progress Tracker ", title_style())),
    );
    f.render_widget(paragraph, area);
}
