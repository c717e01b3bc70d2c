use crate::app::AppState;
use crate::ui::styles::{error_style, hint_style};
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

/// Render the persistence status (last save, or the last failure)
pub fn render_status_line(f: &mut Frame, app: &AppState, area: Rect) {
    let style = if app.persist_status.is_error() {
        error_style()
    } else {
        hint_style()
    };

    let text = format!(" {}  {}", app.persist_status.label(), app.data_file.display());
    f.render_widget(Paragraph::new(Span::styled(text, style)), area);
}
