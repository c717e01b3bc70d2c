use crate::app::AppState;
use crate::ui::styles::{border_style, quote_style, title_style};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the quote of the day
pub fn render_quote_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let paragraph = Paragraph::new(Span::styled(app.record.quote.as_str(), quote_style()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Quote of the Day ", title_style())),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
