use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, gauge_style, title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Render the progress gauge, the count line and the tier message
pub fn render_progress_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let progress = app.progress();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Your Progress ", title_style()));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacing
            Constraint::Min(2),    // Count and message
        ])
        .split(block.inner(area));

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(progress.ratio)
        .label(format!("{}%", progress.percent()));

    let lines = vec![
        Line::from(Span::styled(progress.count_label(), default_style())),
        Line::raw(""),
        Line::from(Span::styled(app.status_message(), title_style())),
    ];

    f.render_widget(block, area);
    f.render_widget(gauge, chunks[1]);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[3],
    );
}
