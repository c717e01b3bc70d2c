use crate::app::AppState;
use crate::domain::Question;
use crate::ui::styles::{border_style, default_style, done_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Checkbox marker for a question
pub fn checkbox(question: &Question) -> &'static str {
    if question.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Render today's questions as a checklist
pub fn render_questions_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Today's Questions ", title_style()));

    if app.record.questions.is_empty() {
        let empty = Paragraph::new(Span::styled("No questions yet. Press a to add one.", hint_style()))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .record
        .questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let text_style = if question.completed {
                done_style()
            } else {
                default_style()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:>2}. ", i + 1)),
                Span::raw(checkbox(question)),
                Span::raw(" "),
                Span::styled(question.text.as_str(), text_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(selected_style())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox() {
        let mut question = Question::new("Two Sum");
        assert_eq!(checkbox(&question), "[ ]");
        question.completed = true;
        assert_eq!(checkbox(&question), "[x]");
    }
}
