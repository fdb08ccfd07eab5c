use architect_core::question::{Question, CATALOG};
use architect_core::AnswerStore;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

/// Picker over the catalog used to jump to any question for (re)answering.
#[derive(Debug, Clone)]
pub struct AnswerList {
    list_state: ListState,
}

impl AnswerList {
    pub fn new(selected: usize) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(selected.min(CATALOG.len() - 1)));
        Self { list_state }
    }

    /// Returns the currently highlighted question.
    pub fn selected_question(&self) -> Option<&'static Question> {
        CATALOG.get(self.list_state.selected()?)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let current = self.list_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if current + 1 < CATALOG.len() {
                    self.list_state.select(Some(current + 1));
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if current > 0 {
                    self.list_state.select(Some(current - 1));
                }
            }
            // Jump to first/last
            KeyCode::Char('g') | KeyCode::Home => self.list_state.select(Some(0)),
            KeyCode::Char('G') | KeyCode::End => {
                self.list_state.select(Some(CATALOG.len() - 1))
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, answers: &AnswerStore, area: Rect) {
        let block = Block::default()
            .title(" Collected answers ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));

        let items: Vec<ListItem> = CATALOG
            .iter()
            .map(|q| {
                let (action, answer_span) = match answers.get(q.id) {
                    Some(answer) => ("Edit", Span::raw(first_line(answer))),
                    None => (
                        "Answer",
                        Span::styled("Not answered yet.", Style::default().fg(Color::DarkGray).italic()),
                    ),
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(q.display_title(), Style::default().bold()),
                        Span::styled(format!("  [{action}]"), Style::default().fg(Color::Cyan)),
                    ]),
                    Line::from(vec![Span::raw("  "), answer_span]),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Magenta))
            .highlight_symbol("> ");

        let mut state = self.list_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn first_line(answer: &str) -> String {
    let mut lines = answer.lines();
    let first = lines.next().unwrap_or_default();
    if lines.next().is_some() {
        format!("{first} ...")
    } else {
        first.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn starts_on_requested_question() {
        let list = AnswerList::new(2);
        assert_eq!(list.selected_question().unwrap().id, "audience");
    }

    #[test]
    fn out_of_range_start_clamps_to_last() {
        let list = AnswerList::new(99);
        assert_eq!(list.selected_question().unwrap().id, "additional");
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut list = AnswerList::new(0);
        list.handle_key(key(KeyCode::Up));
        assert_eq!(list.selected_index(), Some(0));
        list.handle_key(key(KeyCode::Char('G')));
        assert_eq!(list.selected_index(), Some(CATALOG.len() - 1));
        list.handle_key(key(KeyCode::Down));
        assert_eq!(list.selected_index(), Some(CATALOG.len() - 1));
        list.handle_key(key(KeyCode::Char('k')));
        assert_eq!(list.selected_question().unwrap().id, "format");
        list.handle_key(key(KeyCode::Char('g')));
        assert_eq!(list.selected_question().unwrap().id, "objective");
    }

    #[test]
    fn multi_line_answers_are_abbreviated() {
        assert_eq!(first_line("one\ntwo"), "one ...");
        assert_eq!(first_line("single"), "single");
    }
}
