use architect_core::preferences::FOCUS_OPTIONS;
use architect_core::RenderPreferences;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceRow {
    Focus(&'static str),
    Language,
    ReviewMode,
}

fn rows() -> Vec<PreferenceRow> {
    FOCUS_OPTIONS
        .iter()
        .copied()
        .map(PreferenceRow::Focus)
        .chain([PreferenceRow::Language, PreferenceRow::ReviewMode])
        .collect()
}

/// Guideline panel: focus tags, output language and review mode.
#[derive(Debug, Clone)]
pub struct PreferencePanel {
    list_state: ListState,
}

impl Default for PreferencePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferencePanel {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    pub fn selected_row(&self) -> Option<PreferenceRow> {
        rows().get(self.list_state.selected()?).copied()
    }

    /// Navigate, or apply the selected row to `prefs` on Enter/Space.
    pub fn handle_key(&mut self, key: KeyEvent, prefs: &mut RenderPreferences) {
        let current = self.list_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if current + 1 < rows().len() {
                    self.list_state.select(Some(current + 1));
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if current > 0 {
                    self.list_state.select(Some(current - 1));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected_row() {
                Some(PreferenceRow::Focus(tag)) => {
                    prefs.toggle_focus(tag);
                }
                Some(PreferenceRow::Language) => prefs.cycle_language(),
                Some(PreferenceRow::ReviewMode) => prefs.cycle_review_mode(),
                None => {}
            },
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, prefs: &RenderPreferences, area: Rect) {
        let block = Block::default()
            .title(" Guidelines ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        let items: Vec<ListItem> = rows()
            .into_iter()
            .map(|row| match row {
                PreferenceRow::Focus(tag) => {
                    let (mark, style) = if prefs.is_focused(tag) {
                        ("[x] ", Style::default().fg(Color::Cyan))
                    } else {
                        ("[ ] ", Style::default())
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(mark, style),
                        Span::styled(tag, style),
                    ]))
                }
                PreferenceRow::Language => ListItem::new(Line::from(vec![
                    Span::styled("Final language: ", Style::default().bold()),
                    Span::styled(prefs.language.clone(), Style::default().fg(Color::Yellow)),
                ])),
                PreferenceRow::ReviewMode => ListItem::new(vec![
                    Line::from(vec![
                        Span::styled("Answer review: ", Style::default().bold()),
                        Span::styled(
                            prefs.review_mode.display_name(),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", prefs.review_mode.description()),
                        Style::default().fg(Color::DarkGray),
                    )),
                ]),
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Blue))
            .highlight_symbol("> ");

        let mut state = self.list_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }
}
