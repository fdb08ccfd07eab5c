use architect_core::suggestion::append_suggestion;
use architect_core::{ClipboardWriter, RenderPreferences, Session, SessionView, SubmitOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use tracing::{debug, info};

use crate::components::answer_list::AnswerList;
use crate::components::preference_panel::PreferencePanel;
use crate::components::transcript_view::TranscriptView;

/// What the app is currently doing
#[derive(Debug, Clone)]
pub enum Mode {
    /// Typing into the answer box
    Chat,
    /// Picking a question to answer or edit
    AnswerList(AnswerList),
    /// Focus tags, language and review mode
    Preferences(PreferencePanel),
    /// Confirm restarting the conversation
    ConfirmReset,
    /// Key reference
    Help,
}

pub struct App {
    session: Session,
    preferences: RenderPreferences,
    clipboard: Box<dyn ClipboardWriter>,
    input: String,
    /// Highlighted suggestion chip of the current question, cycled with Tab.
    suggestion: Option<usize>,
    mode: Mode,
    status_message: Option<String>,
    preview_scroll: u16,
}

impl App {
    pub fn new(preferences: RenderPreferences, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self {
            session: Session::new(),
            preferences,
            clipboard,
            input: String::new(),
            suggestion: None,
            mode: Mode::Chat,
            status_message: None,
            preview_scroll: 0,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn preferences(&self) -> &RenderPreferences {
        &self.preferences
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn selected_suggestion(&self) -> Option<&'static str> {
        let chips = self.session.current_question().suggestions;
        self.suggestion.and_then(|i| chips.get(i).copied())
    }

    /// The prompt as it currently renders.
    pub fn prompt(&self) -> String {
        architect_prompts::render(self.session.answers(), &self.preferences)
    }

    pub fn view(&self) -> SessionView {
        self.session.view(&self.preferences, self.prompt())
    }

    /// Only Ctrl+C leaves the app. Chat treats `q` as text and every overlay
    /// uses it to close, so quitting on it would drop the session.
    pub fn wants_quit(&self, key: KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        match self.mode.clone() {
            Mode::Chat => self.handle_chat(key),
            Mode::AnswerList(list) => self.handle_answer_list(key, list),
            Mode::Preferences(panel) => self.handle_preferences(key, panel),
            Mode::ConfirmReset => self.handle_confirm_reset(key),
            Mode::Help => self.mode = Mode::Chat,
        }
    }

    fn handle_chat(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => self.input.push('\n'),
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => {
                if self.session.editing().is_some() {
                    self.session.cancel_edit();
                    self.input.clear();
                    self.status_message = Some("Edit cancelled".into());
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Tab => self.cycle_suggestion(),
            KeyCode::F(1) => self.mode = Mode::Help,
            KeyCode::PageUp => self.preview_scroll = self.preview_scroll.saturating_sub(5),
            KeyCode::PageDown => self.preview_scroll = self.preview_scroll.saturating_add(5),
            KeyCode::Char('a') if ctrl => self.apply_suggestion(),
            KeyCode::Char('e') if ctrl => {
                self.mode = Mode::AnswerList(AnswerList::new(self.session.index()));
            }
            KeyCode::Char('p') if ctrl => self.mode = Mode::Preferences(PreferencePanel::new()),
            KeyCode::Char('y') if ctrl => self.copy_prompt(),
            KeyCode::Char('r') if ctrl => self.mode = Mode::ConfirmReset,
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn submit(&mut self) {
        let outcome = self.session.submit(&self.input);
        debug!(?outcome, "submit");
        if !outcome.accepted() {
            return;
        }
        self.input.clear();
        self.suggestion = None;
        self.status_message = match outcome {
            SubmitOutcome::Edited => Some("Answer updated".into()),
            SubmitOutcome::Finished => Some("All questions answered".into()),
            SubmitOutcome::Advanced | SubmitOutcome::Ignored => None,
        };
    }

    fn cycle_suggestion(&mut self) {
        let count = self.session.current_question().suggestions.len();
        self.suggestion = match (count, self.suggestion) {
            (0, _) => None,
            (_, None) => Some(0),
            (n, Some(i)) => Some((i + 1) % n),
        };
    }

    fn apply_suggestion(&mut self) {
        if self.suggestion.is_none() {
            self.cycle_suggestion();
        }
        if let Some(chip) = self.selected_suggestion() {
            self.input = append_suggestion(&self.input, chip);
        }
    }

    fn copy_prompt(&mut self) {
        let prompt = self.prompt();
        if self.session.copy_prompt(self.clipboard.as_mut(), &prompt) {
            info!(bytes = prompt.len(), "prompt copied");
            self.status_message = Some("Prompt copied".into());
        } else {
            self.status_message = Some("Copy failed, copy the preview manually".into());
        }
    }

    fn handle_answer_list(&mut self, key: KeyEvent, mut list: AnswerList) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.mode = Mode::Chat,
            KeyCode::Enter => {
                if let Some(question) = list.selected_question() {
                    match self.session.edit(question.id) {
                        Ok(prefill) => {
                            self.input = prefill;
                            self.suggestion = None;
                        }
                        Err(e) => self.status_message = Some(format!("Error: {e}")),
                    }
                }
                self.mode = Mode::Chat;
            }
            _ => {
                list.handle_key(key);
                self.mode = Mode::AnswerList(list);
            }
        }
    }

    fn handle_preferences(&mut self, key: KeyEvent, mut panel: PreferencePanel) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.mode = Mode::Chat,
            _ => {
                panel.handle_key(key, &mut self.preferences);
                self.mode = Mode::Preferences(panel);
            }
        }
    }

    fn handle_confirm_reset(&mut self, key: KeyEvent) {
        if let KeyCode::Char('y') | KeyCode::Char('Y') = key.code {
            self.session.reset();
            self.input.clear();
            self.suggestion = None;
            self.preview_scroll = 0;
            self.status_message = Some("Conversation restarted".into());
        }
        self.mode = Mode::Chat;
    }

    //  Rendering

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(layout[1]);

        let chat = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(6)])
            .split(columns[0]);

        TranscriptView {
            entries: self.session.transcript().entries(),
            active_question: self.session.current_question().id,
            selected_suggestion: self.suggestion,
        }
        .render(frame, chat[0]);
        self.render_input(frame, chat[1]);
        self.render_preview(frame, columns[1]);
        self.render_status_bar(frame, layout[2]);

        // Overlays
        match &self.mode {
            Mode::Chat => {}
            Mode::AnswerList(list) => {
                let popup = centered_rect(60, 70, area);
                frame.render_widget(Clear, popup);
                list.render(frame, self.session.answers(), popup);
            }
            Mode::Preferences(panel) => {
                let popup = centered_rect(50, 50, area);
                frame.render_widget(Clear, popup);
                panel.render(frame, &self.preferences, popup);
            }
            Mode::ConfirmReset => self.render_confirm_reset(frame, area),
            Mode::Help => self.render_help(frame, area),
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let pending = self.session.pending_required().len();
        let progress_style = if pending == 0 {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let title = Line::from(vec![
            Span::styled(" prompt architect ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
            Span::styled(self.session.progress_message(), progress_style),
        ]);
        frame.render_widget(title, area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let label = format!(
            " {} ({}: Enter) ",
            self.session.input_label(),
            self.session.submit_label()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(label);

        let paragraph = if self.input.is_empty() {
            Paragraph::new(Span::styled(
                self.session.placeholder(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Paragraph::new(self.input.as_str())
        };
        frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(
                " Prompt preview | {} | {} ",
                self.preferences.language, self.preferences.review_mode
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        let paragraph = Paragraph::new(self.prompt())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.preview_scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref msg) = self.status_message {
            let line = Line::from(Span::styled(
                format!(" {msg}"),
                Style::default().fg(Color::Green),
            ));
            frame.render_widget(line, area);
            return;
        }

        let hints = match &self.mode {
            Mode::Chat if self.session.editing().is_some() => {
                vec![("Enter", "save"), ("Esc", "cancel edit"), ("Tab", "chips")]
            }
            Mode::Chat => vec![
                ("Enter", "send"),
                ("Tab", "chips"),
                ("^A", "add chip"),
                ("^E", "answers"),
                ("^P", "guidelines"),
                ("^Y", "copy"),
                ("^R", "restart"),
                ("F1", "help"),
                ("^C", "quit"),
            ],
            Mode::AnswerList(_) => vec![("j/k", "nav"), ("Enter", "edit"), ("Esc/q", "back")],
            Mode::Preferences(_) => vec![("j/k", "nav"), ("Enter", "toggle"), ("Esc/q", "back")],
            Mode::ConfirmReset => vec![("y", "restart"), ("any", "cancel")],
            Mode::Help => vec![("any", "close")],
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(
                        format!(" {key}"),
                        Style::default().fg(Color::Yellow).bold(),
                    ),
                    Span::raw(format!(" {desc} ")),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }

    fn render_confirm_reset(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(40, 20, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Restart ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));

        let lines = vec![
            Line::from("Discard all answers and start over?"),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y] ", Style::default().fg(Color::Red).bold()),
                Span::raw("Restart   "),
                Span::styled("[any] ", Style::default().fg(Color::DarkGray)),
                Span::raw("Keep going"),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let rows = [
            ("Enter", "send the answer (or save an edit)"),
            ("Alt+Enter", "new line in the answer"),
            ("Esc", "cancel the current edit"),
            ("Tab", "highlight the next suggestion chip"),
            ("Ctrl+A", "add the highlighted chip to the answer"),
            ("Ctrl+E", "list answers, pick one to edit"),
            ("Ctrl+P", "focus, language and review mode"),
            ("Ctrl+Y", "copy the prompt to the clipboard"),
            ("Ctrl+R", "restart the conversation"),
            ("PgUp/PgDn", "scroll the preview"),
            ("Ctrl+C", "quit"),
        ];
        let lines: Vec<Line> = rows
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>10}  "), Style::default().fg(Color::Yellow).bold()),
                    Span::raw(*desc),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
