use architect_core::question;
use architect_core::{Role, TranscriptEntry};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Chat log pane. Question prompts carry their helper text and suggestion chips.
pub struct TranscriptView<'a> {
    pub entries: &'a [TranscriptEntry],
    /// Question whose chips are live (the one the input answers).
    pub active_question: &'a str,
    pub selected_suggestion: Option<usize>,
}

impl TranscriptView<'_> {
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for entry in self.entries {
            match entry.role {
                Role::Assistant => {
                    let meta = entry.question_id.as_deref().and_then(question::by_id);
                    if let Some(helper) = meta.and_then(|q| q.helper) {
                        lines.push(Line::from(Span::styled(
                            helper.to_string(),
                            Style::default().fg(Color::DarkGray).italic(),
                        )));
                    }
                    for text_line in entry.text.lines() {
                        lines.push(Line::from(Span::raw(text_line.to_string())));
                    }
                    if let Some(q) = meta.filter(|q| !q.suggestions.is_empty()) {
                        lines.push(self.chip_line(q));
                    }
                }
                Role::User => {
                    for text_line in entry.text.lines() {
                        lines.push(
                            Line::from(Span::styled(
                                text_line.to_string(),
                                Style::default().fg(Color::LightCyan),
                            ))
                            .alignment(Alignment::Right),
                        );
                    }
                }
            }
            lines.push(Line::from(""));
        }
        lines
    }

    fn chip_line(&self, q: &'static question::Question) -> Line<'static> {
        let live = q.id == self.active_question;
        let spans: Vec<Span> = q
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, chip)| {
                let style = if live && self.selected_suggestion == Some(i) {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else if live {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Span::styled(format!(" ({chip}) "), style)
            })
            .collect();
        Line::from(spans)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Interactive assistant ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let paragraph = Paragraph::new(self.lines()).wrap(Wrap { trim: false });
        let scroll = bottom_scroll(&paragraph, area);
        frame.render_widget(paragraph.block(block).scroll((scroll, 0)), area);
    }
}

/// Rows to skip so the last wrapped row lands at the bottom of the bordered `area`.
fn bottom_scroll(paragraph: &Paragraph<'_>, area: Rect) -> u16 {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2) as usize;
    let rows = paragraph.line_count(inner_width);
    u16::try_from(rows.saturating_sub(inner_height)).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use architect_core::Session;

    #[test]
    fn initial_transcript_shows_helper_and_chips() {
        let session = Session::new();
        let view = TranscriptView {
            entries: session.transcript().entries(),
            active_question: "objective",
            selected_suggestion: Some(1),
        };
        let text: Vec<String> = view.lines().iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.starts_with("Example:")));
        assert!(text.iter().any(|l| l.contains("(Generate content ideas)")));
    }

    #[test]
    fn questions_without_chips_have_no_chip_line() {
        let mut session = Session::new();
        session.submit("goal");
        let view = TranscriptView {
            entries: session.transcript().entries(),
            active_question: "context",
            selected_suggestion: None,
        };
        let text: Vec<String> = view.lines().iter().map(|l| l.to_string()).collect();
        let context_prompt = question::by_id("context").unwrap().prompt;
        let pos = text.iter().position(|l| l == context_prompt).unwrap();
        assert_eq!(text[pos + 1], "");
    }

    #[test]
    fn scroll_counts_wrapped_rows() {
        let long = "word ".repeat(40);
        let paragraph = Paragraph::new(vec![Line::from(long)]).wrap(Wrap { trim: false });
        // 20 columns fit four words per row, so one logical line needs ten rows.
        let scroll = bottom_scroll(&paragraph, Rect::new(0, 0, 22, 5));
        assert!(scroll >= 7, "scroll was {scroll}");
    }

    #[test]
    fn short_transcript_does_not_scroll() {
        let paragraph = Paragraph::new(vec![Line::from("hello")]).wrap(Wrap { trim: false });
        assert_eq!(bottom_scroll(&paragraph, Rect::new(0, 0, 40, 10)), 0);
    }
}
