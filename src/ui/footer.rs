use crate::ui::app::{StatusKind, StatusLine};
use crate::ui::theme::{GLOBAL_BORDER, STATUS_ERROR, STATUS_OK, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints on the left, version on the right. A pending status
    /// message takes the place of the hints.
    pub fn widget(&self, area: Rect, hints: &str, status: Option<&StatusLine>) -> Paragraph<'static> {
        let (text, text_style) = match status {
            Some(status) => {
                let color = match status.kind {
                    StatusKind::Info => STATUS_OK,
                    StatusKind::Error => STATUS_ERROR,
                };
                (format!(" {}", status.text), Style::default().fg(color))
            }
            None => (
                format!(" {}", hints),
                Style::default().fg(TEXT).add_modifier(Modifier::DIM),
            ),
        };
        let version = format!("v{} ", VERSION);

        // Char count, not byte count, for the box-drawing separators.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(text.chars().count())
            .saturating_sub(version.chars().count());

        let dim = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
