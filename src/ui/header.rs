use crate::query::Column;
use crate::table::RecordTable;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, table: &RecordTable) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let separator_style = Style::default().fg(MUTED_TEXT);

        let total = table.store().len();
        let shown = table.view().len();

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Records",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} total", total), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} per page", table.page_size()), text_style),
        ];

        let criteria = table.query().criteria();
        if criteria.is_filtered() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(format!("{} shown", shown), text_style));
        }
        for column in Column::ALL {
            if let Some(text) = criteria.filter(column) {
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(
                    format!("{} ~ \"{}\"", column, text),
                    Style::default().fg(ACCENT),
                ));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
