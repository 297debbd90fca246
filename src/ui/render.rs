use crate::form::FormField;
use crate::query::{Column, SortDirection};
use crate::ui::app::{App, FilterPrompt};
use crate::session::EditorState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, TEXT,
};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 46;

const GRID_HINTS: &str =
    "a Add │ e Edit │ d Delete │ Tab Column │ s Sort │ / Filter │ c Clear │ r Reset │ ←/→ Page │ q Quit";
const FORM_HINTS: &str = "Enter Save │ Tab Next field │ Esc Cancel";
const CONFIRM_HINTS: &str = "y Delete │ n Keep";
const PROMPT_HINTS: &str = "Enter Apply (empty clears) │ Esc Cancel";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app.table()), header);
    render_grid(frame, body, app);
    frame.render_widget(
        Footer::new().widget(footer, hints_for(app), app.status()),
        footer,
    );

    let editor = app.table().editor();
    match editor {
        EditorState::Closed => {}
        EditorState::ConfirmDelete { key, name } => {
            render_confirm_dialog(frame, editor.title(), name, &key.short())
        }
        EditorState::AddOpen { .. } | EditorState::EditOpen { .. } => {
            render_form_dialog(frame, editor)
        }
    }

    if let Some(prompt) = app.filter_prompt() {
        render_filter_prompt(frame, prompt);
    }
}

fn hints_for(app: &App) -> &'static str {
    if app.filter_prompt().is_some() {
        return PROMPT_HINTS;
    }
    match app.table().editor() {
        EditorState::Closed => GRID_HINTS,
        EditorState::ConfirmDelete { .. } => CONFIRM_HINTS,
        EditorState::AddOpen { .. } | EditorState::EditOpen { .. } => FORM_HINTS,
    }
}

fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let page = app.current_page();
    let criteria = app.table().query().criteria();

    let header_cells: Vec<Cell> = Column::ALL
        .iter()
        .map(|&column| {
            let mut title = column.title().to_string();
            match criteria.direction_for(column) {
                SortDirection::Ascending => title.push_str(" ▲"),
                SortDirection::Descending => title.push_str(" ▼"),
                SortDirection::None => {}
            }
            if criteria.filter(column).is_some() {
                title.push_str(" *");
            }
            let color = if column == app.column() { ACCENT } else { TEXT };
            Cell::from(title).style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        })
        .collect();

    let rows: Vec<Row> = if page.items.is_empty() {
        vec![Row::new(vec![Cell::from("No records")]).style(Style::default().fg(MUTED_TEXT))]
    } else {
        page.items
            .iter()
            .map(|record| {
                Row::new(vec![
                    Cell::from(record.name().to_string()),
                    Cell::from(record.age().to_string()),
                ])
                .style(Style::default().fg(TEXT))
            })
            .collect()
    };

    let title = format!(" Page {}/{} ", page.index + 1, page.count);
    let table = Table::new(rows, [Constraint::Min(12), Constraint::Length(6)])
        .header(Row::new(header_cells).bottom_margin(1))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title(title),
        )
        .row_highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if !page.items.is_empty() {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_form_dialog(frame: &mut Frame, editor: &EditorState) {
    let Some(form) = editor.form() else {
        return;
    };
    let focus = editor.focus();

    let mut lines = vec![Line::from("")];
    for field in FormField::ALL {
        let focused = focus == Some(field);
        let marker = if focused { "▸ " } else { "  " };
        let cursor = if focused { "_" } else { "" };
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {}{:<6}", marker, field.label()), label_style),
            Span::styled(
                format!("{}{}", form.field(field), cursor),
                Style::default().fg(TEXT),
            ),
        ]));

        let failure = editor
            .error()
            .and_then(|error| error.errors.iter().find(|e| e.field == field));
        if let Some(failure) = failure {
            lines.push(Line::from(Span::styled(
                format!("          {}", failure),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }

    render_dialog(frame, editor.title(), lines);
}

fn render_confirm_dialog(frame: &mut Frame, title: &str, name: &str, short_key: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  Delete \"{}\"?", name), Style::default().fg(TEXT)),
            Span::styled(format!("  ({})", short_key), Style::default().fg(MUTED_TEXT)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                " y  Yes ",
                Style::default()
                    .fg(TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(" n  No ", Style::default().fg(TEXT)),
        ]),
    ];

    render_dialog(frame, title, lines);
}

fn render_filter_prompt(frame: &mut Frame, prompt: &FilterPrompt) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  > ", Style::default().fg(ACCENT)),
            Span::styled(format!("{}_", prompt.text), Style::default().fg(TEXT)),
        ]),
    ];

    render_dialog(frame, &format!("Filter by {}", prompt.column), lines);
}

/// Bordered popup sized to its content, drawn over whatever is below.
fn render_dialog(frame: &mut Frame, title: &str, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16 + 3;
    let area = centered_rect_by_size(DIALOG_WIDTH, height, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RecordTable;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with_record() -> App {
        let mut app = App::new(RecordTable::default());
        app.open_add();
        for ch in "Ann".chars() {
            app.form_input(ch);
        }
        app.form_focus_next();
        app.form_input('4');
        app.form_input('2');
        app.submit();
        app
    }

    #[test]
    fn empty_grid_shows_placeholder() {
        let app = App::new(RecordTable::default());
        let text = screen_text(&app);
        assert!(text.contains("No records"));
        assert!(text.contains("Page 1/1"));
    }

    #[test]
    fn grid_lists_records() {
        let app = app_with_record();
        let text = screen_text(&app);
        assert!(text.contains("Ann"));
        assert!(text.contains("42"));
        assert!(text.contains("1 total"));
        assert!(text.contains("5 per page"));
        assert!(!text.contains("shown"));
    }

    #[test]
    fn form_dialog_shows_field_errors() {
        let mut app = App::new(RecordTable::default());
        app.open_add();
        app.submit();
        let text = screen_text(&app);
        assert!(text.contains("New record"));
        assert!(text.contains("Name is required"));
        assert!(text.contains("Age is required"));
    }

    #[test]
    fn sort_indicator_in_header() {
        let mut app = app_with_record();
        app.cycle_sort();
        let text = screen_text(&app);
        assert!(text.contains("Name ▲"));
    }

    #[test]
    fn confirm_dialog_names_record() {
        let mut app = app_with_record();
        app.delete_selected();
        let text = screen_text(&app);
        assert!(text.contains("Delete \"Ann\"?"));
    }

    #[test]
    fn filter_prompt_is_drawn() {
        let mut app = app_with_record();
        app.open_filter_prompt();
        app.prompt_input('a');
        let text = screen_text(&app);
        assert!(text.contains("Filter by Name"));
        assert!(text.contains("> a_"));
    }
}
