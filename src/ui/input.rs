use crate::ui::app::App;
use crate::session::EditorState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.filter_prompt().is_some() {
        handle_prompt_key(app, key);
        return;
    }

    match app.table().editor() {
        EditorState::Closed => handle_grid_key(app, key),
        EditorState::ConfirmDelete { .. } => handle_confirm_key(app, key),
        EditorState::AddOpen { .. } | EditorState::EditOpen { .. } => handle_form_key(app, key),
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('a') => app.open_add(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Left | KeyCode::PageUp => app.previous_page(),
        KeyCode::Right | KeyCode::PageDown => app.next_page(),
        KeyCode::Tab => app.focus_next_column(),
        KeyCode::Char('s') => {
            app.cycle_sort();
        }
        KeyCode::Char('/') | KeyCode::Char('f') => app.open_filter_prompt(),
        KeyCode::Char('c') => app.clear_filter(),
        KeyCode::Char('r') => app.reset_query(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_dialog(),
        KeyCode::Enter => app.submit(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.form_focus_next(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.form_input(ch),
        _ => {}
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_dialog(),
        _ => {}
    }
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_filter(),
        KeyCode::Enter => app.confirm_filter(),
        KeyCode::Backspace => app.prompt_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.prompt_input(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
