use crate::application::{App, AppMode};
use crate::domain::SortCriteria;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Search => Self::handle_search_mode(app, key),
            AppMode::Category => Self::handle_category_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('f') = key {
                app.start_search();
            }
            return;
        }

        app.status_message = None;

        match key {
            KeyCode::Char('/') => app.start_search(),
            KeyCode::Char('c') => app.start_category_select(),
            KeyCode::Char('x') => app.clear_category(),
            KeyCode::Char('s') => app.cycle_sort(),
            KeyCode::Char('a') => app.set_sort(SortCriteria::PriceAscending),
            KeyCode::Char('d') => app.set_sort(SortCriteria::PriceDescending),
            KeyCode::Char('n') => app.set_sort(SortCriteria::None),
            KeyCode::Char('m') | KeyCode::Char(' ') | KeyCode::Enter => {
                app.load_more();
            }
            KeyCode::Up | KeyCode::Char('k') => app.scroll_products_up(),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_products_down(),
            KeyCode::F(1) | KeyCode::Char('?') => app.show_help(),
            _ => {}
        }
    }

    fn handle_search_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.finish_search(),
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Backspace => app.delete_search_char_before(),
            KeyCode::Delete => app.delete_search_char_at(),
            KeyCode::Left => app.move_search_cursor_left(),
            KeyCode::Right => app.move_search_cursor_right(),
            KeyCode::Home => app.move_search_cursor_home(),
            KeyCode::End => app.move_search_cursor_end(),
            // Live search as the user types
            KeyCode::Char(c) => app.insert_search_char(c),
            _ => {}
        }
    }

    fn handle_category_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => app.finish_category_select(),
            KeyCode::Up | KeyCode::Char('k') => app.move_category_highlight_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_category_highlight_down(),
            KeyCode::Char(' ') | KeyCode::Enter => app.toggle_highlighted_category(),
            KeyCode::Char('x') => app.clear_category(),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
