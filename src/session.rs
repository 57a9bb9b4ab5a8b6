use crate::app::{App, Mode, Screen, SettingsField};
use crate::config::QUESTION_COUNT_CHOICES;
use crate::models::QuizCategory;
use crate::table::{GRID_COLS, GRID_ROWS, GridPos, element_at, nearest_in_row, position_of};
use crate::utils::byte_index;
use crossterm::event::{KeyCode, KeyEvent};

fn move_selection(index: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if down {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

pub fn handle_welcome_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.navigate(Screen::Modes),
        KeyCode::Char('l') => app.toggle_language(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

pub fn handle_modes_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.menu_index = move_selection(app.menu_index, Mode::ALL.len(), false),
        KeyCode::Down => app.menu_index = move_selection(app.menu_index, Mode::ALL.len(), true),
        KeyCode::Enter => {
            if let Some(mode) = Mode::ALL.get(app.menu_index) {
                app.open_mode(*mode);
            }
        }
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            app.open_mode(Mode::ALL[index]);
        }
        KeyCode::Char('l') => app.toggle_language(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Esc => app.go_back(),
        _ => {}
    }
}

/// Step along the row until a cell with an element is found.
fn scan_row(pos: GridPos, forward: bool) -> Option<GridPos> {
    let mut col = pos.col;
    loop {
        col = if forward {
            if col >= GRID_COLS {
                return None;
            }
            col + 1
        } else {
            if col <= 1 {
                return None;
            }
            col - 1
        };
        let candidate = GridPos::new(pos.row, col);
        if element_at(candidate).is_some() {
            return Some(candidate);
        }
    }
}

/// Nearest element on the next non-empty row above or below.
fn scan_rows(pos: GridPos, down: bool) -> Option<GridPos> {
    let mut row = pos.row;
    loop {
        row = if down {
            if row >= GRID_ROWS {
                return None;
            }
            row + 1
        } else {
            if row <= 1 {
                return None;
            }
            row - 1
        };
        if let Some(element) = nearest_in_row(row, pos.col) {
            return Some(position_of(element));
        }
    }
}

pub fn handle_table_input(app: &mut App, key: KeyEvent) {
    if app.table.detail_open {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.table.detail_open = false;
        }
        return;
    }

    let pos = app.table.pos;
    let moved = match key.code {
        KeyCode::Left => scan_row(pos, false),
        KeyCode::Right => scan_row(pos, true),
        KeyCode::Up => scan_rows(pos, false),
        KeyCode::Down => scan_rows(pos, true),
        KeyCode::Enter => {
            app.table.detail_open = element_at(pos).is_some();
            None
        }
        KeyCode::Esc => {
            app.go_back();
            None
        }
        _ => None,
    };
    if let Some(new_pos) = moved {
        app.table.pos = new_pos;
    }
}

pub fn handle_quiz_menu_input(app: &mut App, key: KeyEvent) {
    let len = QuizCategory::ALL_CATEGORIES.len();
    match key.code {
        KeyCode::Up => app.menu_index = move_selection(app.menu_index, len, false),
        KeyCode::Down => app.menu_index = move_selection(app.menu_index, len, true),
        KeyCode::Enter => {
            if let Some(category) = QuizCategory::ALL_CATEGORIES.get(app.menu_index) {
                app.start_practice(*category);
            }
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.start_practice(QuizCategory::ALL_CATEGORIES[index]);
        }
        KeyCode::Esc => app.go_back(),
        _ => {}
    }
}

pub fn handle_practice_input(app: &mut App, key: KeyEvent) {
    let Some(round) = app.practice.as_mut() else {
        app.go_back();
        return;
    };
    match key.code {
        KeyCode::Char(c @ '1'..='4') => {
            round.select(c as usize - '1' as usize);
        }
        KeyCode::Enter | KeyCode::Char('n') => {
            round.next_question(&mut app.generator);
        }
        KeyCode::Esc => app.go_back(),
        _ => {}
    }
}

pub fn handle_test_settings_input(app: &mut App, key: KeyEvent) {
    let form = &mut app.test_form;
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
            form.focused = match form.focused {
                SettingsField::Category => SettingsField::Count,
                SettingsField::Count => SettingsField::Category,
            };
        }
        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            match form.focused {
                SettingsField::Category => {
                    form.category_index = move_selection(
                        form.category_index,
                        QuizCategory::ALL_CATEGORIES.len(),
                        forward,
                    );
                }
                SettingsField::Count => {
                    form.count_index =
                        move_selection(form.count_index, QUESTION_COUNT_CHOICES.len(), forward);
                }
            }
        }
        KeyCode::Enter => app.start_test(),
        KeyCode::Esc => app.go_back(),
        _ => {}
    }
}

pub fn handle_test_input(app: &mut App, key: KeyEvent) {
    let char_count = app.input_buffer.chars().count();
    match key.code {
        KeyCode::Esc => app.go_back(),
        KeyCode::Enter => app.submit_test_answer(),
        KeyCode::Left => {
            app.cursor_position = app.cursor_position.saturating_sub(1);
        }
        KeyCode::Right => {
            if app.cursor_position < char_count {
                app.cursor_position += 1;
            }
        }
        KeyCode::Home => app.cursor_position = 0,
        KeyCode::End => app.cursor_position = char_count,
        KeyCode::Backspace => {
            if app.cursor_position > 0 {
                let at = byte_index(&app.input_buffer, app.cursor_position - 1);
                app.input_buffer.remove(at);
                app.cursor_position -= 1;
            }
        }
        KeyCode::Delete => {
            if app.cursor_position < char_count {
                let at = byte_index(&app.input_buffer, app.cursor_position);
                app.input_buffer.remove(at);
            }
        }
        KeyCode::Char(c) => {
            let at = byte_index(&app.input_buffer, app.cursor_position);
            app.input_buffer.insert(at, c);
            app.cursor_position += 1;
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.abandon_test(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.go_back(),
        _ => {}
    }
}

pub fn handle_result_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('m') | KeyCode::Esc => app.navigate(Screen::Modes),
        KeyCode::Char('r') => app.start_test(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_selection_wraps() {
        assert_eq!(move_selection(0, 3, false), 2);
        assert_eq!(move_selection(2, 3, true), 0);
        assert_eq!(move_selection(1, 3, true), 2);
        assert_eq!(move_selection(0, 0, true), 0);
    }

    #[test]
    fn test_scan_row_skips_gap() {
        // Be -> B jumps across the empty d-block columns of period 2.
        assert_eq!(scan_row(GridPos::new(2, 2), true), Some(GridPos::new(2, 13)));
        assert_eq!(scan_row(GridPos::new(2, 13), false), Some(GridPos::new(2, 2)));
        assert_eq!(scan_row(GridPos::new(1, 18), true), None);
        assert_eq!(scan_row(GridPos::new(1, 1), false), None);
    }

    #[test]
    fn test_scan_rows_skips_spacer() {
        // Ra (7,2) down skips row 8 and lands on La.
        assert_eq!(scan_rows(GridPos::new(7, 2), true), Some(GridPos::new(9, 3)));
        assert_eq!(scan_rows(GridPos::new(9, 17), false), Some(GridPos::new(7, 17)));
        assert_eq!(scan_rows(GridPos::new(1, 1), false), None);
        assert_eq!(scan_rows(GridPos::new(10, 3), true), None);
    }
}
