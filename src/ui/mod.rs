pub mod layout;
mod menu;
mod quiz;
mod settings;
mod summary;
mod table;
pub mod theme;

use crate::app::{App, Screen};
use ratatui::Frame;

pub use layout::{calculate_quiz_chunks, calculate_screen_chunks, calculate_table_chunks};
pub use menu::{draw_modes, draw_quiz_menu, draw_welcome};
pub use quiz::{draw_practice, draw_quit_confirmation, draw_test};
pub use settings::draw_test_settings;
pub use summary::draw_test_result;
pub use table::draw_periodic_table;

/// Render whichever screen the app is on.
pub fn draw(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Welcome => draw_welcome(f, app),
        Screen::Modes => draw_modes(f, app),
        Screen::PeriodicTable => draw_periodic_table(f, app),
        Screen::QuizMenu => draw_quiz_menu(f, app),
        Screen::Quiz => match &app.practice {
            Some(round) => draw_practice(f, app, round),
            None => draw_quiz_menu(f, app),
        },
        Screen::TestSettings => draw_test_settings(f, app),
        Screen::TestRun => {
            if let Some(test) = &app.test {
                draw_test(f, app, test);
            }
        }
        Screen::TestQuitConfirm => draw_quit_confirmation(f, app),
        Screen::TestResult => {
            if let Some(result) = &app.last_result {
                draw_test_result(f, app, result);
            }
        }
    }
}
