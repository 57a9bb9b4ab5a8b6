//! Screen router for the terminal shell.

use crate::config::{QUESTION_COUNT_CHOICES, Settings};
use crate::logger;
use crate::models::{Language, QuizCategory, TestResult, Theme};
use crate::practice::PracticeRound;
use crate::quiz::QuestionGenerator;
use crate::session;
use crate::table::GridPos;
use crate::test_session::{SubmitOutcome, TestSession};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Modes,
    PeriodicTable,
    QuizMenu,
    Quiz,
    TestSettings,
    TestRun,
    TestQuitConfirm,
    TestResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    PeriodicTable,
    Practice,
    Test,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::PeriodicTable, Mode::Practice, Mode::Test];

    pub fn label(self, language: Language) -> &'static str {
        match self {
            Mode::PeriodicTable => language.pick("Tablica Mendelejewa", "Periodic Table"),
            Mode::Practice => language.pick("Quiz (Trening)", "Quiz (Practice)"),
            Mode::Test => language.pick("Test Wiedzy", "Knowledge Test"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCursor {
    pub pos: GridPos,
    pub detail_open: bool,
}

impl Default for TableCursor {
    fn default() -> Self {
        Self {
            pos: GridPos::new(1, 1),
            detail_open: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Category,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestForm {
    pub category_index: usize,
    pub count_index: usize,
    pub focused: SettingsField,
}

impl TestForm {
    pub fn from_settings(settings: &Settings) -> Self {
        let category_index = QuizCategory::ALL_CATEGORIES
            .iter()
            .position(|c| *c == settings.default_category)
            .unwrap_or(QuizCategory::ALL_CATEGORIES.len() - 1);
        Self {
            category_index,
            count_index: settings.question_count_index(),
            focused: SettingsField::Category,
        }
    }

    pub fn category(&self) -> QuizCategory {
        QuizCategory::ALL_CATEGORIES[self.category_index]
    }

    pub fn count(&self) -> usize {
        QUESTION_COUNT_CHOICES[self.count_index]
    }
}

/// Feedback on the previously answered test question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub expected: String,
}

pub struct App {
    pub screen: Screen,
    pub settings: Settings,
    pub settings_dirty: bool,
    pub generator: QuestionGenerator,
    pub menu_index: usize,
    pub table: TableCursor,
    pub practice: Option<PracticeRound>,
    pub test_form: TestForm,
    pub test: Option<TestSession>,
    pub input_buffer: String,
    /// Cursor position in characters, not bytes.
    pub cursor_position: usize,
    pub last_feedback: Option<AnswerFeedback>,
    pub last_result: Option<TestResult>,
    pub error_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let generator = match settings.seed {
            Some(seed) => QuestionGenerator::seeded(seed),
            None => QuestionGenerator::from_entropy(),
        };
        Self {
            screen: Screen::Welcome,
            test_form: TestForm::from_settings(&settings),
            settings,
            settings_dirty: false,
            generator,
            menu_index: 0,
            table: TableCursor::default(),
            practice: None,
            test: None,
            input_buffer: String::new(),
            cursor_position: 0,
            last_feedback: None,
            last_result: None,
            error_message: None,
            should_quit: false,
        }
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn navigate(&mut self, screen: Screen) {
        logger::log(&format!("Screen {:?} -> {:?}", self.screen, screen));
        self.screen = screen;
        self.menu_index = 0;
        self.error_message = None;
    }

    /// Esc handling outside of dialogs.
    pub fn go_back(&mut self) {
        match self.screen {
            Screen::Welcome => self.should_quit = true,
            Screen::Modes => self.navigate(Screen::Welcome),
            Screen::PeriodicTable | Screen::QuizMenu | Screen::TestSettings => {
                self.navigate(Screen::Modes)
            }
            Screen::Quiz => {
                self.practice = None;
                self.navigate(Screen::QuizMenu);
            }
            Screen::TestRun => self.screen = Screen::TestQuitConfirm,
            Screen::TestQuitConfirm => self.screen = Screen::TestRun,
            Screen::TestResult => self.navigate(Screen::Modes),
        }
    }

    pub fn toggle_language(&mut self) {
        let language = self.settings.language.toggled();
        self.settings.set_language(language);
        self.settings_dirty = true;
    }

    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        self.settings_dirty = true;
    }

    pub fn open_mode(&mut self, mode: Mode) {
        match mode {
            Mode::PeriodicTable => {
                self.table.detail_open = false;
                self.navigate(Screen::PeriodicTable);
            }
            Mode::Practice => self.navigate(Screen::QuizMenu),
            Mode::Test => {
                self.test_form = TestForm::from_settings(&self.settings);
                self.navigate(Screen::TestSettings);
            }
        }
    }

    pub fn start_practice(&mut self, category: QuizCategory) {
        self.practice = Some(PracticeRound::new(
            category,
            self.language(),
            &mut self.generator,
        ));
        self.navigate(Screen::Quiz);
    }

    pub fn start_test(&mut self) {
        let category = self.test_form.category();
        let count = self.test_form.count();
        match TestSession::start(category, count, self.language(), &mut self.generator) {
            Ok(test) => {
                self.test = Some(test);
                self.input_buffer.clear();
                self.cursor_position = 0;
                self.last_feedback = None;
                self.last_result = None;
                self.navigate(Screen::TestRun);
            }
            Err(e) => {
                logger::log(&format!("Could not start test: {}", e));
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn submit_test_answer(&mut self) {
        let Some(test) = self.test.as_mut() else {
            return;
        };
        let expected = test
            .current_question()
            .map(|q| q.correct_answer().to_string())
            .unwrap_or_default();

        match test.submit_answer(&self.input_buffer) {
            Ok(SubmitOutcome::Next { correct }) => {
                self.last_feedback = Some(AnswerFeedback { correct, expected });
            }
            Ok(SubmitOutcome::Finished { result, .. }) => {
                self.last_result = Some(result);
                self.last_feedback = None;
                self.test = None;
                self.navigate(Screen::TestResult);
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
            }
        }
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    pub fn abandon_test(&mut self) {
        if let Some(test) = self.test.take() {
            let (at, total) = test.progress();
            logger::log(&format!("Test abandoned at question {}/{}", at, total));
        }
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.last_feedback = None;
        self.navigate(Screen::Modes);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Welcome => session::handle_welcome_input(self, key),
            Screen::Modes => session::handle_modes_input(self, key),
            Screen::PeriodicTable => session::handle_table_input(self, key),
            Screen::QuizMenu => session::handle_quiz_menu_input(self, key),
            Screen::Quiz => session::handle_practice_input(self, key),
            Screen::TestSettings => session::handle_test_settings_input(self, key),
            Screen::TestRun => session::handle_test_input(self, key),
            Screen::TestQuitConfirm => session::handle_quit_confirm_input(self, key),
            Screen::TestResult => session::handle_result_input(self, key),
        }
    }
}
