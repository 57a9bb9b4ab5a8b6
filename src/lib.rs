pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod practice;
pub mod quiz;
pub mod session;
pub mod table;
pub mod test_session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::{App, Screen};
pub use catalog::{Element, by_number, by_symbol, list_elements};
pub use error::{ConfigError, QuizError};
pub use models::{Language, QuestionKind, QuizCategory, QuizQuestion, TestResult, Theme};
pub use practice::PracticeRound;
pub use quiz::{QuestionGenerator, generate};
pub use table::{ElementCategory, GridPos, category_of, position_of};
pub use test_session::{SessionState, SubmitOutcome, TestSession, answers_match};
