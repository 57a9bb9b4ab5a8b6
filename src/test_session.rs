//! Scored free-text test runs.

use crate::error::QuizError;
use crate::logger;
use crate::models::{Language, QuizCategory, QuizQuestion, TestResult};
use crate::quiz::{MASS_UNIT_SUFFIX, QuestionGenerator};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Finished,
}

/// What happened after an answer was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session moved on; read the next question from `current_question`.
    Next { correct: bool },
    /// That was the last question.
    Finished { correct: bool, result: TestResult },
}

impl SubmitOutcome {
    pub fn was_correct(&self) -> bool {
        match self {
            SubmitOutcome::Next { correct } | SubmitOutcome::Finished { correct, .. } => *correct,
        }
    }
}

/// One test run. Questions are generated up front; the index and score only
/// ever move forward.
#[derive(Debug, Clone)]
pub struct TestSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: usize,
    state: SessionState,
    category: QuizCategory,
    language: Language,
}

impl TestSession {
    pub fn start<R: Rng>(
        category: QuizCategory,
        count: usize,
        language: Language,
        generator: &mut QuestionGenerator<R>,
    ) -> Result<Self, QuizError> {
        if count < 1 {
            return Err(QuizError::InvalidConfiguration(
                "a test needs at least one question".to_string(),
            ));
        }

        let questions = (0..count)
            .map(|_| generator.generate(category, language))
            .collect();

        logger::log(&format!(
            "Test started: {} questions, category {:?}, language {}",
            count,
            category,
            language.code()
        ));

        Ok(Self {
            questions,
            current_index: 0,
            score: 0,
            state: SessionState::Active,
            category,
            language,
        })
    }

    pub fn submit_answer(&mut self, raw: &str) -> Result<SubmitOutcome, QuizError> {
        if self.state == SessionState::Finished {
            return Err(QuizError::SessionAlreadyFinished);
        }

        let correct = answers_match(raw, self.questions[self.current_index].correct_answer());
        if correct {
            self.score += 1;
        }
        self.current_index += 1;

        if self.current_index == self.questions.len() {
            self.state = SessionState::Finished;
            let result = self.tally();
            logger::log(&format!(
                "Test finished: {}/{} ({}%)",
                result.score,
                result.total,
                result.percentage()
            ));
            Ok(SubmitOutcome::Finished { correct, result })
        } else {
            Ok(SubmitOutcome::Next { correct })
        }
    }

    /// `None` once the session is finished.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            SessionState::Active => self.questions.get(self.current_index),
            SessionState::Finished => None,
        }
    }

    /// 1-based position of the current question and the total.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.questions.len();
        ((self.current_index + 1).min(total), total)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn category(&self) -> QuizCategory {
        self.category
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Final tally, available once finished.
    pub fn result(&self) -> Option<TestResult> {
        self.is_finished().then(|| self.tally())
    }

    fn tally(&self) -> TestResult {
        TestResult {
            score: self.score,
            total: self.questions.len(),
        }
    }
}

/// Free-text comparison: surrounding whitespace and letter case are ignored.
/// For mass answers the unit may be left out or typed without the space.
pub fn answers_match(submitted: &str, correct: &str) -> bool {
    let submitted = submitted.trim().to_lowercase();
    let correct = correct.trim().to_lowercase();

    if submitted == correct {
        return true;
    }

    let Some(number) = correct.strip_suffix(MASS_UNIT_SUFFIX) else {
        return false;
    };
    let unit = MASS_UNIT_SUFFIX.trim_start();
    submitted == number || submitted == format!("{}{}", number, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> QuestionGenerator {
        QuestionGenerator::seeded(2024)
    }

    #[test]
    fn test_start_generates_requested_count() {
        let session =
            TestSession::start(QuizCategory::Symbol, 5, Language::En, &mut generator()).unwrap();
        assert_eq!(session.questions().len(), 5);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.progress(), (1, 5));
    }

    #[test]
    fn test_zero_questions_rejected() {
        let err = TestSession::start(QuizCategory::All, 0, Language::Pl, &mut generator())
            .unwrap_err();
        assert!(matches!(err, QuizError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_five_answers_finish_session() {
        let mut session =
            TestSession::start(QuizCategory::Symbol, 5, Language::En, &mut generator()).unwrap();

        for i in 0..4 {
            let outcome = session.submit_answer("not a symbol").unwrap();
            assert_eq!(outcome, SubmitOutcome::Next { correct: false });
            assert_eq!(session.current_index(), i + 1);
        }

        let outcome = session.submit_answer("nope").unwrap();
        match outcome {
            SubmitOutcome::Finished { result, .. } => {
                assert_eq!(result.total, 5);
                assert!(result.score <= 5);
            }
            other => panic!("expected Finished, got {:?}", other),
        }
        assert!(session.is_finished());
        assert!(session.current_question().is_none());
        assert_eq!(session.result(), Some(TestResult { score: 0, total: 5 }));
    }

    #[test]
    fn test_correct_answers_score() {
        let mut session =
            TestSession::start(QuizCategory::All, 4, Language::Pl, &mut generator()).unwrap();

        let mut expected = 0;
        for i in 0..4 {
            let answer = session.current_question().unwrap().correct_answer().to_string();
            let submitted = if i % 2 == 0 {
                format!("  {}  ", answer.to_uppercase())
            } else {
                "wrong".to_string()
            };
            let outcome = session.submit_answer(&submitted).unwrap();
            assert_eq!(outcome.was_correct(), i % 2 == 0);
            if i % 2 == 0 {
                expected += 1;
            }
            assert_eq!(session.score(), expected);
        }
        assert_eq!(session.result(), Some(TestResult { score: 2, total: 4 }));
    }

    #[test]
    fn test_submit_after_finish_is_rejected_without_mutation() {
        let mut session =
            TestSession::start(QuizCategory::Number, 1, Language::En, &mut generator()).unwrap();
        let answer = session.current_question().unwrap().correct_answer().to_string();
        let outcome = session.submit_answer(&answer).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Finished {
                correct: true,
                result: TestResult { score: 1, total: 1 }
            }
        );

        assert_eq!(
            session.submit_answer(&answer),
            Err(QuizError::SessionAlreadyFinished)
        );
        assert_eq!(session.score(), 1);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_is_last_question() {
        let mut session =
            TestSession::start(QuizCategory::Mass, 2, Language::En, &mut generator()).unwrap();
        assert!(!session.is_last_question());
        session.submit_answer("").unwrap();
        assert!(session.is_last_question());
        assert_eq!(session.progress(), (2, 2));
    }

    #[test]
    fn test_mass_answer_tolerance() {
        assert!(answers_match("1.01 u", "1.01 u"));
        assert!(answers_match("1.01U", "1.01 u"));
        assert!(answers_match(" 1.01 u ", "1.01 u"));
        assert!(answers_match("1.01", "1.01 u"));
        assert!(!answers_match("1.02", "1.01 u"));
        assert!(!answers_match("", "1.01 u"));
    }

    #[test]
    fn test_symbol_answers_ending_in_u_are_not_shortened() {
        assert!(answers_match("au", "Au"));
        assert!(!answers_match("A", "Au"));
        assert!(!answers_match("C", "Cu"));
    }

    #[test]
    fn test_number_answers() {
        assert!(answers_match(" 26", "26"));
        assert!(!answers_match("2 6", "26"));
    }
}
