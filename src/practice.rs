//! Practice mode: one multiple-choice question at a time with a running score.

use crate::models::{Language, QuizCategory, QuizQuestion};
use crate::quiz::QuestionGenerator;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct PracticeRound {
    category: QuizCategory,
    language: Language,
    question: QuizQuestion,
    selected: Option<usize>,
    score: usize,
    answered: usize,
}

impl PracticeRound {
    pub fn new<R: Rng>(
        category: QuizCategory,
        language: Language,
        generator: &mut QuestionGenerator<R>,
    ) -> Self {
        Self {
            category,
            language,
            question: generator.generate(category, language),
            selected: None,
            score: 0,
            answered: 0,
        }
    }

    /// Lock in an option. Only the first choice for a question counts;
    /// returns `None` if the choice was ignored.
    pub fn select(&mut self, index: usize) -> Option<bool> {
        if self.selected.is_some() || index >= self.question.options.len() {
            return None;
        }
        self.selected = Some(index);
        self.answered += 1;
        let correct = index == self.question.correct_index;
        if correct {
            self.score += 1;
        }
        Some(correct)
    }

    /// Move on to a fresh question. Ignored until the current one is answered.
    pub fn next_question<R: Rng>(&mut self, generator: &mut QuestionGenerator<R>) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.question = generator.generate(self.category, self.language);
        self.selected = None;
        true
    }

    pub fn question(&self) -> &QuizQuestion {
        &self.question
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn category(&self) -> QuizCategory {
        self.category
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_choice_counts() {
        let mut generator = QuestionGenerator::seeded(1);
        let mut round = PracticeRound::new(QuizCategory::Symbol, Language::En, &mut generator);
        let correct = round.question().correct_index;

        assert_eq!(round.select(correct), Some(true));
        assert_eq!(round.score(), 1);

        let wrong = (correct + 1) % 4;
        assert_eq!(round.select(wrong), None);
        assert_eq!(round.selected(), Some(correct));
        assert_eq!(round.score(), 1);
    }

    #[test]
    fn test_wrong_choice_keeps_score() {
        let mut generator = QuestionGenerator::seeded(2);
        let mut round = PracticeRound::new(QuizCategory::Number, Language::Pl, &mut generator);
        let wrong = (round.question().correct_index + 2) % 4;
        assert_eq!(round.select(wrong), Some(false));
        assert_eq!(round.score(), 0);
        assert_eq!(round.answered(), 1);
    }

    #[test]
    fn test_out_of_range_choice_ignored() {
        let mut generator = QuestionGenerator::seeded(3);
        let mut round = PracticeRound::new(QuizCategory::Mass, Language::En, &mut generator);
        assert_eq!(round.select(4), None);
        assert!(round.selected().is_none());
    }

    #[test]
    fn test_next_requires_answer() {
        let mut generator = QuestionGenerator::seeded(4);
        let mut round = PracticeRound::new(QuizCategory::All, Language::En, &mut generator);
        assert!(!round.next_question(&mut generator));

        round.select(0);
        assert!(round.next_question(&mut generator));
        assert!(round.selected().is_none());
        assert_eq!(round.answered(), 1);
    }
}
