use crate::error::QuizError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
}

impl Language {
    /// Choose between the Polish and English variant of a UI string.
    pub fn pick<T>(self, pl: T, en: T) -> T {
        match self {
            Language::Pl => pl,
            Language::En => en,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Pl => Language::En,
            Language::En => Language::Pl,
        }
    }

    pub fn code(self) -> &'static str {
        self.pick("PL", "EN")
    }
}

impl FromStr for Language {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pl" => Ok(Language::Pl),
            "en" => Ok(Language::En),
            other => Err(QuizError::InvalidConfiguration(format!(
                "unsupported language '{}'",
                other
            ))),
        }
    }
}

/// What a quiz or test asks about. `All` mixes the three kinds per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizCategory {
    Symbol,
    Mass,
    Number,
    #[default]
    All,
}

impl QuizCategory {
    pub const ALL_CATEGORIES: [QuizCategory; 4] = [
        QuizCategory::Symbol,
        QuizCategory::Mass,
        QuizCategory::Number,
        QuizCategory::All,
    ];

    /// Label used on the practice menu.
    pub fn label(self, language: Language) -> &'static str {
        match self {
            QuizCategory::Symbol => language.pick("Symbol Chemiczny", "Chemical Symbol"),
            QuizCategory::Mass => language.pick("Masa Atomowa", "Atomic Mass"),
            QuizCategory::Number => language.pick("Liczba Atomowa", "Atomic Number"),
            QuizCategory::All => language.pick("Wszystko", "All"),
        }
    }

    /// Shorter label used on the test settings screen.
    pub fn short_label(self, language: Language) -> &'static str {
        match self {
            QuizCategory::Symbol => language.pick("Symbole", "Symbols"),
            QuizCategory::Mass => language.pick("Masa", "Mass"),
            QuizCategory::Number => language.pick("Liczba at.", "At. Number"),
            QuizCategory::All => language.pick("Wszystko", "All"),
        }
    }
}

impl FromStr for QuizCategory {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "symbol" => Ok(QuizCategory::Symbol),
            "mass" => Ok(QuizCategory::Mass),
            "number" => Ok(QuizCategory::Number),
            "all" | "mixed" => Ok(QuizCategory::All),
            other => Err(QuizError::InvalidConfiguration(format!(
                "unsupported quiz category '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    Mass,
    Symbol,
    Number,
}

impl QuestionKind {
    /// Maps a uniform draw in `0..3` to a kind. Larger draws wrap.
    pub fn from_draw(draw: u8) -> Self {
        match draw % 3 {
            0 => QuestionKind::Mass,
            1 => QuestionKind::Symbol,
            _ => QuestionKind::Number,
        }
    }

    /// The kind a category pins, or `None` for the mixed category.
    pub fn fixed_by(category: QuizCategory) -> Option<Self> {
        match category {
            QuizCategory::Mass => Some(QuestionKind::Mass),
            QuizCategory::Symbol => Some(QuestionKind::Symbol),
            QuizCategory::Number => Some(QuestionKind::Number),
            QuizCategory::All => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub kind: QuestionKind,
}

impl QuizQuestion {
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Final tally of a finished test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestResult {
    pub score: usize,
    pub total: usize,
}

impl TestResult {
    /// Whole percent, truncated.
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.score * 100 / self.total
    }

    pub fn passed(&self) -> bool {
        self.percentage() >= 50
    }

    pub fn comment(&self, language: Language) -> &'static str {
        match self.percentage() {
            100 => language.pick("Perfekcyjnie! Mistrz Chemii!", "Perfect! Chemistry Master!"),
            80.. => language.pick("Świetna robota!", "Great job!"),
            50.. => language.pick("Całkiem nieźle!", "Not bad!"),
            _ => language.pick("Musisz jeszcze poćwiczyć.", "Keep practicing."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("PL".parse::<Language>(), Ok(Language::Pl));
        assert_eq!(" en ".parse::<Language>(), Ok(Language::En));
        assert!(matches!(
            "de".parse::<Language>(),
            Err(QuizError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("symbol".parse::<QuizCategory>(), Ok(QuizCategory::Symbol));
        assert_eq!("Mixed".parse::<QuizCategory>(), Ok(QuizCategory::All));
        assert!("charge".parse::<QuizCategory>().is_err());
    }

    #[test]
    fn test_kind_from_draw_covers_all_kinds() {
        assert_eq!(QuestionKind::from_draw(0), QuestionKind::Mass);
        assert_eq!(QuestionKind::from_draw(1), QuestionKind::Symbol);
        assert_eq!(QuestionKind::from_draw(2), QuestionKind::Number);
        assert_eq!(QuestionKind::from_draw(5), QuestionKind::Number);
    }

    #[test]
    fn test_kind_fixed_by_category() {
        assert_eq!(
            QuestionKind::fixed_by(QuizCategory::Mass),
            Some(QuestionKind::Mass)
        );
        assert_eq!(QuestionKind::fixed_by(QuizCategory::All), None);
    }

    #[test]
    fn test_result_percentage_truncates() {
        let result = TestResult { score: 2, total: 3 };
        assert_eq!(result.percentage(), 66);
        assert!(result.passed());
    }

    #[test]
    fn test_result_comments() {
        let perfect = TestResult { score: 5, total: 5 };
        assert_eq!(perfect.comment(Language::En), "Perfect! Chemistry Master!");

        let great = TestResult { score: 8, total: 10 };
        assert_eq!(great.comment(Language::Pl), "Świetna robota!");

        let okay = TestResult { score: 5, total: 10 };
        assert_eq!(okay.comment(Language::En), "Not bad!");

        let poor = TestResult { score: 1, total: 10 };
        assert_eq!(poor.comment(Language::En), "Keep practicing.");
        assert!(!poor.passed());
    }

    #[test]
    fn test_language_toggle() {
        assert_eq!(Language::Pl.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
        assert_eq!(Language::En.pick("a", "b"), "b");
    }
}
