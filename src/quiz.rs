//! Multiple-choice question generation.

use crate::catalog::{Element, list_elements};
use crate::error::QuizError;
use crate::logger;
use crate::models::{Language, QuestionKind, QuizCategory, QuizQuestion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::seq::index;
use rand::{Rng, SeedableRng};

pub const OPTION_COUNT: usize = 4;
const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Suffix appended to masses in answer options.
pub const MASS_UNIT_SUFFIX: &str = " u";

/// Offset separating the kind stream seed from the element stream seed.
const KIND_STREAM_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Draws quiz questions from a catalog.
///
/// Element picks (correct answer, distractors, option order) and the kind
/// chosen for the mixed category come from two separate random streams, so
/// a seeded generator replays the same questions.
#[derive(Debug, Clone)]
pub struct QuestionGenerator<R = StdRng> {
    catalog: &'static [Element],
    element_rng: R,
    kind_rng: R,
}

impl QuestionGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        logger::log("Question generator seeded from entropy");
        Self {
            catalog: list_elements(),
            element_rng: StdRng::from_entropy(),
            kind_rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        logger::log(&format!("Question generator seeded with {}", seed));
        Self {
            catalog: list_elements(),
            element_rng: StdRng::seed_from_u64(seed),
            kind_rng: StdRng::seed_from_u64(seed.wrapping_add(KIND_STREAM_OFFSET)),
        }
    }
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn with_rngs(
        catalog: &'static [Element],
        element_rng: R,
        kind_rng: R,
    ) -> Result<Self, QuizError> {
        if catalog.len() < OPTION_COUNT {
            return Err(QuizError::InsufficientCatalogSize {
                available: catalog.len(),
            });
        }
        Ok(Self {
            catalog,
            element_rng,
            kind_rng,
        })
    }

    pub fn generate(&mut self, category: QuizCategory, language: Language) -> QuizQuestion {
        let catalog = self.catalog;
        let len = catalog.len();
        let correct_pos = self.element_rng.gen_range(0..len);
        let correct = &catalog[correct_pos];

        // Sample among the other len - 1 slots, then skip over the correct one.
        let distractors: Vec<&Element> =
            index::sample(&mut self.element_rng, len - 1, DISTRACTOR_COUNT)
                .into_iter()
                .map(|i| if i >= correct_pos { i + 1 } else { i })
                .map(|i| &catalog[i])
                .collect();

        let kind = self.resolve_kind(category);

        let mut options: Vec<(bool, String)> = Vec::with_capacity(OPTION_COUNT);
        options.push((true, render_answer(correct, kind)));
        options.extend(distractors.iter().map(|e| (false, render_answer(e, kind))));
        options.shuffle(&mut self.element_rng);

        let correct_index = options
            .iter()
            .position(|(is_correct, _)| *is_correct)
            .unwrap_or_else(|| unreachable!("correct option lost in shuffle"));

        QuizQuestion {
            text: render_prompt(correct, kind, language),
            options: options.into_iter().map(|(_, text)| text).collect(),
            correct_index,
            kind,
        }
    }

    fn resolve_kind(&mut self, category: QuizCategory) -> QuestionKind {
        QuestionKind::fixed_by(category)
            .unwrap_or_else(|| QuestionKind::from_draw(self.kind_rng.gen_range(0..3)))
    }
}

/// One question from a freshly seeded generator over the full catalog.
pub fn generate(category: QuizCategory, language: Language) -> QuizQuestion {
    QuestionGenerator::from_entropy().generate(category, language)
}

pub fn render_answer(element: &Element, kind: QuestionKind) -> String {
    match kind {
        QuestionKind::Mass => format!("{}{}", element.formatted_mass(), MASS_UNIT_SUFFIX),
        QuestionKind::Symbol => element.symbol.to_string(),
        QuestionKind::Number => element.number.to_string(),
    }
}

pub fn render_prompt(element: &Element, kind: QuestionKind, language: Language) -> String {
    let name = element.name(language);
    match (kind, language) {
        (QuestionKind::Mass, Language::Pl) => {
            format!("Jaka jest masa atomowa pierwiastka: {}?", name)
        }
        (QuestionKind::Mass, Language::En) => format!("What is the atomic mass of: {}?", name),
        (QuestionKind::Symbol, Language::Pl) => format!("Jaki symbol chemiczny ma {}?", name),
        (QuestionKind::Symbol, Language::En) => format!("What is the symbol of: {}?", name),
        (QuestionKind::Number, Language::Pl) => {
            format!("Jaka jest liczba atomowa pierwiastka: {}?", name)
        }
        (QuestionKind::Number, Language::En) => {
            format!("What is the atomic number of: {}?", name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{by_number, by_symbol};
    use std::collections::HashSet;

    fn correct_element(question: &QuizQuestion) -> &'static Element {
        // Symbol and number answers identify the element uniquely.
        let answer = question.correct_answer();
        match question.kind {
            QuestionKind::Symbol => by_symbol(answer).unwrap(),
            QuestionKind::Number => by_number(answer.parse().unwrap()).unwrap(),
            QuestionKind::Mass => panic!("mass answers are not unique"),
        }
    }

    #[test]
    fn test_question_shape() {
        let mut generator = QuestionGenerator::seeded(7);
        for category in QuizCategory::ALL_CATEGORIES {
            for _ in 0..50 {
                let q = generator.generate(category, Language::En);
                assert_eq!(q.options.len(), OPTION_COUNT);
                assert!(q.correct_index < OPTION_COUNT);
                assert!(!q.text.is_empty());
            }
        }
    }

    #[test]
    fn test_exactly_one_option_matches_correct_answer() {
        let mut generator = QuestionGenerator::seeded(11);
        for category in [QuizCategory::Symbol, QuizCategory::Number] {
            for _ in 0..200 {
                let q = generator.generate(category, Language::Pl);
                let element = correct_element(&q);
                let expected = render_answer(element, q.kind);
                let matches = q.options.iter().filter(|o| **o == expected).count();
                assert_eq!(matches, 1, "{:?}", q);
                assert_eq!(q.options[q.correct_index], expected);
            }
        }
    }

    #[test]
    fn test_distractors_never_repeat_correct_element() {
        let mut generator = QuestionGenerator::seeded(3);
        for _ in 0..500 {
            let q = generator.generate(QuizCategory::Number, Language::En);
            let numbers: HashSet<&str> = q.options.iter().map(String::as_str).collect();
            assert_eq!(numbers.len(), OPTION_COUNT, "{:?}", q.options);
        }
    }

    #[test]
    fn test_mass_options_carry_unit() {
        let mut generator = QuestionGenerator::seeded(5);
        let q = generator.generate(QuizCategory::Mass, Language::En);
        assert_eq!(q.kind, QuestionKind::Mass);
        for option in &q.options {
            assert!(option.ends_with(MASS_UNIT_SUFFIX), "{}", option);
            let number = option.trim_end_matches(MASS_UNIT_SUFFIX);
            assert_eq!(number.split('.').nth(1).map(str::len), Some(2));
        }
        assert!(q.text.starts_with("What is the atomic mass of: "));
    }

    #[test]
    fn test_fixed_category_pins_kind() {
        let mut generator = QuestionGenerator::seeded(9);
        for _ in 0..20 {
            assert_eq!(
                generator.generate(QuizCategory::Symbol, Language::En).kind,
                QuestionKind::Symbol
            );
        }
    }

    #[test]
    fn test_mixed_category_reaches_every_kind() {
        let mut generator = QuestionGenerator::seeded(13);
        let kinds: HashSet<QuestionKind> = (0..100)
            .map(|_| generator.generate(QuizCategory::All, Language::En).kind)
            .collect();
        assert_eq!(kinds.len(), 3);
    }

    #[test]
    fn test_seeded_generators_replay() {
        let mut a = QuestionGenerator::seeded(42);
        let mut b = QuestionGenerator::seeded(42);
        for _ in 0..20 {
            assert_eq!(
                a.generate(QuizCategory::All, Language::Pl),
                b.generate(QuizCategory::All, Language::Pl)
            );
        }
    }

    #[test]
    fn test_element_sequence_independent_of_category() {
        let mut fixed = QuestionGenerator::seeded(42);
        let mut mixed = QuestionGenerator::seeded(42);
        for _ in 0..20 {
            let a = fixed.generate(QuizCategory::Symbol, Language::En);
            let b = mixed.generate(QuizCategory::All, Language::En);
            let element = correct_element(&a);
            // Every English prompt ends with ": <name>?".
            assert!(
                b.text.ends_with(&format!(": {}?", element.name_en)),
                "{} vs {}",
                a.text,
                b.text
            );
            assert_eq!(a.correct_index, b.correct_index);
        }
    }

    #[test]
    fn test_correct_index_survives_duplicate_masses() {
        // Cm and Bk both render as 247.00 u.
        let catalog = &list_elements()[95..99];
        let mut generator = QuestionGenerator::with_rngs(
            catalog,
            StdRng::seed_from_u64(4),
            StdRng::seed_from_u64(5),
        )
        .unwrap();
        for _ in 0..50 {
            let q = generator.generate(QuizCategory::Mass, Language::En);
            let expected = q.text.trim_start_matches("What is the atomic mass of: ");
            let expected = expected.trim_end_matches('?');
            let element = catalog.iter().find(|e| e.name_en == expected).unwrap();
            assert_eq!(q.correct_answer(), render_answer(element, QuestionKind::Mass));
        }
    }

    #[test]
    fn test_polish_prompts() {
        let hydrogen = by_number(1).unwrap();
        assert_eq!(
            render_prompt(hydrogen, QuestionKind::Symbol, Language::Pl),
            "Jaki symbol chemiczny ma Wodór?"
        );
        assert_eq!(
            render_prompt(hydrogen, QuestionKind::Number, Language::En),
            "What is the atomic number of: Hydrogen?"
        );
        assert_eq!(render_answer(hydrogen, QuestionKind::Mass), "1.01 u");
    }

    #[test]
    fn test_catalog_too_small() {
        let result = QuestionGenerator::with_rngs(
            &list_elements()[..3],
            StdRng::seed_from_u64(1),
            StdRng::seed_from_u64(2),
        );
        assert_eq!(
            result.unwrap_err(),
            QuizError::InsufficientCatalogSize { available: 3 }
        );
    }

    #[test]
    fn test_minimal_catalog_uses_every_element() {
        let mut generator = QuestionGenerator::with_rngs(
            &list_elements()[..4],
            StdRng::seed_from_u64(1),
            StdRng::seed_from_u64(2),
        )
        .unwrap();
        let q = generator.generate(QuizCategory::Symbol, Language::En);
        let mut options = q.options.clone();
        options.sort();
        assert_eq!(options, vec!["Be", "H", "He", "Li"]);
    }

    #[test]
    fn test_free_generate() {
        let q = generate(QuizCategory::Number, Language::En);
        assert_eq!(q.options.len(), OPTION_COUNT);
    }
}
