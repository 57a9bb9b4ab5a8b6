use crate::error::{ConfigError, QuizError};
use crate::logger;
use crate::models::{Language, QuizCategory, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";
pub const LANGUAGE_ENV: &str = "PERIODIC_QUIZ_LANG";
pub const SEED_ENV: &str = "PERIODIC_QUIZ_SEED";

/// Question counts offered on the test settings screen.
pub const QUESTION_COUNT_CHOICES: [usize; 4] = [5, 10, 15, 20];

pub fn data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\periodic-quiz")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/periodic-quiz")
    }
}

pub fn config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE)
}

/// File values shadowed by environment overrides for the current run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadowedValues {
    language: Option<Language>,
    seed: Option<Option<u64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: Language,
    pub theme: Theme,
    pub default_category: QuizCategory,
    pub default_question_count: usize,
    /// Fixed seed for reproducible question sequences.
    pub seed: Option<u64>,
    #[serde(skip)]
    pub shadowed: ShadowedValues,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::Pl,
            theme: Theme::Light,
            default_category: QuizCategory::All,
            default_question_count: 10,
            seed: None,
            shadowed: ShadowedValues::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.default_question_count < 1 {
            return Err(QuizError::InvalidConfiguration(
                "default_question_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write the settings to `path`. Values that only came from environment
    /// overrides are replaced by what the file held before.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.persisted())?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `PERIODIC_QUIZ_LANG` / `PERIODIC_QUIZ_SEED` style overrides.
    pub fn apply_overrides(
        &mut self,
        language: Option<&str>,
        seed: Option<&str>,
    ) -> Result<(), QuizError> {
        if let Some(language) = language {
            let parsed = language.parse()?;
            self.shadowed.language.get_or_insert(self.language);
            self.language = parsed;
        }
        if let Some(seed) = seed {
            let parsed = seed.trim().parse().map_err(|_| {
                QuizError::InvalidConfiguration(format!("seed '{}' is not a number", seed))
            })?;
            self.shadowed.seed.get_or_insert(self.seed);
            self.seed = Some(parsed);
        }
        Ok(())
    }

    /// Switch language by user choice. Unlike an override, this is saved.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.shadowed.language = None;
    }

    /// The settings as they belong in the config file.
    pub fn persisted(&self) -> Settings {
        let mut settings = self.clone();
        if let Some(language) = self.shadowed.language {
            settings.language = language;
        }
        if let Some(seed) = self.shadowed.seed {
            settings.seed = seed;
        }
        settings.shadowed = ShadowedValues::default();
        settings
    }

    /// Index of the default count in [`QUESTION_COUNT_CHOICES`], or of the
    /// nearest larger choice.
    pub fn question_count_index(&self) -> usize {
        QUESTION_COUNT_CHOICES
            .iter()
            .position(|&c| c >= self.default_question_count)
            .unwrap_or(QUESTION_COUNT_CHOICES.len() - 1)
    }
}

/// Settings file plus environment overrides. Problems are logged and the
/// defaults used instead.
pub fn load_settings() -> Settings {
    let path = config_path();
    let mut settings = match Settings::load_from(&path) {
        Ok(settings) => settings,
        Err(e) => {
            logger::log(&format!(
                "Ignoring settings file {}: {}",
                path.display(),
                e
            ));
            Settings::default()
        }
    };

    let language = std::env::var(LANGUAGE_ENV).ok();
    let seed = std::env::var(SEED_ENV).ok();
    if let Err(e) = settings.apply_overrides(language.as_deref(), seed.as_deref()) {
        logger::log(&format!("Ignoring environment override: {}", e));
    }
    settings
}

pub fn save_settings(settings: &Settings) {
    let path = config_path();
    if let Err(e) = settings.save_to(&path) {
        logger::log(&format!("Failed to save settings to {}: {}", path.display(), e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let settings = Settings {
            language: Language::En,
            theme: Theme::Dark,
            default_category: QuizCategory::Mass,
            default_question_count: 15,
            seed: Some(99),
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "language": "en" }"#).unwrap();
        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.default_question_count, 10);
    }

    #[test]
    fn test_zero_count_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "default_question_count": 0 }"#).unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::Invalid(QuizError::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_language_in_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "language": "de" }"#).unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_overrides() {
        let mut settings = Settings::default();
        settings.apply_overrides(Some("EN"), Some(" 7 ")).unwrap();
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.seed, Some(7));

        assert!(settings.apply_overrides(Some("fr"), None).is_err());
        assert!(settings.apply_overrides(None, Some("seven")).is_err());
    }

    #[test]
    fn test_env_overrides_are_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut settings = Settings::load_from(&path).unwrap();
        settings.apply_overrides(Some("en"), Some("7")).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.language, Language::En);

        settings.theme = settings.theme.toggled();
        settings.save_to(&path).unwrap();

        let reloaded = Settings::load_from(&path).unwrap();
        assert_eq!(reloaded.seed, None);
        assert_eq!(reloaded.language, Language::Pl);
        assert_eq!(reloaded.theme, Theme::Dark);
    }

    #[test]
    fn test_override_keeps_seed_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "seed": 3 }"#).unwrap();

        let mut settings = Settings::load_from(&path).unwrap();
        settings.apply_overrides(None, Some("8")).unwrap();
        settings.apply_overrides(None, Some("9")).unwrap();
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.persisted().seed, Some(3));
    }

    #[test]
    fn test_chosen_language_replaces_override() {
        let mut settings = Settings::default();
        settings.apply_overrides(Some("en"), None).unwrap();
        assert_eq!(settings.persisted().language, Language::Pl);

        settings.set_language(Language::En);
        assert_eq!(settings.persisted().language, Language::En);
    }

    #[test]
    fn test_question_count_index() {
        let mut settings = Settings::default();
        assert_eq!(settings.question_count_index(), 1);
        settings.default_question_count = 12;
        assert_eq!(settings.question_count_index(), 2);
        settings.default_question_count = 50;
        assert_eq!(settings.question_count_index(), 3);
    }
}
