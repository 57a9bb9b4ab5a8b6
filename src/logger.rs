use crate::config::data_dir;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub const LOG_FILE: &str = "periodic_quiz.log";

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Open the log in the data directory. Safe to call more than once.
pub fn init() {
    let dir = data_dir();
    std::fs::create_dir_all(&dir).ok();
    init_at(&dir.join(LOG_FILE));
}

pub fn init_at(path: &Path) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.is_none()
        && let Ok(file) = OpenOptions::new().create(true).append(true).open(path)
    {
        *logger = Some(file);
    }
}

pub fn log(message: &str) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if let Some(file) = logger.as_mut() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_before_init_is_silent() {
        log("nobody is listening");
    }

    #[test]
    fn test_logger_init_and_log() {
        // The logger is process-wide and only this test opens it, so the
        // file below is the one being written.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);
        init_at(&path);
        log("Test log message");

        let content = std::fs::read_to_string(&path).unwrap();
        let line = content
            .lines()
            .find(|l| l.ends_with("Test log message"))
            .unwrap();
        assert!(line.starts_with('['), "{}", line);
    }
}
