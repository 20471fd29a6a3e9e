// Copyright (C) 2020-2026 Andy Kurnia.

use super::{dictionary, error};

pub const LOG_ENV: &str = "RACKFIT_LOG";
pub const DICTIONARY_ENV: &str = "RACKFIT_DICTIONARY";
pub const DEFAULT_DICTIONARY: &str = "dictionary.txt";

// error, warn, info, debug or trace; anything else means warn.
pub fn log_level(value: Option<&str>) -> tracing::Level {
    value
        .and_then(|v| v.trim().parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::WARN)
}

// Diagnostics go to stderr so that stdout stays clean for results.
pub fn init_tracing() {
    let level = log_level(std::env::var(LOG_ENV).ok().as_deref());
    // a second call keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .try_init();
}

pub fn dictionary_path() -> std::path::PathBuf {
    std::env::var_os(DICTIONARY_ENV)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| DEFAULT_DICTIONARY.into())
}

pub fn load_dictionary(path: &std::path::Path) -> error::Returns<dictionary::Dictionary> {
    let giant_string = std::fs::read_to_string(path).map_err(|err| {
        error::new(format!(
            "cannot read dictionary {} ({}; set {}): {}",
            path.display(),
            DEFAULT_DICTIONARY,
            DICTIONARY_ENV,
            err
        ))
    })?;
    dictionary::Dictionary::from_word_list(&giant_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels() {
        assert_eq!(log_level(None), tracing::Level::WARN);
        assert_eq!(log_level(Some("debug")), tracing::Level::DEBUG);
        assert_eq!(log_level(Some(" TRACE ")), tracing::Level::TRACE);
        assert_eq!(log_level(Some("loud")), tracing::Level::WARN);
    }

    #[test]
    fn dictionary_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "cat\nact\ndog\n").unwrap();
        let dictionary = load_dictionary(&path).unwrap();
        assert_eq!(dictionary.num_words(), 3);
        assert!(load_dictionary(&dir.path().join("missing.txt")).is_err());
    }
}
