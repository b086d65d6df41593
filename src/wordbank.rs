use crate::error::WordSourceError;
use crate::game_state::is_letter;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_WORDS_PATH: &str = "resources/words.txt";

/// Trims a raw line and keeps it only if its uppercase form is a non-empty run of letters.
fn normalize_line(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() {
        return None;
    }
    if !word.to_uppercase().chars().all(is_letter) {
        log::debug!("Skipping word list entry with non-letter characters: {word:?}");
        return None;
    }
    Some(word.to_string())
}

pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize_line).collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordSourceError> {
    let path = path.as_ref();
    let read_error = |source| WordSourceError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_line(&line.map_err(read_error)?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Loads the word list, logging a read failure and degrading to an empty list.
pub fn load_words_or_empty<P: AsRef<Path>>(path: P) -> Vec<String> {
    match load_words_from_file(path) {
        Ok(words) => {
            log::info!("Loaded {} words", words.len());
            words
        }
        Err(e) => {
            log::error!("{e}");
            Vec::new()
        }
    }
}
