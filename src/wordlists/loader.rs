//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Only entries written entirely in lowercase letters are kept, which drops
//! proper nouns and acronyms; kept entries are uppercased.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Convert one raw entry to a secret word, if it is eligible
#[must_use]
pub fn parse_entry(entry: &str) -> Option<Word> {
    let entry = entry.trim();
    if entry.is_empty() || !entry.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    Word::new(entry.to_ascii_uppercase()).ok()
}

/// Parse a line-oriented word list
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("apple\nParis\nNASA\nre-do\nzebra\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["APPLE", "ZEBRA"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let word = parse_entry(line);
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        tracing::debug!(kept = words.len(), skipped, "filtered word list");
    }
    words
}

/// Load words from a file
///
/// Returns every eligible word, skipping the rest.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("word_list.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Convert an embedded string slice to words, with the same filtering as files
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "Dog", "emu"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| parse_entry(s)).collect()
}
