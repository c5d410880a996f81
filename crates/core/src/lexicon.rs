//! Lexicon loading: stop, positive, and negative word sets.
//!
//! Lexicon files are plain text with one entry per line. A line may carry a
//! trailing annotation after a `|` delimiter, which is ignored. Files are
//! decoded as UTF-8 first, falling back to Latin-1, and a missing or
//! unreadable file degrades to an empty set rather than aborting the batch.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Decodings attempted, in order, when reading a lexicon file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Utf8,
    Latin1,
}

const ENCODING_ORDER: &[Encoding] = &[Encoding::Utf8, Encoding::Latin1];

/// Decodes raw bytes using the first encoding in [`ENCODING_ORDER`] that
/// accepts them. Latin-1 accepts any byte sequence, so this always succeeds.
fn decode(bytes: &[u8]) -> String {
    for encoding in ENCODING_ORDER {
        match encoding {
            Encoding::Utf8 => {
                if let Ok(text) = std::str::from_utf8(bytes) {
                    return text.to_owned();
                }
            }
            Encoding::Latin1 => return bytes.iter().map(|&b| b as char).collect(),
        }
    }
    String::new()
}

/// Loads one word set from a lexicon file.
///
/// Each line contributes the substring before the first `|`, trimmed and
/// lowercased; empty results are skipped. Returns an empty set if the file
/// does not exist or cannot be read.
pub fn load_word_set(path: &Path) -> HashSet<String> {
    if !path.exists() {
        return HashSet::new();
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read lexicon file, using empty set");
            return HashSet::new();
        }
    };

    let text = decode(&bytes);
    let mut words = HashSet::new();
    for line in text.lines() {
        let entry = match line.split_once('|') {
            Some((word, _annotation)) => word,
            None => line,
        };
        let word = entry.trim().to_lowercase();
        if !word.is_empty() {
            words.insert(word);
        }
    }

    words
}

/// Loads and unions every stop-word file in `dir` whose name starts with
/// `prefix`. A missing directory degrades to an empty set.
pub fn load_stop_words(dir: &Path, prefix: &str) -> HashSet<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "failed to list stop-word directory, using empty set");
            return HashSet::new();
        }
    };

    let mut words = HashSet::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        if name.to_string_lossy().starts_with(prefix) {
            words.extend(load_word_set(&entry.path()));
        }
    }

    words
}

/// Filesystem locations of the three lexicon resources.
#[derive(Debug, Clone)]
pub struct LexiconPaths {
    /// Directory scanned for stop-word files.
    pub stop_words_dir: PathBuf,
    /// File-name prefix identifying stop-word files within the directory.
    pub stop_words_prefix: String,
    /// Positive sentiment word list.
    pub positive_words: PathBuf,
    /// Negative sentiment word list.
    pub negative_words: PathBuf,
}

impl Default for LexiconPaths {
    fn default() -> Self {
        Self {
            stop_words_dir: PathBuf::from("."),
            stop_words_prefix: "StopWords_".to_string(),
            positive_words: PathBuf::from("positive-words.txt"),
            negative_words: PathBuf::from("negative-words.txt"),
        }
    }
}

/// The three disjoint word sets driving scoring, loaded once per run and
/// immutable thereafter. Membership tests are exact string equality after
/// lowercasing.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub stop_words: HashSet<String>,
    pub positive_words: HashSet<String>,
    pub negative_words: HashSet<String>,
}

impl Lexicon {
    /// Builds a lexicon from already-loaded word sets.
    pub fn new(
        stop_words: HashSet<String>, positive_words: HashSet<String>, negative_words: HashSet<String>,
    ) -> Self {
        Self { stop_words, positive_words, negative_words }
    }

    /// Loads all three word sets from disk. Missing resources degrade to
    /// empty sets, so this never fails.
    pub fn load(paths: &LexiconPaths) -> Self {
        Self {
            stop_words: load_stop_words(&paths.stop_words_dir, &paths.stop_words_prefix),
            positive_words: load_word_set(&paths.positive_words),
            negative_words: load_word_set(&paths.negative_words),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive_words.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative_words.contains(word)
    }
}
