// Exception word lists consulted by the stemmer.

use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

/// A set of words.
pub type WordSet = hashbrown::HashSet<String>;

/// Words that are never stemmed.
pub const PROTECTED_WORDS_FILE: &str = "protected_words.txt";

/// Words whose suffixes may be stripped despite broken vowel harmony.
pub const VOWEL_HARMONY_EXCEPTIONS_FILE: &str = "vowel_harmony_exceptions.txt";

/// Stems whose final voiced consonant is kept.
pub const LAST_CONSONANT_EXCEPTIONS_FILE: &str = "last_consonant_exceptions.txt";

/// Stems preferred by the ranking regardless of their length.
pub const AVERAGE_STEM_SIZE_EXCEPTIONS_FILE: &str = "average_stem_size_exceptions.txt";

const FILES: [&str; 4] = [
    PROTECTED_WORDS_FILE,
    VOWEL_HARMONY_EXCEPTIONS_FILE,
    LAST_CONSONANT_EXCEPTIONS_FILE,
    AVERAGE_STEM_SIZE_EXCEPTIONS_FILE,
];

/// Error reading a word list file.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The four exception lists. All lists are empty by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordLists {
    pub protected_words: WordSet,
    pub vowel_harmony_exceptions: WordSet,
    pub last_consonant_exceptions: WordSet,
    pub average_stem_size_exceptions: WordSet,
}

impl WordLists {
    /// Parse a list with one word per line. Surrounding whitespace is
    /// trimmed; blank lines and lines starting with `#` are skipped.
    pub fn parse_list(text: &str) -> WordSet {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect()
    }

    /// Load the lists from the standard file names in `dir`.
    ///
    /// A missing file gives an empty list and a warning.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, WordListError> {
        let dir = dir.as_ref();
        let read = |name: &str| read_list(&dir.join(name));
        Ok(Self {
            protected_words: read(PROTECTED_WORDS_FILE)?,
            vowel_harmony_exceptions: read(VOWEL_HARMONY_EXCEPTIONS_FILE)?,
            last_consonant_exceptions: read(LAST_CONSONANT_EXCEPTIONS_FILE)?,
            average_stem_size_exceptions: read(AVERAGE_STEM_SIZE_EXCEPTIONS_FILE)?,
        })
    }

    /// Whether `dir` contains at least one of the list files.
    pub fn has_any_file(dir: impl AsRef<Path>) -> bool {
        let dir = dir.as_ref();
        FILES.iter().any(|name| dir.join(name).is_file())
    }
}

fn read_list(path: &Path) -> Result<WordSet, WordListError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(WordLists::parse_list(&text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "word list not found, using an empty list");
            Ok(WordSet::new())
        }
        Err(source) => Err(WordListError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
