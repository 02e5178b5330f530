// TurkishStemmer: the stemming entry point.
// Origin: TurkishStemmer.cs
//
// A word passes three gates (Turkish letters only, not protected, at least
// two syllables), then runs through the nominal verb, noun and derivational
// automata. Every stem reached by any automaton joins one pool; the pool is
// softened and ranked in `select`.

mod select;

use std::sync::{Arc, LazyLock};

use govde_core::character::{
    count_syllables, is_turkish_word, is_valid_optional_letter, word_has_vowel_harmony,
};
use govde_core::enums::Category;
use govde_fsm::{StemSet, Suffix, SuffixStripper};
use tracing::debug;

use crate::states::Automata;
use crate::wordlists::WordLists;

pub use select::AVERAGE_STEM_SIZE;

/// Tables shared by every stemmer built through [`TurkishStemmer::new`].
static AUTOMATA: LazyLock<Arc<Automata>> = LazyLock::new(|| {
    // The tables are compile-time data; a failure here is a bug in `states`.
    Arc::new(Automata::new().expect("built-in Turkish automata must be valid"))
});

/// Turkish stemmer.
///
/// Cheap to clone: the automata are shared and only the word lists are
/// owned. `stem` takes `&self`, so one stemmer can serve several threads.
#[derive(Debug, Clone)]
pub struct TurkishStemmer {
    automata: Arc<Automata>,
    word_lists: WordLists,
}

impl Default for TurkishStemmer {
    /// A stemmer with empty word lists.
    fn default() -> Self {
        Self::new(WordLists::default())
    }
}

impl TurkishStemmer {
    pub fn new(word_lists: WordLists) -> Self {
        Self::with_automata(Arc::clone(&AUTOMATA), word_lists)
    }

    /// Build a stemmer over caller-provided automata.
    pub fn with_automata(automata: Arc<Automata>, word_lists: WordLists) -> Self {
        Self {
            automata,
            word_lists,
        }
    }

    pub fn word_lists(&self) -> &WordLists {
        &self.word_lists
    }

    pub fn automata(&self) -> &Automata {
        &self.automata
    }

    /// Stem a lowercase word.
    ///
    /// Returns the word unchanged when it should not be stemmed (see
    /// [`proceed_to_stem`](Self::proceed_to_stem)) or when no candidate
    /// survives.
    ///
    /// The result depends on the word lists. With empty lists `evlerde`
    /// stems to `evler`, the candidate closest to [`AVERAGE_STEM_SIZE`];
    /// it stems to `ev` only when `ev` is an average stem size exception.
    pub fn stem(&self, word: &str) -> String {
        if !self.proceed_to_stem(word) {
            return word.to_string();
        }
        let mut stems = self.collect_stems(word);
        self.post_process(&mut stems, word)
    }

    /// Stem a word given as a character buffer.
    pub fn stem_chars(&self, word: &[char]) -> String {
        let word: String = word.iter().collect();
        self.stem(&word)
    }

    /// All candidate stems of `word`, best first.
    ///
    /// The first element equals [`stem`](Self::stem) when the list is not
    /// empty. Words that fail the gates have no candidates.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        if !self.proceed_to_stem(word) {
            return Vec::new();
        }
        let mut stems = self.collect_stems(word);
        self.rank(&mut stems, word)
    }

    /// Whether `word` is eligible for stemming: non-empty, Turkish letters
    /// only, not protected, and at least two syllables long.
    pub fn proceed_to_stem(&self, word: &str) -> bool {
        !word.is_empty()
            && is_turkish_word(word)
            && !self.word_lists.protected_words.contains(word)
            && count_syllables(word) >= 2
    }

    /// Whether `suffix` may be removed from `word`.
    ///
    /// Harmony-exempt suffixes are always removable, even from protected
    /// words.
    pub fn should_strip(&self, word: &str, suffix: &Suffix) -> bool {
        (!self.word_lists.protected_words.contains(word)
            && suffix.check_harmony()
            && (word_has_vowel_harmony(word)
                || self.word_lists.vowel_harmony_exceptions.contains(word)))
            || !suffix.check_harmony()
    }

    /// Run the three automata in order, pooling their stems.
    ///
    /// The noun and derivational stages are seeded with every stem found so
    /// far plus the original word.
    pub fn collect_stems(&self, word: &str) -> StemSet {
        let mut stems = StemSet::new();
        self.nominal_verb_strip(word, &mut stems);
        for category in [Category::Noun, Category::Derivational] {
            let seeds: Vec<String> = stems
                .iter()
                .cloned()
                .chain(std::iter::once(word.to_string()))
                .collect();
            for seed in &seeds {
                self.strip_category(category, seed, &mut stems);
            }
        }
        debug!(word, candidates = stems.len(), "collected stems");
        stems
    }

    pub fn nominal_verb_strip(&self, word: &str, stems: &mut StemSet) {
        self.strip_category(Category::NominalVerb, word, stems);
    }

    pub fn noun_strip(&self, word: &str, stems: &mut StemSet) {
        self.strip_category(Category::Noun, word, stems);
    }

    pub fn derivational_strip(&self, word: &str, stems: &mut StemSet) {
        self.strip_category(Category::Derivational, word, stems);
    }

    /// Add every stem the automaton of `category` reaches from `word`.
    pub fn strip_category(&self, category: Category, word: &str, stems: &mut StemSet) {
        self.automata.get(category).strip(word, self, stems);
    }
}

impl SuffixStripper for TurkishStemmer {
    /// Remove `suffix` from `word`, then drop the suffix's buffer letter if
    /// the word now ends with one.
    ///
    /// A buffer letter in an invalid position cancels the whole removal and
    /// returns `word` unchanged. The buffer letter is checked even when the
    /// suffix itself was not removed.
    fn strip_suffix(&self, word: &str, suffix: &Suffix) -> String {
        let stripped = if self.should_strip(word, suffix) {
            suffix.strip(word).unwrap_or(word)
        } else {
            word
        };
        match suffix.optional_letter(stripped) {
            Some(letter) if is_valid_optional_letter(stripped, letter) => {
                stripped[..stripped.len() - letter.len_utf8()].to_string()
            }
            Some(_) => word.to_string(),
            None => stripped.to_string(),
        }
    }
}
