// Candidate selection: softening and ranking of the stem pool.
// Origin: TurkishStemmer.cs (PostProcess, LastConsonant)

use std::cmp::Ordering;

use govde_core::character::{count_syllables, harden_last_consonant};
use govde_fsm::StemSet;
use tracing::debug;

use super::TurkishStemmer;

/// Typical length of a Turkish stem, in letters.
pub const AVERAGE_STEM_SIZE: usize = 4;

impl TurkishStemmer {
    /// Restore the voiceless final consonant of a stem (b→p, c→ç, d→t, ğ→k)
    /// unless the stem is a last-consonant exception.
    pub fn last_consonant(&self, word: &str) -> String {
        if self.word_lists.last_consonant_exceptions.contains(word) {
            return word.to_string();
        }
        harden_last_consonant(word)
    }

    /// Pick the best stem from `stems`, or `original` if none qualifies.
    ///
    /// `original` is removed from `stems`.
    pub fn post_process(&self, stems: &mut StemSet, original: &str) -> String {
        let stem = self
            .rank(stems, original)
            .into_iter()
            .next()
            .unwrap_or_else(|| original.to_string());
        debug!(word = original, stem = %stem, "selected stem");
        stem
    }

    /// Soften the candidates and sort them best first.
    pub(crate) fn rank(&self, stems: &mut StemSet, original: &str) -> Vec<String> {
        stems.remove(original);

        let finals: StemSet = stems
            .iter()
            .filter(|s| count_syllables(s) > 0)
            .map(|s| self.last_consonant(s))
            .collect();

        let mut ranked: Vec<String> = finals.into_iter().collect();
        ranked.sort_by(|a, b| self.compare_stems(a, b));
        ranked
    }

    /// Average-size exceptions first, then distance from
    /// [`AVERAGE_STEM_SIZE`], then length. Remaining ties are broken
    /// alphabetically so the order does not depend on hashing.
    fn compare_stems(&self, a: &str, b: &str) -> Ordering {
        let exceptions = &self.word_lists.average_stem_size_exceptions;
        let a_len = a.chars().count();
        let b_len = b.chars().count();
        let a_dist = a_len.abs_diff(AVERAGE_STEM_SIZE);
        let b_dist = b_len.abs_diff(AVERAGE_STEM_SIZE);
        exceptions
            .contains(b)
            .cmp(&exceptions.contains(a))
            .then_with(|| a_dist.cmp(&b_dist))
            .then_with(|| a_len.cmp(&b_len))
            .then_with(|| a.cmp(b))
    }
}
