// Search edges held in the exploration worklist.

use crate::state::StateId;
use crate::suffix::Suffix;

/// One candidate application of a suffix rule: removing `suffix` from `word`
/// moves the automaton from `from` to `to`.
///
/// `marked` flags a provisional edge that continues an unconfirmed
/// intermediate path, or that competes with one. Marked edges are dropped
/// as soon as any path reaches a final state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub word: String,
    pub suffix: &'static Suffix,
    pub marked: bool,
}

impl Transition {
    pub fn new(
        from: StateId,
        to: StateId,
        word: impl Into<String>,
        suffix: &'static Suffix,
        marked: bool,
    ) -> Self {
        Self {
            from,
            to,
            word: word.into(),
            suffix,
            marked,
        }
    }

    /// Whether `other` follows the same automaton edge (same start and
    /// target state), regardless of word or suffix.
    #[inline]
    pub fn is_similar(&self, other: &Transition) -> bool {
        self.from == other.from && self.to == other.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DA: Suffix = Suffix::new(13, "-DA", &["da", "de", "ta", "te"], &[], true);
    static YA: Suffix = Suffix::new(11, "-(y)A", &["a", "e"], &['y'], true);

    #[test]
    fn similar_ignores_word_and_suffix() {
        let a = Transition::new(0, 1, "evlerde", &DA, false);
        let b = Transition::new(0, 1, "evlerd", &YA, true);
        let c = Transition::new(0, 2, "evlerde", &DA, false);
        assert!(a.is_similar(&b));
        assert!(b.is_similar(&a));
        assert!(!a.is_similar(&c));
    }

    #[test]
    fn new_keeps_marking() {
        let t = Transition::new(3, 4, String::from("ev"), &DA, true);
        assert!(t.marked);
        assert_eq!(t.word, "ev");
        assert_eq!(t.suffix.name(), "-DA");
    }
}
