// Worklist exploration of a suffix automaton.
//
// Starting from a state, every offered suffix that matches the word becomes a
// pending transition. Transitions are processed in FIFO order, so the order in
// which a state offers its suffixes decides which alternative is tried first.
// Reaching a final state prunes every pending transition over the same edge
// together with all marked (provisional) transitions; reaching an intermediate
// state marks the competing transitions over the same edge and continues with
// marked transitions of its own.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::StemSet;
use crate::state::{Automaton, StateId};
use crate::suffix::Suffix;
use crate::transition::Transition;

/// Decides what is left of a word once a suffix is removed.
///
/// Returning the word unchanged vetoes the transition: the search discards it
/// without following the target state.
pub trait SuffixStripper {
    fn strip_suffix(&self, word: &str, suffix: &Suffix) -> String;
}

impl Automaton {
    /// Append a transition for every suffix offered by `state` that matches
    /// `word`. Suffixes without an outgoing edge produce nothing.
    pub(crate) fn push_transitions(
        &self,
        state: StateId,
        word: &str,
        marked: bool,
        worklist: &mut VecDeque<Transition>,
    ) {
        for suffix in self.outgoing(state) {
            if !suffix.matches(word) {
                continue;
            }
            if let Some(next) = self.next_state(state, suffix.id()) {
                worklist.push_back(Transition::new(state, next, word, suffix, marked));
            }
        }
    }

    /// Collect every stem of `word` reachable from the initial state into
    /// `stems`.
    pub fn strip<S>(&self, word: &str, stripper: &S, stems: &mut StemSet)
    where
        S: SuffixStripper + ?Sized,
    {
        self.strip_from(self.initial_state(), word, stripper, stems);
    }

    /// Collect every stem of `word` reachable from `start` into `stems`.
    pub(crate) fn strip_from<S>(
        &self,
        start: StateId,
        word: &str,
        stripper: &S,
        stems: &mut StemSet,
    ) where
        S: SuffixStripper + ?Sized,
    {
        let mut worklist = VecDeque::new();
        self.push_transitions(start, word, false, &mut worklist);

        while let Some(transition) = worklist.pop_front() {
            let stem = stripper.strip_suffix(&transition.word, transition.suffix);
            trace!(
                machine = self.name(),
                from = %self.state(transition.from).label(),
                to = %self.state(transition.to).label(),
                suffix = transition.suffix.name(),
                word = %transition.word,
                stem = %stem,
                marked = transition.marked,
                "transition"
            );

            if stem == transition.word {
                continue;
            }

            if self.state(transition.to).is_final() {
                worklist.retain(|other| !(other.marked || transition.is_similar(other)));
                debug!(machine = self.name(), stem = %stem, "final state reached");
                self.push_transitions(transition.to, &stem, false, &mut worklist);
                stems.insert(stem);
            } else {
                for other in worklist.iter_mut().filter(|o| transition.is_similar(o)) {
                    other.marked = true;
                }
                self.push_transitions(transition.to, &stem, true, &mut worklist);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateKind;
    use proptest::prelude::*;

    /// Removes the matching form, nothing else.
    struct Plain;

    impl SuffixStripper for Plain {
        fn strip_suffix(&self, word: &str, suffix: &Suffix) -> String {
            suffix.strip(word).unwrap_or(word).to_string()
        }
    }

    /// Refuses every removal.
    struct Veto;

    impl SuffixStripper for Veto {
        fn strip_suffix(&self, word: &str, _suffix: &Suffix) -> String {
            word.to_string()
        }
    }

    static CATALOG: &[Suffix] = &[
        Suffix::new(2, "-DA", &["da", "de"], &[], true),
        Suffix::new(6, "-rDA", &["rda", "rde"], &[], true),
        Suffix::new(3, "-(y)A", &["a", "e"], &['y'], true),
        Suffix::new(1, "-lAr", &["lar", "ler"], &[], true),
        Suffix::new(7, "-d", &["d"], &[], true),
    ];

    fn strip_all(automaton: &Automaton, word: &str) -> Vec<String> {
        let mut stems = StemSet::new();
        automaton.strip(word, &Plain, &mut stems);
        let mut v: Vec<String> = stems.into_iter().collect();
        v.sort();
        v
    }

    #[test]
    fn seeds_follow_offer_order() {
        let a = Automaton::builder("Seeds", CATALOG)
            .state_offering_all('A', StateKind::Initial)
            .state('B', StateKind::Final, &[])
            .edges('A', &[2, 3, 1], 'B')
            .build()
            .unwrap();
        let mut worklist = VecDeque::new();
        a.push_transitions(0, "evlerde", false, &mut worklist);
        let names: Vec<_> = worklist.iter().map(|t| t.suffix.name()).collect();
        // -rDA has no edge, -lAr does not match
        assert_eq!(names, vec!["-DA", "-(y)A"]);
        assert!(worklist.iter().all(|t| !t.marked && t.word == "evlerde"));
    }

    #[test]
    fn final_state_prunes_parallel_edges() {
        let a = Automaton::builder("Parallel", CATALOG)
            .state('A', StateKind::Initial, &[2, 3])
            .state('B', StateKind::Final, &[1])
            .state('C', StateKind::Final, &[])
            .edges('A', &[2, 3], 'B')
            .edges('B', &[1], 'C')
            .build()
            .unwrap();
        // -(y)A would give "evlerd", but it shares the A->B edge with -DA
        assert_eq!(strip_all(&a, "evlerde"), vec!["ev", "evler"]);
    }

    #[test]
    fn distinct_edges_are_all_explored() {
        let a = Automaton::builder("Distinct", CATALOG)
            .state('A', StateKind::Initial, &[2, 3])
            .state('B', StateKind::Final, &[1])
            .state('C', StateKind::Final, &[])
            .state('D', StateKind::Final, &[])
            .edges('A', &[2], 'B')
            .edges('A', &[3], 'D')
            .edges('B', &[1], 'C')
            .build()
            .unwrap();
        assert_eq!(strip_all(&a, "evlerde"), vec!["ev", "evler", "evlerd"]);
    }

    #[test]
    fn intermediate_path_completes_when_unchallenged() {
        let a = Automaton::builder("Intermediate", CATALOG)
            .state('A', StateKind::Initial, &[2])
            .state('M', StateKind::Intermediate, &[1])
            .state('F', StateKind::Final, &[])
            .edges('A', &[2], 'M')
            .edges('M', &[1], 'F')
            .build()
            .unwrap();
        // the intermediate stem "evler" is not a candidate
        assert_eq!(strip_all(&a, "evlerde"), vec!["ev"]);
    }

    #[test]
    fn final_state_drops_marked_continuations() {
        let a = Automaton::builder("Marked", CATALOG)
            .state('A', StateKind::Initial, &[2, 3])
            .state('M', StateKind::Intermediate, &[1])
            .state('F', StateKind::Final, &[])
            .state('G', StateKind::Final, &[])
            .edges('A', &[2], 'M')
            .edges('A', &[3], 'F')
            .edges('M', &[1], 'G')
            .build()
            .unwrap();
        // A->M leaves a marked M->G continuation that A->F then discards
        assert_eq!(strip_all(&a, "evlerde"), vec!["evlerd"]);
    }

    #[test]
    fn intermediate_state_marks_competing_edges() {
        let a = Automaton::builder("Competing", CATALOG)
            .state('A', StateKind::Initial, &[2, 6, 3])
            .state('M', StateKind::Intermediate, &[1, 7])
            .state('F', StateKind::Final, &[])
            .state('G', StateKind::Final, &[])
            .edges('A', &[2, 3], 'M')
            .edges('A', &[6], 'F')
            .edges('M', &[1, 7], 'G')
            .build()
            .unwrap();
        // -DA reaches M and marks the pending -(y)A over A->M; -rDA then
        // reaches F and drops both the marked -(y)A and the marked M->G
        assert_eq!(strip_all(&a, "evlerde"), vec!["evle"]);
    }

    #[test]
    fn vetoed_transitions_are_discarded() {
        let a = Automaton::builder("Veto", CATALOG)
            .state_offering_all('A', StateKind::Initial)
            .state('B', StateKind::Final, &[])
            .edges('A', &[2, 3], 'B')
            .build()
            .unwrap();
        let mut stems = StemSet::new();
        a.strip("evlerde", &Veto, &mut stems);
        assert!(stems.is_empty());
    }

    #[test]
    fn stems_accumulate_into_shared_set() {
        let a = Automaton::builder("Shared", CATALOG)
            .state('A', StateKind::Initial, &[1])
            .state('B', StateKind::Final, &[])
            .edges('A', &[1], 'B')
            .build()
            .unwrap();
        let mut stems = StemSet::new();
        stems.insert("existing".to_string());
        a.strip("evler", &Plain, &mut stems);
        a.strip("kitaplar", &Plain, &mut stems);
        assert_eq!(stems.len(), 3);
        assert!(stems.contains("ev"));
        assert!(stems.contains("kitap"));
    }

    proptest! {
        #[test]
        fn stems_are_proper_prefixes(word in "[adelry]{0,12}") {
            let a = Automaton::builder("Prop", CATALOG)
                .state_offering_all('A', StateKind::Initial)
                .state('M', StateKind::Intermediate, &[1, 7])
                .state('F', StateKind::Final, &[1, 2, 3])
                .edges('A', &[2, 6], 'F')
                .edges('A', &[3, 1], 'M')
                .edges('M', &[1, 7], 'F')
                .edges('F', &[1, 2, 3], 'F')
                .build()
                .unwrap();
            let mut stems = StemSet::new();
            a.strip(&word, &Plain, &mut stems);
            for stem in &stems {
                prop_assert!(word.starts_with(stem.as_str()));
                prop_assert!(stem.len() < word.len());
            }
        }
    }
}
