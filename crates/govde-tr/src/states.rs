// Turkish suffix automata.
// Origin: States/NominalVerbState.cs, NounState.cs, DerivationalState.cs
//
// The tables encode Turkish morphotactics: which suffix may precede which.
// States are named A, B, C, ... per category; a final state is a valid place
// to stop stripping.

use govde_core::enums::Category;
use govde_fsm::{Automaton, FsmError, StateKind};

use crate::suffixes::{derivational, nominal_verb, noun};

/// Nominal verb automaton (8 states, A-H).
pub fn nominal_verb_automaton() -> Result<Automaton, FsmError> {
    use nominal_verb::*;

    Automaton::builder(Category::NominalVerb.name(), SUFFIXES)
        .state_offering_all('A', StateKind::Initial)
        .state('B', StateKind::Final, &[S14])
        .state('C', StateKind::Final, &[S10, S12, S13, S14])
        .state('D', StateKind::Intermediate, &[S12, S13])
        .state('E', StateKind::Final, &[S1, S2, S3, S4, S5, S14])
        .state('F', StateKind::Final, &[])
        .state('G', StateKind::Intermediate, &[S14])
        .state('H', StateKind::Intermediate, &[S1, S2, S3, S4, S5, S14])
        // A
        .edges('A', &[S1, S2, S3, S4], 'B')
        .edges('A', &[S5], 'C')
        .edges('A', &[S6, S7, S8, S9], 'D')
        .edges('A', &[S10], 'E')
        .edges('A', &[S12, S13, S14, S15], 'F')
        .edges('A', &[S11], 'H')
        // B
        .edges('B', &[S14], 'F')
        // C
        .edges('C', &[S10, S12, S13, S14], 'F')
        // D
        .edges('D', &[S12, S13], 'F')
        // E
        .edges('E', &[S1, S2, S3, S4, S5], 'G')
        .edges('E', &[S14], 'F')
        // G
        .edges('G', &[S14], 'F')
        // H
        .edges('H', &[S1, S2, S3, S4, S5], 'G')
        .edges('H', &[S14], 'F')
        .build()
}

/// Noun automaton (11 states, A-H, K, L, M).
pub fn noun_automaton() -> Result<Automaton, FsmError> {
    use noun::*;

    Automaton::builder(Category::Noun.name(), SUFFIXES)
        .state_offering_all('A', StateKind::InitialFinal)
        .state('B', StateKind::Final, &[S1, S2, S3, S4, S5])
        .state('C', StateKind::Intermediate, &[S6, S7])
        .state('D', StateKind::Intermediate, &[S10, S13, S14])
        .state('E', StateKind::Final, &[S1, S2, S3, S4, S5, S6, S7, S18])
        .state('F', StateKind::Intermediate, &[S6, S7, S18])
        .state('G', StateKind::Final, &[S1, S2, S3, S4, S5, S18])
        .state('H', StateKind::Final, &[S1])
        .state('K', StateKind::Final, &[])
        .state('L', StateKind::Final, &[S18])
        // -(s)U is offered twice; both copies enter the worklist
        .state('M', StateKind::Final, &[S1, S2, S3, S4, S5, S6, S6, S7])
        // A
        .edges('A', &[S8, S11, S13], 'B')
        .edges('A', &[S9, S16], 'C')
        .edges('A', &[S18], 'D')
        .edges('A', &[S10, S17], 'E')
        .edges('A', &[S12, S14], 'F')
        .edges('A', &[S15], 'G')
        .edges('A', &[S2, S3, S4, S5, S6], 'H')
        .edges('A', &[S7], 'K')
        .edges('A', &[S1], 'L')
        .edges('A', &[S19], 'M')
        // B
        .edges('B', &[S1], 'L')
        .edges('B', &[S2, S3, S4, S5], 'H')
        // C
        .edges('C', &[S6], 'H')
        .edges('C', &[S7], 'K')
        // D
        .edges('D', &[S10], 'E')
        .edges('D', &[S13], 'B')
        .edges('D', &[S14], 'F')
        // E
        .edges('E', &[S1], 'L')
        .edges('E', &[S2, S3, S4, S5, S6], 'H')
        .edges('E', &[S7], 'K')
        .edges('E', &[S18], 'D')
        // F
        .edges('F', &[S6], 'H')
        .edges('F', &[S7], 'K')
        .edges('F', &[S18], 'D')
        // G
        .edges('G', &[S1], 'L')
        .edges('G', &[S2, S3, S4, S5], 'H')
        .edges('G', &[S18], 'D')
        // H
        .edges('H', &[S1], 'L')
        // L
        .edges('L', &[S18], 'D')
        // M
        .edges('M', &[S1], 'L')
        .edges('M', &[S2, S3, S4, S5, S6], 'H')
        .edges('M', &[S7], 'K')
        .build()
}

/// Derivational automaton (2 states).
pub fn derivational_automaton() -> Result<Automaton, FsmError> {
    use derivational::*;

    Automaton::builder(Category::Derivational.name(), SUFFIXES)
        .state('A', StateKind::Initial, &[S1])
        .state('B', StateKind::Final, &[])
        .edges('A', &[S1], 'B')
        .build()
}

/// The three Turkish automata, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct Automata {
    nominal_verb: Automaton,
    noun: Automaton,
    derivational: Automaton,
}

impl Automata {
    /// Build and validate all three tables.
    pub fn new() -> Result<Self, FsmError> {
        Ok(Self {
            nominal_verb: nominal_verb_automaton()?,
            noun: noun_automaton()?,
            derivational: derivational_automaton()?,
        })
    }

    pub fn get(&self, category: Category) -> &Automaton {
        match category {
            Category::NominalVerb => &self.nominal_verb,
            Category::Noun => &self.noun,
            Category::Derivational => &self.derivational,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use govde_fsm::SuffixId;

    fn next(a: &Automaton, from: char, suffix: SuffixId) -> Option<char> {
        let from = a.state_by_label(from).unwrap();
        a.next_state(from, suffix).map(|s| a.state(s).label())
    }

    fn labels_where(a: &Automaton, pred: impl Fn(&govde_fsm::State) -> bool) -> String {
        a.states()
            .iter()
            .filter(|s| pred(*s))
            .map(|s| s.label())
            .collect()
    }

    #[test]
    fn all_tables_validate() {
        let automata = Automata::new().unwrap();
        assert_eq!(automata.get(Category::NominalVerb).states().len(), 8);
        assert_eq!(automata.get(Category::Noun).states().len(), 11);
        assert_eq!(automata.get(Category::Derivational).states().len(), 2);
        assert_eq!(automata.get(Category::Noun).name(), "Noun");
    }

    #[test]
    fn nominal_verb_flags() {
        let a = nominal_verb_automaton().unwrap();
        assert_eq!(labels_where(&a, |s| s.is_initial()), "A");
        assert_eq!(labels_where(&a, |s| s.is_final()), "BCEF");
        assert_eq!(a.outgoing(a.initial_state()).count(), 15);
    }

    #[test]
    fn noun_flags() {
        let a = noun_automaton().unwrap();
        assert_eq!(labels_where(&a, |s| s.is_initial()), "A");
        assert_eq!(labels_where(&a, |s| s.is_final()), "ABEGHKLM");
        assert_eq!(a.outgoing(a.initial_state()).count(), 19);
        let m = a.state_by_label('M').unwrap();
        assert_eq!(a.outgoing(m).count(), 8);
    }

    #[test]
    fn derivational_flags() {
        let a = derivational_automaton().unwrap();
        assert_eq!(labels_where(&a, |s| s.is_initial()), "A");
        assert_eq!(labels_where(&a, |s| s.is_final()), "B");
        assert_eq!(next(&a, 'A', derivational::S1), Some('B'));
        assert_eq!(next(&a, 'B', derivational::S1), None);
    }

    #[test]
    fn nominal_verb_person_after_copula() {
        use nominal_verb::*;
        let a = nominal_verb_automaton().unwrap();
        // person marker straight from the word vs. after -DUr / -cAsInA
        assert_eq!(next(&a, 'A', S1), Some('B'));
        assert_eq!(next(&a, 'E', S1), Some('G'));
        assert_eq!(next(&a, 'H', S1), Some('G'));
        assert_eq!(next(&a, 'A', S11), Some('H'));
        assert_eq!(next(&a, 'A', S15), Some('F'));
        assert_eq!(next(&a, 'D', S12), Some('F'));
        assert_eq!(next(&a, 'F', S14), None);
        assert_eq!(next(&a, 'B', S1), None);
    }

    #[test]
    fn noun_case_then_possessive() {
        use noun::*;
        let a = noun_automaton().unwrap();
        assert_eq!(next(&a, 'A', S13), Some('B'));
        assert_eq!(next(&a, 'B', S1), Some('L'));
        assert_eq!(next(&a, 'A', S18), Some('D'));
        assert_eq!(next(&a, 'D', S13), Some('B'));
        assert_eq!(next(&a, 'A', S19), Some('M'));
        assert_eq!(next(&a, 'M', S6), Some('H'));
        assert_eq!(next(&a, 'L', S18), Some('D'));
        assert_eq!(next(&a, 'K', S1), None);
        assert_eq!(next(&a, 'H', S2), None);
    }

    #[test]
    fn every_offered_suffix_has_an_edge() {
        let automata = Automata::new().unwrap();
        for category in Category::ALL {
            let a = automata.get(category);
            for (id, _) in a.states().iter().enumerate() {
                for suffix in a.outgoing(id) {
                    assert!(
                        a.next_state(id, suffix.id()).is_some(),
                        "{} state {} offers {} without an edge",
                        a.name(),
                        a.state(id).label(),
                        suffix.name()
                    );
                }
            }
        }
    }
}
