//! Suffix-stripping automata.
//!
//! This crate provides the language-independent half of the stemmer: suffix
//! rules, hand-authored state tables validated at construction time, and the
//! worklist search that walks a table over a word collecting every stem that
//! reaches a final state.
//!
//! # Architecture
//!
//! - [`suffix`] -- Suffix rules (literal alternatives, optional letter, harmony flag)
//! - [`state`] -- States, the explicit transition table and its builder
//! - [`transition`] -- Search edges held in the worklist
//! - [`search`] -- FIFO exploration with duplicate and dead-path pruning

pub mod search;
pub mod state;
pub mod suffix;
pub mod transition;

pub use search::SuffixStripper;
pub use state::{Automaton, AutomatonBuilder, State, StateId, StateKind};
pub use suffix::{Suffix, SuffixId};
pub use transition::Transition;

/// Set of candidate stems accumulated while stripping.
pub type StemSet = hashbrown::HashSet<String>;

/// Error type for malformed automaton tables.
///
/// These are programming errors in the table definitions and are reported
/// once, when an [`Automaton`] is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FsmError {
    #[error("automaton {machine} has no initial state")]
    NoInitialState { machine: &'static str },
    #[error("automaton {machine} has two initial states: {first} and {second}")]
    MultipleInitialStates {
        machine: &'static str,
        first: char,
        second: char,
    },
    #[error("automaton {machine} defines state {label} twice")]
    DuplicateState { machine: &'static str, label: char },
    #[error("automaton {machine} references unknown state {label}")]
    UnknownState { machine: &'static str, label: char },
    #[error("automaton {machine} catalog defines suffix id {id} twice")]
    DuplicateSuffixId { machine: &'static str, id: SuffixId },
    #[error("state {label} of automaton {machine} offers unknown suffix id {id}")]
    UnknownSuffix {
        machine: &'static str,
        label: char,
        id: SuffixId,
    },
    #[error("automaton {machine} has an edge on unoffered suffix {id} at {label}")]
    EdgeNotOffered {
        machine: &'static str,
        label: char,
        id: SuffixId,
    },
    #[error("automaton {machine} has two edges from {label} on suffix id {id}")]
    DuplicateEdge {
        machine: &'static str,
        label: char,
        id: SuffixId,
    },
}
