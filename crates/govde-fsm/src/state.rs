// Automaton states and the explicit transition table.
//
// A table is written once as data (states, the suffixes each state offers,
// and edges keyed by suffix id), validated by `AutomatonBuilder::build`, and
// read-only afterwards.

use hashbrown::HashMap;

use crate::FsmError;
use crate::suffix::{Suffix, SuffixId};

/// Index of a state within its automaton.
pub type StateId = usize;

/// Initial/final flags of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    Initial,
    InitialFinal,
    Intermediate,
    Final,
}

impl StateKind {
    #[inline]
    pub fn is_initial(self) -> bool {
        matches!(self, StateKind::Initial | StateKind::InitialFinal)
    }

    #[inline]
    pub fn is_final(self) -> bool {
        matches!(self, StateKind::InitialFinal | StateKind::Final)
    }
}

/// A node of an automaton.
#[derive(Debug, Clone)]
pub struct State {
    label: char,
    kind: StateKind,
    /// Offered suffixes as indices into the catalog, in trial order.
    suffixes: Vec<usize>,
}

impl State {
    #[inline]
    pub fn label(&self) -> char {
        self.label
    }

    #[inline]
    pub fn is_initial(&self) -> bool {
        self.kind.is_initial()
    }

    #[inline]
    pub fn is_final(&self) -> bool {
        self.kind.is_final()
    }
}

/// A validated suffix automaton.
#[derive(Debug, Clone)]
pub struct Automaton {
    name: &'static str,
    catalog: &'static [Suffix],
    states: Vec<State>,
    initial: StateId,
    transitions: HashMap<(StateId, SuffixId), StateId>,
}

impl Automaton {
    /// Start describing an automaton over the given suffix catalog.
    pub fn builder(name: &'static str, catalog: &'static [Suffix]) -> AutomatonBuilder {
        AutomatonBuilder {
            name,
            catalog,
            states: Vec::new(),
            edges: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn catalog(&self) -> &'static [Suffix] {
        self.catalog
    }

    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// # Panics
    ///
    /// Panics if `id` is not a state of this automaton.
    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    #[inline]
    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    /// Look up a state by its label.
    pub fn state_by_label(&self, label: char) -> Option<StateId> {
        self.states.iter().position(|s| s.label == label)
    }

    /// The suffixes offered by a state, in trial order.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a state of this automaton.
    pub fn outgoing(&self, id: StateId) -> impl Iterator<Item = &'static Suffix> + '_ {
        let catalog = self.catalog;
        self.states[id].suffixes.iter().map(move |&i| &catalog[i])
    }

    /// The state reached from `from` by removing suffix `suffix`, or `None`
    /// if the automaton makes no progress past that suffix.
    #[inline]
    pub fn next_state(&self, from: StateId, suffix: SuffixId) -> Option<StateId> {
        self.transitions.get(&(from, suffix)).copied()
    }
}

/// Outgoing suffix list of a state under construction.
#[derive(Debug, Clone)]
enum Offered {
    /// The whole catalog, in catalog order.
    All,
    Only(Vec<SuffixId>),
}

#[derive(Debug, Clone)]
struct PendingState {
    label: char,
    kind: StateKind,
    offered: Offered,
}

/// Builder for [`Automaton`]. States are numbered in declaration order.
#[derive(Debug, Clone)]
pub struct AutomatonBuilder {
    name: &'static str,
    catalog: &'static [Suffix],
    states: Vec<PendingState>,
    edges: Vec<(char, SuffixId, char)>,
}

impl AutomatonBuilder {
    /// Declare a state offering the listed suffixes, tried in the given order.
    /// Repeated ids are kept.
    pub fn state(mut self, label: char, kind: StateKind, suffixes: &[SuffixId]) -> Self {
        self.states.push(PendingState {
            label,
            kind,
            offered: Offered::Only(suffixes.to_vec()),
        });
        self
    }

    /// Declare a state offering every suffix of the catalog.
    pub fn state_offering_all(mut self, label: char, kind: StateKind) -> Self {
        self.states.push(PendingState {
            label,
            kind,
            offered: Offered::All,
        });
        self
    }

    /// Declare that removing any of `suffixes` in state `from` leads to `to`.
    pub fn edges(mut self, from: char, suffixes: &[SuffixId], to: char) -> Self {
        self.edges.extend(suffixes.iter().map(|&id| (from, id, to)));
        self
    }

    /// Validate the table and build the automaton.
    pub fn build(self) -> Result<Automaton, FsmError> {
        let machine = self.name;

        let mut catalog_index: HashMap<SuffixId, usize> = HashMap::new();
        for (i, suffix) in self.catalog.iter().enumerate() {
            if catalog_index.insert(suffix.id(), i).is_some() {
                return Err(FsmError::DuplicateSuffixId {
                    machine,
                    id: suffix.id(),
                });
            }
        }

        let mut labels: HashMap<char, StateId> = HashMap::new();
        let mut states: Vec<State> = Vec::with_capacity(self.states.len());
        let mut initial: Option<StateId> = None;

        for (id, pending) in self.states.into_iter().enumerate() {
            if labels.insert(pending.label, id).is_some() {
                return Err(FsmError::DuplicateState {
                    machine,
                    label: pending.label,
                });
            }
            if pending.kind.is_initial() {
                if let Some(first) = initial {
                    return Err(FsmError::MultipleInitialStates {
                        machine,
                        first: states[first].label,
                        second: pending.label,
                    });
                }
                initial = Some(id);
            }
            let suffixes = match pending.offered {
                Offered::All => (0..self.catalog.len()).collect(),
                Offered::Only(ids) => ids
                    .into_iter()
                    .map(|sid| {
                        catalog_index
                            .get(&sid)
                            .copied()
                            .ok_or(FsmError::UnknownSuffix {
                                machine,
                                label: pending.label,
                                id: sid,
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            };
            states.push(State {
                label: pending.label,
                kind: pending.kind,
                suffixes,
            });
        }

        let initial = initial.ok_or(FsmError::NoInitialState { machine })?;

        let lookup = |label: char| {
            labels
                .get(&label)
                .copied()
                .ok_or(FsmError::UnknownState { machine, label })
        };

        let mut transitions = HashMap::with_capacity(self.edges.len());
        for (from, id, to) in self.edges {
            let from_id = lookup(from)?;
            let to_id = lookup(to)?;
            let offered = states[from_id]
                .suffixes
                .iter()
                .any(|&i| self.catalog[i].id() == id);
            if !offered {
                return Err(FsmError::EdgeNotOffered {
                    machine,
                    label: from,
                    id,
                });
            }
            if transitions.insert((from_id, id), to_id).is_some() {
                return Err(FsmError::DuplicateEdge {
                    machine,
                    label: from,
                    id,
                });
            }
        }

        Ok(Automaton {
            name: machine,
            catalog: self.catalog,
            states,
            initial,
            transitions,
        })
    }
}
