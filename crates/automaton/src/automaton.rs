use std::fmt;

use log::debug;
use log::trace;
use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;

use fasim_utilities::VecSet;

use crate::AutomatonError;
use crate::AutomatonSpecification;
use crate::IntoWord;
use crate::Label;
use crate::State;
use crate::StateIndex;
use crate::Symbol;

/// A finite automaton, deterministic or not, that consumes its input one
/// symbol at a time and keeps track of the states it currently occupies.
///
/// The active states are kept as a multiset, every entry counts the number of
/// derivation paths that currently occupy that state. Next to it a counter
/// keeps the sum of the counts of the accepting states, which is updated
/// incrementally instead of recomputed after every symbol.
pub struct Automaton<S: Symbol> {
    /// The description this automaton was constructed from, used by `reset`.
    specification: AutomatonSpecification<S>,

    alphabet: VecSet<S>,
    accept_states: VecSet<String>,

    /// The state arena, and the index of every state name.
    states: Vec<State<S>>,
    state_indices: FxHashMap<String, StateIndex>,
    accepting: Vec<bool>,
    initial_state: StateIndex,

    configuration: Configuration,
}

/// The simulation state of an automaton.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Configuration {
    /// Every active state with its reference count, which is always positive.
    active: FxHashMap<StateIndex, usize>,

    /// The sum of the reference counts of the accepting states in `active`.
    accept_hits: usize,
}

impl Configuration {
    /// Adds one reference to the given state.
    fn activate(&mut self, state: StateIndex, accepting: bool) {
        *self.active.entry(state).or_insert(0) += 1;
        if accepting {
            self.accept_hits += 1;
        }
    }

    /// Removes one reference to the given state, which is no longer active
    /// once its last reference is gone.
    fn deactivate(&mut self, state: StateIndex, accepting: bool) {
        if let Some(count) = self.active.get_mut(&state) {
            *count -= 1;
            if *count == 0 {
                self.active.remove(&state);
            }

            if accepting {
                self.accept_hits -= 1;
            }
        }
    }
}

/// Collects the outgoing transitions per state name before the states are
/// materialized.
struct StateAccumulator<S: Symbol> {
    indices: FxHashMap<String, StateIndex>,
    pending: Vec<(String, Vec<(Label<S>, StateIndex)>)>,
}

impl<S: Symbol> StateAccumulator<S> {
    fn new() -> Self {
        Self {
            indices: FxHashMap::default(),
            pending: Vec::new(),
        }
    }

    /// Returns the index of the state with the given name, introduces an
    /// entry without transitions when it was not seen before.
    fn index(&mut self, name: &str) -> StateIndex {
        if let Some(index) = self.indices.get(name) {
            return *index;
        }

        let index = self.pending.len();
        self.indices.insert(name.to_string(), index);
        self.pending.push((name.to_string(), Vec::new()));
        index
    }

    fn add_transition(&mut self, from: &str, label: Label<S>, to: &str) {
        let from = self.index(from);
        let to = self.index(to);
        self.pending[from].1.push((label, to));
    }

    fn finish(self) -> (Vec<State<S>>, FxHashMap<String, StateIndex>) {
        let states = self
            .pending
            .into_iter()
            .map(|(name, outgoing)| State::new(name, outgoing))
            .collect();

        (states, self.indices)
    }
}

impl<S: Symbol> Automaton<S> {
    /// Creates the automaton described by the given specification, in its
    /// initial configuration.
    pub fn new(specification: AutomatonSpecification<S>) -> Self {
        let alphabet: VecSet<S> = specification.alphabet.iter().cloned().collect();

        let mut accumulator = StateAccumulator::new();
        for (from, label, to) in &specification.relation {
            accumulator.add_transition(from, label.clone(), to);
        }

        // An initial state that does not occur in the relation has no transitions.
        let initial_state = accumulator.index(&specification.initial_state);
        let (states, state_indices) = accumulator.finish();

        let accept_states: VecSet<String> = specification.accept_states.iter().cloned().collect();
        let mut accepting = vec![false; states.len()];
        for name in &accept_states {
            if let Some(index) = state_indices.get(name) {
                accepting[*index] = true;
            }
        }

        let mut configuration = Configuration::default();
        configuration.activate(initial_state, accepting[initial_state]);
        expand_epsilon_closure(&states, &accepting, &mut configuration, initial_state);

        debug!(
            "Constructed automaton with {} states, {} transitions and {} symbols",
            states.len(),
            specification.relation.len(),
            alphabet.len()
        );

        Self {
            specification,
            alphabet,
            accept_states,
            states,
            state_indices,
            accepting,
            initial_state,
            configuration,
        }
    }

    /// Consumes the given word one symbol at a time and returns the names of
    /// the states that are active afterwards.
    ///
    /// Symbols that are not part of the alphabet are ignored. Fails when the
    /// input cannot be interpreted as a sequence of symbols, in which case the
    /// configuration is unchanged.
    pub fn read(&mut self, word: impl IntoWord<S>) -> Result<VecSet<&str>, AutomatonError> {
        let word = word.into_word()?;

        for symbol in &word {
            self.step(symbol);
        }

        Ok(self.current_states())
    }

    /// Restores the configuration right after construction.
    pub fn reset(&mut self) {
        debug!("Resetting automaton");
        *self = Self::new(self.specification.clone());
    }

    /// Returns true iff at least one of the active states is accepting.
    pub fn accepted(&self) -> bool {
        self.configuration.accept_hits > 0
    }

    /// Returns the names of the active states.
    pub fn current_states(&self) -> VecSet<&str> {
        self.configuration
            .active
            .keys()
            .map(|index| self.states[*index].name())
            .collect()
    }

    /// Returns the declared accept states.
    pub fn accept_states(&self) -> &VecSet<String> {
        &self.accept_states
    }

    /// Returns the declared input symbols.
    pub fn alphabet(&self) -> &VecSet<S> {
        &self.alphabet
    }

    /// Returns the name of the initial state.
    pub fn initial_state(&self) -> &str {
        self.states[self.initial_state].name()
    }

    /// Returns the specification this automaton was constructed from.
    pub fn specification(&self) -> &AutomatonSpecification<S> {
        &self.specification
    }

    /// Returns the index of the state with the given name.
    pub fn state_index(&self, name: &str) -> Option<StateIndex> {
        self.state_indices.get(name).copied()
    }

    /// Returns access to the given state.
    pub fn state(&self, index: StateIndex) -> &State<S> {
        &self.states[index]
    }

    /// Iterate over all (state_index, state) in the automaton.
    pub fn iter_states(&self) -> impl Iterator<Item = (StateIndex, &State<S>)> + '_ {
        self.states.iter().enumerate()
    }

    /// Returns the number of states.
    pub fn num_of_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of transitions.
    pub fn num_of_transitions(&self) -> usize {
        self.specification.relation.len()
    }

    /// Consumes a single symbol.
    ///
    /// Every state that is active at the start loses one reference, and every
    /// destination reached with the symbol gains one, followed by its epsilon
    /// closure. Note that a state with multiple references stays active with
    /// one reference less.
    fn step(&mut self, symbol: &S) {
        if !self.alphabet.contains(symbol) {
            trace!("Ignoring symbol {symbol:?} that is not in the alphabet");
            return;
        }

        trace!("Reading symbol {symbol:?}");
        let label = Label::Symbol(symbol.clone());

        // States activated during this step are not consumed by it.
        let sources: Vec<StateIndex> = self.configuration.active.keys().copied().collect();

        for source in sources {
            self.configuration.deactivate(source, self.accepting[source]);

            for to in self.states[source].destinations(&label) {
                trace!(
                    "{} --[{symbol:?}]-> {}",
                    self.states[source].name(),
                    self.states[*to].name()
                );

                self.configuration.activate(*to, self.accepting[*to]);
                expand_epsilon_closure(&self.states, &self.accepting, &mut self.configuration, *to);
            }
        }

        debug_assert_eq!(
            self.configuration.accept_hits,
            self.count_accept_hits(),
            "The accept counter is out of sync with the active states"
        );
    }

    /// Recomputes the accept counter from the active states.
    fn count_accept_hits(&self) -> usize {
        self.configuration
            .active
            .iter()
            .filter(|(state, _)| self.accepting[**state])
            .map(|(_, count)| count)
            .sum()
    }
}

/// Adds a reference to every state reachable with epsilon transitions from
/// the given state, one per traversed transition.
///
/// The visited set is local to this call, every state is expanded at most
/// once so that epsilon cycles terminate.
fn expand_epsilon_closure<S: Symbol>(
    states: &[State<S>],
    accepting: &[bool],
    configuration: &mut Configuration,
    seed: StateIndex,
) {
    let mut visited: FxHashSet<StateIndex> = FxHashSet::default();
    let mut stack = vec![seed];

    while let Some(state_index) = stack.pop() {
        if !visited.insert(state_index) {
            continue;
        }

        for to in states[state_index].destinations(&Label::Epsilon) {
            trace!(
                "{} --[epsilon]-> {}",
                states[state_index].name(),
                states[*to].name()
            );

            configuration.activate(*to, accepting[*to]);
            if !visited.contains(to) {
                stack.push(*to);
            }
        }
    }
}

impl<S: Symbol> fmt::Display for Automaton<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Print some information about the automaton.
        writeln!(f, "Number of states: {}", self.num_of_states())?;
        writeln!(f, "Number of symbols: {}", self.alphabet.len())?;
        write!(f, "Number of transitions: {}", self.num_of_transitions())
    }
}

impl<S: Symbol> fmt::Debug for Automaton<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        writeln!(f, "Initial state: {}", self.initial_state())?;
        writeln!(f, "Accept states: {:?}", self.accept_states)?;
        writeln!(f, "Current states: {:?}", self.current_states())?;

        for (_, state) in self.iter_states() {
            for (label, destinations) in state.outgoing() {
                for to in destinations {
                    writeln!(f, "{} --[{label:?}]-> {}", state.name(), self.states[*to].name())?;
                }
            }
        }

        Ok(())
    }
}
