use rustc_hash::FxHashMap;

use crate::Label;
use crate::Symbol;

/// The index of a state in the state arena of an automaton.
pub type StateIndex = usize;

/// A single named state of an automaton, containing its outgoing transitions
/// grouped by label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State<S: Symbol> {
    name: String,
    transitions: FxHashMap<Label<S>, Vec<StateIndex>>,
}

impl<S: Symbol> State<S> {
    /// Creates a state from the given (label, destination) pairs. The order of
    /// destinations for the same label is preserved.
    pub fn new(name: String, outgoing: impl IntoIterator<Item = (Label<S>, StateIndex)>) -> Self {
        let mut transitions: FxHashMap<Label<S>, Vec<StateIndex>> = FxHashMap::default();
        for (label, to) in outgoing {
            transitions.entry(label).or_default().push(to);
        }

        Self { name, transitions }
    }

    /// Returns the name of this state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the destinations reachable with the given label, possibly empty.
    pub fn destinations(&self, label: &Label<S>) -> &[StateIndex] {
        self.transitions.get(label).map_or(&[], |destinations| destinations.as_slice())
    }

    /// Returns the outgoing transitions as (label, destinations), ordered by label.
    pub fn outgoing(&self) -> impl Iterator<Item = (&Label<S>, &[StateIndex])> {
        let mut outgoing: Vec<_> = self
            .transitions
            .iter()
            .map(|(label, destinations)| (label, destinations.as_slice()))
            .collect();
        outgoing.sort_unstable_by(|left, right| left.0.cmp(right.0));
        outgoing.into_iter()
    }

    /// Returns the number of outgoing transitions.
    pub fn num_of_transitions(&self) -> usize {
        self.transitions.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_state_groups_by_label() {
        let state = State::new(
            "q1".to_string(),
            vec![
                (Label::Symbol('1'), 1),
                (Label::Symbol('0'), 0),
                (Label::Symbol('1'), 2),
                (Label::Epsilon, 3),
            ],
        );

        assert_eq!(state.name(), "q1");
        assert_eq!(state.destinations(&Label::Symbol('1')), &[1, 2]);
        assert_eq!(state.destinations(&Label::Symbol('0')), &[0]);
        assert_eq!(state.destinations(&Label::Epsilon), &[3]);
        assert!(state.destinations(&Label::Symbol('2')).is_empty());
        assert_eq!(state.num_of_transitions(), 4);

        let labels: Vec<_> = state.outgoing().map(|(label, _)| label.clone()).collect();
        assert_eq!(labels, vec![Label::Epsilon, Label::Symbol('0'), Label::Symbol('1')]);
    }

    #[test]
    fn test_state_without_transitions() {
        let state: State<char> = State::new("sink".to_string(), Vec::new());

        assert_eq!(state.num_of_transitions(), 0);
        assert!(state.destinations(&Label::Epsilon).is_empty());
        assert_eq!(state.outgoing().count(), 0);
    }
}
