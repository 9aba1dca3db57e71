use crate::Label;
use crate::Symbol;

/// The immutable description an automaton is constructed, and reset, from.
///
/// Names that are mentioned as accept or initial state, but never occur in
/// the relation, are not rejected. Such states simply have no transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutomatonSpecification<S: Symbol> {
    pub alphabet: Vec<S>,
    pub initial_state: String,
    pub accept_states: Vec<String>,
    pub relation: Vec<(String, Label<S>, String)>,
}

impl<S: Symbol> AutomatonSpecification<S> {
    /// Creates a new specification, where every element of the relation is a
    /// (from, label, to) triple.
    pub fn new<A, F, T>(
        alphabet: impl IntoIterator<Item = S>,
        initial_state: impl Into<String>,
        accept_states: impl IntoIterator<Item = A>,
        relation: impl IntoIterator<Item = (F, Label<S>, T)>,
    ) -> Self
    where
        A: Into<String>,
        F: Into<String>,
        T: Into<String>,
    {
        Self {
            alphabet: alphabet.into_iter().collect(),
            initial_state: initial_state.into(),
            accept_states: accept_states.into_iter().map(Into::into).collect(),
            relation: relation
                .into_iter()
                .map(|(from, label, to)| (from.into(), label, to.into()))
                .collect(),
        }
    }
}
