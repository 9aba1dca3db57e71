use std::fmt;
use std::hash::Hash;

/// The requirements on the type of input symbols.
pub trait Symbol: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> Symbol for T {}

/// The label of a transition, either an input symbol or the empty input.
///
/// Epsilon is a separate variant so that it can never be confused with an
/// input symbol, whatever the symbol type is.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label<S> {
    Epsilon,
    Symbol(S),
}

impl<S> Label<S> {
    /// Returns true iff this is the epsilon label.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

impl<S> From<S> for Label<S> {
    fn from(symbol: S) -> Self {
        Label::Symbol(symbol)
    }
}

impl<S: fmt::Debug> fmt::Debug for Label<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => write!(f, "epsilon"),
            Label::Symbol(symbol) => write!(f, "{symbol:?}"),
        }
    }
}

impl<S: fmt::Display> fmt::Display for Label<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => write!(f, "epsilon"),
            Label::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_epsilon_is_not_a_symbol() {
        let epsilon: Label<char> = Label::Epsilon;
        let symbol: Label<char> = 'e'.into();

        assert!(epsilon.is_epsilon());
        assert!(!symbol.is_epsilon());
        assert_ne!(epsilon, symbol);
    }

    #[test]
    fn test_label_formatting() {
        assert_eq!(format!("{:?}", Label::Symbol('0')), "'0'");
        assert_eq!(format!("{}", Label::Symbol("ab")), "ab");
        assert_eq!(format!("{}", Label::<char>::Epsilon), "epsilon");
    }
}
