use crate::AutomatonError;

/// Conversion of a caller supplied input into a sequence of symbols.
///
/// The conversion happens completely before an automaton consumes anything,
/// so a failing conversion never leaves an automaton half way through a word.
pub trait IntoWord<S> {
    fn into_word(self) -> Result<Vec<S>, AutomatonError>;
}

impl IntoWord<char> for &str {
    fn into_word(self) -> Result<Vec<char>, AutomatonError> {
        Ok(self.chars().collect())
    }
}

impl IntoWord<char> for &String {
    fn into_word(self) -> Result<Vec<char>, AutomatonError> {
        self.as_str().into_word()
    }
}

impl<S: Clone> IntoWord<S> for &[S] {
    fn into_word(self) -> Result<Vec<S>, AutomatonError> {
        Ok(self.to_vec())
    }
}

impl<S> IntoWord<S> for Vec<S> {
    fn into_word(self) -> Result<Vec<S>, AutomatonError> {
        Ok(self)
    }
}

impl<S, const N: usize> IntoWord<S> for [S; N] {
    fn into_word(self) -> Result<Vec<S>, AutomatonError> {
        Ok(self.into())
    }
}

/// Every token must consist of exactly one character.
impl IntoWord<char> for &[&str] {
    fn into_word(self) -> Result<Vec<char>, AutomatonError> {
        self.iter().map(|token| single_char(token)).collect()
    }
}

/// Every token must consist of exactly one character.
impl IntoWord<char> for &[String] {
    fn into_word(self) -> Result<Vec<char>, AutomatonError> {
        self.iter().map(|token| single_char(token)).collect()
    }
}

fn single_char(token: &str) -> Result<char, AutomatonError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(AutomatonError::InvalidInputType(token.to_string())),
    }
}
