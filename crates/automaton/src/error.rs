use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("Invalid input type, token \"{0}\" is not a single symbol")]
    InvalidInputType(String),
}
