use thiserror::Error;

/// Errors raised while reading card and combo codes.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum CardError {
    #[error("Invalid card code {0:?}")]
    InvalidCard(String),
    #[error("Invalid combo code {0:?}")]
    InvalidCombo(String),
}
