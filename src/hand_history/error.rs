use thiserror::Error;

use crate::core::CardError;

/// Everything that can go wrong while turning a hand history into a model.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum HandHistoryError {
    /// The text does not start with a header this parser knows.
    #[error("Unknown hand history format: {0:?}")]
    UnknownFormat(String),

    /// A mandatory field or section is absent.
    #[error("Missing {field} in hand history")]
    MissingField { field: &'static str },

    /// A field is present but could not be read.
    #[error("Unable to parse {field} from {value:?}")]
    InvalidField { field: &'static str, value: String },

    /// No player sits at the seat, or goes by the name, that was referenced.
    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    /// The parse phases were driven out of order.
    #[error("Invalid operation: {0}")]
    InvalidOperation(&'static str),

    #[error("Invalid card data")]
    Card(#[from] CardError),
}

impl HandHistoryError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// True for the errors that mean the hand text itself is malformed,
    /// as opposed to an unknown format or an API misuse.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidField { .. }
                | Self::PlayerNotFound(_)
                | Self::Card(_)
        )
    }
}
