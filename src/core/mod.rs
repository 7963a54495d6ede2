/// card.rs has value and suit for playing cards.
mod card;
/// Export `Card`, `Suit`, and `Value`
pub use self::card::{Card, Suit, Value};

/// Two hole cards dealt to one player.
mod combo;
/// Export `Combo`
pub use self::combo::Combo;

/// Errors for parsing card text.
mod error;
/// Export `CardError`
pub use self::error::CardError;
