use rust_decimal::Decimal;

use crate::core::Combo;

/// Someone sitting at the table when the hand was dealt.
///
/// Seats nobody occupies are still represented, with a placeholder name
/// and an empty stack, so that `players[seat - 1]` is always that seat.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub name: String,
    /// Chips in front of the player before any blind or ante.
    pub stack: Decimal,
    /// One based seat number.
    pub seat: usize,
    /// Hole cards, known for the hero and for anyone who showed.
    pub combo: Option<Combo>,
    pub is_empty_seat: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: Decimal, seat: usize) -> Self {
        Self {
            name: name.into(),
            stack,
            seat,
            combo: None,
            is_empty_seat: false,
        }
    }

    /// Placeholder for a seat with nobody in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_handhistory::hand_history::Player;
    ///
    /// let p = Player::empty_seat(1);
    /// assert_eq!("Empty Seat 1", p.name);
    /// assert!(p.stack.is_zero());
    /// ```
    pub fn empty_seat(seat: usize) -> Self {
        Self {
            name: format!("Empty Seat {seat}"),
            stack: Decimal::ZERO,
            seat,
            combo: None,
            is_empty_seat: true,
        }
    }

    pub fn with_combo(mut self, combo: Combo) -> Self {
        self.combo = Some(combo);
        self
    }
}
