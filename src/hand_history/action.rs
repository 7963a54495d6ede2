use rust_decimal::Decimal;

use crate::core::Card;

/// What a player did.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    PostAnte,
    PostSmallBlind,
    PostBigBlind,
    /// Dead small blind plus big blind posted together.
    PostSmallAndBigBlind,
    Fold,
    Check,
    Call,
    Bet,
    /// Raise by `amount` to `raise_to`.
    Raise,
    /// The part of a bet nobody called, handed back.
    UncalledBetReturned,
    /// Chips won from a pot.
    Collect,
    /// Cards turned face up.
    Show(Vec<Card>),
    Muck,
    DoesNotShow,
}

impl ActionKind {
    /// Whether this kind of action always moves chips.
    pub fn requires_amount(&self) -> bool {
        matches!(
            self,
            Self::PostAnte
                | Self::PostSmallBlind
                | Self::PostBigBlind
                | Self::PostSmallAndBigBlind
                | Self::Call
                | Self::Bet
                | Self::Raise
                | Self::UncalledBetReturned
                | Self::Collect
        )
    }

    /// Voluntary money going into the pot.
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Self::Bet | Self::Raise)
    }
}

/// One betting event read from a street line.
///
/// `amount` is present exactly when [`ActionKind::requires_amount`] holds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    pub name: String,
    pub kind: ActionKind,
    pub amount: Option<Decimal>,
    /// Total bet after a raise.
    pub raise_to: Option<Decimal>,
    pub all_in: bool,
}

impl Action {
    pub fn new(name: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            amount: None,
            raise_to: None,
            all_in: false,
        }
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_raise_to(mut self, raise_to: Decimal) -> Self {
        self.raise_to = Some(raise_to);
        self
    }

    pub fn with_all_in(mut self, all_in: bool) -> Self {
        self.all_in = all_in;
        self
    }
}
