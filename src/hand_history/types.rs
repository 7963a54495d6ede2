use std::fmt;

/// The rooms that have a dedicated parser.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokerRoom {
    #[cfg_attr(feature = "serde", serde(rename = "STARS"))]
    Stars,
}

impl PokerRoom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stars => "STARS",
        }
    }
}

impl fmt::Display for PokerRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tournament or ring game. Tournament hands carry a tournament id, a
/// level and a buy-in; cash hands carry none of them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameType {
    #[cfg_attr(feature = "serde", serde(rename = "TOUR"))]
    Tournament,
    #[cfg_attr(feature = "serde", serde(rename = "CASH"))]
    Cash,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tournament => "TOUR",
            Self::Cash => "CASH",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Poker variant being dealt.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    Holdem,
    Omaha,
    OmahaHiLo,
    FiveCardOmaha,
    Stud,
    StudHiLo,
    Razz,
    FiveCardDraw,
    TripleDraw,
    Badugi,
}

impl Game {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Holdem => "HOLDEM",
            Self::Omaha => "OMAHA",
            Self::OmahaHiLo => "OMAHA_HILO",
            Self::FiveCardOmaha => "FIVE_CARD_OMAHA",
            Self::Stud => "STUD",
            Self::StudHiLo => "STUD_HILO",
            Self::Razz => "RAZZ",
            Self::FiveCardDraw => "FIVE_CARD_DRAW",
            Self::TripleDraw => "TRIPLE_DRAW",
            Self::Badugi => "BADUGI",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Betting structure.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    #[cfg_attr(feature = "serde", serde(rename = "NL"))]
    NoLimit,
    #[cfg_attr(feature = "serde", serde(rename = "PL"))]
    PotLimit,
    #[cfg_attr(feature = "serde", serde(rename = "FL"))]
    FixedLimit,
}

impl Limit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoLimit => "NL",
            Self::PotLimit => "PL",
            Self::FixedLimit => "FL",
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Money the hand was played for.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Currency {
    #[cfg_attr(feature = "serde", serde(rename = "USD"))]
    Usd,
    #[cfg_attr(feature = "serde", serde(rename = "EUR"))]
    Eur,
    #[cfg_attr(feature = "serde", serde(rename = "GBP"))]
    Gbp,
    /// Any other three letter code the room prints.
    Other(String),
}

impl Currency {
    /// From an ISO style code such as `USD`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            "GBP" => Self::Gbp,
            other => Self::Other(other.to_string()),
        }
    }

    /// From the symbol printed in front of an amount.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '$' => Some(Self::Usd),
            '€' => Some(Self::Eur),
            '£' => Some(Self::Gbp),
            _ => None,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A betting round.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const fn streets() -> [Self; 4] {
        [Self::Preflop, Self::Flop, Self::Turn, Self::River]
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preflop => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        };
        f.write_str(name)
    }
}
