use std::fmt;
use std::str::FromStr;

use super::CardError;

/// Card rank or value.
/// This is basically the face value - 2
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_handhistory::core::Value;
    ///
    /// let values = Value::values();
    /// assert_eq!(Value::Two, values[0]);
    /// assert_eq!(Value::Ace, values[12]);
    /// ```
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as long as the char is in the ascii range (It should
    /// be). Hand histories always print the upper case form.
    ///
    /// @returns None if there's no value there.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_handhistory::core::Value;
    ///
    /// assert_eq!(Some(Value::Ace), Value::from_char('A'));
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// The declaration order is the canonical tie break when two cards share a
/// value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// This Suit to a character.
    /// Hand history files always print the lower case letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_handhistory::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('h'));
    /// assert_eq!(None, Suit::from_char('x'));
    /// ```
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_lowercase() {
            'd' => Some(Self::Diamond),
            's' => Some(Self::Spade),
            'h' => Some(Self::Heart),
            'c' => Some(Self::Club),
            _ => None,
        }
    }

    /// This Suit to a character.
    pub fn to_char(self) -> char {
        match self {
            Self::Diamond => 'd',
            Self::Spade => 's',
            Self::Heart => 'h',
            Self::Club => 'c',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Ordering is by value first and suit second, so sorting a slice of cards
/// gives the canonical display order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Parse the two character code used by hand histories, value first.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_handhistory::core::{Card, Suit, Value};
    ///
    /// let card = Card::from_code("Td").unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Diamond), card);
    /// assert!(Card::from_code("1d").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Self, CardError> {
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(s), None) => {
                let value =
                    Value::from_char(v).ok_or_else(|| CardError::InvalidCard(code.to_string()))?;
                let suit =
                    Suit::from_char(s).ok_or_else(|| CardError::InvalidCard(code.to_string()))?;
                Ok(Self { value, suit })
            }
            _ => Err(CardError::InvalidCard(code.to_string())),
        }
    }

    /// Every one of the 52 cards, lowest value first.
    pub fn all() -> impl Iterator<Item = Card> {
        Value::values()
            .into_iter()
            .flat_map(|value| Suit::suits().into_iter().map(move |suit| Card { value, suit }))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<&str> for Card {
    type Error = CardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}
