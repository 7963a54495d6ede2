use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::{Card, CardError};

/// Two distinct hole cards held by one player.
///
/// Equality and hashing treat the pair as unordered, so `AcJh` and `JhAc`
/// are the same combo. Display keeps the order the cards were given in.
///
/// # Examples
///
/// ```
/// use rs_handhistory::core::Combo;
///
/// let a: Combo = "AcJh".parse().unwrap();
/// let b: Combo = "JhAc".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!("AcJh", a.to_string());
/// assert_eq!("JhAc", b.to_string());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Clone, Copy)]
pub struct Combo {
    first: Card,
    second: Card,
}

impl Combo {
    /// Build a combo from two cards. The cards must differ.
    pub fn new(first: Card, second: Card) -> Result<Self, CardError> {
        if first == second {
            return Err(CardError::InvalidCombo(format!("{first}{second}")));
        }
        Ok(Self { first, second })
    }

    /// Parse the four character form, e.g. `"AcJh"`.
    pub fn from_code(code: &str) -> Result<Self, CardError> {
        let invalid = || CardError::InvalidCombo(code.to_string());
        if !code.is_ascii() || code.len() != 4 {
            return Err(invalid());
        }
        let first = Card::from_code(&code[..2]).map_err(|_| invalid())?;
        let second = Card::from_code(&code[2..]).map_err(|_| invalid())?;
        Self::new(first, second).map_err(|_| invalid())
    }

    pub fn first(&self) -> Card {
        self.first
    }

    pub fn second(&self) -> Card {
        self.second
    }

    /// The cards in the order they were given.
    pub fn cards(&self) -> [Card; 2] {
        [self.first, self.second]
    }

    /// Is this a pocket pair
    pub fn is_pair(&self) -> bool {
        self.first.value == self.second.value
    }

    /// Are both cards the same suit
    pub fn is_suited(&self) -> bool {
        self.first.suit == self.second.suit
    }

    /// Lower card first, for order independent comparison.
    fn sorted(&self) -> (Card, Card) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }
}

impl PartialEq for Combo {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Combo {}

impl Hash for Combo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

impl fmt::Debug for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Combo({self})")
    }
}

impl FromStr for Combo {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Combo {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value)
    }
}

impl From<Combo> for String {
    fn from(combo: Combo) -> Self {
        combo.to_string()
    }
}
