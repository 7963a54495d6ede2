use chrono::DateTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;

use super::{Currency, Game, GameType, HandHistoryError, Limit, Player, PokerRoom, Street};
use crate::core::Card;

/// Everything read from the first lines of a hand, up to the seat listing.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub poker_room: PokerRoom,
    /// Hand number assigned by the room.
    pub ident: String,
    pub game_type: GameType,
    pub tournament_ident: Option<String>,
    /// Level token as printed, e.g. `XI`.
    pub tournament_level: Option<String>,
    /// None for play money and freerolls without a printed currency.
    pub currency: Option<Currency>,
    /// Tournament buy-in, zero for freerolls, None for cash games.
    pub buyin: Option<Decimal>,
    /// Tournament fee from the buy-in expression, None for cash games.
    pub rake: Option<Decimal>,
    /// Knockout part of a three part buy-in.
    pub bounty: Option<Decimal>,
    pub game: Game,
    pub limit: Limit,
    pub sb: Decimal,
    pub bb: Decimal,
    pub date: DateTime<Tz>,
    pub table_name: String,
    pub max_players: usize,
}

/// Everything read from the seat listing down to the summary.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub button_seat: usize,
    /// One entry per seat, in seat order, empty seats included.
    pub players: Vec<Player>,
    pub hero_seat: Option<usize>,
    /// Ante and blind lines posted before the deal.
    pub forced_bets: Vec<String>,
    pub ante: Option<Decimal>,
    pub preflop_actions: Option<Vec<String>>,
    pub flop_actions: Option<Vec<String>>,
    pub turn_actions: Option<Vec<String>>,
    pub river_actions: Option<Vec<String>>,
    pub showdown_actions: Option<Vec<String>>,
    pub flop: Option<[Card; 3]>,
    pub turn: Option<Card>,
    pub river: Option<Card>,
    pub total_pot: Decimal,
    /// Rake reported by the summary, independent of the header buy-in rake.
    pub rake: Option<Decimal>,
    pub show_down: bool,
    /// Everyone who collected from a pot, in order of first appearance.
    pub winners: Vec<String>,
}

impl Body {
    /// The player on the button. Can be an empty seat placeholder.
    pub fn button(&self) -> Result<&Player, HandHistoryError> {
        self.player_at(self.button_seat)
            .ok_or_else(|| HandHistoryError::PlayerNotFound(format!("seat {}", self.button_seat)))
    }

    /// The player whose hole cards were dealt face up to the file owner.
    pub fn hero(&self) -> Option<&Player> {
        self.hero_seat.and_then(|seat| self.player_at(seat))
    }

    pub fn player_at(&self, seat: usize) -> Option<&Player> {
        self.players.iter().find(|p| p.seat == seat)
    }

    /// Look a seated player up by name. Placeholders are never returned.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| !p.is_empty_seat && p.name == name)
    }

    /// Seats with somebody in them.
    pub fn seated(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_empty_seat)
    }

    /// All community cards dealt, None when no flop was dealt.
    pub fn board(&self) -> Option<Vec<Card>> {
        let flop = self.flop?;
        let mut board = flop.to_vec();
        board.extend(self.turn);
        board.extend(self.river);
        Some(board)
    }

    /// Raw action lines for one street, None when the street was not dealt.
    pub fn street_actions(&self, street: Street) -> Option<&[String]> {
        match street {
            Street::Preflop => self.preflop_actions.as_deref(),
            Street::Flop => self.flop_actions.as_deref(),
            Street::Turn => self.turn_actions.as_deref(),
            Street::River => self.river_actions.as_deref(),
        }
    }

    /// Community cards revealed on one street.
    pub fn street_cards(&self, street: Street) -> Option<Vec<Card>> {
        match street {
            Street::Preflop => None,
            Street::Flop => self.flop.map(|f| f.to_vec()),
            Street::Turn => self.turn.map(|c| vec![c]),
            Street::River => self.river.map(|c| vec![c]),
        }
    }
}
