//! # PokerStars
//!
//! Parser for the text export of PokerStars hands, cash games and
//! tournaments alike. Times are read from the bracketed `ET` timestamp,
//! which the room always prints in US Eastern wall clock time.
//!
//! ```
//! use rs_handhistory::pokerstars::PokerStarsHandHistory;
//!
//! let text = "PokerStars Hand #7: Hold'em No Limit ($0.01/$0.02 USD) - 2013/10/04 13:53:27 ET
//! Table 'Aase' 6-max Seat #1 is the button
//! Seat 1: a ($2 in chips)
//! Seat 2: b ($2 in chips)
//! a: posts small blind $0.01
//! b: posts big blind $0.02
//! *** HOLE CARDS ***
//! a: folds
//! Uncalled bet ($0.01) returned to b
//! b collected $0.02 from pot
//! *** SUMMARY ***
//! Total pot $0.02 | Rake $0
//! Seat 1: a (button) (small blind) folded before Flop
//! Seat 2: b (big blind) collected ($0.02)
//! ";
//! let hand = PokerStarsHandHistory::new(text).unwrap();
//! assert_eq!("<PokerStarsHandHistory: STARS hand #7>", hand.to_string());
//! assert_eq!(&["b".to_string()], hand.winners().unwrap());
//! ```
use chrono_tz::Tz;

use crate::hand_history::{
    Action, Body, HandHistory, HandHistoryError, HandHistoryParser, Header, PokerRoom,
};

/// Module reading the first line and the table line.
mod header;

/// Module reading seats, streets and the summary.
mod body;

/// Module turning single street lines into typed actions.
mod action;

/// Stateless parser for PokerStars hands.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PokerStars;

impl HandHistoryParser for PokerStars {
    fn room(&self) -> PokerRoom {
        PokerRoom::Stars
    }

    fn name(&self) -> &'static str {
        "PokerStarsHandHistory"
    }

    fn reference_timezone(&self) -> Tz {
        chrono_tz::US::Eastern
    }

    fn parse_header(&self, text: &str) -> Result<Header, HandHistoryError> {
        header::parse_header(text, self.reference_timezone())
    }

    fn parse_body(&self, text: &str, header: &Header) -> Result<Body, HandHistoryError> {
        body::parse_body(text, header)
    }

    fn parse_action(&self, line: &str) -> Option<Action> {
        action::parse_action(line)
    }
}

/// A PokerStars hand.
pub type PokerStarsHandHistory = HandHistory<PokerStars>;
