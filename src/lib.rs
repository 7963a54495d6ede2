//! # rs_handhistory
//!
//! Parse the text hand histories that online poker rooms export into a
//! typed, read only model: table and stakes, seated players and stacks,
//! hole cards when known, per street actions, the board, the pot and the
//! winners.
//!
//! Parsing is split in two phases. The header (room, hand id, game,
//! stakes, buy-in, date, table) is cheap and can be read on its own to
//! filter large archives; the body (seats, streets, summary) is parsed
//! only when needed.
//!
//! ```
//! use rs_handhistory::hand_history::{HandHistoryConfig, ParseMode};
//! use rs_handhistory::pokerstars::PokerStarsHandHistory;
//!
//! let text = "PokerStars Hand #105024000105: Tournament #797469411, $3.19+$0.31 USD Hold'em No Limit - Level I (10/20) - 2013/10/04 19:53:27 CET [2013/10/04 13:53:27 ET]
//! Table '797469411 15' 9-max Seat #1 is the button
//! ";
//! let config = HandHistoryConfig::default().with_mode(ParseMode::HeaderOnly);
//! let hand = PokerStarsHandHistory::with_config(text, config).unwrap();
//! let header = hand.header().unwrap();
//! assert_eq!(Some("I".to_string()), header.tournament_level);
//! assert_eq!(9, header.max_players);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;

/// Room independent hand history model and the staged parse driver.
pub mod hand_history;

/// PokerStars text export.
pub mod pokerstars;
