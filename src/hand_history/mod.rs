//! # Hand History Model
//!
//! Room independent types for a parsed hand history, and the
//! [`HandHistory`] aggregate that drives a room specific
//! [`HandHistoryParser`] through its two parse phases.
//!
//! ## Lifecycle
//!
//! A hand starts [`ParseState::Unparsed`]. `parse_header` reads the first
//! lines (room, ids, stakes, buy-in, date, table) and moves it to
//! [`ParseState::HeaderParsed`]; `parse_body` reads seats, streets and the
//! summary and moves it to [`ParseState::FullyParsed`]. Running a phase twice,
//! or the body before the header, is an
//! [`HandHistoryError::InvalidOperation`].
//!
//! Sections that may legitimately be absent (flop, turn, river, showdown,
//! tournament fields) are `Option`s. A street that was dealt but saw no
//! betting is `Some(vec![])`, not `None`.
mod action;
mod config;
mod error;
mod history;
mod parser;
mod player;
mod record;
mod types;

pub use action::*;
pub use config::*;
pub use error::*;
pub use history::*;
pub use parser::*;
pub use player::*;
pub use record::*;
pub use types::*;
