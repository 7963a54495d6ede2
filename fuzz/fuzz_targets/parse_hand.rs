#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate rs_handhistory;

use rust_decimal::Decimal;

use rs_handhistory::hand_history::{HandHistoryConfig, ParseMode, ParseState, Street};
use rs_handhistory::pokerstars::PokerStarsHandHistory;

use libfuzzer_sys::fuzz_target;

const SEED: &str = include_str!("../../tests/hands/every_street.txt");

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    /// Replaces one line of a valid hand.
    pub line_index: usize,
    pub line: String,
    pub header_only: bool,
}

fuzz_target!(|input: Input| {
    let mut lines: Vec<&str> = SEED.lines().collect();
    let index = input.line_index % lines.len();
    lines[index] = &input.line;
    let text = lines.join("\n");

    let mode = if input.header_only {
        ParseMode::HeaderOnly
    } else {
        ParseMode::Full
    };
    let config = HandHistoryConfig::default().with_mode(mode);
    let Ok(hand) = PokerStarsHandHistory::with_config(text, config) else {
        return;
    };

    let header = hand.header().unwrap();
    assert!(header.max_players > 0);
    if hand.parse_state() != ParseState::FullyParsed {
        assert!(hand.body().is_none());
        return;
    }

    let body = hand.body().unwrap();
    assert_eq!(header.max_players, body.players.len());
    for (i, player) in body.players.iter().enumerate() {
        assert_eq!(i + 1, player.seat);
    }
    assert!(hand.button().is_ok());
    assert_eq!(body.flop.is_none(), hand.board().unwrap().is_none());
    if body.total_pot > Decimal::ZERO {
        assert!(!body.winners.is_empty());
    }
    for street in Street::streets() {
        let _ = hand.actions(street).unwrap();
    }
});
