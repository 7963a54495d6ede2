use chrono::{Offset, TimeZone};
use chrono_tz::{US::Eastern, UTC};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rs_handhistory::core::{Card, Combo};
use rs_handhistory::hand_history::{
    ActionKind, Currency, Game, GameType, HandHistoryConfig, HandHistoryError, HandHistoryParser,
    Limit, ParseMode, ParseState, PokerRoom, Street,
};
use rs_handhistory::pokerstars::PokerStarsHandHistory;

const FLOP_ONLY: &str = include_str!("hands/flop_only.txt");
const ALLIN_PREFLOP: &str = include_str!("hands/allin_preflop.txt");
const EMPTY_SEAT: &str = include_str!("hands/empty_seat_no_board.txt");
const EVERY_STREET: &str = include_str!("hands/every_street.txt");
const NAME_WITH_DOTS: &str = include_str!("hands/name_with_dots.txt");
const CASH_SHOWDOWN: &str = include_str!("hands/cash_showdown.txt");
const RUN_IT_TWICE: &str = include_str!("hands/run_it_twice.txt");

fn cards(codes: &[&str]) -> Vec<Card> {
    codes.iter().map(|c| c.parse().unwrap()).collect()
}

fn combo(code: &str) -> Option<Combo> {
    Some(code.parse().unwrap())
}

fn lines(raw: &[&str]) -> Option<Vec<String>> {
    Some(raw.iter().map(|l| l.to_string()).collect())
}

fn names(hand: &PokerStarsHandHistory) -> Vec<&str> {
    hand.players()
        .unwrap()
        .iter()
        .map(|p| p.name.as_str())
        .collect()
}

#[test_log::test]
fn test_flop_only_header() {
    let hand = PokerStarsHandHistory::new(FLOP_ONLY).unwrap();
    let h = hand.header().unwrap();
    assert_eq!(PokerRoom::Stars, h.poker_room);
    assert_eq!("105024000105", h.ident);
    assert_eq!(GameType::Tournament, h.game_type);
    assert_eq!(Some("797469411".to_string()), h.tournament_ident);
    assert_eq!(Some("I".to_string()), h.tournament_level);
    assert_eq!(Some(Currency::Usd), h.currency);
    assert_eq!(Some(dec!(3.19)), h.buyin);
    assert_eq!(Some(dec!(0.31)), h.rake);
    assert_eq!(Game::Holdem, h.game);
    assert_eq!(Limit::NoLimit, h.limit);
    assert_eq!(dec!(10), h.sb);
    assert_eq!(dec!(20), h.bb);
    assert_eq!(
        Eastern.with_ymd_and_hms(2013, 10, 4, 13, 53, 27).unwrap(),
        h.date
    );
    assert_eq!("797469411 15", h.table_name);
    assert_eq!(9, h.max_players);
}

#[test_log::test]
fn test_flop_only_body() {
    let hand = PokerStarsHandHistory::new(FLOP_ONLY).unwrap();
    let b = hand.body().unwrap();

    assert_eq!(1, b.button_seat);
    assert_eq!("flettl2", hand.button().unwrap().name);
    let hero = hand.hero().unwrap().unwrap();
    assert_eq!("W2lkm2n", hero.name);
    assert_eq!(5, hero.seat);
    assert_eq!(combo("AcJh"), hero.combo);

    assert_eq!(
        vec![
            "flettl2",
            "santy312",
            "flavio766",
            "strongi82",
            "W2lkm2n",
            "MISTRPerfect",
            "blak_douglas",
            "sinus91",
            "STBIJUJA",
        ],
        names(&hand)
    );
    let stacks: Vec<Decimal> = b.players.iter().map(|p| p.stack).collect();
    assert_eq!(
        vec![
            dec!(1500),
            dec!(3000),
            dec!(3000),
            dec!(3000),
            dec!(3000),
            dec!(3000),
            dec!(3000),
            dec!(1500),
            dec!(1500)
        ],
        stacks
    );
    // Only the hero's cards are known without a showdown.
    assert_eq!(1, b.players.iter().filter(|p| p.combo.is_some()).count());

    assert_eq!(
        lines(&[
            "strongi82: folds",
            "W2lkm2n: raises 40 to 60",
            "MISTRPerfect: calls 60",
            "blak_douglas: folds",
            "sinus91: folds",
            "STBIJUJA: folds",
            "flettl2: folds",
            "santy312: folds",
            "flavio766: folds",
        ]),
        b.preflop_actions
    );
    assert_eq!(
        lines(&[
            "W2lkm2n: bets 80",
            "MISTRPerfect: folds",
            "Uncalled bet (80) returned to W2lkm2n",
            "W2lkm2n collected 150 from pot",
            "W2lkm2n: doesn't show hand",
        ]),
        b.flop_actions
    );
    assert_eq!(None, b.turn_actions);
    assert_eq!(None, b.river_actions);
    assert_eq!(None, b.showdown_actions);

    assert_eq!(Some(cards(&["2s", "6d", "6h"])), hand.board().unwrap());
    assert_eq!(None, b.turn);
    assert_eq!(None, b.river);
    assert_eq!(dec!(150), b.total_pot);
    assert_eq!(Some(Decimal::ZERO), b.rake);
    assert!(!b.show_down);
    assert_eq!(&["W2lkm2n".to_string()], hand.winners().unwrap());
}

#[test_log::test]
fn test_allin_preflop() {
    let hand = PokerStarsHandHistory::new(ALLIN_PREFLOP).unwrap();
    let h = hand.header().unwrap();
    assert_eq!("105034215446", h.ident);
    assert_eq!(Some("XI".to_string()), h.tournament_level);
    assert_eq!(dec!(400), h.sb);
    assert_eq!(dec!(800), h.bb);
    assert_eq!(
        Eastern.with_ymd_and_hms(2013, 10, 4, 17, 22, 20).unwrap(),
        h.date
    );
    assert_eq!("797536898 9", h.table_name);

    let b = hand.body().unwrap();
    assert_eq!("W2lkm2n", hand.button().unwrap().name);
    assert_eq!(Some(dec!(75)), b.ante);
    assert_eq!(11, b.forced_bets.len());
    assert_eq!("Lean Abadia: posts big blind 800", b.forced_bets[10]);

    // The board runs out with nobody left to act.
    assert_eq!(Some(vec![]), b.flop_actions);
    assert_eq!(Some(vec![]), b.turn_actions);
    assert_eq!(Some(vec![]), b.river_actions);
    assert_eq!(
        Some(cards(&["3c", "6s", "9d", "8d", "Ks"])),
        hand.board().unwrap()
    );

    assert!(b.show_down);
    assert_eq!(6, b.showdown_actions.as_ref().unwrap().len());
    assert_eq!(combo("JdJs"), b.player("W2lkm2n").unwrap().combo);
    assert_eq!(combo("AcAs"), b.player("costamar").unwrap().combo);
    assert_eq!(combo("7h7d"), b.player("Newfie_187").unwrap().combo);
    assert_eq!(None, b.player("pmmr").unwrap().combo);

    assert_eq!(dec!(26310), b.total_pot);
    assert_eq!(&["costamar".to_string()], hand.winners().unwrap());
}

#[test_log::test]
fn test_empty_seat_without_board() {
    let hand = PokerStarsHandHistory::new(EMPTY_SEAT).unwrap();
    let h = hand.header().unwrap();
    assert_eq!(Some("X".to_string()), h.tournament_level);
    assert_eq!(dec!(300), h.sb);
    assert_eq!(dec!(600), h.bb);

    let players = hand.players().unwrap();
    assert_eq!(9, players.len());
    assert_eq!("Empty Seat 1", players[0].name);
    assert_eq!(Decimal::ZERO, players[0].stack);
    assert!(players[0].is_empty_seat);
    assert_eq!("snelle_jel", players[1].name);
    assert_eq!(dec!(4295), players[1].stack);

    let button = hand.button().unwrap();
    assert_eq!("W2lkm2n", button.name);
    assert_eq!(8, button.seat);
    assert_eq!(combo("6d8d"), hand.hero().unwrap().unwrap().combo);

    let b = hand.body().unwrap();
    assert_eq!(Some(dec!(50)), b.ante);
    assert_eq!(None, b.flop);
    assert_eq!(None, b.flop_actions);
    assert_eq!(None, hand.board().unwrap());
    assert_eq!(dec!(1900), b.total_pot);
    assert_eq!(&["Theralion".to_string()], hand.winners().unwrap());
}

#[test_log::test]
fn test_every_street() {
    let hand = PokerStarsHandHistory::new(EVERY_STREET).unwrap();
    let h = hand.header().unwrap();
    assert_eq!(Some("IV".to_string()), h.tournament_level);
    assert_eq!(dec!(50), h.sb);
    assert_eq!(dec!(100), h.bb);

    let b = hand.body().unwrap();
    assert_eq!("W2lkm2n", hand.button().unwrap().name);
    assert_eq!(combo("Jc5c"), hand.hero().unwrap().unwrap().combo);
    assert_eq!(Some("6s".parse().unwrap()), b.flop.map(|f| f[0]));
    assert_eq!(Some("8c".parse().unwrap()), b.turn);
    assert_eq!(Some("Kd".parse().unwrap()), b.river);
    assert_eq!(
        Some(cards(&["6s", "4d", "3s", "8c", "Kd"])),
        hand.board().unwrap()
    );
    assert_eq!(
        lines(&[
            "blak_douglas: checks",
            "flettl2: bets 250",
            "blak_douglas: calls 250",
        ]),
        b.turn_actions
    );
    assert_eq!(
        lines(&[
            "blak_douglas: checks",
            "flettl2: bets 1300",
            "blak_douglas: folds",
            "Uncalled bet (1300) returned to flettl2",
            "flettl2 collected 1300 from pot",
            "flettl2: doesn't show hand",
        ]),
        b.river_actions
    );
    assert!(!b.show_down);
    assert_eq!(dec!(1300), b.total_pot);
    assert_eq!(&["flettl2".to_string()], hand.winners().unwrap());
}

#[test_log::test]
fn test_names_with_punctuation() {
    let hand = PokerStarsHandHistory::new(NAME_WITH_DOTS).unwrap();
    let button = hand.button().unwrap();
    assert_eq!(".prestige.U$", button.name);
    assert_eq!(dec!(3000), button.stack);
    assert_eq!(3, button.seat);

    assert_eq!(
        vec![
            "Joe.Smith",
            "sambo5555",
            ".prestige.U$",
            "W2lkm2n",
            "Bernard",
            "Zed",
            "Empty Seat 7",
            "Empty Seat 8",
            "Empty Seat 9",
        ],
        names(&hand)
    );
    assert_eq!(&[".prestige.U$".to_string()], hand.winners().unwrap());

    // Chat stays in the raw lines but is not a betting action.
    let b = hand.body().unwrap();
    assert_eq!(7, b.preflop_actions.as_ref().unwrap().len());
    let preflop = hand.actions(Street::Preflop).unwrap().unwrap();
    assert_eq!(6, preflop.len());
    assert_eq!(".prestige.U$", preflop[2].name);
    assert_eq!(ActionKind::Raise, preflop[2].kind);
    assert_eq!(Some(dec!(80)), preflop[2].raise_to);
    assert_eq!(None, b.turn);
}

#[test_log::test]
fn test_cash_showdown() {
    let hand = PokerStarsHandHistory::new(CASH_SHOWDOWN).unwrap();
    let h = hand.header().unwrap();
    assert_eq!(GameType::Cash, h.game_type);
    assert_eq!(None, h.tournament_ident);
    assert_eq!(None, h.tournament_level);
    assert_eq!(None, h.buyin);
    assert_eq!(None, h.rake);
    assert_eq!(Some(Currency::Usd), h.currency);
    assert_eq!(dec!(0.05), h.sb);
    assert_eq!(dec!(0.10), h.bb);
    assert_eq!("Aaltje II", h.table_name);
    assert_eq!(6, h.max_players);
    // January is standard time.
    assert_eq!(-5 * 3600, h.date.offset().fix().local_minus_utc());

    let b = hand.body().unwrap();
    assert_eq!("Ümit", b.players[0].name);
    assert_eq!(dec!(10.45), b.players[0].stack);
    assert!(b.players[4].is_empty_seat);
    assert_eq!("ZZ Top", b.players[5].name);
    assert_eq!("limpalot", hand.button().unwrap().name);

    assert_eq!(combo("AhKd"), b.player("hero_22").unwrap().combo);
    assert_eq!(combo("AdTh"), b.player("limpalot").unwrap().combo);
    assert_eq!(None, b.player("Karsten.K").unwrap().combo);

    assert!(b.show_down);
    assert_eq!(dec!(7.75), b.total_pot);
    assert_eq!(Some(dec!(0.30)), b.rake);
    assert_eq!(&["limpalot".to_string()], hand.winners().unwrap());

    let river = hand.actions(Street::River).unwrap().unwrap();
    assert_eq!(Some(dec!(2)), river[1].amount);
    assert_eq!(Some(dec!(3.10)), river[1].raise_to);
}

#[test_log::test]
fn test_display() {
    let hand = PokerStarsHandHistory::new(FLOP_ONLY).unwrap();
    assert_eq!(
        "<PokerStarsHandHistory: STARS hand #105024000105>",
        hand.to_string()
    );
}

#[test_log::test]
fn test_header_only() {
    let config = HandHistoryConfig::default().with_mode(ParseMode::HeaderOnly);
    let hand = PokerStarsHandHistory::with_config(EVERY_STREET, config).unwrap();
    assert_eq!(ParseState::HeaderParsed, hand.parse_state());
    assert_eq!("105025168298", hand.header().unwrap().ident);
    assert!(hand.body().is_none());
    assert_eq!(
        Err(HandHistoryError::InvalidOperation("body has not been parsed")),
        hand.winners()
    );
}

#[test_log::test]
fn test_header_only_ignores_broken_body() {
    let broken = FLOP_ONLY.replace("Seat 5: W2lkm2n (3000 in chips)", "Seat 5: W2lkm2n (lots)");
    let config = HandHistoryConfig::default().with_mode(ParseMode::HeaderOnly);
    let hand = PokerStarsHandHistory::with_config(broken, config).unwrap();
    assert_eq!(ParseState::HeaderParsed, hand.parse_state());
    assert!(hand.body().is_none());
    let h = hand.header().unwrap();
    assert_eq!("105024000105", h.ident);
    assert_eq!(9, h.max_players);
    assert_eq!(Some(Currency::Usd), h.currency);
}

#[test_log::test]
fn test_hero_without_seat_line() {
    let broken = FLOP_ONLY.replace("Seat 5: W2lkm2n (3000 in chips)", "Seat 5: W2lkm2n (lots)");
    let config = HandHistoryConfig::default().with_mode(ParseMode::HeaderOnly);
    let mut hand = PokerStarsHandHistory::with_config(broken, config).unwrap();
    assert_eq!(
        Err(HandHistoryError::PlayerNotFound("W2lkm2n".to_string())),
        hand.parse_body()
    );
    assert_eq!(ParseState::HeaderParsed, hand.parse_state());
}

#[test_log::test]
fn test_run_it_twice() {
    let hand = PokerStarsHandHistory::new(RUN_IT_TWICE).unwrap();
    let h = hand.header().unwrap();
    assert_eq!(GameType::Cash, h.game_type);
    assert_eq!(dec!(0.50), h.bb);

    let b = hand.body().unwrap();
    assert!(b.show_down);
    assert_eq!(
        Some(cards(&["Kc", "7d", "2s", "9h", "3c"])),
        hand.board().unwrap()
    );
    assert_eq!(Some(vec![]), b.flop_actions);
    assert_eq!(Some(vec![]), b.turn_actions);
    assert_eq!(Some(vec![]), b.river_actions);
    assert_eq!(6, b.showdown_actions.as_ref().unwrap().len());
    assert_eq!(combo("AhAd"), b.player("zed").unwrap().combo);
    assert_eq!(combo("KdKh"), b.player("amy").unwrap().combo);
    assert_eq!(dec!(100), b.total_pot);
    assert_eq!(Some(dec!(0.50)), b.rake);
    assert_eq!(
        &["amy".to_string(), "zed".to_string()],
        hand.winners().unwrap()
    );
}

#[test_log::test]
fn test_configured_timezone() {
    let config = HandHistoryConfig::default().with_timezone(UTC);
    let hand = PokerStarsHandHistory::with_config(FLOP_ONLY, config).unwrap();
    assert_eq!(
        UTC.with_ymd_and_hms(2013, 10, 4, 17, 53, 27).unwrap(),
        hand.header().unwrap().date
    );
}

#[test_log::test]
fn test_unknown_format() {
    let err = PokerStarsHandHistory::new("Hand #1 - not a poker room\n").unwrap_err();
    assert!(matches!(err, HandHistoryError::UnknownFormat(_)));
    assert!(!err.is_parse_error());
}

#[test_log::test]
fn test_showdown_actions() {
    let hand = PokerStarsHandHistory::new(ALLIN_PREFLOP).unwrap();
    let shows: Vec<_> = hand
        .body()
        .unwrap()
        .showdown_actions
        .as_ref()
        .unwrap()
        .iter()
        .filter_map(|line| hand.parser().parse_action(line))
        .filter(|a| matches!(a.kind, ActionKind::Show(_)))
        .map(|a| a.name)
        .collect();
    assert_eq!(vec!["W2lkm2n", "costamar", "Newfie_187"], shows);
}

#[cfg(feature = "serde")]
#[test_log::test]
fn test_serialize() {
    let hand = PokerStarsHandHistory::new(FLOP_ONLY).unwrap();
    let header = serde_json::to_value(hand.header().unwrap()).unwrap();
    assert_eq!("105024000105", header["ident"]);
    assert_eq!("STARS", header["poker_room"]);
    assert_eq!("TOUR", header["game_type"]);
    assert_eq!("NL", header["limit"]);
    assert_eq!("USD", header["currency"]);

    let body = serde_json::to_value(hand.body().unwrap()).unwrap();
    assert_eq!("AcJh", body["players"][4]["combo"]);
    assert_eq!(serde_json::json!(["2s", "6d", "6h"]), body["flop"]);
    assert_eq!(serde_json::Value::Null, body["turn"]);
}
