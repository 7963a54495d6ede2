use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::trace;

use super::action::{parse_action, COLLECTED_RE};
use super::header::{parse_amount, AMOUNT};
use crate::core::{Card, Combo};
use crate::hand_history::{ActionKind, Body, HandHistoryError, Header, Player};

static BUTTON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Table '.+' \d+-max.*\bSeat #(?P<seat>\d+) is the button")
        .expect("valid button regex")
});
static SEAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^Seat (?P<seat>\d+): (?P<name>.+?) \((?P<stack>{AMOUNT}) in chips(?:, [^)]*)?\)"
    ))
    .expect("valid seat regex")
});
static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*\* (?P<name>.+?) \*\*\*(?P<rest>.*)$").expect("valid section regex")
});
static BRACKETS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?P<cards>[^\]]*)\]").expect("valid brackets regex"));
static DEALT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Dealt to (?P<name>.+?) \[(?P<cards>[^\]]+)\]$").expect("valid dealt regex")
});
static TOTAL_POT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^Total pot (?P<pot>{AMOUNT})(?:.*?\| Rake (?P<rake>{AMOUNT}))?"
    ))
    .expect("valid total pot regex")
});
static SUMMARY_SEAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Seat (?P<seat>\d+): (?P<rest>.+)$").expect("valid seat regex"));
static REVEALED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:showed|mucked) \[(?P<cards>[^\]]+)\]").expect("valid revealed regex")
});
static SUMMARY_WIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:collected|and won) \({AMOUNT}\)")).expect("valid win regex")
});

/// Which part of the hand the current line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Setup,
    Preflop,
    Flop,
    Turn,
    River,
    ShowDown,
    Summary,
    /// Marker this parser does not model, e.g. a second board.
    Other,
}

/// Collects the body fields while walking the hand once, top to bottom.
struct BodyBuilder {
    max_players: usize,
    players: Vec<Player>,
    hero_seat: Option<usize>,
    forced_bets: Vec<String>,
    ante: Option<Decimal>,
    preflop_actions: Option<Vec<String>>,
    flop_actions: Option<Vec<String>>,
    turn_actions: Option<Vec<String>>,
    river_actions: Option<Vec<String>>,
    showdown_actions: Option<Vec<String>>,
    flop: Option<[Card; 3]>,
    turn: Option<Card>,
    river: Option<Card>,
    total_pot: Option<Decimal>,
    rake: Option<Decimal>,
    show_down: bool,
    winners: Vec<String>,
}

fn parse_card_list(field: &'static str, text: &str) -> Result<Vec<Card>, HandHistoryError> {
    text.split_whitespace()
        .map(|code| Card::from_code(code).map_err(|_| HandHistoryError::invalid(field, text)))
        .collect()
}

/// Cards of the last bracket group on a street marker, the ones new to
/// that street.
fn street_cards(field: &'static str, rest: &str) -> Result<Vec<Card>, HandHistoryError> {
    let last = BRACKETS_RE
        .captures_iter(rest)
        .last()
        .ok_or_else(|| HandHistoryError::invalid(field, rest))?;
    parse_card_list(field, &last["cards"])
}

fn single_card(field: &'static str, rest: &str) -> Result<Card, HandHistoryError> {
    match street_cards(field, rest)?.as_slice() {
        [card] => Ok(*card),
        _ => Err(HandHistoryError::invalid(field, rest)),
    }
}

/// A two card holding, None for games dealing more hole cards.
fn combo_from(cards: &[Card]) -> Result<Option<Combo>, HandHistoryError> {
    match cards {
        [first, second] => Ok(Some(Combo::new(*first, *second)?)),
        _ => Ok(None),
    }
}

impl BodyBuilder {
    fn new(max_players: usize) -> Self {
        Self {
            max_players,
            players: (1..=max_players).map(Player::empty_seat).collect(),
            hero_seat: None,
            forced_bets: Vec::new(),
            ante: None,
            preflop_actions: None,
            flop_actions: None,
            turn_actions: None,
            river_actions: None,
            showdown_actions: None,
            flop: None,
            turn: None,
            river: None,
            total_pot: None,
            rake: None,
            show_down: false,
            winners: Vec::new(),
        }
    }

    fn seated_index(&self, name: &str) -> Result<usize, HandHistoryError> {
        self.players
            .iter()
            .position(|p| !p.is_empty_seat && p.name == name)
            .ok_or_else(|| HandHistoryError::PlayerNotFound(name.to_string()))
    }

    fn add_winner(&mut self, name: &str) {
        if !self.winners.iter().any(|w| w == name) {
            self.winners.push(name.to_string());
        }
    }

    fn reveal(&mut self, index: usize, cards: &[Card]) -> Result<(), HandHistoryError> {
        if let Some(combo) = combo_from(cards)? {
            self.players[index].combo = Some(combo);
        }
        Ok(())
    }

    /// Run-it-twice hands label the first board `FIRST ...`; it is read like
    /// a normal street and the second board is skipped.
    fn enter(&mut self, name: &str, rest: &str) -> Result<Section, HandHistoryError> {
        let section = match name.strip_prefix("FIRST ").unwrap_or(name) {
            "HOLE CARDS" => {
                self.preflop_actions = Some(Vec::new());
                Section::Preflop
            }
            "FLOP" => {
                let cards = street_cards("flop", rest)?;
                let flop: [Card; 3] = cards
                    .try_into()
                    .map_err(|_| HandHistoryError::invalid("flop", rest))?;
                self.flop = Some(flop);
                self.flop_actions = Some(Vec::new());
                Section::Flop
            }
            "TURN" => {
                self.turn = Some(single_card("turn", rest)?);
                self.turn_actions = Some(Vec::new());
                Section::Turn
            }
            "RIVER" => {
                self.river = Some(single_card("river", rest)?);
                self.river_actions = Some(Vec::new());
                Section::River
            }
            "SHOW DOWN" | "SECOND SHOW DOWN" => {
                self.show_down = true;
                if self.showdown_actions.is_none() {
                    self.showdown_actions = Some(Vec::new());
                }
                Section::ShowDown
            }
            "SUMMARY" => Section::Summary,
            other => {
                trace!(marker = other, "Skipping unsupported section");
                Section::Other
            }
        };
        Ok(section)
    }

    fn seat(&mut self, line: &str) -> Result<bool, HandHistoryError> {
        let Some(caps) = SEAT_RE.captures(line) else {
            return Ok(false);
        };
        let seat = caps["seat"]
            .parse::<usize>()
            .ok()
            .filter(|seat| (1..=self.max_players).contains(seat))
            .ok_or_else(|| HandHistoryError::invalid("seat", line))?;
        let slot = &mut self.players[seat - 1];
        if !slot.is_empty_seat {
            return Err(HandHistoryError::invalid("seat", line));
        }
        let (_, stack) = parse_amount("stack", &caps["stack"])?;
        *slot = Player::new(&caps["name"], stack, seat);
        Ok(true)
    }

    fn setup(&mut self, line: &str) -> Result<(), HandHistoryError> {
        if self.seat(line)? {
            return Ok(());
        }
        if let Some(action) = parse_action(line) {
            if action.kind == ActionKind::PostAnte && self.ante.is_none() {
                self.ante = action.amount;
            }
            self.forced_bets.push(line.to_string());
        }
        Ok(())
    }

    fn dealt(&mut self, line: &str) -> Result<bool, HandHistoryError> {
        let Some(caps) = DEALT_RE.captures(line) else {
            return Ok(false);
        };
        let index = self.seated_index(&caps["name"])?;
        let cards = parse_card_list("hole_cards", &caps["cards"])?;
        self.reveal(index, &cards)?;
        if self.hero_seat.is_none() {
            self.hero_seat = Some(self.players[index].seat);
        }
        Ok(true)
    }

    /// Street lines: winners are picked up on the way.
    fn street_line(&mut self, line: &str) {
        if let Some(caps) = COLLECTED_RE.captures(line) {
            self.add_winner(&caps["name"]);
        }
    }

    /// Showdown lines: winners, plus the cards shown to contest the pot.
    fn showdown_line(&mut self, line: &str) -> Result<(), HandHistoryError> {
        if COLLECTED_RE.is_match(line) {
            self.street_line(line);
        } else if let Some(action) = parse_action(line) {
            if let ActionKind::Show(cards) = &action.kind {
                let index = self.seated_index(&action.name)?;
                self.reveal(index, cards)?;
            }
        }
        Ok(())
    }

    fn summary(&mut self, line: &str) -> Result<(), HandHistoryError> {
        if let Some(caps) = TOTAL_POT_RE.captures(line) {
            let (_, pot) = parse_amount("total_pot", &caps["pot"])?;
            self.total_pot = Some(pot);
            if let Some(rake) = caps.name("rake") {
                self.rake = Some(parse_amount("rake", rake.as_str())?.1);
            }
            return Ok(());
        }
        let Some(caps) = SUMMARY_SEAT_RE.captures(line) else {
            return Ok(());
        };
        let Some(index) = caps["seat"]
            .parse::<usize>()
            .ok()
            .and_then(|seat| seat.checked_sub(1))
            .filter(|index| *index < self.players.len() && !self.players[*index].is_empty_seat)
        else {
            return Err(HandHistoryError::PlayerNotFound(format!("seat {}", &caps["seat"])));
        };
        // The name is known from the seat, so only look past it.
        let rest = &caps["rest"];
        let outcome = rest
            .strip_prefix(self.players[index].name.as_str())
            .unwrap_or(rest);
        // Cards shown without a showdown stay unknown.
        if let Some(revealed) = REVEALED_RE.captures(outcome).filter(|_| self.show_down) {
            let cards = parse_card_list("hole_cards", &revealed["cards"])?;
            self.reveal(index, &cards)?;
        }
        if SUMMARY_WIN_RE.is_match(outcome) {
            let name = self.players[index].name.clone();
            self.add_winner(&name);
        }
        Ok(())
    }

    fn build(self, button_seat: usize) -> Result<Body, HandHistoryError> {
        if self.players.iter().all(|p| p.is_empty_seat) {
            return Err(HandHistoryError::missing("seats"));
        }
        let total_pot = self
            .total_pot
            .ok_or(HandHistoryError::missing("total_pot"))?;
        if total_pot > Decimal::ZERO && self.winners.is_empty() {
            return Err(HandHistoryError::missing("winners"));
        }
        Ok(Body {
            button_seat,
            players: self.players,
            hero_seat: self.hero_seat,
            forced_bets: self.forced_bets,
            ante: self.ante,
            preflop_actions: self.preflop_actions,
            flop_actions: self.flop_actions,
            turn_actions: self.turn_actions,
            river_actions: self.river_actions,
            showdown_actions: self.showdown_actions,
            flop: self.flop,
            turn: self.turn,
            river: self.river,
            total_pot,
            rake: self.rake,
            show_down: self.show_down,
            winners: self.winners,
        })
    }
}

fn push(lines: &mut Option<Vec<String>>, line: &str) {
    if let Some(lines) = lines {
        lines.push(line.to_string());
    }
}

/// Parse seats, streets and summary of one PokerStars hand.
pub(super) fn parse_body(text: &str, header: &Header) -> Result<Body, HandHistoryError> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .skip_while(|l| !l.starts_with("Table '"));

    let table_line = lines.next().ok_or(HandHistoryError::missing("table"))?;
    let button_seat = BUTTON_RE
        .captures(table_line)
        .ok_or(HandHistoryError::missing("button"))?["seat"]
        .parse::<usize>()
        .map_err(|_| HandHistoryError::invalid("button", table_line))?;
    if !(1..=header.max_players).contains(&button_seat) {
        return Err(HandHistoryError::PlayerNotFound(format!("seat {button_seat}")));
    }

    let mut builder = BodyBuilder::new(header.max_players);
    let mut section = Section::Setup;
    for line in lines {
        if let Some(caps) = SECTION_RE.captures(line) {
            section = builder.enter(&caps["name"], &caps["rest"])?;
            continue;
        }
        match section {
            Section::Setup => builder.setup(line)?,
            Section::Preflop => {
                if !builder.dealt(line)? {
                    push(&mut builder.preflop_actions, line);
                    builder.street_line(line);
                }
            }
            Section::Flop => {
                push(&mut builder.flop_actions, line);
                builder.street_line(line);
            }
            Section::Turn => {
                push(&mut builder.turn_actions, line);
                builder.street_line(line);
            }
            Section::River => {
                push(&mut builder.river_actions, line);
                builder.street_line(line);
            }
            Section::ShowDown => {
                push(&mut builder.showdown_actions, line);
                builder.showdown_line(line)?;
            }
            Section::Summary => builder.summary(line)?,
            Section::Other => {}
        }
    }
    builder.build(button_seat)
}
