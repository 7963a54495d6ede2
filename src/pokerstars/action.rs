use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use super::header::{parse_amount, AMOUNT};
use crate::core::Card;
use crate::hand_history::{Action, ActionKind};

static PLAYER_ACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<name>.+?): (?P<verb>folds|checks|calls|bets|raises|posts the ante|posts small & big blinds|posts small blind|posts big blind|shows|mucks hand|doesn't show hand)(?P<rest>.*)$",
    )
    .expect("valid action regex")
});
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^ (?P<amount>{AMOUNT})")).expect("valid amount regex"));
static RAISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^ (?P<amount>{AMOUNT}) to (?P<to>{AMOUNT})")).expect("valid raise regex")
});
static CARDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ \[(?P<cards>[^\]]+)\]").expect("valid cards regex"));
static UNCALLED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^Uncalled bet \((?P<amount>{AMOUNT})\) returned to (?P<name>.+)$"
    ))
    .expect("valid uncalled bet regex")
});
pub(super) static COLLECTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<name>.+?) collected (?P<amount>{AMOUNT}) from (?:main |side )?pot(?:-\d+)?$"
    ))
    .expect("valid collected regex")
});

const ALL_IN: &str = " and is all-in";

/// Cards printed inside brackets, separated by spaces.
pub(super) fn parse_cards(text: &str) -> Option<Vec<Card>> {
    text.split_whitespace()
        .map(|code| Card::from_code(code).ok())
        .collect()
}

fn amount(re: &Regex, rest: &str, group: &str) -> Option<Decimal> {
    let caps = re.captures(rest)?;
    parse_amount("amount", caps.name(group)?.as_str())
        .ok()
        .map(|(_, value)| value)
}

/// Read one PokerStars street line. Returns None for anything that is not
/// a betting event, such as chat or table notices.
pub(super) fn parse_action(line: &str) -> Option<Action> {
    if let Some(caps) = UNCALLED_RE.captures(line) {
        let (_, value) = parse_amount("amount", &caps["amount"]).ok()?;
        return Some(Action::new(&caps["name"], ActionKind::UncalledBetReturned).with_amount(value));
    }
    if let Some(caps) = COLLECTED_RE.captures(line) {
        let (_, value) = parse_amount("amount", &caps["amount"]).ok()?;
        return Some(Action::new(&caps["name"], ActionKind::Collect).with_amount(value));
    }

    let caps = PLAYER_ACTION_RE.captures(line)?;
    let name = &caps["name"];
    let rest = caps.name("rest").map_or("", |m| m.as_str());
    let all_in = rest.ends_with(ALL_IN);

    let kind = match &caps["verb"] {
        "folds" => ActionKind::Fold,
        "checks" => ActionKind::Check,
        "calls" => ActionKind::Call,
        "bets" => ActionKind::Bet,
        "raises" => ActionKind::Raise,
        "posts the ante" => ActionKind::PostAnte,
        "posts small blind" => ActionKind::PostSmallBlind,
        "posts big blind" => ActionKind::PostBigBlind,
        "posts small & big blinds" => ActionKind::PostSmallAndBigBlind,
        "shows" => {
            let cards = CARDS_RE
                .captures(rest)
                .and_then(|c| parse_cards(&c["cards"]))?;
            ActionKind::Show(cards)
        }
        "mucks hand" => ActionKind::Muck,
        "doesn't show hand" => ActionKind::DoesNotShow,
        _ => return None,
    };

    let is_raise = kind == ActionKind::Raise;
    let needs_amount = kind.requires_amount();
    let action = Action::new(name, kind).with_all_in(all_in);
    if is_raise {
        let by = amount(&RAISE_RE, rest, "amount")?;
        let to = amount(&RAISE_RE, rest, "to")?;
        Some(action.with_amount(by).with_raise_to(to))
    } else if needs_amount {
        let value = amount(&AMOUNT_RE, rest, "amount")?;
        Some(action.with_amount(value))
    } else {
        Some(action)
    }
}
