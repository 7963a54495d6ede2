use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use regex::{Captures, Regex};
use rust_decimal::Decimal;

use crate::hand_history::{Currency, Game, GameType, HandHistoryError, Header, Limit, PokerRoom};

/// An amount as printed by the room, optionally with a currency symbol.
pub(super) const AMOUNT: &str = r"[$€£]?\d+(?:\.\d+)?";

static SIGNATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PokerStars (?:Zoom )?(?:Hand|Game) #(?P<ident>\d+):\s+")
        .expect("valid signature regex")
});
static TOURNAMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Tournament #(?P<ident>\d+),\s+").expect("valid tournament regex")
});
static BUYIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?:(?P<freeroll>Freeroll)|(?P<amounts>{AMOUNT}(?:\+{AMOUNT})*)(?:\s+(?P<currency>[A-Z]{{3}}))?)\s+"
    ))
    .expect("valid buy-in regex")
});
static GAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<game>.+?)\s+(?P<limit>No Limit|Pot Limit|Limit)\s+").expect("valid game regex")
});
static LEVEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-\s+Level\s+(?P<level>[^\s(]+)\s+").expect("valid level regex")
});
static STAKES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\((?P<sb>{AMOUNT})/(?P<bb>{AMOUNT})(?:\s+(?P<currency>[A-Z]{{3}}))?\)"
    ))
    .expect("valid stakes regex")
});
static BRACKET_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?P<date>\d{4}/\d{1,2}/\d{1,2} \d{1,2}:\d{2}:\d{2}) ET\]")
        .expect("valid date regex")
});
static PLAIN_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-\s+(?P<date>\d{4}/\d{1,2}/\d{1,2} \d{1,2}:\d{2}:\d{2}) ET\s*$")
        .expect("valid date regex")
});
static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Table '(?P<name>.+)' (?P<max>\d+)-max\b").expect("valid table regex")
});

const DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Largest table the room deals to.
const MAX_SEATS: usize = 10;

/// Match `re` at the start of `rest` and move `rest` past the match.
fn eat<'a>(re: &Regex, rest: &mut &'a str) -> Option<Captures<'a>> {
    let input: &'a str = *rest;
    let caps = re.captures(input)?;
    let end = caps.get(0).map_or(0, |m| m.end());
    *rest = &input[end..];
    Some(caps)
}

/// Split a printed amount into its currency symbol and value.
pub(super) fn parse_amount(
    field: &'static str,
    text: &str,
) -> Result<(Option<Currency>, Decimal), HandHistoryError> {
    let mut chars = text.chars();
    let (currency, digits) = match chars.next().and_then(Currency::from_symbol) {
        Some(currency) => (Some(currency), chars.as_str()),
        None => (None, text),
    };
    let value = Decimal::from_str(digits).map_err(|_| HandHistoryError::invalid(field, text))?;
    Ok((currency, value))
}

#[derive(Debug, Default)]
struct BuyIn {
    buyin: Decimal,
    rake: Decimal,
    bounty: Option<Decimal>,
    currency: Option<Currency>,
}

fn parse_buyin(rest: &mut &str) -> Result<BuyIn, HandHistoryError> {
    let caps = eat(&BUYIN_RE, rest).ok_or_else(|| HandHistoryError::invalid("buyin", *rest))?;
    if caps.name("freeroll").is_some() {
        return Ok(BuyIn::default());
    }
    let amounts = caps.name("amounts").map_or("", |m| m.as_str());
    let mut symbol = None;
    let mut values = Vec::with_capacity(3);
    for part in amounts.split('+') {
        let (currency, value) = parse_amount("buyin", part)?;
        symbol = symbol.or(currency);
        values.push(value);
    }
    let currency = caps
        .name("currency")
        .map(|m| Currency::from_code(m.as_str()))
        .or(symbol);
    let (buyin, bounty, rake) = match values.as_slice() {
        [buyin] => (*buyin, None, Decimal::ZERO),
        [buyin, rake] => (*buyin, None, *rake),
        [buyin, bounty, rake] => (*buyin, Some(*bounty), *rake),
        _ => return Err(HandHistoryError::invalid("buyin", amounts)),
    };
    Ok(BuyIn {
        buyin,
        rake,
        bounty,
        currency,
    })
}

fn parse_game(text: &str) -> Result<Game, HandHistoryError> {
    let game = match text {
        "Hold'em" => Game::Holdem,
        "Omaha" => Game::Omaha,
        "Omaha Hi/Lo" => Game::OmahaHiLo,
        "5 Card Omaha" => Game::FiveCardOmaha,
        "7 Card Stud" => Game::Stud,
        "7 Card Stud Hi/Lo" => Game::StudHiLo,
        "Razz" => Game::Razz,
        "5 Card Draw" => Game::FiveCardDraw,
        "Triple Draw 2-7 Lowball" => Game::TripleDraw,
        "Badugi" => Game::Badugi,
        _ => return Err(HandHistoryError::invalid("game", text)),
    };
    Ok(game)
}

fn parse_limit(text: &str) -> Result<Limit, HandHistoryError> {
    match text {
        "No Limit" => Ok(Limit::NoLimit),
        "Pot Limit" => Ok(Limit::PotLimit),
        "Limit" => Ok(Limit::FixedLimit),
        _ => Err(HandHistoryError::invalid("limit", text)),
    }
}

/// Read a wall clock time printed in the room's reference zone.
///
/// Times repeated by the autumn clock change resolve to the earlier instant;
/// times skipped by the spring change do not exist and are rejected.
pub(super) fn parse_date(text: &str, tz: Tz) -> Result<DateTime<Tz>, HandHistoryError> {
    let naive = NaiveDateTime::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| HandHistoryError::invalid("date", text))?;
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| HandHistoryError::invalid("date", text))
}

/// Parse the first line and the table line of one PokerStars hand.
pub(super) fn parse_header(text: &str, tz: Tz) -> Result<Header, HandHistoryError> {
    let mut lines = text
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty());

    let first = lines
        .next()
        .ok_or_else(|| HandHistoryError::UnknownFormat(String::new()))?;
    let mut rest = first;
    let ident = eat(&SIGNATURE_RE, &mut rest)
        .map(|caps| caps["ident"].to_string())
        .ok_or_else(|| HandHistoryError::UnknownFormat(first.chars().take(60).collect()))?;

    let tournament_ident = eat(&TOURNAMENT_RE, &mut rest).map(|caps| caps["ident"].to_string());
    let game_type = match tournament_ident {
        Some(_) => GameType::Tournament,
        None => GameType::Cash,
    };
    let buyin = match game_type {
        GameType::Tournament => Some(parse_buyin(&mut rest)?),
        GameType::Cash => None,
    };

    let game_caps = eat(&GAME_RE, &mut rest).ok_or_else(|| HandHistoryError::invalid("game", rest))?;
    let game = parse_game(&game_caps["game"])?;
    let limit = parse_limit(&game_caps["limit"])?;

    let tournament_level = match game_type {
        GameType::Tournament => Some(
            eat(&LEVEL_RE, &mut rest)
                .map(|caps| caps["level"].to_string())
                .ok_or_else(|| HandHistoryError::invalid("tournament_level", rest))?,
        ),
        GameType::Cash => None,
    };

    let stakes = eat(&STAKES_RE, &mut rest).ok_or_else(|| HandHistoryError::invalid("stakes", rest))?;
    let (sb_symbol, sb) = parse_amount("sb", &stakes["sb"])?;
    let (_, bb) = parse_amount("bb", &stakes["bb"])?;
    let stakes_currency = stakes
        .name("currency")
        .map(|m| Currency::from_code(m.as_str()))
        .or(sb_symbol);

    let date_text = BRACKET_DATE_RE
        .captures(rest)
        .or_else(|| PLAIN_DATE_RE.captures(rest))
        .and_then(|caps| caps.name("date"))
        .map(|m| m.as_str())
        .ok_or_else(|| HandHistoryError::invalid("date", rest))?;
    let date = parse_date(date_text, tz)?;

    let table_line = lines.next().ok_or(HandHistoryError::missing("table"))?;
    let table = TABLE_RE
        .captures(table_line)
        .ok_or_else(|| HandHistoryError::invalid("table", table_line))?;
    let max_players = table["max"]
        .parse::<usize>()
        .ok()
        .filter(|max| (1..=MAX_SEATS).contains(max))
        .ok_or_else(|| HandHistoryError::invalid("max_players", &table["max"]))?;

    let (currency, buyin, rake, bounty) = match buyin {
        Some(b) => (b.currency, Some(b.buyin), Some(b.rake), b.bounty),
        None => (stakes_currency, None, None, None),
    };

    Ok(Header {
        poker_room: PokerRoom::Stars,
        ident,
        game_type,
        tournament_ident,
        tournament_level,
        currency,
        buyin,
        rake,
        bounty,
        game,
        limit,
        sb,
        bb,
        date,
        table_name: table["name"].to_string(),
        max_players,
    })
}
