use chrono_tz::Tz;

use super::{Action, Body, HandHistoryError, Header, PokerRoom};

/// A hand-written parser for one room's export format.
///
/// Adding a room means adding a `PokerRoom` variant and an implementation
/// of this trait. Implementations hold no per-hand state, so one parser
/// value can be shared by any number of hands.
pub trait HandHistoryParser {
    fn room(&self) -> PokerRoom;

    /// Name used in the display form of a hand, e.g. `PokerStarsHandHistory`.
    fn name(&self) -> &'static str;

    /// Zone the room prints its reference timestamps in.
    fn reference_timezone(&self) -> Tz;

    /// Read the header lines. Must not look at seats, actions or summary.
    fn parse_header(&self, text: &str) -> Result<Header, HandHistoryError>;

    /// Read everything after the header.
    fn parse_body(&self, text: &str, header: &Header) -> Result<Body, HandHistoryError>;

    /// Read one street line into a typed action, None for lines that are
    /// not betting events (chat, table notices).
    fn parse_action(&self, line: &str) -> Option<Action>;
}
