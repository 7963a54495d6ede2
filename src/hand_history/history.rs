use std::fmt;

use tracing::{debug, instrument, trace};

use super::{
    Action, Body, HandHistoryConfig, HandHistoryError, HandHistoryParser, Header, ParseMode,
    ParseState, Player, Street,
};
use crate::core::Card;

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Unparsed,
    HeaderParsed(Header),
    FullyParsed(Header, Body),
}

/// One hand, read from the text of a single hand history record.
///
/// The header is cheap to parse and is enough to list or filter large
/// archives; the body is parsed only when asked for. Once a phase has run
/// its fields never change.
///
/// # Examples
///
/// ```
/// use rs_handhistory::hand_history::{HandHistoryConfig, ParseMode, ParseState};
/// use rs_handhistory::pokerstars::PokerStarsHandHistory;
///
/// let text = "PokerStars Hand #1: Hold'em No Limit ($0.01/$0.02 USD) - 2013/10/04 13:53:27 ET\n\
///             Table 'Aase' 6-max Seat #1 is the button\n";
/// let config = HandHistoryConfig::default().with_mode(ParseMode::HeaderOnly);
/// let hand = PokerStarsHandHistory::with_config(text, config).unwrap();
/// assert_eq!(ParseState::HeaderParsed, hand.parse_state());
/// assert_eq!("1", hand.header().unwrap().ident);
/// assert!(hand.body().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct HandHistory<P> {
    parser: P,
    config: HandHistoryConfig,
    text: String,
    state: State,
}

impl<P: HandHistoryParser + Default> HandHistory<P> {
    /// Fully parse one hand with the default configuration.
    pub fn new(text: impl Into<String>) -> Result<Self, HandHistoryError> {
        Self::with_config(text, HandHistoryConfig::default())
    }

    /// Build a hand and parse as much as `config.mode` asks for.
    pub fn with_config(
        text: impl Into<String>,
        config: HandHistoryConfig,
    ) -> Result<Self, HandHistoryError> {
        Self::with_parser(P::default(), text, config)
    }

    /// Keep the text without parsing anything yet.
    pub fn unparsed(text: impl Into<String>) -> Self {
        Self {
            parser: P::default(),
            config: HandHistoryConfig::default().with_mode(ParseMode::Lazy),
            text: text.into(),
            state: State::Unparsed,
        }
    }
}

impl<P: HandHistoryParser> HandHistory<P> {
    pub fn with_parser(
        parser: P,
        text: impl Into<String>,
        config: HandHistoryConfig,
    ) -> Result<Self, HandHistoryError> {
        let mut hand = Self {
            parser,
            config,
            text: text.into(),
            state: State::Unparsed,
        };
        match config.mode {
            ParseMode::Lazy => {}
            ParseMode::HeaderOnly => hand.parse_header()?,
            ParseMode::Full => {
                hand.parse_header()?;
                hand.parse_body()?;
            }
        }
        Ok(hand)
    }

    /// Run the header phase. Fails if it already ran.
    #[instrument(level = "trace", skip(self), fields(room = %self.parser.room()))]
    pub fn parse_header(&mut self) -> Result<(), HandHistoryError> {
        if !matches!(self.state, State::Unparsed) {
            return Err(HandHistoryError::InvalidOperation(
                "header has already been parsed",
            ));
        }
        let mut header = self.parser.parse_header(&self.text)?;
        header.date = header.date.with_timezone(&self.config.timezone);
        debug!(ident = %header.ident, game_type = %header.game_type, "Parsed hand history header");
        self.state = State::HeaderParsed(header);
        Ok(())
    }

    /// Run the body phase. The header must be parsed and the body must not.
    #[instrument(level = "trace", skip(self), fields(room = %self.parser.room()))]
    pub fn parse_body(&mut self) -> Result<(), HandHistoryError> {
        match std::mem::take(&mut self.state) {
            State::HeaderParsed(header) => match self.parser.parse_body(&self.text, &header) {
                Ok(body) => {
                    debug!(
                        ident = %header.ident,
                        players = body.seated().count(),
                        show_down = body.show_down,
                        "Parsed hand history body"
                    );
                    self.state = State::FullyParsed(header, body);
                    Ok(())
                }
                Err(e) => {
                    self.state = State::HeaderParsed(header);
                    Err(e)
                }
            },
            State::Unparsed => Err(HandHistoryError::InvalidOperation(
                "body can only be parsed after the header",
            )),
            fully_parsed => {
                self.state = fully_parsed;
                Err(HandHistoryError::InvalidOperation(
                    "body has already been parsed",
                ))
            }
        }
    }

    pub fn parse_state(&self) -> ParseState {
        match self.state {
            State::Unparsed => ParseState::Unparsed,
            State::HeaderParsed(_) => ParseState::HeaderParsed,
            State::FullyParsed(_, _) => ParseState::FullyParsed,
        }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn header(&self) -> Option<&Header> {
        match &self.state {
            State::Unparsed => None,
            State::HeaderParsed(header) | State::FullyParsed(header, _) => Some(header),
        }
    }

    pub fn body(&self) -> Option<&Body> {
        match &self.state {
            State::FullyParsed(_, body) => Some(body),
            _ => None,
        }
    }

    fn require_body(&self) -> Result<&Body, HandHistoryError> {
        self.body().ok_or(HandHistoryError::InvalidOperation(
            "body has not been parsed",
        ))
    }

    pub fn button(&self) -> Result<&Player, HandHistoryError> {
        self.require_body()?.button()
    }

    pub fn hero(&self) -> Result<Option<&Player>, HandHistoryError> {
        Ok(self.require_body()?.hero())
    }

    pub fn players(&self) -> Result<&[Player], HandHistoryError> {
        Ok(&self.require_body()?.players)
    }

    pub fn board(&self) -> Result<Option<Vec<Card>>, HandHistoryError> {
        Ok(self.require_body()?.board())
    }

    pub fn winners(&self) -> Result<&[String], HandHistoryError> {
        Ok(&self.require_body()?.winners)
    }

    /// Typed actions of one street, None when the street was not dealt.
    /// Lines that are not betting events are left out.
    pub fn actions(&self, street: Street) -> Result<Option<Vec<Action>>, HandHistoryError> {
        let Some(lines) = self.require_body()?.street_actions(street) else {
            return Ok(None);
        };
        let actions = lines
            .iter()
            .filter_map(|line| {
                let action = self.parser.parse_action(line);
                if action.is_none() {
                    trace!(%street, line = %line, "Line is not a betting action");
                }
                action
            })
            .collect();
        Ok(Some(actions))
    }
}

impl<P: HandHistoryParser> fmt::Display for HandHistory<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.header() {
            Some(header) => write!(
                f,
                "<{}: {} hand #{}>",
                self.parser.name(),
                header.poker_room,
                header.ident
            ),
            None => write!(
                f,
                "<{}: {} unparsed hand>",
                self.parser.name(),
                self.parser.room()
            ),
        }
    }
}
