use chrono_tz::Tz;

/// How much of the text the constructor parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseMode {
    /// Parse nothing; the caller drives `parse_header` and `parse_body`.
    Lazy,
    /// Parse the header only, for cheap listing and filtering.
    HeaderOnly,
    /// Parse header and body.
    #[default]
    Full,
}

/// Where a hand history is in its parse lifecycle. Transitions only move
/// forward.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParseState {
    Unparsed,
    HeaderParsed,
    FullyParsed,
}

/// Configuration for building a `HandHistory`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandHistoryConfig {
    pub mode: ParseMode,
    /// Zone the header date is expressed in. The room's own reference zone
    /// is always used to read the text.
    pub timezone: Tz,
}

impl Default for HandHistoryConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::Full,
            timezone: chrono_tz::US::Eastern,
        }
    }
}

impl HandHistoryConfig {
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }
}
