// Time-of-day value type used for lesson start/end times
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time is empty")]
    Empty,

    #[error("malformed time: {input}")]
    Malformed { input: String },

    #[error("time out of range: {input}")]
    OutOfRange { input: String },
}

/// Minutes since midnight. Seconds are accepted on input and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    pub fn hour(self) -> u8 {
        (self.minutes / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.minutes % 60) as u8
    }

    pub fn minutes_since_midnight(self) -> u16 {
        self.minutes
    }

    /// Lenient parse for backend values: anything unparsable is absent.
    pub fn parse_lenient(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|s| s.parse().ok())
    }
}

/// Truncates to the minute, like the lesson times themselves.
impl From<chrono::NaiveTime> for TimeOfDay {
    fn from(time: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    /// Accepts `H:MM`, `HH:MM` and `HH:MM:SS`. Anything after the seconds
    /// (fractions, offsets) is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimeParseError::Empty);
        }
        let malformed = || TimeParseError::Malformed {
            input: s.to_string(),
        };
        let out_of_range = || TimeParseError::OutOfRange {
            input: s.to_string(),
        };
        let digits = |p: &str| -> Result<u8, TimeParseError> {
            if p.is_empty() || p.len() > 2 || !p.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            p.parse::<u8>().map_err(|_| malformed())
        };

        let (hour_part, rest) = s.split_once(':').ok_or_else(malformed)?;
        let hour = digits(hour_part)?;
        let minute_part = rest.get(..2).ok_or_else(malformed)?;
        let minute = digits(minute_part)?;

        let tail = &rest[2..];
        if !tail.is_empty() {
            let seconds = tail.strip_prefix(':').ok_or_else(malformed)?;
            let sec = digits(seconds.get(..2).ok_or_else(malformed)?)?;
            if sec > 59 {
                return Err(out_of_range());
            }
        }

        Self::new(hour, minute).ok_or_else(out_of_range)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// `HH:MM–HH:MM` with an en dash. An absent side renders empty.
pub fn format_time_range(start: Option<TimeOfDay>, end: Option<TimeOfDay>) -> String {
    match (start, end) {
        (None, None) => String::new(),
        (s, e) => format!(
            "{}–{}",
            s.map(|t| t.to_string()).unwrap_or_default(),
            e.map(|t| t.to_string()).unwrap_or_default()
        ),
    }
}
