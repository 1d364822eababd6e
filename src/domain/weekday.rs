// School weekday domain model (Monday..Saturday)

/// A teaching day. Lessons are never scheduled on Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Grid column order, Monday first.
pub const WEEKDAYS: [Weekday; 6] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Backend numbering: Monday=1 … Saturday=6.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            _ => None,
        }
    }

    pub fn number(self) -> i64 {
        self.index() as i64 + 1
    }

    /// Zero-based column index.
    pub fn index(self) -> usize {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
        }
    }

    /// Column header shown on every timetable page.
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Dushanba",
            Self::Tuesday => "Seshanba",
            Self::Wednesday => "Chorshanba",
            Self::Thursday => "Payshanba",
            Self::Friday => "Juma",
            Self::Saturday => "Shanba",
        }
    }

    pub fn from_chrono(day: chrono::Weekday) -> Option<Self> {
        Self::from_number(i64::from(day.number_from_monday()))
    }
}
