use std::fmt;

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Position in the repeating seven-day schedule
///
/// Monday is day 1 and Sunday is day 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleDay(u8);

impl CycleDay {
    // `number_from_monday` is 1 for monday, 7 for sunday
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_weekday(weekday: Weekday) -> Self {
        Self(weekday.number_from_monday() as u8)
    }

    /// Number of the day, from 1 to 7
    pub fn number(self) -> u8 {
        self.0
    }

    /// Identifier used by the schedule data file, i.e.: "Day 1"
    pub fn id(self) -> String {
        self.to_string()
    }

    /// True if `day_id` names this cycle day
    pub fn is(self, day_id: &str) -> bool {
        day_id == self.id()
    }
}

impl fmt::Display for CycleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.number())
    }
}

/// Source of the current date
#[derive(Clone, Copy, Debug, Default)]
pub enum Clock {
    /// Local date of the machine, read on every call
    #[default]
    Local,
    /// Always the same date
    Fixed(NaiveDate),
}

impl Clock {
    pub fn date(self) -> NaiveDate {
        match self {
            Self::Local => Local::now().date_naive(),
            Self::Fixed(date) => date,
        }
    }

    /// Cycle day of the current date
    pub fn today(self) -> CycleDay {
        CycleDay::from_weekday(self.date().weekday())
    }
}
