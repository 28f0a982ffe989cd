use chrono::{Datelike, Months, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{Display, Formatter};
use tracing::warn;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Layouts tried, in order, before the "Month Day, Year" fallback.
const DISPLAY_FORMATS: [&str; 5] = [
    "%B %d, %Y",
    "%A, %B %d, %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%B %d %Y",
];

lazy_static! {
    static ref ORDINAL_SUFFIX: Regex =
        Regex::new(r"(\d+)(st|nd|rd|th)").expect("Failed to create ordinal regex");
    static ref MONTH_DAY_YEAR: Regex =
        Regex::new(r"(\w+)\s+(\d+),\s+(\d+)").expect("Failed to create month-day-year regex");
}

/// Month shown when none is requested.
pub const DEFAULT_MONTH: MonthYear = MonthYear {
    year: 2025,
    month: 6,
};

/// Calendar navigation, one month at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MonthStep {
    #[strum(to_string = "previous", serialize = "prev")]
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthYear {
    pub year: i32,
    /// 1-based
    pub month: u32,
}

impl MonthYear {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn step(&self, step: MonthStep) -> Self {
        match step {
            MonthStep::Previous => self.previous(),
            MonthStep::Next => self.next(),
        }
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl Display for MonthYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// "June 3, 2025"
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Tuesday"
pub fn day_of_week(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Every day of the given month, in order.
pub fn days_in_month(month: MonthYear) -> Vec<NaiveDate> {
    let Some(first) = month.first_day() else {
        return Vec::new();
    };
    let Some(next_first) = first.checked_add_months(Months::new(1)) else {
        return Vec::new();
    };

    first.iter_days().take_while(|day| *day < next_first).collect()
}

/// Parses a display date back into a calendar date.
///
/// Ordinal suffixes are stripped first ("June 1st, 2025" → "June 1, 2025"). When no known
/// layout matches, the first "Month Day, Year" fragment in the string is tried.
pub fn parse_display_date(date: &str) -> Option<NaiveDate> {
    let cleaned = ORDINAL_SUFFIX.replace(date.trim(), "$1");

    DISPLAY_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
        .or_else(|| {
            let captures = MONTH_DAY_YEAR.captures(&cleaned)?;
            let fragment = format!("{} {}, {}", &captures[1], &captures[2], &captures[3]);

            NaiveDate::parse_from_str(&fragment, "%B %d, %Y").ok()
        })
}

pub fn month_year_from_date(date: &str) -> Option<MonthYear> {
    parse_display_date(date).map(MonthYear::of)
}

/// Unparsable dates never match.
pub fn is_date_in_month(date: &str, month: MonthYear) -> bool {
    match month_year_from_date(date) {
        Some(event_month) => event_month == month,
        None => {
            warn!("Unable to parse date '{}', treating it as outside {}", date, month);
            false
        }
    }
}
