use crate::dates::{day_of_week, format_display_date, parse_display_date, MonthYear};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Where an event takes place, as shown next to every event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Venue {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub booking_page: String,
}

impl Venue {
    pub fn new(name: &str, address: &str, phone: &str, booking_page: &str) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            booking_page: booking_page.to_string(),
        }
    }
}

/// When an event happens and what it costs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    pub date: Option<NaiveDate>,
    pub time: String,
    pub price: String,
}

impl Schedule {
    pub fn new(date: Option<NaiveDate>, time: &str, price: &str) -> Self {
        Self {
            date,
            time: time.to_string(),
            price: price.to_string(),
        }
    }
}

/// Display-shape event.
///
/// `id` is the position in the loaded list (1-based) and is not stable across reloads.
/// `date` is the canonical calendar date; `display_date` is derived from it once and
/// is only ever parsed back when `date` is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: u32,
    pub gym: Venue,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub display_date: String,
    pub time: String,
    pub price: String,
    pub day: String,
    pub event_type: EventType,
    pub url: String,
}

impl Event {
    pub fn new(
        id: u32,
        gym: Venue,
        title: &str,
        schedule: Schedule,
        event_type: EventType,
        url: &str,
    ) -> Self {
        let Schedule { date, time, price } = schedule;

        Self {
            id,
            gym,
            title: title.to_string(),
            display_date: date.map(format_display_date).unwrap_or_default(),
            day: date.map(day_of_week).unwrap_or_default(),
            date,
            time,
            price,
            event_type,
            url: url.to_string(),
        }
    }

    pub fn with_day(mut self, day: &str) -> Self {
        if !day.trim().is_empty() {
            self.day = day.trim().to_string();
        }
        self
    }

    /// Canonical date, falling back to the display string for events that lack one.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.date.or_else(|| {
            if self.display_date.is_empty() {
                None
            } else {
                parse_display_date(&self.display_date)
            }
        })
    }

    pub fn month_year(&self) -> Option<MonthYear> {
        self.calendar_date().map(MonthYear::of)
    }

    pub fn is_in_month(&self, month: MonthYear) -> bool {
        self.month_year() == Some(month)
    }

    /// First half of a "6:30 PM - 9:30 PM" range.
    pub fn start_time(&self) -> &str {
        self.time.split(" - ").next().unwrap_or_default().trim()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum EventType {
    #[strum(to_string = "CLINIC")]
    Clinic,
    #[strum(to_string = "KIDS NIGHT OUT", serialize = "KNO")]
    KidsNightOut,
    #[strum(to_string = "OPEN GYM")]
    OpenGym,
    #[strum(to_string = "Summer Camp")]
    SummerCamp,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            EventType::Clinic => "Clinic",
            EventType::KidsNightOut => "KNO",
            EventType::OpenGym => "Open Gym",
            EventType::SummerCamp => "Summer Camp",
        }
    }

    /// Minimum events per gym per month. Advisory only.
    pub fn min_required(&self) -> usize {
        match self {
            EventType::KidsNightOut => 2,
            EventType::Clinic | EventType::OpenGym => 1,
            EventType::SummerCamp => 0,
        }
    }

    pub fn is_required(&self) -> bool {
        self.min_required() > 0
    }
}

/// Row of the `gyms` table, used by the admin form.
#[derive(Debug, Clone, PartialEq)]
pub struct Gym {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub booking_page_url: String,
}

/// Row of the `event_types` table, used by the admin form.
#[derive(Debug, Clone, PartialEq)]
pub struct EventTypeRecord {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub color: String,
    pub is_required: bool,
    pub min_required: i32,
}

/// Insert payload for the `events` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEvent {
    pub gym_id: Uuid,
    pub event_type_id: Uuid,
    pub title: String,
    pub event_date: NaiveDate,
    pub event_time: Option<String>,
    pub price: Option<String>,
    pub day_of_week: Option<String>,
    pub specific_url: Option<String>,
}
