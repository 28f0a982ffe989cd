use crate::supabase::model::Event;
use chrono::NaiveDate;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortField {
    #[default]
    Date,
    Gym,
    Type,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Returns a sorted copy of `events`.
///
/// Equal keys fall back to `id`, and descending is the exact reverse of ascending, so
/// both directions are deterministic.
pub fn sort_events(events: &[Event], field: SortField, order: SortOrder) -> Vec<Event> {
    let mut sorted = events.to_vec();

    sorted.sort_by(|a, b| {
        let ordering = compare_by(a, b, field).then_with(|| a.id.cmp(&b.id));

        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    sorted
}

fn compare_by(a: &Event, b: &Event, field: SortField) -> Ordering {
    match field {
        SortField::Date => sort_date(a).cmp(&sort_date(b)),
        SortField::Gym => a.gym.name.cmp(&b.gym.name),
        SortField::Type => a.event_type.label().cmp(b.event_type.label()),
        SortField::Title => a.title.cmp(&b.title),
    }
}

/// Undated events sort as 1970-01-01.
fn sort_date(event: &Event) -> NaiveDate {
    event.calendar_date().unwrap_or_default()
}
