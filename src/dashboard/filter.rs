use super::selection::Selection;
use crate::supabase::model::{Event, EventType};

/// Keeps events matching the gym selection, the type selection and the search term.
///
/// The search is a case-insensitive substring match on title, display date, day label
/// or gym name; a blank term matches everything. Input order is preserved.
pub fn filter_events(
    events: &[Event],
    gyms: &Selection<String>,
    event_types: &Selection<EventType>,
    search: &str,
) -> Vec<Event> {
    let search = search.to_lowercase();

    events
        .iter()
        .filter(|event| gyms.matches(event.gym.name.as_str()))
        .filter(|event| event_types.matches(&event.event_type))
        .filter(|event| search.is_empty() || matches_search(event, &search))
        .cloned()
        .collect()
}

fn matches_search(event: &Event, search: &str) -> bool {
    [
        &event.title,
        &event.display_date,
        &event.day,
        &event.gym.name,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(search))
}
