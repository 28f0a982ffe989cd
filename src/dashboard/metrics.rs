use super::filter::filter_events;
use super::selection::Selection;
use crate::supabase::model::{Event, EventType};
use itertools::Itertools;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub total_events: usize,
    pub total_gyms: usize,
    /// Events left after the gym and type selections (the search term is not applied).
    pub filtered_events: usize,
    pub most_popular_type: Option<EventType>,
    pub average_events_per_gym: String,
}

impl DashboardMetrics {
    pub fn most_popular_type_label(&self) -> &'static str {
        self.most_popular_type
            .as_ref()
            .map(EventType::label)
            .unwrap_or("None")
    }
}

pub fn compute_metrics(
    events: &[Event],
    gyms: &Selection<String>,
    event_types: &Selection<EventType>,
) -> DashboardMetrics {
    let total_gyms = gym_names(events).len();

    DashboardMetrics {
        total_events: events.len(),
        total_gyms,
        filtered_events: filter_events(events, gyms, event_types, "").len(),
        most_popular_type: most_popular_type(events),
        average_events_per_gym: average_per_gym(events.len(), total_gyms),
    }
}

/// Distinct gym names in first-seen order.
pub fn gym_names(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|event| event.gym.name.as_str())
        .filter(|name| !name.is_empty())
        .unique()
        .map(str::to_string)
        .collect()
}

/// Distinct event types in first-seen order.
pub fn event_types(events: &[Event]) -> Vec<EventType> {
    events.iter().map(|event| event.event_type).unique().collect()
}

/// Most frequent type. On a tie, the type encountered first in `events` wins.
pub fn most_popular_type(events: &[Event]) -> Option<EventType> {
    let counts: HashMap<EventType, usize> = events.iter().map(|event| event.event_type).counts();

    event_types(events)
        .into_iter()
        .fold(None, |best: Option<EventType>, candidate| match best {
            Some(best) if counts[&best] >= counts[&candidate] => Some(best),
            _ => Some(candidate),
        })
}

/// One decimal place, or "0" when there are no gyms.
pub fn average_per_gym(total_events: usize, total_gyms: usize) -> String {
    if total_gyms == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", total_events as f64 / total_gyms as f64)
    }
}
