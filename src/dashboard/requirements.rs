use crate::supabase::model::{Event, EventType};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Per-type event counts for one gym (or for everything, in [TypeTotals]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GymStats {
    pub gym: String,
    pub counts: BTreeMap<EventType, usize>,
    pub total: usize,
}

impl GymStats {
    pub fn for_gym(events: &[Event], gym: &str) -> Self {
        let gym_events: Vec<&Event> = events.iter().filter(|event| event.gym.name == gym).collect();

        Self {
            gym: gym.to_string(),
            counts: count_types(gym_events.iter().copied()),
            total: gym_events.len(),
        }
    }

    pub fn count(&self, event_type: EventType) -> usize {
        self.counts.get(&event_type).copied().unwrap_or(0)
    }

    /// Events of the types with a monthly minimum.
    pub fn required_total(&self) -> usize {
        EventType::iter()
            .filter(EventType::is_required)
            .map(|event_type| self.count(event_type))
            .sum()
    }

    /// Types below their monthly minimum. Advisory only.
    pub fn missing_requirements(&self) -> Vec<EventType> {
        EventType::iter()
            .filter(|event_type| self.count(*event_type) < event_type.min_required())
            .collect()
    }

    pub fn meets_requirements(&self) -> bool {
        self.missing_requirements().is_empty()
    }
}

/// Statistics row for every gym in `gyms`, in that order.
pub fn gym_statistics(events: &[Event], gyms: &[String]) -> Vec<GymStats> {
    gyms.iter().map(|gym| GymStats::for_gym(events, gym)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTotals {
    pub counts: BTreeMap<EventType, usize>,
    pub total: usize,
}

impl TypeTotals {
    pub fn of(events: &[Event]) -> Self {
        Self {
            counts: count_types(events.iter()),
            total: events.len(),
        }
    }

    pub fn count(&self, event_type: EventType) -> usize {
        self.counts.get(&event_type).copied().unwrap_or(0)
    }

    pub fn required_total(&self) -> usize {
        EventType::iter()
            .filter(EventType::is_required)
            .map(|event_type| self.count(event_type))
            .sum()
    }
}

fn count_types<'a, I: Iterator<Item = &'a Event>>(events: I) -> BTreeMap<EventType, usize> {
    events.fold(BTreeMap::new(), |mut counts, event| {
        *counts.entry(event.event_type).or_insert(0) += 1;
        counts
    })
}
