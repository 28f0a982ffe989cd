use super::text::rule;
use crate::catalog::{gym_booking_page, gym_event_type_url};
use crate::dashboard::requirements::GymStats;
use crate::dashboard::state::Dashboard;
use crate::supabase::model::EventType;
use itertools::Itertools;
use strum::IntoEnumIterator;

/// Gym list with per-gym counts, then the events of the chosen gym.
///
/// Without a chosen gym (or with an unknown one) the first gym is shown.
pub fn render(dashboard: &Dashboard, chosen_gym: Option<&str>) -> String {
    let events = dashboard.filtered_and_sorted();
    let gyms = dashboard.all_gyms();

    let Some(selected) = chosen_gym
        .filter(|gym| gyms.iter().any(|known| known.as_str() == *gym))
        .map(str::to_string)
        .or_else(|| gyms.first().cloned())
    else {
        return "No gyms to show.".to_string();
    };

    let mut lines = vec![format!("Gymnastics Centers ({})", gyms.len()), rule(60)];

    for gym in &gyms {
        let stats = GymStats::for_gym(&events, gym);
        let marker = if *gym == selected { ">" } else { " " };

        lines.push(format!(
            "{} {}  {} events, KNO: {}{}",
            marker,
            gym,
            stats.total,
            stats.count(EventType::KidsNightOut),
            if stats.meets_requirements() {
                ""
            } else {
                "  (missing requirements)"
            }
        ));
    }

    let stats = GymStats::for_gym(&events, &selected);
    let venue = events
        .iter()
        .find(|event| event.gym.name == selected)
        .map(|event| event.gym.clone())
        .unwrap_or_default();

    lines.push(String::new());
    lines.push(selected.to_string());
    lines.push(rule(60));
    if !venue.address.is_empty() {
        lines.push(format!("Address: {}", venue.address));
    }
    if !venue.phone.is_empty() {
        lines.push(format!("Phone: {}", venue.phone));
    }
    lines.push(format!(
        "Booking: {}",
        if venue.booking_page.is_empty() {
            gym_booking_page(&selected)
        } else {
            venue.booking_page.as_str()
        }
    ));
    lines.push(
        EventType::iter()
            .map(|event_type| format!("{}: {}", event_type.short_label(), stats.count(event_type)))
            .join(" | "),
    );
    lines.push(String::new());

    let gym_events = events.iter().filter(|event| event.gym.name == selected).collect_vec();
    if gym_events.is_empty() {
        lines.push("No events for this gym with the current filters.".to_string());
    }
    for event in gym_events {
        lines.push(format!(
            "{} ({}) {} - {} [{}] {}",
            event.display_date, event.day, event.time, event.title, event.event_type, event.price
        ));
    }

    lines.push(String::new());
    lines.push("Listings:".to_string());
    lines.extend(EventType::iter().map(|event_type| {
        format!(
            "  {}: {}",
            event_type.short_label(),
            gym_event_type_url(&selected, event_type)
        )
    }));

    lines.join("\n")
}
