use super::text::rule;
use crate::catalog::event_type_color;
use crate::dashboard::state::Dashboard;
use crate::supabase::model::Event;

const CARD_WIDTH: usize = 60;

pub fn render(dashboard: &Dashboard) -> String {
    let events = dashboard.filtered_and_sorted();

    if events.is_empty() {
        return "No events match the current filters.".to_string();
    }

    events
        .iter()
        .map(|event| card(event, dashboard.selected_events.contains(&event.id)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn card(event: &Event, selected: bool) -> String {
    let marker = if selected { "[x]" } else { "[ ]" };
    let when = match (event.display_date.is_empty(), event.day.is_empty()) {
        (true, _) => "No date".to_string(),
        (false, true) => event.display_date.to_string(),
        (false, false) => format!("{} ({})", event.display_date, event.day),
    };

    let mut lines = vec![
        rule(CARD_WIDTH),
        format!("{} {} [{}]", marker, event.title, event.event_type),
        format!("    {}", event.gym.name),
        format!("    {} at {}", when, or_dash(&event.time)),
        format!("    Price: {}", or_dash(&event.price)),
    ];

    if !event.gym.address.is_empty() {
        lines.push(format!("    Address: {}", event.gym.address));
    }
    if !event.gym.phone.is_empty() {
        lines.push(format!("    Phone: {}", event.gym.phone));
    }
    if !event.url.is_empty() {
        lines.push(format!("    Details: {}", event.url));
    }
    lines.push(format!("    Color: {}", event_type_color(event.event_type)));

    lines.join("\n")
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
