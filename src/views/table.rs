use super::text::{fit, row, rule};
use crate::dashboard::sort::{SortField, SortOrder};
use crate::dashboard::state::Dashboard;

const COLUMNS: [(&str, Option<SortField>, usize); 8] = [
    ("Sel", None, 3),
    ("#", None, 3),
    ("Date", Some(SortField::Date), 14),
    ("Gym", Some(SortField::Gym), 32),
    ("Title", Some(SortField::Title), 34),
    ("Type", Some(SortField::Type), 14),
    ("Time", None, 19),
    ("Price", None, 6),
];

/// Sortable table of the filtered events; the active sort column carries an arrow.
pub fn render(dashboard: &Dashboard) -> String {
    let events = dashboard.filtered_and_sorted();
    let header: Vec<String> = COLUMNS
        .iter()
        .map(|(title, field, width)| {
            let title = match field {
                Some(field) if *field == dashboard.sort_field => {
                    let arrow = match dashboard.sort_order {
                        SortOrder::Asc => "^",
                        SortOrder::Desc => "v",
                    };
                    format!("{} {}", title, arrow)
                }
                _ => title.to_string(),
            };
            fit(&title, *width)
        })
        .collect();
    let width = COLUMNS.iter().map(|(_, _, width)| width + 3).sum::<usize>();

    let mut lines = vec![
        format!(
            "Events ({} shown, {} selected)",
            events.len(),
            dashboard.selected_events.len()
        ),
        row(&header),
        rule(width),
    ];

    lines.extend(events.iter().map(|event| {
        let selected = if dashboard.selected_events.contains(&event.id) {
            "[x]"
        } else {
            "[ ]"
        };

        row(&[
            fit(selected, 3),
            fit(&event.id.to_string(), 3),
            fit(&event.display_date, 14),
            fit(&event.gym.name, 32),
            fit(&event.title, 34),
            fit(event.event_type.label(), 14),
            fit(&event.time, 19),
            fit(&event.price, 6),
        ])
    }));

    if events.is_empty() {
        lines.push("No events match the current filters.".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_events;

    #[test_log::test]
    fn should_mark_sort_column_and_selection() {
        let mut dashboard = Dashboard::new(sample_events());
        dashboard.sort_by(SortField::Title);
        dashboard.toggle_event_selection(6);

        let table = render(&dashboard);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Events (15 shown, 1 selected)");
        assert!(lines[1].contains("Title ^"));
        assert!(lines[3].starts_with("[ ] | 3 "));
        assert!(table.contains("[x] | 6"));
    }

    #[test_log::test]
    fn when_nothing_matches_should_say_so() {
        let mut dashboard = Dashboard::new(sample_events());
        dashboard.set_search("no such event");

        assert!(render(&dashboard).ends_with("No events match the current filters."));
    }
}
