use super::text::{fit, row, rule};
use crate::dashboard::requirements::TypeTotals;
use crate::dashboard::state::Dashboard;
use crate::dates::{days_in_month, MonthYear};
use crate::supabase::model::EventType;
use chrono::{Datelike, NaiveDate};
use itertools::Itertools;
use strum::IntoEnumIterator;

const GYM_WIDTH: usize = 34;
const DAY_WIDTH: usize = 3;
const FIRST_PAGE_LAST_DAY: u32 = 15;

/// The month grid is split in two halves so it fits a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarPage {
    #[default]
    First,
    Second,
}

impl CalendarPage {
    pub fn from_number(page: u8) -> Option<Self> {
        match page {
            1 => Some(CalendarPage::First),
            2 => Some(CalendarPage::Second),
            _ => None,
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        match self {
            CalendarPage::First => day.day() <= FIRST_PAGE_LAST_DAY,
            CalendarPage::Second => day.day() > FIRST_PAGE_LAST_DAY,
        }
    }
}

fn type_code(event_type: EventType) -> char {
    match event_type {
        EventType::Clinic => 'C',
        EventType::KidsNightOut => 'K',
        EventType::OpenGym => 'O',
        EventType::SummerCamp => 'S',
    }
}

/// Gym-by-day grid for the selected month followed by the per-gym requirement table.
pub fn render(dashboard: &Dashboard, page: CalendarPage) -> String {
    let Some(month) = dashboard.month else {
        return "Pick a month to see the calendar.".to_string();
    };

    let mut lines = vec![format!(
        "{} (days {})",
        month,
        match page {
            CalendarPage::First => "1-15",
            CalendarPage::Second => "16-end",
        }
    )];
    lines.extend(grid(dashboard, month, page));
    lines.push(String::new());
    lines.push(
        EventType::iter()
            .map(|event_type| format!("{} = {}", type_code(event_type), event_type))
            .join(", "),
    );
    lines.push(String::new());
    lines.extend(statistics(dashboard));

    lines.join("\n")
}

fn grid(dashboard: &Dashboard, month: MonthYear, page: CalendarPage) -> Vec<String> {
    let days: Vec<NaiveDate> = days_in_month(month)
        .into_iter()
        .filter(|day| page.contains(*day))
        .collect();
    let events = dashboard.calendar_events();
    let gyms: Vec<String> = dashboard
        .all_gyms()
        .into_iter()
        .filter(|gym| dashboard.gyms.matches(gym.as_str()))
        .collect();

    let mut header = vec![fit("Gym", GYM_WIDTH)];
    header.extend(days.iter().map(|day| fit(&day.day().to_string(), DAY_WIDTH)));

    let mut lines = vec![
        row(&header),
        rule(GYM_WIDTH + days.len() * (DAY_WIDTH + 3)),
    ];

    for gym in &gyms {
        let mut cells = vec![fit(gym, GYM_WIDTH)];
        cells.extend(days.iter().map(|day| {
            let codes: String = events
                .iter()
                .filter(|event| event.gym.name == *gym && event.calendar_date() == Some(*day))
                .map(|event| type_code(event.event_type))
                .collect();
            fit(&codes, DAY_WIDTH)
        }));
        lines.push(row(&cells));
    }

    lines
}

fn statistics(dashboard: &Dashboard) -> Vec<String> {
    let month_events = dashboard.month_events();
    let widths = [GYM_WIDTH, 4, 6, 8, 7, 22, 11, 5];
    let header = [
        "Gym",
        "KNO",
        "Clinic",
        "Open Gym",
        "Monthly",
        "Missing",
        "Summer Camp",
        "Total",
    ];

    let mut lines = vec![
        format!("Event Statistics by Gym (Total Events: {})", month_events.len()),
        row(&header
            .iter()
            .zip(widths)
            .map(|(title, width)| fit(title, width))
            .collect::<Vec<_>>()),
        rule(widths.iter().map(|width| width + 3).sum()),
    ];

    for stats in dashboard.gym_statistics() {
        let missing = stats.missing_requirements();
        let missing = if missing.is_empty() {
            "OK".to_string()
        } else {
            missing.iter().map(EventType::short_label).join(", ")
        };

        let cells = [
            stats.gym.to_string(),
            stats.count(EventType::KidsNightOut).to_string(),
            stats.count(EventType::Clinic).to_string(),
            stats.count(EventType::OpenGym).to_string(),
            stats.required_total().to_string(),
            missing,
            stats.count(EventType::SummerCamp).to_string(),
            stats.total.to_string(),
        ];
        lines.push(row(&cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| fit(cell, width))
            .collect::<Vec<_>>()));
    }

    let totals = TypeTotals::of(&month_events);
    let cells = [
        "TOTAL".to_string(),
        totals.count(EventType::KidsNightOut).to_string(),
        totals.count(EventType::Clinic).to_string(),
        totals.count(EventType::OpenGym).to_string(),
        totals.required_total().to_string(),
        "-".to_string(),
        totals.count(EventType::SummerCamp).to_string(),
        totals.total.to_string(),
    ];
    lines.push(row(&cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| fit(cell, width))
        .collect::<Vec<_>>()));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_events;

    fn june_dashboard() -> Dashboard {
        let mut dashboard = Dashboard::new(sample_events());
        dashboard.month = MonthYear::new(2025, 6);
        dashboard
    }

    #[test_log::test]
    fn should_place_events_on_their_day() {
        let calendar = render(&june_dashboard(), CalendarPage::First);
        let cedar_park_row = calendar
            .lines()
            .find(|line| line.starts_with("Capital Gymnastics - Cedar Park"))
            .unwrap();

        // June 2 camp, June 3 clinic, June 4 open gym
        assert!(cedar_park_row.contains("| S   | C   | O "));
    }

    #[test_log::test]
    fn should_ignore_search_term_in_grid() {
        let mut dashboard = june_dashboard();
        dashboard.set_search("no such event");

        let calendar = render(&dashboard, CalendarPage::First);
        let cedar_park_row = calendar
            .lines()
            .find(|line| line.starts_with("Capital Gymnastics - Cedar Park"))
            .unwrap();

        assert!(cedar_park_row.contains("| S   | C   | O "));
    }

    #[test_log::test]
    fn should_split_month_into_pages() {
        let first = render(&june_dashboard(), CalendarPage::First);
        let second = render(&june_dashboard(), CalendarPage::Second);

        assert!(first.lines().nth(1).unwrap().ends_with("| 15"));
        assert!(second.lines().nth(1).unwrap().ends_with("| 30"));
    }

    #[test_log::test]
    fn should_report_missing_requirements() {
        let calendar = render(&june_dashboard(), CalendarPage::First);
        let pflugerville = calendar
            .lines()
            .filter(|line| line.starts_with("Capital Gymnastics - Pflugerville"))
            .last()
            .unwrap();

        assert!(pflugerville.contains("Clinic, KNO, Open Gym"));
        assert!(calendar.contains("Capital Gymnastics - Cedar Park    | 2    | 2      | 1        | 5       | OK"));
    }

    #[test_log::test]
    fn when_no_month_is_selected_should_ask_for_one() {
        let dashboard = Dashboard::new(sample_events());

        assert_eq!(
            render(&dashboard, CalendarPage::First),
            "Pick a month to see the calendar."
        );
    }

    #[test_log::test]
    fn should_parse_page_numbers() {
        assert_eq!(CalendarPage::from_number(2), Some(CalendarPage::Second));
        assert_eq!(CalendarPage::from_number(3), None);
    }
}
