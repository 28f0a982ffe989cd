use super::filter::filter_events;
use super::metrics::{compute_metrics, event_types, gym_names, DashboardMetrics};
use super::requirements::{gym_statistics, GymStats};
use super::selection::Selection;
use super::sort::{sort_events, SortField, SortOrder};
use crate::dates::{MonthYear, DEFAULT_MONTH};
use crate::export::{copy_to_clipboard, generate_copy_text, Clipboard, CopyFormat};
use crate::supabase::model::{Event, EventType};
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, Instant};
use tracing::debug;

/// How long a copy action reports as "copied".
pub const COPY_RESET: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCount {
    pub month: MonthYear,
    pub count: usize,
}

/// Everything the views derive from: the loaded events plus the user's selections.
///
/// Derived lists are recomputed on every call.
#[derive(Debug, Clone)]
pub struct Dashboard {
    events: Vec<Event>,
    /// `None` shows every month.
    pub month: Option<MonthYear>,
    pub gyms: Selection<String>,
    pub event_types: Selection<EventType>,
    pub search: String,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub selected_events: BTreeSet<u32>,
    copied_at: HashMap<String, Instant>,
}

impl Dashboard {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            month: None,
            gyms: Selection::AllSelected,
            event_types: Selection::AllSelected,
            search: String::new(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            selected_events: BTreeSet::new(),
            copied_at: HashMap::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn all_gyms(&self) -> Vec<String> {
        gym_names(&self.events)
    }

    pub fn all_event_types(&self) -> Vec<EventType> {
        event_types(&self.events)
    }

    /// Events of the selected month, before any other filter.
    pub fn month_events(&self) -> Vec<Event> {
        match self.month {
            None => self.events.clone(),
            Some(month) => self
                .events
                .iter()
                .filter(|event| event.is_in_month(month))
                .cloned()
                .collect(),
        }
    }

    pub fn filtered_and_sorted(&self) -> Vec<Event> {
        let filtered = filter_events(
            &self.month_events(),
            &self.gyms,
            &self.event_types,
            &self.search,
        );

        sort_events(&filtered, self.sort_field, self.sort_order)
    }

    /// Month events narrowed by the gym and type selections. The search term does not
    /// apply to the calendar.
    pub fn calendar_events(&self) -> Vec<Event> {
        filter_events(&self.month_events(), &self.gyms, &self.event_types, "")
    }

    pub fn metrics(&self) -> DashboardMetrics {
        compute_metrics(&self.events, &self.gyms, &self.event_types)
    }

    /// Per-gym counts for the selected month, for every gym in the data set.
    pub fn gym_statistics(&self) -> Vec<GymStats> {
        gym_statistics(&self.month_events(), &self.all_gyms())
    }

    /// Months that have events, chronologically, with their event counts.
    pub fn available_months(&self) -> Vec<MonthCount> {
        self.events
            .iter()
            .filter_map(Event::month_year)
            .counts()
            .into_iter()
            .map(|(month, count)| MonthCount { month, count })
            .sorted_by_key(|month_count| month_count.month)
            .collect()
    }

    /// The requested month if any. Otherwise June 2025 when it has events, else the
    /// earliest month that does.
    pub fn initial_month(&self, requested: Option<MonthYear>) -> MonthYear {
        if let Some(month) = requested {
            return month;
        }

        let months = self.available_months();
        if months.iter().any(|month_count| month_count.month == DEFAULT_MONTH) {
            return DEFAULT_MONTH;
        }

        months
            .first()
            .map(|month_count| month_count.month)
            .unwrap_or(DEFAULT_MONTH)
    }

    pub fn toggle_gym(&mut self, gym: &str) {
        self.gyms.toggle(gym.to_string());
    }

    pub fn toggle_event_type(&mut self, event_type: EventType) {
        self.event_types.toggle(event_type);
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    /// Picking the current field again flips the order; a new field starts ascending.
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.reversed();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Asc;
        }
    }

    pub fn toggle_event_selection(&mut self, id: u32) {
        if !self.selected_events.remove(&id) {
            self.selected_events.insert(id);
        }
    }

    pub fn select_all_visible(&mut self) {
        self.selected_events = self
            .filtered_and_sorted()
            .iter()
            .map(|event| event.id)
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected_events.clear();
    }

    /// Selected events if any are selected, otherwise everything visible.
    pub fn copy_targets(&self) -> Vec<Event> {
        let visible = self.filtered_and_sorted();

        if self.selected_events.is_empty() {
            visible
        } else {
            visible
                .into_iter()
                .filter(|event| self.selected_events.contains(&event.id))
                .collect()
        }
    }

    /// Copies the targets in `format`, marking `bulk-<format>` as copied on success.
    pub fn handle_copy<C: Clipboard + ?Sized>(
        &mut self,
        format: CopyFormat,
        clipboard: &mut C,
        now: Instant,
    ) -> bool {
        let targets = self.copy_targets();
        let text = generate_copy_text(&targets, format);

        debug!("Copying {} events as {}", targets.len(), format);

        let success = copy_to_clipboard(clipboard, &text);
        if success {
            self.copied_at.insert(copy_key(format), now);
        }

        success
    }

    pub fn is_copied(&self, format: CopyFormat, now: Instant) -> bool {
        self.copied_at
            .get(&copy_key(format))
            .is_some_and(|copied_at| now.saturating_duration_since(*copied_at) < COPY_RESET)
    }
}

fn copy_key(format: CopyFormat) -> String {
    format!("bulk-{}", format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::WriterClipboard;
    use crate::sample::sample_events;
    use chrono::NaiveDate;

    fn june_2025() -> MonthYear {
        MonthYear::new(2025, 6).unwrap()
    }

    #[test_log::test]
    fn should_flip_order_when_sorting_by_same_field() {
        let mut dashboard = Dashboard::new(sample_events());

        dashboard.sort_by(SortField::Date);
        assert_eq!(dashboard.sort_order, SortOrder::Desc);

        dashboard.sort_by(SortField::Title);
        assert_eq!(dashboard.sort_field, SortField::Title);
        assert_eq!(dashboard.sort_order, SortOrder::Asc);
    }

    #[test_log::test]
    fn should_restrict_to_selected_month() {
        let mut dashboard = Dashboard::new(sample_events());

        dashboard.month = Some(june_2025());
        assert_eq!(dashboard.filtered_and_sorted().len(), 15);

        dashboard.month = Some(june_2025().next());
        assert!(dashboard.filtered_and_sorted().is_empty());
    }

    #[test_log::test]
    fn should_list_available_months() {
        let dashboard = Dashboard::new(sample_events());

        assert_eq!(
            dashboard.available_months(),
            vec![MonthCount {
                month: june_2025(),
                count: 15
            }]
        );
    }

    #[test_log::test]
    fn should_start_on_june_2025_when_it_has_events() {
        let dashboard = Dashboard::new(sample_events());

        assert_eq!(dashboard.initial_month(None), june_2025());
        assert_eq!(
            dashboard.initial_month(Some(june_2025().next())),
            june_2025().next()
        );
    }

    #[test_log::test]
    fn when_june_2025_has_no_events_should_start_on_first_available_month() {
        let events = sample_events()
            .into_iter()
            .take(3)
            .zip([(2025, 9, 4), (2025, 8, 20), (2025, 9, 12)])
            .map(|(event, (year, month, day))| Event {
                date: NaiveDate::from_ymd_opt(year, month, day),
                ..event
            })
            .collect();
        let dashboard = Dashboard::new(events);

        assert_eq!(dashboard.initial_month(None), MonthYear::new(2025, 8).unwrap());
    }

    #[test_log::test]
    fn without_dated_events_should_start_on_june_2025() {
        let dashboard = Dashboard::new(Vec::new());

        assert_eq!(dashboard.initial_month(None), june_2025());
    }

    #[test_log::test]
    fn should_copy_selected_events_only() {
        let mut dashboard = Dashboard::new(sample_events());
        dashboard.toggle_event_selection(3);
        dashboard.toggle_event_selection(15);
        let mut clipboard = WriterClipboard::new(Vec::new());
        let now = Instant::now();

        assert!(dashboard.handle_copy(CopyFormat::Urls, &mut clipboard, now));

        let copied = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(
            copied,
            "https://portal.iclasspro.com/capgymavery/camps/91?sortBy=time\nhttps://portal.iclasspro.com/tigar/camps/22\n"
        );
    }

    #[test_log::test]
    fn should_reset_copied_state_after_two_seconds() {
        let mut dashboard = Dashboard::new(sample_events());
        let mut clipboard = WriterClipboard::new(Vec::new());
        let now = Instant::now();

        dashboard.handle_copy(CopyFormat::Csv, &mut clipboard, now);

        assert!(dashboard.is_copied(CopyFormat::Csv, now + Duration::from_millis(1999)));
        assert!(!dashboard.is_copied(CopyFormat::Csv, now + COPY_RESET));
        assert!(!dashboard.is_copied(CopyFormat::Urls, now));
    }

    #[test_log::test]
    fn when_selection_is_toggled_twice_should_be_cleared() {
        let mut dashboard = Dashboard::new(sample_events());

        dashboard.toggle_event_selection(4);
        dashboard.toggle_event_selection(4);

        assert!(dashboard.selected_events.is_empty());
        assert_eq!(dashboard.copy_targets().len(), 15);
    }
}
