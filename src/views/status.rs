use super::text::rule;
use crate::config::model::ConfigError;
use crate::dashboard::metrics::DashboardMetrics;
use crate::dashboard::state::MonthCount;
use crate::supabase::loader::DataLoad;

/// One line telling where the shown events came from.
pub fn render_data_source(load: &DataLoad) -> String {
    match load {
        DataLoad::Loaded(events) => format!("Live data: {} events from Supabase", events.len()),
        DataLoad::ConfigError { fallback, .. } => format!(
            "Sample data: {} events (Supabase is not configured)",
            fallback.len()
        ),
        DataLoad::QueryError { error, fallback } => format!(
            "Sample data: {} events (loading failed: {})",
            fallback.len(),
            error
        ),
        DataLoad::EmptyResult { fallback } => format!(
            "Sample data: {} events (no events found in database)",
            fallback.len()
        ),
    }
}

/// Remediation screen for configuration problems.
pub fn render_config_error(error: &ConfigError) -> String {
    [
        "Configuration error".to_string(),
        rule(60),
        error.to_string(),
        String::new(),
        error.remediation().to_string(),
    ]
    .join("\n")
}

pub fn render_metrics(metrics: &DashboardMetrics) -> String {
    format!(
        "Total events: {} | Gyms: {} | Filtered: {} | Most popular: {} | Avg per gym: {}",
        metrics.total_events,
        metrics.total_gyms,
        metrics.filtered_events,
        metrics.most_popular_type_label(),
        metrics.average_events_per_gym
    )
}

pub fn render_months(months: &[MonthCount]) -> String {
    if months.is_empty() {
        return "No dated events.".to_string();
    }

    months
        .iter()
        .map(|month_count| format!("{}: {} events", month_count.month, month_count.count))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::MonthYear;
    use crate::sample::sample_events;

    #[test_log::test]
    fn should_explain_fallback_source() {
        let load = DataLoad::EmptyResult {
            fallback: sample_events(),
        };

        assert_eq!(
            render_data_source(&load),
            "Sample data: 15 events (no events found in database)"
        );
    }

    #[test_log::test]
    fn should_show_remediation_for_missing_config() {
        let screen = render_config_error(&ConfigError::Missing {
            name: "SUPABASE_URL",
        });

        assert!(screen.contains("SUPABASE_URL is required but not set"));
        assert!(screen.contains("then reload"));
    }

    #[test_log::test]
    fn should_list_months_with_counts() {
        let months = [MonthCount {
            month: MonthYear::new(2025, 6).unwrap(),
            count: 15,
        }];

        assert_eq!(render_months(&months), "June 2025: 15 events");
    }
}
