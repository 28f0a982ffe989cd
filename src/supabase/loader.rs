use super::api::{APIError, SupabaseAPI};
use super::model::Event;
use crate::config::model::{ConfigError, SupabaseConfig};
use crate::sample::sample_events;
use tracing::{error, info, warn};

/// Outcome of the one-shot startup fetch.
///
/// Every failure carries the events the dashboard should still show instead of an empty
/// screen.
#[derive(Debug)]
pub enum DataLoad {
    Loaded(Vec<Event>),
    ConfigError {
        error: ConfigError,
        fallback: Vec<Event>,
    },
    QueryError {
        error: APIError,
        fallback: Vec<Event>,
    },
    EmptyResult {
        fallback: Vec<Event>,
    },
}

impl DataLoad {
    pub fn events(&self) -> &[Event] {
        match self {
            DataLoad::Loaded(events) => events,
            DataLoad::ConfigError { fallback, .. }
            | DataLoad::QueryError { fallback, .. }
            | DataLoad::EmptyResult { fallback } => fallback,
        }
    }

    pub fn into_events(self) -> Vec<Event> {
        match self {
            DataLoad::Loaded(events) => events,
            DataLoad::ConfigError { fallback, .. }
            | DataLoad::QueryError { fallback, .. }
            | DataLoad::EmptyResult { fallback } => fallback,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, DataLoad::Loaded(_))
    }
}

/// Validates the configuration outcome, then fetches.
pub async fn load_events(config: Result<&SupabaseConfig, ConfigError>) -> DataLoad {
    match config {
        Ok(config) => fetch_events(&SupabaseAPI::new(config)).await,
        Err(error) => {
            error!("Configuration error: {}", error);
            DataLoad::ConfigError {
                error,
                fallback: sample_events(),
            }
        }
    }
}

#[tracing::instrument(skip(api))]
pub async fn fetch_events(api: &SupabaseAPI) -> DataLoad {
    info!("Fetching events from Supabase");

    match api.get_events().await {
        Ok(events) if events.is_empty() => {
            warn!("No events found in database, showing sample events");
            DataLoad::EmptyResult {
                fallback: sample_events(),
            }
        }
        Ok(events) => {
            info!("Loaded {} events from database", events.len());
            DataLoad::Loaded(events)
        }
        Err(error) => {
            error!("Failed to fetch events: {}", error);
            DataLoad::QueryError {
                error,
                fallback: sample_events(),
            }
        }
    }
}
