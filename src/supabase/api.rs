use super::dto::{
    rows_to_events, EventTypeRow, EventWithDetailsRow, GymRow, InsertedEventRow, PostgrestError,
};
use super::model::{Event, EventTypeRecord, Gym, NewEvent};
use crate::config::model::SupabaseConfig;
use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info};

const REST_PATH: &str = "rest/v1";
const EVENTS_VIEW: &str = "events_with_details";
const EVENTS_TABLE: &str = "events";
const GYMS_TABLE: &str = "gyms";
const EVENT_TYPES_TABLE: &str = "event_types";

/// Thin PostgREST client over the dashboard's tables and views.
pub struct SupabaseAPI {
    client: ClientWithMiddleware,
    base_url: String,
    anon_key: String,
}

impl SupabaseAPI {
    pub fn new(config: &SupabaseConfig) -> Self {
        let client = ClientBuilder::new(Client::new())
            .with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder().build_with_max_retries(config.max_retries),
            ))
            .build();

        Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.to_string(),
        }
    }

    /**
    Returns every event, ordered by date ascending, in display shape.
    Rows that can't be displayed are dropped (and logged).
    */
    #[tracing::instrument(skip(self))]
    pub async fn get_events(&self) -> Result<Vec<Event>, APIError> {
        let rows = self.get_event_rows().await?;
        let events = rows_to_events(&rows);

        info!("Got {} events ({} rows)", events.len(), rows.len());

        Ok(events)
    }

    pub async fn get_event_rows(&self) -> Result<Vec<EventWithDetailsRow>, APIError> {
        self.select(EVENTS_VIEW, "event_date.asc", None).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_gyms(&self) -> Result<Vec<Gym>, APIError> {
        let rows: Vec<GymRow> = self.select(GYMS_TABLE, "name.asc", None).await?;

        Ok(rows.iter().map(GymRow::to_model).collect())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_event_types(&self) -> Result<Vec<EventTypeRecord>, APIError> {
        let rows: Vec<EventTypeRow> = self.select(EVENT_TYPES_TABLE, "name.asc", None).await?;

        Ok(rows.iter().map(EventTypeRow::to_model).collect())
    }

    /// Inserts one event. The loaded event list is not refreshed.
    #[tracing::instrument(skip(self, event), fields(event = %event.title))]
    pub async fn insert_event(&self, event: &NewEvent) -> Result<Option<InsertedEventRow>, APIError> {
        info!("Inserting event");

        let request = self
            .authorized(self.client.post(self.rest_url(EVENTS_TABLE)))
            .header("Prefer", "return=representation")
            .json(&[event]);

        let inserted: Vec<InsertedEventRow> = Self::read_rows(request).await?;

        Ok(inserted.into_iter().next())
    }

    /// Cheapest possible read, used to tell configuration problems from missing data.
    #[tracing::instrument(skip(self))]
    pub async fn test_connection(&self) -> Result<(), APIError> {
        let _: Vec<serde_json::Value> = self.select(GYMS_TABLE, "name.asc", Some(1)).await?;

        info!("Supabase connection successful");

        Ok(())
    }

    async fn select<T: DeserializeOwned>(
        &self,
        resource: &str,
        order: &str,
        limit: Option<u32>,
    ) -> Result<Vec<T>, APIError> {
        let mut query = vec![("select", "*".to_string()), ("order", order.to_string())];
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        debug!("Selecting from {}", resource);

        let request = self
            .authorized(self.client.get(self.rest_url(resource)))
            .query(&query);

        Self::read_rows(request).await
    }

    async fn read_rows<T: DeserializeOwned>(request: RequestBuilder) -> Result<Vec<T>, APIError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error = APIError::from_status(status, &body);
            error!("Request failed: {}", error);
            return Err(error);
        }

        serde_json::from_str::<Vec<T>>(&body).map_err(|e| {
            error!("Response parse failed: {:?}", e);
            APIError::InvalidResponse(e)
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    fn rest_url(&self, resource: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_PATH, resource)
    }
}

#[derive(Debug, Error)]
pub enum APIError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest_middleware::Error),
    #[error("Failed reading response: {0}")]
    Body(#[from] reqwest::Error),
    #[error("Database error ({status}): {message}")]
    Status { status: StatusCode, message: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(serde_json::Error),
}

impl APIError {
    fn from_status(status: StatusCode, body: &str) -> Self {
        let postgrest = serde_json::from_str::<PostgrestError>(body).unwrap_or_default();

        let message = match (postgrest.message.is_empty(), postgrest.hint.is_empty()) {
            (true, _) => body.trim().to_string(),
            (false, true) => postgrest.message,
            (false, false) => format!("{} (hint: {})", postgrest.message, postgrest.hint),
        };

        let message = if postgrest.code.is_empty() {
            message
        } else {
            format!("{} [{}]", message, postgrest.code)
        };

        APIError::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_build_rest_urls_without_double_slashes() {
        let api = SupabaseAPI::new(&SupabaseConfig {
            url: "https://abcd.supabase.co/".to_string(),
            anon_key: "anon-key".to_string(),
            max_retries: 0,
        });

        assert_eq!(
            api.rest_url(EVENTS_VIEW),
            "https://abcd.supabase.co/rest/v1/events_with_details"
        );
    }

    #[test_log::test]
    fn should_read_postgrest_error_message() {
        let error = APIError::from_status(
            StatusCode::NOT_FOUND,
            r#"{"code":"42P01","details":null,"hint":null,"message":"relation \"public.events_with_details\" does not exist"}"#,
        );

        assert_eq!(
            error.to_string(),
            "Database error (404 Not Found): relation \"public.events_with_details\" does not exist [42P01]"
        );
    }

    #[test_log::test]
    fn when_error_body_is_not_json_should_keep_raw_body() {
        let error = APIError::from_status(StatusCode::BAD_GATEWAY, " upstream timed out ");

        assert_eq!(
            error.to_string(),
            "Database error (502 Bad Gateway): upstream timed out"
        );
    }
}
