use super::model::{Event, EventType, EventTypeRecord, Gym, Schedule, Venue};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;

/// Row of the `events_with_details` view.
// Note: nullable text columns go through `deserialize_str` so `null` becomes ""
#[derive(Debug, Deserialize)]
pub struct EventWithDetailsRow {
    #[serde(default, deserialize_with = "deserialize_str")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub event_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub event_time: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub price: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub day_of_week: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub specific_url: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub gym_name: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub gym_address: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub gym_phone: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub gym_booking_page: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub event_type: String,
}

impl EventWithDetailsRow {
    /// Rows without a gym or title, or with an event type outside the known set, are
    /// dropped. A missing date only leaves the event undated.
    #[tracing::instrument(skip(self), fields(self.title = %self.title))]
    pub fn to_model(&self, id: u32) -> Option<Event> {
        if self.gym_name.trim().is_empty() || self.title.trim().is_empty() {
            warn!("Row has no gym name or title (skipping row)");
            return None;
        }

        let event_type = match EventType::from_str(self.event_type.trim()) {
            Ok(event_type) => event_type,
            Err(_) => {
                warn!("Unknown event type '{}' (skipping row)", self.event_type);
                return None;
            }
        };

        if self.event_date.is_none() {
            warn!("Row has no usable event date (keeping it undated)");
        }

        let event = Event::new(
            id,
            Venue::new(
                &self.gym_name,
                &self.gym_address,
                &self.gym_phone,
                &self.gym_booking_page,
            ),
            &self.title,
            Schedule::new(self.event_date, &self.event_time, &self.price),
            event_type,
            &self.specific_url,
        )
        .with_day(&self.day_of_week);

        Some(event)
    }
}

/// Converts view rows into display events, numbering the kept rows from 1.
pub fn rows_to_events(rows: &[EventWithDetailsRow]) -> Vec<Event> {
    rows.iter()
        .filter_map(|row| row.to_model(0))
        .zip(1..)
        .map(|(event, id)| Event { id, ..event })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct GymRow {
    pub id: Uuid,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub phone: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub booking_page_url: String,
}

impl GymRow {
    pub fn to_model(&self) -> Gym {
        Gym {
            id: self.id,
            name: self.name.to_string(),
            address: self.address.to_string(),
            phone: self.phone.to_string(),
            booking_page_url: self.booking_page_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EventTypeRow {
    pub id: Uuid,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub display_name: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub color: String,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub min_required: i32,
}

impl EventTypeRow {
    pub fn to_model(&self) -> EventTypeRecord {
        EventTypeRecord {
            id: self.id,
            name: self.name.to_string(),
            display_name: if self.display_name.is_empty() {
                self.name.to_string()
            } else {
                self.display_name.to_string()
            },
            color: self.color.to_string(),
            is_required: self.is_required,
            min_required: self.min_required,
        }
    }
}

/// Row echoed back by an insert with `Prefer: return=representation`.
#[derive(Debug, Clone, Deserialize)]
pub struct InsertedEventRow {
    pub id: Uuid,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_date")]
    pub event_date: Option<NaiveDate>,
}

/// PostgREST error body.
#[derive(Debug, Default, Deserialize)]
pub struct PostgrestError {
    #[serde(default, deserialize_with = "deserialize_str")]
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub code: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub hint: String,
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Accepts `YYYY-MM-DD` and timestamps starting with it. Anything else is logged and
/// becomes `None`.
fn deserialize_date<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::String(s) => {
            if s.is_empty() {
                return Ok(None);
            }

            let day_part = s.get(..10).unwrap_or(s.as_str());

            Ok(NaiveDate::parse_from_str(day_part, "%Y-%m-%d")
                .inspect_err(|err| warn!("Failed to parse date '{s}'. Err: {err}"))
                .ok())
        }
        Value::Null => Ok(None),
        unknown => {
            warn!("Found an unknown date value: {}", unknown);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW_ROWS: &str = r##"
      [{
        "id": "5b0f7c1e-9a53-4c1f-8d0b-2f8a6c1c9e01",
        "title": "Back Handspring Skill Clinic",
        "event_date": "2025-06-03",
        "event_time": "6:30 PM - 7:30 PM",
        "price": "$25",
        "day_of_week": null,
        "specific_url": "https:\/\/portal.iclasspro.com\/capgymavery\/camps\/91?sortBy=time",
        "created_at": "2025-05-20T14:02:11.123456+00:00",
        "updated_at": "2025-05-20T14:02:11.123456+00:00",
        "gym_name": "Capital Gymnastics - Cedar Park",
        "gym_address": "Cedar Park, TX",
        "gym_phone": null,
        "gym_booking_page": "https:\/\/portal.iclasspro.com\/capgymavery",
        "event_type": "CLINIC",
        "event_type_display": "Clinic",
        "event_type_color": "#f3e8ff",
        "is_required": true,
        "min_required": 1
      },
      {
        "id": "5b0f7c1e-9a53-4c1f-8d0b-2f8a6c1c9e02",
        "title": "Birthday Party",
        "event_date": "2025-06-04",
        "event_time": null,
        "price": null,
        "day_of_week": "Wednesday",
        "specific_url": null,
        "gym_name": "Capital Gymnastics - Cedar Park",
        "gym_address": null,
        "gym_phone": null,
        "gym_booking_page": null,
        "event_type": "BIRTHDAY",
        "is_required": false,
        "min_required": 0
      },
      {
        "id": "5b0f7c1e-9a53-4c1f-8d0b-2f8a6c1c9e03",
        "title": "Kids Night Out",
        "event_date": "not a date",
        "event_time": "6:30 PM - 9:30 PM",
        "price": "$35",
        "day_of_week": "Wed",
        "specific_url": "",
        "gym_name": "Tigar Gymnastics",
        "gym_address": "",
        "gym_phone": "",
        "gym_booking_page": "",
        "event_type": "KIDS NIGHT OUT"
      }]"##;

    #[test_log::test]
    fn should_deserialize_view_rows_with_nulls() {
        let rows = serde_json::from_str::<Vec<EventWithDetailsRow>>(VIEW_ROWS);

        assert!(rows.is_ok(), "{:?}", rows);

        let rows = rows.unwrap();
        let first = rows.first().unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(first.event_date, NaiveDate::from_ymd_opt(2025, 6, 3));
        assert_eq!(first.gym_phone, "");
        assert_eq!(first.day_of_week, "");
    }

    #[test_log::test]
    fn should_transform_rows_skipping_unknown_event_types() {
        let rows = serde_json::from_str::<Vec<EventWithDetailsRow>>(VIEW_ROWS).unwrap();

        let events = rows_to_events(&rows);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, 1);
        assert_eq!(events[0].display_date, "June 3, 2025");
        assert_eq!(events[0].day, "Tuesday");
        assert_eq!(events[0].event_type, EventType::Clinic);
        assert_eq!(events[1].id, 2);
    }

    #[test_log::test]
    fn when_event_date_is_unparsable_should_keep_event_undated() {
        let rows = serde_json::from_str::<Vec<EventWithDetailsRow>>(VIEW_ROWS).unwrap();

        let events = rows_to_events(&rows);
        let undated = &events[1];

        assert_eq!(undated.date, None);
        assert_eq!(undated.display_date, "");
        assert_eq!(undated.day, "Wed");
        assert_eq!(undated.event_type, EventType::KidsNightOut);
    }

    #[test_log::test]
    fn should_accept_timestamp_event_dates() {
        let row = serde_json::from_str::<InsertedEventRow>(
            r#"{"id": "5b0f7c1e-9a53-4c1f-8d0b-2f8a6c1c9e09", "title": "Kip Clinic", "event_date": "2025-06-17T00:00:00"}"#,
        )
        .unwrap();

        assert_eq!(row.event_date, NaiveDate::from_ymd_opt(2025, 6, 17));
    }

    #[test_log::test]
    fn should_use_name_when_event_type_has_no_display_name() {
        let row = serde_json::from_str::<EventTypeRow>(
            r##"{"id": "0d4c2f55-7f61-44a0-b5a4-5b0e8c7f1a10", "name": "OPEN GYM", "display_name": null, "color": "#f0fdf4"}"##,
        )
        .unwrap();

        let record = row.to_model();

        assert_eq!(record.display_name, "OPEN GYM");
        assert!(!record.is_required);
    }
}
