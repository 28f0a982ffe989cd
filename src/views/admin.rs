use super::text::rule;
use crate::dates::day_of_week;
use crate::supabase::model::{EventTypeRecord, Gym, NewEvent};
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Raw "Add New Event" form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub gym_id: String,
    pub event_type_id: String,
    pub title: String,
    pub event_date: String,
    pub event_time: String,
    pub price: String,
    pub day_of_week: String,
    pub specific_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} '{value}' is not a valid id")]
    InvalidId { field: &'static str, value: String },
    #[error("Event date '{0}' must look like YYYY-MM-DD")]
    InvalidDate(String),
}

impl EventForm {
    /// Checks required fields and builds the insert payload. A blank day of week is
    /// derived from the date.
    pub fn validate(&self) -> Result<NewEvent, FormError> {
        let gym_id = parse_id("Gym", &self.gym_id)?;
        let event_type_id = parse_id("Event type", &self.event_type_id)?;

        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::Required("Title"));
        }

        let event_date = self.event_date.trim();
        if event_date.is_empty() {
            return Err(FormError::Required("Event date"));
        }
        let event_date = NaiveDate::parse_from_str(event_date, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(event_date.to_string()))?;

        Ok(NewEvent {
            gym_id,
            event_type_id,
            title: title.to_string(),
            event_date,
            event_time: optional(&self.event_time),
            price: optional(&self.price),
            day_of_week: optional(&self.day_of_week).or_else(|| Some(day_of_week(event_date))),
            specific_url: optional(&self.specific_url),
        })
    }
}

fn parse_id(field: &'static str, value: &str) -> Result<Uuid, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Required(field));
    }

    Uuid::parse_str(value).map_err(|_| FormError::InvalidId {
        field,
        value: value.to_string(),
    })
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Pick lists for the form: gyms and event types with their ids.
pub fn render_form(gyms: &[Gym], event_types: &[EventTypeRecord]) -> String {
    let mut lines = vec!["Add New Event".to_string(), rule(60), "Gyms:".to_string()];

    lines.extend(gyms.iter().map(|gym| format!("  {}  {}", gym.id, gym.name)));
    if gyms.is_empty() {
        lines.push("  (none found)".to_string());
    }

    lines.push("Event types:".to_string());
    lines.extend(event_types.iter().map(|event_type| {
        let required = if event_type.is_required {
            format!(" (min {} per month)", event_type.min_required)
        } else {
            String::new()
        };
        format!("  {}  {}{}", event_type.id, event_type.display_name, required)
    }));
    if event_types.is_empty() {
        lines.push("  (none found)".to_string());
    }

    lines.push(String::new());
    lines.push(
        "Add with: gymevents add --gym-id <id> --event-type-id <id> --title <title> --date YYYY-MM-DD"
            .to_string(),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const GYM_ID: &str = "9a4c1a8e-2b0f-4f7e-9d8a-0c3b5e6f7a81";
    const TYPE_ID: &str = "0d4c2f55-7f61-44a0-b5a4-5b0e8c7f1a10";

    fn form() -> EventForm {
        EventForm {
            gym_id: GYM_ID.to_string(),
            event_type_id: TYPE_ID.to_string(),
            title: " Kip Skill Clinic ".to_string(),
            event_date: "2025-06-17".to_string(),
            event_time: "6:30 PM - 7:30 PM".to_string(),
            price: "".to_string(),
            day_of_week: "".to_string(),
            specific_url: "".to_string(),
        }
    }

    #[test_log::test]
    fn should_build_new_event() {
        let event = form().validate().unwrap();

        assert_eq!(event.title, "Kip Skill Clinic");
        assert_eq!(event.event_date, NaiveDate::from_ymd_opt(2025, 6, 17).unwrap());
        assert_eq!(event.day_of_week.as_deref(), Some("Tuesday"));
        assert_eq!(event.price, None);
        assert_eq!(event.event_time.as_deref(), Some("6:30 PM - 7:30 PM"));
    }

    #[test_log::test]
    fn should_serialize_missing_optionals_as_null() {
        let event = form().validate().unwrap();

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_date"], "2025-06-17");
        assert_eq!(json["gym_id"], GYM_ID);
        assert!(json["specific_url"].is_null());
    }

    #[test_log::test]
    fn when_title_is_blank_should_fail() {
        let form = EventForm {
            title: "  ".to_string(),
            ..form()
        };

        assert_eq!(form.validate(), Err(FormError::Required("Title")));
    }

    #[test_log::test]
    fn when_gym_id_is_not_a_uuid_should_fail() {
        let form = EventForm {
            gym_id: "cedar-park".to_string(),
            ..form()
        };

        assert!(matches!(form.validate(), Err(FormError::InvalidId { field: "Gym", .. })));
    }

    #[test_log::test]
    fn when_date_is_not_iso_should_fail() {
        let form = EventForm {
            event_date: "June 17, 2025".to_string(),
            ..form()
        };

        assert_eq!(
            form.validate(),
            Err(FormError::InvalidDate("June 17, 2025".to_string()))
        );
    }

    #[test_log::test]
    fn should_list_pick_options() {
        let gyms = vec![Gym {
            id: Uuid::parse_str(GYM_ID).unwrap(),
            name: "Oasis Gymnastics".to_string(),
            address: String::new(),
            phone: String::new(),
            booking_page_url: String::new(),
        }];
        let event_types = vec![EventTypeRecord {
            id: Uuid::parse_str(TYPE_ID).unwrap(),
            name: "KIDS NIGHT OUT".to_string(),
            display_name: "Kids Night Out".to_string(),
            color: "#fef7f0".to_string(),
            is_required: true,
            min_required: 2,
        }];

        let form = render_form(&gyms, &event_types);

        assert!(form.contains(&format!("  {}  Oasis Gymnastics", GYM_ID)));
        assert!(form.contains(&format!("  {}  Kids Night Out (min 2 per month)", TYPE_ID)));
    }
}
