//! Bundled June 2025 dataset shown when the database can't be reached.

use crate::supabase::model::{Event, EventType, Schedule, Venue};
use chrono::NaiveDate;

struct SampleVenue {
    name: &'static str,
    address: &'static str,
    phone: &'static str,
    booking_page: &'static str,
}

const CEDAR_PARK: SampleVenue = SampleVenue {
    name: "Capital Gymnastics - Cedar Park",
    address: "Cedar Park, TX",
    phone: "",
    booking_page: "https://portal.iclasspro.com/capgymavery",
};
const PFLUGERVILLE: SampleVenue = SampleVenue {
    name: "Capital Gymnastics - Pflugerville",
    address: "Pflugerville, TX",
    phone: "",
    booking_page: "https://portal.iclasspro.com/capgymhp",
};
const HOUSTON: SampleVenue = SampleVenue {
    name: "Houston Gymnastics Academy",
    address: "5201 Gulfton St., Houston, TX 77081",
    phone: "(713) 668-6001",
    booking_page: "https://portal.iclasspro.com/houstongymnastics",
};
const ESTRELLA: SampleVenue = SampleVenue {
    name: "Estrella Gymnastics",
    address: "Houston, TX",
    phone: "",
    booking_page: "https://portal.iclasspro.com/estrellagymnastics",
};
const ROUND_ROCK: SampleVenue = SampleVenue {
    name: "Capital Gymnastics - Round Rock",
    address: "Round Rock, TX",
    phone: "",
    booking_page: "https://portal.iclasspro.com/capgymroundrock",
};
const OASIS: SampleVenue = SampleVenue {
    name: "Oasis Gymnastics",
    address: "Houston, TX",
    phone: "",
    booking_page: "https://portal.iclasspro.com/oasisgymnastics",
};
const SCOTTSDALE: SampleVenue = SampleVenue {
    name: "Scottsdale Gymnastics",
    address: "Scottsdale, AZ",
    phone: "",
    booking_page: "https://portal.iclasspro.com/scottsdalegymnastics",
};
const TIGAR: SampleVenue = SampleVenue {
    name: "Tigar Gymnastics",
    address: "",
    phone: "",
    booking_page: "https://portal.iclasspro.com/tigar",
};

// (venue, title, June day, time, price, type, url)
type SampleRow = (
    &'static SampleVenue,
    &'static str,
    u32,
    &'static str,
    &'static str,
    EventType,
    &'static str,
);

const SAMPLE_ROWS: [SampleRow; 15] = [
    (&CEDAR_PARK, "Kids Night Out Summer Fun!", 11, "6:30 PM - 9:30 PM", "$35", EventType::KidsNightOut, "https://portal.iclasspro.com/capgymavery/camp-details/1091"),
    (&CEDAR_PARK, "Kids Night Out Flippin' Fun!", 25, "6:30 PM - 9:30 PM", "$35", EventType::KidsNightOut, "https://portal.iclasspro.com/capgymavery/camp-details/1092"),
    (&CEDAR_PARK, "Back Handspring Skill Clinic", 3, "6:30 PM - 7:30 PM", "$25", EventType::Clinic, "https://portal.iclasspro.com/capgymavery/camps/91?sortBy=time"),
    (&CEDAR_PARK, "Kip Skill Clinic", 17, "6:30 PM - 7:30 PM", "$25", EventType::Clinic, "https://portal.iclasspro.com/capgymavery/camps/91?sortBy=time"),
    (&CEDAR_PARK, "Open Gym Session", 4, "10:30 AM - 12:00 PM", "$15", EventType::OpenGym, "https://portal.iclasspro.com/capgymavery/camp-details/1066"),
    (&CEDAR_PARK, "Camping Week Summer Camp", 2, "9:00 AM - 3:00 PM", "$295", EventType::SummerCamp, "https://portal.iclasspro.com/capgymavery/camp-details/1055"),
    (&PFLUGERVILLE, "Kids Night Out", 11, "6:30 PM - 9:30 PM", "$35", EventType::KidsNightOut, "https://portal.iclasspro.com/capgymhp/camp-details/1198"),
    (&HOUSTON, "Pirates & Princess Summer Camp", 23, "9:00 AM - 3:00 PM", "$295", EventType::SummerCamp, "https://portal.iclasspro.com/houstongymnastics/camp-details/738"),
    (&HOUSTON, "Gymnastics Skills Clinic", 5, "7:00 PM - 8:00 PM", "$25", EventType::Clinic, "https://portal.iclasspro.com/houstongymnastics/camps/2"),
    (&HOUSTON, "Kids Night Out Fun Night", 13, "6:00 PM - 9:00 PM", "$35", EventType::KidsNightOut, "https://portal.iclasspro.com/houstongymnastics/camps/7"),
    (&ESTRELLA, "Pit Stop Summer Camp", 23, "9:00 AM - 3:00 PM", "$295", EventType::SummerCamp, "https://portal.iclasspro.com/estrellagymnastics/camp-details/453"),
    (&ROUND_ROCK, "Kids Night Out", 11, "6:30 PM - 9:30 PM", "$35", EventType::KidsNightOut, "https://portal.iclasspro.com/capgymroundrock/camp-details/1418"),
    (&OASIS, "Open Gym Session", 14, "10:00 AM - 11:30 AM", "$15", EventType::OpenGym, "https://portal.iclasspro.com/oasisgymnastics/camps/60"),
    (&SCOTTSDALE, "Open Gym Fun", 21, "11:00 AM - 12:30 PM", "$15", EventType::OpenGym, "https://portal.iclasspro.com/scottsdalegymnastics/camps/88"),
    (&TIGAR, "Open Gym Session", 28, "9:00 AM - 10:30 AM", "$15", EventType::OpenGym, "https://portal.iclasspro.com/tigar/camps/22"),
];

pub fn sample_events() -> Vec<Event> {
    SAMPLE_ROWS
        .iter()
        .zip(1..)
        .map(|(&(venue, title, day, time, price, event_type, url), id)| {
            Event::new(
                id,
                Venue::new(venue.name, venue.address, venue.phone, venue.booking_page),
                title,
                Schedule::new(NaiveDate::from_ymd_opt(2025, 6, day), time, price),
                event_type,
                url,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::MonthYear;

    #[test_log::test]
    fn should_number_sample_events_from_one() {
        let events = sample_events();

        assert_eq!(events.len(), 15);
        assert_eq!(events.first().unwrap().id, 1);
        assert_eq!(events.last().unwrap().id, 15);
    }

    #[test_log::test]
    fn should_place_every_sample_event_in_june_2025() {
        let june = MonthYear::new(2025, 6).unwrap();

        assert!(sample_events().iter().all(|event| event.is_in_month(june)));
    }

    #[test_log::test]
    fn should_label_sample_days() {
        let events = sample_events();
        let clinic = events
            .iter()
            .find(|event| event.title == "Back Handspring Skill Clinic")
            .unwrap();

        assert_eq!(clinic.display_date, "June 3, 2025");
        assert_eq!(clinic.day, "Tuesday");
    }
}
