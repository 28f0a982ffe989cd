use crate::supabase::model::Event;
use itertools::Itertools;
use std::io::{self, Write};
use tracing::{error, info};

const CSV_HEADER: &str = "Gym Name,Event Title,Date,Time,Type,Price,URL,Gym Address,Gym Phone";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum CopyFormat {
    /// One detail URL per line.
    Urls,
    /// URLs grouped under their gym.
    UrlsByGym,
    Csv,
    /// Human-readable block per event.
    Summary,
}

pub fn generate_copy_text(events: &[Event], format: CopyFormat) -> String {
    match format {
        CopyFormat::Urls => events
            .iter()
            .map(|event| event.url.as_str())
            .filter(|url| !url.is_empty())
            .join("\n"),
        CopyFormat::UrlsByGym => urls_by_gym(events),
        CopyFormat::Csv => csv_text(events).unwrap_or_else(|err| {
            error!("Failed writing CSV: {}", err);
            CSV_HEADER.to_string()
        }),
        CopyFormat::Summary => events.iter().map(summary).join("\n"),
    }
}

fn urls_by_gym(events: &[Event]) -> String {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();

    for event in events {
        if event.gym.name.is_empty() || event.url.is_empty() {
            continue;
        }

        match groups.iter_mut().find(|(gym, _)| *gym == event.gym.name) {
            Some((_, urls)) => urls.push(event.url.as_str()),
            None => groups.push((event.gym.name.as_str(), vec![event.url.as_str()])),
        }
    }

    groups
        .iter()
        .map(|(gym, urls)| format!("{}:\n{}", gym, urls.join("\n")))
        .join("\n\n")
}

/// Header unquoted, every record field quoted with embedded quotes doubled.
fn csv_text(events: &[Event]) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    for event in events {
        writer.write_record([
            event.gym.name.as_str(),
            event.title.as_str(),
            event.display_date.as_str(),
            event.time.as_str(),
            event.event_type.label(),
            event.price.as_str(),
            event.url.as_str(),
            event.gym.address.as_str(),
            event.gym.phone.as_str(),
        ])?;
    }

    let rows = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    let rows = String::from_utf8_lossy(&rows);

    Ok(format!("{}\n{}", CSV_HEADER, rows.trim_end_matches('\n')))
}

fn summary(event: &Event) -> String {
    let day = if event.day.is_empty() {
        String::new()
    } else {
        format!("({})", event.day)
    };

    format!(
        "{} - {}\nDate: {} {} at {}\nType: {} | Price: {}\nURL: {}\n---",
        or_placeholder(&event.gym.name, "Unknown Gym"),
        or_placeholder(&event.title, "Untitled Event"),
        or_placeholder(&event.display_date, "No date"),
        day,
        or_placeholder(&event.time, "No time"),
        event.event_type,
        or_placeholder(&event.price, "No price"),
        or_placeholder(&event.url, "No URL"),
    )
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Destination for copied text.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Clipboard backed by any writer, e.g. stdout or a file.
pub struct WriterClipboard<W: Write> {
    writer: W,
}

impl<W: Write> WriterClipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Clipboard for WriterClipboard<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }
}

/// Reports success; failures are logged and never propagated.
pub fn copy_to_clipboard<C: Clipboard + ?Sized>(clipboard: &mut C, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(_) => {
            info!("Copied {} characters", text.len());
            true
        }
        Err(err) => {
            error!("Failed to copy: {}", err);
            false
        }
    }
}
