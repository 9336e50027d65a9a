//! RFC 5545 (iCalendar) output.

use time::{Date, OffsetDateTime, UtcOffset};

use crate::materialize::{AllDayEvent, SunsetEvent};
use crate::pipeline::GeneratedCalendar;

pub const PRODID: &str = "-//Luach//Hebrew Date Recurrence//EN";

/// Default `REFRESH-INTERVAL` for subscription feeds.
pub const DEFAULT_REFRESH_INTERVAL: &str = "P1D";

/// Content lines longer than this many octets are folded.
const MAX_LINE_OCTETS: usize = 75;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsOptions {
    /// Value written to every `DTSTAMP`.
    pub dtstamp: OffsetDateTime,
    /// Set for subscription feeds; an ISO 8601 duration such as `P1D`.
    pub refresh_interval: Option<String>,
}

impl IcsOptions {
    pub fn download(dtstamp: OffsetDateTime) -> Self {
        Self {
            dtstamp,
            refresh_interval: None,
        }
    }

    pub fn subscription(dtstamp: OffsetDateTime, refresh_interval: impl Into<String>) -> Self {
        Self {
            dtstamp,
            refresh_interval: Some(refresh_interval.into()),
        }
    }
}

pub fn render(calendar: &GeneratedCalendar, options: &IcsOptions) -> String {
    let mut writer = IcsWriter::default();
    let dtstamp = utc_stamp(options.dtstamp);

    writer.line("BEGIN:VCALENDAR");
    writer.line("VERSION:2.0");
    writer.property("PRODID", PRODID);
    writer.line("CALSCALE:GREGORIAN");
    writer.line("METHOD:PUBLISH");
    writer.text("X-WR-CALNAME", &calendar.name);

    if let Some(interval) = &options.refresh_interval {
        writer.property("REFRESH-INTERVAL;VALUE=DURATION", interval);
        writer.property("X-PUBLISHED-TTL", interval);
    }

    for pair in &calendar.occurrences {
        write_all_day(&mut writer, &pair.all_day, &dtstamp);
        if let Some(sunset) = &pair.sunset {
            write_sunset(&mut writer, sunset, &dtstamp);
        }
    }

    writer.line("END:VCALENDAR");
    writer.finish()
}

fn write_all_day(writer: &mut IcsWriter, event: &AllDayEvent, dtstamp: &str) {
    writer.line("BEGIN:VEVENT");
    writer.text("UID", &event.uid);
    writer.property("DTSTAMP", dtstamp);
    writer.property("DTSTART;VALUE=DATE", &date_value(event.date));
    // DTEND is exclusive; the date after the last representable day is
    // left out and the event defaults to one day.
    if let Some(end) = event.date.next_day() {
        writer.property("DTEND;VALUE=DATE", &date_value(end));
    }
    writer.text("SUMMARY", &event.title);
    writer.text("DESCRIPTION", &event.hebrew_date.to_string());
    writer.line("TRANSP:TRANSPARENT");
    writer.line("END:VEVENT");
}

fn write_sunset(writer: &mut IcsWriter, event: &SunsetEvent, dtstamp: &str) {
    writer.line("BEGIN:VEVENT");
    writer.text("UID", &event.uid);
    writer.property("DTSTAMP", dtstamp);
    writer.property("DTSTART", &utc_stamp(event.start));
    writer.property("DTEND", &utc_stamp(event.end));
    writer.text("SUMMARY", &event.title);
    writer.text(
        "DESCRIPTION",
        &format!("{} begins at sunset", event.hebrew_date),
    );
    writer.line("END:VEVENT");
}

fn date_value(date: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn utc_stamp(instant: OffsetDateTime) -> String {
    let utc = instant.to_offset(UtcOffset::UTC);
    format!(
        "{}T{:02}{:02}{:02}Z",
        date_value(utc.date()),
        utc.hour(),
        utc.minute(),
        utc.second()
    )
}

/// Escapes a TEXT value (RFC 5545 §3.3.11).
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

/// Splits `line` into CRLF-terminated physical lines of at most 75 octets,
/// continuation lines starting with a single space. Multi-byte characters
/// are never split.
pub fn fold_line(line: &str) -> String {
    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3 + 2);
    let mut width = 0;

    for c in line.chars() {
        let len = c.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            folded.push_str("\r\n ");
            width = 1;
        }
        folded.push(c);
        width += len;
    }

    folded.push_str("\r\n");
    folded
}

#[derive(Default)]
struct IcsWriter {
    out: String,
}

impl IcsWriter {
    fn line(&mut self, line: &str) {
        self.out.push_str(&fold_line(line));
    }

    fn property(&mut self, name: &str, value: &str) {
        self.line(&format!("{name}:{value}"));
    }

    fn text(&mut self, name: &str, value: &str) {
        self.property(name, &escape_text(value));
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a,b;c\\d\ne"), "a\\,b\\;c\\\\d\\ne");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_short_line_is_not_folded() {
        assert_eq!(fold_line("VERSION:2.0"), "VERSION:2.0\r\n");
    }

    #[test]
    fn test_fold_at_75_octets() {
        let line = "X".repeat(160);
        let folded = fold_line(&line);
        let physical: Vec<&str> = folded.trim_end_matches("\r\n").split("\r\n").collect();

        assert_eq!(physical.len(), 3);
        assert_eq!(physical[0].len(), 75);
        assert_eq!(physical[1].len(), 75);
        assert!(physical[1].starts_with(' '));
        assert_eq!(physical[2], format!(" {}", "X".repeat(11)));
    }

    #[test]
    fn test_fold_keeps_multibyte_characters_whole() {
        // Hebrew letters are two octets each.
        let line = format!("SUMMARY:{}", "א".repeat(60));
        let folded = fold_line(&line);

        for physical in folded.split("\r\n") {
            assert!(physical.len() <= 75);
        }
        let unfolded = folded.replace("\r\n ", "");
        assert_eq!(unfolded.trim_end_matches("\r\n"), line);
    }

    #[test]
    fn test_value_formats() {
        assert_eq!(date_value(date!(2024 - 03 - 24)), "20240324");
        assert_eq!(
            utc_stamp(datetime!(2024-03-23 17:57:30 +2)),
            "20240323T155730Z"
        );
    }
}
