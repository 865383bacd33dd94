use crate::listing::{Categorized, Searchable};
use bitflags::bitflags;
use chrono::{NaiveDate, NaiveTime};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EventType {
    Festival,
    DailyPrayer,
    Performance,
    Retreat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EventStatus {
    Upcoming,
    Recurring,
    BookingOpen,
}

impl EventStatus {
    /// Badge text: the id with `_` shown as a space, upper-cased (`BOOKING OPEN`).
    #[must_use]
    pub fn label(self) -> String {
        self.as_ref().replacen('_', " ", 1).to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
pub enum Significance {
    High,
    Medium,
}

bitflags! {
    /// Booking properties of an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventFlags: u8 {
        const BOOKABLE = 1 << 0;
        const PAID = 1 << 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: u32,
    pub title: &'static str,
    pub monastery: &'static str,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub kind: EventType,
    pub description: &'static str,
    /// Expected participants.
    pub participants: u32,
    pub flags: EventFlags,
    pub status: EventStatus,
    pub duration: &'static str,
    pub significance: Significance,
    pub languages: &'static [&'static str],
}

impl CalendarEvent {
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        self.flags.contains(EventFlags::BOOKABLE)
    }

    #[must_use]
    pub const fn is_paid(&self) -> bool {
        self.flags.contains(EventFlags::PAID)
    }

    /// `06:00 - 20:00`
    #[must_use]
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }

    /// `Feb 10, 2024`
    #[must_use]
    pub fn long_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    /// Day of month and upper-case short month, as shown in the date column.
    #[must_use]
    pub fn date_badge(&self) -> (String, String) {
        (self.date.format("%-d").to_string(), self.date.format("%b").to_string().to_uppercase())
    }
}

impl Searchable for CalendarEvent {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.title, self.monastery].into_iter()
    }
}

impl Categorized for CalendarEvent {
    type Category = EventType;

    fn category(&self) -> EventType {
        self.kind
    }
}

/// Compile-time date for catalog tables. Invalid dates fail const evaluation.
#[must_use]
pub const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid catalog date"),
    }
}

/// Compile-time wall-clock time for catalog tables.
#[must_use]
pub const fn time(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid catalog time"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CalendarEvent {
        CalendarEvent {
            id: 1,
            title: "Losar Festival - Tibetan New Year",
            monastery: "Rumtek Monastery",
            date: date(2024, 2, 10),
            start: time(6, 0),
            end: time(20, 0),
            kind: EventType::Festival,
            description: "",
            participants: 500,
            flags: EventFlags::BOOKABLE,
            status: EventStatus::Upcoming,
            duration: "3 days",
            significance: Significance::High,
            languages: &["Tibetan", "English"],
        }
    }

    #[test]
    fn status_labels() {
        assert_eq!(EventStatus::Upcoming.label(), "UPCOMING");
        assert_eq!(EventStatus::BookingOpen.label(), "BOOKING OPEN");
    }

    #[test]
    fn event_type_ids_are_snake_case() {
        assert_eq!(EventType::DailyPrayer.as_ref(), "daily_prayer");
        assert_eq!("retreat".parse::<EventType>().ok(), Some(EventType::Retreat));
    }

    #[test]
    fn date_and_time_formatting() {
        let event = sample();
        assert_eq!(event.long_date(), "Feb 10, 2024");
        assert_eq!(event.time_range(), "06:00 - 20:00");
        assert_eq!(event.date_badge(), ("10".to_owned(), "FEB".to_owned()));
    }

    #[test]
    fn flags() {
        let event = sample();
        assert!(event.is_bookable());
        assert!(!event.is_paid());
    }
}
