use heritage_domain::event::{date, time};
use heritage_domain::{CalendarEvent, EventFlags, EventStatus, EventType, Significance};
use heritage_kernel::filter::FilterDef;

pub static EVENTS: [CalendarEvent; 5] = [
    CalendarEvent {
        id: 1,
        title: "Losar Festival - Tibetan New Year",
        monastery: "Rumtek Monastery",
        date: date(2024, 2, 10),
        start: time(6, 0),
        end: time(20, 0),
        kind: EventType::Festival,
        description: "The most important festival in the Tibetan calendar, celebrating the new year with traditional ceremonies, prayers, and cultural performances.",
        participants: 500,
        flags: EventFlags::BOOKABLE,
        status: EventStatus::Upcoming,
        duration: "3 days",
        significance: Significance::High,
        languages: &["Tibetan", "English"],
    },
    CalendarEvent {
        id: 2,
        title: "Morning Prayer Ceremony",
        monastery: "Enchey Monastery",
        date: date(2024, 1, 20),
        start: time(5, 30),
        end: time(7, 0),
        kind: EventType::DailyPrayer,
        description: "Daily morning prayers and meditation session open to visitors",
        participants: 50,
        flags: EventFlags::BOOKABLE,
        status: EventStatus::Recurring,
        duration: "1.5 hours",
        significance: Significance::Medium,
        languages: &["Tibetan"],
    },
    CalendarEvent {
        id: 3,
        title: "Saga Dawa Festival",
        monastery: "Pemayangtse Monastery",
        date: date(2024, 5, 23),
        start: time(4, 0),
        end: time(18, 0),
        kind: EventType::Festival,
        description: "Celebrating the birth, enlightenment, and death of Buddha with special prayers and offerings",
        participants: 300,
        flags: EventFlags::BOOKABLE.union(EventFlags::PAID),
        status: EventStatus::Upcoming,
        duration: "Full day",
        significance: Significance::High,
        languages: &["Tibetan", "English", "Hindi"],
    },
    CalendarEvent {
        id: 4,
        title: "Cham Dance Performance",
        monastery: "Tashiding Monastery",
        date: date(2024, 3, 15),
        start: time(10, 0),
        end: time(16, 0),
        kind: EventType::Performance,
        description: "Traditional masked dance performance depicting the victory of good over evil",
        participants: 200,
        flags: EventFlags::BOOKABLE.union(EventFlags::PAID),
        status: EventStatus::Upcoming,
        duration: "6 hours",
        significance: Significance::High,
        languages: &["Visual Performance"],
    },
    CalendarEvent {
        id: 5,
        title: "Meditation Retreat",
        monastery: "Rumtek Monastery",
        date: date(2024, 4, 1),
        start: time(9, 0),
        end: time(17, 0),
        kind: EventType::Retreat,
        description: "3-day intensive meditation retreat for practitioners of all levels",
        participants: 30,
        flags: EventFlags::BOOKABLE.union(EventFlags::PAID),
        status: EventStatus::BookingOpen,
        duration: "3 days",
        significance: Significance::Medium,
        languages: &["English", "Tibetan"],
    },
];

pub const FILTERS: &[FilterDef<EventType>] = &[
    FilterDef::all("All Events"),
    FilterDef::only("festival", "Festivals", EventType::Festival),
    FilterDef::only("daily_prayer", "Daily Prayers", EventType::DailyPrayer),
    FilterDef::only("performance", "Performances", EventType::Performance),
    FilterDef::only("retreat", "Retreats", EventType::Retreat),
];

/// Swatch class for a filter button or event dot; `None` is the "all" swatch.
#[must_use]
pub const fn swatch(kind: Option<EventType>) -> &'static str {
    match kind {
        None => "swatch swatch-gray",
        Some(EventType::Festival) => "swatch swatch-red",
        Some(EventType::DailyPrayer) => "swatch swatch-blue",
        Some(EventType::Performance) => "swatch swatch-green",
        Some(EventType::Retreat) => "swatch swatch-purple",
    }
}
