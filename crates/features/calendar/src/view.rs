use crate::catalog::{EVENTS, FILTERS};
use chrono::{Datelike, Local, Months, NaiveDate};
use heritage_domain::{CalendarEvent, EventType};
use heritage_kernel::filter::ListQuery;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarMode {
    #[default]
    Month,
    Week,
    List,
}

impl CalendarMode {
    pub const ALL: [Self; 3] = [Self::Month, Self::Week, Self::List];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Month => "Month",
            Self::Week => "Week",
            Self::List => "List",
        }
    }
}

/// Sidebar figures, computed over the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarStats {
    pub total: usize,
    pub festivals: usize,
    pub free: usize,
    pub participants: u32,
}

impl CalendarStats {
    #[must_use]
    pub fn of(events: &[CalendarEvent]) -> Self {
        Self {
            total: events.len(),
            festivals: events.iter().filter(|e| e.kind == EventType::Festival).count(),
            free: events.iter().filter(|e| !e.is_paid()).count(),
            participants: events.iter().map(|e| e.participants).sum(),
        }
    }
}

/// Call to action for a bookable event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub action: &'static str,
    pub note: &'static str,
}

impl Booking {
    #[must_use]
    pub const fn for_event(event: &CalendarEvent) -> Option<Self> {
        if !event.is_bookable() {
            return None;
        }
        Some(if event.is_paid() {
            Self { action: "Book & Pay", note: "Payment required for confirmation" }
        } else {
            Self { action: "Reserve Spot", note: "Free event - reserve your spot" }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    query: ListQuery<EventType>,
    mode: CalendarMode,
    month: NaiveDate,
    selected: Option<u32>,
}

impl Default for CalendarView {
    /// Opens on the current month.
    fn default() -> Self {
        Self::starting_at(Local::now().date_naive())
    }
}

impl CalendarView {
    #[must_use]
    pub fn starting_at(day: NaiveDate) -> Self {
        Self {
            query: ListQuery::default(),
            mode: CalendarMode::default(),
            month: day.with_day(1).unwrap_or(day),
            selected: None,
        }
    }

    #[must_use]
    pub const fn query(&self) -> &ListQuery<EventType> {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.set_search(search);
    }

    pub fn select_filter(&mut self, id: &'static str) {
        self.query.select_filter(id, FILTERS);
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&'static CalendarEvent> {
        self.query.apply(&EVENTS)
    }

    #[must_use]
    pub const fn mode(&self) -> CalendarMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CalendarMode) {
        debug!(?mode, "Calendar view changed");
        self.mode = mode;
    }

    /// First day of the month in the header.
    #[must_use]
    pub const fn month(&self) -> NaiveDate {
        self.month
    }

    /// `February 2024`
    #[must_use]
    pub fn month_label(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    pub fn next_month(&mut self) {
        if let Some(month) = self.month.checked_add_months(Months::new(1)) {
            self.month = month;
        }
    }

    pub fn previous_month(&mut self) {
        if let Some(month) = self.month.checked_sub_months(Months::new(1)) {
            self.month = month;
        }
    }

    pub fn select(&mut self, id: u32) {
        debug!(event = id, "Calendar event selected");
        self.selected = Some(id);
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static CalendarEvent> {
        let id = self.selected?;
        EVENTS.iter().find(|event| event.id == id)
    }

    #[must_use]
    pub fn stats(&self) -> CalendarStats {
        CalendarStats::of(&EVENTS)
    }
}
