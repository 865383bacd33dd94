//! Cultural calendar feature slice: festivals, prayers, performances and retreats
//! with type filters, a month header and booking calls to action.

pub mod catalog;
#[cfg(feature = "client")]
pub mod client;
pub mod view;

pub use catalog::{EVENTS, FILTERS};
pub use view::{Booking, CalendarMode, CalendarStats, CalendarView};
