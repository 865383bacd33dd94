//! Interactive map feature slice: searchable, filterable monastery pins with a
//! details card for the selected site.

pub mod catalog;
#[cfg(feature = "client")]
pub mod client;
pub mod view;

pub use catalog::{FILTERS, MONASTERIES};
pub use view::{MapView, Pin};
