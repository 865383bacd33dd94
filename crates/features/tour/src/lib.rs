//! Virtual tour feature slice: a 360° viewer shell per monastery, scene
//! navigation and the "other monasteries" rail.

pub mod catalog;
#[cfg(feature = "client")]
pub mod client;
pub mod view;

pub use catalog::{SITES, find_site, resolve_site};
pub use view::TourView;
