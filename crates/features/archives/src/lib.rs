//! Digital archives feature slice: searchable catalogue of digitized manuscripts,
//! murals and documents with grid/list layouts and per-item favorites.

pub mod catalog;
#[cfg(feature = "client")]
pub mod client;
pub mod view;

pub use catalog::{FILTERS, ITEMS};
pub use view::{ArchivesView, Layout, TagPreview};
