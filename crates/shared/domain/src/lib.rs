//! # Domain Models
//!
//! Catalog record types, the closed enumerations they are filtered by, and the
//! application configuration tree.
//! Keep it lean: no I/O, no rendering, no view state. Just data and the
//! [`listing`] traits that describe how a record is searched and categorized.

pub mod archive;
pub mod audio;
pub mod config;
pub mod constants;
pub mod event;
pub mod listing;
pub mod monastery;
pub mod tour;

pub use archive::{ArchiveItem, ArchiveKind};
pub use audio::{AudioGuideTrack, GuideLanguage};
pub use event::{CalendarEvent, EventFlags, EventStatus, EventType, Significance};
pub use listing::{Categorized, Searchable};
pub use monastery::{Coordinates, Difficulty, MonasteryRecord, SiteCategory};
pub use tour::TourSite;
