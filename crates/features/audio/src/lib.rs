//! Audio guide feature slice: the player shell, track list, narration language
//! picker and offline-mode switch.

pub mod catalog;
#[cfg(feature = "client")]
pub mod client;
pub mod view;

pub use catalog::TRACKS;
pub use view::AudioView;
