//! Facade crate for the heritage feature slices and shared modules.
//! Re-exports domain/kernel primitives and, with the `client` feature, the router
//! and application shell.
//! Keep this crate thin: it should compose other crates, not implement page logic.
//!
//! ## Usage
//! - Add `heritage` with the `client` feature.
//! - Launch `heritage::client::App` from the platform launcher.

pub use heritage_domain as domain;
pub use heritage_kernel as kernel;

#[cfg(feature = "client")]
pub mod client;

/// Feature registry for runtime introspection.
pub mod features {
    pub use heritage_archives as archives;
    pub use heritage_audio as audio;
    pub use heritage_calendar as calendar;
    pub use heritage_home as home;
    pub use heritage_map as map;
    pub use heritage_tour as tour;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "client")]
        "client",
        "home",
        "tour",
        "map",
        "audio",
        "archives",
        "calendar",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
