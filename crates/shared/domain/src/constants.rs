//! Route paths shared by the router, header navigation and in-page links.

pub const PLATFORM_NAME: &str = "Sikkim Monasteries";
pub const PLATFORM_TAGLINE: &str = "Digital Heritage Platform";

pub const HOME_PATH: &str = "/";
pub const VIRTUAL_TOUR_PATH: &str = "/virtual-tour";
pub const MAP_PATH: &str = "/map";
pub const AUDIO_GUIDE_PATH: &str = "/audio-guide";
pub const ARCHIVES_PATH: &str = "/archives";
pub const CALENDAR_PATH: &str = "/calendar";

/// Path of the virtual tour for one site, e.g. `/virtual-tour/rumtek`.
#[must_use]
pub fn tour_path(site_id: &str) -> String {
    format!("{VIRTUAL_TOUR_PATH}/{site_id}")
}
