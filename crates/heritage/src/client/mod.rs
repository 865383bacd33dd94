//! Router, layout and top-level component shared by every launch target.

mod header;
mod not_found;

use dioxus::prelude::*;
use heritage_archives::client::DigitalArchives;
use heritage_audio::client::AudioGuide;
use heritage_calendar::client::CulturalCalendar;
use heritage_home::client::Home;
use heritage_map::client::InteractiveMap;
use heritage_tour::client::{VirtualTour, VirtualTourIndex};

pub use header::Header;
pub use not_found::NotFound;

const STYLE: &str = include_str!("../../assets/heritage.css");

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/virtual-tour")]
        VirtualTourIndex {},
        #[route("/virtual-tour/:monastery_id")]
        VirtualTour { monastery_id: String },
        #[route("/map")]
        InteractiveMap {},
        #[route("/audio-guide")]
        AudioGuide {},
        #[route("/archives")]
        DigitalArchives {},
        #[route("/calendar")]
        CulturalCalendar {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root component handed to the launcher.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {STYLE} }
        Router::<Route> {}
    }
}

/// Site header above every routed page, 404 included.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { Outlet::<Route> {} }
        }
    }
}
