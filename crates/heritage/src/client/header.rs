use dioxus::prelude::*;
use heritage_domain::constants::{
    ARCHIVES_PATH, AUDIO_GUIDE_PATH, CALENDAR_PATH, HOME_PATH, MAP_PATH, PLATFORM_NAME,
    PLATFORM_TAGLINE, VIRTUAL_TOUR_PATH,
};

const NAVIGATION: &[(&str, &str, &str)] = &[
    ("Virtual Tours", VIRTUAL_TOUR_PATH, "📷"),
    ("Interactive Map", MAP_PATH, "📍"),
    ("Audio Guide", AUDIO_GUIDE_PATH, "🎧"),
    ("Digital Archives", ARCHIVES_PATH, "📖"),
    ("Cultural Calendar", CALENDAR_PATH, "📅"),
];

/// The search box and language button are decorative.
#[component]
pub fn Header() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "site-header",
            div { class: "site-header-bar",
                Link { class: "logo", to: HOME_PATH,
                    span { class: "logo-mark", "☸" }
                    div {
                        h1 { class: "gradient", "{PLATFORM_NAME}" }
                        p { class: "muted small", "{PLATFORM_TAGLINE}" }
                    }
                }
                nav { class: "nav desktop-only",
                    for (name, href, icon) in NAVIGATION {
                        Link { key: "{name}", class: "nav-link", active_class: "nav-link-active", to: *href,
                            span { "{icon}" }
                            span { "{name}" }
                        }
                    }
                }
                div { class: "row desktop-only",
                    input { class: "search", r#type: "search", placeholder: "Search monasteries..." }
                    button { class: "btn btn-outline", "EN / नेपाली" }
                }
                button {
                    class: "btn btn-ghost mobile-only",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "✕" } else { "☰" }
                }
            }
            if menu_open() {
                nav { class: "nav-mobile mobile-only",
                    for (name, href, icon) in NAVIGATION {
                        Link {
                            key: "{name}",
                            class: "nav-link",
                            to: *href,
                            onclick: move |_| menu_open.set(false),
                            span { "{icon}" }
                            span { "{name}" }
                        }
                    }
                    input { class: "search wide", r#type: "search", placeholder: "Search monasteries..." }
                    button { class: "btn btn-outline wide", "EN / नेपाली" }
                }
            }
        }
    }
}
