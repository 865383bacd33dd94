use crate::catalog::{SCENE_TAGS, VISIT_INFO};
use crate::view::TourView;
use dioxus::prelude::*;
use heritage_domain::constants::tour_path;

/// `/virtual-tour`: the first site.
#[component]
pub fn VirtualTourIndex() -> Element {
    let key = "default";
    rsx! {
        TourViewer { key: "{key}" }
    }
}

/// `/virtual-tour/:monastery_id`.
#[component]
pub fn VirtualTour(monastery_id: String) -> Element {
    // Keyed so a new id remounts the viewer with its own scene index.
    rsx! {
        TourViewer { key: "{monastery_id}", site_id: monastery_id.clone() }
    }
}

#[component]
fn TourViewer(site_id: Option<String>) -> Element {
    let mut view = use_signal(|| TourView::for_site(site_id.as_deref()));

    let state = view.read().clone();
    let site = state.site();
    let current = state.scene_index();
    let scene = state.scene();
    let about = state.about();
    let (muted, playing) = (state.is_muted(), state.is_playing());

    rsx! {
        div { class: "tour",
            section { class: "tour-viewer",
                div { class: "tour-frame",
                    span { class: "tour-frame-label", "{site.name} - {scene}" }
                }
                div { class: "tour-top",
                    div { class: "tour-title",
                        h1 { "{site.name}" }
                        p { class: "muted", "📍 {site.region}" }
                        p { class: "muted", "{site.description}" }
                    }
                    div { class: "tour-actions",
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| view.write().toggle_mute(),
                            if muted { "🔇" } else { "🔊" }
                        }
                        button { class: "btn btn-ghost", "⛶" }
                    }
                }
                div { class: "tour-bottom",
                    div { class: "tour-controls",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| view.write().toggle_play(),
                            if playing { "⏸ Pause Tour" } else { "▶ Start Tour" }
                        }
                        button { class: "btn btn-outline", "↺ Reset View" }
                        span { class: "muted", "🕒 {site.duration}" }
                        span { class: "muted", "👥 {site.visitors}" }
                    }
                    div { class: "scene-nav",
                        button {
                            class: "btn btn-outline",
                            disabled: !state.can_previous(),
                            onclick: move |_| view.write().previous_scene(),
                            "‹"
                        }
                        for (index, label) in site.scenes.iter().enumerate() {
                            button {
                                key: "{label}",
                                class: if index == current { "chip chip-active" } else { "chip" },
                                onclick: move |_| view.write().select_scene(index),
                                "📷 {label}"
                            }
                        }
                        button {
                            class: "btn btn-outline",
                            disabled: !state.can_next(),
                            onclick: move |_| view.write().next_scene(),
                            "›"
                        }
                    }
                }
            }
            div { class: "page-grid",
                article { class: "card span-2",
                    h2 { "About This Scene" }
                    p { class: "muted", "{about}" }
                    div { class: "two-col",
                        div {
                            h3 { "Historical Significance" }
                            p { class: "muted small",
                                "Built in the 16th century, this monastery has been a center of Buddhist learning and practice."
                            }
                        }
                        div {
                            h3 { "Architectural Features" }
                            p { class: "muted small",
                                "Traditional Tibetan architecture with intricate woodwork and vibrant murals."
                            }
                        }
                    }
                    div { class: "badges",
                        for tag in SCENE_TAGS {
                            span { key: "{tag}", class: "badge", "{tag}" }
                        }
                    }
                }
                aside { class: "stack",
                    div { class: "card",
                        h3 { "Other Monasteries" }
                        for other in state.others() {
                            Link { key: "{other.id}", class: "row-link", to: tour_path(other.id),
                                div {
                                    h4 { "{other.name}" }
                                    p { class: "muted small", "{other.region}" }
                                }
                                span { "📷" }
                            }
                        }
                    }
                    div { class: "card",
                        h3 { "Visit Information" }
                        for (label, value) in VISIT_INFO {
                            div { key: "{label}", class: "kv",
                                span { class: "muted", "{label}:" }
                                span { "{value}" }
                            }
                        }
                        button { class: "btn btn-primary wide", "Plan Your Visit" }
                    }
                }
            }
        }
    }
}
