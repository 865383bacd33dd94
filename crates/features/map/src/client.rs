use crate::catalog::{FILTERS, MONASTERIES, TRAVEL_TIPS};
use crate::view::MapView;
use dioxus::prelude::*;
use heritage_domain::{Difficulty, MonasteryRecord};

#[component]
pub fn InteractiveMap() -> Element {
    let mut view = use_signal(MapView::default);

    let state = view.read().clone();
    let visible = state.visible();
    let pins = state.pins();
    let search = state.query().search().to_owned();
    let active = state.query().active();
    let total = visible.len();
    let filters = FILTERS.iter().map(|def| (def, def.count(&MONASTERIES)));

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Interactive Monastery Map" }
                p { class: "muted",
                    "Explore Sikkim's sacred monasteries with detailed locations, travel routes, and nearby attractions"
                }
            }
            div { class: "toolbar",
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search monasteries or locations...",
                    value: "{search}",
                    oninput: move |event| view.write().set_search(event.value()),
                }
                div { class: "filters",
                    for (def, count) in filters {
                        button {
                            key: "{def.id}",
                            class: if def.id == active { "btn btn-primary" } else { "btn btn-outline" },
                            onclick: move |_| view.write().select_filter(def.id),
                            "{def.label} ({count})"
                        }
                    }
                }
            }
            div { class: "page-grid",
                div { class: "card map-canvas span-2",
                    div { class: "map-placeholder",
                        h3 { "Interactive Map" }
                        p { class: "muted", "Click on monastery pins to explore details and plan your route" }
                        button { class: "btn btn-primary", "View Full Map" }
                    }
                    for pin in pins {
                        div {
                            key: "{pin.record.id}",
                            class: if state.is_selected(pin.record.id) { "pin pin-selected" } else { "pin" },
                            style: "left: {pin.left}%; top: {pin.top}%;",
                            title: "{pin.record.name}",
                            onclick: move |_| view.write().select(pin.record.id),
                            "📍"
                        }
                    }
                }
                aside { class: "stack",
                    if let Some(record) = state.selected() {
                        SiteDetails { record: record }
                    }
                    div { class: "card",
                        h3 { "All Monasteries ({total})" }
                        for record in visible {
                            div {
                                key: "{record.id}",
                                class: if state.is_selected(record.id) { "list-row list-row-active" } else { "list-row" },
                                onclick: move |_| view.write().select(record.id),
                                div { class: "row-between",
                                    h4 { "{record.name}" }
                                    span { class: "small", "⭐ {record.rating}" }
                                }
                                p { class: "muted small", "{record.region}" }
                                div { class: "row-between",
                                    span { class: "badge badge-outline", "{record.difficulty}" }
                                    span { class: "muted small", "🕒 {record.visit_duration}" }
                                }
                            }
                        }
                    }
                    div { class: "card",
                        h3 { "Travel Tips" }
                        for tip in TRAVEL_TIPS {
                            p { key: "{tip}", class: "muted small bullet", "{tip}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SiteDetails(record: &'static MonasteryRecord) -> Element {
    let difficulty_class = match record.difficulty {
        Difficulty::Easy => "badge badge-secondary",
        Difficulty::Moderate => "badge badge-outline",
        Difficulty::Hard => "badge",
    };

    rsx! {
        div { class: "card",
            div { class: "row-between",
                div {
                    h3 { "{record.name}" }
                    p { class: "muted small", "📍 {record.region}" }
                }
                span { "⭐ {record.rating}" }
            }
            p { class: "muted small", "{record.description}" }
            div { class: "kv",
                span { class: "muted", "Distance:" }
                span { "{record.distance}" }
            }
            div { class: "kv",
                span { class: "muted", "Visit Duration:" }
                span { "{record.visit_duration}" }
            }
            div { class: "kv",
                span { class: "muted", "Difficulty:" }
                span { class: difficulty_class, "{record.difficulty}" }
            }
            h4 { "Nearby Attractions" }
            div { class: "badges",
                for attraction in record.nearby_attractions {
                    span { key: "{attraction}", class: "badge badge-outline", "{attraction}" }
                }
            }
            div { class: "row",
                button { class: "btn btn-primary", "Get Directions" }
                button { class: "btn btn-outline", "📷" }
                button { class: "btn btn-outline", "ℹ" }
            }
        }
    }
}
