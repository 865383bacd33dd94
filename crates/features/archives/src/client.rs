use crate::catalog::{FILTERS, ITEMS, SEARCH_HINT, kind_icon};
use crate::view::{ArchivesView, Layout, TagPreview};
use dioxus::prelude::*;
use heritage_domain::ArchiveItem;

#[component]
pub fn DigitalArchives() -> Element {
    let mut view = use_signal(ArchivesView::default);

    let state = view.read().clone();
    let search = state.query().search().to_owned();
    let active = state.query().active();
    let summary = state.summary();
    let layout = state.layout();
    let filters = FILTERS.iter().map(|def| (def, def.count(&ITEMS)));
    let items = state.visible().into_iter().map(|item| (item, state.is_favorite(item.id)));

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Digital Archives" }
                p { class: "muted",
                    "Explore thousands of digitized manuscripts, murals, and historical documents from Sikkim's monasteries"
                }
            }
            div { class: "toolbar",
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search archives by title, monastery, or tags...",
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
                div { class: "row",
                    button {
                        class: if layout == Layout::Grid { "btn btn-primary" } else { "btn btn-outline" },
                        title: "Grid",
                        onclick: move |_| view.write().set_layout(Layout::Grid),
                        "▦"
                    }
                    button {
                        class: if layout == Layout::List { "btn btn-primary" } else { "btn btn-outline" },
                        title: "List",
                        onclick: move |_| view.write().set_layout(Layout::List),
                        "☰"
                    }
                }
            }
            div { class: "card hint",
                span { "✨" }
                div {
                    h3 { class: "small", "AI-Powered Search" }
                    p { class: "muted small", "{SEARCH_HINT}" }
                }
            }
            if let Some(item) = state.selected() {
                ItemDetails { item: item, on_close: move |()| view.write().close() }
            }
            p { class: "muted small", "{summary}" }
            div { class: if layout == Layout::Grid { "archive-grid" } else { "stack" },
                for (item, favorite) in items {
                    ArchiveCard {
                        key: "{item.id}",
                        item: item,
                        layout: layout,
                        favorite: favorite,
                        on_favorite: move |id: u32| {
                            view.write().toggle_favorite(id);
                        },
                        on_view: move |id: u32| view.write().select(id),
                    }
                }
            }
        }
    }
}

#[component]
fn ArchiveCard(
    item: &'static ArchiveItem,
    layout: Layout,
    favorite: bool,
    on_favorite: EventHandler<u32>,
    on_view: EventHandler<u32>,
) -> Element {
    let icon = kind_icon(item.kind);
    let kind = item.kind.as_ref().to_uppercase();
    let heart = if favorite { "❤" } else { "♡" };
    let id = item.id;

    match layout {
        Layout::Grid => {
            let TagPreview { shown, hidden } = TagPreview::of(item);
            rsx! {
                article { class: "card archive-card",
                    div { class: "archive-thumb",
                        span { class: "archive-icon", "{icon}" }
                        p { class: "muted small", "{kind}" }
                        div { class: "archive-actions",
                            button {
                                class: "btn btn-ghost",
                                onclick: move |event: MouseEvent| {
                                    event.stop_propagation();
                                    on_favorite.call(id);
                                },
                                "{heart}"
                            }
                            button { class: "btn btn-ghost", "⤴" }
                        }
                    }
                    h3 { class: "small", "{item.title}" }
                    p { class: "muted small", "📍 {item.monastery}" }
                    p { class: "muted small", "📅 {item.period}" }
                    p { class: "muted small clamp", "{item.description}" }
                    div { class: "badges",
                        for tag in shown {
                            span { key: "{tag}", class: "badge badge-outline", "{tag}" }
                        }
                        if hidden > 0 {
                            span { class: "badge badge-outline", "+{hidden}" }
                        }
                    }
                    div { class: "row-between",
                        div { class: "row",
                            button { class: "btn btn-primary", onclick: move |_| on_view.call(id), "👁 View" }
                            button { class: "btn btn-outline", "⬇" }
                        }
                        span { class: "muted small", "{item.view_count} views" }
                    }
                }
            }
        },
        Layout::List => rsx! {
            article { class: "card archive-row",
                div { class: "archive-icon large", "{icon}" }
                div { class: "grow",
                    div { class: "row-between",
                        h3 { "{item.title}" }
                        div { class: "row",
                            button { class: "btn btn-ghost", onclick: move |_| on_favorite.call(id), "{heart}" }
                            button { class: "btn btn-ghost", "⤴" }
                        }
                    }
                    div { class: "row muted small",
                        span { "📍 {item.monastery}" }
                        span { "📅 {item.period}" }
                        span { "{item.view_count} views" }
                    }
                    p { class: "muted", "{item.description}" }
                    div { class: "row-between",
                        div { class: "badges",
                            for tag in item.tags {
                                span { key: "{tag}", class: "badge badge-outline", "{tag}" }
                            }
                        }
                        div { class: "row",
                            button { class: "btn btn-primary", onclick: move |_| on_view.call(id), "👁 View Details" }
                            button { class: "btn btn-outline", "⬇ Download" }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn ItemDetails(item: &'static ArchiveItem, on_close: EventHandler<()>) -> Element {
    let digitized = item.digitized_label();

    rsx! {
        div { class: "card details",
            div { class: "row-between",
                h3 { "{item.title}" }
                button { class: "btn btn-ghost", onclick: move |_| on_close.call(()), "✕" }
            }
            p { class: "muted", "{item.description}" }
            div { class: "kv",
                span { class: "muted", "Language:" }
                span { "{item.language}" }
            }
            div { class: "kv",
                span { class: "muted", "Condition:" }
                span { "{item.condition}" }
            }
            div { class: "kv",
                span { class: "muted", "Digitized:" }
                span { "{digitized}" }
            }
        }
    }
}
