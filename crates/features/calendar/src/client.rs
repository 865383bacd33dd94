use crate::catalog::{FILTERS, swatch};
use crate::view::{Booking, CalendarMode, CalendarView};
use dioxus::prelude::*;
use heritage_domain::{CalendarEvent, EventStatus, Significance};

#[component]
pub fn CulturalCalendar() -> Element {
    let mut view = use_signal(CalendarView::default);

    let state = view.read().clone();
    let search = state.query().search().to_owned();
    let active = state.query().active();
    let mode = state.mode();
    let month = state.month_label();
    let stats = state.stats();
    let events = state.visible();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Cultural Calendar" }
                p { class: "muted",
                    "Discover and participate in festivals, rituals, and cultural events across Sikkim's monasteries"
                }
            }
            div { class: "toolbar",
                div { class: "row",
                    button { class: "btn btn-outline", onclick: move |_| view.write().previous_month(), "‹" }
                    h2 { "{month}" }
                    button { class: "btn btn-outline", onclick: move |_| view.write().next_month(), "›" }
                }
                div { class: "row",
                    for (option, label) in CalendarMode::ALL.map(|m| (m, m.label())) {
                        button {
                            key: "{label}",
                            class: if option == mode { "btn btn-primary" } else { "btn btn-outline" },
                            onclick: move |_| view.write().set_mode(option),
                            "{label}"
                        }
                    }
                    button { class: "btn btn-outline", "🔔 Notifications" }
                }
            }
            div { class: "toolbar",
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search events or monasteries...",
                    value: "{search}",
                    oninput: move |event| view.write().set_search(event.value()),
                }
                div { class: "filters",
                    for def in FILTERS {
                        button {
                            key: "{def.id}",
                            class: if def.id == active { "btn btn-primary" } else { "btn btn-outline" },
                            onclick: move |_| view.write().select_filter(def.id),
                            span { class: swatch(def.category) }
                            "{def.label}"
                        }
                    }
                }
            }
            div { class: "page-grid",
                div { class: "span-2 stack",
                    for event in events {
                        EventCard { key: "{event.id}", event: event, on_select: move |id: u32| view.write().select(id) }
                    }
                }
                aside { class: "stack",
                    if let Some(event) = state.selected() {
                        EventDetails { event: event }
                    }
                    div { class: "card",
                        h3 { "This Month" }
                        div { class: "kv",
                            span { class: "muted", "Total Events:" }
                            strong { "{stats.total}" }
                        }
                        div { class: "kv",
                            span { class: "muted", "Festivals:" }
                            strong { "{stats.festivals}" }
                        }
                        div { class: "kv",
                            span { class: "muted", "Free Events:" }
                            strong { "{stats.free}" }
                        }
                        div { class: "kv",
                            span { class: "muted", "Available Spots:" }
                            strong { "{stats.participants}" }
                        }
                    }
                    div { class: "card featured",
                        h3 { "Featured Event" }
                        h4 { "Losar Festival" }
                        p { class: "muted small", "The biggest celebration of the year is coming up!" }
                        button { class: "btn btn-primary", "Learn More" }
                    }
                    div { class: "card",
                        h3 { "Stay Updated" }
                        p { class: "muted small", "Get notified about upcoming festivals and events" }
                        button { class: "btn btn-outline wide", "🔔 Subscribe to Alerts" }
                    }
                }
            }
        }
    }
}

#[component]
fn EventCard(event: &'static CalendarEvent, on_select: EventHandler<u32>) -> Element {
    let (day, month) = event.date_badge();
    let times = event.time_range();
    let status = event.status.label();
    let status_class = match event.status {
        EventStatus::Upcoming => "badge",
        EventStatus::Recurring => "badge badge-secondary",
        EventStatus::BookingOpen => "badge badge-outline",
    };
    let id = event.id;

    rsx! {
        article { class: "card event-card", onclick: move |_| on_select.call(id),
            div { class: "event-date",
                strong { class: "event-day", "{day}" }
                span { class: "small", "{month}" }
            }
            div { class: "grow",
                div { class: "row-between",
                    div {
                        h3 { "{event.title}" }
                        div { class: "row muted small",
                            span { "📍 {event.monastery}" }
                            span { "🕒 {times}" }
                            span { "👥 {event.participants} expected" }
                        }
                    }
                    div { class: "stack-end",
                        span { class: swatch(Some(event.kind)) }
                        if event.significance == Significance::High {
                            span { class: "stars", "★★★" }
                        }
                    }
                }
                p { class: "muted clamp", "{event.description}" }
                div { class: "row-between",
                    div { class: "badges",
                        span { class: status_class, "{status}" }
                        span { class: "badge badge-outline", "{event.duration}" }
                        if event.is_paid() {
                            span { class: "badge badge-danger", "Paid Event" }
                        }
                    }
                    if event.is_bookable() {
                        button { class: "btn btn-primary", "+ Book Now" }
                    }
                }
            }
        }
    }
}

#[component]
fn EventDetails(event: &'static CalendarEvent) -> Element {
    let date = event.long_date();
    let times = event.time_range();

    rsx! {
        div { class: "card",
            h3 { "Event Details" }
            h4 { "{event.title}" }
            p { class: "muted small", "{event.monastery}" }
            div { class: "two-col small",
                div {
                    span { class: "muted", "Date:" }
                    p { "{date}" }
                }
                div {
                    span { class: "muted", "Time:" }
                    p { "{times}" }
                }
                div {
                    span { class: "muted", "Duration:" }
                    p { "{event.duration}" }
                }
                div {
                    span { class: "muted", "Expected:" }
                    p { "{event.participants} people" }
                }
            }
            span { class: "muted small", "Languages:" }
            div { class: "badges",
                for language in event.languages {
                    span { key: "{language}", class: "badge badge-outline", "{language}" }
                }
            }
            p { class: "muted small", "{event.description}" }
            if let Some(booking) = Booking::for_event(event) {
                div { class: "booking",
                    button { class: "btn btn-primary wide", "{booking.action}" }
                    p { class: "muted small center", "{booking.note}" }
                }
            }
        }
    }
}
