use crate::catalog::{DOWNLOADED_SUMMARY, FEATURES, MAX_VOLUME, STORAGE_USED, TRACKS};
use crate::view::AudioView;
use dioxus::prelude::*;
use heritage_domain::GuideLanguage;
use heritage_domain::audio::format_clock;
use heritage_domain::config::UiConfig;
use strum::IntoEnumIterator;

#[component]
pub fn AudioGuide() -> Element {
    let language = try_use_context::<UiConfig>().map(|ui| ui.language).unwrap_or_default();
    let mut view = use_signal(|| AudioView::new(language));

    let state = view.read().clone();
    let track = state.current();
    let current = state.track_index();
    let (position, duration, volume) = (state.position(), state.duration(), state.volume());
    let position_label = state.position_label();
    let duration_label = state.duration_label();
    let (status, switch_label) = state.connection_labels();
    let selected_language = state.language();
    let languages = GuideLanguage::iter().map(|lang| (lang, lang.code(), lang.flag(), lang.native_name()));
    let tracks = TRACKS.iter().enumerate().map(|(index, guide)| (index, guide, format_clock(guide.duration_secs)));

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Smart Audio Guide" }
                p { class: "muted", "Location-based audio guides in multiple languages with offline support" }
            }
            div { class: "page-grid",
                div { class: "span-2 stack",
                    div { class: "card player",
                        div { class: "row",
                            div { class: "player-art", "🎧" }
                            div {
                                h2 { "{track.title}" }
                                p { class: "muted small",
                                    "📍 {track.monastery} · 👤 {track.narrator} · 🕒 {duration_label}"
                                }
                                p { class: "muted", "{track.description}" }
                                div { class: "badges",
                                    span { class: "badge badge-secondary", "{track.category}" }
                                    span { class: "badge badge-outline", "🌐 {track.language}" }
                                    if track.downloaded {
                                        span { class: "badge badge-secondary", "⬇ Downloaded" }
                                    }
                                }
                            }
                        }
                        input {
                            class: "slider",
                            r#type: "range",
                            min: "0",
                            max: "{duration}",
                            step: "1",
                            value: "{position}",
                            oninput: move |event| {
                                if let Ok(secs) = event.value().parse::<u32>() {
                                    view.write().seek(secs);
                                }
                            },
                        }
                        div { class: "row-between muted small",
                            span { "{position_label}" }
                            span { "{duration_label}" }
                        }
                        div { class: "player-controls",
                            button {
                                class: "btn btn-outline",
                                disabled: !state.can_previous(),
                                onclick: move |_| view.write().previous(),
                                "⏮"
                            }
                            button {
                                class: "btn btn-primary btn-round",
                                onclick: move |_| view.write().toggle_play(),
                                if state.is_playing() { "⏸" } else { "▶" }
                            }
                            button {
                                class: "btn btn-outline",
                                disabled: !state.can_next(),
                                onclick: move |_| view.write().next(),
                                "⏭"
                            }
                        }
                        div { class: "row",
                            span { "🔊" }
                            input {
                                class: "slider",
                                r#type: "range",
                                min: "0",
                                max: "{MAX_VOLUME}",
                                step: "1",
                                value: "{volume}",
                                oninput: move |event| {
                                    if let Ok(volume) = event.value().parse::<u32>() {
                                        view.write().set_volume(volume);
                                    }
                                },
                            }
                            span { class: "muted small", "{volume}%" }
                        }
                    }
                    div { class: "card row-between",
                        div { class: "row",
                            span { if state.is_offline() { "📴" } else { "📶" } }
                            strong { "{status}" }
                            span { class: "muted small", "Bluetooth Beacons Active" }
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| view.write().toggle_offline(),
                            "{switch_label}"
                        }
                    }
                }
                aside { class: "stack",
                    div { class: "card",
                        h3 { "Choose Language" }
                        for (lang, code, flag, name) in languages {
                            button {
                                key: "{code}",
                                class: if lang == selected_language { "btn btn-primary wide" } else { "btn btn-outline wide" },
                                onclick: move |_| view.write().select_language(lang),
                                "{flag} {name}"
                            }
                        }
                    }
                    div { class: "card",
                        h3 { "Audio Guides" }
                        for (index, guide, clock) in tracks {
                            div {
                                key: "{guide.id}",
                                class: if index == current { "list-row list-row-active" } else { "list-row" },
                                onclick: move |_| view.write().select(index),
                                div { class: "row-between",
                                    h4 { "{guide.title}" }
                                    span { class: if guide.downloaded { "ok" } else { "muted" }, "⬇" }
                                }
                                p { class: "muted small", "{guide.monastery}" }
                                div { class: "row-between",
                                    span { class: "badge badge-outline", "{guide.category}" }
                                    span { class: "muted small", "{clock}" }
                                }
                            }
                        }
                    }
                    div { class: "card",
                        h3 { "Offline Downloads" }
                        button { class: "btn btn-primary wide", "⬇ Download All Guides" }
                        p { class: "muted small", "Download guides for offline access in remote monastery locations" }
                        div { class: "kv small",
                            span { class: "muted", "Downloaded:" }
                            span { "{DOWNLOADED_SUMMARY}" }
                        }
                        div { class: "kv small",
                            span { class: "muted", "Storage used:" }
                            span { "{STORAGE_USED}" }
                        }
                    }
                    div { class: "card",
                        h3 { "Features" }
                        for feature in FEATURES {
                            p { key: "{feature}", class: "small bullet", "{feature}" }
                        }
                    }
                }
            }
        }
    }
}
