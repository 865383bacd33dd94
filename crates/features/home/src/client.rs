use crate::catalog::{FEATURES, HIGHLIGHTS, QUICK_STATS, TESTIMONIALS};
use dioxus::prelude::*;
use heritage_domain::constants::{MAP_PATH, PLATFORM_TAGLINE, VIRTUAL_TOUR_PATH};

#[component]
pub fn Home() -> Element {
    let testimonials = TESTIMONIALS.iter().map(|t| (t, t.stars()));

    rsx! {
        div { class: "home",
            section { class: "hero",
                div { class: "hero-body",
                    span { class: "pill", "☸ {PLATFORM_TAGLINE}" }
                    h1 {
                        "Discover Sikkim's"
                        span { class: "gradient block", "Sacred Monasteries" }
                    }
                    p { class: "lead",
                        "Experience the spiritual heritage of the Himalayas through virtual tours, interactive maps, and cultural events - all in one comprehensive platform"
                    }
                    div { class: "row center",
                        Link { class: "btn btn-primary btn-xl", to: VIRTUAL_TOUR_PATH, "▶ Start Virtual Tour" }
                        Link { class: "btn btn-glass btn-xl", to: MAP_PATH, "📍 Explore Map" }
                    }
                    div { class: "stats-grid",
                        for stat in QUICK_STATS {
                            div { key: "{stat.label}", class: "stat",
                                span { class: "stat-icon", "{stat.icon}" }
                                strong { "{stat.value}" }
                                span { class: "small", "{stat.label}" }
                            }
                        }
                    }
                }
            }
            section { class: "section",
                div { class: "section-header",
                    h2 {
                        "Explore Our"
                        span { class: "gradient", " Features" }
                    }
                    p { class: "muted",
                        "Immerse yourself in the rich cultural heritage of Sikkim's monasteries through cutting-edge technology"
                    }
                }
                div { class: "feature-grid",
                    for card in FEATURES {
                        article { key: "{card.title}", class: "card feature-card",
                            div { class: "feature-icon", "{card.icon}" }
                            h3 { "{card.title}" }
                            p { class: "muted", "{card.description}" }
                            div { class: "row-between",
                                span { class: "badge badge-secondary", "{card.stats}" }
                                span { class: "stars", "★★★★★" }
                            }
                            ul { class: "bullets",
                                for bullet in card.bullets {
                                    li { key: "{bullet}", "{bullet}" }
                                }
                            }
                            Link { class: "btn btn-primary wide", to: card.href, "Explore →" }
                        }
                    }
                }
            }
            section { class: "section muted-bg",
                div { class: "section-header",
                    h2 {
                        "What Visitors"
                        span { class: "gradient", " Say" }
                    }
                    p { class: "muted",
                        "Join thousands of satisfied visitors who have experienced Sikkim's monasteries through our platform"
                    }
                }
                div { class: "three-col",
                    for (testimonial, stars) in testimonials {
                        blockquote { key: "{testimonial.name}", class: "card",
                            span { class: "stars", "{stars}" }
                            p { class: "muted italic", "\"{testimonial.content}\"" }
                            div { class: "row",
                                span { class: "avatar", "{testimonial.avatar}" }
                                div {
                                    strong { "{testimonial.name}" }
                                    p { class: "muted small", "{testimonial.role}" }
                                }
                            }
                        }
                    }
                }
            }
            section { class: "section two-col",
                div {
                    h2 {
                        "Built for"
                        span { class: "gradient", " Modern Exploration" }
                    }
                    p { class: "muted lead",
                        "Our platform combines traditional wisdom with cutting-edge technology to create an unparalleled cultural experience."
                    }
                    for highlight in HIGHLIGHTS {
                        div { key: "{highlight.title}", class: "row highlight",
                            span { class: "highlight-icon", "{highlight.icon}" }
                            div {
                                h3 { "{highlight.title}" }
                                p { class: "muted", "{highlight.body}" }
                            }
                        }
                    }
                    Link { class: "btn btn-primary", to: VIRTUAL_TOUR_PATH, "Start Exploring →" }
                }
                div { class: "immersive card",
                    h3 { "Immersive Experience" }
                    p { class: "small", "Step inside sacred spaces from anywhere in the world" }
                }
            }
            section { class: "cta",
                h2 { "Begin Your Spiritual Journey" }
                p { class: "lead",
                    "Discover the timeless wisdom and beauty of Sikkim's monasteries. Start exploring today and connect with centuries of Buddhist heritage."
                }
                div { class: "row center",
                    Link { class: "btn btn-golden btn-xl", to: VIRTUAL_TOUR_PATH, "📷 Take Virtual Tour" }
                    button { class: "btn btn-glass btn-xl", "⬇ Download App" }
                }
            }
        }
    }
}
