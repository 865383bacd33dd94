use dioxus::prelude::*;
use heritage_domain::constants::HOME_PATH;
use tracing::warn;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let logged = path.clone();
    use_hook(move || warn!(path = %logged, "404: user attempted to access a non-existent route"));

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { class: "muted", "Oops! Page not found" }
            p { class: "muted small", "{path}" }
            Link { class: "btn btn-primary", to: HOME_PATH, "Return to Home" }
        }
    }
}
