use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Confirm(token: String) -> Element {
    rsx! { ConfirmScreen { token: Some(token) } }
}

/// `/confirm` with no token still renders the prompt; the empty token is
/// passed through to the backend.
#[component]
pub fn ConfirmWithoutToken() -> Element {
    rsx! { ConfirmScreen {} }
}

#[component]
fn ConfirmScreen(token: Option<String>) -> Element {
    // Fetch runtime config from the server so we don't rely on compile-time env vars.
    let cfg = use_resource(|| async move { api::public_config().await });
    let nav = use_navigator();

    match cfg() {
        None => rsx! {
            p { class: "hint", "Loading…" }
        },
        Some(Err(err)) => rsx! {
            p { class: "error", "Configuration error: {err}" }
        },
        Some(Ok(config)) => rsx! {
            ui::ConfirmationPage {
                token,
                config,
                on_navigate: move |path: String| match path.parse::<Route>() {
                    Ok(route) => {
                        nav.push(route);
                    }
                    Err(err) => tracing::warn!("confirm: unroutable path {path}: {err}"),
                },
            }
        },
    }
}
