use dioxus::prelude::*;

use views::{Confirm, ConfirmWithoutToken, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/confirm")]
    ConfirmWithoutToken {},
    #[route("/confirm/:token")]
    Confirm { token: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    {
        init_tracing();
        api::config::load_dotenv();
    }

    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let ip = std::env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let mode = api::config::AppMode::from_env();
    let cfg = api::ApiConfig::from_env();

    eprintln!("startup: IP={ip} PORT={port} APP_MODE={mode:?}");
    eprintln!("startup: API_URL={}", cfg.base_url);

    if std::env::var("API_URL").is_err() {
        eprintln!("startup: API_URL not set, using {}", cfg.base_url);
    }
    if mode == api::config::AppMode::Production && cfg.points_at_localhost() {
        eprintln!("startup: WARNING API_URL points to localhost in production mode");
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
