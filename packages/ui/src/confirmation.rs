use api::{
    ActivationClient, ActivationError, ActivationOutcome, ActivationToken, ApiConfig, Transport,
};
use dioxus::prelude::*;

use crate::navigation::{Navigate, HOME_PATH};
use crate::notice::{FailureNotice, Notify, FAILURE_MESSAGE};
use crate::transport::ActivationTransport;

const CONFIRMATION_CSS: Asset = asset!("/assets/styling/confirmation.css");

/// Activates one account and routes the user by the result.
///
/// Holds everything a single click needs; no state survives a call, so
/// calling [`Confirmation::confirm`] twice sends two independent requests.
pub struct Confirmation<T, N, F> {
    client: ActivationClient<T>,
    token: ActivationToken,
    navigator: N,
    notice: F,
}

impl<T: Transport, N: Navigate, F: Notify> Confirmation<T, N, F> {
    pub fn new(client: ActivationClient<T>, token: ActivationToken, navigator: N, notice: F) -> Self {
        Self {
            client,
            token,
            navigator,
            notice,
        }
    }

    pub fn token(&self) -> &ActivationToken {
        &self.token
    }

    /// Network failures take the same path as error statuses.
    pub async fn confirm(&self) -> ActivationOutcome {
        match self.client.activate(&self.token).await {
            Ok(()) => {
                tracing::info!("Account activated");
                self.navigator.navigate_to(HOME_PATH);
                ActivationOutcome::Activated
            }
            Err(err) => {
                match &err {
                    ActivationError::Rejected { status } => {
                        tracing::warn!(status, "Failed to activate account");
                    }
                    ActivationError::Transport(_) => {
                        tracing::error!(error = %err, "Failed to activate account");
                    }
                }
                self.notice.notify(FAILURE_MESSAGE);
                ActivationOutcome::Failed
            }
        }
    }
}

/// Returns the click handler of a confirmation prompt.
///
/// Each call spawns one [`Confirmation::confirm`] on the calling component's
/// scope, so a response that arrives after the component is gone is dropped
/// with it. Uses the [`ActivationTransport`] from context when one exists.
pub fn use_confirmation(
    token: ActivationToken,
    config: ApiConfig,
    on_navigate: EventHandler<String>,
    notice: FailureNotice,
) -> Callback<()> {
    let injected = try_use_context::<ActivationTransport>();
    let fallback = use_hook(ActivationTransport::default);
    let transport = injected.unwrap_or(fallback);

    use_callback(move |_: ()| {
        let confirmation = Confirmation::new(
            ActivationClient::with_transport(config.clone(), transport.clone()),
            token.clone(),
            on_navigate,
            notice,
        );
        spawn(async move {
            let outcome = confirmation.confirm().await;
            tracing::debug!(activated = outcome.is_activated(), "confirmation: finished");
        });
    })
}

/// Confirmation prompt for the account identified by `token`.
///
/// `on_navigate` receives the path to move to after a successful
/// activation. `on_failure` replaces the default blocking alert.
#[component]
pub fn ConfirmationPage(
    token: Option<String>,
    config: ApiConfig,
    on_navigate: EventHandler<String>,
    on_failure: Option<EventHandler<String>>,
) -> Element {
    let confirm = use_confirmation(
        ActivationToken::from_route(token),
        config,
        on_navigate,
        FailureNotice::from(on_failure),
    );

    rsx! {
        document::Link { rel: "stylesheet", href: CONFIRMATION_CSS }

        div { class: "confirmation",
            h1 { "Confirmation" }
            button {
                class: "btn primary",
                onclick: move |_| confirm.call(()),
                "Click to confirm"
            }
        }
    }
}
