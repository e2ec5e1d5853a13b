use dioxus::prelude::*;

/// Shown when an activation attempt fails for any reason.
pub const FAILURE_MESSAGE: &str = "Failed to activate account";

/// Presents a failure to the user.
pub trait Notify {
    fn notify(&self, message: &str);
}

impl<N: Notify + ?Sized> Notify for &N {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

impl Notify for EventHandler<String> {
    fn notify(&self, message: &str) {
        self.call(message.to_string());
    }
}

/// Blocking browser `alert()`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlertNotice;

impl Notify for AlertNotice {
    #[cfg(target_arch = "wasm32")]
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                tracing::warn!("alert failed: {err:?}");
            }
        }
    }

    // Webview builds have no `web_sys::Window`; go through JS instead.
    #[cfg(not(target_arch = "wasm32"))]
    fn notify(&self, message: &str) {
        let script = format!(r#"alert("{}"); return "";"#, js_escape(message));
        spawn(async move {
            let _ = document::eval(&script).await;
        });
    }
}

/// The notice a [`crate::ConfirmationPage`] uses: the caller's handler if
/// one was given, the blocking alert otherwise.
#[derive(Clone, Copy)]
pub enum FailureNotice {
    Alert(AlertNotice),
    Handler(EventHandler<String>),
}

impl From<Option<EventHandler<String>>> for FailureNotice {
    fn from(handler: Option<EventHandler<String>>) -> Self {
        match handler {
            Some(handler) => FailureNotice::Handler(handler),
            None => FailureNotice::Alert(AlertNotice),
        }
    }
}

impl Notify for FailureNotice {
    fn notify(&self, message: &str) {
        match self {
            FailureNotice::Alert(alert) => alert.notify(message),
            FailureNotice::Handler(handler) => handler.notify(message),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub(crate) fn js_escape(s: &str) -> String {
    // Escape for embedding into a double-quoted JS string literal.
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}
