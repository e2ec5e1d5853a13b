use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "panel",
            h1 { "Welcome" }
            p { class: "hint", "Your account is ready to use." }
        }
    }
}
