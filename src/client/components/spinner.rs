use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default = "loading-sm")] size: &'static str) -> Element {
    rsx!(
        span { class: "loading loading-spinner {size}" }
    )
}
