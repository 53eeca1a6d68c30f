use dioxus::prelude::*;

/// Full-height page body that clears the fixed header.
#[component]
pub fn Page(#[props(default)] class: &'static str, children: Element) -> Element {
    rsx!(
        main {
            class: "min-h-screen pt-[64px] p-4 {class}",
            {children}
        }
    )
}
