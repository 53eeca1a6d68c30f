use dioxus::document::Stylesheet;
use dioxus::prelude::*;

use crate::client::{router::Route, service::ApiClient};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    use_context_provider(ApiClient::default);

    rsx! {
        Stylesheet { href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
