use dioxus::prelude::*;

use crate::client::{components::Page, i18n::messages::NOT_FOUND, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-xl", "{NOT_FOUND}" }
            p { class: "text-xs opacity-60", "/{path}" }
            Link {
                to: Route::FairCvList { page: 1 },
                class: "btn btn-outline",
                "FairCV"
            }
        }
    )
}
