use dioxus::prelude::*;

use crate::client::router::Route;

const LOGO: Asset = asset!("/assets/main-logo.svg");

#[component]
pub fn FairCvTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::FairCvList { page: 1 },
            div { class: "flex items-center gap-2",
                img {
                    src: LOGO,
                    alt: "FairCV",
                    height: 32,
                    width: 120
                }
                p { class: "text-xs",
                    "v0.1.0.Alpha-1"
                }
            }
        }
    )
}
