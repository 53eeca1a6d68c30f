use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTriangleExclamation;
use dioxus_free_icons::Icon;

use crate::client::{components::Button, i18n::faircv};

/// Final warning before a FairCV is saved for good.
#[component]
pub fn Reminder(saving: bool, error: Option<String>, on_save: EventHandler<()>) -> Element {
    rsx!(
        div { class: "alert alert-warning flex flex-wrap justify-between gap-4",
            div { class: "flex items-center gap-2",
                Icon { width: 20, height: 20, icon: FaTriangleExclamation }
                p { {faircv::REMINDER} }
            }
            div { class: "flex flex-col items-end gap-1",
                Button {
                    text: faircv::SAVE_FAIRCV,
                    loading: saving,
                    onclick: move |_| on_save.call(()),
                }
                if let Some(message) = error {
                    span { class: "text-error text-sm", "{message}" }
                }
            }
        }
    )
}
