use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::{MainMessage, MessageKind};

#[component]
pub fn CheckEmail() -> Element {
    rsx!(
        Title { "Проверьте почту | FairCV" }
        MainMessage { kind: MessageKind::CheckEmail }
    )
}

#[component]
pub fn Confirmation() -> Element {
    rsx!(
        Title { "Email подтвержден | FairCV" }
        MainMessage { kind: MessageKind::Confirmed }
    )
}
