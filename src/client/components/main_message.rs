use dioxus::prelude::*;

use crate::client::{
    components::{Header, Page},
    i18n::messages,
    router::Route,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MessageKind {
    /// Landing page of the email confirmation link
    Confirmed,
    /// Shown after sign-up or a password recovery request
    CheckEmail,
}

impl MessageKind {
    fn title(&self) -> &'static str {
        match self {
            MessageKind::Confirmed => messages::CONFIRMED_TITLE,
            MessageKind::CheckEmail => messages::CHECK_EMAIL_TITLE,
        }
    }

    fn text(&self) -> &'static str {
        match self {
            MessageKind::Confirmed => messages::CONFIRMED_TEXT,
            MessageKind::CheckEmail => messages::CHECK_EMAIL_TEXT,
        }
    }
}

#[component]
pub fn MainMessage(kind: MessageKind) -> Element {
    rsx!(
        Header {}
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm max-w-128",
                div { class: "card-body items-center text-center",
                    h2 { class: "card-title", {kind.title()} }
                    p { {kind.text()} }
                    Link {
                        to: Route::Auth { reset_password_token: String::new() },
                        class: "btn btn-primary mt-2",
                        {messages::GO_TO_SIGN_IN}
                    }
                }
            }
        }
    )
}
