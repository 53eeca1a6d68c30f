use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{Button, ButtonColor, ButtonStyle, FairCvTitleButton},
    i18n::auth::SIGN_OUT,
    router::Route,
    service::ApiClient,
    store::user::UserState,
};

#[component]
pub fn Header() -> Element {
    let user_state = try_use_context::<Signal<UserState>>();
    let api = use_context::<ApiClient>();
    let navigator = navigator();

    let user = user_state.and_then(|state| state.read().user.clone());

    let sign_out = move |_: MouseEvent| {
        let api = api.clone();
        spawn(async move {
            if let Err(e) = api.logout().await {
                tracing::warn!("Sign out request failed: {}", e);
            }
            if let Some(mut state) = user_state {
                state.set(UserState {
                    user: None,
                    fetched: true,
                });
            }
            navigator.push(Route::Auth {
                reset_password_token: String::new(),
            });
        });
    };

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                FairCvTitleButton {}
            }
            div {
                class: "navbar-end",
                if let Some(user) = user {
                    div { class: "flex items-center gap-4",
                        div { class: "flex flex-col items-end",
                            p { class: "font-semibold", "{user.name}" }
                            p { class: "text-xs", "{user.email}" }
                        }
                        Button {
                            text: SIGN_OUT,
                            variant: ButtonStyle::Empty,
                            color: ButtonColor::Red,
                            onclick: sign_out,
                        }
                    }
                }
            }
        }
    }
}
