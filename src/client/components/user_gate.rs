//! Route guard that resolves the current user before rendering its children.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{Header, WalletGate},
    i18n::messages::LOADING,
    router::Route,
    service::ApiClient,
    store::user::UserState,
};

/// What a [`UserGate`] renders for a given lookup state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GateDecision {
    Loading,
    /// Send the visitor to the sign-in screen
    Redirect,
    Render,
}

/// Decides what a gate shows.
///
/// Guarded gates only render for users that are signed in and confirmed by both
/// email and organization. Unguarded gates render for anyone once the lookup
/// finished.
pub fn gate_decision(state: &UserState, guarded: bool) -> GateDecision {
    if !state.fetched {
        GateDecision::Loading
    } else if guarded && !state.is_confirmed() {
        GateDecision::Redirect
    } else {
        GateDecision::Render
    }
}

/// Looks up the current user on mount and provides it to `children` through context.
///
/// A failed lookup counts as signed out.
#[component]
pub fn UserGate(guarded: bool, children: Element) -> Element {
    let api = use_context::<ApiClient>();
    let navigator = navigator();
    let mut state = use_context_provider(|| Signal::new(UserState::default()));

    use_future(move || {
        let api = api.clone();
        async move {
            let user = match api.get_current_user().await {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::debug!("No current user: {}", e);
                    None
                }
            };

            state.set(UserState {
                user,
                fetched: true,
            });
        }
    });

    use_effect(move || {
        if gate_decision(&state.read(), guarded) == GateDecision::Redirect {
            tracing::debug!("Redirecting unconfirmed visitor to sign in");
            navigator.replace(Route::Auth {
                reset_password_token: String::new(),
            });
        }
    });

    let decision = gate_decision(&state.read(), guarded);

    match decision {
        GateDecision::Loading => rsx!(
            div { class: "min-h-screen flex items-center justify-center",
                h5 { "{LOADING}" }
            }
        ),
        GateDecision::Redirect => rsx!(),
        GateDecision::Render => rsx!(
            Header {}
            {children}
        ),
    }
}

/// Layout of the sign-in screens, open to anyone.
#[component]
pub fn AuthLayout() -> Element {
    rsx!(
        UserGate { guarded: false,
            Outlet::<Route> {}
        }
    )
}

/// Layout of the CV screens, requires a confirmed user and a connected wallet.
#[component]
pub fn FairCvLayout() -> Element {
    rsx!(
        UserGate { guarded: true,
            WalletGate {
                Outlet::<Route> {}
            }
        }
    )
}
