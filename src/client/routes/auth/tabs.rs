use dioxus::prelude::*;

use crate::client::{
    components::{Button, ButtonStyle, ButtonType, ButtonWidth, RegularInput},
    i18n::auth,
    router::Route,
    routes::auth::form::{AuthFormState, AuthTab},
    service::ApiClient,
};

fn tab_class(active: bool) -> &'static str {
    if active {
        "tab tab-active"
    } else {
        "tab"
    }
}

/// Switch between signing in and signing up.
#[component]
fn Tabs(form: Signal<AuthFormState>) -> Element {
    let mut form = form;
    let tab = form.read().tab;

    rsx!(
        div { role: "tablist", class: "tabs tabs-box",
            button {
                r#type: "button",
                role: "tab",
                class: tab_class(tab == AuthTab::SignIn),
                onclick: move |_| form.write().go_to(AuthTab::SignIn),
                {auth::SIGN_IN_TAB}
            }
            button {
                r#type: "button",
                role: "tab",
                class: tab_class(tab == AuthTab::SignUp),
                onclick: move |_| form.write().go_to(AuthTab::SignUp),
                {auth::SIGN_UP_TAB}
            }
        }
    )
}

fn error_for(state: &AuthFormState, message: &str) -> Option<String> {
    state.visible_error(message).map(str::to_string)
}

#[component]
pub fn SignInForm(form: Signal<AuthFormState>) -> Element {
    let mut form = form;
    let api = use_context::<ApiClient>();
    let navigator = navigator();

    let login = move |event: FormEvent| {
        event.prevent_default();

        let api = api.clone();
        let (email, password) = {
            let state = form.read();
            (state.email.clone(), state.password.clone())
        };
        form.write().begin_request();

        spawn(async move {
            match api.login(&email, &password).await {
                Ok(()) => {
                    form.write().finish_request();
                    navigator.push(Route::FairCvList { page: 1 });
                }
                Err(e) => form.write().fail_request(&e),
            }
        });
    };

    let state = form.read().clone();

    rsx!(
        Tabs { form }
        form { class: "flex flex-col gap-3", onsubmit: login,
            RegularInput {
                value: state.email.clone(),
                placeholder: auth::EMAIL,
                kind: "email",
                error: error_for(&state, &state.errors.email),
                oninput: move |value| form.write().email = value,
            }
            RegularInput {
                value: state.password.clone(),
                placeholder: auth::PASSWORD,
                kind: "password",
                error: error_for(&state, &state.errors.password),
                oninput: move |value| form.write().password = value,
            }
            Button {
                text: auth::SIGN_IN,
                kind: ButtonType::Submit,
                width: ButtonWidth::Full,
                loading: state.is_loading,
            }
            Button {
                text: auth::FORGOT_PASSWORD,
                variant: ButtonStyle::Simple,
                onclick: move |_| form.write().go_to(AuthTab::Recovery),
            }
        }
    )
}

#[component]
pub fn SignUpForm(form: Signal<AuthFormState>) -> Element {
    let mut form = form;
    let api = use_context::<ApiClient>();
    let navigator = navigator();

    let sign_up = move |event: FormEvent| {
        event.prevent_default();

        let api = api.clone();
        let state = form.read().clone();
        form.write().begin_request();

        spawn(async move {
            let created = api
                .create_user(&state.email, &state.name, &state.website, &state.password)
                .await;

            match created {
                Ok(()) => {
                    form.write().finish_request();
                    navigator.push(Route::CheckEmail {});
                }
                Err(e) => form.write().fail_request(&e),
            }
        });
    };

    let state = form.read().clone();

    rsx!(
        Tabs { form }
        form { class: "flex flex-col gap-3", onsubmit: sign_up,
            RegularInput {
                value: state.email.clone(),
                placeholder: auth::EMAIL,
                kind: "email",
                error: error_for(&state, &state.errors.email),
                oninput: move |value| form.write().email = value,
            }
            RegularInput {
                value: state.name.clone(),
                placeholder: auth::ORG_NAME,
                error: error_for(&state, &state.errors.name),
                oninput: move |value| form.write().name = value,
            }
            RegularInput {
                value: state.website.clone(),
                placeholder: auth::ORG_WEBSITE,
                kind: "url",
                error: error_for(&state, &state.errors.website),
                oninput: move |value| form.write().website = value,
            }
            RegularInput {
                value: state.password.clone(),
                placeholder: auth::PASSWORD,
                kind: "password",
                error: error_for(&state, &state.errors.password),
                oninput: move |value| form.write().password = value,
            }
            Button {
                text: auth::SIGN_UP,
                kind: ButtonType::Submit,
                width: ButtonWidth::Full,
                loading: state.is_loading,
            }
        }
    )
}

/// Chooses a new password with the token from a reset link.
#[component]
pub fn NewPasswordForm(form: Signal<AuthFormState>) -> Element {
    let mut form = form;
    let api = use_context::<ApiClient>();

    let save = move |event: FormEvent| {
        event.prevent_default();

        let api = api.clone();
        let (password, token) = {
            let state = form.read();
            (state.new_password.clone(), state.token.clone())
        };
        form.write().begin_request();

        spawn(async move {
            match api.create_password(&password, &token).await {
                Ok(()) => {
                    let mut state = form.write();
                    state.finish_request();
                    state.new_password.clear();
                    state.token.clear();
                    state.go_to(AuthTab::SignIn);
                }
                Err(e) => form.write().fail_request(&e),
            }
        });
    };

    let state = form.read().clone();

    rsx!(
        p { class: "text-lg font-semibold text-center", {auth::NEW_PASSWORD_TITLE} }
        form { class: "flex flex-col gap-3", onsubmit: save,
            RegularInput {
                value: state.new_password.clone(),
                placeholder: auth::NEW_PASSWORD,
                kind: "password",
                error: error_for(&state, &state.errors.password),
                oninput: move |value| form.write().new_password = value,
            }
            Button {
                text: auth::SAVE,
                kind: ButtonType::Submit,
                width: ButtonWidth::Full,
                loading: state.is_loading,
            }
        }
    )
}

/// Requests a password reset link by email.
#[component]
pub fn RecoveryForm(form: Signal<AuthFormState>) -> Element {
    let mut form = form;
    let api = use_context::<ApiClient>();
    let navigator = navigator();

    let send = move |event: FormEvent| {
        event.prevent_default();

        let api = api.clone();
        let email = form.read().email.clone();
        form.write().begin_request();

        spawn(async move {
            match api.reset_password(&email).await {
                Ok(()) => {
                    form.write().finish_request();
                    navigator.push(Route::CheckEmail {});
                }
                Err(e) => form.write().fail_request(&e),
            }
        });
    };

    let state = form.read().clone();

    rsx!(
        div {
            Button {
                text: auth::GO_BACK,
                variant: ButtonStyle::ArrowBack,
                onclick: move |_| form.write().go_to(AuthTab::SignIn),
            }
        }
        p { class: "text-lg font-semibold text-center", {auth::RECOVERY_TITLE} }
        form { class: "flex flex-col gap-3", onsubmit: send,
            RegularInput {
                value: state.email.clone(),
                placeholder: auth::EMAIL,
                kind: "email",
                error: error_for(&state, &state.errors.email),
                oninput: move |value| form.write().email = value,
            }
            Button {
                text: auth::SEND,
                kind: ButtonType::Submit,
                width: ButtonWidth::Full,
                loading: state.is_loading,
            }
        }
    )
}
