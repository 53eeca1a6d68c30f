pub mod errors;
pub mod form;
mod tabs;

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::Page,
    routes::auth::{
        form::{AuthFormState, AuthTab},
        tabs::{NewPasswordForm, RecoveryForm, SignInForm, SignUpForm},
    },
};

const LOGO: Asset = asset!("/assets/main-logo.svg");

/// Sign-in screen, also reached from password reset links.
#[component]
pub fn Auth(reset_password_token: String) -> Element {
    let form = use_signal(|| AuthFormState::new(&reset_password_token));

    let tab = form.read().tab;

    rsx!(
        Title { "Вход | FairCV" }
        Meta {
            name: "description",
            content: "FairCV: verifiable academic records for students and employers."
        }
        Page { class: "flex items-center justify-center",
            div { class: "card shadow-sm w-full max-w-md",
                div { class: "card-body gap-4",
                    div { class: "flex justify-center",
                        img { src: LOGO, alt: "FairCV", height: 32, width: 120 }
                    }
                    {match tab {
                        AuthTab::SignIn => rsx!(SignInForm { form }),
                        AuthTab::SignUp => rsx!(SignUpForm { form }),
                        AuthTab::Reset => rsx!(NewPasswordForm { form }),
                        AuthTab::Recovery => rsx!(RecoveryForm { form }),
                    }}
                }
            }
        }
    )
}
