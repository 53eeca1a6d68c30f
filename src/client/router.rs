use dioxus::prelude::*;

use crate::client::{
    components::{AuthLayout, FairCvLayout},
    routes::{
        auth::Auth,
        faircv::{AddFairCv, FairCvList},
        CheckEmail, Confirmation, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[nest("/auth")]

        #[route("/check_email")]
        CheckEmail {},

        #[route("/confirmation")]
        Confirmation {},

        #[layout(AuthLayout)]

        #[route("/?:reset_password_token")]
        Auth { reset_password_token: String },

        #[end_layout]

    #[end_nest]

    #[nest("/faircv")]

        #[layout(FairCvLayout)]

        #[redirect("/", || Route::FairCvList { page: 1 })]
        #[route("/list?:page")]
        FairCvList { page: usize },

        #[route("/create")]
        AddFairCv {},

        #[end_layout]

    #[end_nest]

    #[redirect("/", || Route::FairCvList { page: 1 })]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
