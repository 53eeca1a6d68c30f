pub mod reminder;
pub mod score_item;
pub mod scores;

use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{Button, ButtonStyle, Page, RegularInput},
        i18n::{errors, faircv},
        router::Route,
        service::ApiClient,
        wallet::UseConnect,
    },
    model::faircv::NewFairCvDto,
};

use reminder::Reminder;
use score_item::ScoreItem;
use scores::Scores;

/// Assembles the request for a new FairCV.
///
/// # Errors
/// The message to show when the student name or scores are missing, or no wallet is connected
pub fn build_new_faircv(
    student_name: &str,
    scores: &Scores,
    wallet_address: Option<String>,
) -> Result<NewFairCvDto, &'static str> {
    let student_name = student_name.trim();

    if student_name.is_empty() {
        return Err(errors::STUDENT_EMPTY);
    }
    if scores.is_empty() {
        return Err(errors::SCORES_EMPTY);
    }
    let wallet_address = wallet_address.ok_or(errors::SAVE_FAILED)?;

    Ok(NewFairCvDto {
        student_name: student_name.to_string(),
        wallet_address,
        scores: scores.to_scores(),
    })
}

#[component]
pub fn AddFairCv() -> Element {
    let api = use_context::<ApiClient>();
    let wallet = use_context::<UseConnect>();
    let navigator = navigator();

    let mut student_name = use_signal(String::new);
    let mut scores = use_signal(Scores::default);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let save = move |_| {
        if saving() {
            return;
        }

        let faircv = match build_new_faircv(&student_name.read(), &scores.read(), wallet.account()) {
            Ok(faircv) => faircv,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };

        let api = api.clone();
        error.set(None);
        saving.set(true);

        spawn(async move {
            match api.create_faircv(&faircv).await {
                Ok(created) => {
                    tracing::info!("Saved FairCV {} for {}", created.id, created.student_name);
                    navigator.push(Route::FairCvList { page: 1 });
                }
                Err(e) => {
                    tracing::error!("Failed to save FairCV: {}", e);
                    error.set(Some(errors::SAVE_FAILED.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let rows = scores.read().rows().to_vec();

    rsx!(
        Title { "Новый FairCV" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1080px] p-6 flex flex-col gap-4",
                div {
                    Link {
                        to: Route::FairCvList { page: 1 },
                        Button {
                            text: faircv::LIST_TITLE,
                            variant: ButtonStyle::ArrowBack,
                        }
                    }
                }
                h1 { class: "text-2xl", {faircv::CREATE_TITLE} }
                div { class: "max-w-md",
                    RegularInput {
                        value: student_name(),
                        placeholder: faircv::STUDENT_NAME,
                        oninput: move |value| student_name.set(value),
                    }
                }
                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { {faircv::COURSE} }
                                th { {faircv::LANGUAGE} }
                                th { {faircv::HOURS} }
                                th { {faircv::CREDITS} }
                                th { {faircv::GRADE} }
                                th {}
                            }
                        }
                        tbody {
                            for row in rows {
                                ScoreItem {
                                    key: "{row.id}",
                                    id: row.id,
                                    score: row.score,
                                    on_dispatch: move |action| scores.write().apply(action),
                                }
                            }
                            ScoreItem {
                                on_dispatch: move |action| scores.write().apply(action),
                            }
                        }
                    }
                }
                Reminder {
                    saving: saving(),
                    error: error(),
                    on_save: save,
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::routes::faircv::create::scores::ScoreAction,
        model::faircv::{Grade, Language, ScoreDto},
    };

    fn scores() -> Scores {
        let mut scores = Scores::default();
        scores.apply(ScoreAction::Add(ScoreDto {
            subject: "Algorithms".to_string(),
            lang: Language::En,
            hours: 144,
            credits: 5,
            grade: Grade::Excellent,
        }));
        scores
    }

    mod build_new_faircv {
        use super::*;

        /// Verifies a complete form produces the request body.
        #[test]
        fn builds_request() {
            let result =
                build_new_faircv(" Ivan Petrov ", &scores(), Some("0xabc".to_string())).unwrap();

            assert_eq!(result.student_name, "Ivan Petrov");
            assert_eq!(result.wallet_address, "0xabc");
            assert_eq!(result.scores.len(), 1);
        }

        /// Expected: student name is checked before scores
        #[test]
        fn requires_student_name() {
            let result = build_new_faircv("  ", &Scores::default(), Some("0xabc".to_string()));

            assert_eq!(result.err(), Some(errors::STUDENT_EMPTY));
        }

        /// Expected: a FairCV without scores is rejected
        #[test]
        fn requires_scores() {
            let result = build_new_faircv("Ivan", &Scores::default(), Some("0xabc".to_string()));

            assert_eq!(result.err(), Some(errors::SCORES_EMPTY));
        }

        /// Expected: saving fails without a connected wallet
        #[test]
        fn requires_wallet() {
            let result = build_new_faircv("Ivan", &scores(), None);

            assert_eq!(result.err(), Some(errors::SAVE_FAILED));
        }
    }
}
