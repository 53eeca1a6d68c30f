use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPen, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{Button, ButtonHeight, ButtonStyle, DropDownInput, RegularInput},
        i18n::faircv,
        routes::faircv::create::scores::{DraftErrors, ScoreAction, ScoreDraft},
    },
    model::faircv::{Grade, Language, ScoreDto},
};

fn language_options() -> Vec<String> {
    Language::ALL.iter().map(|lang| lang.code().to_string()).collect()
}

fn grade_options() -> Vec<String> {
    Grade::ALL.iter().map(|grade| grade.label().to_string()).collect()
}

/// A row of the score table.
///
/// The trailing row for new scores (`id` is `None`) is always editable and
/// clears itself after adding. Existing rows switch between view and edit mode.
#[component]
pub fn ScoreItem(
    id: Option<u64>,
    score: Option<ScoreDto>,
    on_dispatch: EventHandler<ScoreAction>,
) -> Element {
    let is_new = id.is_none();
    let mut draft = use_signal(|| score.as_ref().map(ScoreDraft::from_score).unwrap_or_default());
    let mut errors = use_signal(DraftErrors::default);
    let mut edit_mode = use_signal(|| is_new);

    let submit = move |_: MouseEvent| {
        let parsed = draft.read().parse();

        match parsed {
            Ok(score) => {
                errors.set(DraftErrors::default());
                match id {
                    Some(id) => {
                        on_dispatch.call(ScoreAction::Update(id, score));
                        edit_mode.set(false);
                    }
                    None => {
                        on_dispatch.call(ScoreAction::Add(score));
                        draft.set(ScoreDraft::default());
                    }
                }
            }
            Err(invalid) => errors.set(invalid),
        }
    };

    if let (false, Some(shown)) = (edit_mode(), score.clone()) {
        let editing = shown.clone();

        return rsx!(
            tr {
                td { "{shown.subject}" }
                td { "{shown.lang}" }
                td { "{shown.hours}" }
                td { "{shown.credits}" }
                td { "{shown.grade}" }
                td {
                    div { class: "flex gap-1",
                        button {
                            class: "btn btn-ghost btn-sm",
                            title: faircv::EDIT,
                            onclick: move |_| {
                                draft.set(ScoreDraft::from_score(&editing));
                                edit_mode.set(true);
                            },
                            Icon { width: 14, height: 14, icon: FaPen }
                        }
                        button {
                            class: "btn btn-ghost btn-sm text-error",
                            title: faircv::DELETE,
                            onclick: move |_| {
                                if let Some(id) = id {
                                    on_dispatch.call(ScoreAction::Remove(id));
                                }
                            },
                            Icon { width: 14, height: 14, icon: FaTrash }
                        }
                    }
                }
            }
        );
    }

    let current = draft.read().clone();
    let invalid = errors.read().clone();
    let submit_label = if is_new {
        faircv::ADD_SCORE
    } else {
        faircv::SAVE_CHANGES
    };

    rsx!(
        tr {
            td {
                RegularInput {
                    value: current.subject,
                    placeholder: faircv::COURSE,
                    error: invalid.subject.map(str::to_string),
                    oninput: move |value| draft.write().subject = value,
                }
            }
            td { class: "w-24",
                DropDownInput {
                    selected: current.lang,
                    options: language_options(),
                    onchange: move |value| draft.write().lang = value,
                }
            }
            td { class: "w-24",
                RegularInput {
                    value: current.hours,
                    kind: "number",
                    placeholder: faircv::HOURS,
                    error: invalid.hours.map(str::to_string),
                    oninput: move |value| draft.write().hours = value,
                }
            }
            td { class: "w-24",
                RegularInput {
                    value: current.credits,
                    kind: "number",
                    placeholder: faircv::CREDITS,
                    error: invalid.credits.map(str::to_string),
                    oninput: move |value| draft.write().credits = value,
                }
            }
            td { class: "w-48",
                DropDownInput {
                    selected: current.grade,
                    options: grade_options(),
                    onchange: move |value| draft.write().grade = value,
                }
            }
            td {
                Button {
                    text: submit_label,
                    variant: ButtonStyle::Empty,
                    height: ButtonHeight::Small,
                    onclick: submit,
                }
            }
        }
    )
}
