use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{Button, ButtonStyle, Page, Pagination, Spinner},
        i18n::{errors::LIST_FAILED, faircv},
        router::Route,
        service::ApiClient,
        util::time::format_relative_time,
    },
    model::faircv::FairCvSummaryDto,
};

#[component]
pub fn FairCvList(page: usize) -> Element {
    let api = use_context::<ApiClient>();
    let navigator = navigator();
    let page = page.max(1);

    let faircvs = use_resource(use_reactive!(|(page,)| {
        let api = api.clone();
        async move { api.list_faircvs(page).await }
    }));

    let content = match &*faircvs.read() {
        None => rsx!(
            div { class: "flex justify-center p-8", Spinner { size: "loading-lg" } }
        ),
        Some(Err(_)) => rsx!(
            p { class: "text-error", "{LIST_FAILED}" }
        ),
        Some(Ok(result)) if result.items.is_empty() => rsx!(
            div { class: "flex flex-col items-center gap-2 p-8",
                p { class: "opacity-70", {faircv::EMPTY_LIST} }
                Link {
                    to: Route::AddFairCv {},
                    Button {
                        text: faircv::CREATE,
                        variant: ButtonStyle::ArrowForward,
                    }
                }
            }
        ),
        Some(Ok(result)) => {
            let total_pages = result.total_pages;
            let current = result.page;

            rsx!(
                FairCvTable { faircvs: result.items.clone() }
                div { class: "flex justify-center",
                    Pagination {
                        count: total_pages,
                        current,
                        on_page: move |page| {
                            navigator.push(Route::FairCvList { page });
                        },
                    }
                }
            )
        }
    };

    rsx!(
        Title { "FairCV" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1080px] p-6 flex flex-col gap-4",
                div { class: "flex items-center justify-between",
                    h1 { class: "text-2xl", {faircv::LIST_TITLE} }
                    Link {
                        to: Route::AddFairCv {},
                        class: "btn btn-primary flex gap-2",
                        Icon { width: 16, height: 16, icon: FaPlus }
                        {faircv::CREATE}
                    }
                }
                {content}
            }
        }
    )
}

#[component]
fn FairCvTable(faircvs: Vec<FairCvSummaryDto>) -> Element {
    let now = chrono::Utc::now().naive_utc();

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { {faircv::STUDENT} }
                        th { class: "w-32", {faircv::SCORES} }
                        th { class: "w-48", {faircv::CREATED} }
                    }
                }
                tbody {
                    {faircvs.iter().map(|cv| rsx! {
                        tr { key: "{cv.id}",
                            td { "{cv.student_name}" }
                            td { class: "w-32", "{cv.scores_count}" }
                            td { class: "w-48",
                                {format_relative_time(&cv.created_at, &now)}
                            }
                        }
                    })}
                }
            }
        }
    )
}
