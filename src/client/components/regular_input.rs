use dioxus::prelude::*;

/// Text input with an optional validation message underneath.
#[component]
pub fn RegularInput(
    value: String,
    oninput: EventHandler<String>,
    #[props(into, default)] placeholder: String,
    #[props(default = "text")] kind: &'static str,
    #[props(default)] error: Option<String>,
) -> Element {
    let filled = if value.is_empty() { "" } else { "input-primary" };
    let invalid = if error.is_some() { "input-error" } else { "" };

    rsx!(
        div { class: "flex flex-col gap-1 w-full",
            input {
                class: "input w-full {filled} {invalid}",
                r#type: kind,
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |event| oninput.call(event.value()),
            }
            if let Some(message) = error {
                span { class: "text-error text-sm", "{message}" }
            }
        }
    )
}
