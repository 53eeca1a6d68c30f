use dioxus::prelude::*;

/// A select box over a fixed list of string options.
#[component]
pub fn DropDownInput(
    selected: String,
    options: Vec<String>,
    onchange: EventHandler<String>,
) -> Element {
    rsx!(
        select {
            class: "select w-full",
            value: "{selected}",
            onchange: move |event| onchange.call(event.value()),
            for item in options {
                option {
                    key: "{item}",
                    value: "{item}",
                    selected: item == selected,
                    "{item}"
                }
            }
        }
    )
}
