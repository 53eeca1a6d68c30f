use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowLeft, FaArrowRight};
use dioxus_free_icons::Icon;

use crate::client::components::Spinner;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonWidth {
    #[default]
    Auto,
    Full,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonHeight {
    Small,
    #[default]
    Big,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonStyle {
    #[default]
    Filled,
    /// Outlined
    Empty,
    /// Borderless text link
    Simple,
    ArrowForward,
    ArrowBack,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonColor {
    #[default]
    Main,
    Red,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonType {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

/// daisyUI classes for a button variant.
pub fn button_class(
    width: ButtonWidth,
    height: ButtonHeight,
    style: ButtonStyle,
    color: ButtonColor,
) -> String {
    let color = match color {
        ButtonColor::Main => "btn-primary",
        ButtonColor::Red => "btn-error",
    };

    let mut classes = vec!["btn"];
    match style {
        ButtonStyle::Filled => classes.push(color),
        ButtonStyle::Empty => classes.extend(["btn-outline", color]),
        ButtonStyle::Simple => classes.extend(["btn-link", color]),
        ButtonStyle::ArrowForward | ButtonStyle::ArrowBack => {
            classes.extend(["btn-ghost", "gap-2", color])
        }
    }

    match height {
        ButtonHeight::Small => classes.push("btn-sm"),
        ButtonHeight::Big => classes.push("btn-md"),
    }

    if width == ButtonWidth::Full {
        classes.push("w-full");
    }

    classes.join(" ")
}

#[component]
pub fn Button(
    #[props(into)] text: String,
    #[props(default)] width: ButtonWidth,
    #[props(default)] height: ButtonHeight,
    #[props(default)] variant: ButtonStyle,
    #[props(default)] color: ButtonColor,
    #[props(default)] kind: ButtonType,
    /// Shows a spinner and ignores clicks
    #[props(default)]
    loading: bool,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let class = button_class(width, height, variant, color);

    rsx!(
        button {
            class: "{class}",
            r#type: kind.as_str(),
            disabled: loading,
            "data-loading": "{loading}",
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            if loading {
                Spinner {}
            }
            if variant == ButtonStyle::ArrowBack {
                Icon { width: 16, height: 16, icon: FaArrowLeft }
            }
            "{text}"
            if variant == ButtonStyle::ArrowForward {
                Icon { width: 16, height: 16, icon: FaArrowRight }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    mod button_class {
        use super::*;

        /// Expected: primary fill at default size
        #[test]
        fn default_variant() {
            let class = button_class(
                ButtonWidth::default(),
                ButtonHeight::default(),
                ButtonStyle::default(),
                ButtonColor::default(),
            );

            assert_eq!(class, "btn btn-primary btn-md");
        }

        /// Verifies outlined red buttons carry both the outline and color classes.
        #[test]
        fn outlined_red_full_width() {
            let class = button_class(
                ButtonWidth::Full,
                ButtonHeight::Small,
                ButtonStyle::Empty,
                ButtonColor::Red,
            );

            assert_eq!(class, "btn btn-outline btn-error btn-sm w-full");
        }

        /// Verifies arrow buttons are ghost buttons spaced for their icon.
        #[test]
        fn arrow_variants_are_ghost() {
            for style in [ButtonStyle::ArrowBack, ButtonStyle::ArrowForward] {
                let class = button_class(
                    ButtonWidth::Auto,
                    ButtonHeight::Big,
                    style,
                    ButtonColor::Main,
                );

                assert_eq!(class, "btn btn-ghost gap-2 btn-primary btn-md");
            }
        }
    }
}
