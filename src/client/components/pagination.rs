use dioxus::prelude::*;

use crate::client::i18n::faircv::{PAGE_BACK, PAGE_FORWARD};

/// Page numbers to render, `1..=count`.
pub fn page_numbers(count: usize) -> Vec<usize> {
    (1..=count).collect()
}

pub fn previous_page(current: usize) -> usize {
    current.saturating_sub(1).max(1)
}

pub fn next_page(current: usize, count: usize) -> usize {
    (current + 1).min(count.max(1))
}

#[component]
pub fn Pagination(count: usize, current: usize, on_page: EventHandler<usize>) -> Element {
    if count == 0 {
        return rsx!();
    }

    rsx!(
        div { class: "join",
            button {
                class: "join-item btn",
                disabled: current <= 1,
                onclick: move |_| on_page.call(previous_page(current)),
                "{PAGE_BACK}"
            }
            for page in page_numbers(count) {
                button {
                    key: "{page}",
                    class: if page == current { "join-item btn btn-active" } else { "join-item btn" },
                    onclick: move |_| on_page.call(page),
                    "{page}"
                }
            }
            button {
                class: "join-item btn",
                disabled: current >= count,
                onclick: move |_| on_page.call(next_page(current, count)),
                "{PAGE_FORWARD}"
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_numbers_start_at_one() {
        assert_eq!(page_numbers(4), vec![1, 2, 3, 4]);
        assert!(page_numbers(0).is_empty());
    }

    #[test]
    fn test_single_page_is_listed() {
        assert_eq!(page_numbers(1), vec![1]);
        assert_eq!(previous_page(1), 1);
        assert_eq!(next_page(1, 1), 1);
    }

    #[test]
    fn test_previous_page_stops_at_first() {
        assert_eq!(previous_page(3), 2);
        assert_eq!(previous_page(1), 1);
        assert_eq!(previous_page(0), 1);
    }

    #[test]
    fn test_next_page_stops_at_last() {
        assert_eq!(next_page(2, 4), 3);
        assert_eq!(next_page(4, 4), 4);
        // No pages yet still lands on page 1
        assert_eq!(next_page(1, 0), 1);
    }
}
