use dioxus::prelude::*;

use crate::intro::word_id;
use crate::view::WordsView;

/// A title slot that shows one word at a time, sized to the active word.
#[component]
pub fn RotatingWords(
    words: Vec<String>,
    state: WordsView,
    id_prefix: &'static str,
    wrapper_class: &'static str,
    word_class: &'static str,
) -> Element {
    rsx! {
        span { class: "{wrapper_class}", style: state.style(),
            for (index, word) in words.iter().enumerate() {
                span {
                    key: "{index}",
                    id: word_id(id_prefix, index),
                    class: format!("{word_class} {}", state.class(index)),
                    "{word}"
                }
            }
        }
    }
}
