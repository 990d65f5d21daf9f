use dioxus::prelude::*;
use study_core::model::parse_transcript;

use crate::i18n::{Text, use_language};

#[component]
pub fn TranscriptView(text: String) -> Element {
    let lang = use_language()();
    let lines = parse_transcript(&text);

    if lines.is_empty() {
        return rsx! {
            p { class: "empty", "{Text::NoTranscript.get(lang)}" }
        };
    }

    rsx! {
        div { class: "transcript",
            for (idx, line) in lines.into_iter().enumerate() {
                div { key: "{idx}", class: "transcript-line",
                    if let Some(stamp) = line.timestamp {
                        span { class: "transcript-time", "{stamp}" }
                    }
                    p { class: "transcript-text", "{line.text}" }
                }
            }
        }
    }
}
