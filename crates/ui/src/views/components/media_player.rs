use dioxus::prelude::*;
use study_core::model::MediaKind;

#[component]
pub fn MediaPlayer(url: String, kind: MediaKind) -> Element {
    match kind {
        MediaKind::Audio => rsx! {
            div { class: "media-player",
                audio { controls: true, src: "{url}", class: "media-audio" }
            }
        },
        MediaKind::Video => rsx! {
            div { class: "media-player",
                video { controls: true, src: "{url}", class: "media-video" }
            }
        },
        MediaKind::Image => rsx! {
            div { class: "media-image",
                img { src: "{url}", alt: "Document" }
            }
        },
        MediaKind::Pdf => rsx! {},
    }
}
