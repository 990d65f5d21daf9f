use dioxus::prelude::*;

use study_core::study::{FlashcardViewer, Navigation, StudyWorkspace, ToolView};

use crate::i18n::{Text, use_language};
use crate::vm::FlashcardVm;

fn with_viewer<R>(
    mut workspace: Signal<StudyWorkspace>,
    f: impl FnOnce(&mut FlashcardViewer) -> R,
) -> Option<R> {
    let mut guard = workspace.write();
    match guard.active_tool_mut() {
        Some(ToolView::Flashcards { viewer, .. }) => Some(f(viewer)),
        _ => None,
    }
}

fn navigate(workspace: Signal<StudyWorkspace>, step: fn(&mut FlashcardViewer) -> Navigation) {
    if let Some(Navigation::Moved { settle, .. }) = with_viewer(workspace, step) {
        spawn(async move {
            tokio::time::sleep(settle.delay()).await;
            with_viewer(workspace, |viewer| viewer.settle(settle));
        });
    }
}

#[component]
pub fn FlashcardPlayer(workspace: Signal<StudyWorkspace>, on_close: EventHandler<()>) -> Element {
    let language = use_language();
    let lang = language();

    let vm = match workspace.read().active_tool() {
        Some(ToolView::Flashcards { title, viewer }) => FlashcardVm::from_viewer(title, viewer),
        _ => return rsx! {},
    };
    // Arrows point along the reading direction.
    let (prev_arrow, next_arrow) = if lang.is_rtl() { ("→", "←") } else { ("←", "→") };

    rsx! {
        div { class: "flashcards",
            div { class: "flashcards-header",
                h2 { "{vm.title}" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "{Text::Close.get(lang)}"
                }
            }
            div {
                class: "{vm.card_class()}",
                onclick: move |_| {
                    with_viewer(workspace, FlashcardViewer::flip);
                },
                if vm.flipped {
                    div { class: "flashcard-face flashcard-back",
                        span { class: "flashcard-hint", "{Text::FlipCard.get(lang)}" }
                        p { "{vm.definition}" }
                    }
                } else {
                    div { class: "flashcard-face flashcard-front",
                        span { class: "flashcard-hint",
                            "{Text::Question.get(lang)} / {Text::FlipCard.get(lang)}"
                        }
                        h3 { "{vm.term}" }
                    }
                }
            }
            div { class: "flashcards-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !vm.can_prev,
                    onclick: move |_| navigate(workspace, |viewer| viewer.prev().unwrap_or(Navigation::Ignored)),
                    "{prev_arrow} {Text::Previous.get(lang)}"
                }
                span { class: "flashcards-progress", "{vm.progress_label}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: !vm.can_next,
                    onclick: move |_| navigate(workspace, |viewer| viewer.next().unwrap_or(Navigation::Ignored)),
                    "{Text::Next.get(lang)} {next_arrow}"
                }
            }
        }
    }
}
