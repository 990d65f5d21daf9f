use dioxus::prelude::*;

use study_core::study::{QuizSession, StudyWorkspace, ToolView};

use crate::i18n::{Text, use_language};
use crate::vm::QuizVm;

fn with_quiz<R>(
    mut workspace: Signal<StudyWorkspace>,
    f: impl FnOnce(&mut QuizSession) -> R,
) -> Option<R> {
    let mut guard = workspace.write();
    match guard.active_tool_mut() {
        Some(ToolView::Quiz { session, .. }) => Some(f(session)),
        _ => None,
    }
}

/// Full-screen quiz over the workspace's mounted session.
#[component]
pub fn QuizPlayer(workspace: Signal<StudyWorkspace>, on_close: EventHandler<()>) -> Element {
    let lang = use_language()();

    let vm = match workspace.read().active_tool() {
        Some(ToolView::Quiz { title, session }) => QuizVm::from_session(title, session),
        _ => return rsx! {},
    };

    let submit = move |_: Event<MouseData>| {
        let Some(Ok(submission)) = with_quiz(workspace, QuizSession::submit) else {
            return;
        };
        let ticket = submission.advance;
        // Dropped with this component, so a closed quiz never advances.
        spawn(async move {
            tokio::time::sleep(ticket.delay()).await;
            with_quiz(workspace, |session| session.apply_scheduled(ticket));
        });
    };

    match vm {
        QuizVm::Completed { title, score_label } => rsx! {
            div { class: "quiz quiz--done",
                h2 { class: "quiz-title", "{title}" }
                h3 { "{Text::QuizCompleted.get(lang)}" }
                p { class: "quiz-score", "{score_label}" }
                p { class: "muted", "{Text::Score.get(lang)}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "{Text::BackToDocuments.get(lang)}"
                }
            }
        },
        QuizVm::Question {
            title,
            progress_label,
            prompt,
            options,
            locked,
            can_submit,
        } => rsx! {
            div { class: "quiz",
                div { class: "quiz-header",
                    h2 { class: "quiz-title", "{title}" }
                    span { class: "quiz-progress", "{progress_label}" }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "{Text::Close.get(lang)}"
                    }
                }
                h3 { class: "quiz-question", "{prompt}" }
                div { class: "quiz-options",
                    for option in options {
                        button {
                            key: "{option.index}",
                            class: "{option.state.class()}",
                            r#type: "button",
                            disabled: locked,
                            onclick: move |_| {
                                with_quiz(workspace, |session| session.select_option(option.index));
                            },
                            "{option.label}"
                        }
                    }
                }
                div { class: "quiz-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: !can_submit,
                        onclick: submit,
                        "{Text::Submit.get(lang)}"
                    }
                }
            }
        },
    }
}
