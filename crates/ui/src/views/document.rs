use dioxus::prelude::*;
use dioxus_router::Link;

use study_core::model::{Concept, Document, DocumentId};
use study_core::study::{ContentTab, StudyWorkspace, ToolKind};

use crate::context::AppContext;
use crate::i18n::{Text, use_language};
use crate::routes::Route;
use crate::views::components::{FlashcardPlayer, MediaPlayer, QuizPlayer, TranscriptView};
use crate::views::{LoginRedirect, ViewError, ViewState, view_state_from_resource};
use crate::vm::{map_tabs, summary_html};

#[component]
pub fn DocumentView(document_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let lang = use_language()();
    let documents = ctx.documents();

    let mut resource = use_resource(move || {
        let documents = documents.clone();
        async move {
            documents
                .get_document(DocumentId::new(document_id))
                .await
                .map_err(|err| ViewError::from_kind(err.kind()))
        }
    });

    let state = view_state_from_resource(&resource);
    let back = match &state {
        ViewState::Ready(Document {
            course_id: Some(course_id),
            ..
        }) => Route::CourseDashboard {
            course_id: course_id.value(),
        },
        _ => Route::Courses {},
    };

    rsx! {
        div { class: "page document-page",
            Link { class: "back-link", to: back, "{Text::BackToDocuments.get(lang)}" }
            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { "{Text::Loading.get(lang)}" }
                },
                ViewState::Error(err) if err.requires_login() => rsx! {
                    LoginRedirect {}
                },
                ViewState::Error(err) => rsx! {
                    p { class: "form-error", "{err.text().get(lang)}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "{Text::Retry.get(lang)}"
                    }
                },
                ViewState::Ready(document) => rsx! {
                    WorkspacePanel { key: "{document.id}", document }
                },
            }
        }
    }
}

/// One study session over a loaded document. Leaving the page tears the
/// workspace down so in-flight tools and paced transitions are dropped.
#[component]
fn WorkspacePanel(document: Document) -> Element {
    let ctx = use_context::<AppContext>();
    let lang = use_language()();
    let mut workspace = use_signal(|| StudyWorkspace::new(document.clone()));
    let mut error = use_signal(|| None::<ViewError>);

    use_drop(move || {
        if let Ok(mut ws) = workspace.try_write() {
            ws.teardown();
        }
    });

    let service = ctx.workspace();
    let open_tool = {
        let service = service.clone();
        move |kind: ToolKind| {
            let request = match service.begin_tool(&mut workspace.write(), kind) {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(ViewError::from_kind(err.kind())));
                    return;
                }
            };
            error.set(None);
            let service = service.clone();
            spawn(async move {
                let outcome = service.generate(request).await;
                if let Err(err) = service.finish_tool(&mut workspace.write(), request, outcome) {
                    error.set(Some(ViewError::from_kind(err.kind())));
                }
            });
        }
    };
    let open_quiz = {
        let mut open_tool = open_tool.clone();
        move |_: Event<MouseData>| open_tool(ToolKind::Quiz)
    };
    let open_cards = {
        let mut open_tool = open_tool;
        move |_: Event<MouseData>| open_tool(ToolKind::Flashcards)
    };

    let analyze = move |_: Event<MouseData>| {
        let document_id = match service.begin_analysis(&mut workspace.write()) {
            Ok(id) => id,
            Err(err) => {
                error.set(Some(ViewError::from_kind(err.kind())));
                return;
            }
        };
        error.set(None);
        let service = service.clone();
        spawn(async move {
            let outcome = service.fetch_analysis(document_id).await;
            if let Err(err) = service.finish_analysis(&mut workspace.write(), document_id, outcome) {
                error.set(Some(ViewError::from_kind(err.kind())));
            }
        });
    };

    let close_tool = move |()| {
        let _ = workspace.write().close_tool();
    };

    let ws = workspace.read();
    let doc = ws.document();
    let tabs = map_tabs(&ws);
    let active_tab = ws.active_tab();
    let busy = ws.is_busy();
    let analyzing = ws.is_analyzing();
    let pending = ws.pending_tool();
    let active_tool = ws.active_tool_kind();
    let needs_analysis = ws.needs_analysis();
    let media_url = ctx.media_url(doc);
    let media_kind = doc.media_type;
    let filename = doc.filename.clone();
    let summary = doc.summary.as_deref().map(summary_html);
    let concepts = doc.key_concepts.clone().unwrap_or_default();
    let text = doc.text().to_string();
    drop(ws);

    let current_error = error();

    rsx! {
        header { class: "view-header document-header",
            h2 { class: "view-title", "{filename}" }
            if needs_analysis {
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: analyze.clone(),
                    if analyzing {
                        "{Text::Loading.get(lang)}"
                    } else {
                        "{Text::AnalyzeDocument.get(lang)}"
                    }
                }
            }
        }
        if let Some(url) = media_url {
            MediaPlayer { url, kind: media_kind }
        }
        if let Some(err) = current_error {
            if err.requires_login() {
                LoginRedirect {}
            }
            p { class: "form-error", "{err.text().get(lang)}" }
        }
        match active_tool {
            Some(ToolKind::Quiz) => rsx! {
                QuizPlayer { workspace, on_close: close_tool }
            },
            Some(ToolKind::Flashcards) => rsx! {
                FlashcardPlayer { workspace, on_close: close_tool }
            },
            None => rsx! {
                nav { class: "tabs",
                    for tab in tabs {
                        button {
                            key: "{tab.tab}",
                            class: "{tab.class()}",
                            r#type: "button",
                            onclick: move |_| {
                                workspace.write().select_tab(tab.tab);
                            },
                            "{tab.label.get(lang)}"
                        }
                    }
                }
                section { class: "panel tab-panel",
                    match active_tab {
                        ContentTab::Summary => rsx! {
                            SummaryPanel { summary, busy, onanalyze: analyze }
                        },
                        ContentTab::Concepts => rsx! {
                            ConceptList { concepts }
                        },
                        ContentTab::Text => rsx! {
                            pre { class: "document-text", "{text}" }
                        },
                        ContentTab::Transcript => rsx! {
                            TranscriptView { text }
                        },
                        ContentTab::Tools => rsx! {
                            div { class: "tool-grid",
                                ToolCard {
                                    title: Text::GenerateQuiz,
                                    blurb: Text::QuizBlurb,
                                    loading: pending == Some(ToolKind::Quiz),
                                    disabled: busy,
                                    onopen: open_quiz,
                                }
                                ToolCard {
                                    title: Text::GenerateCards,
                                    blurb: Text::CardsBlurb,
                                    loading: pending == Some(ToolKind::Flashcards),
                                    disabled: busy,
                                    onopen: open_cards,
                                }
                            }
                        },
                    }
                }
            },
        }
    }
}

#[component]
fn SummaryPanel(
    summary: Option<String>,
    busy: bool,
    onanalyze: EventHandler<Event<MouseData>>,
) -> Element {
    let lang = use_language()();

    match summary {
        Some(html) => rsx! {
            div { class: "summary markdown", dangerous_inner_html: "{html}" }
        },
        None => rsx! {
            div { class: "empty",
                p { "{Text::NoSummaryYet.get(lang)}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: busy,
                    onclick: move |evt| onanalyze.call(evt),
                    "{Text::AnalyzeNow.get(lang)}"
                }
            }
        },
    }
}

#[component]
fn ConceptList(concepts: Vec<Concept>) -> Element {
    let lang = use_language()();

    if concepts.is_empty() {
        return rsx! {
            p { class: "empty", "{Text::NoConceptsYet.get(lang)}" }
        };
    }

    rsx! {
        dl { class: "concepts",
            for concept in concepts {
                div { key: "{concept.term}", class: "concept",
                    dt { "{concept.term}" }
                    dd { "{concept.definition}" }
                }
            }
        }
    }
}

#[component]
fn ToolCard(
    title: Text,
    blurb: Text,
    loading: bool,
    disabled: bool,
    onopen: EventHandler<Event<MouseData>>,
) -> Element {
    let lang = use_language()();

    rsx! {
        div { class: "tool-card",
            h3 { "{title.get(lang)}" }
            p { class: "muted", "{blurb.get(lang)}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled,
                onclick: move |evt| onopen.call(evt),
                if loading {
                    "{Text::Loading.get(lang)}"
                } else {
                    "{title.get(lang)}"
                }
            }
        }
    }
}
