use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use study_core::model::CourseId;

use crate::context::AppContext;
use crate::i18n::{Text, use_language};
use crate::routes::Route;
use crate::views::components::FileUpload;
use crate::views::{LoginRedirect, ViewError, ViewState, view_state_from_resource};
use crate::vm::{DocumentCardVm, map_document_cards};

#[derive(Clone, Debug, PartialEq, Eq)]
struct DashboardData {
    title: String,
    documents: Vec<DocumentCardVm>,
}

#[component]
pub fn CourseDashboardView(course_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let lang = use_language()();
    let courses = ctx.courses();

    let mut resource = use_resource(move || {
        let courses = courses.clone();
        async move {
            let dashboard = courses
                .load_dashboard(CourseId::new(course_id))
                .await
                .map_err(|err| ViewError::from_kind(err.kind()))?;
            Ok::<_, ViewError>(DashboardData {
                title: dashboard.course.title,
                documents: map_document_cards(&dashboard.documents),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard-page",
            Link { class: "back-link", to: Route::Courses {}, "{Text::BackToCourses.get(lang)}" }
            match state {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { "{Text::Loading.get(lang)}" }
                },
                ViewState::Error(err) if err.requires_login() => rsx! {
                    LoginRedirect {}
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.text().get(lang)}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| resource.restart(),
                        "{Text::Retry.get(lang)}"
                    }
                },
                ViewState::Ready(data) => rsx! {
                    header { class: "view-header",
                        h2 { class: "view-title", "{data.title}" }
                        p { class: "view-subtitle", "{Text::UploadSubtitle.get(lang)}" }
                    }
                    section { class: "panel",
                        h3 { "{Text::UploadTitle.get(lang)}" }
                        FileUpload {
                            course_id: Some(course_id),
                            on_uploaded: move |_| resource.restart(),
                        }
                    }
                    section { class: "panel",
                        h3 { "{Text::MyDocuments.get(lang)}" }
                        DocumentList { documents: data.documents.clone() }
                    }
                },
            }
        }
    }
}

#[component]
fn DocumentList(documents: Vec<DocumentCardVm>) -> Element {
    let lang = use_language()();
    let navigator = use_navigator();

    if documents.is_empty() {
        return rsx! {
            p { class: "empty", "{Text::NoDocuments.get(lang)}" }
        };
    }

    rsx! {
        ul { class: "document-list",
            for doc in documents {
                li { key: "{doc.id}", class: "document-row",
                    button {
                        class: "document-open",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Document { document_id: doc.id });
                        },
                        span { class: "document-kind", "{doc.kind_label}" }
                        span { class: "document-name", "{doc.filename}" }
                        span { class: "document-date", "{doc.uploaded_label}" }
                        if doc.analysed {
                            span { class: "document-badge", "✓" }
                        }
                    }
                }
            }
        }
    }
}
