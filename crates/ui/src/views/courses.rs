use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::i18n::{Text, use_language};
use crate::routes::Route;
use crate::views::{LoginRedirect, ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, map_course_cards};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CreateState {
    Idle,
    Saving,
    Error(ViewError),
}

impl CreateState {
    /// Enter `Saving` unless a create is already running.
    fn begin(&mut self) -> bool {
        if *self == Self::Saving {
            return false;
        }
        *self = Self::Saving;
        true
    }
}

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let lang = use_language()();
    let courses = ctx.courses();
    let mut title = use_signal(String::new);
    let mut create_state = use_signal(|| CreateState::Idle);

    let courses_for_resource = courses.clone();
    let mut resource = use_resource(move || {
        let courses = courses_for_resource.clone();
        async move {
            let list = courses
                .list_courses()
                .await
                .map_err(|err| ViewError::from_kind(err.kind()))?;
            Ok::<_, ViewError>(map_course_cards(&list))
        }
    });

    let create = move |_: Event<MouseData>| {
        if !create_state.write().begin() {
            return;
        }
        let courses = courses.clone();
        let value = title();
        spawn(async move {
            match courses.create_course(&value).await {
                Ok(_) => {
                    title.set(String::new());
                    create_state.set(CreateState::Idle);
                    resource.restart();
                }
                Err(err) => {
                    create_state.set(CreateState::Error(ViewError::from_kind(err.kind())));
                }
            }
        });
    };

    let state = view_state_from_resource(&resource);
    let saving = create_state() == CreateState::Saving;
    let create_error = match create_state() {
        CreateState::Error(ViewError::Validation) => Some(Text::CourseTitleRequired),
        CreateState::Error(err) => Some(err.text()),
        CreateState::Idle | CreateState::Saving => None,
    };
    let session_lost = matches!(create_state(), CreateState::Error(err) if err.requires_login());

    rsx! {
        div { class: "page courses-page",
            header { class: "view-header",
                h2 { class: "view-title", "{Text::CoursesTitle.get(lang)}" }
                p { class: "view-subtitle", "{Text::CoursesSubtitle.get(lang)}" }
            }
            if session_lost {
                LoginRedirect {}
            }
            section { class: "panel create-course",
                h3 { "{Text::CreateNewCourse.get(lang)}" }
                div { class: "inline-form",
                    input {
                        r#type: "text",
                        placeholder: "{Text::CourseNamePlaceholder.get(lang)}",
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: saving,
                        onclick: create,
                        "{Text::CreateCourse.get(lang)}"
                    }
                }
                if let Some(text) = create_error {
                    p { class: "form-error", "{text.get(lang)}" }
                }
            }
            div { class: "view-divider" }
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
                ViewState::Ready(cards) if cards.is_empty() => rsx! {
                    p { class: "empty", "{Text::NoCourses.get(lang)}" }
                },
                ViewState::Ready(cards) => rsx! {
                    div { class: "card-grid",
                        for card in cards {
                            CourseCard { key: "{card.id}", card: card.clone(), on_open: move |course_id| {
                                let _ = navigator.push(Route::CourseDashboard { course_id });
                            } }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm, on_open: EventHandler<u64>) -> Element {
    let lang = use_language()();
    let course_id = card.id;
    rsx! {
        div { class: "course-card",
            h4 { class: "course-card-title", "{card.title}" }
            p { class: "course-card-date", "{card.created_label}" }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_open.call(course_id),
                "{Text::ViewCourse.get(lang)}"
            }
        }
    }
}
