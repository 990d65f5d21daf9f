use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

use study_core::model::{ACCEPT_ATTRIBUTE, CourseId, UploadFile};

use crate::context::AppContext;
use crate::i18n::{Text, use_language};
use crate::views::{LoginRedirect, ViewError};
use crate::vm::UploadStatus;

/// Drop zone plus picker. Files are checked as soon as they are chosen and
/// again by the service before anything is sent.
#[component]
pub fn FileUpload(course_id: Option<u64>, on_uploaded: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();
    let lang = use_language()();
    let documents = ctx.documents();
    let mut status = use_signal(|| UploadStatus::Idle);
    let mut selected = use_signal(|| None::<UploadFile>);
    let mut dragging = use_signal(|| false);

    let accept = move |files: Vec<FileData>| {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        spawn(async move {
            let file_name = file.name();
            let content_type = file.content_type();
            let Ok(bytes) = file.read_bytes().await else {
                status.set(UploadStatus::Failed(ViewError::Unknown));
                return;
            };
            let upload = UploadFile::new(file_name.clone(), content_type, bytes.to_vec());
            match upload.clone().validate() {
                Ok(_) => {
                    selected.set(Some(upload));
                    status.set(UploadStatus::Ready { file_name });
                }
                Err(err) => {
                    selected.set(None);
                    status.set(UploadStatus::Rejected(err));
                }
            }
        });
    };

    let submit = move |_: Event<MouseData>| {
        let Some(upload) = selected() else {
            return;
        };
        // Busy before the task is queued so a second click cannot slip through.
        if !status.write().begin_upload() {
            return;
        }
        let documents = documents.clone();
        spawn(async move {
            match documents.upload(upload, course_id.map(CourseId::new)).await {
                Ok(_) => {
                    selected.set(None);
                    status.set(UploadStatus::Uploaded);
                    on_uploaded.call(());
                }
                Err(err) => {
                    status.set(UploadStatus::Failed(ViewError::from_kind(err.kind())));
                }
            }
        });
    };

    let current = status();
    let zone_class = if dragging() {
        "drop-zone drop-zone--active"
    } else {
        "drop-zone"
    };
    let session_lost = current == UploadStatus::Failed(ViewError::Unauthenticated);

    rsx! {
        div { class: "file-upload",
            if session_lost {
                LoginRedirect {}
            }
            div {
                class: "{zone_class}",
                ondragover: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| dragging.set(false),
                ondrop: move |evt| {
                    evt.prevent_default();
                    dragging.set(false);
                    accept(evt.files());
                },
                p { "{Text::DragDrop.get(lang)}" }
                p { class: "muted", "{Text::Or.get(lang)}" }
                label { class: "btn btn-secondary",
                    "{Text::BrowseFiles.get(lang)}"
                    input {
                        class: "visually-hidden",
                        r#type: "file",
                        accept: ACCEPT_ATTRIBUTE,
                        disabled: current.is_busy(),
                        onchange: move |evt| accept(evt.files()),
                    }
                }
            }
            if let Some(name) = current.file_name() {
                p { class: "file-name", "{name}" }
            }
            if let Some((text, is_error)) = current.message() {
                p { class: if is_error { "form-error" } else { "form-status" }, "{text.get(lang)}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !current.can_submit(),
                onclick: submit,
                "{Text::UploadButton.get(lang)}"
            }
        }
    }
}
