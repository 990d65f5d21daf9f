use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use services::{AuthServiceError, FailureKind};
use study_core::model::{AccountError, Language, RegistrationDraft};

use crate::context::AppContext;
use crate::i18n::{Text, use_language};
use crate::routes::Route;

/// Leaves the current view for the login screen once mounted.
#[component]
pub fn LoginRedirect() -> Element {
    let navigator = use_navigator();
    use_effect(move || {
        let _ = navigator.push(Route::Login {});
    });
    rsx! {}
}

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let language = use_language();
    let lang = language();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let auth = ctx.auth();

    let submit = move |_: Event<MouseData>| {
        if busy() {
            return;
        }
        let auth = auth.clone();
        let email_value = email();
        let password_value = password();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match auth.login(&email_value, &password_value).await {
                Ok(()) => {
                    let _ = navigator.push(Route::Courses {});
                }
                Err(err) => {
                    error.set(Some(form_error(&err, Text::LoginFailed, language())));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page auth-page",
            div { class: "auth-card",
                h2 { class: "view-title", "{Text::WelcomeBack.get(lang)}" }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                label { class: "field",
                    span { "{Text::Email.get(lang)}" }
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "{Text::Password.get(lang)}" }
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "button",
                    disabled: busy(),
                    onclick: submit,
                    "{Text::Login.get(lang)}"
                }
                p { class: "auth-switch",
                    "{Text::NoAccount.get(lang)} "
                    Link { to: Route::Register {}, "{Text::RegisterNow.get(lang)}" }
                }
            }
        }
    }
}

#[component]
pub fn RegisterView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let language = use_language();
    let lang = language();
    let mut draft = use_signal(RegistrationDraft::default);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let auth = ctx.auth();

    let submit = move |_: Event<MouseData>| {
        if busy() {
            return;
        }
        let auth = auth.clone();
        let draft_value = draft();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match auth.register(&draft_value, language()).await {
                Ok(_) => {
                    let _ = navigator.push(Route::Login {});
                }
                Err(err) => {
                    error.set(Some(form_error(
                        &err,
                        Text::RegistrationFailed,
                        language(),
                    )));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page auth-page",
            div { class: "auth-card",
                h2 { class: "view-title", "{Text::CreateAccount.get(lang)}" }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                label { class: "field",
                    span { "{Text::FullName.get(lang)}" }
                    input {
                        r#type: "text",
                        value: "{draft.read().full_name}",
                        oninput: move |evt| draft.write().full_name = evt.value(),
                    }
                }
                label { class: "field",
                    span { "{Text::Email.get(lang)}" }
                    input {
                        r#type: "email",
                        value: "{draft.read().email}",
                        oninput: move |evt| draft.write().email = evt.value(),
                    }
                }
                label { class: "field",
                    span { "{Text::Password.get(lang)}" }
                    input {
                        r#type: "password",
                        value: "{draft.read().password}",
                        oninput: move |evt| draft.write().password = evt.value(),
                    }
                }
                label { class: "field",
                    span { "{Text::ConfirmPassword.get(lang)}" }
                    input {
                        r#type: "password",
                        value: "{draft.read().confirm_password}",
                        oninput: move |evt| draft.write().confirm_password = evt.value(),
                    }
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "button",
                    disabled: busy(),
                    onclick: submit,
                    "{Text::Register.get(lang)}"
                }
                p { class: "auth-switch",
                    "{Text::HasAccount.get(lang)} "
                    Link { to: Route::Login {}, "{Text::LoginNow.get(lang)}" }
                }
            }
        }
    }
}

/// Message for a failed auth form: local validation first, then the
/// backend's own detail, then a generic fallback.
fn form_error(err: &AuthServiceError, fallback: Text, language: Language) -> String {
    let text = match err {
        AuthServiceError::Account(AccountError::PasswordMismatch) => Text::PasswordMismatch,
        AuthServiceError::Account(_) => Text::MissingFields,
        AuthServiceError::Api(api) => {
            if let Some(detail) = api.detail() {
                return detail.to_string();
            }
            match api.kind() {
                FailureKind::Network => Text::ErrorNetwork,
                _ => fallback,
            }
        }
        _ => fallback,
    };
    text.get(language).to_string()
}
