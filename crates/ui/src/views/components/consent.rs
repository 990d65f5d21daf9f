use dioxus::prelude::*;

use crate::i18n::{Text, use_language};

/// Whether the user accepted the terms in this window.
#[derive(Clone, Copy)]
pub struct Consent(pub Signal<bool>);

#[component]
pub fn ConsentModal() -> Element {
    let Consent(mut accepted) = use_context::<Consent>();
    let lang = use_language()();

    if accepted() {
        return rsx! {};
    }

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                h3 { "{Text::ConsentTitle.get(lang)}" }
                p { "{Text::ConsentText.get(lang)}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| accepted.set(true),
                    "{Text::IAgree.get(lang)}"
                }
            }
        }
    }
}
