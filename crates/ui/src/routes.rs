use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};

use crate::context::AppContext;
use crate::i18n::{Text, use_language};
use crate::views::components::ConsentModal;
use crate::views::{CourseDashboardView, CoursesView, DocumentView, LoginView, RegisterView};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", CoursesView)] Courses {},
        #[route("/login", LoginView)] Login {},
        #[route("/register", RegisterView)] Register {},
        #[route("/course/:course_id", CourseDashboardView)] CourseDashboard { course_id: u64 },
        #[route("/documents/:document_id", DocumentView)] Document { document_id: u64 },
}

#[component]
fn Layout() -> Element {
    let language = use_language();
    let lang = language();
    let dir = if lang.is_rtl() { "rtl" } else { "ltr" };

    rsx! {
        div { class: "layout", dir: "{dir}", lang: "{lang.code()}",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            Footer {}
            ConsentModal {}
        }
    }
}

#[component]
fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut language = use_language();
    // Subscribing to the route re-renders the bar after login and logout.
    let _route = use_route::<Route>();
    let lang = language();
    let signed_in = ctx.is_authenticated();
    let auth = ctx.auth();

    rsx! {
        nav { class: "navbar",
            Link { class: "navbar-brand", to: Route::Courses {}, "{Text::AppName.get(lang)}" }
            div { class: "navbar-actions",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| {
                        let next = language().toggle();
                        language.set(next);
                    },
                    "{Text::ToggleLanguage.get(lang)}"
                }
                if signed_in {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = auth.logout();
                            let _ = navigator.push(Route::Login {});
                        },
                        "{Text::Logout.get(lang)}"
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let lang = use_language()();
    rsx! {
        footer { class: "footer",
            p { "{Text::Copyright.get(lang)}" }
            div { class: "footer-links",
                span { "{Text::Privacy.get(lang)}" }
                span { "{Text::Terms.get(lang)}" }
            }
        }
    }
}
