use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, SessionsView, SubjectDetailsView, SubjectsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/subjects", SubjectsView)] Subjects {},
        #[route("/subjects/:subject_id", SubjectDetailsView)] SubjectDetails { subject_id: u64 },
        #[route("/sessions", SessionsView)] Sessions {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { class: "brand", to: Route::Home {}, "StudyPlanner" }
            Link { to: Route::Subjects {}, "Subjects" }
            Link { to: Route::Sessions {}, "Sessions" }
        }
    }
}
