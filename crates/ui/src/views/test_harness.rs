use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use planner_core::Clock;
use planner_core::time::fixed_clock;
use services::{InMemoryPlannerApi, PlannerApi, SessionService, SubjectService};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, SessionsView, SubjectDetailsView, SubjectsView};

#[derive(Clone)]
struct TestApp {
    subjects: Arc<SubjectService>,
    sessions: Arc<SessionService>,
    clock: Clock,
}

impl UiApp for TestApp {
    fn subjects(&self) -> Arc<SubjectService> {
        Arc::clone(&self.subjects)
    }

    fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Subjects,
    SubjectDetails(u64),
    Sessions,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Subjects => rsx! { SubjectsView {} },
        ViewKind::SubjectDetails(subject_id) => rsx! { SubjectDetailsView { subject_id } },
        ViewKind::Sessions => rsx! { SessionsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub subjects: Arc<SubjectService>,
    pub sessions: Arc<SessionService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let mounted resources resolve and their re-renders land.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let api = Arc::new(InMemoryPlannerApi::new(fixed_clock()));
    setup_view_harness_with_api(view, api)
}

pub fn setup_view_harness_with_api(view: ViewKind, api: Arc<dyn PlannerApi>) -> ViewHarness {
    let subjects = Arc::new(SubjectService::new(Arc::clone(&api)));
    let sessions = Arc::new(SessionService::new(api));

    let app = Arc::new(TestApp {
        subjects: Arc::clone(&subjects),
        sessions: Arc::clone(&sessions),
        clock: fixed_clock(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        subjects,
        sessions,
    }
}
