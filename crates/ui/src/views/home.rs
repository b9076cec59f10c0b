use dioxus::prelude::*;
use dioxus_router::Link;

use planner_core::model::{StudySession, Subject};
use planner_core::stats;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    SessionRowVm, SubjectCardVm, format_hours_minutes, map_session_rows, map_subject_cards,
};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    total_label: String,
    subject_count: usize,
    session_count: usize,
    cards: Vec<SubjectCardVm>,
    recent: Vec<SessionRowVm>,
}

fn derive_home_data(subjects: &[Subject], sessions: &[StudySession]) -> HomeData {
    HomeData {
        total_label: format_hours_minutes(stats::total_minutes(sessions)),
        subject_count: subjects.len(),
        session_count: sessions.len(),
        cards: map_subject_cards(subjects, sessions),
        recent: map_session_rows(&stats::recent_sessions(sessions, 5)),
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let subjects_svc = ctx.subjects();
    let sessions_svc = ctx.sessions();

    let mut resource = use_resource(move || {
        let subjects_svc = subjects_svc.clone();
        let sessions_svc = sessions_svc.clone();
        async move {
            let subjects = subjects_svc
                .list_subjects()
                .await
                .map_err(|_| ViewError::Unknown)?;
            let sessions = sessions_svc
                .list_sessions()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(derive_home_data(&subjects, &sessions))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page home-page",
            h2 { "Study Session Planner" }
            p { class: "home-subtitle", "Track your progress and stay on top of your studies." }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    div { class: "stats-grid",
                        StatCard { number: data.total_label.clone(), label: "Total Studied" }
                        StatCard { number: data.subject_count.to_string(), label: "Subjects" }
                        StatCard { number: data.session_count.to_string(), label: "Sessions" }
                    }

                    h3 { "Subjects Overview" }
                    if data.cards.is_empty() {
                        p { class: "empty-message",
                            "No subjects yet! "
                            Link { to: Route::Subjects {}, "Create your first subject" }
                        }
                    } else {
                        div { class: "subject-cards",
                            for card in data.cards {
                                SubjectCard { card }
                            }
                        }
                    }

                    h3 { "Recent Sessions" }
                    if data.recent.is_empty() {
                        p { class: "empty-message", "No sessions recorded yet!" }
                    } else {
                        ul { class: "recent-sessions",
                            for row in data.recent {
                                li { key: "{row.id}",
                                    if let Some(name) = row.subject_name.clone() {
                                        span { class: "session-subject", "{name}" }
                                    }
                                    span { class: "session-date", "{row.date_label}" }
                                    span { class: "session-duration", "{row.duration_label}" }
                                    if let Some(notes) = row.notes.clone() {
                                        span { class: "session-notes", "{notes}" }
                                    }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button { onclick: move |_| resource.restart(), "Retry" }
                },
            }
        }
    }
}

#[component]
fn StatCard(number: String, label: &'static str) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-number", "{number}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[component]
fn SubjectCard(card: SubjectCardVm) -> Element {
    rsx! {
        Link {
            class: "subject-card",
            to: Route::SubjectDetails { subject_id: card.id.value() },
            div { class: "subject-card-color", style: "background: {card.color}" }
            h4 { "{card.name}" }
            p { "{card.session_count} sessions" }
            span { class: "subject-card-hours", "{card.total_label}" }
        }
    }
}
