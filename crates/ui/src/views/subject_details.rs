use dioxus::prelude::*;
use dioxus_router::Link;

use planner_core::model::{StudySession, Subject, SubjectId};
use planner_core::stats;
use services::{ApiError, SessionPatch, SubjectServiceError};

use crate::components::SessionForm;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SessionDraft, SessionFormState, SessionRowVm, format_hours_minutes};

#[derive(Clone, Debug, PartialEq)]
struct SubjectDetailsData {
    name: String,
    description: Option<String>,
    color: String,
    total_label: String,
    sessions: Vec<StudySession>,
}

impl SubjectDetailsData {
    fn from_subject(subject: &Subject) -> Self {
        Self {
            name: subject.name().to_string(),
            description: subject.description().map(str::to_owned),
            color: subject.color().to_string(),
            total_label: format_hours_minutes(stats::total_minutes(subject.sessions())),
            sessions: subject.sessions().to_vec(),
        }
    }
}

#[component]
pub fn SubjectDetailsView(subject_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let subjects_svc = ctx.subjects();
    let clock = ctx.clock();
    let mut form = use_signal(move || SessionFormState::new(clock.today()));

    let mut resource = use_resource(move || {
        let svc = subjects_svc.clone();
        async move {
            match svc.get_subject(SubjectId::new(subject_id)).await {
                Ok(subject) => Ok(SubjectDetailsData::from_subject(&subject)),
                Err(SubjectServiceError::Api(ApiError::NotFound)) => Err(ViewError::NotFound),
                Err(_) => Err(ViewError::Unknown),
            }
        }
    });

    let on_submit = {
        let svc = ctx.sessions();
        move |draft: SessionDraft| {
            let svc = svc.clone();
            spawn(async move {
                let result = match draft.editing {
                    Some(id) => svc
                        .update_session(
                            id,
                            SessionPatch {
                                date: Some(draft.date),
                                duration: Some(draft.duration_minutes),
                                notes: draft.notes.clone(),
                                subject_id: Some(subject_id),
                            },
                        )
                        .await
                        .map(|_| ()),
                    None => svc
                        .create_session(
                            draft.date,
                            draft.duration_minutes,
                            draft.notes.clone(),
                            SubjectId::new(subject_id),
                        )
                        .await
                        .map(|_| ()),
                };
                if result.is_ok() {
                    form.with_mut(|f| f.reset(clock.today()));
                    resource.restart();
                }
            });
        }
    };

    let state = view_state_from_resource(&resource);
    let editing = form().editing().is_some();

    rsx! {
        div { class: "page subject-details",
            Link { class: "back-link", to: Route::Subjects {}, "Back" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => {
                    let sorted = stats::sorted_by_date_desc(&data.sessions);
                    rsx! {
                        h2 { style: "color: {data.color}", "{data.name}" }
                        if let Some(description) = data.description.clone() {
                            p { "{description}" }
                        }
                        p { class: "total-studied",
                            "Total studied: "
                            strong { "{data.total_label}" }
                        }

                        h3 { if editing { "Edit Session" } else { "Add Session" } }
                        SessionForm { form, on_submit }

                        h3 { "Sessions" }
                        if sorted.is_empty() {
                            p { class: "empty-message", "No sessions yet! Add your first one above." }
                        } else {
                            ul { class: "session-list",
                                for session in sorted {
                                    {
                                        let row = SessionRowVm::from_session(&session);
                                        let id = row.id;
                                        let delete_svc = ctx.sessions();
                                        rsx! {
                                            li { key: "{id}",
                                                span { class: "session-date", "{row.date_label}" }
                                                span { class: "session-duration", "{row.duration_label}" }
                                                if let Some(notes) = row.notes.clone() {
                                                    span { class: "session-notes", "{notes}" }
                                                }
                                                button {
                                                    onclick: move |_| form.with_mut(|f| f.begin_edit(&session)),
                                                    "Edit"
                                                }
                                                button {
                                                    onclick: move |_| {
                                                        let svc = delete_svc.clone();
                                                        spawn(async move {
                                                            if svc.delete_session(id).await.is_ok() {
                                                                resource.restart();
                                                            }
                                                        });
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
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
