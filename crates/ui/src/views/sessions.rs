use dioxus::prelude::*;

use planner_core::model::{StudySession, Subject, SubjectId};
use planner_core::stats;

use crate::components::SessionForm;
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    SessionDraft, SessionFormState, format_hours_minutes, map_day_groups, map_subject_choices,
};

#[derive(Clone, Debug, PartialEq)]
struct SessionsData {
    subjects: Vec<Subject>,
    sessions: Vec<StudySession>,
}

#[component]
pub fn SessionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let subjects_svc = ctx.subjects();
    let sessions_svc = ctx.sessions();
    let clock = ctx.clock();

    let mut filter_subject = use_signal(|| None::<SubjectId>);
    let mut search = use_signal(String::new);
    let mut show_form = use_signal(|| false);
    let mut form = use_signal(move || SessionFormState::new(clock.today()));

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
            Ok(SessionsData { subjects, sessions })
        }
    });

    let on_submit = {
        let svc = ctx.sessions();
        move |draft: SessionDraft| {
            // The global form always carries an explicit subject choice.
            let Some(subject) = draft.subject else {
                return;
            };
            let svc = svc.clone();
            spawn(async move {
                let result = svc
                    .create_session(draft.date, draft.duration_minutes, draft.notes.clone(), subject)
                    .await;
                if result.is_ok() {
                    form.with_mut(|f| f.reset(clock.today()));
                    show_form.set(false);
                    resource.restart();
                }
            });
        }
    };

    let state = view_state_from_resource(&resource);
    let filter_value = filter_subject().map_or_else(|| "all".to_string(), |id| id.to_string());

    rsx! {
        div { class: "page sessions-page",
            h2 { "All Sessions" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => {
                    let sorted = stats::sorted_by_date_desc(&data.sessions);
                    let filtered = stats::filter_sessions(&sorted, filter_subject(), &search());
                    let total_label = format_hours_minutes(stats::total_minutes(&filtered));
                    let groups = map_day_groups(&stats::group_by_day(&filtered));
                    let choices = map_subject_choices(&data.subjects);

                    rsx! {
                        div { class: "sessions-stats",
                            span { "{filtered.len()} sessions" }
                            span { "•" }
                            span { "{total_label} total" }
                        }

                        div { class: "sessions-toolbar",
                            select {
                                class: "filter-select",
                                value: "{filter_value}",
                                onchange: move |evt| {
                                    filter_subject.set(evt.value().parse::<SubjectId>().ok());
                                },
                                option { value: "all", "All Subjects" }
                                for choice in choices.clone() {
                                    option { key: "{choice.id}", value: "{choice.id}", "{choice.name}" }
                                }
                            }

                            input {
                                class: "search-input",
                                r#type: "text",
                                placeholder: "Search notes...",
                                value: "{search()}",
                                oninput: move |evt| search.set(evt.value()),
                            }

                            button {
                                class: "add-session-btn",
                                onclick: move |_| show_form.toggle(),
                                if show_form() { "Close" } else { "Add Session" }
                            }
                        }

                        if show_form() {
                            SessionForm { form, subjects: choices.clone(), on_submit }
                        }

                        if groups.is_empty() {
                            p { class: "empty-message", "No sessions found." }
                        } else {
                            for group in groups {
                                div { key: "{group.heading}", class: "day-group",
                                    div { class: "day-header",
                                        h4 { "{group.heading}" }
                                        span { class: "day-total", "{group.total_label}" }
                                    }
                                    ul {
                                        for row in group.rows {
                                            {
                                                let id = row.id;
                                                let delete_svc = ctx.sessions();
                                                rsx! {
                                                    li { key: "{id}",
                                                        span {
                                                            class: "session-color-dot",
                                                            style: "background: {row.color}",
                                                        }
                                                        if let Some(name) = row.subject_name.clone() {
                                                            span { class: "session-subject", "{name}" }
                                                        }
                                                        span { class: "session-duration", "{row.duration_label}" }
                                                        if let Some(notes) = row.notes.clone() {
                                                            span { class: "session-notes", "{notes}" }
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
