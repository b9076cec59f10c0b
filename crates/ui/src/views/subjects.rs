use dioxus::prelude::*;
use dioxus_router::Link;

use planner_core::model::Subject;
use services::SubjectPatch;

use crate::components::ColorPicker;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SubjectFormState, map_subject_rows};

#[derive(Clone, Debug, PartialEq)]
struct SubjectsData {
    subjects: Vec<Subject>,
}

#[component]
pub fn SubjectsView() -> Element {
    let ctx = use_context::<AppContext>();
    let subjects_svc = ctx.subjects();
    let mut form = use_signal(SubjectFormState::default);

    let mut resource = use_resource(move || {
        let svc = subjects_svc.clone();
        async move {
            let subjects = svc.list_subjects().await.map_err(|_| ViewError::Unknown)?;
            Ok(SubjectsData { subjects })
        }
    });

    let on_submit = {
        let svc = ctx.subjects();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(draft) = form().draft() else {
                return;
            };
            let svc = svc.clone();
            spawn(async move {
                let result = match draft.editing {
                    Some(id) => svc
                        .update_subject(
                            id,
                            SubjectPatch {
                                name: Some(draft.name),
                                description: draft.description,
                                color: Some(draft.color),
                            },
                        )
                        .await
                        .map(|_| ()),
                    None => svc
                        .create_subject(draft.name, draft.description, Some(draft.color))
                        .await
                        .map(|_| ()),
                };
                if result.is_ok() {
                    form.set(SubjectFormState::default());
                    resource.restart();
                }
            });
        }
    };

    let state = view_state_from_resource(&resource);
    let form_state = form();

    rsx! {
        div { class: "page subjects-page",
            h2 { "Subjects" }

            form { class: "subject-form", onsubmit: on_submit,
                input {
                    placeholder: "Subject name",
                    required: true,
                    value: "{form_state.name()}",
                    oninput: move |evt| form.with_mut(|f| f.set_name(evt.value())),
                }
                input {
                    placeholder: "Description",
                    value: "{form_state.description()}",
                    oninput: move |evt| form.with_mut(|f| f.set_description(evt.value())),
                }
                ColorPicker {
                    value: form_state.color().to_string(),
                    on_pick: move |color: String| form.with_mut(|f| f.set_color(color)),
                }
                button {
                    r#type: "submit",
                    disabled: !form_state.can_submit(),
                    if form_state.editing().is_some() { "Update Subject" } else { "Add Subject" }
                }
                if form_state.editing().is_some() {
                    button {
                        r#type: "button",
                        onclick: move |_| form.set(SubjectFormState::default()),
                        "Cancel"
                    }
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => {
                    let rows = map_subject_rows(&data.subjects);
                    rsx! {
                        ul { class: "subject-list",
                            for (row, subject) in rows.into_iter().zip(data.subjects.clone()) {
                                {
                                    let id = row.id;
                                    let delete_svc = ctx.subjects();
                                    rsx! {
                                        li {
                                            key: "{id}",
                                            style: "border-left: 4px solid {row.color}",
                                            Link {
                                                to: Route::SubjectDetails { subject_id: id.value() },
                                                "{row.name}"
                                            }
                                            span { class: "session-count", "{row.session_count} sessions" }
                                            button {
                                                onclick: move |_| form.with_mut(|f| f.begin_edit(&subject)),
                                                "Edit"
                                            }
                                            button {
                                                onclick: move |_| {
                                                    let svc = delete_svc.clone();
                                                    spawn(async move {
                                                        if svc.delete_subject(id).await.is_ok() {
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
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button { onclick: move |_| resource.restart(), "Retry" }
                },
            }
        }
    }
}
