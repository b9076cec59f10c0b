use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{QUICK_DURATIONS, SessionDraft, SessionFormState, SubjectChoiceVm, quick_label};

/// The one session form, reused for create and edit on both the
/// subject-details and sessions views.
///
/// Owns nothing: state lives in the caller's signal, and a submit hands the
/// resolved draft back through `on_submit`. When `subjects` is provided the
/// form shows a chooser and requires a selection; the subject-details view
/// omits it and fills the subject in itself.
#[component]
pub fn SessionForm(
    mut form: Signal<SessionFormState>,
    subjects: Option<Vec<SubjectChoiceVm>>,
    on_submit: EventHandler<SessionDraft>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let today = ctx.clock().today();
    let yesterday = ctx.clock().yesterday();
    let require_subject = subjects.is_some();
    let state = form();

    rsx! {
        form {
            class: "session-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                if let Some(draft) = form().draft() {
                    on_submit.call(draft);
                }
            },

            if let Some(choices) = subjects.clone() {
                div { class: "form-section",
                    label { "Subject" }
                    div { class: "subject-select-buttons",
                        for choice in choices {
                            {
                                let id = choice.id;
                                let selected = state.subject() == Some(id);
                                let style = if selected {
                                    format!(
                                        "border-color: {color}; background: {color}",
                                        color = choice.color
                                    )
                                } else {
                                    format!("border-color: {}", choice.color)
                                };
                                rsx! {
                                    button {
                                        key: "{id}",
                                        r#type: "button",
                                        class: "subject-choice",
                                        class: if selected { "active" },
                                        style: "{style}",
                                        onclick: move |_| form.with_mut(|f| f.select_subject(id)),
                                        "{choice.name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "form-section",
                label { "When?" }
                div { class: "date-shortcuts",
                    button {
                        r#type: "button",
                        class: if state.date() == today { "active" },
                        onclick: move |_| form.with_mut(|f| f.set_date(today)),
                        "Today"
                    }
                    button {
                        r#type: "button",
                        class: if state.date() == yesterday { "active" },
                        onclick: move |_| form.with_mut(|f| f.set_date(yesterday)),
                        "Yesterday"
                    }
                    input {
                        r#type: "date",
                        value: "{state.date()}",
                        oninput: move |evt| form.with_mut(|f| f.set_date_str(&evt.value())),
                    }
                }
            }

            div { class: "form-section",
                label { "How long?" }
                div { class: "duration-buttons",
                    for minutes in QUICK_DURATIONS {
                        button {
                            key: "{minutes}",
                            r#type: "button",
                            class: if state.duration().quick_selection() == Some(minutes) { "active" },
                            onclick: move |_| form.with_mut(|f| f.select_quick(minutes)),
                            "{quick_label(minutes)}"
                        }
                    }
                    input {
                        r#type: "number",
                        placeholder: "Custom (min)",
                        min: "1",
                        value: "{state.duration().custom_value()}",
                        class: if !state.duration().custom_value().is_empty() { "active-input" },
                        oninput: move |evt| form.with_mut(|f| f.set_custom(evt.value())),
                    }
                }
            }

            div { class: "form-section",
                label { "Notes (optional)" }
                input {
                    r#type: "text",
                    placeholder: "What did you study?",
                    value: "{state.notes()}",
                    oninput: move |evt| form.with_mut(|f| f.set_notes(evt.value())),
                }
            }

            div { class: "form-actions",
                button {
                    r#type: "submit",
                    disabled: !state.can_submit(require_subject),
                    if state.editing().is_some() { "Update Session" } else { "Save Session" }
                }
                if state.editing().is_some() {
                    button {
                        r#type: "button",
                        onclick: move |_| form.with_mut(|f| f.reset(today)),
                        "Cancel"
                    }
                }
            }
        }
    }
}
