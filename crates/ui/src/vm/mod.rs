mod session_form;
mod session_vm;
mod subject_form;
mod subject_vm;
mod time_fmt;

pub use session_form::{
    DurationChoice, QUICK_DURATIONS, SessionDraft, SessionFormState,
};
pub use session_vm::{DayGroupVm, SessionRowVm, map_day_groups, map_session_rows};
pub use subject_form::{DEFAULT_COLOR, SubjectDraft, SubjectFormState};
pub use subject_vm::{
    SubjectCardVm, SubjectChoiceVm, SubjectRowVm, map_subject_cards, map_subject_choices,
    map_subject_rows,
};
pub use time_fmt::{
    format_date, format_day_heading, format_hours_minutes, format_minutes, quick_label,
};
