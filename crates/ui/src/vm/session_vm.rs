use planner_core::model::{SessionId, StudySession};
use planner_core::stats::DayGroup;

use crate::vm::subject_form::DEFAULT_COLOR;
use crate::vm::time_fmt::{format_date, format_day_heading, format_hours_minutes, format_minutes};

/// UI-ready representation of one session row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRowVm {
    pub id: SessionId,
    pub date_label: String,
    pub duration_label: String,
    pub notes: Option<String>,
    pub subject_name: Option<String>,
    pub color: String,
}

impl SessionRowVm {
    /// Subject name and dot color come from the embedded back-reference;
    /// sessions without one fall back to the default color.
    #[must_use]
    pub fn from_session(session: &StudySession) -> Self {
        Self {
            id: session.id(),
            date_label: format_date(session.date()),
            duration_label: format_minutes(session.duration_minutes()),
            notes: session.notes().map(str::to_owned),
            subject_name: session.subject().map(|s| s.name().to_owned()),
            color: session
                .subject()
                .map_or_else(|| DEFAULT_COLOR.to_owned(), |s| s.color().to_owned()),
        }
    }
}

#[must_use]
pub fn map_session_rows(sessions: &[StudySession]) -> Vec<SessionRowVm> {
    sessions.iter().map(SessionRowVm::from_session).collect()
}

/// One day group on the sessions view: long-date heading, subtotal, rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayGroupVm {
    pub heading: String,
    pub total_label: String,
    pub rows: Vec<SessionRowVm>,
}

#[must_use]
pub fn map_day_groups(groups: &[DayGroup]) -> Vec<DayGroupVm> {
    groups
        .iter()
        .map(|group| DayGroupVm {
            heading: format_day_heading(group.date()),
            total_label: format_hours_minutes(group.total_minutes()),
            rows: map_session_rows(group.sessions()),
        })
        .collect()
}
