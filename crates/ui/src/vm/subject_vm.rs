use planner_core::model::{StudySession, Subject, SubjectId};
use planner_core::stats;

use crate::vm::time_fmt::format_hours_minutes;

/// UI-ready representation of a subject on the home overview grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectCardVm {
    pub id: SubjectId,
    pub name: String,
    pub color: String,
    pub session_count: usize,
    pub total_label: String,
}

/// Per-subject totals are taken from the global session list, matching what
/// the home view fetches.
#[must_use]
pub fn map_subject_cards(subjects: &[Subject], sessions: &[StudySession]) -> Vec<SubjectCardVm> {
    subjects
        .iter()
        .map(|subject| {
            let minutes = stats::subject_minutes(sessions, subject.id());
            SubjectCardVm {
                id: subject.id(),
                name: subject.name().to_string(),
                color: subject.color().to_string(),
                session_count: subject.session_count(),
                total_label: format_hours_minutes(minutes),
            }
        })
        .collect()
}

/// UI-ready representation of a subject row on the subjects view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectRowVm {
    pub id: SubjectId,
    pub name: String,
    pub color: String,
    pub session_count: usize,
}

#[must_use]
pub fn map_subject_rows(subjects: &[Subject]) -> Vec<SubjectRowVm> {
    subjects
        .iter()
        .map(|subject| SubjectRowVm {
            id: subject.id(),
            name: subject.name().to_string(),
            color: subject.color().to_string(),
            session_count: subject.session_count(),
        })
        .collect()
}

/// Subject option for the session form's chooser and the filter select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectChoiceVm {
    pub id: SubjectId,
    pub name: String,
    pub color: String,
}

#[must_use]
pub fn map_subject_choices(subjects: &[Subject]) -> Vec<SubjectChoiceVm> {
    subjects
        .iter()
        .map(|subject| SubjectChoiceVm {
            id: subject.id(),
            name: subject.name().to_string(),
            color: subject.color().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::model::SessionId;
    use planner_core::time::fixed_now;

    fn subject(id: u64, name: &str, sessions: Vec<StudySession>) -> Subject {
        Subject::from_remote(
            SubjectId::new(id),
            name,
            None,
            "#4A90D9",
            fixed_now(),
            fixed_now(),
            sessions,
        )
        .unwrap()
    }

    fn session(id: u64, subject_id: u64, minutes: u32) -> StudySession {
        StudySession::from_remote(
            SessionId::new(id),
            fixed_now(),
            minutes,
            None,
            fixed_now(),
            fixed_now(),
            SubjectId::new(subject_id),
            None,
        )
        .unwrap()
    }

    #[test]
    fn cards_take_totals_from_the_global_list() {
        let subjects = vec![
            subject(1, "Math", vec![session(1, 1, 45)]),
            subject(2, "Physics", Vec::new()),
        ];
        let sessions = vec![session(1, 1, 45), session(2, 1, 30), session(3, 2, 60)];

        let cards = map_subject_cards(&subjects, &sessions);
        assert_eq!(cards[0].total_label, "1h 15m");
        assert_eq!(cards[0].session_count, 1);
        assert_eq!(cards[1].total_label, "1h 0m");
    }

    #[test]
    fn rows_carry_color_and_count() {
        let rows = map_subject_rows(&[subject(1, "Math", vec![session(1, 1, 45)])]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Math");
        assert_eq!(rows[0].color, "#4A90D9");
        assert_eq!(rows[0].session_count, 1);
    }
}
