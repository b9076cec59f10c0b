//! Pure aggregation over fetched session collections.
//!
//! Everything here is re-derived on every render from the lists the views
//! fetch; there is no incremental maintenance and no caching of partial sums.

use chrono::NaiveDate;

use crate::model::{StudySession, SubjectId};

/// Sum of all session durations, in minutes.
#[must_use]
pub fn total_minutes(sessions: &[StudySession]) -> u32 {
    sessions
        .iter()
        .fold(0_u32, |sum, s| sum.saturating_add(s.duration_minutes()))
}

/// Split a minute total into whole hours and leftover minutes.
///
/// The split satisfies `hours * 60 + minutes == total` with `minutes < 60`.
#[must_use]
pub fn split_hours_minutes(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

/// Minutes logged against one subject.
#[must_use]
pub fn subject_minutes(sessions: &[StudySession], subject_id: SubjectId) -> u32 {
    sessions
        .iter()
        .filter(|s| s.subject_id() == subject_id)
        .fold(0_u32, |sum, s| sum.saturating_add(s.duration_minutes()))
}

/// Sessions ordered by date, newest first. Ties keep their input order.
#[must_use]
pub fn sorted_by_date_desc(sessions: &[StudySession]) -> Vec<StudySession> {
    let mut sorted = sessions.to_vec();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    sorted
}

/// The `limit` most recent sessions, newest first.
#[must_use]
pub fn recent_sessions(sessions: &[StudySession], limit: usize) -> Vec<StudySession> {
    let mut recent = sorted_by_date_desc(sessions);
    recent.truncate(limit);
    recent
}

/// Filter by subject and by a case-insensitive substring match on notes.
///
/// An empty query matches everything; a non-empty query excludes sessions
/// without notes.
#[must_use]
pub fn filter_sessions(
    sessions: &[StudySession],
    subject: Option<SubjectId>,
    notes_query: &str,
) -> Vec<StudySession> {
    let query = notes_query.to_lowercase();
    sessions
        .iter()
        .filter(|s| subject.is_none_or(|id| s.subject_id() == id))
        .filter(|s| {
            query.is_empty()
                || s.notes()
                    .is_some_and(|notes| notes.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

//
// ─── DAY GROUPS ────────────────────────────────────────────────────────────────
//

/// Sessions sharing one calendar day, with their own subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    date: NaiveDate,
    sessions: Vec<StudySession>,
}

impl DayGroup {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        total_minutes(&self.sessions)
    }
}

/// Group sessions by the calendar day of their timestamp.
///
/// Groups appear in first-appearance order, so a date-descending input yields
/// newest-day-first groups. Every session lands in exactly one group.
#[must_use]
pub fn group_by_day(sessions: &[StudySession]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for session in sessions {
        let day = session.date().date_naive();
        match groups.iter_mut().find(|g| g.date == day) {
            Some(group) => group.sessions.push(session.clone()),
            None => groups.push(DayGroup {
                date: day,
                sessions: vec![session.clone()],
            }),
        }
    }
    groups
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SessionId, StudySession, SubjectId};
    use crate::time::fixed_now;
    use chrono::Duration;

    fn session(id: u64, subject: u64, minutes: u32, days_ago: i64, notes: Option<&str>) -> StudySession {
        let date = fixed_now() - Duration::days(days_ago);
        StudySession::from_remote(
            SessionId::new(id),
            date,
            minutes,
            notes.map(str::to_owned),
            date,
            date,
            SubjectId::new(subject),
            None,
        )
        .unwrap()
    }

    #[test]
    fn total_is_sum_of_durations() {
        let sessions = vec![
            session(1, 1, 45, 0, None),
            session(2, 1, 30, 1, None),
            session(3, 2, 90, 2, None),
        ];
        assert_eq!(total_minutes(&sessions), 165);
        assert_eq!(total_minutes(&[]), 0);
    }

    #[test]
    fn hours_minutes_split_invariant() {
        for total in [0, 1, 59, 60, 61, 165, 600, 1439] {
            let (hours, minutes) = split_hours_minutes(total);
            assert_eq!(hours * 60 + minutes, total);
            assert!(minutes < 60);
        }
    }

    #[test]
    fn subject_minutes_sums_only_that_subject() {
        let sessions = vec![
            session(1, 1, 45, 0, None),
            session(2, 2, 30, 1, None),
            session(3, 1, 15, 2, None),
        ];
        assert_eq!(subject_minutes(&sessions, SubjectId::new(1)), 60);
        assert_eq!(subject_minutes(&sessions, SubjectId::new(2)), 30);
        assert_eq!(subject_minutes(&sessions, SubjectId::new(9)), 0);
    }

    #[test]
    fn sort_is_date_descending() {
        let sessions = vec![
            session(1, 1, 15, 2, None),
            session(2, 1, 30, 0, None),
            session(3, 1, 45, 1, None),
        ];
        let sorted = sorted_by_date_desc(&sessions);
        let ids: Vec<u64> = sorted.iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn recent_takes_newest_first() {
        let sessions = vec![
            session(1, 1, 15, 4, None),
            session(2, 1, 30, 0, None),
            session(3, 1, 45, 2, None),
            session(4, 1, 60, 1, None),
        ];
        let recent = recent_sessions(&sessions, 2);
        let ids: Vec<u64> = recent.iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn filter_by_subject_id() {
        let sessions = vec![
            session(1, 1, 15, 0, None),
            session(2, 2, 30, 0, None),
        ];
        let filtered = filter_sessions(&sessions, Some(SubjectId::new(2)), "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), SessionId::new(2));

        let all = filter_sessions(&sessions, None, "");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn filter_by_notes_is_case_insensitive() {
        let sessions = vec![
            session(1, 1, 15, 0, Some("Read Chapter 3")),
            session(2, 1, 30, 0, Some("practice problems")),
            session(3, 1, 45, 0, None),
        ];

        let filtered = filter_sessions(&sessions, None, "chapter");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), SessionId::new(1));

        // A non-empty query excludes sessions without notes.
        let filtered = filter_sessions(&sessions, None, "PRACTICE");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id(), SessionId::new(2));
    }

    #[test]
    fn day_groups_partition_the_input() {
        let sessions = sorted_by_date_desc(&[
            session(1, 1, 15, 0, None),
            session(2, 1, 30, 0, None),
            session(3, 2, 45, 1, None),
            session(4, 2, 60, 3, None),
        ]);
        let groups = group_by_day(&sessions);

        assert_eq!(groups.len(), 3);

        // Every session appears in exactly one group.
        let grouped: usize = groups.iter().map(|g| g.sessions().len()).sum();
        assert_eq!(grouped, sessions.len());
        for group in &groups {
            for s in group.sessions() {
                assert_eq!(s.date().date_naive(), group.date());
            }
        }

        // Group subtotals sum their members.
        assert_eq!(groups[0].total_minutes(), 45);
        assert_eq!(groups[1].total_minutes(), 45);
        assert_eq!(groups[2].total_minutes(), 60);

        // Date-descending input yields newest-day-first groups.
        assert!(groups[0].date() > groups[1].date());
        assert!(groups[1].date() > groups[2].date());
    }
}
