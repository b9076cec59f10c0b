use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::SubjectId;
use crate::model::session::StudySession;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubjectError {
    #[error("subject name cannot be empty")]
    EmptyName,
}

//
// ─── SUBJECT ───────────────────────────────────────────────────────────────────
//

/// A study topic owning zero or more logged sessions.
///
/// Subjects are server-owned; the client only rehydrates them from API
/// responses. The `sessions` collection is the denormalized copy the server
/// embeds in subject payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    id: SubjectId,
    name: String,
    description: Option<String>,
    color: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    sessions: Vec<StudySession>,
}

impl Subject {
    /// Rehydrate a subject from an API payload.
    ///
    /// The color is any string usable as a CSS color value; no validation is
    /// performed on it.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::EmptyName` if the name is empty or
    /// whitespace-only.
    pub fn from_remote(
        id: SubjectId,
        name: impl Into<String>,
        description: Option<String>,
        color: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        sessions: Vec<StudySession>,
    ) -> Result<Self, SubjectError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SubjectError::EmptyName);
        }

        let description = description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty());

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            description,
            color: color.into(),
            created_at,
            updated_at,
            sessions,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> SubjectId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn subject_rejects_empty_name() {
        let err = Subject::from_remote(
            SubjectId::new(1),
            "   ",
            None,
            "#4A90D9",
            fixed_now(),
            fixed_now(),
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, SubjectError::EmptyName);
    }

    #[test]
    fn subject_trims_name_and_description() {
        let subject = Subject::from_remote(
            SubjectId::new(1),
            "  Math  ",
            Some("  algebra  ".into()),
            "#4A90D9",
            fixed_now(),
            fixed_now(),
            Vec::new(),
        )
        .unwrap();

        assert_eq!(subject.name(), "Math");
        assert_eq!(subject.description(), Some("algebra"));
    }

    #[test]
    fn subject_filters_empty_description() {
        let subject = Subject::from_remote(
            SubjectId::new(1),
            "Physics",
            Some("   ".into()),
            "#ff6b6b",
            fixed_now(),
            fixed_now(),
            Vec::new(),
        )
        .unwrap();

        assert_eq!(subject.description(), None);
    }

    #[test]
    fn subject_keeps_color_verbatim() {
        // Color is any string usable as a CSS color; no validation.
        let subject = Subject::from_remote(
            SubjectId::new(1),
            "Chemistry",
            None,
            "rebeccapurple",
            fixed_now(),
            fixed_now(),
            Vec::new(),
        )
        .unwrap();

        assert_eq!(subject.color(), "rebeccapurple");
        assert_eq!(subject.session_count(), 0);
    }
}
