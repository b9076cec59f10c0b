use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{SessionId, SubjectId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session duration must be a positive number of minutes")]
    InvalidDuration,
}

//
// ─── SUBJECT REFERENCE ─────────────────────────────────────────────────────────
//

/// Slim back-reference to a session's owning subject, as embedded by the
/// server in session payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRef {
    id: SubjectId,
    name: String,
    color: String,
}

impl SubjectRef {
    #[must_use]
    pub fn new(id: SubjectId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SubjectId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

//
// ─── STUDY SESSION ─────────────────────────────────────────────────────────────
//

/// A single logged study interval belonging to one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct StudySession {
    id: SessionId,
    date: DateTime<Utc>,
    duration_minutes: u32,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    subject_id: SubjectId,
    subject: Option<SubjectRef>,
}

impl StudySession {
    /// Rehydrate a session from an API payload.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidDuration` when the duration is zero.
    #[allow(clippy::too_many_arguments)]
    pub fn from_remote(
        id: SessionId,
        date: DateTime<Utc>,
        duration_minutes: u32,
        notes: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        subject_id: SubjectId,
        subject: Option<SubjectRef>,
    ) -> Result<Self, SessionError> {
        if duration_minutes == 0 {
            return Err(SessionError::InvalidDuration);
        }

        let notes = notes
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty());

        Ok(Self {
            id,
            date,
            duration_minutes,
            notes,
            created_at,
            updated_at,
            subject_id,
            subject,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
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
    pub fn subject_id(&self) -> SubjectId {
        self.subject_id
    }

    #[must_use]
    pub fn subject(&self) -> Option<&SubjectRef> {
        self.subject.as_ref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
