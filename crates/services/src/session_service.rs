use std::sync::Arc;

use chrono::{DateTime, Utc};

use planner_core::model::{SessionError, SessionId, StudySession, SubjectId};

use crate::api::PlannerApi;
use crate::dto::{NewSession, SessionPatch};
use crate::error::SessionServiceError;

/// Typed operations over the session endpoints.
#[derive(Clone)]
pub struct SessionService {
    api: Arc<dyn PlannerApi>,
}

impl SessionService {
    #[must_use]
    pub fn new(api: Arc<dyn PlannerApi>) -> Self {
        Self { api }
    }

    /// List all sessions, each with its embedded subject reference.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Api` if the request fails.
    /// Returns `SessionServiceError::Decode` if a payload is invalid.
    pub async fn list_sessions(&self) -> Result<Vec<StudySession>, SessionServiceError> {
        let dtos = self.api.list_sessions().await?;
        let sessions = dtos
            .into_iter()
            .map(StudySession::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(sessions)
    }

    /// Fetch one session.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Api` if the request fails, including
    /// `ApiError::NotFound` for an unknown id.
    pub async fn get_session(&self, id: SessionId) -> Result<StudySession, SessionServiceError> {
        let dto = self.api.get_session(id).await?;
        Ok(StudySession::try_from(dto)?)
    }

    /// Log a new session against a subject.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Session` when the duration is zero
    /// (rejected before any request is made).
    /// Returns `SessionServiceError::Api` if the request fails.
    pub async fn create_session(
        &self,
        date: DateTime<Utc>,
        duration_minutes: u32,
        notes: Option<String>,
        subject_id: SubjectId,
    ) -> Result<StudySession, SessionServiceError> {
        if duration_minutes == 0 {
            return Err(SessionError::InvalidDuration.into());
        }

        let body = NewSession {
            date,
            duration: duration_minutes,
            notes,
            subject_id: subject_id.value(),
        };
        let dto = self.api.create_session(&body).await?;
        Ok(StudySession::try_from(dto)?)
    }

    /// Apply a partial update and return the server's copy.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Session` when the patched duration is
    /// zero. Returns `SessionServiceError::Api` if the request fails.
    pub async fn update_session(
        &self,
        id: SessionId,
        patch: SessionPatch,
    ) -> Result<StudySession, SessionServiceError> {
        if patch.duration == Some(0) {
            return Err(SessionError::InvalidDuration.into());
        }

        let dto = self.api.update_session(id, &patch).await?;
        Ok(StudySession::try_from(dto)?)
    }

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionServiceError::Api` if the request fails.
    pub async fn delete_session(&self, id: SessionId) -> Result<(), SessionServiceError> {
        self.api.delete_session(id).await?;
        Ok(())
    }
}
