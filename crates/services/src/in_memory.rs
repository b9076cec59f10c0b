//! An in-process stand-in for the remote API.
//!
//! Encodes the contract the client assumes of the server: incrementing ids,
//! server-side timestamps, subjects embedding their sessions, sessions
//! embedding a subject back-reference, partial updates, validation by status
//! code, and cascade delete of a subject's sessions. Tests (and the UI smoke
//! harness) run against this instead of a live server.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;

use planner_core::Clock;
use planner_core::model::{SessionId, SubjectId};

use crate::api::PlannerApi;
use crate::dto::{
    NewSession, NewSubject, SessionDto, SessionPatch, SubjectDto, SubjectPatch, SubjectRefDto,
};
use crate::error::ApiError;

/// Color assigned when a subject is created without one.
const DEFAULT_COLOR: &str = "#4A90D9";

#[derive(Debug, Clone)]
struct SubjectRecord {
    id: u64,
    name: String,
    description: Option<String>,
    color: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct SessionRecord {
    id: u64,
    date: DateTime<Utc>,
    duration: u32,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    subject_id: u64,
}

#[derive(Debug, Default)]
struct State {
    subjects: Vec<SubjectRecord>,
    sessions: Vec<SessionRecord>,
    next_subject_id: u64,
    next_session_id: u64,
}

pub struct InMemoryPlannerApi {
    clock: Clock,
    state: Mutex<State>,
}

impl InMemoryPlannerApi {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            state: Mutex::new(State::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn validation_error() -> ApiError {
    ApiError::HttpStatus(StatusCode::UNPROCESSABLE_ENTITY)
}

fn subject_dto(state: &State, record: &SubjectRecord) -> SubjectDto {
    let sessions = state
        .sessions
        .iter()
        .filter(|s| s.subject_id == record.id)
        .map(|s| session_dto(state, s))
        .collect();
    SubjectDto {
        id: record.id,
        name: record.name.clone(),
        description: record.description.clone(),
        color: record.color.clone(),
        created_at: record.created_at,
        updated_at: record.updated_at,
        sessions,
    }
}

fn session_dto(state: &State, record: &SessionRecord) -> SessionDto {
    let subject = state
        .subjects
        .iter()
        .find(|s| s.id == record.subject_id)
        .map(|s| SubjectRefDto {
            id: s.id,
            name: s.name.clone(),
            color: s.color.clone(),
        });
    SessionDto {
        id: record.id,
        date: record.date,
        duration: record.duration,
        notes: record.notes.clone(),
        created_at: record.created_at,
        updated_at: record.updated_at,
        subject_id: record.subject_id,
        subject,
    }
}

#[async_trait]
impl PlannerApi for InMemoryPlannerApi {
    async fn list_subjects(&self) -> Result<Vec<SubjectDto>, ApiError> {
        let state = self.state();
        Ok(state
            .subjects
            .iter()
            .map(|record| subject_dto(&state, record))
            .collect())
    }

    async fn get_subject(&self, id: SubjectId) -> Result<SubjectDto, ApiError> {
        let state = self.state();
        state
            .subjects
            .iter()
            .find(|s| s.id == id.value())
            .map(|record| subject_dto(&state, record))
            .ok_or(ApiError::NotFound)
    }

    async fn create_subject(&self, body: &NewSubject) -> Result<SubjectDto, ApiError> {
        if body.name.trim().is_empty() {
            return Err(validation_error());
        }

        let now = self.clock.now();
        let mut state = self.state();
        state.next_subject_id += 1;
        let record = SubjectRecord {
            id: state.next_subject_id,
            name: body.name.clone(),
            description: body.description.clone(),
            color: body
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            created_at: now,
            updated_at: now,
        };
        state.subjects.push(record.clone());
        Ok(subject_dto(&state, &record))
    }

    async fn update_subject(
        &self,
        id: SubjectId,
        patch: &SubjectPatch,
    ) -> Result<SubjectDto, ApiError> {
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(validation_error());
        }

        let now = self.clock.now();
        let mut state = self.state();
        let record = state
            .subjects
            .iter_mut()
            .find(|s| s.id == id.value())
            .ok_or(ApiError::NotFound)?;

        if let Some(name) = &patch.name {
            record.name = name.clone();
        }
        if let Some(description) = &patch.description {
            record.description = Some(description.clone());
        }
        if let Some(color) = &patch.color {
            record.color = color.clone();
        }
        record.updated_at = now;

        let record = record.clone();
        Ok(subject_dto(&state, &record))
    }

    async fn delete_subject(&self, id: SubjectId) -> Result<(), ApiError> {
        let mut state = self.state();
        let before = state.subjects.len();
        state.subjects.retain(|s| s.id != id.value());
        if state.subjects.len() == before {
            return Err(ApiError::NotFound);
        }
        // Cascade: the subject's sessions go with it.
        state.sessions.retain(|s| s.subject_id != id.value());
        Ok(())
    }

    async fn list_sessions(&self) -> Result<Vec<SessionDto>, ApiError> {
        let state = self.state();
        Ok(state
            .sessions
            .iter()
            .map(|record| session_dto(&state, record))
            .collect())
    }

    async fn get_session(&self, id: SessionId) -> Result<SessionDto, ApiError> {
        let state = self.state();
        state
            .sessions
            .iter()
            .find(|s| s.id == id.value())
            .map(|record| session_dto(&state, record))
            .ok_or(ApiError::NotFound)
    }

    async fn create_session(&self, body: &NewSession) -> Result<SessionDto, ApiError> {
        if body.duration == 0 {
            return Err(validation_error());
        }

        let now = self.clock.now();
        let mut state = self.state();
        if !state.subjects.iter().any(|s| s.id == body.subject_id) {
            return Err(validation_error());
        }

        state.next_session_id += 1;
        let record = SessionRecord {
            id: state.next_session_id,
            date: body.date,
            duration: body.duration,
            notes: body.notes.clone(),
            created_at: now,
            updated_at: now,
            subject_id: body.subject_id,
        };
        state.sessions.push(record.clone());
        Ok(session_dto(&state, &record))
    }

    async fn update_session(
        &self,
        id: SessionId,
        patch: &SessionPatch,
    ) -> Result<SessionDto, ApiError> {
        if patch.duration == Some(0) {
            return Err(validation_error());
        }

        let now = self.clock.now();
        let mut state = self.state();
        if let Some(subject_id) = patch.subject_id
            && !state.subjects.iter().any(|s| s.id == subject_id)
        {
            return Err(validation_error());
        }

        let record = state
            .sessions
            .iter_mut()
            .find(|s| s.id == id.value())
            .ok_or(ApiError::NotFound)?;

        if let Some(date) = patch.date {
            record.date = date;
        }
        if let Some(duration) = patch.duration {
            record.duration = duration;
        }
        if let Some(notes) = &patch.notes {
            record.notes = Some(notes.clone());
        }
        if let Some(subject_id) = patch.subject_id {
            record.subject_id = subject_id;
        }
        record.updated_at = now;

        let record = record.clone();
        Ok(session_dto(&state, &record))
    }

    async fn delete_session(&self, id: SessionId) -> Result<(), ApiError> {
        let mut state = self.state();
        let before = state.sessions.len();
        state.sessions.retain(|s| s.id != id.value());
        if state.sessions.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::time::fixed_clock;

    fn api() -> InMemoryPlannerApi {
        InMemoryPlannerApi::new(fixed_clock())
    }

    fn new_subject(name: &str) -> NewSubject {
        NewSubject {
            name: name.to_string(),
            description: None,
            color: Some("#4A90D9".to_string()),
        }
    }

    fn new_session(subject_id: u64, duration: u32) -> NewSession {
        NewSession {
            date: planner_core::time::fixed_now(),
            duration,
            notes: None,
            subject_id,
        }
    }

    #[tokio::test]
    async fn ids_increment_per_resource() {
        let api = api();
        let a = api.create_subject(&new_subject("Math")).await.unwrap();
        let b = api.create_subject(&new_subject("Physics")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        let s = api.create_session(&new_session(a.id, 45)).await.unwrap();
        assert_eq!(s.id, 1);
    }

    #[tokio::test]
    async fn subjects_embed_their_sessions() {
        let api = api();
        let subject = api.create_subject(&new_subject("Math")).await.unwrap();
        api.create_session(&new_session(subject.id, 45))
            .await
            .unwrap();

        let fetched = api.get_subject(SubjectId::new(subject.id)).await.unwrap();
        assert_eq!(fetched.sessions.len(), 1);
        assert_eq!(fetched.sessions[0].duration, 45);
    }

    #[tokio::test]
    async fn sessions_embed_a_subject_reference() {
        let api = api();
        let subject = api.create_subject(&new_subject("Math")).await.unwrap();
        api.create_session(&new_session(subject.id, 45))
            .await
            .unwrap();

        let sessions = api.list_sessions().await.unwrap();
        let embedded = sessions[0].subject.as_ref().unwrap();
        assert_eq!(embedded.name, "Math");
        assert_eq!(embedded.color, "#4A90D9");
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() {
        let api = api();
        assert!(matches!(
            api.create_subject(&new_subject("  ")).await,
            Err(ApiError::HttpStatus(StatusCode::UNPROCESSABLE_ENTITY))
        ));

        let subject = api.create_subject(&new_subject("Math")).await.unwrap();
        assert!(matches!(
            api.create_session(&new_session(subject.id, 0)).await,
            Err(ApiError::HttpStatus(StatusCode::UNPROCESSABLE_ENTITY))
        ));
        assert!(matches!(
            api.create_session(&new_session(999, 45)).await,
            Err(ApiError::HttpStatus(StatusCode::UNPROCESSABLE_ENTITY))
        ));
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields() {
        let api = api();
        let subject = api.create_subject(&new_subject("Math")).await.unwrap();
        let updated = api
            .update_subject(
                SubjectId::new(subject.id),
                &SubjectPatch {
                    color: Some("#ff6b6b".to_string()),
                    ..SubjectPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Math");
        assert_eq!(updated.color, "#ff6b6b");
    }

    #[tokio::test]
    async fn deleting_a_subject_cascades_to_sessions() {
        let api = api();
        let math = api.create_subject(&new_subject("Math")).await.unwrap();
        let physics = api.create_subject(&new_subject("Physics")).await.unwrap();
        api.create_session(&new_session(math.id, 45)).await.unwrap();
        api.create_session(&new_session(physics.id, 30))
            .await
            .unwrap();

        api.delete_subject(SubjectId::new(math.id)).await.unwrap();

        let sessions = api.list_sessions().await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].subject_id, physics.id);
    }

    #[tokio::test]
    async fn missing_resources_are_not_found() {
        let api = api();
        assert!(matches!(
            api.get_subject(SubjectId::new(1)).await,
            Err(ApiError::NotFound)
        ));
        assert!(matches!(
            api.delete_session(SessionId::new(1)).await,
            Err(ApiError::NotFound)
        ));
    }
}
