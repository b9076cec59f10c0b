//! Wire types for the remote CRUD API.
//!
//! The API speaks camelCase JSON with RFC 3339 timestamps. Response DTOs are
//! decoded here and converted into validated domain models; request bodies
//! serialize partial updates by omitting absent fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use planner_core::model::{SessionId, StudySession, Subject, SubjectId, SubjectRef};

use crate::error::DecodeError;

//
// ─── RESPONSE PAYLOADS ─────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDto {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub sessions: Vec<SessionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub id: u64,
    pub date: DateTime<Utc>,
    pub duration: u32,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub subject_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<SubjectRefDto>,
}

/// The embedded back-reference inside session payloads. The server sends the
/// whole subject; only the fields the client renders are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRefDto {
    pub id: u64,
    pub name: String,
    pub color: String,
}

impl TryFrom<SessionDto> for StudySession {
    type Error = DecodeError;

    fn try_from(dto: SessionDto) -> Result<Self, Self::Error> {
        let subject = dto
            .subject
            .map(|s| SubjectRef::new(SubjectId::new(s.id), s.name, s.color));
        let session = StudySession::from_remote(
            SessionId::new(dto.id),
            dto.date,
            dto.duration,
            dto.notes,
            dto.created_at,
            dto.updated_at,
            SubjectId::new(dto.subject_id),
            subject,
        )?;
        Ok(session)
    }
}

impl TryFrom<SubjectDto> for Subject {
    type Error = DecodeError;

    fn try_from(dto: SubjectDto) -> Result<Self, Self::Error> {
        let sessions = dto
            .sessions
            .into_iter()
            .map(StudySession::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let subject = Subject::from_remote(
            SubjectId::new(dto.id),
            dto.name,
            dto.description,
            dto.color,
            dto.created_at,
            dto.updated_at,
            sessions,
        )?;
        Ok(subject)
    }
}

//
// ─── REQUEST BODIES ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Partial subject update; absent fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub date: DateTime<Utc>,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub subject_id: u64,
}

/// Partial session update; absent fields are left unchanged server-side.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<u64>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
