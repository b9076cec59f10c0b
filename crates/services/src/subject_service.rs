use std::sync::Arc;

use planner_core::model::{Subject, SubjectId};

use crate::api::PlannerApi;
use crate::dto::{NewSubject, SubjectPatch};
use crate::error::SubjectServiceError;

/// Typed operations over the subject endpoints.
#[derive(Clone)]
pub struct SubjectService {
    api: Arc<dyn PlannerApi>,
}

impl SubjectService {
    #[must_use]
    pub fn new(api: Arc<dyn PlannerApi>) -> Self {
        Self { api }
    }

    /// List all subjects, each with its embedded sessions.
    ///
    /// # Errors
    ///
    /// Returns `SubjectServiceError::Api` if the request fails.
    /// Returns `SubjectServiceError::Decode` if a payload is invalid.
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, SubjectServiceError> {
        let dtos = self.api.list_subjects().await?;
        let subjects = dtos
            .into_iter()
            .map(Subject::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(subjects)
    }

    /// Fetch one subject with its embedded sessions.
    ///
    /// # Errors
    ///
    /// Returns `SubjectServiceError::Api` if the request fails, including
    /// `ApiError::NotFound` for an unknown id.
    pub async fn get_subject(&self, id: SubjectId) -> Result<Subject, SubjectServiceError> {
        let dto = self.api.get_subject(id).await?;
        Ok(Subject::try_from(dto)?)
    }

    /// Create a subject and return the server's copy.
    ///
    /// # Errors
    ///
    /// Returns `SubjectServiceError::Api` if the request fails.
    pub async fn create_subject(
        &self,
        name: String,
        description: Option<String>,
        color: Option<String>,
    ) -> Result<Subject, SubjectServiceError> {
        let body = NewSubject {
            name,
            description,
            color,
        };
        let dto = self.api.create_subject(&body).await?;
        Ok(Subject::try_from(dto)?)
    }

    /// Apply a partial update and return the server's copy.
    ///
    /// # Errors
    ///
    /// Returns `SubjectServiceError::Api` if the request fails.
    pub async fn update_subject(
        &self,
        id: SubjectId,
        patch: SubjectPatch,
    ) -> Result<Subject, SubjectServiceError> {
        let dto = self.api.update_subject(id, &patch).await?;
        Ok(Subject::try_from(dto)?)
    }

    /// Delete a subject. The server cascades to its sessions.
    ///
    /// # Errors
    ///
    /// Returns `SubjectServiceError::Api` if the request fails.
    pub async fn delete_subject(&self, id: SubjectId) -> Result<(), SubjectServiceError> {
        self.api.delete_subject(id).await?;
        Ok(())
    }
}
