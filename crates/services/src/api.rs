//! The API seam: one trait covering the ten REST operations, plus the HTTP
//! implementation that talks to the real server.

use async_trait::async_trait;
use log::warn;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use planner_core::model::{SessionId, SubjectId};

use crate::config::ApiConfig;
use crate::dto::{NewSession, NewSubject, SessionDto, SessionPatch, SubjectDto, SubjectPatch};
use crate::error::ApiError;

/// The four resource endpoints behind typed request functions.
///
/// Implementations carry no retry, caching, or batching logic; callers
/// refetch whole collections after every mutation.
#[async_trait]
pub trait PlannerApi: Send + Sync {
    async fn list_subjects(&self) -> Result<Vec<SubjectDto>, ApiError>;
    async fn get_subject(&self, id: SubjectId) -> Result<SubjectDto, ApiError>;
    async fn create_subject(&self, body: &NewSubject) -> Result<SubjectDto, ApiError>;
    async fn update_subject(
        &self,
        id: SubjectId,
        patch: &SubjectPatch,
    ) -> Result<SubjectDto, ApiError>;
    async fn delete_subject(&self, id: SubjectId) -> Result<(), ApiError>;

    async fn list_sessions(&self) -> Result<Vec<SessionDto>, ApiError>;
    async fn get_session(&self, id: SessionId) -> Result<SessionDto, ApiError>;
    async fn create_session(&self, body: &NewSession) -> Result<SessionDto, ApiError>;
    async fn update_session(
        &self,
        id: SessionId,
        patch: &SessionPatch,
    ) -> Result<SessionDto, ApiError>;
    async fn delete_session(&self, id: SessionId) -> Result<(), ApiError>;
}

//
// ─── HTTP CLIENT ───────────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct HttpPlannerApi {
    client: Client,
    config: ApiConfig,
}

impl HttpPlannerApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url())
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("request to {} failed with {status}", response.url());
            return Err(status_error(status));
        }
        let body = response.json().await?;
        Ok(body)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("request to {} failed with {status}", response.url());
            return Err(status_error(status));
        }
        Ok(())
    }

    fn json_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> RequestBuilder {
        self.client.request(method, self.url(path)).json(body)
    }
}

fn status_error(status: StatusCode) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        ApiError::NotFound
    } else {
        ApiError::HttpStatus(status)
    }
}

#[async_trait]
impl PlannerApi for HttpPlannerApi {
    async fn list_subjects(&self) -> Result<Vec<SubjectDto>, ApiError> {
        self.fetch(self.client.get(self.url("/subjects"))).await
    }

    async fn get_subject(&self, id: SubjectId) -> Result<SubjectDto, ApiError> {
        self.fetch(self.client.get(self.url(&format!("/subjects/{id}"))))
            .await
    }

    async fn create_subject(&self, body: &NewSubject) -> Result<SubjectDto, ApiError> {
        self.fetch(self.json_request(Method::POST, "/subjects", body))
            .await
    }

    async fn update_subject(
        &self,
        id: SubjectId,
        patch: &SubjectPatch,
    ) -> Result<SubjectDto, ApiError> {
        self.fetch(self.json_request(Method::PUT, &format!("/subjects/{id}"), patch))
            .await
    }

    async fn delete_subject(&self, id: SubjectId) -> Result<(), ApiError> {
        self.execute(self.client.delete(self.url(&format!("/subjects/{id}"))))
            .await
    }

    async fn list_sessions(&self) -> Result<Vec<SessionDto>, ApiError> {
        self.fetch(self.client.get(self.url("/sessions"))).await
    }

    async fn get_session(&self, id: SessionId) -> Result<SessionDto, ApiError> {
        self.fetch(self.client.get(self.url(&format!("/sessions/{id}"))))
            .await
    }

    async fn create_session(&self, body: &NewSession) -> Result<SessionDto, ApiError> {
        self.fetch(self.json_request(Method::POST, "/sessions", body))
            .await
    }

    async fn update_session(
        &self,
        id: SessionId,
        patch: &SessionPatch,
    ) -> Result<SessionDto, ApiError> {
        self.fetch(self.json_request(Method::PUT, &format!("/sessions/{id}"), patch))
            .await
    }

    async fn delete_session(&self, id: SessionId) -> Result<(), ApiError> {
        self.execute(self.client.delete(self.url(&format!("/sessions/{id}"))))
            .await
    }
}
