use std::sync::Arc;

use async_trait::async_trait;
use planner_core::model::{SessionId, SubjectId};
use planner_core::time::fixed_now;
use services::dto::{
    NewSession, NewSubject, SessionDto, SessionPatch, SubjectDto, SubjectPatch,
};
use services::{ApiError, PlannerApi};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_api};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_totals_and_recent() {
    let mut harness = setup_view_harness(ViewKind::Home);

    let math = harness
        .subjects
        .create_subject("Math".into(), None, Some("#4A90D9".into()))
        .await
        .expect("create subject");
    harness
        .sessions
        .create_session(fixed_now(), 45, None, math.id())
        .await
        .expect("create session");

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Total Studied"), "missing stat label in {html}");
    assert!(html.contains("0h 45m"), "missing total in {html}");
    assert!(html.contains("Math"), "missing subject card in {html}");
    assert!(html.contains("45 min"), "missing recent session in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subjects_view_smoke_renders_form_and_rows() {
    let mut harness = setup_view_harness(ViewKind::Subjects);

    harness
        .subjects
        .create_subject("Physics".into(), Some("mechanics".into()), None)
        .await
        .expect("create subject");

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Add Subject"), "missing submit label in {html}");
    assert!(html.contains("Physics"), "missing subject row in {html}");
    assert!(html.contains("0 sessions"), "missing session count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subject_details_smoke_renders_total_and_sessions() {
    let math_id = 1;
    let mut harness = setup_view_harness(ViewKind::SubjectDetails(math_id));

    let math = harness
        .subjects
        .create_subject("Math".into(), None, Some("#4A90D9".into()))
        .await
        .expect("create subject");
    assert_eq!(math.id(), SubjectId::new(math_id));
    harness
        .sessions
        .create_session(fixed_now(), 45, None, math.id())
        .await
        .expect("create session");

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Total studied:"), "missing total line in {html}");
    assert!(html.contains("0h 45m"), "missing total in {html}");
    assert!(html.contains("45 min"), "missing session row in {html}");
    assert!(html.contains("Save Session"), "missing form in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subject_details_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::SubjectDetails(42));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Not found"), "missing not-found message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sessions_view_smoke_groups_by_day() {
    let mut harness = setup_view_harness(ViewKind::Sessions);

    let math = harness
        .subjects
        .create_subject("Math".into(), None, Some("#4A90D9".into()))
        .await
        .expect("create subject");
    harness
        .sessions
        .create_session(fixed_now(), 45, Some("chapter 3".into()), math.id())
        .await
        .expect("create session");
    harness
        .sessions
        .create_session(fixed_now(), 30, None, math.id())
        .await
        .expect("create session");

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    // fixed_now() falls on 2023-11-14, a Tuesday.
    assert!(
        html.contains("Tuesday, November 14, 2023"),
        "missing day heading in {html}"
    );
    assert!(html.contains("2 sessions"), "missing stats bar in {html}");
    assert!(html.contains("1h 15m total"), "missing subtotal in {html}");
    assert!(html.contains("chapter 3"), "missing notes in {html}");
}

struct FailingApi;

#[async_trait]
impl PlannerApi for FailingApi {
    async fn list_subjects(&self) -> Result<Vec<SubjectDto>, ApiError> {
        Err(ApiError::NotFound)
    }

    async fn get_subject(&self, _id: SubjectId) -> Result<SubjectDto, ApiError> {
        Err(ApiError::NotFound)
    }

    async fn create_subject(&self, _body: &NewSubject) -> Result<SubjectDto, ApiError> {
        Err(ApiError::NotFound)
    }

    async fn update_subject(
        &self,
        _id: SubjectId,
        _patch: &SubjectPatch,
    ) -> Result<SubjectDto, ApiError> {
        Err(ApiError::NotFound)
    }

    async fn delete_subject(&self, _id: SubjectId) -> Result<(), ApiError> {
        Err(ApiError::NotFound)
    }

    async fn list_sessions(&self) -> Result<Vec<SessionDto>, ApiError> {
        Err(ApiError::NotFound)
    }

    async fn get_session(&self, _id: SessionId) -> Result<SessionDto, ApiError> {
        Err(ApiError::NotFound)
    }

    async fn create_session(&self, _body: &NewSession) -> Result<SessionDto, ApiError> {
        Err(ApiError::NotFound)
    }

    async fn update_session(
        &self,
        _id: SessionId,
        _patch: &SessionPatch,
    ) -> Result<SessionDto, ApiError> {
        Err(ApiError::NotFound)
    }

    async fn delete_session(&self, _id: SessionId) -> Result<(), ApiError> {
        Err(ApiError::NotFound)
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_api(ViewKind::Home, Arc::new(FailingApi));

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(
        html.contains("Something went wrong"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}
