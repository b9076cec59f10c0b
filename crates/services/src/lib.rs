#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod in_memory;
pub mod session_service;
pub mod subject_service;

pub use planner_core::Clock;

pub use api::{HttpPlannerApi, PlannerApi};
pub use config::ApiConfig;
pub use dto::{NewSession, NewSubject, SessionPatch, SubjectPatch};
pub use error::{ApiError, DecodeError, SessionServiceError, SubjectServiceError};
pub use in_memory::InMemoryPlannerApi;
pub use session_service::SessionService;
pub use subject_service::SubjectService;
