use std::sync::Arc;

use planner_core::Clock;
use services::{SessionService, SubjectService};

/// What the composition root (e.g. `crates/app`) provides to the views.
pub trait UiApp: Send + Sync {
    fn subjects(&self) -> Arc<SubjectService>;
    fn sessions(&self) -> Arc<SessionService>;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    subjects: Arc<SubjectService>,
    sessions: Arc<SessionService>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            subjects: app.subjects(),
            sessions: app.sessions(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn subjects(&self) -> Arc<SubjectService> {
        Arc::clone(&self.subjects)
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionService> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
