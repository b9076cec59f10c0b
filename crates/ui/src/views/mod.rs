mod home;
mod sessions;
mod state;
mod subject_details;
mod subjects;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use sessions::SessionsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use subject_details::SubjectDetailsView;
pub use subjects::SubjectsView;
