mod auth;
pub mod components;
mod courses;
mod dashboard;
mod document;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth::{LoginRedirect, LoginView, RegisterView};
pub use courses::CoursesView;
pub use dashboard::CourseDashboardView;
pub use document::DocumentView;
pub use state::{ViewError, ViewState, view_state_from_resource};
