//! Page components

mod about;
mod auth;
mod dashboard;
mod home;
mod team;
mod user;

pub use about::{AboutPage, ImpactPage, ProjectPage, TechnologyPage};
pub use auth::AuthPage;
pub use dashboard::{ChatPage, DashboardPage};
pub use home::HomePage;
pub use team::TeamPage;
pub use user::UserPage;
