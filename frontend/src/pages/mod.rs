pub mod dashboards;
pub mod home;
pub mod internships;
pub mod login;
pub mod register;

pub use dashboards::{AdminDashboardPage, MentorDashboardPage, StudentDashboardPage};
pub use home::HomePage;
pub use internships::{InternshipDetailPage, PostInternshipPage};
pub use login::LoginPage;
pub use register::RegisterPage;
