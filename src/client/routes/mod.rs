pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod management;
pub mod not_found;
pub mod planning_detail;

pub use admin::Users;
pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use management::Management;
pub use not_found::NotFound;
pub use planning_detail::PlanningDetail;
