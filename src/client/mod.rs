pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod form;
pub mod router;
pub mod routes;
pub mod stage;
pub mod stats;
pub mod store;

pub use app::App;
