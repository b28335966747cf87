//! Typed client for the backend REST API, one module per resource.

pub mod auth;
pub mod contacts;
pub mod error;
pub mod http;
pub mod logs;
pub mod office;
pub mod planning;
pub mod stages;
pub mod stock;
pub mod users;

pub use error::ApiError;
