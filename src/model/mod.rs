pub mod api;
pub mod auth;
pub mod contact;
pub mod logs;
pub mod office;
pub mod planning;
pub mod stage;
pub mod stock;
pub mod user;
