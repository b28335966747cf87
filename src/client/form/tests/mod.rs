mod auth;
mod parsers;
mod state;
mod user;
mod wizard;
