//! Stage registry and the pure logic behind the per-stage assign/submit
//! lifecycle.

pub mod config;
pub mod form;

#[cfg(test)]
mod tests;
