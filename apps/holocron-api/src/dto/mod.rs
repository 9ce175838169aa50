//! Request and response bodies

pub mod health;
pub mod planet;
