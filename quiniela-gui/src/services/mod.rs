pub mod auth;
pub mod registration;
