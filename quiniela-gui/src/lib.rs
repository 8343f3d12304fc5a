pub mod config;
pub mod dashboard;
pub mod dir;
pub mod gui;
pub mod logger;
pub mod login;
pub mod register;
pub mod services;
pub mod validate;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
