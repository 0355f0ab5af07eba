pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod validation;
