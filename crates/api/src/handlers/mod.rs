pub mod admin;
pub mod auth;
pub mod catalog;
pub mod prompts;
pub mod stats;
pub mod uploads;
