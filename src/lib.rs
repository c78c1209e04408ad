//! Controller for the timetable management console: caches the reference
//! collections, drives timetable generation, and renders the page regions.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod state;
pub mod ui;

pub use api::{HttpTimetableApi, TimetableApi};
pub use config::ConsoleConfig;
pub use error::AppError;
pub use services::Console;
