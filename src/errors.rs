//! Unified application error type.
//! All modules (db, store, api, screens, cli) return AppError so that every
//! failure can be caught and rendered at the screen boundary.

use crate::location::LocationError;
use crate::models::event_type::EventKind;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Corrupted event record: {0}")]
    CorruptRecord(String),

    // ---------------------------
    // Access layer
    // ---------------------------
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    // ---------------------------
    // Clock actions
    // ---------------------------
    #[error("Location unavailable: {0}")]
    Location(#[from] LocationError),

    #[error("Duplicate punch: you are already clocked {0}")]
    DuplicateClock(EventKind),

    #[error("Cannot clock out: you are not in service")]
    NotClockedIn,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
