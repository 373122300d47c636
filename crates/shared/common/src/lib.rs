//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified application error type
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
