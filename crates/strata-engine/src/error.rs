//! Error types for strata-engine operations.

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid operating window: open {open} is after close {close}")]
    InvalidWindow { open: NaiveTime, close: NaiveTime },
}

pub type Result<T> = std::result::Result<T, EngineError>;
