//! Shared types, errors, and configuration for the currency converter.
//!
//! This crate provides common types used by the core crate:
//! - Currency codes in canonical string form
//! - Two-decimal rounding for floating-point amounts
//! - The converter-wide error type
//! - Rate table loading from config files and the environment

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::RatesConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::CurrencyCode;
