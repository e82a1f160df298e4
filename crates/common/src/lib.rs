//! Shared configuration, error handling, and response model for the ATS gateway
//!
//! This crate provides the pieces every entry point depends on:
//! - Upstream configuration resolved once at startup
//! - The fault type that surfaces as a generic 5xx
//! - The success / error response variant returned by handlers

pub mod config;
pub mod error;
pub mod response;

pub use config::{AtsConfig, Config};
pub use error::{Error, Result};
pub use response::{ApiResponse, Message};
