//! Entry point integration tests
//!
//! Drives the full router against a wiremock ATS upstream.

#![allow(dead_code)]

mod applications;
mod auth;
mod candidates;
mod common;
mod jobs;
