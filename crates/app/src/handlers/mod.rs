//! Entry point handlers, one per upstream operation

pub mod applications;
pub mod candidates;
pub mod jobs;
