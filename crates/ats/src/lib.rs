//! ATS Gateway Upstream Client
//!
//! Talks to the external Applicant Tracking System:
//! - `AtsClient`: one reqwest client per process, auth headers attached to every call
//! - `PartialRecord` and the `Job` / `Application` projections of upstream data
//! - `CandidateSubmission`: the inbound candidate body and the two payloads built from it

pub mod client;
pub mod records;

pub use client::{AtsClient, Upstream};
pub use records::{
    Application, CandidateSubmission, Job, NewApplication, NewCandidate, PartialRecord,
};
