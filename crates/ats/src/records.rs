//! Partial records and projections
//!
//! Upstream and inbound data are treated as JSON objects whose every field is
//! optional. Projections pick a fixed set of fields and fill the gaps with
//! `null`; values are passed through as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object with no required fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialRecord(Map<String, Value>);

impl PartialRecord {
    /// Value of `key`, or `null` when absent
    pub fn field(&self, key: &str) -> Value {
        self.0.get(key).cloned().unwrap_or(Value::Null)
    }

    /// Decode the array under `key` as records. Absent means empty.
    pub fn records(&self, key: &str) -> serde_json::Result<Vec<PartialRecord>> {
        match self.0.get(key) {
            Some(value) => Vec::<PartialRecord>::deserialize(value),
            None => Ok(Vec::new()),
        }
    }
}

impl From<Map<String, Value>> for PartialRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Job as exposed to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: Value,
    pub title: Value,
    pub location: Value,
    pub status: Value,
    pub external_url: Value,
}

impl Job {
    pub fn project(record: &PartialRecord) -> Self {
        Self {
            id: record.field("id"),
            title: record.field("title"),
            location: record.field("location"),
            status: record.field("status"),
            external_url: record.field("external_url"),
        }
    }
}

/// Application as exposed to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Value,
    pub candidate_name: Value,
    pub email: Value,
    pub status: Value,
}

impl Application {
    pub fn project(record: &PartialRecord) -> Self {
        Self {
            id: record.field("id"),
            candidate_name: record.field("candidate_name"),
            email: record.field("email"),
            status: record.field("status"),
        }
    }
}

/// Candidate payload sent to `POST /candidates`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCandidate {
    pub name: Value,
    pub email: Value,
    pub phone: Value,
    pub resume_url: Value,
}

/// Application payload sent to `POST /applications`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewApplication {
    pub job_id: Value,
}

/// Inbound body of the candidate creation entry point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSubmission(PartialRecord);

impl CandidateSubmission {
    /// Parse a request body. An empty body is the empty object.
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map(Self)
    }

    pub fn to_candidate(&self) -> NewCandidate {
        NewCandidate {
            name: self.0.field("name"),
            email: self.0.field("email"),
            phone: self.0.field("phone"),
            resume_url: self.0.field("resume_url"),
        }
    }

    /// Only `job_id` is forwarded; the created candidate's id is not part of
    /// this payload.
    pub fn to_application(&self) -> NewApplication {
        NewApplication {
            job_id: self.0.field("job_id"),
        }
    }
}
