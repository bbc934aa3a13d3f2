//! Domain identifiers.
//!
//! A `JobId` is opaque to clients: the registry renders its internal counter
//! in decimal ("1", "2", ...), but clients may send any string back when
//! polling, so the type itself carries no format guarantee.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a submitted proof job.
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Build the id for the `seq`-th allocation.
    pub fn from_seq(seq: u64) -> Self {
        Self(seq.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
