use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Lines of the target file, each carrying its own terminator where present
pub type LineSequence = Vec<String>;

/// Immutable markup fragment spliced in as a single sequence element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(&'static str);

impl Payload {
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Record of a completed patch, logged as one JSON line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchEvent {
    pub event_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub target: PathBuf,
    pub index: usize,
    pub lines_before: usize,
    pub lines_after: usize,
    pub payload_bytes: usize,
    /// blake3 of the file content as read
    pub digest_before: String,
    /// blake3 of the file content as written
    pub digest_after: String,
}

/// What `Patcher::apply` hands back on success
#[derive(Debug, Clone)]
pub struct PatchReport {
    pub lines: LineSequence,
    pub event: PatchEvent,
}

/// Errors returned by the patch entrypoint
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Insertion index {index} is past the end of a {len}-line file")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
