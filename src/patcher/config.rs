use crate::patcher::payload::{INSERT_INDEX, OCCURRENCES_CARD, TARGET_PATH};
use crate::patcher::types::Payload;
use std::path::PathBuf;

/// Where to splice and what. Defaults to the fixed occurrences-card patch.
#[derive(Debug, Clone)]
pub struct PatchConfig {
    pub target: PathBuf,
    pub index: usize,
    pub payload: Payload,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from(TARGET_PATH),
            index: INSERT_INDEX,
            payload: OCCURRENCES_CARD,
        }
    }
}
