use crate::patcher::config::PatchConfig;
use crate::patcher::fs_store::FsLineStore;
use crate::patcher::splice::insert_payload;
use crate::patcher::types::{PatchError, PatchEvent, PatchReport, Payload};
use crate::patcher::LineStore;
use log::{debug, info, warn};
use serde_json::to_string;
use uuid::Uuid;

/// Splices a payload into the line sequence held by a store
pub struct Patcher<S>
where
    S: LineStore,
{
    store: S,
    index: usize,
    payload: Payload,
}

impl Patcher<FsLineStore> {
    /// Patcher over the file named in the config
    pub fn from_config(config: &PatchConfig) -> Self {
        Self::new(
            FsLineStore::new(config.target.clone()),
            config.index,
            config.payload.clone(),
        )
    }
}

impl<S> Patcher<S>
where
    S: LineStore,
{
    /// Create a new patcher with an injected store
    pub fn new(store: S, index: usize, payload: Payload) -> Self {
        Self {
            store,
            index,
            payload,
        }
    }

    /// Read, insert, overwrite. Nothing is written unless the insert succeeds.
    pub async fn apply(&self) -> Result<PatchReport, PatchError> {
        let target = self.store.location();

        // 1. Load
        let mut lines = self.store.read_lines().await?;
        let lines_before = lines.len();
        let digest_before = digest(&lines);
        debug!("read {} lines from {}", lines_before, target.display());

        // 2. Splice
        if let Err(e) = insert_payload(&mut lines, self.index, &self.payload) {
            warn!("not patching {}: {}", target.display(), e);
            return Err(e);
        }

        // 3. Record; serialized up front so a write is never followed by a failure
        let event = PatchEvent {
            event_id: Uuid::new_v4(),
            timestamp: chrono::Utc::now(),
            target,
            index: self.index,
            lines_before,
            lines_after: lines.len(),
            payload_bytes: self.payload.len(),
            digest_before,
            digest_after: digest(&lines),
        };
        let record = to_string(&event)?;

        // 4. Overwrite
        self.store.write_lines(&lines).await?;
        info!("{}", record);

        Ok(PatchReport { lines, event })
    }
}

/// blake3 of the concatenated lines, hex encoded
pub fn digest(lines: &[String]) -> String {
    let mut hasher = blake3::Hasher::new();
    for line in lines {
        hasher.update(line.as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
