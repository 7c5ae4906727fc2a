use crate::patcher::LineStore;
use crate::patcher::splice::{join_lines, split_lines};
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;

/// Line store over a single file on disk. Writes truncate in place; there is no
/// temp file and no rename, so a crash mid-write can leave the file short.
pub struct FsLineStore {
    path: PathBuf,
}

impl FsLineStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LineStore for FsLineStore {
    fn location(&self) -> PathBuf {
        self.path.clone()
    }

    async fn read_lines(&self) -> io::Result<Vec<String>> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(split_lines(&text))
    }

    async fn write_lines(&self, lines: &[String]) -> io::Result<()> {
        tokio::fs::write(&self.path, join_lines(lines)).await
    }
}
