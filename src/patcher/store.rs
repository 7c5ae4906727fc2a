use async_trait::async_trait;
use std::io;
use std::path::PathBuf;

/// Abstracts loading and flushing the target file as a line sequence
#[async_trait]
pub trait LineStore: Send + Sync {
    /// Location being patched, used for reporting
    fn location(&self) -> PathBuf;
    /// Read the whole target, split into lines with terminators kept
    async fn read_lines(&self) -> io::Result<Vec<String>>;
    /// Overwrite the target with the concatenated lines
    async fn write_lines(&self, lines: &[String]) -> io::Result<()>;
}
