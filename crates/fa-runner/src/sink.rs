//! Output Sink — writes whole documents into the output directory.
//!
//! Each write goes to a temporary file in the same directory and is renamed
//! over the target, so a failed run never leaves a half-written document.

use crate::RunnerError;
use fa_core::document::Document;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct OutputSink {
    dir: PathBuf,
}

impl OutputSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the directory if absent and return its absolute path.
    pub async fn ensure_dir(&self) -> Result<PathBuf, RunnerError> {
        let map_err = |source| RunnerError::OutputDir {
            path: self.dir.clone(),
            source,
        };
        tokio::fs::create_dir_all(&self.dir).await.map_err(map_err)?;
        let abs = tokio::fs::canonicalize(&self.dir).await.map_err(map_err)?;
        Ok(abs)
    }

    /// Target path for a document.
    pub fn path_for(&self, document: &Document) -> PathBuf {
        self.dir.join(&document.filename)
    }

    /// Write the document, replacing any previous file of the same name.
    pub async fn write(&self, document: &Document) -> Result<PathBuf, RunnerError> {
        let target = self.path_for(document);
        let tmp = self
            .dir
            .join(format!(".{}.{}.tmp", document.filename, Uuid::new_v4().simple()));

        if let Err(source) = write_file(&tmp, document.content.as_bytes()).await {
            remove_quietly(&tmp).await;
            return Err(RunnerError::Write {
                path: target,
                source,
            });
        }

        if let Err(source) = tokio::fs::rename(&tmp, &target).await {
            remove_quietly(&tmp).await;
            return Err(RunnerError::Write {
                path: target,
                source,
            });
        }

        tracing::info!(path = %target.display(), bytes = document.byte_len(), "document written");
        Ok(target)
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    Ok(())
}

async fn remove_quietly(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), "failed to remove temp file: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fa_core::label::Label;

    fn doc(filename: &str, content: &str) -> Document {
        Document {
            label: Label::Generic,
            filename: filename.into(),
            content: content.into(),
        }
    }

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn creates_nested_dir() {
        let root = tempfile::tempdir().unwrap();
        let sink = OutputSink::new(root.path().join("a/b/sandbox"));
        let abs = sink.ensure_dir().await.unwrap();
        assert!(abs.is_absolute());
        assert!(abs.is_dir());
        // Idempotent.
        sink.ensure_dir().await.unwrap();
    }

    #[tokio::test]
    async fn writes_utf8_and_overwrites() {
        let root = tempfile::tempdir().unwrap();
        let sink = OutputSink::new(root.path());

        let path = sink.write(&doc("task_analysis.md", "first ✅ café")).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first ✅ café");

        sink.write(&doc("task_analysis.md", "second")).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert_eq!(entries(root.path()), vec!["task_analysis.md"]);
    }

    #[tokio::test]
    async fn failed_write_leaves_nothing_behind() {
        let root = tempfile::tempdir().unwrap();
        // A directory squatting on the target name makes the rename fail.
        std::fs::create_dir(root.path().join("banoffee.md")).unwrap();
        std::fs::write(root.path().join("banoffee.md").join("keep"), "x").unwrap();

        let sink = OutputSink::new(root.path());
        let err = sink.write(&doc("banoffee.md", "pie")).await.unwrap_err();
        assert!(matches!(err, RunnerError::Write { .. }));
        assert_eq!(entries(root.path()), vec!["banoffee.md"]);
    }

    #[tokio::test]
    async fn missing_dir_is_a_write_error() {
        let root = tempfile::tempdir().unwrap();
        let sink = OutputSink::new(root.path().join("absent"));
        assert!(matches!(
            sink.write(&doc("x.md", "x")).await,
            Err(RunnerError::Write { .. })
        ));
    }
}
