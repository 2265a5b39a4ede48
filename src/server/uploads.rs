use crate::{Error, Result, analysis::FoodImage};
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::debug;

/// Directory where uploaded photos are staged while a submission runs.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

/// A staged photo; the file is removed when this is dropped.
#[derive(Debug)]
pub struct StagedUpload {
    file: NamedTempFile,
}

impl UploadStore {
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        debug!("Staging uploads in {}", dir.display());
        Ok(Self { dir })
    }

    pub async fn stage(&self, image: &FoodImage) -> Result<StagedUpload> {
        let dir = self.dir.clone();
        let bytes = image.as_bytes().to_vec();

        tokio::task::spawn_blocking(move || -> Result<StagedUpload> {
            let mut file = tempfile::Builder::new()
                .prefix("upload-")
                .suffix(".jpg")
                .tempfile_in(&dir)?;
            file.write_all(&bytes)?;
            file.flush()?;
            Ok(StagedUpload { file })
        })
        .await
        .map_err(|e| Error::internal(format!("Upload staging task failed: {}", e)))?
    }
}

impl StagedUpload {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
