use std::time::Duration;

use chrono::Utc;
use shared_types::{AppError, CaseFile, FileCategory};
use uuid::Uuid;

use crate::busy::BusyGuard;

/// Case document metadata for the signed-in lawyer.
///
/// Uploads are simulated: no bytes are stored, the file appears after a
/// fixed delay.
pub struct CaseFileCabinet {
    files: Vec<CaseFile>,
    uploading: bool,
    upload_delay: Duration,
}

impl CaseFileCabinet {
    pub fn new(files: Vec<CaseFile>, upload_delay: Duration) -> Self {
        Self {
            files,
            uploading: false,
            upload_delay,
        }
    }

    pub fn files(&self) -> &[CaseFile] {
        &self.files
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Files whose name contains `query` (case-insensitive) within
    /// `category`, or every category when `None`.
    pub fn search(&self, query: &str, category: Option<FileCategory>) -> Vec<&CaseFile> {
        let needle = query.trim().to_lowercase();
        self.files
            .iter()
            .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
            .filter(|f| category.map_or(true, |c| f.category == c))
            .collect()
    }

    pub fn delete(&mut self, id: Uuid) -> Result<CaseFile, AppError> {
        let pos = self
            .files
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| AppError::not_found(format!("Case file {} not found", id)))?;
        let removed = self.files.remove(pos);
        tracing::info!(file_id = %id, name = %removed.name, "Case file deleted");
        Ok(removed)
    }

    /// Mark an upload as in progress. Returns how long it takes.
    pub fn begin_upload(&mut self, name: &str) -> Result<Duration, AppError> {
        required_name(name)?;
        self.uploading = true;
        Ok(self.upload_delay)
    }

    /// List the uploaded file first and clear the in-progress flag.
    pub fn finish_upload(
        &mut self,
        name: &str,
        category: FileCategory,
        size_bytes: u64,
    ) -> Result<CaseFile, AppError> {
        self.uploading = false;
        let name = required_name(name)?;

        let file = CaseFile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            size_bytes,
            uploaded_at: Utc::now(),
            kind: kind_from_name(name),
            category,
        };
        self.files.insert(0, file.clone());

        tracing::info!(file_id = %file.id, name = %file.name, category = file.category.label(), "Case file uploaded");
        Ok(file)
    }

    /// Wait out the upload delay, then list the new file first.
    ///
    /// Dropping the future before it completes clears the uploading flag.
    pub async fn upload(
        &mut self,
        name: &str,
        category: FileCategory,
        size_bytes: u64,
    ) -> Result<CaseFile, AppError> {
        let delay = self.begin_upload(name)?;
        let uploading = BusyGuard::new(&mut self.uploading);
        tokio::time::sleep(delay).await;
        drop(uploading);
        self.finish_upload(name, category, size_bytes)
    }
}

fn required_name(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("File name is required"));
    }
    Ok(name)
}

/// Upper-cased extension, or "PDF" when the name has none.
fn kind_from_name(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_uppercase())
        .unwrap_or_else(|| "PDF".to_string())
}
