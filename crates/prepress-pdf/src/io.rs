//! Document file I/O

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Load a PDF document from disk.
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Save a document to disk.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, PressError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Read the page count of a PDF file.
pub async fn page_count(path: impl AsRef<Path>) -> Result<usize> {
    let doc = load_pdf(path).await?;
    Ok(doc.get_pages().len())
}
