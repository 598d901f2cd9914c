//! Cutting a padded document into per-signature documents

use crate::types::*;
use lopdf::Document;
use prepress_plan::SignatureLayout;
use tracing::debug;

/// Cut a document into one document per signature.
///
/// The layout must cover the document exactly; padding is the caller's
/// responsibility (see [`crate::append_blank_pages`]). A mismatch means
/// the plan and the document drifted apart, which is a bug in the calling
/// workflow, so it fails before any cutting happens.
pub fn split_into_signatures(source: &Document, layout: &SignatureLayout) -> Result<Vec<Document>> {
    let document_pages = source.get_pages().len();
    layout.verify(document_pages)?;

    let mut parts = Vec::with_capacity(layout.sizes.len());
    let mut first: u32 = 1;
    for &size in &layout.sizes {
        let last = first + size as u32 - 1;
        debug!(first, last, "extracting signature");
        parts.push(extract_pages(source, first, last)?);
        first = last + 1;
    }

    Ok(parts)
}

/// Async wrapper; the transform itself is CPU-bound.
pub async fn split_document(doc: Document, layout: SignatureLayout) -> Result<Vec<Document>> {
    tokio::task::spawn_blocking(move || split_into_signatures(&doc, &layout)).await?
}

/// Copy of `source` reduced to the 1-based page range `first..=last`.
fn extract_pages(source: &Document, first: u32, last: u32) -> Result<Document> {
    let mut doc = source.clone();
    let total = doc.get_pages().len() as u32;

    let drop: Vec<u32> = (1..=total).filter(|p| *p < first || *p > last).collect();
    if !drop.is_empty() {
        doc.delete_pages(&drop);
    }
    doc.prune_objects();

    Ok(doc)
}
