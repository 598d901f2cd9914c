//! Combining imposed signatures into print jobs
//!
//! A combined job interleaves spacer sheets between signatures so that a
//! single double-sided print run stays collated: the spacer is inserted
//! twice per gap, filling a full sheet.

use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::info;

/// Number of spacer copies inserted between adjacent units. Two copies of
/// the one-page spacer fill both sides of a sheet, keeping the spacer cost
/// even.
pub const SPACER_COPIES: usize = 2;

/// Merge print units in order, inserting the spacer `copies` times between
/// adjacent units (never before the first or after the last).
pub fn merge_with_spacers(
    units: Vec<Document>,
    spacer: &Document,
    copies: usize,
) -> Result<Document> {
    if units.is_empty() {
        return Err(PressError::NoPages);
    }

    let last = units.len() - 1;
    let mut sequence = Vec::new();
    for (i, unit) in units.into_iter().enumerate() {
        sequence.push(unit);
        if i < last {
            for _ in 0..copies {
                sequence.push(spacer.clone());
            }
        }
    }

    merge_documents(sequence)
}

/// Async wrapper; the merge itself is CPU-bound.
pub async fn combine_documents(
    units: Vec<Document>,
    spacer: Document,
    copies: usize,
) -> Result<Document> {
    tokio::task::spawn_blocking(move || merge_with_spacers(units, &spacer, copies)).await?
}

/// Concatenate documents into one, renumbering objects and rebuilding the
/// page tree. Page order follows the input order.
fn merge_documents(documents: Vec<Document>) -> Result<Document> {
    let mut merged = Document::with_version("1.7");
    let mut next_id = 1u32;
    let mut page_refs: Vec<ObjectId> = Vec::new();

    for mut doc in documents {
        doc.renumber_objects_with(next_id);
        next_id = doc.max_id + 1;
        page_refs.extend(doc.get_pages().into_values());
        merged.objects.extend(doc.objects);
    }

    if page_refs.is_empty() {
        return Err(PressError::NoPages);
    }

    merged.max_id = next_id - 1;
    let pages_tree_id = merged.new_object_id();

    for &page_id in &page_refs {
        let page = merged.get_object_mut(page_id)?.as_dict_mut()?;
        page.set("Parent", Object::Reference(pages_tree_id));
    }

    let kids: Vec<Object> = page_refs.iter().map(|&id| Object::Reference(id)).collect();
    let count = kids.len() as i64;
    merged.objects.insert(
        pages_tree_id,
        Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(count)),
        ])),
    );

    let catalog_id = merged.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));
    merged.trailer.set("Root", catalog_id);

    // The source catalogs and page trees are now unreferenced.
    merged.prune_objects();

    info!(pages = count, "merged combined job");
    Ok(merged)
}
