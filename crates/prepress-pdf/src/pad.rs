//! Blank-page padding
//!
//! Signature plans may require appending blank pages so the source divides
//! exactly into the planned signature sizes. Blanks go at the end of the
//! document and inherit the final page's media box, so the padded tail
//! folds and cuts like the rest of the book.

use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use tracing::debug;

/// Append `blanks` blank pages to the end of a document.
pub fn append_blank_pages(mut doc: Document, blanks: usize) -> Result<Document> {
    if blanks == 0 {
        return Ok(doc);
    }

    let pages = doc.get_pages();
    let last_page_id = *pages.values().next_back().ok_or(PressError::NoPages)?;
    let media_box = match doc.get_dictionary(last_page_id)?.get(b"MediaBox")? {
        Object::Array(arr) => arr.clone(),
        _ => return Err(PressError::Invalid("MediaBox is not an array".to_string())),
    };

    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let pages_id = doc.get_dictionary(catalog_id)?.get(b"Pages")?.as_reference()?;

    let mut kids = match doc.get_dictionary(pages_id)?.get(b"Kids") {
        Ok(Object::Array(arr)) => arr.clone(),
        _ => {
            return Err(PressError::Invalid(
                "Pages Kids array not found".to_string(),
            ));
        }
    };

    for _ in 0..blanks {
        let page_id = blank_page(&mut doc, &media_box, pages_id);
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    let mut pages_dict = doc.get_dictionary(pages_id)?.clone();
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", Object::Integer(count));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    debug!(blanks, "appended blank pages");
    Ok(doc)
}

/// Async wrapper; the transform itself is CPU-bound.
pub async fn pad_document(doc: Document, blanks: usize) -> Result<Document> {
    if blanks == 0 {
        return Ok(doc);
    }
    tokio::task::spawn_blocking(move || append_blank_pages(doc, blanks)).await?
}

/// Create an empty page sharing the given media box.
fn blank_page(doc: &mut Document, media_box: &[Object], parent_id: ObjectId) -> ObjectId {
    let content_id = doc.add_object(Stream::new(Dictionary::new(), Vec::new()));

    let mut page = Dictionary::new();
    page.set("Type", Object::Name(b"Page".to_vec()));
    page.set("Parent", Object::Reference(parent_id));
    page.set("MediaBox", Object::Array(media_box.to_vec()));
    page.set("Contents", Object::Reference(content_id));
    page.set("Resources", Object::Dictionary(Dictionary::new()));

    doc.add_object(page)
}
