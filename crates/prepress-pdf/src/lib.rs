//! PDF collaborators for the signature prepress workflow.
//!
//! The planning logic in `prepress-plan` only emits plans; this crate turns
//! them into documents: counting pages, padding with blanks, cutting a
//! padded source into per-signature files, merging imposed signatures with
//! spacer sheets, and driving an external imposition tool.

mod combine;
mod imposer;
mod io;
mod pad;
mod split;
mod types;

pub use combine::{SPACER_COPIES, combine_documents, merge_with_spacers};
pub use imposer::{CommandImposer, Imposer};
pub use io::{load_pdf, page_count, save_pdf};
pub use pad::{append_blank_pages, pad_document};
pub use split::{split_document, split_into_signatures};
pub use types::*;
