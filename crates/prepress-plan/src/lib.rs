//! Planning logic for signature-based booklet printing.
//!
//! Two independent planners:
//! 1. [`suggest_layouts`] divides a page count into signatures from a fixed
//!    size catalog, bounding wasted blank pages.
//! 2. [`pack`] groups already-produced print units into size-bounded,
//!    roughly balanced print jobs with spacer pages between units.
//!
//! Both are pure computations over in-memory data; reading page counts and
//! producing the actual files is the caller's business.

mod batch;
mod catalog;
mod signature;
mod types;

pub use batch::pack;
pub use catalog::*;
pub use signature::{single_signature, suggest_layouts};
pub use types::*;
