//! Policy constants for signature planning.
//!
//! Valid signature sizes are a closed domain constant: they correspond to
//! what a long-arm stapler and folding bone can physically handle, so they
//! are an explicit ordered table rather than anything computed.

/// Allowed signature sizes, smallest first. All multiples of 4.
pub const SIGNATURE_CATALOG: [usize; 12] = [4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48];

/// Sizes tried first when suggesting layouts. Best for stapling.
pub const PREFERRED_SIZES: [usize; 2] = [32, 36];

/// Never suggest a layout wasting more blank pages than this.
pub const MAX_PADDING: usize = 8;

/// Upper bound on the number of signatures a suggestion may use.
pub const MAX_SIGNATURES: usize = 40;

/// Documents above this page count should not use tiny signatures.
pub const LARGE_DOCUMENT_PAGES: usize = 100;

/// Documents at or below this page count fit a single signature.
pub const SMALL_DOCUMENT_PAGES: usize = 16;

/// Maximum number of ranked suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Default hard page ceiling for a combined print job.
pub const DEFAULT_BATCH_CEILING: usize = 200;

/// Soft balancing tolerance over the even-split target when packing.
pub const SOFT_TARGET_TOLERANCE: f64 = 1.10;

/// Smallest signature size considered for fallback suggestions.
pub fn min_signature_size(page_count: usize) -> usize {
    if page_count > LARGE_DOCUMENT_PAGES {
        16
    } else {
        8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_multiples_of_four() {
        assert!(SIGNATURE_CATALOG.windows(2).all(|w| w[0] < w[1]));
        assert!(SIGNATURE_CATALOG.iter().all(|s| s % 4 == 0));
    }

    #[test]
    fn min_size_grows_with_document() {
        assert_eq!(min_signature_size(100), 8);
        assert_eq!(min_signature_size(101), 16);
    }
}
