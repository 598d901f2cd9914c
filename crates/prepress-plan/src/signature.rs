//! Signature layout suggestion
//!
//! Divides a page count into signatures from the size catalog. Preferred
//! sizes (32, 36) are tried first, each yielding up to two candidates when
//! the document does not divide evenly: round up to one more uniform
//! signature, or keep the full signatures and close with a single smaller
//! tail. Every other catalog size is tried as a uniform fallback. All
//! candidates are collected first, then deduplicated, ranked, and capped.

use std::collections::HashSet;

use crate::catalog::{
    MAX_PADDING, MAX_SIGNATURES, MAX_SUGGESTIONS, PREFERRED_SIZES, SIGNATURE_CATALOG,
    min_signature_size,
};
use crate::types::{LayoutSuggestion, SignatureLayout};

/// Suggest signature layouts for a document, best first.
///
/// Returns at most five suggestions, ranked by least padding and then by
/// fewest signatures. An empty result means no layout fits the policy
/// bounds; callers must treat that as a hard stop, never pick an
/// out-of-policy layout themselves.
pub fn suggest_layouts(page_count: usize) -> Vec<LayoutSuggestion> {
    if page_count == 0 {
        return Vec::new();
    }

    let mut candidates = Vec::new();

    for &size in &PREFERRED_SIZES {
        candidates.extend(preferred_candidates(page_count, size));
    }

    let min_size = min_signature_size(page_count);
    for &size in SIGNATURE_CATALOG
        .iter()
        .filter(|&&s| !PREFERRED_SIZES.contains(&s) && s >= min_size)
    {
        candidates.extend(fallback_candidate(page_count, size));
    }

    rank(candidates)
}

/// Layout for small documents: one signature padded to the next multiple
/// of 4. Bypasses suggestion ranking entirely; whether a document counts
/// as small is the caller's policy.
pub fn single_signature(page_count: usize) -> SignatureLayout {
    let total = page_count.div_ceil(4) * 4;
    layout(vec![total], page_count)
}

/// Candidates for a preferred size: uniform fit, round-up, and mixed tail.
fn preferred_candidates(page_count: usize, size: usize) -> Vec<SignatureLayout> {
    let full = page_count / size;
    let remainder = page_count % size;

    if remainder == 0 {
        return vec![layout(vec![size; full], page_count)];
    }

    let mut out = Vec::new();

    // Round up: one extra uniform signature, padding the shortfall.
    if size - remainder <= MAX_PADDING {
        out.push(layout(vec![size; full + 1], page_count));
    }

    // Mixed tail: keep the full signatures, close with the largest smaller
    // catalog size that covers the remainder within the padding bound.
    if let Some(tail) = mixed_tail_size(size, remainder) {
        let mut sizes = vec![size; full];
        sizes.push(tail);
        out.push(layout(sizes, page_count));
    }

    out
}

/// Uniform candidate for a non-preferred size. No mixed tail here; odd
/// remainders fall through to the preferred sizes' tail handling.
fn fallback_candidate(page_count: usize, size: usize) -> Option<SignatureLayout> {
    let full = page_count / size;
    let remainder = page_count % size;

    if full > MAX_SIGNATURES {
        return None;
    }

    if remainder == 0 {
        return Some(layout(vec![size; full], page_count));
    }

    let padding = size - remainder;
    if padding <= MAX_PADDING && full + 1 <= MAX_SIGNATURES {
        return Some(layout(vec![size; full + 1], page_count));
    }

    None
}

/// Largest catalog size below `size` that holds `remainder` pages within
/// the padding bound. Smaller fits are not considered once one matches.
fn mixed_tail_size(size: usize, remainder: usize) -> Option<usize> {
    SIGNATURE_CATALOG
        .iter()
        .rev()
        .filter(|&&tail| tail < size)
        .find(|&&tail| remainder <= tail && tail - remainder <= MAX_PADDING)
        .copied()
}

/// Dedupe by exact size sequence, sort by (padding, signature count), cap.
fn rank(candidates: Vec<SignatureLayout>) -> Vec<LayoutSuggestion> {
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    let mut unique: Vec<LayoutSuggestion> = candidates
        .into_iter()
        .filter(|c| seen.insert(c.sizes.clone()))
        .map(LayoutSuggestion::new)
        .collect();

    unique.sort_by_key(LayoutSuggestion::rank_key);
    unique.truncate(MAX_SUGGESTIONS);
    unique
}

/// Internal constructor; callers guarantee the sizes cover the page count.
fn layout(sizes: Vec<usize>, page_count: usize) -> SignatureLayout {
    let total: usize = sizes.iter().sum();
    debug_assert!(total >= page_count);
    SignatureLayout {
        padding: total - page_count,
        sizes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_tail_skips_overpadded_sizes() {
        // Remainder 4 under a 32-page signature: 28..16 all pad too much,
        // 12 is the first within bounds.
        assert_eq!(mixed_tail_size(32, 4), Some(12));
        // Remainder 28 fits a 28-page tail exactly.
        assert_eq!(mixed_tail_size(32, 28), Some(28));
        // Remainder 5: the 12-page tail pads 7, first within bounds.
        assert_eq!(mixed_tail_size(32, 5), Some(12));
    }

    #[test]
    fn mixed_tail_requires_smaller_size() {
        // No catalog size below 4 exists.
        assert_eq!(mixed_tail_size(4, 3), None);
    }

    #[test]
    fn fallback_respects_signature_cap() {
        // 500 pages in 8-page signatures would need 62 full signatures.
        assert_eq!(fallback_candidate(500, 8), None);
    }

    #[test]
    fn small_document_pads_to_multiple_of_four() {
        assert_eq!(single_signature(13).sizes, vec![16]);
        assert_eq!(single_signature(13).padding, 3);
        assert_eq!(single_signature(16).sizes, vec![16]);
        assert_eq!(single_signature(16).padding, 0);
    }
}
