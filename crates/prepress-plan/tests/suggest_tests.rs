use prepress_plan::*;

fn sizes(suggestion: &LayoutSuggestion) -> &[usize] {
    &suggestion.layout.sizes
}

#[test]
fn test_zero_pages_has_no_suggestions() {
    assert!(suggest_layouts(0).is_empty());
}

#[test]
fn test_exact_fit_ranks_first_for_128_pages() {
    let suggestions = suggest_layouts(128);

    let first = &suggestions[0];
    assert_eq!(sizes(first), &[32, 32, 32, 32]);
    assert_eq!(first.layout.padding, 0);
    assert_eq!(first.label, "4 × 32-page signatures");
}

#[test]
fn test_full_ranking_for_128_pages() {
    // 128 is a large document, so fallback sizes below 16 are excluded.
    let suggestions = suggest_layouts(128);
    let got: Vec<(&[usize], usize)> = suggestions
        .iter()
        .map(|s| (sizes(s), s.layout.padding))
        .collect();

    assert_eq!(
        got,
        vec![
            (&[32, 32, 32, 32][..], 0),
            (&[16, 16, 16, 16, 16, 16, 16, 16][..], 0),
            (&[44, 44, 44][..], 4),
            (&[36, 36, 36, 28][..], 8),
        ]
    );
}

#[test]
fn test_mixed_tail_for_100_pages() {
    let suggestions = suggest_layouts(100);
    assert_eq!(suggestions.len(), 5);

    // 5 × 20 is a perfect fit and wins outright; the best preferred-size
    // option is 36 + 36 + 32 with 4 blank pages.
    assert_eq!(sizes(&suggestions[0]), &[20, 20, 20, 20, 20]);
    assert_eq!(suggestions[0].layout.padding, 0);
    assert_eq!(sizes(&suggestions[1]), &[36, 36, 32]);
    assert_eq!(suggestions[1].layout.padding, 4);

    // No tail ever requires more than the padding bound.
    assert!(suggestions.iter().all(|s| s.layout.padding <= MAX_PADDING));
}

#[test]
fn test_padding_matches_size_sum() {
    for page_count in [1, 9, 37, 100, 128, 250, 999, 1536] {
        for suggestion in suggest_layouts(page_count) {
            let total: usize = suggestion.layout.sizes.iter().sum();
            assert_eq!(total - page_count, suggestion.layout.padding);
            assert!(suggestion.layout.padding <= MAX_PADDING);
        }
    }
}

#[test]
fn test_suggestions_sorted_and_unique() {
    for page_count in 1..600 {
        let suggestions = suggest_layouts(page_count);
        assert!(suggestions.len() <= MAX_SUGGESTIONS);

        let keys: Vec<(usize, usize)> = suggestions
            .iter()
            .map(|s| (s.layout.padding, s.layout.sizes.len()))
            .collect();
        assert!(
            keys.windows(2).all(|w| w[0] <= w[1]),
            "unsorted suggestions for {page_count} pages: {keys:?}"
        );

        let mut seen = std::collections::HashSet::new();
        assert!(
            suggestions.iter().all(|s| seen.insert(&s.layout.sizes)),
            "duplicate size sequence for {page_count} pages"
        );
    }
}

#[test]
fn test_suggest_is_idempotent() {
    assert_eq!(suggest_layouts(250), suggest_layouts(250));
    assert_eq!(suggest_layouts(100), suggest_layouts(100));
}

#[test]
fn test_large_documents_avoid_tiny_uniform_signatures() {
    // Above 100 pages, fallback sizes below 16 are out; only a preferred
    // size's mixed tail may dip below that.
    for suggestion in suggest_layouts(320) {
        let sizes = &suggestion.layout.sizes;
        let head = &sizes[..sizes.len() - 1];
        assert!(head.iter().all(|&s| s >= 16 || PREFERRED_SIZES.contains(&s)));
    }
}

#[test]
fn test_labels_match_layouts() {
    for suggestion in suggest_layouts(100) {
        assert_eq!(suggestion.label, suggestion.layout.to_string());
    }
}
