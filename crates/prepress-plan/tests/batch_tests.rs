use prepress_plan::*;

fn units(pages: &[usize]) -> Vec<PrintUnit<usize>> {
    pages
        .iter()
        .enumerate()
        .map(|(i, &p)| PrintUnit::new(i, p))
        .collect()
}

/// Concatenating the batches' unit ids must reproduce the input order.
fn flattened_ids(batches: &[Batch<usize>]) -> Vec<usize> {
    batches
        .iter()
        .flat_map(|b| b.units.iter().map(|u| u.id))
        .collect()
}

#[test]
fn test_empty_input_yields_no_batches() {
    let batches = pack(Vec::<PrintUnit<usize>>::new(), 4, 200).unwrap();
    assert!(batches.is_empty());
}

#[test]
fn test_four_signatures_split_evenly() {
    // 240 unit pages + 3 spacers of 4 = 252 total, so two batches of
    // two units each, 124 pages apiece.
    let batches = pack(units(&[60, 60, 60, 60]), 4, 200).unwrap();

    assert_eq!(batches.len(), 2);
    assert!(batches.iter().all(|b| b.weight <= 200));
    assert_eq!(batches[0].weight, 124);
    assert_eq!(batches[1].weight, 124);
    assert_eq!(flattened_ids(&batches), vec![0, 1, 2, 3]);
}

#[test]
fn test_single_oversized_unit_is_one_batch() {
    let batches = pack(units(&[500]), 4, 200).unwrap();

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].units.len(), 1);
    assert_eq!(batches[0].weight, 500);
}

#[test]
fn test_never_reorders_or_drops_units() {
    let pages = [30, 80, 45, 120, 10, 60, 90];
    let batches = pack(units(&pages), 2, 150).unwrap();

    assert_eq!(flattened_ids(&batches), vec![0, 1, 2, 3, 4, 5, 6]);

    // Every batch weight is consistent with its own contents.
    for batch in &batches {
        let expected: usize = batch.units.iter().map(|u| u.pages).sum::<usize>()
            + (batch.units.len() - 1) * 2;
        assert_eq!(batch.weight, expected);
        assert!(batch.weight <= 150);
        assert!(!batch.units.is_empty());
    }
}

#[test]
fn test_greedy_tolerance_can_add_a_trailing_batch() {
    // Total 435 + 6×2 = 447 pages wants 3 batches of ~149, but the strict
    // greedy walk under the 10% tolerance closes early and ends up with 5.
    // This shape is deliberate; the packer never rebalances retroactively.
    let batches = pack(units(&[30, 80, 45, 120, 10, 60, 90]), 2, 150).unwrap();

    assert_eq!(batches.len(), 5);
    let grouped: Vec<Vec<usize>> = batches
        .iter()
        .map(|b| b.units.iter().map(|u| u.pages).collect())
        .collect();
    assert_eq!(
        grouped,
        vec![
            vec![30, 80],
            vec![45],
            vec![120, 10],
            vec![60],
            vec![90],
        ]
    );
}

#[test]
fn test_last_allowed_batch_absorbs_the_remainder() {
    // Three units, two batches of budget: once the walk is on the final
    // allowed batch the soft target no longer splits, only the ceiling
    // does. 90 + 4 + 90 = 184 stays in one batch despite being well over
    // the 139-page soft target.
    let batches = pack(units(&[90, 90, 90]), 4, 200).unwrap();

    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].weight, 90);
    assert_eq!(batches[1].weight, 184);
}

#[test]
fn test_pack_is_idempotent() {
    let a = pack(units(&[60, 60, 60, 60]), 4, 200).unwrap();
    let b = pack(units(&[60, 60, 60, 60]), 4, 200).unwrap();
    assert_eq!(a, b);
}
