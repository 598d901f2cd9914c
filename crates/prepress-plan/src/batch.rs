//! Print-job packing
//!
//! Groups an ordered sequence of print units into contiguous batches, each
//! bounded by a hard page ceiling and nudged toward an even split. A single
//! left-to-right greedy pass; units are never reordered or dropped.

use crate::catalog::SOFT_TARGET_TOLERANCE;
use crate::types::{Batch, PlanError, PrintUnit, Result};

/// Pack units into batches, preserving order.
///
/// `spacer_pages` is the page cost inserted between adjacent units within a
/// batch (not before the first or after the last). `ceiling` is the hard
/// page limit per batch; a unit whose own page count exceeds it still gets
/// placed, alone in its own batch, since units are never split.
///
/// The batch count normally equals `ceil(total weight / ceiling)`, but
/// greedy packing under the balancing tolerance can produce an extra small
/// trailing batch for some distributions.
pub fn pack<T>(
    units: Vec<PrintUnit<T>>,
    spacer_pages: usize,
    ceiling: usize,
) -> Result<Vec<Batch<T>>> {
    if units.is_empty() {
        return Ok(Vec::new());
    }
    if ceiling == 0 {
        return Err(PlanError::Config(
            "batch page ceiling must be positive".to_string(),
        ));
    }

    let unit_pages: usize = units.iter().map(|u| u.pages).sum();
    let total_weight = unit_pages + (units.len() - 1) * spacer_pages;
    let target_batches = total_weight.div_ceil(ceiling);
    // Real-valued even-split target, not a hard cap.
    let target_per_batch = total_weight as f64 / target_batches as f64;

    let mut batches: Vec<Batch<T>> = Vec::new();
    let mut current: Vec<PrintUnit<T>> = Vec::new();
    let mut current_weight = 0usize;

    for unit in units {
        let incoming = unit.pages + if current.is_empty() { 0 } else { spacer_pages };

        let would_exceed_ceiling = current_weight + incoming > ceiling;
        let over_soft_target =
            (current_weight + incoming) as f64 > target_per_batch * SOFT_TARGET_TOLERANCE;
        // The soft split only applies while there is batch budget left to
        // spread the excess into; the last allowed batch absorbs everything
        // up to the hard ceiling.
        let have_more_batches = batches.len() + 1 < target_batches;

        if !current.is_empty() && (would_exceed_ceiling || (over_soft_target && have_more_batches))
        {
            batches.push(Batch {
                units: std::mem::take(&mut current),
                weight: current_weight,
            });
            current_weight = unit.pages;
            current.push(unit);
        } else {
            current_weight += incoming;
            current.push(unit);
        }
    }

    batches.push(Batch {
        units: current,
        weight: current_weight,
    });

    Ok(batches)
}
