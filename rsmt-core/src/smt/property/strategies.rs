//! Strategy builders for [`crate::Smt`] property-based tests.

use std::collections::BTreeSet;

use proptest::prelude::*;

/// Minimum grid side generated by [`pin_set_strategy`].
const MIN_GRID: usize = 2;
/// Maximum grid side generated by [`pin_set_strategy`].
const MAX_GRID: usize = 9;

/// Generates `(grid_size, pins)` fixtures: a square grid side in
/// `[2, 9]` and between two and six distinct in-range pins.
///
/// Pins are deduplicated via a `BTreeSet` so every generated fixture
/// satisfies the distinct-coordinates precondition active points must
/// uphold, and the resulting order is deterministic for a given generated
/// set.
pub(super) fn pin_set_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (MIN_GRID..=MAX_GRID).prop_flat_map(|grid_size| {
        let coord = 0..grid_size;
        proptest::collection::vec((coord.clone(), coord), 2..=6).prop_map(move |raw| {
            let pins: BTreeSet<(usize, usize)> = raw.into_iter().collect();
            (grid_size, pins.into_iter().collect())
        })
    })
}
