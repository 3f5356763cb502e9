//! Hanan candidate generation.
//!
//! Hanan points are the grid intersections of lines passing through at least
//! one pin in both axes, excluding the pins themselves.

/// Returns the Hanan candidate points for `pins` on an `grid_size x grid_size`
/// grid, in lexicographic `(x, y)` ascending order.
///
/// Downstream logic does not depend on this order, but it is part of the
/// observable, test-relevant behaviour of the Steiner iteration driver (trial
/// order follows storage order).
pub(crate) fn collect(grid_size: usize, pins: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut col_has_pin = vec![false; grid_size];
    let mut row_has_pin = vec![false; grid_size];
    for &(x, y) in pins {
        col_has_pin[x] = true;
        row_has_pin[y] = true;
    }

    let mut candidates = Vec::new();
    for (x, &has_col) in col_has_pin.iter().enumerate() {
        if !has_col {
            continue;
        }
        for (y, &has_row) in row_has_pin.iter().enumerate() {
            if has_row && !pins.contains(&(x, y)) {
                candidates.push((x, y));
            }
        }
    }
    candidates
}
