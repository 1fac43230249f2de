//! Canonical seed order generation.

use crate::errors::{BracketError, BracketResult};

/// Smallest power of two >= `entrant_count`, never below 2
pub fn bracket_size(entrant_count: usize) -> usize {
    entrant_count.max(2).next_power_of_two()
}

/// Canonical draw order for a bracket of `size` slots.
///
/// Built by doubling from `[1, 2]`: every seed `s` of the half-size order
/// expands in place into `s` and its partner `size + 1 - s`, with the
/// partner leading on odd positions. Seed 1 stays first, seed 2 stays last,
/// and each adjacent pair sums to `size + 1`.
///
/// ```
/// use bracket_engine::seeding::seed_order;
///
/// assert_eq!(seed_order(8).unwrap(), vec![1, 8, 5, 4, 3, 6, 7, 2]);
/// ```
///
/// # Errors
///
/// `InvalidSize` when `size` is below 2 or not a power of two.
pub fn seed_order(size: usize) -> BracketResult<Vec<u32>> {
    if size < 2 || !size.is_power_of_two() {
        return Err(BracketError::InvalidSize(size));
    }

    let mut order = vec![1u32, 2];
    while order.len() < size {
        let width = order.len() as u32 * 2;
        order = order
            .iter()
            .enumerate()
            .flat_map(|(idx, &seed)| {
                let partner = width + 1 - seed;
                if idx % 2 == 0 {
                    [seed, partner]
                } else {
                    [partner, seed]
                }
            })
            .collect();
    }

    Ok(order)
}
