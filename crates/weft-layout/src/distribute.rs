#![forbid(unsafe_code)]

//! Weighted space distribution with exact sum conservation.

/// Split `total` cells across `weights` proportionally, using the largest
/// remainder method so the result always sums to exactly `total`.
///
/// Each allocation is either the floor or the ceiling of its exact
/// proportional share; ties between equal remainders break toward the
/// smaller index, keeping the output deterministic.
///
/// All-zero weights (or an empty slice) allocate nothing.
///
/// # Example
///
/// ```
/// use weft_layout::distribute_weighted;
///
/// assert_eq!(distribute_weighted(90, &[1, 2]), vec![30, 60]);
/// assert_eq!(distribute_weighted(10, &[1, 1, 1]), vec![4, 3, 3]);
/// assert_eq!(distribute_weighted(10, &[1, 1, 1]).iter().sum::<u16>(), 10);
/// ```
pub fn distribute_weighted(total: u16, weights: &[u16]) -> Vec<u16> {
    let n = weights.len();
    if n == 0 {
        return Vec::new();
    }
    let weight_sum: u64 = weights.iter().map(|&w| w as u64).sum();
    if weight_sum == 0 {
        return vec![0; n];
    }

    let mut sizes = Vec::with_capacity(n);
    let mut remainders: Vec<(usize, u64)> = Vec::with_capacity(n);
    let mut floor_sum: u64 = 0;

    for (i, &w) in weights.iter().enumerate() {
        let numerator = total as u64 * w as u64;
        let floor = numerator / weight_sum;
        sizes.push(floor as u16);
        floor_sum += floor;
        remainders.push((i, numerator % weight_sum));
    }

    // Flooring leaves at most n-1 cells undistributed; award them to the
    // largest remainders, smaller index first on ties.
    let deficit = (total as u64 - floor_sum) as usize;
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for &(i, _) in remainders.iter().take(deficit) {
        sizes[i] += 1;
    }

    sizes
}
