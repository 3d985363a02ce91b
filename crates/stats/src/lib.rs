//! Statistical helper functions for hydrocast.

use std::cmp::Ordering;

/// Arithmetic mean of a slice. Returns `None` if empty.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: f64 = data.iter().sum();
    Some(sum / data.len() as f64)
}

/// Index of the largest value, ignoring NaN.
///
/// Ties resolve to the first occurrence. Returns `None` if the slice is
/// empty or all NaN.
pub fn argmax(data: &[f64]) -> Option<usize> {
    extreme_index(data, Ordering::Greater)
}

/// Index of the smallest value, ignoring NaN.
///
/// Ties resolve to the first occurrence. Returns `None` if the slice is
/// empty or all NaN.
pub fn argmin(data: &[f64]) -> Option<usize> {
    extreme_index(data, Ordering::Less)
}

fn extreme_index(data: &[f64], wanted: Ordering) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &x) in data.iter().enumerate() {
        if x.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if x.partial_cmp(&b) != Some(wanted) => {}
            _ => best = Some((i, x)),
        }
    }
    best.map(|(i, _)| i)
}
