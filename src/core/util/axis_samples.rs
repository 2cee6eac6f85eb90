/// `count` evenly spaced values from `min` to `max`, both ends included.
///
/// The final sample is exactly `max`; a single sample is `min`.
#[must_use]
pub fn axis_samples(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![min];
    }

    let last = count.saturating_sub(1);
    let step = (max - min) / last as f64;

    (0..count)
        .map(|i| if i == last { max } else { min + i as f64 * step })
        .collect()
}
