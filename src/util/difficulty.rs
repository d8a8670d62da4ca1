/// p-norm of the given values.
pub(crate) fn norm(p: f64, values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .fold(0.0, |sum, x| sum + x.powf(p))
        .powf(p.recip())
}

/// Maps a difficulty setting (0..=10) onto the range `min..=max` with `mid`
/// as the value at 5.
pub(crate) fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid + (mid - min) * (difficulty - 5.0) / 5.0
    } else {
        mid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_endpoints() {
        assert_eq!(difficulty_range(0.0, 1800.0, 1200.0, 450.0), 1800.0);
        assert_eq!(difficulty_range(5.0, 1800.0, 1200.0, 450.0), 1200.0);
        assert_eq!(difficulty_range(10.0, 1800.0, 1200.0, 450.0), 450.0);
    }

    #[test]
    fn norm_is_max_dominated() {
        let n = norm(1.5, [3.0, 4.0]);
        assert!(n >= 4.0 && n <= 7.0);
    }
}
