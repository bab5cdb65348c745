//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs whose remainder rounds up to 360.0 map to 0.0, so
/// the result is always a valid table index source.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let d = normalize_360(deg);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Index of the equal-width sector containing `deg`, `0..count`.
///
/// Floor semantics: a value exactly on a sector boundary belongs to the
/// following sector.
pub fn sector_index(deg: f64, count: usize) -> usize {
    let width = 360.0 / count as f64;
    ((normalize_360(deg) / width).floor() as usize).min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(360.0), 0.0);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn normalize_is_periodic() {
        for i in -50..50 {
            let a = i as f64 * 37.3 + 0.123;
            for k in -3..=3 {
                let shifted = normalize_360(a + 360.0 * k as f64);
                let base = normalize_360(a);
                assert!((0.0..360.0).contains(&shifted));
                assert!((shifted - base).abs() < 1e-9, "a={a} k={k}");
            }
        }
    }

    #[test]
    fn pm180_range() {
        assert_eq!(normalize_to_pm180(180.0), 180.0);
        assert!((normalize_to_pm180(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-190.0) - 170.0).abs() < 1e-12);
    }

    #[test]
    fn sector_boundaries_go_to_next_sector() {
        assert_eq!(sector_index(12.0, 30), 1);
        assert_eq!(sector_index(11.999_999, 30), 0);
        assert_eq!(sector_index(359.999_999, 12), 11);
        assert_eq!(sector_index(-0.5, 27), 26);
    }
}
