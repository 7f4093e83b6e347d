pub mod logger;

/// Linear interpolation of `value` from `[src_min, src_max]` onto `[dst_min, dst_max]`.
///
/// The input is not clamped, values outside the source range extrapolate past the destination.
pub fn map_range(value: f64, src_min: f64, src_max: f64, dst_min: f64, dst_max: f64) -> f64 {
    dst_min + (value - src_min) * (dst_max - dst_min) / (src_max - src_min)
}

#[cfg(test)]
mod tests {
    use super::map_range;

    #[test]
    fn maps_endpoints_and_midpoint() {
        assert_eq!(map_range(-90.0, -90.0, 90.0, -100.0, 100.0), -100.0);
        assert_eq!(map_range(90.0, -90.0, 90.0, -100.0, 100.0), 100.0);
        assert_eq!(map_range(0.0, -90.0, 90.0, -100.0, 100.0), 0.0);
    }

    #[test]
    fn extrapolates_outside_source_range() {
        assert_eq!(map_range(180.0, -90.0, 90.0, -100.0, 100.0), 200.0);
        assert_eq!(map_range(-75.0, -50.0, 50.0, -100.0, 100.0), -150.0);
    }

    #[test]
    fn degenerate_range_is_not_finite() {
        assert!(!map_range(1.0, 5.0, 5.0, -1.0, 1.0).is_finite());
    }
}
