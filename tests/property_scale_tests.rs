use histogram_chart::core::LinearScale;
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (0.0, 2048.0))
            .expect("valid scale");

        let px = scale.map(value);
        let recovered = scale.invert(px);

        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }

    #[test]
    fn width_scale_endpoints_hit_range_ends(
        domain_end in 0.001f64..1_000_000.0,
        width in 1u32..4096
    ) {
        let scale = LinearScale::new((0.0, domain_end), (0.0, f64::from(width)))
            .expect("valid scale")
            .rounded();

        prop_assert_eq!(scale.map(0.0), 0.0);
        prop_assert_eq!(scale.map(domain_end), f64::from(width));
    }

    #[test]
    fn height_scale_is_monotonic_decreasing(
        max_count in 1usize..10_000,
        height in 1u32..4096,
        a in 0usize..10_000,
        b in 0usize..10_000
    ) {
        let scale = LinearScale::new((0.0, max_count as f64), (f64::from(height), 0.0))
            .expect("valid scale");
        let (low, high) = (a.min(b).min(max_count), a.max(b).min(max_count));

        prop_assert!(scale.map(low as f64) >= scale.map(high as f64));
    }
}
