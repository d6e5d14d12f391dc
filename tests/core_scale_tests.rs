use chart_motion::ChartError;
use chart_motion::core::{PlotMapping, Series, ValueRange, Viewport, scale_range};

#[test]
fn scale_range_scans_min_and_max() {
    let series = Series::from_values(&[12.0, -3.5, 40.25, 7.0]).expect("series");
    let range = scale_range(&series).expect("range");
    assert_eq!(range.min, -3.5);
    assert_eq!(range.max, 40.25);
    assert!(!range.is_flat());
    assert!((range.span() - 43.75).abs() <= 1e-12);
}

#[test]
fn flat_range_reports_unit_span() {
    let series = Series::from_values(&[5.0, 5.0, 5.0]).expect("series");
    let range = scale_range(&series).expect("range");
    assert!(range.is_flat());
    assert_eq!(range.span(), 1.0);
    assert_eq!(range.normalize(5.0), 0.0);
}

#[test]
fn scale_range_rejects_empty_series() {
    let series = Series::from_values(&[]).expect("empty series is constructible");
    let err = scale_range(&series).expect_err("empty series must fail");
    assert!(matches!(
        err,
        ChartError::InsufficientData {
            required: 1,
            actual: 0
        }
    ));
}

#[test]
fn value_range_including_widens_to_zero() {
    let range = ValueRange::new(10.0, 20.0)
        .and_then(|range| range.including(0.0))
        .expect("range");
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, 20.0);

    assert!(ValueRange::new(2.0, 1.0).is_err());
    assert!(ValueRange::new(f64::NAN, 1.0).is_err());
    assert!(ValueRange::new(-f64::MAX, f64::MAX).is_err());
}

#[test]
fn plot_mapping_revalidates_hand_built_range() {
    let viewport = Viewport::new(100, 100);

    let inverted = ValueRange { min: 5.0, max: 1.0 };
    let err = PlotMapping::new(inverted, viewport, 0.0, 4).expect_err("min > max");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let nan = ValueRange {
        min: f64::NAN,
        max: 1.0,
    };
    assert!(PlotMapping::new(nan, viewport, 0.0, 4).is_err());

    let overflowing = ValueRange {
        min: -f64::MAX,
        max: f64::MAX,
    };
    assert!(PlotMapping::new(overflowing, viewport, 0.0, 4).is_err());
}

#[test]
fn plot_mapping_round_trip_within_tolerance() {
    let range = ValueRange::new(10.0, 110.0).expect("range");
    let mapping = PlotMapping::new(range, Viewport::new(1000, 600), 0.2, 12).expect("mapping");

    let original = 42.5;
    let y = mapping.value_to_y(original);
    let recovered = mapping.y_to_value(y);
    assert!((recovered - original).abs() <= 1e-9);

    assert_eq!(mapping.index_to_x(0), 0.0);
    assert!((mapping.index_to_x(11) - 1000.0).abs() <= 1e-9);
    assert!((mapping.value_to_y(110.0) - 60.0).abs() <= 1e-9);
    assert!((mapping.value_to_y(10.0) - 540.0).abs() <= 1e-9);
    assert!((mapping.bottom_y() - 540.0).abs() <= 1e-9);
}

#[test]
fn plot_mapping_rejects_invalid_geometry() {
    let range = ValueRange::new(0.0, 1.0).expect("range");

    let err = PlotMapping::new(range, Viewport::new(0, 100), 0.0, 4).expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 100 }));

    let err = PlotMapping::new(range, Viewport::new(100, 100), 1.0, 4).expect_err("inset 1");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = PlotMapping::new(range, Viewport::new(100, 100), -0.1, 4).expect_err("inset < 0");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = PlotMapping::new(range, Viewport::new(100, 100), 0.1, 1).expect_err("one sample");
    assert!(matches!(err, ChartError::InsufficientData { required: 2, .. }));
}
