use chart_motion::ChartError;
use chart_motion::core::{Series, Viewport, project_bars};

#[test]
fn bars_are_anchored_at_zero_line() {
    let series = Series::from_values(&[10.0, -5.0, 20.0]).expect("series");
    let bars = project_bars(&series, Viewport::new(300, 100), 0.2).expect("project");
    assert_eq!(bars.len(), 3);

    assert!((bars[0].x - 10.0).abs() <= 1e-9);
    assert!((bars[0].width - 80.0).abs() <= 1e-9);
    assert!((bars[0].y - 40.0).abs() <= 1e-9);
    assert!((bars[0].height - 40.0).abs() <= 1e-9);
    assert!(!bars[0].negative);

    assert!((bars[1].x - 110.0).abs() <= 1e-9);
    assert!((bars[1].y - 80.0).abs() <= 1e-9);
    assert!((bars[1].height - 20.0).abs() <= 1e-9);
    assert!(bars[1].negative);

    assert!((bars[2].x - 210.0).abs() <= 1e-9);
    assert!((bars[2].y - 0.0).abs() <= 1e-9);
    assert!((bars[2].height - 80.0).abs() <= 1e-9);
}

#[test]
fn single_bar_is_projected() {
    let series = Series::from_values(&[42.0]).expect("series");
    let bars = project_bars(&series, Viewport::new(50, 200), 0.0).expect("project");
    assert_eq!(bars.len(), 1);
    assert!((bars[0].width - 50.0).abs() <= 1e-9);
    assert!((bars[0].height - 200.0).abs() <= 1e-9);
}

#[test]
fn all_zero_series_projects_empty_bars() {
    let series = Series::from_values(&[0.0, 0.0]).expect("series");
    let bars = project_bars(&series, Viewport::new(100, 100), 0.1).expect("project");
    for bar in &bars {
        assert_eq!(bar.height, 0.0);
        assert!(bar.y.is_finite());
    }
}

#[test]
fn bars_reject_empty_series_and_bad_gap() {
    let empty = Series::from_values(&[]).expect("series");
    let err = project_bars(&empty, Viewport::new(100, 100), 0.1).expect_err("empty");
    assert!(matches!(err, ChartError::InsufficientData { required: 1, .. }));

    let series = Series::from_values(&[1.0]).expect("series");
    let err = project_bars(&series, Viewport::new(100, 100), 1.0).expect_err("gap 1");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn bars_reject_range_wider_than_f64() {
    let series = Series::from_values(&[-1e308, 1.5e308]).expect("finite series");
    let err = project_bars(&series, Viewport::new(100, 100), 0.0).expect_err("span overflows");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn bars_near_f64_limits_stay_finite() {
    let series = Series::from_values(&[1e308, 1.7e308]).expect("series");
    let bars = project_bars(&series, Viewport::new(100, 100), 0.0).expect("project");
    assert!(bars.iter().all(|bar| bar.height.is_finite() && bar.y.is_finite()));
}
