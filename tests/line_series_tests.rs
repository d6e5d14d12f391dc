use chart_motion::ChartError;
use chart_motion::core::{PlotMapping, Series, Viewport, project_line};

#[test]
fn line_projection_rejects_short_series() {
    let viewport = Viewport::new(800, 600);

    let empty = Series::from_values(&[]).expect("series");
    let err = project_line(&empty, viewport, 0.0).expect_err("empty must fail");
    assert!(matches!(
        err,
        ChartError::InsufficientData {
            required: 2,
            actual: 0
        }
    ));

    let single = Series::from_values(&[10.0]).expect("series");
    let err = project_line(&single, viewport, 0.0).expect_err("single point must fail");
    assert!(matches!(
        err,
        ChartError::InsufficientData {
            required: 2,
            actual: 1
        }
    ));
}

#[test]
fn line_projection_is_deterministic() {
    let viewport = Viewport::new(1000, 500);
    let series = Series::from_values(&[0.0, 50.0, 100.0]).expect("series");

    let points = project_line(&series, viewport, 0.0).expect("project");
    assert_eq!(points.len(), 3);

    assert!((points[0].x - 0.0).abs() <= 1e-9);
    assert!((points[0].y - 500.0).abs() <= 1e-9);
    assert!((points[1].x - 500.0).abs() <= 1e-9);
    assert!((points[1].y - 250.0).abs() <= 1e-9);
    assert!((points[2].x - 1000.0).abs() <= 1e-9);
    assert!((points[2].y - 0.0).abs() <= 1e-9);

    let again = project_line(&series, viewport, 0.0).expect("project again");
    assert_eq!(points, again);
}

#[test]
fn vertical_inset_keeps_extremes_off_the_edges() {
    let viewport = Viewport::new(1000, 500);
    let series = Series::from_values(&[0.0, 50.0, 100.0]).expect("series");

    let points = project_line(&series, viewport, 0.2).expect("project");
    // inset 0.2 reserves 50px above the max and 50px below the min.
    assert!((points[0].y - 450.0).abs() <= 1e-9);
    assert!((points[1].y - 250.0).abs() <= 1e-9);
    assert!((points[2].y - 50.0).abs() <= 1e-9);
}

#[test]
fn max_maps_to_top_and_min_to_bottom() {
    let viewport = Viewport::new(320, 80);
    let series =
        Series::from_labeled([("Jan", 12.0), ("Feb", 30.0), ("Mar", -4.0), ("Apr", 18.0)])
            .expect("series");

    let points = project_line(&series, viewport, 0.1).expect("project");
    let top = points
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.y.total_cmp(&b.1.y))
        .map(|(index, _)| index)
        .expect("top");
    let bottom = points
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.y.total_cmp(&b.1.y))
        .map(|(index, _)| index)
        .expect("bottom");

    assert_eq!(top, 1);
    assert_eq!(bottom, 2);
}

#[test]
fn constant_series_projects_flat_line() {
    let viewport = Viewport::new(200, 100);
    let series = Series::from_values(&[7.0; 6]).expect("series");

    let points = project_line(&series, viewport, 0.2).expect("flat series must not fail");
    assert_eq!(points.len(), 6);
    let first_y = points[0].y;
    assert!(first_y.is_finite());
    for point in &points {
        assert_eq!(point.y, first_y);
    }
    assert!((first_y - 90.0).abs() <= 1e-9);
}

#[test]
fn projection_preserves_input_order() {
    let viewport = Viewport::new(300, 100);
    let series = Series::from_values(&[3.0, 1.0, 2.0, 5.0]).expect("series");

    let points = project_line(&series, viewport, 0.0).expect("project");
    for pair in points.windows(2) {
        assert!(pair[0].x < pair[1].x);
    }
    assert!((points[0].x - 0.0).abs() <= 1e-9);
    assert!((points[3].x - 300.0).abs() <= 1e-9);
}

#[test]
fn projected_y_extents_recover_series_range() {
    let viewport = Viewport::new(640, 240);
    let series = Series::from_values(&[120.5, 98.0, 143.25, 101.0, 130.0]).expect("series");
    let inset = 0.15;

    let points = project_line(&series, viewport, inset).expect("project");
    let mapping = PlotMapping::for_series(&series, viewport, inset).expect("mapping");

    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    approx::assert_abs_diff_eq!(mapping.y_to_value(min_y), 143.25, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(mapping.y_to_value(max_y), 98.0, epsilon = 1e-9);
}

#[test]
fn line_projection_rejects_invalid_viewport() {
    let series = Series::from_values(&[1.0, 2.0]).expect("series");
    let err = project_line(&series, Viewport::new(100, 0), 0.0).expect_err("zero height");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn line_projection_rejects_range_wider_than_f64() {
    let series = Series::from_values(&[-f64::MAX, 0.0, f64::MAX]).expect("finite series");
    let err = project_line(&series, Viewport::new(100, 100), 0.0).expect_err("span overflows");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn line_projection_stays_finite_near_f64_limits() {
    let series = Series::from_values(&[-f64::MAX / 2.0, 0.0, f64::MAX / 2.0]).expect("series");
    let points = project_line(&series, Viewport::new(100, 100), 0.0).expect("project");
    assert!(points.iter().all(|point| point.is_finite()));
    assert!((points[2].y - 0.0).abs() <= 1e-9);
    assert!((points[0].y - 100.0).abs() <= 1e-9);
}
