use chart_motion::ChartError;
use chart_motion::core::{PathCommand, PlotPoint, line_path, smooth_path};

#[test]
fn line_path_renders_svg_d() {
    let path = line_path(&[
        PlotPoint::new(0.0, 0.0),
        PlotPoint::new(10.5, -3.26),
        PlotPoint::new(20.0, -0.0001),
    ])
    .expect("path");
    assert_eq!(path.to_svg_d(1), "M0 0 L10.5 -3.3 L20 0");
}

#[test]
fn line_path_rejects_empty_points() {
    let err = line_path(&[]).expect_err("empty");
    assert!(matches!(err, ChartError::InsufficientData { .. }));
}

#[test]
fn smooth_path_passes_through_every_point() {
    let points = [
        PlotPoint::new(0.0, 50.0),
        PlotPoint::new(25.0, 10.0),
        PlotPoint::new(50.0, 40.0),
        PlotPoint::new(75.0, 0.0),
    ];
    let path = smooth_path(&points, 1.0).expect("path");
    let commands = path.commands();
    assert_eq!(commands.len(), points.len());
    assert_eq!(commands[0], PathCommand::MoveTo { to: points[0] });

    for (command, point) in commands[1..].iter().zip(&points[1..]) {
        match command {
            PathCommand::CubicTo { to, .. } => assert_eq!(to, point),
            other => panic!("expected cubic segment, got {other:?}"),
        }
    }

    // Interior tangent at points[1] is (p2 - p0) / 6.
    let PathCommand::CubicTo { control1, .. } = commands[2] else {
        panic!("expected cubic segment");
    };
    assert!((control1.x - (25.0 + 50.0 / 6.0)).abs() <= 1e-9);
    assert!((control1.y - (10.0 - 10.0 / 6.0)).abs() <= 1e-9);
}

#[test]
fn zero_tension_degenerates_to_straight_segments() {
    let points = [PlotPoint::new(0.0, 0.0), PlotPoint::new(10.0, 10.0)];
    let path = smooth_path(&points, 0.0).expect("path");
    assert_eq!(
        path.commands()[1],
        PathCommand::CubicTo {
            control1: points[0],
            control2: points[1],
            to: points[1],
        }
    );
}

#[test]
fn smooth_path_rejects_bad_input() {
    let points = [PlotPoint::new(0.0, 0.0), PlotPoint::new(10.0, 10.0)];
    assert!(matches!(
        smooth_path(&points, 1.5).expect_err("tension"),
        ChartError::InvalidData(_)
    ));
    assert!(matches!(
        smooth_path(&points[..1], 0.5).expect_err("one point"),
        ChartError::InsufficientData { required: 2, actual: 1 }
    ));
}

#[test]
fn path_json_uses_tagged_commands() {
    let path = line_path(&[PlotPoint::new(1.0, 2.0)]).expect("path");
    let json = serde_json::to_value(&path).expect("json");
    assert_eq!(json["commands"][0]["kind"], "move_to");
    assert_eq!(json["commands"][0]["to"]["x"], 1.0);
}
