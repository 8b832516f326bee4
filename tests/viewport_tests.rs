use gasbag::{SimulationConfig, Vec2, Viewport};

fn sample_points() -> Vec<Vec2<f64>> {
    let mut points = Vec::new();
    for i in -4..=4 {
        for j in -4..=4 {
            points.push(Vec2::new(i as f64 * 123.25, j as f64 * -77.5));
        }
    }
    points.push(Vec2::new(500.0, -500.0));
    points.push(Vec2::new(0.001, 499.999));
    points
}

#[test]
fn round_trip_any_scale() {
    for &scale in &[0.25, 0.6, 0.8, 1.0, 1.7, 3.0, 12.5] {
        let vp = Viewport::new(500.0f64, scale).unwrap();
        for p in sample_points() {
            let back = vp.to_simulation_space(vp.to_screen_space(p));
            assert!((back.x - p.x).abs() < 1e-9, "scale {} point {:?} -> {:?}", scale, p, back);
            assert!((back.y - p.y).abs() < 1e-9, "scale {} point {:?} -> {:?}", scale, p, back);
        }
    }
}

#[test]
fn round_trip_from_display_side() {
    let vp = Viewport::fit_window(500.0f32, 720.0).unwrap();
    for &(x, y) in &[(0.0f32, 0.0), (360.0, 360.0), (719.0, 3.5), (12.25, 700.0)] {
        let q = Vec2::new(x, y);
        let back = vp.to_screen_space(vp.to_simulation_space(q));
        assert!((back.x - q.x).abs() < 1e-3, "{:?} -> {:?}", q, back);
        assert!((back.y - q.y).abs() < 1e-3, "{:?} -> {:?}", q, back);
    }
}

#[test]
fn display_y_points_down() {
    let vp = Viewport::fit_window(500.0f32, 500.0).unwrap();
    let high = vp.to_screen_space(Vec2::new(0.0, 400.0));
    let low = vp.to_screen_space(Vec2::new(0.0, -400.0));
    assert!(high.y < low.y);
    assert_eq!(vp.to_screen_length(5.0), 2.5);
}

#[test]
fn config_viewport_fits_window() {
    let config: SimulationConfig<f32> = SimulationConfig::new().with_window_length(800.0);
    let vp = config.viewport().unwrap();
    let corner = vp.to_screen_space(Vec2::new(500.0, -500.0));
    assert!((corner.x - 800.0).abs() < 1e-3);
    assert!((corner.y - 800.0).abs() < 1e-3);
}
