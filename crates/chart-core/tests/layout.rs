// File: crates/chart-core/tests/layout.rs
// Purpose: Layout engine properties: bounds, point mapping, path continuity, gridlines, labels.

use chart_core::{
    compute_bounds, connecting_path, connecting_path_with, gridlines, label_layout, marker_geometry, plot_points,
    Bounds, ChartLayout, GapPolicy, LayoutConfig, Measurement, PathCommand, Point, Series, Size, StepWidth,
};

fn ys(points: &[Option<Point>]) -> Vec<Option<f64>> {
    points.iter().map(|p| p.map(|p| p.y)).collect()
}

#[test]
fn worked_example_maps_min_to_bottom_and_max_to_top() {
    let s = Series::from_values([Some(20.0), Some(40.0), Some(60.0)]);
    assert_eq!(compute_bounds(&s), Bounds::new(20.0, 60.0));
    let pts = plot_points(&s, 140.0, 40.0);
    assert_eq!(ys(&pts), vec![Some(140.0), Some(70.0), Some(0.0)]);
    let xs: Vec<f64> = pts.iter().flatten().map(|p| p.x).collect();
    assert_eq!(xs, vec![20.0, 60.0, 100.0]);
}

#[test]
fn bounds_default_to_zero_without_values() {
    assert_eq!(compute_bounds(&Series::new()), Bounds::new(0.0, 0.0));
    assert_eq!(compute_bounds(&Series::from_values([None, None])), Bounds::new(0.0, 0.0));
}

#[test]
fn bounds_ignore_reference_entries() {
    let s = Series::from_measurements(vec![
        Measurement::measure(Some(10.0)),
        Measurement::target(Some(500.0)),
        Measurement::initial(Some(-50.0)),
        Measurement::measure(Some(30.0)),
    ]);
    assert_eq!(compute_bounds(&s), Bounds::new(10.0, 30.0));
}

#[test]
fn one_entry_per_measure_with_gaps_in_place() {
    let s = Series::from_measurements(vec![
        Measurement::measure(Some(1.0)),
        Measurement::measure(None),
        Measurement::target(Some(2.0)),
        Measurement::measure(Some(3.0)),
    ]);
    let pts = plot_points(&s, 100.0, 40.0);
    assert_eq!(pts.len(), 3);
    assert!(pts[1].is_none());
    // A gap does not shift later columns.
    assert_eq!(pts[2].map(|p| p.x), Some(100.0));
}

#[test]
fn flat_series_sits_on_midline() {
    for values in [vec![Some(7.0)], vec![Some(3.0), None, Some(3.0), Some(3.0)]] {
        let pts = plot_points(&Series::from_values(values), 90.0, 40.0);
        assert!(pts.iter().flatten().all(|p| p.y == 45.0));
    }
}

#[test]
fn higher_values_plot_higher() {
    let values = [Some(5.0), Some(93.2), None, Some(41.0), Some(41.0), Some(0.5), Some(77.7)];
    let pts = plot_points(&Series::from_values(values), 120.0, 40.0);
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            if let (Some(a), Some(b), Some(pa), Some(pb)) = (a, b, pts[i], pts[j]) {
                if a > b {
                    assert!(pa.y <= pb.y, "{a} at y={} should be above {b} at y={}", pa.y, pb.y);
                }
            }
        }
    }
}

#[test]
fn path_bridges_a_gap_with_one_segment() {
    let pts = plot_points(&Series::from_values([Some(10.0), None, Some(30.0)]), 100.0, 40.0);
    let path = connecting_path(&pts);
    // A move to the first point plus one line to the third.
    assert_eq!(path.commands().len(), 2);
    let segs = path.segments();
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].from.x, 20.0);
    assert_eq!(segs[0].to.x, 100.0);
    assert_eq!(path.subpath_count(), 1);
}

#[test]
fn path_first_point_is_move_rest_are_lines() {
    let pts = plot_points(&Series::from_values([None, Some(1.0), Some(2.0), Some(3.0)]), 100.0, 40.0);
    let cmds = connecting_path(&pts).commands().to_vec();
    assert_eq!(cmds.len(), 3);
    assert!(matches!(cmds[0], PathCommand::MoveTo(_)));
    assert!(cmds[1..].iter().all(|c| matches!(c, PathCommand::LineTo(_))));
}

#[test]
fn break_policy_leaves_gap_open() {
    let pts = plot_points(&Series::from_values([Some(10.0), Some(20.0), None, Some(30.0), Some(40.0)]), 100.0, 40.0);
    let path = connecting_path_with(&pts, GapPolicy::Break);
    assert_eq!(path.subpath_count(), 2);
    assert_eq!(path.segments().len(), 2);
}

#[test]
fn huge_finite_bounds_do_not_produce_nan() {
    let pts = plot_points(&Series::from_values([Some(-1e308), Some(0.0), Some(1e308)]), 80.0, 40.0);
    assert!(pts.iter().flatten().all(|p| p.y == 40.0));
}

#[test]
fn markers_skip_gaps() {
    let pts = plot_points(&Series::from_values([Some(1.0), None, Some(2.0)]), 100.0, 40.0);
    let markers = marker_geometry(&pts, 5.0);
    assert_eq!(markers.len(), 2);
    assert!(markers.iter().all(|m| m.radius == 5.0));
}

#[test]
fn gridlines_bracket_every_column() {
    assert_eq!(gridlines(5, 40.0, 140.0).len(), 6);
}

#[test]
fn labels_centre_under_points() {
    let s = Series::from_values([Some(20.0), None, Some(60.0)]);
    let pts = plot_points(&s, 140.0, 40.0);
    let labels = label_layout(&pts, &s.measure_labels(), 40.0, 11.0);
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].text, "20.0");
    assert_eq!(labels[0].origin, Point::new(0.0, 151.0));
    assert_eq!(labels[1].text, "60.0");
    assert_eq!(labels[1].center_x(), 100.0);
    assert_eq!(labels[1].origin.y, 11.0);
}

#[test]
fn chart_layout_offsets_plot_area_by_half_padding() {
    let s = Series::from_values([Some(20.0), Some(40.0), Some(60.0)]);
    let layout = ChartLayout::compute(&s, Size::new(300.0, 140.0), &LayoutConfig::default());
    assert_eq!(layout.step_width, 40.0);
    assert_eq!(layout.content_size, Size::new(120.0, 140.0));
    assert_eq!(layout.plot_area.top, 30.0);
    assert_eq!(layout.plot_area.height, 80.0);
    assert_eq!(ys(&layout.points), vec![Some(110.0), Some(70.0), Some(30.0)]);
    assert_eq!(layout.gridlines.len(), 4);
    assert_eq!(layout.gridlines[0].to.y, 140.0);
    assert_eq!(layout.top_border.to.x, 120.0);
    assert_eq!(layout.markers.len(), 3);
    assert_eq!(layout.labels.len(), 3);
    assert_eq!(layout.newest_anchor, Some(3));
}

#[test]
fn chart_layout_resolves_visible_columns() {
    let s = Series::from_values((0..20).map(|i| Some(i as f64)));
    let cfg = LayoutConfig::default().with_step(StepWidth::VisibleColumns(10));
    let layout = ChartLayout::compute(&s, Size::new(250.0, 140.0), &cfg);
    assert_eq!(layout.step_width, 25.0);
    assert_eq!(layout.content_size.width, 500.0);
    assert_eq!(layout.column_at(30.0), Some(1));
}

#[test]
fn chart_layout_uses_default_height_when_container_has_none() {
    let s = Series::from_values([Some(1.0), Some(2.0)]);
    let layout = ChartLayout::compute(&s, Size::new(100.0, 0.0), &LayoutConfig::default());
    assert_eq!(layout.content_size.height, 140.0);
}

#[test]
fn empty_series_lays_out_without_geometry() {
    let layout = ChartLayout::compute(&Series::new(), Size::new(320.0, 140.0), &LayoutConfig::default());
    assert!(layout.points.is_empty());
    assert!(layout.path.is_empty());
    assert!(layout.labels.is_empty());
    assert_eq!(layout.gridlines.len(), 1);
    assert_eq!(layout.newest_anchor, None);
    assert_eq!(layout.initial_line, None);
}
