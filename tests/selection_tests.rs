use filmscope_rs::api::{
    BrushRect, Metric, PointEmphasis, SelectionPhase, SelectionState, point_emphasis, table_rows,
};
use filmscope_rs::core::{PlotArea, PlotMargins, ScaleMap, Viewport};
use filmscope_rs::data::{RawRow, RawValue, normalize, Record};

fn film(title: &str, year: &str, rating: &str, runtime: &str) -> Record {
    let row: RawRow = [
        ("title", title),
        ("year", year),
        ("rating", rating),
        ("runtime", runtime),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_owned(), RawValue::Str(value.to_owned())))
    .collect();
    normalize(&row)
}

fn fixture() -> (Vec<Record>, ScaleMap) {
    let records = vec![
        film("A", "1988", "8.1", "86"),
        film("B", "1989", "7.5", "102"),
        film("C", "1992", "7.7", "94"),
    ];
    let area = PlotArea::new(Viewport::new(980, 520), PlotMargins::default()).expect("area");
    let scales = ScaleMap::fit(&records, |r| r.runtime, |r| r.rating, area).expect("fit");
    (records, scales)
}

#[test]
fn commit_selects_points_inside_the_rectangle() {
    let (records, scales) = fixture();
    let mut selection = SelectionState::default();

    let (ax, ay) = scales
        .project(&records[0], |r| r.runtime, |r| r.rating)
        .expect("project");

    let rect = BrushRect::new(ax - 5.0, ay - 5.0, ax + 5.0, ay + 5.0);
    let selected = selection
        .commit_brush(Some(rect), &records, &scales, Metric::Runtime)
        .expect("commit");

    assert_eq!(selection.phase(), SelectionPhase::Selected);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].title.as_deref(), Some("A"));
    assert!(selection.contains(&records[0]));
    assert!(!selection.contains(&records[1]));
}

#[test]
fn brush_boundary_is_inclusive_on_all_four_edges() {
    let (records, scales) = fixture();
    let (px, py) = scales
        .project(&records[1], |r| r.runtime, |r| r.rating)
        .expect("project");

    // The point's projected coordinates sit exactly on x0/y0 of the rect.
    let mut selection = SelectionState::default();
    selection
        .commit_brush(
            Some(BrushRect::new(px, py, px + 50.0, py + 50.0)),
            &records,
            &scales,
            Metric::Runtime,
        )
        .expect("commit");
    assert!(selection.contains(&records[1]));

    // And exactly on x1/y1.
    let mut selection = SelectionState::default();
    selection
        .commit_brush(
            Some(BrushRect::new(px - 50.0, py - 50.0, px, py)),
            &records,
            &scales,
            Metric::Runtime,
        )
        .expect("commit");
    assert!(selection.contains(&records[1]));
}

#[test]
fn reversed_drag_direction_selects_the_same_region() {
    let (records, scales) = fixture();
    let (px, py) = scales
        .project(&records[2], |r| r.runtime, |r| r.rating)
        .expect("project");

    let mut forward = SelectionState::default();
    forward
        .commit_brush(
            Some(BrushRect::new(px - 3.0, py - 3.0, px + 3.0, py + 3.0)),
            &records,
            &scales,
            Metric::Runtime,
        )
        .expect("commit");

    let mut reversed = SelectionState::default();
    reversed
        .commit_brush(
            Some(BrushRect::new(px + 3.0, py + 3.0, px - 3.0, py - 3.0)),
            &records,
            &scales,
            Metric::Runtime,
        )
        .expect("commit");

    assert_eq!(forward, reversed);
}

#[test]
fn null_rectangle_clears_the_selection() {
    let (records, scales) = fixture();
    let mut selection = SelectionState::default();
    selection
        .commit_brush(
            Some(BrushRect::new(-1e6, -1e6, 1e6, 1e6)),
            &records,
            &scales,
            Metric::Runtime,
        )
        .expect("commit");
    assert!(!selection.is_empty());

    let selected = selection
        .commit_brush(None, &records, &scales, Metric::Runtime)
        .expect("commit none");
    assert!(selected.is_empty());
    assert_eq!(selection.phase(), SelectionPhase::Idle);
    assert!(selection.is_empty());
    assert!(selection.committed_rect().is_none());
}

#[test]
fn clearing_restores_baseline_emphasis_and_empties_the_table() {
    let (records, scales) = fixture();
    let mut selection = SelectionState::default();
    selection
        .commit_brush(
            Some(BrushRect::new(-1e6, -1e6, 1e6, 1e6)),
            &records,
            &scales,
            Metric::Runtime,
        )
        .expect("commit");
    assert_eq!(point_emphasis(&selection, &records[0]), PointEmphasis::SELECTED);
    assert!(!table_rows(&selection, &records).is_empty());

    selection.clear();
    for record in &records {
        assert_eq!(point_emphasis(&selection, record), PointEmphasis::BASELINE);
    }
    assert!(table_rows(&selection, &records).is_empty());
}

#[test]
fn brushing_phase_is_transient_with_no_committed_effect() {
    let mut selection = SelectionState::default();
    selection.begin_brush();
    assert_eq!(selection.phase(), SelectionPhase::Brushing);
    assert!(selection.is_empty());

    // Mid-drag, emphasis stays at baseline.
    let (records, _) = fixture();
    assert_eq!(point_emphasis(&selection, &records[0]), PointEmphasis::BASELINE);
}

#[test]
fn selection_identity_is_by_key_not_by_geometry() {
    let (records, scales) = fixture();
    let mut selection = SelectionState::default();
    let (px, py) = scales
        .project(&records[0], |r| r.runtime, |r| r.rating)
        .expect("project");
    selection
        .commit_brush(
            Some(BrushRect::new(px - 1.0, py - 1.0, px + 1.0, py + 1.0)),
            &records,
            &scales,
            Metric::Runtime,
        )
        .expect("commit");

    // A clone of the same film (same title and year) is considered selected
    // even though it was never inside the rectangle: membership lives on the
    // title+year key, and duplicate pairs collide.
    let twin = film("A", "1988", "2.0", "200");
    assert!(selection.contains(&twin));
}
