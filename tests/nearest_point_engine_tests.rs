use std::cell::Cell;
use std::rc::Rc;

use chart_nearest::api::{NearestPointEngine, NearestPointEngineConfig, NearestPointMap};
use chart_nearest::core::{
    ChartScale, CoordinateScale, DataPoint, NeighborTieBreak, PixelPoint, SeriesStore, Viewport,
};
use chart_nearest::extensions::FnListener;
use chart_nearest::interaction::{PointerEvent, PointerPosition, SurfaceRect};
use chart_nearest::{ChartError, ChartResult};

/// Pixel and domain coordinates coincide.
struct IdentityScale;

impl CoordinateScale for IdentityScale {
    fn invert(&self, pixel_x: f64) -> ChartResult<f64> {
        Ok(pixel_x)
    }

    fn project(&self, point: DataPoint) -> ChartResult<PixelPoint> {
        Ok(PixelPoint::new(point.x, point.y))
    }
}

struct BrokenScale;

impl CoordinateScale for BrokenScale {
    fn invert(&self, _pixel_x: f64) -> ChartResult<f64> {
        Err(ChartError::InvalidData("degenerate scale".to_owned()))
    }

    fn project(&self, _point: DataPoint) -> ChartResult<PixelPoint> {
        Err(ChartError::InvalidData("degenerate scale".to_owned()))
    }
}

fn identity_engine(
    width: u32,
    catalog: SeriesStore,
) -> NearestPointEngine<IdentityScale, SurfaceRect, SeriesStore> {
    NearestPointEngine::new(
        IdentityScale,
        SurfaceRect::at_origin(Viewport::new(width, 100)),
        catalog,
    )
}

fn attach_counter(
    engine: &mut NearestPointEngine<IdentityScale, SurfaceRect, SeriesStore>,
) -> Rc<Cell<usize>> {
    let counter = Rc::new(Cell::new(0));
    let sink = counter.clone();
    engine
        .register_listener(Box::new(FnListener::new(
            "counter",
            move |_: &NearestPointMap| sink.set(sink.get() + 1),
        )))
        .expect("register listener");
    counter
}

#[test]
fn selects_domain_nearest_neighbor() {
    let mut catalog = SeriesStore::new();
    let line = catalog
        .add_series(
            "line",
            vec![
                DataPoint::new(0.0, 0.0),
                DataPoint::new(10.0, 5.0),
                DataPoint::new(20.0, 1.0),
            ],
        )
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    engine.on_pointer_move(9.0, 40.0);

    assert_eq!(engine.nearest_points().point(line), Some(DataPoint::new(10.0, 5.0)));
    let hit = engine.nearest_points().get(line).expect("hit");
    assert_eq!(hit.pixel, PixelPoint::new(10.0, 5.0));
    assert_eq!(hit.series_type, "line");
}

#[test]
fn pointer_on_exact_sample_selects_that_sample() {
    let mut catalog = SeriesStore::new();
    let line = catalog
        .add_series(
            "line",
            vec![
                DataPoint::new(0.0, 0.0),
                DataPoint::new(10.0, 5.0),
                DataPoint::new(20.0, 1.0),
            ],
        )
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    engine.on_pointer_move(10.0, 0.0);

    assert_eq!(engine.nearest_points().point(line), Some(DataPoint::new(10.0, 5.0)));
}

#[test]
fn equidistant_neighbors_keep_lower_x_by_default() {
    let mut catalog = SeriesStore::new();
    let line = catalog
        .add_series("line", vec![DataPoint::new(10.0, 1.0), DataPoint::new(20.0, 2.0)])
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    engine.on_pointer_move(15.0, 0.0);
    assert_eq!(engine.nearest_points().point(line), Some(DataPoint::new(10.0, 1.0)));

    engine.set_config(
        NearestPointEngineConfig::new().with_neighbor_tie_break(NeighborTieBreak::PreferUpper),
    );
    assert_eq!(engine.nearest_points().point(line), Some(DataPoint::new(20.0, 2.0)));
}

#[test]
fn empty_and_hidden_series_are_absent() {
    let mut catalog = SeriesStore::new();
    let empty = catalog.add_series("line", Vec::new()).expect("add series");
    let hidden = catalog
        .add_series("bar", vec![DataPoint::new(30.0, 1.0)])
        .expect("add series");
    catalog.set_visible(hidden, false).expect("hide");
    let mut engine = identity_engine(100, catalog);

    engine.on_pointer_move(30.0, 0.0);

    assert!(!engine.nearest_points().contains(empty));
    assert!(!engine.nearest_points().contains(hidden));
    assert!(engine.nearest_points().is_empty());
}

#[test]
fn pointer_leave_clears_result() {
    let mut catalog = SeriesStore::new();
    catalog
        .add_series("line", vec![DataPoint::new(30.0, 1.0)])
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    engine.on_pointer_move(31.0, 0.0);
    assert_eq!(engine.nearest_points().len(), 1);

    engine.on_pointer_leave();
    assert!(engine.nearest_points().is_empty());
    assert_eq!(engine.pointer(), PointerPosition::Absent);
}

#[test]
fn same_type_keeps_only_pixel_closest_series() {
    let mut catalog = SeriesStore::new();
    let far = catalog
        .add_series("line", vec![DataPoint::new(10.0, 1.0)])
        .expect("add series");
    let near = catalog
        .add_series("line", vec![DataPoint::new(30.0, 1.0)])
        .expect("add series");
    let other_type = catalog
        .add_series("bar", vec![DataPoint::new(10.0, 2.0)])
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    engine.on_pointer_move(25.0, 0.0);

    let nearest = engine.nearest_points();
    assert!(!nearest.contains(far));
    assert_eq!(nearest.point(near), Some(DataPoint::new(30.0, 1.0)));
    assert_eq!(nearest.point(other_type), Some(DataPoint::new(10.0, 2.0)));
    assert_eq!(nearest.len(), 2);
}

#[test]
fn equal_pixel_distance_keeps_first_series_of_type() {
    let mut catalog = SeriesStore::new();
    let first = catalog
        .add_series("line", vec![DataPoint::new(20.0, 1.0)])
        .expect("add series");
    let second = catalog
        .add_series("line", vec![DataPoint::new(30.0, 1.0)])
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    engine.on_pointer_move(25.0, 0.0);

    assert!(engine.nearest_points().contains(first));
    assert!(!engine.nearest_points().contains(second));
}

#[test]
fn projection_outside_surface_is_never_selected() {
    let mut catalog = SeriesStore::new();
    let edge = catalog
        .add_series("line", vec![DataPoint::new(0.0, 1.0), DataPoint::new(50.0, 1.0)])
        .expect("add series");
    let beyond = catalog
        .add_series("bar", vec![DataPoint::new(120.0, 1.0)])
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    // Domain-nearest sample of `edge` projects to x == 0, which is excluded.
    engine.on_pointer_move(1.0, 0.0);
    assert!(!engine.nearest_points().contains(edge));
    assert!(!engine.nearest_points().contains(beyond));

    engine.on_pointer_move(99.0, 0.0);
    assert!(!engine.nearest_points().contains(beyond));
    assert_eq!(engine.nearest_points().point(edge), Some(DataPoint::new(50.0, 1.0)));
}

#[test]
fn out_of_range_winner_does_not_block_other_series_of_type() {
    let mut catalog = SeriesStore::new();
    let outside = catalog
        .add_series("line", vec![DataPoint::new(150.0, 1.0)])
        .expect("add series");
    let inside = catalog
        .add_series("line", vec![DataPoint::new(60.0, 1.0)])
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    engine.on_pointer_move(95.0, 0.0);

    assert!(!engine.nearest_points().contains(outside));
    assert!(engine.nearest_points().contains(inside));
}

#[test]
fn recompute_is_idempotent() {
    let mut catalog = SeriesStore::new();
    catalog
        .add_series("line", vec![DataPoint::new(10.0, 1.0), DataPoint::new(40.0, 3.0)])
        .expect("add series");
    catalog
        .add_series("bar", vec![DataPoint::new(35.0, 2.0)])
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    engine.on_pointer_move(33.0, 0.0);
    let first = engine.nearest_points().clone();
    engine.recompute();

    assert_eq!(engine.nearest_points(), &first);
    assert_eq!(engine.recompute_count(), 2);
}

#[test]
fn every_operation_notifies_exactly_once() {
    let mut catalog = SeriesStore::new();
    catalog
        .add_series("line", vec![DataPoint::new(10.0, 1.0)])
        .expect("add series");
    let mut engine = identity_engine(100, catalog);
    let counter = attach_counter(&mut engine);

    engine.on_pointer_move(12.0, 0.0);
    assert_eq!(counter.get(), 1);
    engine.on_upstream_update();
    assert_eq!(counter.get(), 2);
    engine.on_pointer_leave();
    assert_eq!(counter.get(), 3);
    // Leaving twice still notifies.
    engine.handle_pointer_event(PointerEvent::Left);
    assert_eq!(counter.get(), 4);
    assert_eq!(engine.recompute_count(), 4);
}

#[test]
fn upstream_update_uses_current_pointer() {
    let mut catalog = SeriesStore::new();
    let line = catalog
        .add_series("line", vec![DataPoint::new(10.0, 1.0)])
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    engine.on_pointer_move(48.0, 0.0);
    assert_eq!(engine.nearest_points().point(line), Some(DataPoint::new(10.0, 1.0)));

    engine
        .catalog_mut()
        .append_point(line, DataPoint::new(50.0, 4.0))
        .expect("append");
    engine.on_upstream_update();
    assert_eq!(engine.nearest_points().point(line), Some(DataPoint::new(50.0, 4.0)));
}

#[test]
fn upstream_update_without_pointer_stays_empty() {
    let mut catalog = SeriesStore::new();
    catalog
        .add_series("line", vec![DataPoint::new(10.0, 1.0)])
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    engine.on_upstream_update();

    assert!(engine.nearest_points().is_empty());
    assert_eq!(engine.recompute_count(), 1);
}

#[test]
fn client_coordinates_are_translated_to_surface() {
    let mut catalog = SeriesStore::new();
    let line = catalog
        .add_series("line", vec![DataPoint::new(20.0, 1.0), DataPoint::new(60.0, 1.0)])
        .expect("add series");
    let surface = SurfaceRect::new(200.0, 80.0, Viewport::new(100, 100));
    let mut engine = NearestPointEngine::new(IdentityScale, surface, catalog);

    engine.on_client_pointer_move(255.0, 120.0);

    assert_eq!(
        engine.pointer(),
        PointerPosition::Present { x: 55.0, y: 40.0 }
    );
    assert_eq!(engine.nearest_points().point(line), Some(DataPoint::new(60.0, 1.0)));
}

#[test]
fn surface_resize_changes_visible_range_filter() {
    let mut catalog = SeriesStore::new();
    let line = catalog
        .add_series("line", vec![DataPoint::new(80.0, 1.0)])
        .expect("add series");
    let mut engine = identity_engine(100, catalog);

    engine.on_pointer_move(70.0, 0.0);
    assert!(engine.nearest_points().contains(line));

    engine.surface_mut().set_viewport(Viewport::new(75, 100));
    engine.on_upstream_update();
    assert!(!engine.nearest_points().contains(line));
}

#[test]
fn scale_failure_yields_empty_result_and_still_notifies() {
    let mut catalog = SeriesStore::new();
    catalog
        .add_series("line", vec![DataPoint::new(10.0, 1.0)])
        .expect("add series");
    let mut engine = NearestPointEngine::new(
        BrokenScale,
        SurfaceRect::at_origin(Viewport::new(100, 100)),
        catalog,
    );
    let notified = Rc::new(Cell::new(false));
    let sink = notified.clone();
    engine
        .register_listener(Box::new(FnListener::new("flag", move |map: &NearestPointMap| {
            sink.set(map.is_empty());
        })))
        .expect("register listener");

    engine.on_pointer_move(10.0, 0.0);

    assert!(engine.nearest_points().is_empty());
    assert!(notified.get());
}

#[test]
fn chart_scale_drives_selection_after_range_change() {
    let viewport = Viewport::new(128, 64);
    let scale = ChartScale::new(viewport, (0.0, 128.0), (0.0, 64.0)).expect("scale");
    let mut catalog = SeriesStore::new();
    let line = catalog
        .add_series(
            "line",
            vec![
                DataPoint::new(16.0, 8.0),
                DataPoint::new(64.0, 32.0),
                DataPoint::new(192.0, 8.0),
            ],
        )
        .expect("add series");
    let mut engine = NearestPointEngine::new(scale, SurfaceRect::at_origin(viewport), catalog);

    engine.on_pointer_move(60.0, 10.0);
    let hit = engine.nearest_points().get(line).expect("hit");
    assert_eq!(hit.point, DataPoint::new(64.0, 32.0));
    assert_eq!(hit.pixel, PixelPoint::new(64.0, 32.0));

    // Doubling the time span halves pixel x: pointer 60 now inverts to 120.
    engine
        .scale_mut()
        .set_time_range(0.0, 256.0)
        .expect("time range");
    engine.on_upstream_update();
    let hit = engine.nearest_points().get(line).expect("hit");
    assert_eq!(hit.point, DataPoint::new(64.0, 32.0));
    assert_eq!(hit.pixel, PixelPoint::new(32.0, 32.0));

    engine.on_pointer_move(100.0, 10.0);
    let hit = engine.nearest_points().get(line).expect("hit");
    assert_eq!(hit.point, DataPoint::new(192.0, 8.0));
    assert_eq!(hit.pixel, PixelPoint::new(96.0, 56.0));
}
