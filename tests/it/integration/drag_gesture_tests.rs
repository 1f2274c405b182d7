//! Press/move/release gesture tests.

use crate::helpers::{key_at, time_of, Clock, EventRecorder, TestTimelineBuilder};
use timeline_markers::{
    DragOutcome, HeadlessFactory, MarkerConfig, MarkerError, MarkerEventKind, MarkerPatch,
    MarkerSpec, MarkerTimeline, PointerEvent, TimelineHost, TimelineSignal,
};

/// Host whose pointer mapping is broken.
struct NanHost;

impl TimelineHost for NanHost {
    fn duration(&self) -> f64 {
        20.0
    }

    fn visible_width(&self) -> f64 {
        1000.0
    }

    fn pointer_fraction(&self, _event: &PointerEvent) -> f64 {
        f64::NAN
    }
}

#[test]
fn test_five_moves_in_200ms() {
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(5.0).with_id("a").draggable())
        .build();
    let recorder = EventRecorder::attach(&mut timeline);
    let clock = Clock::new();
    let key = key_at(&timeline, 0);

    timeline.press(key, &clock.pointer(250.0, 0));
    for (x, ms) in [(300.0, 10), (350.0, 60), (400.0, 100), (450.0, 150), (500.0, 200)] {
        timeline.pointer_move(&clock.pointer(x, ms));
    }
    timeline.release(&clock.pointer(500.0, 210));

    use MarkerEventKind::{Drag, Drop};
    assert_eq!(recorder.kinds(), vec![Drag, Drag, Drag, Drag, Drop]);
    assert_eq!(time_of(&timeline, key), 10.0);
}

#[test]
fn test_throttle_bound_for_any_spacing() {
    for spacing in [1, 10, 25, 40, 49] {
        let (mut timeline, _) = TestTimelineBuilder::new()
            .with_marker(MarkerSpec::at(5.0).draggable())
            .build();
        let recorder = EventRecorder::attach(&mut timeline);
        let clock = Clock::new();
        let key = key_at(&timeline, 0);

        timeline.press(key, &clock.pointer(250.0, 0));
        for i in 1..=5u64 {
            timeline.pointer_move(&clock.pointer(250.0 + i as f64 * 10.0, i * spacing));
        }
        timeline.release(&clock.pointer(300.0, 5 * spacing));

        let kinds = recorder.kinds();
        let drags = recorder.count(MarkerEventKind::Drag);
        assert_eq!(kinds.first(), Some(&MarkerEventKind::Drag), "spacing {spacing}");
        assert_eq!(kinds.last(), Some(&MarkerEventKind::Drop), "spacing {spacing}");
        assert_eq!(recorder.count(MarkerEventKind::Drop), 1);
        assert!((1..=4).contains(&drags), "spacing {spacing}: {drags} drags");
    }
}

#[test]
fn test_visual_tracks_every_move() {
    let (mut timeline, factory) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(5.0).draggable())
        .build();
    let clock = Clock::new();
    let key = key_at(&timeline, 0);
    let placements_before = factory.records()[0].placements;

    timeline.press(key, &clock.pointer(250.0, 0));
    timeline.pointer_move(&clock.pointer(300.0, 1));
    timeline.pointer_move(&clock.pointer(310.0, 2));
    timeline.pointer_move(&clock.pointer(320.0, 3));

    let record = &factory.records()[0];
    assert_eq!(record.placements, placements_before + 3);
    // 320px of 1000px at 20s = 6.4s; pointer centered (offset 5)
    assert_eq!(record.placement.unwrap().left, 315.0);
}

#[test]
fn test_drag_is_clamped_to_limits() {
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(8.0).draggable().with_limits(Some(5.0), Some(12.0)))
        .build();
    let recorder = EventRecorder::attach(&mut timeline);
    let clock = Clock::new();
    let key = key_at(&timeline, 0);

    timeline.press(key, &clock.pointer(400.0, 0));
    timeline.pointer_move(&clock.pointer(0.0, 10));
    assert_eq!(time_of(&timeline, key), 5.0);

    timeline.pointer_move(&clock.pointer(900.0, 100));
    assert_eq!(time_of(&timeline, key), 12.0);

    timeline.release(&clock.pointer(2000.0, 200));
    assert_eq!(time_of(&timeline, key), 12.0);

    for event in recorder.events() {
        assert!((5.0..=12.0).contains(&event.marker.time));
    }
}

#[test]
fn test_press_release_without_move_drops_once() {
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(5.0).draggable())
        .build();
    let recorder = EventRecorder::attach(&mut timeline);
    let clock = Clock::new();
    let key = key_at(&timeline, 0);

    timeline.press(key, &clock.pointer(250.0, 0));
    let outcome = timeline.release(&clock.pointer(250.0, 5));

    assert_eq!(outcome, DragOutcome::Dropped { key, time: 5.0 });
    assert_eq!(recorder.kinds(), vec![MarkerEventKind::Drop]);

    // The next gesture starts from a clean slate
    timeline.tick();
    recorder.clear();
    timeline.press(key, &clock.pointer(250.0, 100));
    timeline.pointer_move(&clock.pointer(300.0, 110));
    timeline.release(&clock.pointer(300.0, 120));
    assert_eq!(
        recorder.kinds(),
        vec![MarkerEventKind::Drag, MarkerEventKind::Drop]
    );
}

#[test]
fn test_release_without_selection_is_noop() {
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(5.0).draggable())
        .build();
    let recorder = EventRecorder::attach(&mut timeline);
    let clock = Clock::new();

    assert_eq!(timeline.pointer_move(&clock.pointer(10.0, 0)), DragOutcome::Ignored);
    assert_eq!(timeline.release(&clock.pointer(10.0, 1)), DragOutcome::Ignored);
    assert!(recorder.events().is_empty());
    assert_eq!(time_of(&timeline, key_at(&timeline, 0)), 5.0);
}

#[test]
fn test_non_draggable_press_clicks() {
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(3.0).with_id("plain"))
        .build();
    let recorder = EventRecorder::attach(&mut timeline);
    let clock = Clock::new();
    let key = key_at(&timeline, 0);

    assert_eq!(timeline.press(key, &clock.pointer(150.0, 0)), DragOutcome::Click(key));
    let events = recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, MarkerEventKind::Click);
    assert_eq!(events[0].marker.id.as_deref(), Some("plain"));

    // Moves after a click don't drag anything
    timeline.pointer_move(&clock.pointer(500.0, 10));
    assert_eq!(time_of(&timeline, key), 3.0);
}

#[test]
fn test_click_racing_a_drop_is_suppressed() {
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(5.0).draggable())
        .with_marker(MarkerSpec::at(10.0))
        .build();
    let recorder = EventRecorder::attach(&mut timeline);
    let clock = Clock::new();
    let dragged = key_at(&timeline, 0);
    let plain = key_at(&timeline, 1);

    timeline.press(dragged, &clock.pointer(250.0, 0));
    timeline.pointer_move(&clock.pointer(500.0, 10));
    timeline.release(&clock.pointer(500.0, 20));

    // Same tick as the release
    assert_eq!(timeline.press(plain, &clock.pointer(500.0, 20)), DragOutcome::Ignored);
    assert!(timeline.drag_state().is_settling());

    assert!(timeline.tick());
    assert!(timeline.drag_state().is_idle());
    assert_eq!(timeline.press(plain, &clock.pointer(500.0, 30)), DragOutcome::Click(plain));

    use MarkerEventKind::{Click, Drag, Drop};
    assert_eq!(recorder.kinds(), vec![Drag, Drop, Click]);
}

#[test]
fn test_second_marker_press_ignored_during_drag() {
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(5.0).draggable())
        .with_marker(MarkerSpec::at(15.0).draggable())
        .build();
    let clock = Clock::new();
    let first = key_at(&timeline, 0);
    let second = key_at(&timeline, 1);

    timeline.press(first, &clock.pointer(250.0, 0));
    timeline.pointer_move(&clock.pointer(300.0, 10));
    assert_eq!(timeline.press(second, &clock.pointer(750.0, 20)), DragOutcome::Ignored);

    timeline.pointer_move(&clock.pointer(400.0, 30));
    assert_eq!(time_of(&timeline, first), 8.0);
    assert_eq!(time_of(&timeline, second), 15.0);
}

#[test]
fn test_release_outside_timeline_ends_gesture() {
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(5.0).draggable())
        .build();
    let clock = Clock::new();
    let key = key_at(&timeline, 0);

    timeline.press(key, &clock.pointer(250.0, 0));
    timeline.pointer_move(&clock.pointer(600.0, 10));
    timeline.release(&clock.pointer(-400.0, 20));

    assert_eq!(time_of(&timeline, key), 0.0);
    assert!(timeline.drag_state().selected_marker().is_none());
}

#[test]
fn test_degenerate_geometry_still_ends_gesture() {
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(5.0).draggable())
        .build();
    let recorder = EventRecorder::attach(&mut timeline);
    let clock = Clock::new();
    let key = key_at(&timeline, 0);

    timeline.press(key, &clock.pointer(250.0, 0));
    timeline.host_mut().duration = 0.0;

    assert_eq!(timeline.pointer_move(&clock.pointer(600.0, 10)), DragOutcome::Ignored);
    assert_eq!(
        timeline.release(&clock.pointer(600.0, 20)),
        DragOutcome::Dropped { key, time: 5.0 }
    );
    assert_eq!(recorder.kinds(), vec![MarkerEventKind::Drop]);
    assert_eq!(time_of(&timeline, key), 5.0);
}

#[test]
fn test_removing_dragged_marker_cancels_gesture() {
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(5.0).draggable())
        .build();
    let recorder = EventRecorder::attach(&mut timeline);
    let clock = Clock::new();
    let key = key_at(&timeline, 0);

    timeline.press(key, &clock.pointer(250.0, 0));
    timeline.pointer_move(&clock.pointer(300.0, 10));
    assert!(timeline.remove(0));

    assert!(timeline.drag_state().is_idle());
    assert_eq!(timeline.release(&clock.pointer(300.0, 20)), DragOutcome::Ignored);
    assert_eq!(recorder.count(MarkerEventKind::Drop), 0);
}

#[test]
fn test_custom_throttle_interval() {
    let config = MarkerConfig {
        drag_throttle_ms: 0,
        ..MarkerConfig::default()
    };
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_config(config)
        .with_marker(MarkerSpec::at(5.0).draggable())
        .build();
    let recorder = EventRecorder::attach(&mut timeline);
    let clock = Clock::new();
    let key = key_at(&timeline, 0);

    timeline.press(key, &clock.pointer(250.0, 0));
    for ms in 1..=5 {
        timeline.pointer_move(&clock.pointer(260.0, ms));
    }
    assert_eq!(recorder.count(MarkerEventKind::Drag), 5);
}

#[test]
fn test_inverted_limits_pin_when_accepted() {
    let config = MarkerConfig {
        reject_inverted_limits: false,
        ..MarkerConfig::default()
    };
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_config(config)
        .with_marker(MarkerSpec::at(3.0).draggable().with_limits(Some(6.0), Some(4.0)))
        .build();
    let clock = Clock::new();
    let key = key_at(&timeline, 0);

    timeline.press(key, &clock.pointer(150.0, 0));
    timeline.pointer_move(&clock.pointer(800.0, 10));
    assert_eq!(time_of(&timeline, key), 4.0);
    timeline.pointer_move(&clock.pointer(0.0, 100));
    assert_eq!(time_of(&timeline, key), 6.0);
}

#[test]
fn test_negative_or_non_finite_limits_rejected() {
    let (mut timeline, _) = TestTimelineBuilder::new().build();

    assert!(matches!(
        timeline.add(MarkerSpec::at(5.0).draggable().with_limits(None, Some(-1.0))),
        Err(MarkerError::InvalidLimit(v)) if v == -1.0
    ));
    assert!(matches!(
        timeline.add(MarkerSpec::at(5.0).draggable().with_limits(Some(f64::NAN), None)),
        Err(MarkerError::InvalidLimit(_))
    ));
    assert!(timeline.is_empty());

    // Bad bounds are refused even when inverted limits are tolerated
    let config = MarkerConfig {
        reject_inverted_limits: false,
        ..MarkerConfig::default()
    };
    let (mut lenient, _) = TestTimelineBuilder::new().with_config(config).build();
    assert!(lenient
        .add(MarkerSpec::at(5.0).with_limits(None, Some(f64::NEG_INFINITY)))
        .is_err());
}

#[test]
fn test_update_cannot_install_negative_limit() {
    let (mut timeline, _) = TestTimelineBuilder::new()
        .with_marker(MarkerSpec::at(5.0).with_id("m").draggable())
        .build();
    let clock = Clock::new();
    let key = key_at(&timeline, 0);

    assert!(matches!(
        timeline.update_by_id("m", MarkerPatch::new().limits(None, Some(-1.0))),
        Err(MarkerError::InvalidLimit(_))
    ));
    assert_eq!(timeline.marker(key).unwrap().upper_limit, None);

    timeline.press(key, &clock.pointer(250.0, 0));
    timeline.pointer_move(&clock.pointer(300.0, 10));
    timeline.release(&clock.pointer(300.0, 20));
    assert!(time_of(&timeline, key) >= 0.0);
}

#[test]
fn test_nan_pointer_keeps_marker_in_place() {
    let factory = HeadlessFactory::new(10.0, 0.0);
    let mut timeline = MarkerTimeline::new(NanHost, factory);
    timeline.handle_signal(TimelineSignal::BackendReady);
    let key = timeline
        .add(MarkerSpec::at(5.0).draggable().with_limits(Some(2.0), Some(8.0)))
        .unwrap();
    let clock = Clock::new();

    timeline.press(key, &clock.pointer(250.0, 0));
    assert_eq!(
        timeline.pointer_move(&clock.pointer(300.0, 10)),
        DragOutcome::Ignored
    );
    assert_eq!(
        timeline.release(&clock.pointer(300.0, 20)),
        DragOutcome::Dropped { key, time: 5.0 }
    );

    let time = timeline.marker(key).unwrap().time;
    assert!((2.0..=8.0).contains(&time));
    assert_eq!(time, 5.0);
}
