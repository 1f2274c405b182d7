//! Headless walkthrough of the marker timeline.
//!
//! Adds a few markers to a 20 second, 1000 px timeline, drags one of them
//! across its limits and logs every notification. Run with
//! `RUST_LOG=timeline_markers=debug` to see the state machine transitions.

use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use timeline_markers::logging::init_logging;
use timeline_markers::{
    FixedHost, HeadlessFactory, MarkerConfig, MarkerPatch, MarkerSpec, MarkerTimeline,
    PointerEvent, TextPosition, TimelineSignal,
};
use tracing::info;

fn main() -> Result<()> {
    init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            MarkerConfig::load(&path).with_context(|| format!("loading config from {path}"))?
        }
        None => MarkerConfig::default(),
    };

    let factory = HeadlessFactory::default();
    let mut timeline =
        MarkerTimeline::with_config(FixedHost::new(20.0, 1000.0), factory.clone(), config)
            .with_initial_markers([
                MarkerSpec::at(0.0).with_id("start").with_label("Start"),
                MarkerSpec::at(20.0)
                    .with_id("end")
                    .with_label("End")
                    .with_text_position(TextPosition::Left),
            ]);

    timeline.on_any(|event| {
        info!(
            event = event.kind.name(),
            marker = event.marker.id.as_deref().unwrap_or("-"),
            time = format!("{:.2}", event.marker.time),
            "notification"
        );
    });

    timeline.handle_signal(TimelineSignal::BackendReady);
    timeline.handle_signal(TimelineSignal::Ready);

    let chorus = timeline
        .add(
            MarkerSpec::at(8.0)
                .with_id("chorus")
                .with_label("Chorus")
                .draggable()
                .with_limits(Some(5.0), Some(12.0)),
        )
        .context("adding draggable marker")?;

    let start = Instant::now();
    let at = |ms: u64| start + Duration::from_millis(ms);

    timeline.press(chorus, &PointerEvent::new(400.0, 0.0, at(0)));
    for (i, x) in [420.0, 500.0, 600.0, 700.0, 800.0].into_iter().enumerate() {
        timeline.pointer_move(&PointerEvent::new(x, 0.0, at(20 * (i as u64 + 1))));
    }
    timeline.release(&PointerEvent::new(800.0, 0.0, at(120)));
    timeline.tick();

    timeline.update_by_id("start", MarkerPatch::new().label("Intro"))?;

    for (key, marker) in timeline.markers() {
        info!(
            key = key.raw(),
            id = marker.id.as_deref().unwrap_or("-"),
            time = marker.time,
            "marker"
        );
    }
    for record in factory.records().iter().filter(|r| !r.released) {
        if let Some(placement) = record.placement {
            info!(
                label = record.style.label.as_deref().unwrap_or("-"),
                left = format!("{:.1}", placement.left),
                "placement"
            );
        }
    }

    timeline.destroy();
    Ok(())
}
