mod common;

use common::{approx_eq, renderer, rng, Op, Recorder};
use fog_wasm::blob::{BLUE_BLOBS, GREEN_BLOBS};
use fog_wasm::color::Color;
use fog_wasm::{Composite, FogConfig, FogRenderer, PageLayout, Rect, Size, Viewport};

fn layout() -> PageLayout {
    PageLayout {
        content: Rect::new(360.0, 300.0, 1200.0, 500.0),
        top_bar_bottom: Some(56.0),
    }
}

#[test]
fn init_sizes_surface_and_builds_noise() {
    let fog = renderer(Recorder::default(), Viewport::new(1920.0, 1080.0, 1.0), 1);
    assert_eq!(fog.state().scale, 2.0);
    assert_eq!(fog.surface().buffer, (3840, 2160));
    assert_eq!(fog.surface().ops, vec![Op::Configure(Size::new(1920.0, 1080.0), 2.0)]);
    assert_eq!(fog.noise_edge(), 256);
    assert_eq!(fog.surface().patterns_built, 1);
    assert_eq!(fog.blue().len(), BLUE_BLOBS);
    assert_eq!(fog.green().len(), GREEN_BLOBS);
}

#[test]
fn frame_follows_compositing_pipeline() {
    let mut fog = renderer(Recorder::default(), Viewport::new(1920.0, 1080.0, 1.0), 7);
    fog.surface_mut().ops.clear();
    fog.render_frame(&layout()).unwrap();
    let ops = &fog.surface().ops;

    let full = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let below_bar = Rect::new(0.0, 56.0, 1920.0, 1024.0);

    assert_eq!(ops[0], Op::Clear(full));
    assert_eq!(ops[1], Op::Save);
    assert_eq!(ops[2], Op::Clip(below_bar));
    assert_eq!(ops[3], Op::Composite(Composite::SourceOver));
    let Op::FillRect(rect, base) = &ops[4] else {
        panic!("expected background fill, got {:?}", ops[4]);
    };
    assert_eq!(*rect, full);
    assert_eq!(base.outer_radius, 1920.0);
    assert!(approx_eq(base.inner_radius, 1920.0 * 1.2 * 0.02, 1e-9));
    assert_eq!(base.stops[0].color, Color::rgba(0, 0, 0, 0.62));
    assert_eq!(base.stops[1].color, Color::rgba(0, 0, 0, 1.0));

    assert_eq!(ops[5], Op::Composite(Composite::Screen));
    assert_eq!(ops[6], Op::Save);
    assert_eq!(ops[7], Op::Alpha(0.05));
    let blue_end = 8 + BLUE_BLOBS;
    assert!(ops[8..blue_end].iter().all(|op| matches!(op, Op::FillCircle(..))));
    assert_eq!(ops[blue_end], Op::Restore);
    assert_eq!(ops[blue_end + 1], Op::Save);
    assert_eq!(ops[blue_end + 2], Op::Alpha(0.1));
    let green_end = blue_end + 3 + GREEN_BLOBS;
    assert!(ops[blue_end + 3..green_end].iter().all(|op| matches!(op, Op::FillCircle(..))));
    assert_eq!(ops[green_end], Op::Restore);

    let tail = &ops[green_end + 1..];
    assert_eq!(tail[0], Op::Save);
    assert_eq!(tail[1], Op::Composite(Composite::DestinationIn));
    let Op::FillRect(_, mask) = &tail[2] else {
        panic!("expected mask fill, got {:?}", tail[2]);
    };
    assert!(approx_eq(mask.outer_radius, 1920.0 * 1.2, 1e-9));
    assert!(approx_eq(mask.inner_radius, 1920.0 * 1.2 * 0.18, 1e-9));
    assert_eq!(
        &tail[3..],
        &[
            Op::Restore,
            Op::Save,
            Op::Composite(Composite::SoftLight),
            Op::Alpha(0.06),
            Op::FillPattern(below_bar, 256),
            Op::Restore,
            Op::Restore,
        ]
    );

    let saves = ops.iter().filter(|op| **op == Op::Save).count();
    let restores = ops.iter().filter(|op| **op == Op::Restore).count();
    assert_eq!(saves, restores);
}

#[test]
fn blobs_orbit_focal_point() {
    let mut fog = renderer(Recorder::default(), Viewport::new(1000.0, 800.0, 1.0), 3);
    let before = fog.blue().blobs()[0].clone();
    fog.surface_mut().ops.clear();
    fog.render_frame(&layout()).unwrap();

    let Op::FillCircle(at, radius, gradient) = &fog.surface().ops[8] else {
        panic!("expected first blue blob");
    };
    // focal y: max(56 + 20, min(300 + 150, 800 * 0.38))
    let (fx, fy) = (500.0, 304.0);
    let theta = before.theta + before.omega;
    let r = before.base_radius + before.noise_phase.sin() * before.noise_amp;
    assert!(approx_eq(at.x, fx + theta.cos() * r, 1e-9));
    assert!(approx_eq(at.y, fy + theta.sin() * r, 1e-9));
    assert_eq!(*radius, before.visible_radius);
    assert_eq!(gradient.stops[0].color, Color::hsla(before.hue, 100.0, 60.0, 0.7));
    assert_eq!(gradient.stops[1].offset, 0.55);
}

#[test]
fn angles_and_time_advance_per_frame() {
    let mut fog = renderer(Recorder::default(), Viewport::new(1280.0, 720.0, 1.0), 11);
    let initial: Vec<_> = fog.green().blobs().iter().map(|b| (b.theta, b.omega)).collect();
    for _ in 0..50 {
        fog.render_frame(&layout()).unwrap();
    }
    for ((theta0, omega), blob) in initial.iter().zip(fog.green().blobs()) {
        assert!(approx_eq(blob.theta, theta0 + 50.0 * omega, 1e-9));
    }
    assert!(approx_eq(fog.time(), 50.0 * 0.0045, 1e-12));
}

#[test]
fn same_seed_same_motion() {
    let viewport = Viewport::new(1440.0, 900.0, 2.0);
    let mut a = renderer(Recorder::default(), viewport, 99);
    let mut b = renderer(Recorder::default(), viewport, 99);
    a.surface_mut().ops.clear();
    b.surface_mut().ops.clear();
    for _ in 0..3 {
        a.render_frame(&layout()).unwrap();
        b.render_frame(&layout()).unwrap();
    }
    assert_eq!(a.surface().ops, b.surface().ops);
    assert_eq!(a.blue().blobs(), b.blue().blobs());
}

#[test]
fn resize_then_render_uses_new_dimensions() {
    let mut fog = renderer(Recorder::default(), Viewport::new(1920.0, 1080.0, 1.0), 5);
    fog.on_resize(Viewport::new(800.0, 600.0, 2.0)).unwrap();
    assert_eq!(fog.state().scale, 4.0);
    assert_eq!(fog.surface().buffer, (3200, 2400));
    assert_eq!(fog.noise_edge(), 512);
    assert_eq!(fog.surface().patterns_built, 2);

    fog.surface_mut().ops.clear();
    fog.render_frame(&PageLayout::default()).unwrap();
    assert_eq!(fog.surface().ops[0], Op::Clear(Rect::new(0.0, 0.0, 800.0, 600.0)));
    // Without a top bar the clip covers the whole viewport.
    assert_eq!(fog.surface().ops[2], Op::Clip(Rect::new(0.0, 0.0, 800.0, 600.0)));
    assert_eq!(fog.blue().len(), BLUE_BLOBS);
}

#[test]
fn missing_pattern_skips_dither() {
    let surface = Recorder {
        without_patterns: true,
        ..Recorder::default()
    };
    let mut fog = renderer(surface, Viewport::new(640.0, 480.0, 1.0), 2);
    fog.render_frame(&layout()).unwrap();
    let ops = &fog.surface().ops;
    assert!(!ops.iter().any(|op| matches!(op, Op::FillPattern(..))));
    assert!(!ops.contains(&Op::Composite(Composite::SoftLight)));
}

#[test]
fn surface_error_stops_frame() {
    let surface = Recorder {
        fail_on_circle: true,
        ..Recorder::default()
    };
    let viewport = Viewport::new(640.0, 480.0, 1.0);
    let mut fog = FogRenderer::new(surface, viewport, FogConfig::default(), rng(4)).unwrap();
    let err = fog.render_frame(&layout()).unwrap_err();
    assert_eq!(err, "circle rejected");
    assert_eq!(fog.time(), 0.0);
}

#[test]
fn config_time_step_is_used() {
    let config = FogConfig {
        time_step: 0.5,
        ..FogConfig::default()
    };
    let viewport = Viewport::new(640.0, 480.0, 1.0);
    let mut fog = FogRenderer::new(Recorder::default(), viewport, config, rng(8)).unwrap();
    fog.render_frame(&layout()).unwrap();
    fog.render_frame(&layout()).unwrap();
    assert_eq!(fog.time(), 1.0);
}
