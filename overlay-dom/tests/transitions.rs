use std::time::{Duration, Instant};

use overlay_dom::animation::AnimationState;
use overlay_dom::{Color, Document, Easing, Rgb, TransitionConfig, Transitions};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_in_out_is_symmetric() {
    assert_eq!(Easing::EaseInOut.apply(0.0), 0.0);
    assert_eq!(Easing::EaseInOut.apply(1.0), 1.0);
    assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);

    let early = Easing::EaseInOut.apply(0.2);
    let late = Easing::EaseInOut.apply(0.8);
    assert!((early + late - 1.0).abs() < 1e-3);
}

#[test]
fn test_easing_ease_front_loads_progress() {
    assert_eq!(Easing::default(), Easing::Ease);
    assert!(Easing::Ease.apply(0.5) > 0.75);
    assert!(Easing::EaseIn.apply(0.5) < 0.5);
    assert!(Easing::EaseOut.apply(0.5) > 0.5);
}

#[test]
fn test_cubic_bezier_matches_keywords() {
    let custom = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);
    for step in 1..10 {
        let t = step as f32 / 10.0;
        assert!((custom.apply(t) - Easing::EaseInOut.apply(t)).abs() < 1e-5);
    }
    // Straight line control points degenerate to linear
    let straight = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
    assert!((straight.apply(0.3) - 0.3).abs() < 1e-3);
}

#[test]
fn test_easing_is_monotonic() {
    for easing in [Easing::Ease, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
        let mut previous = 0.0;
        for step in 0..=50 {
            let value = easing.apply(step as f32 / 50.0);
            assert!(value + 1e-5 >= previous, "{easing:?} at step {step}");
            previous = value;
        }
    }
}

#[test]
fn test_easing_clamps_progress() {
    for easing in [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(-1.0), 0.0);
        assert_eq!(easing.apply(2.0), 1.0);
    }
}

// =============================================================================
// Opacity transitions
// =============================================================================

fn faded_element(doc: &mut Document) -> overlay_dom::ElementId {
    let body = doc.body();
    let el = doc.create_element("div");
    doc.append_child(body, el);
    doc.get_mut(el).unwrap().transitions =
        Transitions::new().opacity(Duration::from_millis(300), Easing::Linear);
    doc.inline_style_mut(el).unwrap().opacity = Some(0.0);
    el
}

#[test]
fn test_opacity_transitions_towards_target() {
    let mut doc = Document::new(10.0, 10.0);
    let el = faded_element(&mut doc);
    let start = Instant::now();

    doc.set_opacity(el, 1.0, start);
    assert_eq!(doc.opacity_at(el, start), Some(0.0));

    let mid = doc.opacity_at(el, start + Duration::from_millis(150)).unwrap();
    assert!((mid - 0.5).abs() < 0.01);
    assert!(doc.has_active_transitions(start + Duration::from_millis(150)));

    assert_eq!(doc.opacity_at(el, start + Duration::from_millis(300)), Some(1.0));
    assert!(!doc.has_active_transitions(start + Duration::from_millis(300)));
}

#[test]
fn test_opacity_retargets_from_displayed_value() {
    let mut doc = Document::new(10.0, 10.0);
    let el = faded_element(&mut doc);
    let start = Instant::now();

    doc.set_opacity(el, 1.0, start);
    let halfway = start + Duration::from_millis(150);
    doc.set_opacity(el, 0.0, halfway);

    let value = doc.opacity_at(el, halfway).unwrap();
    assert!((value - 0.5).abs() < 0.01);
    let later = doc.opacity_at(el, halfway + Duration::from_millis(150)).unwrap();
    assert!((later - 0.25).abs() < 0.01);
}

#[test]
fn test_opacity_transition_waits_for_delay() {
    let mut doc = Document::new(10.0, 10.0);
    let el = faded_element(&mut doc);
    let config = TransitionConfig::new(Duration::from_millis(100), Easing::Linear)
        .with_delay(Duration::from_millis(50));
    doc.get_mut(el).unwrap().transitions = Transitions::new().opacity_config(config);
    let start = Instant::now();

    doc.set_opacity(el, 1.0, start);
    assert_eq!(doc.opacity_at(el, start + Duration::from_millis(40)), Some(0.0));
    let value = doc.opacity_at(el, start + Duration::from_millis(100)).unwrap();
    assert!((value - 0.5).abs() < 0.01);
    assert_eq!(doc.opacity_at(el, start + Duration::from_millis(150)), Some(1.0));
}

#[test]
fn test_opacity_without_transition_is_immediate() {
    let mut doc = Document::new(10.0, 10.0);
    let body = doc.body();
    let el = doc.create_element("div");
    doc.append_child(body, el);
    let now = Instant::now();

    doc.set_opacity(el, 0.25, now);
    assert_eq!(doc.opacity_at(el, now), Some(0.25));
}

#[test]
fn test_reduced_motion_completes_instantly() {
    let mut state = AnimationState::new();
    let mut doc = Document::new(10.0, 10.0);
    let el = faded_element(&mut doc);
    let now = Instant::now();

    state.set_reduced_motion(true);
    state.start(
        el,
        0.0,
        1.0,
        TransitionConfig::new(Duration::from_millis(300), Easing::Linear),
        now,
    );
    assert_eq!(state.value_at(el, now), None);
}

// =============================================================================
// Colors
// =============================================================================

#[test]
fn test_color_over_extremes() {
    let backdrop = Rgb::new(10, 20, 30);
    assert_eq!(Color::TRANSPARENT.over(backdrop), backdrop);
    assert_eq!(Color::WHITE.over(backdrop), Rgb::new(255, 255, 255));
}

#[test]
fn test_color_over_blends_between() {
    let blended = Color::rgba(0, 0, 0, 0.5).over(Rgb::new(255, 255, 255));
    assert!(blended.r > 0 && blended.r < 255);
    assert_eq!(blended.r, blended.g);
    assert_eq!(blended.g, blended.b);
}

#[test]
fn test_color_fade_scales_alpha() {
    let color = Color::rgba(1, 2, 3, 0.5).fade(0.5);
    assert_eq!(color.a, 0.25);
    assert_eq!(Color::WHITE.fade(2.0).a, 1.0);
}

#[test]
fn test_color_mix_endpoints() {
    let a = Color::rgba(0, 0, 0, 0.3);
    let b = Color::rgba(140, 140, 140, 0.5);
    assert_eq!(a.mix(b, 0.0), a);

    let end = a.mix(b, 1.0);
    assert_eq!((end.r, end.g, end.b), (140, 140, 140));
    assert!((end.a - 0.5).abs() < 1e-6);
}
