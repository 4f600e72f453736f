//! CSS-style transition settings: duration, delay and timing function.

use std::time::Duration;

/// Newton iterations before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;
const EPSILON: f32 = 1e-6;

/// A CSS timing function.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// `ease`, the CSS default.
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`; x control points are clamped to [0, 1].
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    fn control_points(self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Easing::Linear => None,
            Easing::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                Some((x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2))
            }
        }
    }

    /// Map linear progress to eased progress. Input is clamped to [0, 1]
    /// and the endpoints are exact.
    pub fn apply(self, progress: f32) -> f32 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        match self.control_points() {
            None => progress,
            Some((x1, y1, x2, y2)) => {
                let x = Bezier::new(x1, x2);
                let y = Bezier::new(y1, y2);
                y.sample(x.solve(progress))
            }
        }
    }
}

/// One axis of a cubic Bézier anchored at 0 and 1.
#[derive(Debug, Clone, Copy)]
struct Bezier {
    a: f32,
    b: f32,
    c: f32,
}

impl Bezier {
    fn new(p1: f32, p2: f32) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self { a: 1.0 - c - b, b, c }
    }

    fn sample(&self, t: f32) -> f32 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn slope(&self, t: f32) -> f32 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }

    /// Parameter `t` at which this axis reaches `value`.
    fn solve(&self, value: f32) -> f32 {
        let mut t = value;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.sample(t) - value;
            if err.abs() < EPSILON {
                return t;
            }
            let slope = self.slope(t);
            if slope.abs() < EPSILON {
                break;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = value;
        while lo < hi {
            let x = self.sample(t);
            if (x - value).abs() < EPSILON {
                break;
            }
            if x < value {
                lo = t;
            } else {
                hi = t;
            }
            let next = (lo + hi) / 2.0;
            if next == t {
                break;
            }
            t = next;
        }
        t
    }
}

/// `transition: <duration> <easing> <delay>` for one property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay plus duration.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

/// Transitioned properties of an element. Only opacity animates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transitions {
    pub opacity: Option<TransitionConfig>,
}

impl Transitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, duration: Duration, easing: Easing) -> Self {
        self.opacity = Some(TransitionConfig::new(duration, easing));
        self
    }

    pub fn opacity_config(mut self, config: TransitionConfig) -> Self {
        self.opacity = Some(config);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.opacity.is_none()
    }
}
