//! Running opacity tweens, sampled against an explicit clock.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::element::ElementId;
use crate::transitions::{Easing, TransitionConfig};

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    to: f32,
    /// When interpolation begins, after any delay.
    begins: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.begins);
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }

    fn sample(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    fn ends(&self) -> Instant {
        self.begins + self.duration
    }
}

/// Opacity tweens keyed by element.
#[derive(Debug, Default)]
pub struct AnimationState {
    tweens: HashMap<ElementId, Tween>,
    reduced_motion: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip tweens entirely; values jump to their targets.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled {
            self.tweens.clear();
        }
    }

    /// Tween `id` from the displayed value `from` to `to`. Replaces any tween
    /// already running for the element.
    pub fn start(
        &mut self,
        id: ElementId,
        from: f32,
        to: f32,
        config: TransitionConfig,
        now: Instant,
    ) {
        if self.reduced_motion || from == to || config.total().is_zero() {
            self.tweens.remove(&id);
            return;
        }
        let tween = Tween {
            from,
            to,
            begins: now + config.delay,
            duration: config.duration,
            easing: config.easing,
        };
        self.tweens.insert(id, tween);
    }

    /// Displayed value at `now`, or `None` once the tween is over (or there
    /// never was one).
    pub fn value_at(&self, id: ElementId, now: Instant) -> Option<f32> {
        let tween = self.tweens.get(&id)?;
        (now < tween.ends()).then(|| tween.sample(now))
    }

    pub fn has_active_transitions(&self, now: Instant) -> bool {
        self.tweens.values().any(|t| now < t.ends())
    }

    /// Forget finished tweens.
    pub fn prune(&mut self, now: Instant) {
        self.tweens.retain(|_, t| now < t.ends());
    }

    pub fn forget(&mut self, id: ElementId) {
        self.tweens.remove(&id);
    }
}
