use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

use log::{debug, trace};

use crate::dom::{Dom, MaxHeight};
use crate::transitions::{Direction, Keyframes, TransitionConfig};

/// A single in-flight panel transition.
#[derive(Debug, Clone, Copy)]
struct HeightAnimation {
    direction: Direction,
    keyframes: Keyframes,
    start: Instant,
    config: TransitionConfig,
}

impl HeightAnimation {
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        if self.config.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
        }
    }

    fn height_at(&self, now: Instant) -> f32 {
        self.keyframes
            .at(self.config.easing.apply(self.progress(now)))
    }
}

/// Drives panel height transitions.
///
/// At most one animation runs per panel. Starting a new one on a panel that
/// is still moving replaces it: the new animation begins at the panel's
/// current interpolated height and the replaced animation never settles.
#[derive(Debug)]
pub struct Animator<N> {
    active: HashMap<N, HeightAnimation>,
    config: TransitionConfig,
    /// Reduced motion flag - when true, transitions settle instantly.
    reduced_motion: bool,
}

impl<N> Default for Animator<N> {
    fn default() -> Self {
        Self {
            active: HashMap::new(),
            config: TransitionConfig::default(),
            reduced_motion: false,
        }
    }
}

impl<N: Copy + Eq + Hash + std::fmt::Debug> Animator<N> {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn config(&self) -> TransitionConfig {
        self.config
    }

    pub fn has_active_animations(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn is_animating(&self, panel: N) -> bool {
        self.active.contains_key(&panel)
    }

    /// Direction of the panel's in-flight animation, if any.
    pub fn direction(&self, panel: N) -> Option<Direction> {
        self.active.get(&panel).map(|a| a.direction)
    }

    /// Interpolated height of an in-flight animation.
    pub fn height_at(&self, panel: N, now: Instant) -> Option<f32> {
        self.active.get(&panel).map(|a| a.height_at(now))
    }

    /// Start moving `panel` in `direction`. A missing panel is a no-op.
    pub fn start<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        panel: Option<N>,
        direction: Direction,
        now: Instant,
    ) {
        let Some(panel) = panel else { return };

        // Content may have changed since the last toggle, so always measure.
        let natural = dom.natural_height(panel);
        let mut keyframes = Keyframes::for_direction(direction, natural);

        if let Some(existing) = self.active.remove(&panel) {
            keyframes.from = existing.height_at(now);
            debug!(
                "restarting {:?} on {:?} from {:.1}px (was {:?})",
                direction, panel, keyframes.from, existing.direction
            );
        }

        if self.reduced_motion {
            Self::settle(dom, panel, direction);
            return;
        }

        debug!(
            "animating {:?} {:?}: {:.1}px -> {:.1}px",
            panel, direction, keyframes.from, keyframes.to
        );
        dom.set_max_height(panel, MaxHeight::Px(keyframes.from));
        self.active.insert(
            panel,
            HeightAnimation {
                direction,
                keyframes,
                start: now,
                config: self.config,
            },
        );
    }

    /// Advance every in-flight animation to `now`, writing the interpolated
    /// height and settling the ones that have finished. Returns the number
    /// of animations settled.
    pub fn tick<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D, now: Instant) -> usize {
        let mut finished = Vec::new();
        for (panel, animation) in &self.active {
            if animation.progress(now) >= 1.0 {
                finished.push((*panel, animation.direction));
            } else {
                let height = animation.height_at(now);
                trace!("frame {:?}: {:.1}px", panel, height);
                dom.set_max_height(*panel, MaxHeight::Px(height));
            }
        }

        for (panel, direction) in &finished {
            self.active.remove(panel);
            Self::settle(dom, *panel, *direction);
        }
        finished.len()
    }

    /// Settle every in-flight animation immediately.
    pub fn finish_all<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D) {
        for (panel, animation) in self.active.drain() {
            Self::settle(dom, panel, animation.direction);
        }
    }

    /// Completion step: a collapsed panel stays pinned at zero, an expanded
    /// panel loses its cap so it can follow later content changes.
    fn settle<D: Dom<Node = N> + ?Sized>(dom: &mut D, panel: N, direction: Direction) {
        let resting = match direction {
            Direction::Collapse => MaxHeight::Px(0.0),
            Direction::Expand => MaxHeight::None,
        };
        debug!("settled {:?} {:?}", panel, direction);
        dom.set_max_height(panel, resting);
    }
}
